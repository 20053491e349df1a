/// Euclidean gcd on rounded magnitudes. `gcd(0, x) == x`; `gcd(0, 0) == 0`.
pub(crate) fn gcd_rounded(a: f64, b: f64) -> u64 {
    let mut a = round_magnitude(a);
    let mut b = round_magnitude(b);
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

fn round_magnitude(v: f64) -> u64 {
    if !v.is_finite() {
        return 0;
    }
    // Saturates for absurd magnitudes, which only affects the revolution count.
    v.abs().round().min(u64::MAX as f64) as u64
}

/// Cubic Hermite smoothstep on `[0, 1]`.
pub(crate) fn smoothstep(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Fractional part in `[0, 1)` for any finite input; non-finite input maps to 0.
pub(crate) fn fract01(v: f64) -> f64 {
    if !v.is_finite() {
        return 0.0;
    }
    let f = v.rem_euclid(1.0);
    // rem_euclid can return exactly 1.0 for tiny negative inputs.
    if f >= 1.0 { 0.0 } else { f }
}

pub(crate) fn rotate_deg(p: kurbo::Point, degrees: f64) -> kurbo::Point {
    if degrees == 0.0 {
        return p;
    }
    let rad = degrees.to_radians();
    let (sin, cos) = rad.sin_cos();
    kurbo::Point::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos)
}

pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;

use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Edge bulge ceiling relative to the circumradius.
const MAX_BULGE: f64 = 1.2;
/// Lowest superellipse exponent; `arcness = -0.5` would otherwise reach `n = 0`.
const MIN_EXPONENT: f64 = 0.25;

/// Effective radius of a (possibly polygonal) wheel after it has turned by `theta` radians.
///
/// `radius` is the circumradius. For `|sides| == 1` the wheel is a circle. Otherwise `theta` is
/// folded into one polygon segment: straight edges interpolate linearly from the circumradius at
/// a vertex to the inradius `radius * cos(pi / sides)` at the edge midpoint, curved edges use a
/// superellipse with exponent `2 + 4 * arcness`.
///
/// A negative `sides` inverts straight edges: the radius is mirrored about the circumradius and
/// peaks at `2 * radius - inradius` where a positive count would sit on the inradius. The
/// superellipse is symmetric in the sign, so curved edges come out the same either way.
pub fn polygon_radius(
    theta: f64,
    radius: f64,
    sides: i32,
    arcness: f64,
    arcness_enabled: bool,
) -> f64 {
    let n_sides = sides.unsigned_abs();
    if n_sides <= 1 || !theta.is_finite() {
        return radius;
    }

    let n_sides = f64::from(n_sides);
    let segment = TAU / n_sides;
    let half = segment / 2.0;

    let folded = theta.rem_euclid(segment);
    // 0 at a vertex, +-half at the neighbouring edge midpoints.
    let in_segment = folded - half;

    let circumradius = radius;
    let inradius = radius * (PI / n_sides).cos();

    if !arcness_enabled || arcness == 0.0 {
        let t = (in_segment.abs() / half).min(1.0);
        let t = if sides < 0 { -t } else { t };
        return circumradius * (1.0 - t) + inradius * t;
    }

    let n = (2.0 + 4.0 * arcness).max(MIN_EXPONENT);
    let phi = (in_segment / half) * FRAC_PI_2;
    let cos_n = phi.cos().abs().powf(n);
    let sin_n = phi.sin().abs().powf(n);
    let factor = (cos_n + sin_n).powf(-1.0 / n);

    let target = inradius + arcness * (circumradius * MAX_BULGE - inradius);
    let r = target * factor;
    if r.is_finite() { r } else { circumradius }
}

#[cfg(test)]
#[path = "../../tests/unit/curve/polygon.rs"]
mod tests;

use std::f64::consts::TAU;

use crate::{
    curve::{
        params::{CurveKind, CurveParams},
        polygon::polygon_radius,
    },
    foundation::{
        core::Point,
        math::{gcd_rounded, rotate_deg},
    },
};

/// Default angular density used by the interactive view and exports.
pub const DEFAULT_SAMPLES_PER_TURN: u32 = 720;

/// Upper bound on the number of samples for one curve. Parameter combinations with a huge
/// revolution count (coprime radii) are truncated here rather than exhausting memory.
pub const MAX_TOTAL_SAMPLES: u64 = 4_000_000;

/// Wheel revolutions needed for the pattern to close: `r / gcd(r, complement)`.
///
/// Both operands are rounded before the gcd. A zero gcd (both operands round to zero) falls back
/// to a single revolution.
pub fn closing_revolutions(ring_radius: f64, wheel_radius: f64, kind: CurveKind) -> f64 {
    let complement = kind.complement(ring_radius, wheel_radius);
    let divisor = gcd_rounded(wheel_radius, complement);
    if divisor == 0 || !wheel_radius.is_finite() || wheel_radius <= 0.0 {
        return 1.0;
    }
    wheel_radius / divisor as f64
}

/// Evaluate one point of the roulette at sweep angle `t` (radians).
pub fn point_at(t: f64, params: &CurveParams, kind: CurveKind) -> Point {
    let r = params.wheel_radius;
    let big_r = params.ring_radius;
    let d = params.pen_offset;

    let complement = kind.complement(big_r, r);
    let theta = if r > 0.0 { (complement / r) * t } else { 0.0 };
    let r_eff = polygon_radius(
        theta,
        r,
        params.sides,
        params.arcness,
        params.arcness_enabled,
    );

    let (sin_t, cos_t) = t.sin_cos();
    let (sin_th, cos_th) = theta.sin_cos();
    let (x, y) = match kind {
        CurveKind::Inner => (
            (big_r - r_eff) * cos_t + d * cos_th,
            (big_r - r_eff) * sin_t - d * sin_th,
        ),
        CurveKind::Outer => (
            (big_r + r_eff) * cos_t - d * cos_th,
            (big_r + r_eff) * sin_t - d * sin_th,
        ),
    };

    rotate_deg(Point::new(x, y), f64::from(params.rotation.degrees()))
}

/// Sample count and total sweep angle for a curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sweep {
    pub revolutions: f64,
    pub total_angle: f64,
    pub total_samples: u64,
}

impl Sweep {
    pub fn new(params: &CurveParams, kind: CurveKind, samples_per_turn: u32) -> Self {
        let revolutions = closing_revolutions(params.ring_radius, params.wheel_radius, kind);
        let effective = revolutions * (params.completion / 100.0);
        let samples_per_turn = f64::from(samples_per_turn.max(1));
        let wanted = (effective * samples_per_turn).ceil();
        let total_samples = if wanted.is_finite() && wanted > 0.0 {
            (wanted as u64).min(MAX_TOTAL_SAMPLES)
        } else {
            1
        };
        if wanted > MAX_TOTAL_SAMPLES as f64 {
            tracing::warn!(
                wanted,
                cap = MAX_TOTAL_SAMPLES,
                "sample count truncated; curve will not close"
            );
        }
        Self {
            revolutions,
            total_angle: effective * TAU,
            total_samples,
        }
    }

    /// Sweep angle of sample `i`. The last sample lands exactly on `total_angle`.
    pub fn angle_at(&self, i: u64) -> f64 {
        self.total_angle * (i as f64 / self.total_samples as f64)
    }
}

/// Sample the curve densely. Returns `total_samples + 1` points (both endpoints included).
pub fn sample(params: &CurveParams, kind: CurveKind, samples_per_turn: u32) -> Vec<Point> {
    let params = params.sanitized();
    let sweep = Sweep::new(&params, kind, samples_per_turn);
    tracing::debug!(
        revolutions = sweep.revolutions,
        samples = sweep.total_samples,
        "sampling curve"
    );
    (0..=sweep.total_samples)
        .map(|i| point_at(sweep.angle_at(i), &params, kind))
        .collect()
}

/// Sample the curve while re-evaluating its parameters per sample.
///
/// `progress_to_params` receives the position along the geometric sweep (`i / total_samples`),
/// not wall-clock time. The sweep length itself is fixed by the base `params`.
pub fn sample_with_oscillation<F>(
    params: &CurveParams,
    kind: CurveKind,
    progress_to_params: F,
    samples_per_turn: u32,
) -> Vec<Point>
where
    F: Fn(f64) -> CurveParams,
{
    let base = params.sanitized();
    let sweep = Sweep::new(&base, kind, samples_per_turn);
    (0..=sweep.total_samples)
        .map(|i| {
            let progress = i as f64 / sweep.total_samples as f64;
            let at = progress_to_params(progress).sanitized();
            point_at(sweep.angle_at(i), &at, kind)
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/curve/sampler.rs"]
mod tests;

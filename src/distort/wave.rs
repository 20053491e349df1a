use std::f64::consts::TAU;

use crate::foundation::{
    core::{Point, Rect, Vec2, finite_or},
    math::{fract01, smoothstep},
};

/// Scalar field the wave is sampled from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldShape {
    /// Normalized x across the bounds.
    #[default]
    Horizontal,
    /// Normalized y across the bounds.
    Vertical,
    /// Distance from the bounds center over half the larger side.
    Radial,
    /// Angle around the bounds center, one turn mapped to `0..1`.
    Diamond,
}

/// Direction a point is pushed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DisplacementMode {
    /// Tangential to the vector from the bounds center.
    #[default]
    Perpendicular,
    /// Along the vector from the bounds center.
    Radial,
    Horizontal,
    Vertical,
}

/// Spatial post-distortion applied to already-sampled points.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WaveEffectParams {
    pub enabled: bool,
    /// Advance `phase_offset` over time in exports and the live view.
    pub animate: bool,
    #[serde(alias = "gradientType")]
    pub field_shape: FieldShape,
    /// Stripes across the field.
    pub frequency: f64,
    /// Peak displacement in curve units.
    pub amplitude: f64,
    pub displacement_mode: DisplacementMode,
    /// `[0, 1)`, one unit shifts the field by a full stripe.
    #[serde(alias = "animationOffset")]
    pub phase_offset: f64,
    /// `0` leaves the field linear, `1` runs it fully through smoothstep.
    #[serde(alias = "easing")]
    pub smoothing: f64,
    /// Seconds for the field to advance one full stripe when animated.
    #[serde(alias = "animationSpeed")]
    pub animation_period: f64,
}

impl Default for WaveEffectParams {
    fn default() -> Self {
        Self {
            enabled: false,
            animate: false,
            field_shape: FieldShape::Horizontal,
            frequency: 1.0,
            amplitude: 10.0,
            displacement_mode: DisplacementMode::Perpendicular,
            phase_offset: 0.0,
            smoothing: 0.5,
            animation_period: 5.0,
        }
    }
}

impl WaveEffectParams {
    /// Whether [`apply`] changes anything.
    pub fn is_active(&self) -> bool {
        self.enabled && self.amplitude != 0.0
    }

    /// Whether the field moves over time.
    pub fn is_animated(&self) -> bool {
        self.is_active() && self.animate
    }

    /// Field phase `time_secs` seconds into an animation. Static effects keep their offset.
    pub fn phase_at(&self, time_secs: f64) -> f64 {
        if !self.animate || self.animation_period <= 0.0 {
            return fract01(self.phase_offset);
        }
        fract01(self.phase_offset + time_secs / self.animation_period)
    }

    /// Copy of `self` with the phase advanced to `time_secs`.
    pub fn at_time(&self, time_secs: f64) -> Self {
        Self {
            phase_offset: self.phase_at(time_secs),
            ..*self
        }
    }

    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let period = finite_or(self.animation_period, defaults.animation_period);
        Self {
            frequency: finite_or(self.frequency, defaults.frequency).max(0.0),
            amplitude: finite_or(self.amplitude, defaults.amplitude).max(0.0),
            phase_offset: fract01(self.phase_offset),
            smoothing: finite_or(self.smoothing, defaults.smoothing).clamp(0.0, 1.0),
            animation_period: if period > 0.0 {
                period
            } else {
                defaults.animation_period
            },
            ..self
        }
    }
}

/// Field value in `[0, 1)` (before smoothing) at `point`.
pub fn sample_field(point: Point, params: &WaveEffectParams, bounds: Rect) -> f64 {
    let center = bounds.center();
    let normalized = match params.field_shape {
        FieldShape::Horizontal => ratio(point.x - bounds.x0, bounds.width()),
        FieldShape::Vertical => ratio(point.y - bounds.y0, bounds.height()),
        FieldShape::Radial => {
            let max_radius = bounds.width().max(bounds.height()) / 2.0;
            ratio(point.distance(center), max_radius)
        }
        FieldShape::Diamond => {
            let d = point - center;
            if d.hypot2() == 0.0 {
                0.0
            } else {
                fract01(d.atan2() / TAU)
            }
        }
    };

    let cyclic = fract01(normalized * params.frequency + params.phase_offset);
    if params.smoothing == 0.0 {
        cyclic
    } else {
        cyclic * (1.0 - params.smoothing) + smoothstep(cyclic) * params.smoothing
    }
}

fn ratio(num: f64, den: f64) -> f64 {
    if den > 0.0 { num / den } else { 0.0 }
}

/// Displacement vector for a field value. Center-relative modes leave the center itself alone.
pub fn displacement(
    point: Point,
    field: f64,
    amplitude: f64,
    mode: DisplacementMode,
    center: Point,
) -> Vec2 {
    let magnitude = (field * TAU).sin() * amplitude;
    match mode {
        DisplacementMode::Horizontal => Vec2::new(magnitude, 0.0),
        DisplacementMode::Vertical => Vec2::new(0.0, magnitude),
        DisplacementMode::Radial | DisplacementMode::Perpendicular => {
            let d = point - center;
            let dist = d.hypot();
            if dist == 0.0 {
                return Vec2::ZERO;
            }
            let dir = match mode {
                DisplacementMode::Radial => d / dist,
                _ => Vec2::new(-d.y, d.x) / dist,
            };
            dir * magnitude
        }
    }
}

/// Displace one point. Identity when the effect is disabled or has zero amplitude.
pub fn apply(point: Point, params: &WaveEffectParams, bounds: Rect) -> Point {
    if !params.is_active() {
        return point;
    }
    let field = sample_field(point, params, bounds);
    point
        + displacement(
            point,
            field,
            params.amplitude,
            params.displacement_mode,
            bounds.center(),
        )
}

/// Displace every point against shared `bounds` (normally the undistorted curve's bounds).
pub fn apply_all(points: &[Point], params: &WaveEffectParams, bounds: Rect) -> Vec<Point> {
    if !params.is_active() {
        return points.to_vec();
    }
    points.iter().map(|p| apply(*p, params, bounds)).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/distort/wave.rs"]
mod tests;

use crate::foundation::core::finite_or;

/// Which side of the fixed ring the wheel rolls on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CurveKind {
    /// Hypotrochoid: the wheel rolls inside the ring.
    #[default]
    #[serde(alias = "hypotrochoid")]
    Inner,
    /// Epitrochoid: the wheel rolls outside the ring.
    #[serde(alias = "epitrochoid")]
    Outer,
}

impl CurveKind {
    /// `R - r` for the inner variant, `R + r` for the outer one.
    pub fn complement(self, ring_radius: f64, wheel_radius: f64) -> f64 {
        match self {
            Self::Inner => ring_radius - wheel_radius,
            Self::Outer => ring_radius + wheel_radius,
        }
    }
}

impl std::str::FromStr for CurveKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inner" | "hypotrochoid" => Ok(Self::Inner),
            "outer" | "epitrochoid" => Ok(Self::Outer),
            other => Err(format!("unknown curve kind '{other}'")),
        }
    }
}

/// Final rigid rotation applied to every sampled point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "f64", into = "u16")]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Snap arbitrary degrees to the nearest quarter turn. Non-finite input maps to `Deg0`.
    pub fn from_degrees(deg: f64) -> Self {
        if !deg.is_finite() {
            return Self::Deg0;
        }
        match ((deg / 90.0).round() as i64).rem_euclid(4) {
            1 => Self::Deg90,
            2 => Self::Deg180,
            3 => Self::Deg270,
            _ => Self::Deg0,
        }
    }

    pub fn degrees(self) -> u16 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }
}

impl From<f64> for Rotation {
    fn from(value: f64) -> Self {
        Self::from_degrees(value)
    }
}

impl From<Rotation> for u16 {
    fn from(value: Rotation) -> Self {
        value.degrees()
    }
}

/// Geometry of one roulette curve.
///
/// `sides` selects a polygonal wheel (`±1` is a circle); a negative count inverts the straight
/// edges so they bulge outward instead of cutting in. `arcness` bulges (or, below zero,
/// pinches) the polygon's edges when `arcness_enabled` is set.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurveParams {
    #[serde(rename = "R")]
    pub ring_radius: f64,
    #[serde(rename = "r")]
    pub wheel_radius: f64,
    #[serde(rename = "d")]
    pub pen_offset: f64,
    pub sides: i32,
    pub arcness: f64,
    pub arcness_enabled: bool,
    pub rotation: Rotation,
    /// Percentage of the closed pattern to sweep, `1..=100`.
    pub completion: f64,
    #[serde(rename = "curveType", alias = "curveKind")]
    pub kind: CurveKind,
}

impl Default for CurveParams {
    fn default() -> Self {
        Self {
            ring_radius: 120.0,
            wheel_radius: 48.0,
            pen_offset: 84.0,
            sides: 1,
            arcness: 0.0,
            arcness_enabled: false,
            rotation: Rotation::Deg90,
            completion: 100.0,
            kind: CurveKind::Inner,
        }
    }
}

pub const MIN_ARCNESS: f64 = -0.5;
/// Smallest radius a coerced ring or wheel may have.
pub const MIN_RADIUS: f64 = 1e-3;

impl CurveParams {
    /// Coerce every field into its valid domain: non-finite values fall back to the default,
    /// finite out-of-range values are clamped to the nearest valid value.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let positive = |v: f64, fallback: f64| finite_or(v, fallback).max(MIN_RADIUS);

        Self {
            ring_radius: positive(self.ring_radius, defaults.ring_radius),
            wheel_radius: positive(self.wheel_radius, defaults.wheel_radius),
            pen_offset: finite_or(self.pen_offset, defaults.pen_offset).max(0.0),
            sides: if self.sides == 0 { 1 } else { self.sides },
            arcness: finite_or(self.arcness, defaults.arcness).max(MIN_ARCNESS),
            arcness_enabled: self.arcness_enabled,
            rotation: self.rotation,
            completion: finite_or(self.completion, defaults.completion).clamp(1.0, 100.0),
            kind: self.kind,
        }
    }

    /// Degenerate inner curves (`r >= R`) still sample; this flags them for callers that care.
    pub fn is_degenerate(&self) -> bool {
        self.kind == CurveKind::Inner && self.wheel_radius >= self.ring_radius
    }
}

#[cfg(test)]
#[path = "../../tests/unit/curve/params.rs"]
mod tests;

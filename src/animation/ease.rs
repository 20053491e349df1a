use std::f64::consts::{FRAC_PI_2, PI};

/// Which half of the curve an easing family applies its acceleration to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EaseDir {
    In,
    Out,
    InOut,
}

impl EaseDir {
    fn as_str(self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
            Self::InOut => "inOut",
        }
    }
}

/// Named easing curve. Names print and parse as `family.variant` (`power2.inOut`), plus the bare
/// `linear`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Ease {
    #[default]
    Linear,
    /// Quadratic.
    Power1(EaseDir),
    /// Cubic.
    Power2(EaseDir),
    /// Quartic.
    Power3(EaseDir),
    /// Quintic.
    Power4(EaseDir),
    /// Overshoots past the ends.
    Back(EaseDir),
    Elastic(EaseDir),
    Bounce(EaseDir),
    Circ(EaseDir),
    Expo(EaseDir),
    Sine(EaseDir),
}

const BACK_OVERSHOOT: f64 = 1.70158;

/// Control points `(x1, y1, x2, y2)` of a unit cubic bezier.
pub type CubicBezier = [f64; 4];

impl Ease {
    /// Every named easing, in catalogue order.
    pub const ALL: [Self; 31] = {
        use EaseDir::{In, InOut, Out};
        [
            Self::Linear,
            Self::Power1(In),
            Self::Power1(Out),
            Self::Power1(InOut),
            Self::Power2(In),
            Self::Power2(Out),
            Self::Power2(InOut),
            Self::Power3(In),
            Self::Power3(Out),
            Self::Power3(InOut),
            Self::Power4(In),
            Self::Power4(Out),
            Self::Power4(InOut),
            Self::Back(In),
            Self::Back(Out),
            Self::Back(InOut),
            Self::Elastic(In),
            Self::Elastic(Out),
            Self::Elastic(InOut),
            Self::Bounce(In),
            Self::Bounce(Out),
            Self::Bounce(InOut),
            Self::Circ(In),
            Self::Circ(Out),
            Self::Circ(InOut),
            Self::Expo(In),
            Self::Expo(Out),
            Self::Expo(InOut),
            Self::Sine(In),
            Self::Sine(Out),
            Self::Sine(InOut),
        ]
    };

    /// Remap `t` (clamped to `[0, 1]`). Back and elastic curves may leave `[0, 1]` in between.
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let Some(dir) = self.dir() else {
            return t;
        };
        match dir {
            EaseDir::In => self.ease_in(t),
            EaseDir::Out => self.ease_out(t),
            EaseDir::InOut => {
                if t < 0.5 {
                    self.ease_in(t * 2.0) / 2.0
                } else {
                    self.ease_out(t * 2.0 - 1.0) / 2.0 + 0.5
                }
            }
        }
    }

    pub fn dir(self) -> Option<EaseDir> {
        match self {
            Self::Linear => None,
            Self::Power1(d)
            | Self::Power2(d)
            | Self::Power3(d)
            | Self::Power4(d)
            | Self::Back(d)
            | Self::Elastic(d)
            | Self::Bounce(d)
            | Self::Circ(d)
            | Self::Expo(d)
            | Self::Sine(d) => Some(d),
        }
    }

    pub fn family(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Power1(_) => "power1",
            Self::Power2(_) => "power2",
            Self::Power3(_) => "power3",
            Self::Power4(_) => "power4",
            Self::Back(_) => "back",
            Self::Elastic(_) => "elastic",
            Self::Bounce(_) => "bounce",
            Self::Circ(_) => "circ",
            Self::Expo(_) => "expo",
            Self::Sine(_) => "sine",
        }
    }

    /// Whether the curve leaves `[0, 1]` or is not a single smooth segment, so a cubic bezier can
    /// only approximate it.
    pub fn is_lossy_as_bezier(self) -> bool {
        matches!(self, Self::Back(_) | Self::Elastic(_) | Self::Bounce(_))
    }

    fn ease_in(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::Power1(_) => t * t,
            Self::Power2(_) => t * t * t,
            Self::Power3(_) => t.powi(4),
            Self::Power4(_) => t.powi(5),
            Self::Back(_) => t * t * ((BACK_OVERSHOOT + 1.0) * t - BACK_OVERSHOOT),
            Self::Elastic(_) => {
                if t == 0.0 || t == 1.0 {
                    t
                } else {
                    -(2f64.powf(10.0 * (t - 1.0))) * ((t - 1.1) * 5.0 * PI).sin()
                }
            }
            Self::Bounce(_) => 1.0 - bounce_out(1.0 - t),
            Self::Circ(_) => 1.0 - (1.0 - t * t).max(0.0).sqrt(),
            Self::Expo(_) => {
                if t == 0.0 {
                    0.0
                } else {
                    2f64.powf(10.0 * (t - 1.0))
                }
            }
            Self::Sine(_) => 1.0 - (t * FRAC_PI_2).cos(),
        }
    }

    fn ease_out(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::Power1(_) => 1.0 - (1.0 - t) * (1.0 - t),
            Self::Power2(_) => 1.0 - (1.0 - t).powi(3),
            Self::Power3(_) => 1.0 - (1.0 - t).powi(4),
            Self::Power4(_) => 1.0 - (1.0 - t).powi(5),
            Self::Back(_) => {
                let u = t - 1.0;
                1.0 + u * u * ((BACK_OVERSHOOT + 1.0) * u + BACK_OVERSHOOT)
            }
            Self::Elastic(_) => {
                if t == 0.0 || t == 1.0 {
                    t
                } else {
                    2f64.powf(-10.0 * t) * ((t - 0.1) * 5.0 * PI).sin() + 1.0
                }
            }
            Self::Bounce(_) => bounce_out(t),
            Self::Circ(_) => (1.0 - (t - 1.0) * (t - 1.0)).max(0.0).sqrt(),
            Self::Expo(_) => {
                if t == 1.0 {
                    1.0
                } else {
                    1.0 - 2f64.powf(-10.0 * t)
                }
            }
            Self::Sine(_) => (t * FRAC_PI_2).sin(),
        }
    }

    /// Cubic-bezier stand-in for declarative animation formats. `None` for [`Ease::Linear`].
    ///
    /// Polynomial, circular, exponential and sine families map to their conventional control
    /// points. Back, elastic and bounce are approximated (see [`Ease::is_lossy_as_bezier`]).
    pub fn cubic_bezier(self) -> Option<CubicBezier> {
        use EaseDir::{In, InOut, Out};
        let curve = match self {
            Self::Linear => return None,
            Self::Power1(In) => [0.11, 0.0, 0.5, 0.0],
            Self::Power1(Out) => [0.5, 1.0, 0.89, 1.0],
            Self::Power1(InOut) => [0.45, 0.0, 0.55, 1.0],
            Self::Power2(In) => [0.32, 0.0, 0.67, 0.0],
            Self::Power2(Out) => [0.33, 1.0, 0.68, 1.0],
            Self::Power2(InOut) => [0.65, 0.0, 0.35, 1.0],
            Self::Power3(In) => [0.5, 0.0, 0.75, 0.0],
            Self::Power3(Out) => [0.25, 1.0, 0.5, 1.0],
            Self::Power3(InOut) => [0.76, 0.0, 0.24, 1.0],
            Self::Power4(In) => [0.64, 0.0, 0.78, 0.0],
            Self::Power4(Out) => [0.22, 1.0, 0.36, 1.0],
            Self::Power4(InOut) => [0.83, 0.0, 0.17, 1.0],
            Self::Back(In) => [0.36, 0.0, 0.66, -0.56],
            Self::Back(Out) => [0.34, 1.56, 0.64, 1.0],
            Self::Back(InOut) => [0.68, -0.6, 0.32, 1.6],
            Self::Elastic(In) => [0.6, -0.8, 0.74, 0.0],
            Self::Elastic(Out) => [0.26, 1.0, 0.4, 1.8],
            Self::Elastic(InOut) => [0.7, -0.8, 0.3, 1.8],
            Self::Bounce(In) => [0.6, 0.0, 0.8, 0.3],
            Self::Bounce(Out) => [0.2, 0.7, 0.4, 1.0],
            Self::Bounce(InOut) => [0.7, 0.0, 0.3, 1.0],
            Self::Circ(In) => [0.55, 0.0, 1.0, 0.45],
            Self::Circ(Out) => [0.0, 0.55, 0.45, 1.0],
            Self::Circ(InOut) => [0.85, 0.0, 0.15, 1.0],
            Self::Expo(In) => [0.7, 0.0, 0.84, 0.0],
            Self::Expo(Out) => [0.16, 1.0, 0.3, 1.0],
            Self::Expo(InOut) => [0.87, 0.0, 0.13, 1.0],
            Self::Sine(In) => [0.12, 0.0, 0.39, 0.0],
            Self::Sine(Out) => [0.61, 1.0, 0.88, 1.0],
            Self::Sine(InOut) => [0.37, 0.0, 0.63, 1.0],
        };
        Some(curve)
    }

    /// [`Ease::cubic_bezier`] with every coordinate clamped to `[0, 1]`, as SMIL `keySplines`
    /// require.
    pub fn smil_key_spline(self) -> Option<CubicBezier> {
        self.cubic_bezier().map(|c| c.map(|v| v.clamp(0.0, 1.0)))
    }
}

fn bounce_out(t: f64) -> f64 {
    const N1: f64 = 7.5625;
    const D1: f64 = 2.75;

    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984375
    }
}

impl std::fmt::Display for Ease {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.dir() {
            None => f.write_str(self.family()),
            Some(dir) => write!(f, "{}.{}", self.family(), dir.as_str()),
        }
    }
}

impl std::str::FromStr for Ease {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "linear" || s == "none" {
            return Ok(Self::Linear);
        }
        let (family, variant) = s
            .split_once('.')
            .ok_or_else(|| format!("unknown easing '{s}' (expected family.variant)"))?;
        let dir = match variant {
            "in" => EaseDir::In,
            "out" => EaseDir::Out,
            "inOut" => EaseDir::InOut,
            other => return Err(format!("unknown easing variant '{other}' in '{s}'")),
        };
        Ok(match family {
            "power1" => Self::Power1(dir),
            "power2" => Self::Power2(dir),
            "power3" => Self::Power3(dir),
            "power4" => Self::Power4(dir),
            "back" => Self::Back(dir),
            "elastic" => Self::Elastic(dir),
            "bounce" => Self::Bounce(dir),
            "circ" => Self::Circ(dir),
            "expo" => Self::Expo(dir),
            "sine" => Self::Sine(dir),
            other => return Err(format!("unknown easing family '{other}' in '{s}'")),
        })
    }
}

impl TryFrom<String> for Ease {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Ease> for String {
    fn from(value: Ease) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;

//! Scene configuration: everything the host hands to the core, with lenient JSON loading.
//!
//! Loading validates every field on its own. A field that fails to parse is replaced by its
//! fixed default and reported as a [`FieldFallback`]; the rest of the payload is kept.

use std::{fmt, path::Path};

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::{
    animation::clock::AnimationConfig,
    curve::{params::CurveParams, sampler::DEFAULT_SAMPLES_PER_TURN},
    distort::wave::WaveEffectParams,
    foundation::{
        core::{Rgb8, finite_or},
        error::{SpiroError, SpiroResult},
    },
    oscillate::{
        color::ColorOscillation,
        param::{Oscillation, ParamOscillations},
    },
};

/// Stroke and background colors.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StrokeStyle {
    #[serde(alias = "strokeColor")]
    pub color: Rgb8,
    #[serde(alias = "strokeWidth")]
    pub width: f64,
    #[serde(alias = "backgroundColor")]
    pub background: Rgb8,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Rgb8::WHITE,
            width: 0.5,
            background: Rgb8::new(0x11, 0x15, 0x29),
        }
    }
}

impl StrokeStyle {
    pub fn sanitized(self) -> Self {
        let width = finite_or(self.width, 0.5);
        Self {
            width: if width > 0.0 { width } else { 0.5 },
            ..self
        }
    }
}

/// Sampling and framing knobs.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QualityConfig {
    pub samples_per_turn: u32,
    /// Ramer–Douglas–Peucker tolerance in curve units.
    pub simplify_epsilon: f64,
    /// Margin added around the curve bounds on every side.
    pub view_box_padding: f64,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            samples_per_turn: DEFAULT_SAMPLES_PER_TURN,
            simplify_epsilon: 0.1,
            view_box_padding: 20.0,
        }
    }
}

impl QualityConfig {
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        Self {
            samples_per_turn: self.samples_per_turn.max(1),
            simplify_epsilon: finite_or(self.simplify_epsilon, defaults.simplify_epsilon).max(0.0),
            view_box_padding: finite_or(self.view_box_padding, defaults.view_box_padding)
                .max(0.0),
        }
    }
}

/// Complete description of one drawing.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SceneConfig {
    /// Base name for exported files.
    pub name: String,
    pub curve: CurveParams,
    pub oscillations: ParamOscillations,
    pub color_oscillation: ColorOscillation,
    pub stroke: StrokeStyle,
    pub wave: WaveEffectParams,
    pub animation: AnimationConfig,
    pub quality: QualityConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            name: Self::DEFAULT_NAME.to_string(),
            curve: CurveParams::default(),
            oscillations: ParamOscillations::default(),
            color_oscillation: ColorOscillation::default(),
            stroke: StrokeStyle::default(),
            wave: WaveEffectParams::default(),
            animation: AnimationConfig::default(),
            quality: QualityConfig::default(),
        }
    }
}

/// A field that was replaced by its default while loading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldFallback {
    /// JSON path such as `$.curve.R`.
    pub path: String,
    pub message: String,
}

impl fmt::Display for FieldFallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

impl SceneConfig {
    pub const DEFAULT_NAME: &'static str = "spirograph";

    /// Parse a scene, falling back per field. Only malformed JSON or a non-object root fails.
    pub fn from_json_str(s: &str) -> SpiroResult<Self> {
        let (scene, fallbacks) = Self::from_json_str_with_report(s)?;
        for fb in &fallbacks {
            tracing::warn!(path = %fb.path, reason = %fb.message, "scene field replaced by default");
        }
        Ok(scene)
    }

    /// Like [`SceneConfig::from_json_str`], returning the replaced fields instead of logging them.
    pub fn from_json_str_with_report(s: &str) -> SpiroResult<(Self, Vec<FieldFallback>)> {
        let value: Value = serde_json::from_str(s)
            .map_err(|e| SpiroError::serde(format!("scene is not valid JSON: {e}")))?;
        Self::from_value(&value)
    }

    pub fn from_value(value: &Value) -> SpiroResult<(Self, Vec<FieldFallback>)> {
        let Value::Object(root) = value else {
            return Err(SpiroError::serde("scene root must be a JSON object"));
        };
        let mut report = Vec::new();
        let section = |key: &str| root.get(key);

        let name = match section("name") {
            None => Self::DEFAULT_NAME.to_string(),
            Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
            Some(other) => {
                report.push(FieldFallback {
                    path: "$.name".to_string(),
                    message: format!("expected a non-empty string, got {other}"),
                });
                Self::DEFAULT_NAME.to_string()
            }
        };

        let curve: CurveParams = lenient("$.curve", section("curve"), &mut report);
        let oscillations = lenient_oscillations(section("oscillations"), &mut report);
        let scene = Self {
            name,
            curve,
            oscillations,
            color_oscillation: lenient("$.colorOscillation", section("colorOscillation"), &mut report),
            stroke: lenient("$.stroke", section("stroke"), &mut report),
            wave: lenient("$.wave", section("wave"), &mut report),
            animation: lenient("$.animation", section("animation"), &mut report),
            quality: lenient("$.quality", section("quality"), &mut report),
        };
        Ok((scene.sanitized(), report))
    }

    pub fn from_path(path: &Path) -> SpiroResult<Self> {
        use anyhow::Context as _;
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scene '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> SpiroResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| SpiroError::serde(e.to_string()))
    }

    /// Coerce every numeric field into range. Oscillation base values follow the curve.
    pub fn sanitized(self) -> Self {
        let curve = self.curve.sanitized();
        Self {
            oscillations: self.oscillations.sanitized().centered_on(&curve),
            curve,
            color_oscillation: self.color_oscillation.sanitized(),
            stroke: self.stroke.sanitized(),
            wave: self.wave.sanitized(),
            animation: self.animation.sanitized(),
            quality: self.quality.sanitized(),
            name: self.name,
        }
    }
}

/// Deserialize `T` from `input`, accepting one field at a time. Requires `T` to be
/// `#[serde(default)]` so partial objects parse.
fn lenient<T>(path: &str, input: Option<&Value>, report: &mut Vec<FieldFallback>) -> T
where
    T: Default + DeserializeOwned,
{
    let fields = match input {
        None => return T::default(),
        Some(Value::Object(fields)) => fields,
        Some(other) => {
            report.push(FieldFallback {
                path: path.to_string(),
                message: format!("expected an object, got {other}"),
            });
            return T::default();
        }
    };

    let mut accepted = Map::new();
    for (key, value) in fields {
        let mut candidate = accepted.clone();
        candidate.insert(key.clone(), value.clone());
        match serde_json::from_value::<T>(Value::Object(candidate)) {
            Ok(_) => {
                accepted.insert(key.clone(), value.clone());
            }
            Err(err) => report.push(FieldFallback {
                path: format!("{path}.{key}"),
                message: err.to_string(),
            }),
        }
    }
    serde_json::from_value(Value::Object(accepted)).unwrap_or_default()
}

fn lenient_oscillations(input: Option<&Value>, report: &mut Vec<FieldFallback>) -> ParamOscillations {
    let defaults = ParamOscillations::default();
    let fields = match input {
        None => return defaults,
        Some(Value::Object(fields)) => fields,
        Some(other) => {
            report.push(FieldFallback {
                path: "$.oscillations".to_string(),
                message: format!("expected an object, got {other}"),
            });
            return defaults;
        }
    };

    // Missing fields inside one oscillation fall back to that parameter's own defaults.
    let one = |key: &str, fallback: Oscillation, report: &mut Vec<FieldFallback>| {
        let Some(value) = fields.get(key) else {
            return fallback;
        };
        let path = format!("$.oscillations.{key}");
        let Ok(Value::Object(mut base)) = serde_json::to_value(fallback) else {
            return fallback;
        };
        let parsed: Map<String, Value> = match value {
            Value::Object(o) => o.clone(),
            other => {
                report.push(FieldFallback {
                    path,
                    message: format!("expected an object, got {other}"),
                });
                return fallback;
            }
        };
        for (k, v) in parsed {
            // `base` already carries the canonical key, so an alias would read as a duplicate.
            let k = if k == "waveType" { "waveform".to_string() } else { k };
            let mut candidate = base.clone();
            candidate.insert(k.clone(), v.clone());
            match serde_json::from_value::<Oscillation>(Value::Object(candidate.clone())) {
                Ok(_) => base = candidate,
                Err(err) => report.push(FieldFallback {
                    path: format!("{path}.{k}"),
                    message: err.to_string(),
                }),
            }
        }
        serde_json::from_value(Value::Object(base)).unwrap_or(fallback)
    };

    ParamOscillations {
        ring_radius: one("R", defaults.ring_radius, report),
        wheel_radius: one("r", defaults.wheel_radius, report),
        pen_offset: one("d", defaults.pen_offset, report),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/scene.rs"]
mod tests;

use crate::{
    curve::params::CurveParams,
    foundation::{core::finite_or, math::fract01},
    oscillate::waveform::Waveform,
};

/// Modulation of one scalar across the geometric sweep.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Oscillation {
    pub enabled: bool,
    pub base_value: f64,
    /// Half-range: the value swings between `base - amplitude` and `base + amplitude`. A negative
    /// amplitude keeps its sign and runs the wave in antiphase.
    pub amplitude: f64,
    /// Full cycles across the sweep.
    pub frequency: f64,
    #[serde(alias = "waveType")]
    pub waveform: Waveform,
}

impl Default for Oscillation {
    fn default() -> Self {
        Self {
            enabled: false,
            base_value: 0.0,
            amplitude: 0.0,
            frequency: 2.0,
            waveform: Waveform::Sine,
        }
    }
}

impl Oscillation {
    pub fn disabled(base_value: f64, amplitude: f64) -> Self {
        Self {
            base_value,
            amplitude,
            ..Self::default()
        }
    }

    /// Value at sweep position `progress`. Disabled oscillations return `base_value`.
    pub fn value(&self, progress: f64) -> f64 {
        if !self.enabled {
            return self.base_value;
        }
        let phase = fract01(progress * self.frequency);
        let shaped = self.waveform.shape(phase);
        self.base_value + (shaped * 2.0 - 1.0) * self.amplitude
    }

    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        Self {
            base_value: finite_or(self.base_value, defaults.base_value),
            amplitude: finite_or(self.amplitude, defaults.amplitude),
            frequency: finite_or(self.frequency, defaults.frequency).max(0.0),
            ..self
        }
    }
}

/// Oscillations for the three roulette radii.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ParamOscillations {
    #[serde(rename = "R")]
    pub ring_radius: Oscillation,
    #[serde(rename = "r")]
    pub wheel_radius: Oscillation,
    #[serde(rename = "d")]
    pub pen_offset: Oscillation,
}

impl Default for ParamOscillations {
    fn default() -> Self {
        let base = CurveParams::default();
        Self {
            ring_radius: Oscillation::disabled(base.ring_radius, 20.0),
            wheel_radius: Oscillation::disabled(base.wheel_radius, 10.0),
            pen_offset: Oscillation::disabled(base.pen_offset, 20.0),
        }
    }
}

impl ParamOscillations {
    pub fn any_enabled(&self) -> bool {
        self.ring_radius.enabled || self.wheel_radius.enabled || self.pen_offset.enabled
    }

    /// Re-center every oscillation on the matching field of `params`.
    pub fn centered_on(self, params: &CurveParams) -> Self {
        Self {
            ring_radius: Oscillation {
                base_value: params.ring_radius,
                ..self.ring_radius
            },
            wheel_radius: Oscillation {
                base_value: params.wheel_radius,
                ..self.wheel_radius
            },
            pen_offset: Oscillation {
                base_value: params.pen_offset,
                ..self.pen_offset
            },
        }
    }

    /// `params` with R, r and d replaced by their oscillated values at `progress`.
    pub fn params_at(&self, params: &CurveParams, progress: f64) -> CurveParams {
        CurveParams {
            ring_radius: self.ring_radius.value(progress),
            wheel_radius: self.wheel_radius.value(progress),
            pen_offset: self.pen_offset.value(progress),
            ..*params
        }
    }

    pub fn sanitized(self) -> Self {
        Self {
            ring_radius: self.ring_radius.sanitized(),
            wheel_radius: self.wheel_radius.sanitized(),
            pen_offset: self.pen_offset.sanitized(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/oscillate/param.rs"]
mod tests;

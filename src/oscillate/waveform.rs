use std::f64::consts::{FRAC_PI_2, TAU};

/// Periodic shape shared by parameter and color oscillation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Waveform {
    #[default]
    Sine,
    Triangle,
    Square,
    Sawtooth,
    ReverseSawtooth,
}

impl Waveform {
    /// Map a phase in `[0, 1)` to a level in `[0, 1]`.
    pub fn shape(self, phase: f64) -> f64 {
        match self {
            Self::Sine => ((phase * TAU - FRAC_PI_2).sin() + 1.0) / 2.0,
            Self::Triangle => {
                if phase < 0.5 {
                    phase * 2.0
                } else {
                    (1.0 - phase) * 2.0
                }
            }
            Self::Square => {
                if phase < 0.5 {
                    0.0
                } else {
                    1.0
                }
            }
            Self::Sawtooth => phase,
            Self::ReverseSawtooth => 1.0 - phase,
        }
    }
}

impl std::str::FromStr for Waveform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sine" => Ok(Self::Sine),
            "triangle" => Ok(Self::Triangle),
            "square" => Ok(Self::Square),
            "sawtooth" => Ok(Self::Sawtooth),
            "reverseSawtooth" => Ok(Self::ReverseSawtooth),
            other => Err(format!("unknown waveform '{other}'")),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/oscillate/waveform.rs"]
mod tests;

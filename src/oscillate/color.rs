use crate::{
    foundation::{
        core::{Rgb8, finite_or},
        math::fract01,
    },
    oscillate::waveform::Waveform,
};

/// Fallback stroke color when a color oscillation has no stops at all.
pub const FALLBACK_COLOR: Rgb8 = Rgb8::new(0x00, 0xd9, 0xff);

/// Stroke color that varies along the path.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorOscillation {
    pub enabled: bool,
    /// At least two stops are needed for any variation.
    pub colors: Vec<Rgb8>,
    pub frequency: f64,
    #[serde(alias = "waveType")]
    pub waveform: Waveform,
}

impl Default for ColorOscillation {
    fn default() -> Self {
        Self {
            enabled: false,
            colors: vec![
                Rgb8::new(0x00, 0xd9, 0xff),
                Rgb8::new(0xff, 0x00, 0x80),
            ],
            frequency: 1.0,
            waveform: Waveform::Sine,
        }
    }
}

/// One stop of a path-aligned gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// Position along the path, `0..=1`.
    pub offset: f64,
    pub color: Rgb8,
}

impl ColorOscillation {
    /// Whether the stroke actually varies; otherwise callers use a single solid color.
    pub fn is_active(&self) -> bool {
        self.enabled && self.colors.len() >= 2
    }

    /// Color at path progress `progress`. Inactive oscillations return the first stop.
    pub fn color_at(&self, progress: f64) -> Rgb8 {
        if !self.is_active() {
            return self.colors.first().copied().unwrap_or(FALLBACK_COLOR);
        }
        let phase = fract01(progress * self.frequency);
        self.color_for_level(self.waveform.shape(phase))
    }

    /// `stops + 1` evenly spaced gradient stops covering `0..=1`.
    pub fn gradient_stops(&self, stops: usize) -> Vec<GradientStop> {
        let stops = stops.max(1);
        (0..=stops)
            .map(|i| {
                let offset = i as f64 / stops as f64;
                GradientStop {
                    offset,
                    color: self.color_at(offset),
                }
            })
            .collect()
    }

    fn color_for_level(&self, level: f64) -> Rgb8 {
        let last = self.colors.len() - 1;
        let index = level.clamp(0.0, 1.0) * last as f64;
        let lo = (index.floor() as usize).min(last);
        let hi = (lo + 1).min(last);
        self.colors[lo].lerp(self.colors[hi], index - lo as f64)
    }

    pub fn sanitized(self) -> Self {
        Self {
            frequency: finite_or(self.frequency, 1.0).max(0.0),
            ..self
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/oscillate/color.rs"]
mod tests;

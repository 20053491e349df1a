use crate::{
    animation::{
        clock::{LoopMode, loop_progress},
        ease::Ease,
    },
    distort::wave::WaveEffectParams,
    foundation::{
        core::{FrameIndex, Fps},
        error::{SpiroError, SpiroResult},
    },
};

/// What drives a time-based export.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameDriver {
    /// Progressive reveal; wave animation, if any, rides along.
    Draw,
    /// The full curve under an animated wave, one wave period long.
    WaveOnly { period_secs: f64 },
    /// Nothing moves; one second of identical frames.
    Still,
}

/// Timing inputs of a frame-sequence or video export.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineSettings {
    pub duration_secs: f64,
    pub easing: Ease,
    pub fps: Fps,
    /// `None` draws once. Looping modes export one full draw/erase cycle (two durations).
    pub loop_mode: LoopMode,
    /// Whether the stroke is progressively revealed.
    pub draw: bool,
}

impl Default for TimelineSettings {
    fn default() -> Self {
        Self {
            duration_secs: 5.0,
            easing: Ease::Linear,
            fps: Fps { num: 30, den: 1 },
            loop_mode: LoopMode::None,
            draw: true,
        }
    }
}

/// Everything needed to draw frame `index`; a pure function of the index and the plan.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameSpec {
    pub index: FrameIndex,
    /// Seconds into the export; drives the wave phase.
    pub time_secs: f64,
    /// Uneased draw progress.
    pub progress: f64,
    pub eased_progress: f64,
    pub is_erasing: bool,
}

/// Frame count and per-frame timing for one export.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FramePlan {
    pub settings: TimelineSettings,
    pub driver: FrameDriver,
    frame_count: u64,
}

impl FramePlan {
    pub fn new(settings: TimelineSettings, wave: &WaveEffectParams) -> SpiroResult<Self> {
        if !settings.duration_secs.is_finite() || settings.duration_secs <= 0.0 {
            return Err(SpiroError::validation(format!(
                "export duration must be positive, got {}",
                settings.duration_secs
            )));
        }

        let driver = if settings.draw {
            FrameDriver::Draw
        } else if wave.is_animated() {
            FrameDriver::WaveOnly {
                period_secs: wave.animation_period,
            }
        } else {
            FrameDriver::Still
        };

        let fps = settings.fps;
        let frame_count = match driver {
            FrameDriver::Draw => {
                let cycles = if settings.loop_mode.is_looping() { 2.0 } else { 1.0 };
                fps.secs_to_frames_ceil(settings.duration_secs * cycles)
            }
            FrameDriver::WaveOnly { period_secs } => fps.secs_to_frames_ceil(period_secs),
            FrameDriver::Still => fps.secs_to_frames_ceil(1.0),
        }
        .max(1);

        Ok(Self {
            settings,
            driver,
            frame_count,
        })
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn frame_spec(&self, index: FrameIndex) -> SpiroResult<FrameSpec> {
        let n = self.frame_count;
        if index.0 >= n {
            return Err(SpiroError::animation(format!(
                "frame {} is outside the {n}-frame export",
                index.0
            )));
        }
        let s = &self.settings;
        let i = index.0 as f64;

        let spec = match self.driver {
            FrameDriver::Draw => {
                // Looping exports leave out the closing frame so the sequence repeats seamlessly;
                // one-shot exports end exactly on the finished drawing.
                let position = if s.loop_mode.is_looping() {
                    2.0 * i / n as f64
                } else if n > 1 {
                    i / (n - 1) as f64
                } else {
                    1.0
                };
                let (progress, is_erasing) = loop_progress(position, s.loop_mode);
                FrameSpec {
                    index,
                    time_secs: position * s.duration_secs,
                    progress,
                    eased_progress: s.easing.apply(progress),
                    is_erasing,
                }
            }
            FrameDriver::WaveOnly { .. } | FrameDriver::Still => FrameSpec {
                index,
                time_secs: s.fps.frames_to_secs(index.0),
                progress: 1.0,
                eased_progress: 1.0,
                is_erasing: false,
            },
        };
        Ok(spec)
    }

    pub fn specs(&self) -> impl Iterator<Item = FrameSpec> + '_ {
        (0..self.frame_count).filter_map(|i| self.frame_spec(FrameIndex(i)).ok())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/frame.rs"]
mod tests;

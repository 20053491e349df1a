use crate::{animation::ease::Ease, foundation::core::finite_or};

/// Playback status of an [`AnimationState`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Status {
    #[default]
    Idle,
    Playing,
    Paused,
    Finished,
}

/// How progress repeats once the stroke is fully drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LoopMode {
    /// Draw once and finish.
    None,
    /// Draw, then erase from the tail end forward, then draw again.
    #[default]
    #[serde(alias = "continue")]
    ContinueForward,
    /// Draw, then undraw in reverse, then draw again.
    Pingpong,
}

impl LoopMode {
    pub fn is_looping(self) -> bool {
        self != Self::None
    }
}

impl std::str::FromStr for LoopMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "continue" | "continueForward" => Ok(Self::ContinueForward),
            "pingpong" => Ok(Self::Pingpong),
            other => Err(format!("unknown loop mode '{other}'")),
        }
    }
}

/// Map a timeline position (in durations) to `(progress, is_erasing)`.
///
/// `None` clamps to `[0, 1]`. Looping modes have a period of two durations: the first half draws
/// (progress rising), the second half erases (progress falling back to 0).
pub fn loop_progress(position: f64, mode: LoopMode) -> (f64, bool) {
    let position = if position.is_finite() { position } else { 0.0 };
    match mode {
        LoopMode::None => (position.clamp(0.0, 1.0), false),
        LoopMode::ContinueForward | LoopMode::Pingpong => {
            let cycle = position.rem_euclid(2.0);
            if cycle < 1.0 {
                (cycle, false)
            } else {
                (2.0 - cycle, true)
            }
        }
    }
}

/// Animation settings handed over by the host.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnimationConfig {
    /// Seconds for one full draw at speed 1.
    #[serde(alias = "duration")]
    pub duration_secs: f64,
    pub easing: Ease,
    #[serde(alias = "loop")]
    pub loop_mode: LoopMode,
    #[serde(alias = "speed")]
    pub speed_multiplier: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_secs: 5.0,
            easing: Ease::Linear,
            loop_mode: LoopMode::ContinueForward,
            speed_multiplier: 1.0,
        }
    }
}

impl AnimationConfig {
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let positive = |v: f64, fallback: f64| {
            let v = finite_or(v, fallback);
            if v > 0.0 { v } else { fallback }
        };
        Self {
            duration_secs: positive(self.duration_secs, defaults.duration_secs),
            speed_multiplier: positive(self.speed_multiplier, defaults.speed_multiplier),
            ..self
        }
    }
}

/// Complete, externally owned animation state. All timestamps are host seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationState {
    pub status: Status,
    /// Eased progress in `[0, 1]` (back/elastic easings may briefly leave that range).
    pub progress: f64,
    pub is_erasing: bool,
    pub loop_mode: LoopMode,
    pub easing: Ease,
    pub speed_multiplier: f64,
    pub duration_secs: f64,
    /// Timeline position in draw durations at the last update; `0..1` draws, `1..2` erases.
    pub position: f64,
    /// Position the current play segment started from.
    pub resume_offset: f64,
    /// Timestamp the current play segment is measured from; latched by the first tick after
    /// `play` or `set_progress`.
    pub play_started_at: Option<f64>,
}

impl AnimationState {
    pub fn new(config: &AnimationConfig) -> Self {
        let config = config.sanitized();
        Self {
            status: Status::Idle,
            progress: 0.0,
            is_erasing: false,
            loop_mode: config.loop_mode,
            easing: config.easing,
            speed_multiplier: config.speed_multiplier,
            duration_secs: config.duration_secs,
            position: 0.0,
            resume_offset: 0.0,
            play_started_at: None,
        }
    }

    fn adjusted_duration(&self) -> f64 {
        self.duration_secs / self.speed_multiplier
    }

    fn position_at(&self, now: f64) -> f64 {
        match self.play_started_at {
            Some(start) => {
                let elapsed = (now - start).max(0.0);
                elapsed / self.adjusted_duration() + self.resume_offset
            }
            None => self.resume_offset,
        }
    }

    fn with_position(self, position: f64) -> Self {
        let (raw, is_erasing) = loop_progress(position, self.loop_mode);
        Self {
            position,
            progress: self.easing.apply(raw),
            is_erasing,
            ..self
        }
    }
}

/// Advance a playing state to timestamp `now`. Non-playing states are returned unchanged.
///
/// The first call after `play` latches `now` as the start of the play segment. Under
/// [`LoopMode::None`] reaching the end finishes the animation with progress exactly 1.
pub fn advance(state: &AnimationState, now: f64) -> AnimationState {
    if state.status != Status::Playing || !now.is_finite() {
        return *state;
    }
    let mut next = *state;
    if next.play_started_at.is_none() {
        next.play_started_at = Some(now);
    }
    let position = next.position_at(now);

    if next.loop_mode == LoopMode::None && position >= 1.0 {
        tracing::debug!("animation finished");
        return AnimationState {
            status: Status::Finished,
            progress: 1.0,
            is_erasing: false,
            position: 1.0,
            resume_offset: 0.0,
            play_started_at: None,
            ..next
        };
    }
    next.with_position(position)
}

/// Single owner of an [`AnimationState`]; every transition goes through these methods.
#[derive(Clone, Debug)]
pub struct AnimationClock {
    state: AnimationState,
}

impl AnimationClock {
    pub fn new(config: &AnimationConfig) -> Self {
        Self {
            state: AnimationState::new(config),
        }
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn status(&self) -> Status {
        self.state.status
    }

    pub fn progress(&self) -> f64 {
        self.state.progress
    }

    /// Start or resume. Playing again after finishing restarts from 0.
    pub fn play(&mut self) {
        let s = &mut self.state;
        match s.status {
            Status::Playing => return,
            Status::Finished => {
                *s = s.with_position(0.0);
                s.resume_offset = 0.0;
            }
            Status::Idle | Status::Paused => s.resume_offset = s.position,
        }
        s.play_started_at = None;
        s.status = Status::Playing;
    }

    /// Freeze at the position reached at `now`.
    pub fn pause(&mut self, now: f64) {
        if self.state.status != Status::Playing {
            return;
        }
        self.state = advance(&self.state, now);
        if self.state.status == Status::Playing {
            self.state.resume_offset = self.state.position;
            self.state.play_started_at = None;
            self.state.status = Status::Paused;
        }
    }

    pub fn reset(&mut self) {
        self.state = AnimationState {
            status: Status::Idle,
            play_started_at: None,
            resume_offset: 0.0,
            ..self.state.with_position(0.0)
        };
    }

    /// Scrub to `progress`. Overwrites the displayed progress and the resume offset, leaves the
    /// erase phase, and drops the current timing reference so a playing clock re-latches.
    pub fn set_progress(&mut self, progress: f64) {
        let p = finite_or(progress, 0.0).clamp(0.0, 1.0);
        let s = &mut self.state;
        s.progress = p;
        s.position = p;
        s.resume_offset = p;
        s.is_erasing = false;
        s.play_started_at = None;
        if s.status == Status::Finished && p < 1.0 {
            s.status = Status::Paused;
        }
    }

    /// Change playback speed without a jump in position.
    pub fn set_speed(&mut self, speed_multiplier: f64, now: f64) {
        let speed = finite_or(speed_multiplier, 1.0);
        if speed <= 0.0 {
            return;
        }
        self.rebase(now);
        self.state.speed_multiplier = speed;
    }

    pub fn set_loop_mode(&mut self, loop_mode: LoopMode, now: f64) {
        self.rebase(now);
        self.state.loop_mode = loop_mode;
        self.state = self.state.with_position(self.state.position);
    }

    pub fn set_easing(&mut self, easing: Ease) {
        self.state.easing = easing;
        self.state = self.state.with_position(self.state.position);
    }

    /// Advance to `now` and return the new state.
    pub fn tick(&mut self, now: f64) -> &AnimationState {
        self.state = advance(&self.state, now);
        &self.state
    }

    fn rebase(&mut self, now: f64) {
        if self.state.status == Status::Playing {
            self.state = advance(&self.state, now);
            if self.state.status == Status::Playing {
                self.state.resume_offset = self.state.position;
                self.state.play_started_at = Some(now);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/clock.rs"]
mod tests;

//! Playback timing: easing curves and the loop-aware animation clock.

pub mod clock;
pub mod ease;

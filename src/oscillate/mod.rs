//! Periodic modulation of curve parameters and stroke color across the geometric sweep.

pub mod color;
pub mod param;
pub mod waveform;

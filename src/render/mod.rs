//! Rasterization of visible curve geometry into RGBA frames.

pub mod backend;
pub mod cpu;

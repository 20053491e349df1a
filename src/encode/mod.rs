//! Encoders that turn rendered frames into files.

pub mod ffmpeg;
pub mod flatten;
pub mod gif;
pub mod output;
pub mod png;
pub mod sink;

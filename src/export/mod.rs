//! Output formats: static and animated SVG, PNG, GIF and MP4.

pub mod exporter;
pub mod frame;
pub mod naming;
pub mod svg;
pub mod visible;

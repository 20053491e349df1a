//! Spirograph generates roulette curves (hypotrochoids and epitrochoids), animates their
//! progressive reveal, and exports them as SVG, animated SVG, PNG, GIF or MP4.
//!
//! The pipeline is explicitly staged:
//!
//! 1. Build the geometry once: [`build_curve`] samples the curve (optionally with
//!    [`ParamOscillations`]), simplifies it and measures it into a [`CurvePath`].
//! 2. Drive time: an [`AnimationClock`] owns an [`AnimationState`]; exports use a [`FramePlan`],
//!    whose frames are a pure function of their index.
//! 3. Cut the visible stroke: [`VisibleStroke::for_progress`] is the single place that maps
//!    eased progress to geometry, for the live view and every export alike.
//! 4. Draw and encode: a [`RenderBackend`] rasterizes frames that a [`FrameSink`] streams to
//!    disk, or [`svg`](crate::export::svg) serializes the path directly.
//!
//! [`Exporter`] wires these stages together for a [`SceneConfig`].
#![forbid(unsafe_code)]

pub mod animation;
pub mod config;
pub mod curve;
pub mod distort;
pub mod encode;
pub mod export;
pub mod foundation;
pub mod oscillate;
pub mod preset;
pub mod render;

pub use crate::animation::clock::{
    AnimationClock, AnimationConfig, AnimationState, LoopMode, Status, advance, loop_progress,
};
pub use crate::animation::ease::{Ease, EaseDir};
pub use crate::config::{FieldFallback, QualityConfig, SceneConfig, StrokeStyle};
pub use crate::curve::params::{CurveKind, CurveParams, Rotation};
pub use crate::curve::path::{CurvePath, build_curve};
pub use crate::curve::sampler::{closing_revolutions, point_at, sample};
pub use crate::curve::simplify::simplify;
pub use crate::distort::wave::{DisplacementMode, FieldShape, WaveEffectParams};
pub use crate::encode::ffmpeg::FfmpegSink;
pub use crate::encode::gif::GifSink;
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::export::exporter::Exporter;
pub use crate::export::frame::{FrameDriver, FramePlan, FrameSpec, TimelineSettings};
pub use crate::export::naming::{ExportFormat, export_file_name};
pub use crate::export::svg::VectorAnimation;
pub use crate::export::visible::VisibleStroke;
pub use crate::foundation::core::{Affine, BezPath, Fps, FrameIndex, Point, Rect, Rgb8, Vec2};
pub use crate::foundation::error::{SpiroError, SpiroResult};
pub use crate::oscillate::color::ColorOscillation;
pub use crate::oscillate::param::{Oscillation, ParamOscillations};
pub use crate::oscillate::waveform::Waveform;
pub use crate::preset::{PRESETS, Preset, find_preset};
pub use crate::render::backend::{
    BackendKind, FrameRGBA, FrameScene, RenderBackend, RenderSettings, StrokeRun, create_backend,
};

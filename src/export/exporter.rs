use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::{
    animation::clock::{AnimationState, Status},
    config::SceneConfig,
    curve::path::{CurvePath, build_curve},
    distort::wave,
    encode::{
        ffmpeg::FfmpegSink,
        gif::GifSink,
        output::write_staged,
        png::encode_png,
        sink::{FrameSink, SinkConfig},
    },
    export::{
        frame::{FrameDriver, FramePlan, FrameSpec, TimelineSettings},
        naming::{ExportFormat, export_file_name},
        svg::{SvgDocument, VectorAnimation, animated_svg, static_svg},
        visible::VisibleStroke,
    },
    foundation::{core::Point, error::SpiroResult},
    render::backend::{BackendKind, FrameRGBA, FrameScene, RenderSettings, create_backend},
};

/// Produces every output format from one scene.
///
/// The curve is sampled and simplified once on construction; each export only re-applies the
/// wave and cuts the visible stroke.
#[derive(Clone, Debug)]
pub struct Exporter {
    scene: SceneConfig,
    curve: CurvePath,
}

impl Exporter {
    pub fn new(scene: SceneConfig) -> Self {
        let scene = scene.sanitized();
        let curve = build_curve(&scene.curve, &scene.oscillations, &scene.quality);
        Self { scene, curve }
    }

    pub fn scene(&self) -> &SceneConfig {
        &self.scene
    }

    pub fn curve(&self) -> &CurvePath {
        &self.curve
    }

    /// Curve points with the wave evaluated `time_secs` into the animation.
    pub fn displaced_points(&self, time_secs: f64) -> Vec<Point> {
        wave::apply_all(
            &self.curve.points,
            &self.scene.wave.at_time(time_secs),
            self.curve.bounds,
        )
    }

    /// Everything a backend needs to draw `visible`.
    pub fn frame_scene(&self, visible: &VisibleStroke) -> FrameScene {
        let stroke = &self.scene.stroke;
        FrameScene {
            view_box: self.curve.view_box,
            background: stroke.background,
            stroke_width: stroke.width,
            runs: visible.runs(&self.scene.color_oscillation, stroke.color),
        }
    }

    /// What the live view shows for `state`: the full curve while idle, otherwise the stroke at
    /// the state's eased progress.
    pub fn preview_scene(&self, state: &AnimationState, time_secs: f64) -> FrameScene {
        let points = self.displaced_points(time_secs);
        let visible = match state.status {
            Status::Idle => VisibleStroke::full(&points),
            _ => VisibleStroke::for_progress(
                &points,
                state.progress,
                state.is_erasing,
                state.loop_mode,
            ),
        };
        self.frame_scene(&visible)
    }

    /// Visible stroke for one frame of `plan`.
    pub fn frame_stroke(&self, plan: &FramePlan, spec: &FrameSpec) -> VisibleStroke {
        let points = self.displaced_points(spec.time_secs);
        match plan.driver {
            FrameDriver::Draw => VisibleStroke::for_progress(
                &points,
                spec.eased_progress,
                spec.is_erasing,
                plan.settings.loop_mode,
            ),
            FrameDriver::WaveOnly { .. } | FrameDriver::Still => VisibleStroke::full(&points),
        }
    }

    fn svg_document<'a>(&'a self, points: &'a [Point]) -> SvgDocument<'a> {
        SvgDocument {
            points,
            view_box: self.curve.view_box,
            stroke: &self.scene.stroke,
            colors: &self.scene.color_oscillation,
        }
    }

    pub fn static_svg(&self) -> String {
        let points = self.displaced_points(0.0);
        static_svg(&self.svg_document(&points))
    }

    pub fn animated_svg(&self, anim: &VectorAnimation) -> String {
        let points = self.displaced_points(0.0);
        animated_svg(&self.svg_document(&points), anim)
    }

    /// The finished drawing as a `size x size` frame.
    pub fn render_still(&self, size: u32) -> SpiroResult<FrameRGBA> {
        let mut backend = create_backend(BackendKind::Cpu, &RenderSettings::square(size))?;
        let visible = VisibleStroke::full(&self.displaced_points(0.0));
        backend.render(&self.frame_scene(&visible))
    }

    /// Render every frame of `plan` in order and stream it into `sink`. Returns the frame count.
    #[tracing::instrument(level = "debug", skip_all, fields(frames = plan.frame_count(), size = size))]
    pub fn render_frames(
        &self,
        plan: &FramePlan,
        size: u32,
        sink: &mut dyn FrameSink,
    ) -> SpiroResult<u64> {
        let mut backend = create_backend(BackendKind::Cpu, &RenderSettings::square(size))?;
        sink.begin(SinkConfig {
            width: size,
            height: size,
            fps: plan.settings.fps,
            background: self.scene.stroke.background,
        })?;

        let mut frames = 0u64;
        for spec in plan.specs() {
            let visible = self.frame_stroke(plan, &spec);
            let frame = backend.render(&self.frame_scene(&visible))?;
            sink.push_frame(spec.index, &frame)?;
            frames += 1;
        }
        sink.end()?;
        Ok(frames)
    }

    fn output_path(&self, out_dir: &Path, format: ExportFormat) -> PathBuf {
        out_dir.join(export_file_name(&self.scene.name, format, Utc::now()))
    }

    #[tracing::instrument(skip(self), fields(name = %self.scene.name))]
    pub fn export_static(&self, out_dir: &Path) -> SpiroResult<PathBuf> {
        let path = write_staged(
            &self.output_path(out_dir, ExportFormat::Svg),
            self.static_svg().as_bytes(),
        )?;
        tracing::info!(path = %path.display(), "static svg exported");
        Ok(path)
    }

    #[tracing::instrument(skip(self), fields(name = %self.scene.name))]
    pub fn export_animated_vector(
        &self,
        out_dir: &Path,
        anim: &VectorAnimation,
    ) -> SpiroResult<PathBuf> {
        if anim.easing.is_lossy_as_bezier() {
            tracing::warn!(
                easing = %anim.easing,
                "easing is approximated by a cubic spline in animated svg"
            );
        }
        let path = write_staged(
            &self.output_path(out_dir, ExportFormat::AnimatedSvg),
            self.animated_svg(anim).as_bytes(),
        )?;
        tracing::info!(path = %path.display(), "animated svg exported");
        Ok(path)
    }

    #[tracing::instrument(skip(self), fields(name = %self.scene.name))]
    pub fn export_raster(&self, out_dir: &Path, size: u32) -> SpiroResult<PathBuf> {
        let frame = self.render_still(size)?;
        let bytes = encode_png(&frame, self.scene.stroke.background)?;
        let path = write_staged(&self.output_path(out_dir, ExportFormat::Png), &bytes)?;
        tracing::info!(path = %path.display(), "png exported");
        Ok(path)
    }

    /// Animated GIF of `settings`.
    #[tracing::instrument(skip(self), fields(name = %self.scene.name))]
    pub fn export_frame_sequence(
        &self,
        out_dir: &Path,
        settings: TimelineSettings,
        size: u32,
    ) -> SpiroResult<PathBuf> {
        let plan = FramePlan::new(settings, &self.scene.wave)?;
        let mut sink = GifSink::new(self.output_path(out_dir, ExportFormat::Gif));
        let frames = self.render_frames(&plan, size, &mut sink)?;
        let path = sink.out_path().to_path_buf();
        tracing::info!(path = %path.display(), frames, "gif exported");
        Ok(path)
    }

    /// H.264 MP4 of `settings`; needs `ffmpeg` on `PATH`.
    #[tracing::instrument(skip(self), fields(name = %self.scene.name))]
    pub fn export_video(
        &self,
        out_dir: &Path,
        settings: TimelineSettings,
        size: u32,
    ) -> SpiroResult<PathBuf> {
        let plan = FramePlan::new(settings, &self.scene.wave)?;
        let mut sink = FfmpegSink::new(self.output_path(out_dir, ExportFormat::Mp4));
        let frames = self.render_frames(&plan, size, &mut sink)?;
        let path = sink.out_path().to_path_buf();
        tracing::info!(path = %path.display(), frames, "mp4 exported");
        Ok(path)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/exporter.rs"]
mod tests;

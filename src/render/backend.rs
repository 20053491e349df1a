use crate::foundation::{
    core::{Affine, Point, Rect, Rgb8},
    error::SpiroResult,
};

/// A rendered frame as RGBA8 pixels.
///
/// Backends produce **premultiplied alpha**; the flag makes that explicit at API boundaries.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// RGBA of pixel `(x, y)`; `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Number of pixels that differ from `rgba`.
    pub fn count_pixels_not(&self, rgba: [u8; 4]) -> usize {
        self.data.chunks_exact(4).filter(|px| *px != rgba).count()
    }
}

/// One solid-colored polyline.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeRun {
    pub points: Vec<Point>,
    pub color: Rgb8,
}

/// Everything a backend needs for one frame, in curve coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameScene {
    /// Region of curve space mapped onto the frame (uniform scale, centered).
    pub view_box: Rect,
    pub background: Rgb8,
    /// Stroke width in curve units; scales with the view box like the geometry.
    pub stroke_width: f64,
    pub runs: Vec<StrokeRun>,
}

/// A renderer that turns a [`FrameScene`] into a [`FrameRGBA`].
pub trait RenderBackend {
    /// Draw `scene` onto a fresh frame.
    fn render(&mut self, scene: &FrameScene) -> SpiroResult<FrameRGBA>;

    /// Output size in pixels.
    fn size(&self) -> (u32, u32);
}

/// Available backend kinds.
#[derive(Clone, Copy, Debug, Default)]
pub enum BackendKind {
    /// CPU raster backend powered by `vello_cpu`.
    #[default]
    Cpu,
}

/// Backend-agnostic settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
}

impl RenderSettings {
    pub fn square(size: u32) -> Self {
        Self {
            width: size,
            height: size,
        }
    }
}

/// Create a rendering backend. Fails with a surface error when the size is unusable.
pub fn create_backend(
    kind: BackendKind,
    settings: &RenderSettings,
) -> SpiroResult<Box<dyn RenderBackend>> {
    match kind {
        BackendKind::Cpu => Ok(Box::new(crate::render::cpu::CpuBackend::new(*settings)?)),
    }
}

/// Map `view_box` into a `width x height` frame with uniform scale, centered on both axes.
pub fn view_transform(view_box: Rect, width: u32, height: u32) -> Affine {
    let (vw, vh) = (view_box.width(), view_box.height());
    if vw <= 0.0 || vh <= 0.0 || !vw.is_finite() || !vh.is_finite() {
        // Degenerate boxes just center their origin.
        return Affine::translate((
            f64::from(width) / 2.0 - view_box.x0,
            f64::from(height) / 2.0 - view_box.y0,
        ));
    }
    let scale = (f64::from(width) / vw).min(f64::from(height) / vh);
    let dx = (f64::from(width) - vw * scale) / 2.0;
    let dy = (f64::from(height) - vh * scale) / 2.0;
    Affine::translate((dx, dy)) * Affine::scale(scale) * Affine::translate((-view_box.x0, -view_box.y0))
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;

use crate::{
    curve::path::polyline,
    foundation::{
        core::{Affine, BezPath, Point},
        error::{SpiroError, SpiroResult},
    },
    render::backend::{FrameRGBA, FrameScene, RenderBackend, RenderSettings, view_transform},
};

/// CPU raster backend. The pixmap is allocated once and reused for every frame.
pub struct CpuBackend {
    width: u16,
    height: u16,
    pixmap: vello_cpu::Pixmap,
}

impl CpuBackend {
    pub fn new(settings: RenderSettings) -> SpiroResult<Self> {
        let width = surface_dim(settings.width, "width")?;
        let height = surface_dim(settings.height, "height")?;
        Ok(Self {
            width,
            height,
            pixmap: vello_cpu::Pixmap::new(width, height),
        })
    }
}

fn surface_dim(v: u32, what: &str) -> SpiroResult<u16> {
    match u16::try_from(v) {
        Ok(0) => Err(SpiroError::surface(format!("surface {what} must be non-zero"))),
        Ok(v) => Ok(v),
        Err(_) => Err(SpiroError::surface(format!(
            "surface {what} {v} exceeds {}",
            u16::MAX
        ))),
    }
}

impl RenderBackend for CpuBackend {
    fn render(&mut self, scene: &FrameScene) -> SpiroResult<FrameRGBA> {
        let mut ctx = vello_cpu::RenderContext::new(self.width, self.height);

        let bg = scene.background;
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(bg.r, bg.g, bg.b, 255));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(self.width),
            f64::from(self.height),
        ));

        let transform = view_transform(
            scene.view_box,
            u32::from(self.width),
            u32::from(self.height),
        );
        ctx.set_transform(affine_to_cpu(transform));
        ctx.set_stroke(
            vello_cpu::kurbo::Stroke::new(scene.stroke_width)
                .with_caps(vello_cpu::kurbo::Cap::Round)
                .with_join(vello_cpu::kurbo::Join::Round),
        );
        for run in &scene.runs {
            if run.points.len() < 2 {
                continue;
            }
            let c = run.color;
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, 255));
            ctx.stroke_path(&bezpath_to_cpu(&polyline(&run.points)));
        }

        ctx.flush();
        ctx.render_to_pixmap(&mut self.pixmap);

        Ok(FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: self.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }

    fn size(&self) -> (u32, u32) {
        (u32::from(self.width), u32::from(self.height))
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;

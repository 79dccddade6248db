use crate::{
    foundation::core::{Affine, BezPath, Rgba8, Viewport},
    foundation::error::{HierError, HierResult},
    render::FrameRGBA,
    scene::surface::DrawSurface,
};

/// [`DrawSurface`] backed by the `vello_cpu` rasterizer.
///
/// Draw calls are queued on a render context and resolved into a pixmap by
/// [`CpuSurface::into_frame`].
pub struct CpuSurface {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
}

impl CpuSurface {
    /// Allocate a surface of `viewport` size.
    pub fn new(viewport: Viewport) -> HierResult<Self> {
        viewport.validate()?;
        let width: u16 = viewport
            .width
            .try_into()
            .map_err(|_| HierError::render("surface width exceeds u16"))?;
        let height: u16 = viewport
            .height
            .try_into()
            .map_err(|_| HierError::render("surface height exceeds u16"))?;
        Ok(Self {
            width,
            height,
            ctx: vello_cpu::RenderContext::new(width, height),
        })
    }

    /// Rasterize everything drawn so far and read back premultiplied RGBA8.
    pub fn into_frame(mut self) -> FrameRGBA {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }

    fn set_paint(&mut self, transform: Affine, color: Rgba8) {
        self.ctx.set_transform(affine_to_cpu(transform));
        self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, color.a,
        ));
    }
}

impl DrawSurface for CpuSurface {
    fn viewport(&self) -> Viewport {
        Viewport {
            width: u32::from(self.width),
            height: u32::from(self.height),
        }
    }

    fn clear(&mut self, color: Rgba8) -> HierResult<()> {
        self.set_paint(Affine::IDENTITY, color);
        let r = self.viewport().rect();
        self.ctx
            .fill_rect(&vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1));
        Ok(())
    }

    fn fill_path(&mut self, path: &BezPath, transform: Affine, color: Rgba8) -> HierResult<()> {
        if path.elements().is_empty() {
            return Ok(());
        }
        self.set_paint(transform, color);
        self.ctx.fill_path(&bezpath_to_cpu(path));
        Ok(())
    }

    fn stroke_path(
        &mut self,
        path: &BezPath,
        transform: Affine,
        color: Rgba8,
        width: f64,
    ) -> HierResult<()> {
        if path.elements().is_empty() {
            return Ok(());
        }
        if !(width.is_finite() && width >= 0.0) {
            return Err(HierError::render(format!("invalid stroke width {width}")));
        }
        self.set_paint(transform, color);
        self.ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width));
        self.ctx.stroke_path(&bezpath_to_cpu(path));
        Ok(())
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: kurbo::Point) -> vello_cpu::kurbo::Point {
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

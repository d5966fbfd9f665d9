use crate::foundation::core::{Affine, BezPath, Color, Rect};
use crate::foundation::error::GifResult;
use crate::paint::mode::CompositeMode;
use crate::render::canvas::{Brush, Canvas, LineCap, LineJoin, Paint, StrokeStyle};
use crate::render::frame::{FrameBuffer, checked_dims};
use crate::render::output::FrameRGBA;
use crate::render::pool;
use kurbo::Shape;

const PATH_TOLERANCE: f64 = 0.1;

/// CPU raster canvas powered by `vello_cpu`.
///
/// Draw calls are encoded into a `vello_cpu::RenderContext`; pixels are produced by
/// [`CpuCanvas::finish`] or [`CpuCanvas::into_frame_buffer`]. The target pixmap is borrowed from
/// the process-wide frame pool.
pub struct CpuCanvas {
    ctx: vello_cpu::RenderContext,
    target: Option<vello_cpu::Pixmap>,
    width: u16,
    height: u16,
}

impl CpuCanvas {
    /// Create a transparent canvas of the given size.
    pub fn new(width: u32, height: u32) -> GifResult<Self> {
        let (w, h) = checked_dims(width, height)?;
        let target = pool::with_global(|p| p.borrow(w, h));
        Ok(Self {
            ctx: vello_cpu::RenderContext::new(w, h),
            target: Some(target),
            width: w,
            height: h,
        })
    }

    /// Create a canvas whose background is filled with `color` before any other draw.
    pub fn with_background(width: u32, height: u32, color: Color) -> GifResult<Self> {
        let mut canvas = Self::new(width, height)?;
        if !color.is_unset() {
            canvas.ctx.set_paint(cpu_color(color));
            canvas.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(canvas.width),
                f64::from(canvas.height),
            ));
        }
        Ok(canvas)
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u32 {
        u32::from(self.height)
    }

    /// Full-canvas rectangle.
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }

    /// Rasterize and read back premultiplied pixels; the target goes back to the pool.
    pub fn finish(mut self) -> FrameRGBA {
        let pixmap = self.rasterize();
        let out = FrameRGBA {
            width: u32::from(pixmap.width()),
            height: u32::from(pixmap.height()),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        };
        pool::with_global(|p| p.release(pixmap));
        out
    }

    /// Rasterize and keep the pixels as a new frame.
    pub fn into_frame_buffer(mut self) -> FrameBuffer {
        FrameBuffer::from_pixmap(self.rasterize())
    }

    fn rasterize(&mut self) -> vello_cpu::Pixmap {
        let mut pixmap = self
            .target
            .take()
            .unwrap_or_else(|| vello_cpu::Pixmap::new(self.width, self.height));
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        pixmap
    }

    fn with_paint(&mut self, paint: &Paint, draw: impl FnOnce(&mut vello_cpu::RenderContext)) {
        let ctx = &mut self.ctx;
        // A translucent paint composites as one layer; the mode applies when the layer pops.
        let layered = paint.alpha < 255;
        if layered {
            let mix = paint.mode.to_blend_mode();
            let alpha = f32::from(paint.alpha) / 255.0;
            ctx.push_layer(None, Some(mix), Some(alpha), None, None);
        } else if paint.mode != CompositeMode::SrcOver {
            ctx.set_blend_mode(paint.mode.to_blend_mode());
        }
        draw(&mut *ctx);
        ctx.set_blend_mode(vello_cpu::peniko::BlendMode::default());
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        if layered {
            ctx.pop_layer();
        }
    }

    fn fill_with_brush(
        &mut self,
        path: &vello_cpu::kurbo::BezPath,
        brush: Brush<'_>,
        paint: &Paint,
    ) {
        self.with_paint(paint, |ctx| {
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            match brush {
                Brush::Solid(color) => ctx.set_paint(cpu_color(color)),
                Brush::Frame { frame, transform } => {
                    ctx.set_paint(frame.to_image_paint());
                    ctx.set_paint_transform(affine_to_cpu(transform));
                }
            }
            ctx.fill_path(path);
        });
    }
}

impl Drop for CpuCanvas {
    fn drop(&mut self) {
        if let Some(pixmap) = self.target.take() {
            pool::with_global(|p| p.release(pixmap));
        }
    }
}

impl Canvas for CpuCanvas {
    fn draw_frame(&mut self, frame: &FrameBuffer, dst: Rect, paint: &Paint) {
        let (fw, fh) = (f64::from(frame.width()), f64::from(frame.height()));
        let tr = Affine::translate((dst.x0, dst.y0))
            * Affine::scale_non_uniform(dst.width() / fw, dst.height() / fh);
        self.with_paint(paint, |ctx| {
            ctx.set_transform(affine_to_cpu(tr));
            ctx.set_paint(frame.to_image_paint());
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, fw, fh));
        });
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f64, brush: Brush<'_>, paint: &Paint) {
        let radius = radius.clamp(0.0, rect.width().min(rect.height()) / 2.0);
        let path = kurbo::RoundedRect::from_rect(rect, radius).to_path(PATH_TOLERANCE);
        self.fill_with_brush(&bezpath_to_cpu(&path), brush, paint);
    }

    fn fill_oval(&mut self, rect: Rect, brush: Brush<'_>, paint: &Paint) {
        let path = kurbo::Ellipse::from_rect(rect).to_path(PATH_TOLERANCE);
        self.fill_with_brush(&bezpath_to_cpu(&path), brush, paint);
    }

    fn stroke_path(&mut self, path: &BezPath, style: &StrokeStyle, color: Color, paint: &Paint) {
        let cpu_path = bezpath_to_cpu(path);
        let stroke = stroke_to_cpu(style);
        self.with_paint(paint, |ctx| {
            ctx.set_stroke(stroke);
            ctx.set_paint(cpu_color(color));
            ctx.stroke_path(&cpu_path);
        });
    }
}

fn cpu_color(color: Color) -> vello_cpu::peniko::Color {
    let [r, g, b, a] = color.to_rgba8();
    vello_cpu::peniko::Color::from_rgba8(r, g, b, a)
}

fn stroke_to_cpu(style: &StrokeStyle) -> vello_cpu::kurbo::Stroke {
    let cap = match style.cap {
        LineCap::Butt => vello_cpu::kurbo::Cap::Butt,
        LineCap::Square => vello_cpu::kurbo::Cap::Square,
        LineCap::Round => vello_cpu::kurbo::Cap::Round,
    };
    let join = match style.join {
        LineJoin::Miter => vello_cpu::kurbo::Join::Miter,
        LineJoin::Bevel => vello_cpu::kurbo::Join::Bevel,
        LineJoin::Round => vello_cpu::kurbo::Join::Round,
    };
    vello_cpu::kurbo::Stroke::new(style.width)
        .with_caps(cap)
        .with_join(join)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;

use crate::foundation::core::Color;
use crate::foundation::error::GifResult;
use crate::paint::mode::CompositeMode;
use crate::render::canvas::{Brush, Canvas, Paint};
use crate::render::cpu::CpuCanvas;
use crate::render::frame::FrameBuffer;
use crate::transform::shader::FrameShader;

/// Clip `frame` to a rounded rectangle of its own size.
///
/// A radius of `0` returns the frame itself.
pub fn round_corners(frame: &FrameBuffer, radius: f64) -> GifResult<FrameBuffer> {
    if radius <= 0.0 || radius.is_nan() {
        return Ok(frame.clone());
    }
    let mut canvas = CpuCanvas::new(frame.width(), frame.height())?;
    let bounds = canvas.bounds();
    let shader = FrameShader::new(bounds, frame.width(), frame.height());
    canvas.fill_rounded_rect(bounds, radius, shader.brush(frame), &Paint::default());
    Ok(canvas.into_frame_buffer())
}

/// Clip `frame` to its inscribed ellipse, then paint `filler` behind it inside the ellipse.
pub fn oval_clip(frame: &FrameBuffer, filler: Color) -> GifResult<FrameBuffer> {
    let mut canvas = CpuCanvas::new(frame.width(), frame.height())?;
    let bounds = canvas.bounds();
    let shader = FrameShader::new(bounds, frame.width(), frame.height());
    canvas.fill_oval(bounds, shader.brush(frame), &Paint::default());
    if !filler.is_unset() {
        canvas.fill_oval(
            bounds,
            Brush::Solid(filler),
            &Paint::default().with_mode(CompositeMode::DstOver),
        );
    }
    Ok(canvas.into_frame_buffer())
}

#[cfg(test)]
#[path = "../../tests/unit/widget/still.rs"]
mod tests;

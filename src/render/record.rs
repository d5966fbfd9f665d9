use crate::foundation::core::{Affine, BezPath, Color, Rect};
use crate::render::canvas::{Brush, Canvas, Paint, StrokeStyle};
use crate::render::frame::FrameBuffer;

/// How a recorded shape was filled.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordedFill {
    /// A single color.
    Solid(Color),
    /// Frame pixels under a frame-to-canvas transform.
    Frame {
        /// Sampled frame width.
        frame_width: u32,
        /// Sampled frame height.
        frame_height: u32,
        /// Frame-to-canvas mapping.
        transform: Affine,
    },
}

impl From<Brush<'_>> for RecordedFill {
    fn from(brush: Brush<'_>) -> Self {
        match brush {
            Brush::Solid(c) => Self::Solid(c),
            Brush::Frame { frame, transform } => Self::Frame {
                frame_width: frame.width(),
                frame_height: frame.height(),
                transform,
            },
        }
    }
}

/// One recorded canvas call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// [`Canvas::draw_frame`].
    Frame {
        /// Blit target.
        dst: Rect,
        /// Source frame width.
        frame_width: u32,
        /// Source frame height.
        frame_height: u32,
        /// Paint used.
        paint: Paint,
    },
    /// [`Canvas::fill_rounded_rect`].
    RoundedRect {
        /// Shape bounds.
        rect: Rect,
        /// Corner radius.
        radius: f64,
        /// Fill source.
        fill: RecordedFill,
        /// Paint used.
        paint: Paint,
    },
    /// [`Canvas::fill_oval`].
    Oval {
        /// Ellipse bounds.
        rect: Rect,
        /// Fill source.
        fill: RecordedFill,
        /// Paint used.
        paint: Paint,
    },
    /// [`Canvas::stroke_path`].
    Stroke {
        /// Stroked geometry.
        path: BezPath,
        /// Stroke style.
        style: StrokeStyle,
        /// Stroke color.
        color: Color,
        /// Paint used.
        paint: Paint,
    },
}

/// Canvas that records calls instead of rasterizing, for hosts that replay draws and for tests.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded calls in order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Take the recorded calls, leaving the recorder empty.
    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }
}

impl Canvas for RecordingCanvas {
    fn draw_frame(&mut self, frame: &FrameBuffer, dst: Rect, paint: &Paint) {
        self.ops.push(DrawOp::Frame {
            dst,
            frame_width: frame.width(),
            frame_height: frame.height(),
            paint: *paint,
        });
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f64, brush: Brush<'_>, paint: &Paint) {
        self.ops.push(DrawOp::RoundedRect {
            rect,
            radius,
            fill: brush.into(),
            paint: *paint,
        });
    }

    fn fill_oval(&mut self, rect: Rect, brush: Brush<'_>, paint: &Paint) {
        self.ops.push(DrawOp::Oval {
            rect,
            fill: brush.into(),
            paint: *paint,
        });
    }

    fn stroke_path(&mut self, path: &BezPath, style: &StrokeStyle, color: Color, paint: &Paint) {
        self.ops.push(DrawOp::Stroke {
            path: path.clone(),
            style: *style,
            color,
            paint: *paint,
        });
    }
}

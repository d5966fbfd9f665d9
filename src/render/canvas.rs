use crate::foundation::core::{Affine, BezPath, Color, Rect};
use crate::paint::mode::CompositeMode;
use crate::render::frame::FrameBuffer;

/// Per-draw paint state handed in by the host (the "base paint") or built by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Paint {
    /// Layer opacity applied to the whole draw, `255` is opaque.
    pub alpha: u8,
    /// How the draw combines with existing content.
    pub mode: CompositeMode,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            alpha: 255,
            mode: CompositeMode::SrcOver,
        }
    }
}

impl Paint {
    /// Return a copy with a different composite mode.
    pub fn with_mode(mut self, mode: CompositeMode) -> Self {
        self.mode = mode;
        self
    }

    /// Return a copy with a different layer alpha.
    pub fn with_alpha(mut self, alpha: u8) -> Self {
        self.alpha = alpha;
        self
    }
}

/// What fills a shape.
#[derive(Clone, Copy, Debug)]
pub enum Brush<'a> {
    /// A single color.
    Solid(Color),
    /// Pixels sampled from a frame; `transform` maps frame pixel space to canvas space.
    Frame {
        /// Sampled frame.
        frame: &'a FrameBuffer,
        /// Frame-to-canvas mapping.
        transform: Affine,
    },
}

/// Line cap for stroked paths.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineCap {
    /// Flat cap at the endpoint.
    #[default]
    Butt,
    /// Square cap extending past the endpoint.
    Square,
    /// Semicircular cap.
    Round,
}

/// Line join for stroked paths.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineJoin {
    /// Sharp mitered corner.
    #[default]
    Miter,
    /// Beveled corner.
    Bevel,
    /// Rounded corner.
    Round,
}

/// Stroke geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke width in canvas pixels.
    pub width: f64,
    /// Cap for open subpath ends.
    pub cap: LineCap,
    /// Join between segments.
    pub join: LineJoin,
}

impl StrokeStyle {
    /// A stroke with round caps and joins.
    pub fn round(width: f64) -> Self {
        Self {
            width,
            cap: LineCap::Round,
            join: LineJoin::Round,
        }
    }
}

/// Drawing surface that the transformation and widget render into.
///
/// Implementations decide when rasterization happens. [`crate::CpuCanvas`] records into a
/// `vello_cpu` context and rasterizes on `finish`, [`crate::RecordingCanvas`] only records.
pub trait Canvas {
    /// Blit `frame` scaled into `dst`, without clipping.
    fn draw_frame(&mut self, frame: &FrameBuffer, dst: Rect, paint: &Paint);

    /// Fill a rounded rectangle with a uniform corner `radius`.
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f64, brush: Brush<'_>, paint: &Paint);

    /// Fill the ellipse inscribed in `rect`.
    fn fill_oval(&mut self, rect: Rect, brush: Brush<'_>, paint: &Paint);

    /// Stroke `path` with a solid color.
    fn stroke_path(&mut self, path: &BezPath, style: &StrokeStyle, color: Color, paint: &Paint);
}

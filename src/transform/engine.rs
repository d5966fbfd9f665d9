use crate::foundation::core::{Color, Rect};
use crate::foundation::math::alpha_percent_to_byte;
use crate::paint::mode::CompositeMode;
use crate::render::canvas::{Brush, Canvas, Paint, StrokeStyle};
use crate::render::frame::FrameBuffer;
use crate::transform::border::BorderPath;
use crate::transform::shader::{FrameShader, ShaderCache};

/// Counters describing cache behavior of a [`GifTransformation`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TransformStats {
    /// Times the shader slot was marked stale by a parameter or bounds change.
    pub invalidations: u64,
    /// Times a shader was built on draw.
    pub shader_builds: u64,
    /// Draws that took the unstyled blit path.
    pub fast_path_draws: u64,
    /// Draws that took the rounded/tinted/bordered path.
    pub styled_draws: u64,
}

/// Per-frame transform that renders a frame rounded, tinted and bordered.
///
/// Setters only invalidate the cached shader when the stored value actually changes, and return
/// `&mut Self` for chaining:
///
/// ```
/// use giftransform::{Color, CompositeMode, GifTransformation};
///
/// let mut t = GifTransformation::new(12.0, 4.0);
/// t.set_border_color(Color::GREEN)
///     .set_filler_color(Color::BLACK, CompositeMode::SrcOver)
///     .set_fill_alpha(25);
/// assert_eq!(t.filler_alpha_byte(), 63);
/// ```
#[derive(Clone, Debug)]
pub struct GifTransformation {
    destination: Rect,
    corner_radius: f64,
    border_width: f64,
    border_color: Color,
    filler_color: Color,
    fill_alpha: u8,
    mode: CompositeMode,

    shader: ShaderCache,
    border: BorderPath,
    stats: TransformStats,
}

impl Default for GifTransformation {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl GifTransformation {
    /// Create a transformation; negative inputs clamp to zero.
    pub fn new(corner_radius: f64, border_width: f64) -> Self {
        Self {
            destination: Rect::ZERO,
            corner_radius: corner_radius.max(0.0),
            border_width: border_width.max(0.0),
            border_color: Color::BLACK,
            filler_color: Color::TRANSPARENT,
            fill_alpha: 100,
            mode: CompositeMode::SrcOver,
            shader: ShaderCache::Stale,
            border: BorderPath::new(),
            stats: TransformStats::default(),
        }
    }

    /// Corner radius applied when drawing; 0 when frames are not rounded.
    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }

    /// Set the corner radius, or 0 to remove rounding.
    pub fn set_corner_radius(&mut self, corner_radius: f64) -> &mut Self {
        let corner_radius = corner_radius.max(0.0);
        if corner_radius != self.corner_radius {
            self.corner_radius = corner_radius;
            self.invalidate();
        }
        self
    }

    /// Border stroke width; 0 draws no border.
    pub fn border_width(&self) -> f64 {
        self.border_width
    }

    /// Set the border stroke width.
    pub fn set_border_width(&mut self, border_width: f64) -> &mut Self {
        let border_width = border_width.max(0.0);
        if border_width != self.border_width {
            self.border_width = border_width;
            self.invalidate();
        }
        self
    }

    /// Border stroke color.
    pub fn border_color(&self) -> Color {
        self.border_color
    }

    /// Set the border stroke color.
    pub fn set_border_color(&mut self, border_color: Color) -> &mut Self {
        if border_color != self.border_color {
            self.border_color = border_color;
            self.invalidate();
        }
        self
    }

    /// Overlay color; `Color::TRANSPARENT` means no overlay.
    pub fn filler_color(&self) -> Color {
        self.filler_color
    }

    /// Composite mode of the overlay.
    pub fn composite_mode(&self) -> CompositeMode {
        self.mode
    }

    /// Set the overlay color and how it composites over the frame.
    pub fn set_filler_color(&mut self, filler_color: Color, mode: CompositeMode) -> &mut Self {
        if filler_color != self.filler_color {
            self.filler_color = filler_color;
            self.invalidate();
        }
        if mode != self.mode {
            self.mode = mode;
            self.invalidate();
        }
        self
    }

    /// Overlay opacity percentage.
    pub fn fill_alpha(&self) -> u8 {
        self.fill_alpha
    }

    /// Overlay opacity as a byte alpha.
    pub fn filler_alpha_byte(&self) -> u8 {
        alpha_percent_to_byte(self.fill_alpha)
    }

    /// Set the overlay opacity percentage (`100` is fully visible).
    pub fn set_fill_alpha(&mut self, percent: u8) -> &mut Self {
        if percent != self.fill_alpha {
            self.fill_alpha = percent;
            self.invalidate();
        }
        self
    }

    /// Current draw target.
    pub fn destination_rect(&self) -> Rect {
        self.destination
    }

    /// Update the draw target. Always invalidates: the shader scale depends on it.
    pub fn on_bounds_change(&mut self, bounds: Rect) {
        self.destination = bounds;
        self.invalidate();
    }

    /// Border geometry from the last bordered draw.
    pub fn border_path(&self) -> &BorderPath {
        &self.border
    }

    /// The cached shader, if any.
    pub fn shader(&self) -> Option<&FrameShader> {
        self.shader.valid()
    }

    /// Return `true` when a shader is cached.
    pub fn is_shader_valid(&self) -> bool {
        self.shader.is_valid()
    }

    /// Cache counters.
    pub fn stats(&self) -> TransformStats {
        self.stats
    }

    /// Return `true` when no styling applies and frames are blitted as-is.
    pub fn is_unstyled(&self) -> bool {
        self.corner_radius == 0.0 && self.border_width == 0.0 && self.filler_color.is_unset()
    }

    fn invalidate(&mut self) {
        self.shader.invalidate();
        self.stats.invalidations = self.stats.invalidations.saturating_add(1);
    }

    fn shader_for(&mut self, frame: &FrameBuffer) -> FrameShader {
        if let ShaderCache::Valid(s) = self.shader
            && s.fits(frame)
        {
            return s;
        }
        let s = FrameShader::new(self.destination, frame.width(), frame.height());
        tracing::debug!(
            dst_w = self.destination.width(),
            dst_h = self.destination.height(),
            buf_w = frame.width(),
            buf_h = frame.height(),
            "rebuilt frame shader"
        );
        self.shader = ShaderCache::Valid(s);
        self.stats.shader_builds = self.stats.shader_builds.saturating_add(1);
        s
    }

    /// Draw one decoded frame into the destination rectangle.
    ///
    /// `paint` is the host's base paint. It is used as-is for the unstyled blit and for the
    /// rounded image fill.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn draw(&mut self, canvas: &mut dyn Canvas, paint: &Paint, frame: &FrameBuffer) {
        let dst = self.destination;

        if self.is_unstyled() {
            tracing::trace!("unstyled blit");
            self.stats.fast_path_draws = self.stats.fast_path_draws.saturating_add(1);
            canvas.draw_frame(frame, dst, paint);
            return;
        }

        self.stats.styled_draws = self.stats.styled_draws.saturating_add(1);
        let shader = self.shader_for(frame);
        canvas.fill_rounded_rect(dst, self.corner_radius, shader.brush(frame), paint);

        if !self.filler_color.is_unset() {
            let tint = self.filler_color.with_alpha(self.filler_alpha_byte());
            let filler_paint = Paint::default().with_mode(self.mode);
            canvas.fill_rounded_rect(dst, self.corner_radius, Brush::Solid(tint), &filler_paint);
        }

        if self.border_width > 0.0 {
            let (width, radius) = (self.border_width, self.corner_radius);
            self.border.rebuild(dst, width, radius);
            canvas.stroke_path(
                self.border.path(),
                &StrokeStyle::round(self.border_width),
                self.border_color,
                &Paint::default(),
            );
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/engine.rs"]
mod tests;

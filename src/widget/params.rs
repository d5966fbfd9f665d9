use crate::foundation::core::Color;
use crate::paint::mode::CompositeMode;
use crate::transform::engine::GifTransformation;

/// The widget's visual configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualParameters {
    /// Corner radius in pixels, `0` for square corners.
    pub corner_radius: f64,
    /// Border width in pixels, `0` for no border.
    pub border_width: f64,
    /// Border color.
    pub border_color: Color,
    /// Overlay color; `Color::TRANSPARENT` for none.
    pub filler_color: Color,
    /// Overlay opacity percentage.
    pub filler_alpha: u8,
    /// Overlay composite mode.
    pub composite_mode: CompositeMode,
}

impl Default for VisualParameters {
    fn default() -> Self {
        Self {
            corner_radius: 0.0,
            border_width: 0.0,
            border_color: Color::BLACK,
            filler_color: Color::TRANSPARENT,
            filler_alpha: 100,
            composite_mode: CompositeMode::SrcOver,
        }
    }
}

impl VisualParameters {
    /// Re-apply every field to `t`. Unchanged fields leave its cache alone.
    pub fn apply_to(&self, t: &mut GifTransformation) {
        t.set_fill_alpha(self.filler_alpha)
            .set_corner_radius(self.corner_radius)
            .set_border_width(self.border_width)
            .set_border_color(self.border_color)
            .set_filler_color(self.filler_color, self.composite_mode);
    }
}

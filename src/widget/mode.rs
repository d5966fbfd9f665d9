use crate::foundation::core::Color;

/// How the widget renders its content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// Per-frame rounded rect, overlay and border.
    #[default]
    RoundedTransform,
    /// Still bitmap clipped to an ellipse, `filler` composited behind it.
    OvalClip {
        /// Color drawn destination-over inside the ellipse.
        filler: Color,
    },
}

/// Render mode selection.
pub mod mode;
/// Visual parameters mirrored into the transformation.
pub mod params;
/// Displayed content.
pub mod source;
/// One-shot transforms for still bitmaps.
pub mod still;
/// The widget controller.
pub mod view;

//! giftransform renders animated GIFs with rounded corners, a tint overlay and a border.
//!
//! The crate is split into a per-frame engine and a widget controller:
//!
//! - [`GifTransformation`] draws one decoded frame into a destination rectangle
//! - [`GifView`] owns the transformation, the playing [`GifAnimation`] and the styling
//! - Drawing goes through the [`Canvas`] trait; [`CpuCanvas`] rasterizes with `vello_cpu`
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Animated frame sources.
pub mod anim;
/// JSON widget styles.
pub mod config;
/// Color literals and composite modes.
pub mod paint;
/// Drawing surfaces and frame storage.
pub mod render;
/// The per-frame transformation.
pub mod transform;
/// The widget controller.
pub mod widget;

pub use crate::foundation::core::{Affine, BezPath, Color, Point, Rect, Rgba8Premul, Vec2};
pub use crate::foundation::error::{GifError, GifResult};
pub use crate::foundation::math::alpha_percent_to_byte;

pub use crate::anim::gif::GifAnimation;
pub use crate::anim::{AnimatedSource, AnimationListener};
pub use crate::config::style::WidgetStyle;
pub use crate::paint::color::parse_color;
pub use crate::paint::mode::CompositeMode;
pub use crate::render::canvas::{Brush, Canvas, LineCap, LineJoin, Paint, StrokeStyle};
pub use crate::render::cpu::CpuCanvas;
pub use crate::render::frame::FrameBuffer;
pub use crate::render::output::FrameRGBA;
pub use crate::render::pool;
pub use crate::render::record::{DrawOp, RecordedFill, RecordingCanvas};
pub use crate::transform::engine::{GifTransformation, TransformStats};
pub use crate::widget::mode::RenderMode;
pub use crate::widget::params::VisualParameters;
pub use crate::widget::source::Content;
pub use crate::widget::view::GifView;

use serde::{Deserialize, Serialize};
use vello_cpu::peniko::{BlendMode, Compose, Mix};

/// Pixel-blending rule used when a draw lands on existing canvas content.
///
/// The Porter-Duff operators map onto `Compose`; the separable blend modes map onto `Mix`
/// with source-over composition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompositeMode {
    /// Destination is cleared.
    Clear,
    /// Source replaces destination.
    Src,
    /// Destination is kept.
    Dst,
    /// Source over destination.
    #[default]
    SrcOver,
    /// Destination over source.
    DstOver,
    /// Source where destination is present.
    SrcIn,
    /// Destination where source is present.
    DstIn,
    /// Source where destination is absent.
    SrcOut,
    /// Destination where source is absent.
    DstOut,
    /// Source atop destination.
    SrcAtop,
    /// Destination atop source.
    DstAtop,
    /// Non-overlapping regions of both.
    Xor,
    /// Saturating sum.
    Add,
    /// Channel-wise multiply.
    Multiply,
    /// Inverse multiply of inverses.
    Screen,
    /// Multiply or screen depending on destination.
    Overlay,
    /// Channel-wise minimum.
    Darken,
    /// Channel-wise maximum.
    Lighten,
}

impl CompositeMode {
    /// The equivalent `vello_cpu` blend mode.
    pub fn to_blend_mode(self) -> BlendMode {
        let (mix, compose) = match self {
            Self::Clear => (Mix::Normal, Compose::Clear),
            Self::Src => (Mix::Normal, Compose::Copy),
            Self::Dst => (Mix::Normal, Compose::Dest),
            Self::SrcOver => (Mix::Normal, Compose::SrcOver),
            Self::DstOver => (Mix::Normal, Compose::DestOver),
            Self::SrcIn => (Mix::Normal, Compose::SrcIn),
            Self::DstIn => (Mix::Normal, Compose::DestIn),
            Self::SrcOut => (Mix::Normal, Compose::SrcOut),
            Self::DstOut => (Mix::Normal, Compose::DestOut),
            Self::SrcAtop => (Mix::Normal, Compose::SrcAtop),
            Self::DstAtop => (Mix::Normal, Compose::DestAtop),
            Self::Xor => (Mix::Normal, Compose::Xor),
            Self::Add => (Mix::Normal, Compose::Plus),
            Self::Multiply => (Mix::Multiply, Compose::SrcOver),
            Self::Screen => (Mix::Screen, Compose::SrcOver),
            Self::Overlay => (Mix::Overlay, Compose::SrcOver),
            Self::Darken => (Mix::Darken, Compose::SrcOver),
            Self::Lighten => (Mix::Lighten, Compose::SrcOver),
        };
        BlendMode::new(mix, compose)
    }
}

use crate::foundation::core::Color;
use crate::foundation::error::{GifError, GifResult};
use crate::paint::color::ColorDef;
use crate::paint::mode::CompositeMode;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// Declarative widget style. Every field is optional; absent fields leave the widget unchanged.
///
/// Colors accept `"#RRGGBB"`, `"#AARRGGBB"`, a color name, or a packed ARGB integer.
///
/// ```
/// use giftransform::WidgetStyle;
///
/// let style = WidgetStyle::from_json_str(r#"{ "corner_radius": 67, "border_color": "green" }"#)
///     .unwrap();
/// assert_eq!(style.corner_radius, Some(67.0));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WidgetStyle {
    /// Corner radius in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
    /// Border stroke width in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    /// Border stroke color.
    #[serde(
        default,
        deserialize_with = "de_opt_color",
        skip_serializing_if = "Option::is_none"
    )]
    pub border_color: Option<Color>,
    /// Overlay color; transparent disables the overlay.
    #[serde(
        default,
        deserialize_with = "de_opt_color",
        skip_serializing_if = "Option::is_none"
    )]
    pub filler_color: Option<Color>,
    /// Overlay opacity percentage, `0..=100`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filler_alpha: Option<u8>,
    /// How the overlay composites over the frame.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composite_mode: Option<CompositeMode>,
    /// Loops to play before stopping; `0` is infinite.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loop_count: Option<u16>,
    /// Render through the oval clip instead of the rounded transform.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oval: Option<bool>,
}

fn de_opt_color<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<ColorDef>::deserialize(deserializer)?.map(|c| c.0))
}

impl WidgetStyle {
    /// Load and validate a style file.
    pub fn from_path(path: impl AsRef<Path>) -> GifResult<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .map_err(|e| GifError::validation(format!("open style '{}': {e}", path.display())))?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Parse and validate a style from a JSON reader.
    pub fn from_reader(reader: impl Read) -> GifResult<Self> {
        let style: Self =
            serde_json::from_reader(reader).map_err(|e| GifError::serde(e.to_string()))?;
        style.validate()?;
        Ok(style)
    }

    /// Parse and validate a style from a JSON string.
    pub fn from_json_str(s: &str) -> GifResult<Self> {
        let style: Self = serde_json::from_str(s).map_err(|e| GifError::serde(e.to_string()))?;
        style.validate()?;
        Ok(style)
    }

    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> GifResult<()> {
        if let Some(alpha) = self.filler_alpha
            && alpha > 100
        {
            return Err(GifError::validation(format!(
                "filler_alpha must be in 0..=100, got {alpha}"
            )));
        }
        for (name, v) in [
            ("corner_radius", self.corner_radius),
            ("border_width", self.border_width),
        ] {
            if let Some(v) = v
                && !v.is_finite()
            {
                return Err(GifError::validation(format!("{name} must be finite")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/style.rs"]
mod tests;

use crate::foundation::core::Color;
use crate::foundation::error::{GifError, GifResult};
use serde::Deserialize;

const NAMED_COLORS: &[(&str, u32)] = &[
    ("black", 0xFF00_0000),
    ("darkgray", 0xFF44_4444),
    ("darkgrey", 0xFF44_4444),
    ("gray", 0xFF88_8888),
    ("grey", 0xFF88_8888),
    ("lightgray", 0xFFCC_CCCC),
    ("lightgrey", 0xFFCC_CCCC),
    ("white", 0xFFFF_FFFF),
    ("red", 0xFFFF_0000),
    ("green", 0xFF00_FF00),
    ("blue", 0xFF00_00FF),
    ("yellow", 0xFFFF_FF00),
    ("cyan", 0xFF00_FFFF),
    ("magenta", 0xFFFF_00FF),
    ("aqua", 0xFF00_FFFF),
    ("fuchsia", 0xFFFF_00FF),
    ("lime", 0xFF00_FF00),
    ("maroon", 0xFF80_0000),
    ("navy", 0xFF00_0080),
    ("olive", 0xFF80_8000),
    ("purple", 0xFF80_0080),
    ("silver", 0xFFC0_C0C0),
    ("teal", 0xFF00_8080),
    ("transparent", 0x0000_0000),
];

/// Parse a color literal.
///
/// Accepts `#RRGGBB`, `#AARRGGBB` (hex digits are case-insensitive) and the standard color
/// names (`"red"`, `"lightgrey"`, ...). Anything else is a [`GifError::Color`].
pub fn parse_color(s: &str) -> GifResult<Color> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }

    let lower = s.to_ascii_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|&(_, argb)| Color(argb))
        .ok_or_else(|| GifError::color(format!("unknown color \"{s}\"")))
}

fn parse_hex(hex: &str) -> GifResult<Color> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(GifError::color(format!("invalid hex color \"#{hex}\"")));
    }
    let v = u32::from_str_radix(hex, 16)
        .map_err(|_| GifError::color(format!("invalid hex color \"#{hex}\"")))?;
    match hex.len() {
        6 => Ok(Color(0xFF00_0000 | v)),
        8 => Ok(Color(v)),
        _ => Err(GifError::color(
            "hex color must be #RRGGBB or #AARRGGBB (case-insensitive)",
        )),
    }
}

/// Serde-facing color definition: a color literal string or a packed ARGB integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ColorDef(pub(crate) Color);

impl<'de> Deserialize<'de> for ColorDef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Literal(String),
            Argb(u32),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Literal(s) => parse_color(&s)
                .map(ColorDef)
                .map_err(serde::de::Error::custom),
            Repr::Argb(v) => Ok(ColorDef(Color(v))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/paint/color.rs"]
mod tests;

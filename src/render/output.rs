use crate::foundation::error::{GifError, GifResult};
use crate::foundation::math::unpremultiply_rgba8_in_place;
use std::path::Path;

/// A rasterized canvas as RGBA8 pixels.
///
/// Canvas output is **premultiplied alpha**; the `premultiplied` flag keeps that explicit at API
/// boundaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// `[r, g, b, a]` at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let d = &self.data;
        Some([d[idx], d[idx + 1], d[idx + 2], d[idx + 3]])
    }

    /// Convert to straight alpha. Already-straight frames are returned unchanged.
    pub fn to_straight(&self) -> Self {
        let mut out = self.clone();
        if out.premultiplied {
            unpremultiply_rgba8_in_place(&mut out.data);
            out.premultiplied = false;
        }
        out
    }

    /// Write the frame as a straight-alpha PNG, creating parent directories.
    pub fn save_png(&self, path: impl AsRef<Path>) -> GifResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                GifError::validation(format!("create output dir '{}': {e}", parent.display()))
            })?;
        }
        let straight = self.to_straight();
        image::save_buffer_with_format(
            path,
            &straight.data,
            straight.width,
            straight.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| GifError::validation(format!("write png '{}': {e}", path.display())))
    }
}

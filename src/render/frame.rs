use crate::foundation::core::Color;
use crate::foundation::error::{GifError, GifResult};
use crate::foundation::math::premultiply_rgba8_in_place;
use anyhow::Context;
use std::sync::Arc;
use vello_cpu::peniko::color::PremulRgba8;

/// One decoded frame as premultiplied RGBA8, shared by reference.
///
/// Clones are cheap: the pixel storage is behind an `Arc`, so a frame can be held by an animated
/// source and handed to the canvas without copying.
#[derive(Clone)]
pub struct FrameBuffer {
    pixmap: Arc<vello_cpu::Pixmap>,
}

impl std::fmt::Debug for FrameBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameBuffer")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

impl FrameBuffer {
    /// Build a frame from tightly packed, premultiplied RGBA8 bytes.
    pub fn from_premul_rgba8(bytes: &[u8], width: u32, height: u32) -> GifResult<Self> {
        let (w, h) = checked_dims(width, height)?;
        if bytes.len()
            != (width as usize)
                .saturating_mul(height as usize)
                .saturating_mul(4)
        {
            return Err(GifError::validation("frame byte len mismatch"));
        }
        let mut pixels = Vec::with_capacity(usize::from(w) * usize::from(h));
        for px in bytes.chunks_exact(4) {
            pixels.push(PremulRgba8::from_u8_array([px[0], px[1], px[2], px[3]]));
        }
        let has_alpha = bytes.chunks_exact(4).any(|px| px[3] != 255);
        let pixmap = vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, has_alpha);
        Ok(Self::from_pixmap(pixmap))
    }

    /// Build a frame from tightly packed, straight-alpha RGBA8 bytes.
    pub fn from_rgba8(bytes: &[u8], width: u32, height: u32) -> GifResult<Self> {
        let mut tmp = bytes.to_vec();
        premultiply_rgba8_in_place(&mut tmp);
        Self::from_premul_rgba8(&tmp, width, height)
    }

    /// A frame filled with one color.
    pub fn solid(color: Color, width: u32, height: u32) -> GifResult<Self> {
        let px = color.to_rgba8_premul().to_array();
        let n = (width as usize).saturating_mul(height as usize);
        let bytes: Vec<u8> = std::iter::repeat_n(px, n).flatten().collect();
        Self::from_premul_rgba8(&bytes, width, height)
    }

    /// Decode encoded still-image bytes (PNG, JPEG, the first frame of a GIF, ...).
    pub fn decode(bytes: &[u8]) -> GifResult<Self> {
        let dyn_img = image::load_from_memory(bytes)
            .context("decode image from memory")
            .map_err(|e| GifError::decode(format!("{e:#}")))?;
        let rgba = dyn_img.to_rgba8();
        let (width, height) = rgba.dimensions();
        Self::from_rgba8(rgba.as_raw(), width, height)
    }

    pub(crate) fn from_pixmap(pixmap: vello_cpu::Pixmap) -> Self {
        Self {
            pixmap: Arc::new(pixmap),
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        u32::from(self.pixmap.width())
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        u32::from(self.pixmap.height())
    }

    /// `(width, height)` in pixels.
    pub fn size(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    /// Premultiplied RGBA8 bytes, row-major.
    pub fn premul_bytes(&self) -> &[u8] {
        self.pixmap.data_as_u8_slice()
    }

    /// Premultiplied `[r, g, b, a]` at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let idx = ((y as usize) * (self.width() as usize) + (x as usize)) * 4;
        let b = self.premul_bytes();
        Some([b[idx], b[idx + 1], b[idx + 2], b[idx + 3]])
    }

    /// Return `true` when both handles point at the same pixel storage.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.pixmap, &other.pixmap)
    }

    pub(crate) fn to_image_paint(&self) -> vello_cpu::Image {
        // The default sampler pads (clamp-to-edge) on both axes.
        vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::clone(&self.pixmap)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        }
    }
}

pub(crate) fn checked_dims(width: u32, height: u32) -> GifResult<(u16, u16)> {
    if width == 0 || height == 0 {
        return Err(GifError::validation("frame dimensions must be non-zero"));
    }
    let w: u16 = width
        .try_into()
        .map_err(|_| GifError::validation("frame width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| GifError::validation("frame height exceeds u16"))?;
    Ok((w, h))
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;

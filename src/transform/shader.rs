use crate::foundation::core::{Affine, Rect};
use crate::render::canvas::Brush;
use crate::render::frame::FrameBuffer;

/// Frame-sampling shader: maps frame pixel space onto the destination rectangle.
///
/// Sampling pads at the edges (clamp-to-edge). The shader holds no pixels, so one shader serves
/// every frame of an animation as long as the destination and frame size stay the same.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameShader {
    transform: Affine,
    destination: Rect,
    buffer_width: u32,
    buffer_height: u32,
}

impl FrameShader {
    /// Build the shader for frames of `buffer_width x buffer_height` drawn into `destination`.
    pub fn new(destination: Rect, buffer_width: u32, buffer_height: u32) -> Self {
        let sx = destination.width() / f64::from(buffer_width.max(1));
        let sy = destination.height() / f64::from(buffer_height.max(1));
        let origin = Affine::translate((destination.x0, destination.y0));
        let transform = origin * Affine::scale_non_uniform(sx, sy);
        Self {
            transform,
            destination,
            buffer_width,
            buffer_height,
        }
    }

    /// Frame-to-canvas mapping.
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Destination the shader was built for.
    pub fn destination(&self) -> Rect {
        self.destination
    }

    /// Frame size the shader was built for.
    pub fn buffer_size(&self) -> (u32, u32) {
        (self.buffer_width, self.buffer_height)
    }

    /// Return `true` when `frame` has the size this shader scales for.
    pub fn fits(&self, frame: &FrameBuffer) -> bool {
        frame.size() == self.buffer_size()
    }

    /// Brush sampling `frame` through this shader.
    pub fn brush<'a>(&self, frame: &'a FrameBuffer) -> Brush<'a> {
        Brush::Frame {
            frame,
            transform: self.transform,
        }
    }
}

/// Lazily rebuilt shader slot.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ShaderCache {
    /// Shader matching the current parameters.
    Valid(FrameShader),
    /// Must be rebuilt before the next styled draw.
    #[default]
    Stale,
}

impl ShaderCache {
    /// Mark the slot stale.
    pub fn invalidate(&mut self) {
        *self = Self::Stale;
    }

    /// The cached shader, if valid.
    pub fn valid(&self) -> Option<&FrameShader> {
        match self {
            Self::Valid(s) => Some(s),
            Self::Stale => None,
        }
    }

    /// Return `true` when a shader is cached.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/shader.rs"]
mod tests;

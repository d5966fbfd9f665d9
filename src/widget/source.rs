use crate::anim::AnimatedSource;
use crate::render::frame::FrameBuffer;

/// What a widget displays.
pub enum Content {
    /// A playing frame sequence.
    Animated(Box<dyn AnimatedSource>),
    /// A single bitmap.
    Static(FrameBuffer),
}

impl Content {
    /// Wrap an animated source.
    pub fn animated(source: impl AnimatedSource + 'static) -> Self {
        Self::Animated(Box::new(source))
    }

    /// The frame that would be drawn now.
    pub fn current_frame(&self) -> &FrameBuffer {
        match self {
            Self::Animated(a) => a.current_frame(),
            Self::Static(f) => f,
        }
    }

    /// Return `true` for animated content.
    pub fn is_animated(&self) -> bool {
        matches!(self, Self::Animated(_))
    }
}

impl From<FrameBuffer> for Content {
    fn from(frame: FrameBuffer) -> Self {
        Self::Static(frame)
    }
}

impl std::fmt::Debug for Content {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Animated(a) => f
                .debug_struct("Animated")
                .field("frames", &a.frame_count())
                .field("index", &a.current_frame_index())
                .field("running", &a.is_running())
                .finish(),
            Self::Static(frame) => f.debug_tuple("Static").field(frame).finish(),
        }
    }
}

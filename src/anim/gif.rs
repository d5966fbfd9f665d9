use crate::anim::{AnimatedSource, AnimationListener};
use crate::foundation::error::{GifError, GifResult};
use crate::render::frame::FrameBuffer;
use anyhow::Context;
use image::AnimationDecoder;
use std::io::{BufRead, Seek};
use std::path::Path;
use std::time::Duration;

/// Delays at or under this are replaced by [`DEFAULT_FRAME_DELAY`].
pub const MIN_FRAME_DELAY: Duration = Duration::from_millis(10);
/// Delay used for frames that declare none (or an unplayably short one).
pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(100);

struct GifFrame {
    buffer: FrameBuffer,
    delay: Duration,
}

/// Fully decoded GIF animation.
///
/// Every frame is composited up front into a premultiplied [`FrameBuffer`], so advancing is only
/// index arithmetic. A new animation starts running from frame 0 with an infinite loop count.
pub struct GifAnimation {
    frames: Vec<GifFrame>,
    index: usize,
    pending: Duration,
    loop_count: u16,
    loops_completed: u32,
    running: bool,
    listener: Option<Box<dyn AnimationListener>>,
}

impl std::fmt::Debug for GifAnimation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GifAnimation")
            .field("frames", &self.frames.len())
            .field("index", &self.index)
            .field("loop_count", &self.loop_count)
            .field("loops_completed", &self.loops_completed)
            .field("running", &self.running)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

fn normalize_delay(delay: Duration) -> Duration {
    if delay <= MIN_FRAME_DELAY {
        DEFAULT_FRAME_DELAY
    } else {
        delay
    }
}

impl GifAnimation {
    /// Decode GIF bytes held in memory.
    pub fn from_bytes(bytes: &[u8]) -> GifResult<Self> {
        Self::from_reader(std::io::Cursor::new(bytes))
    }

    /// Decode a GIF file.
    pub fn from_path(path: impl AsRef<Path>) -> GifResult<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .with_context(|| format!("open gif '{}'", path.display()))?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Decode a GIF from any seekable reader.
    pub fn from_reader<R: BufRead + Seek>(reader: R) -> GifResult<Self> {
        let decoder = image::codecs::gif::GifDecoder::new(reader)
            .map_err(|e| GifError::decode(format!("read gif header: {e}")))?;

        let mut frames = Vec::new();
        for (i, frame) in decoder.into_frames().enumerate() {
            let frame = frame.map_err(|e| GifError::decode(format!("gif frame {i}: {e}")))?;
            let (numer, denom) = frame.delay().numer_denom_ms();
            let micros = (u64::from(numer) * 1000).checked_div(u64::from(denom));
            let delay = Duration::from_micros(micros.unwrap_or(0));
            let rgba = frame.into_buffer();
            let (w, h) = rgba.dimensions();
            frames.push((FrameBuffer::from_rgba8(rgba.as_raw(), w, h)?, delay));
        }

        let anim = Self::from_frames(frames).map_err(|e| match e {
            GifError::Validation(msg) => GifError::Decode(msg),
            other => other,
        })?;
        tracing::debug!(
            frames = anim.frame_count(),
            width = anim.frame_size().0,
            height = anim.frame_size().1,
            "decoded gif"
        );
        Ok(anim)
    }

    /// Build an animation from prepared frames and their display delays.
    ///
    /// All frames must share one size and at least one frame is required.
    pub fn from_frames(frames: Vec<(FrameBuffer, Duration)>) -> GifResult<Self> {
        let Some((first, _)) = frames.first() else {
            return Err(GifError::validation("animation has no frames"));
        };
        let size = first.size();
        if frames.iter().any(|(f, _)| f.size() != size) {
            return Err(GifError::validation("animation frames differ in size"));
        }

        Ok(Self {
            frames: frames
                .into_iter()
                .map(|(buffer, delay)| GifFrame {
                    buffer,
                    delay: normalize_delay(delay),
                })
                .collect(),
            index: 0,
            pending: Duration::ZERO,
            loop_count: 0,
            loops_completed: 0,
            running: true,
            listener: None,
        })
    }

    /// Display delay of frame `index`.
    pub fn frame_delay(&self, index: usize) -> Option<Duration> {
        self.frames.get(index).map(|f| f.delay)
    }

    /// Loops completed since the last reset.
    pub fn loops_completed(&self) -> u32 {
        self.loops_completed
    }

    fn finish_loop(&mut self) -> bool {
        let loop_number = self.loops_completed;
        self.loops_completed = self.loops_completed.saturating_add(1);
        tracing::trace!(loop_number, "gif loop completed");
        if let Some(listener) = self.listener.as_mut() {
            listener.on_animation_completed(loop_number);
        }
        self.loop_count > 0 && self.loops_completed >= u32::from(self.loop_count)
    }

    /// Fold whole loops beyond the next one out of an infinite playback's backlog.
    ///
    /// The folded loops count as completed but are not reported to the listener. The playback
    /// position is unchanged.
    fn collapse_backlog(&mut self) {
        if self.loop_count != 0 {
            return;
        }
        let total: Duration = self.frames.iter().map(|f| f.delay).sum();
        let (pending, total_nanos) = (self.pending.as_nanos(), total.as_nanos());
        let loops = pending.checked_div(total_nanos).unwrap_or(0);
        if loops < 2 {
            return;
        }
        let skipped = u32::try_from(loops - 1).unwrap_or(u32::MAX);
        let rem = u64::try_from(pending % total_nanos).unwrap_or(u64::MAX);
        self.pending = total + Duration::from_nanos(rem);
        self.loops_completed = self.loops_completed.saturating_add(skipped);
        tracing::trace!(skipped, "collapsed playback backlog");
    }
}

impl AnimatedSource for GifAnimation {
    fn frame_size(&self) -> (u32, u32) {
        self.frames[0].buffer.size()
    }

    fn frame_count(&self) -> usize {
        self.frames.len()
    }

    fn current_frame(&self) -> &FrameBuffer {
        &self.frames[self.index].buffer
    }

    fn current_frame_index(&self) -> usize {
        self.index
    }

    fn current_frame_delay(&self) -> Duration {
        self.frames[self.index].delay
    }

    fn loop_count(&self) -> u16 {
        self.loop_count
    }

    fn set_loop_count(&mut self, loop_count: u16) {
        self.loop_count = loop_count;
    }

    fn reset(&mut self) {
        self.index = 0;
        self.pending = Duration::ZERO;
        self.loops_completed = 0;
        self.running = true;
    }

    fn stop(&mut self) {
        self.running = false;
        self.pending = Duration::ZERO;
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn set_completion_listener(&mut self, listener: Option<Box<dyn AnimationListener>>) {
        self.listener = listener;
    }

    fn advance(&mut self, elapsed: Duration) -> bool {
        // A still GIF has nothing to step through.
        if !self.running || self.frames.len() < 2 {
            return false;
        }

        self.pending = self.pending.saturating_add(elapsed);
        self.collapse_backlog();
        let mut changed = false;
        loop {
            let delay = self.frames[self.index].delay;
            if self.pending < delay {
                break;
            }
            if self.index + 1 == self.frames.len() {
                if self.finish_loop() {
                    self.stop();
                    break;
                }
                self.index = 0;
            } else {
                self.index += 1;
            }
            self.pending -= delay;
            changed = true;
        }
        changed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/anim/gif.rs"]
mod tests;

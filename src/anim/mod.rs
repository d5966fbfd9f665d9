use crate::render::frame::FrameBuffer;
use std::time::Duration;

/// Decoded GIF playback.
pub mod gif;

/// Callback invoked once per completed playback loop.
pub trait AnimationListener {
    /// Called with the 0-based index of the loop that just completed.
    fn on_animation_completed(&mut self, loop_number: u32);
}

impl<F: FnMut(u32)> AnimationListener for F {
    fn on_animation_completed(&mut self, loop_number: u32) {
        self(loop_number)
    }
}

/// A running sequence of frames driven by host time.
///
/// Sources never spawn work or read the clock themselves; the host calls
/// [`AnimatedSource::advance`] with the time elapsed since the previous call.
pub trait AnimatedSource {
    /// Pixel size of every frame.
    fn frame_size(&self) -> (u32, u32);

    /// Number of frames in one loop.
    fn frame_count(&self) -> usize;

    /// Frame currently displayed.
    fn current_frame(&self) -> &FrameBuffer;

    /// Index of the frame currently displayed.
    fn current_frame_index(&self) -> usize;

    /// How long the current frame stays on screen.
    fn current_frame_delay(&self) -> Duration;

    /// Loops to play before stopping; `0` loops forever.
    fn loop_count(&self) -> u16;

    /// Set the number of loops to play; `0` loops forever.
    fn set_loop_count(&mut self, loop_count: u16);

    /// Rewind to the first frame and start playing.
    fn reset(&mut self);

    /// Stop on the current frame.
    fn stop(&mut self);

    /// Return `true` while frames are advancing.
    fn is_running(&self) -> bool;

    /// Replace the completion callback; `None` clears it.
    fn set_completion_listener(&mut self, listener: Option<Box<dyn AnimationListener>>);

    /// Advance playback by `elapsed`. Returns `true` when the displayed frame changed.
    fn advance(&mut self, elapsed: Duration) -> bool;
}

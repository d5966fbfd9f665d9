use crate::anim::AnimationListener;
use crate::anim::gif::GifAnimation;
use crate::config::style::WidgetStyle;
use crate::foundation::core::{Color, Rect};
use crate::foundation::error::GifResult;
use crate::paint::color::parse_color;
use crate::paint::mode::CompositeMode;
use crate::render::canvas::{Canvas, Paint};
use crate::render::frame::FrameBuffer;
use crate::render::pool::{self, DEFAULT_POOL_BYTES, FramePoolOpts};
use crate::transform::engine::GifTransformation;
use crate::widget::mode::RenderMode;
use crate::widget::params::VisualParameters;
use crate::widget::source::Content;
use crate::widget::still;
use std::path::Path;
use std::time::Duration;

/// Image widget that plays GIFs with rounded corners, a tint overlay and a border.
///
/// The host drives it: [`GifView::set_bounds`] on layout, [`GifView::advance`] on every tick and
/// [`GifView::draw`] when [`GifView::take_needs_redraw`] reports a change.
///
/// ```no_run
/// use giftransform::{Color, GifView, RecordingCanvas, Rect};
/// use std::time::Duration;
///
/// let mut view = GifView::new();
/// view.set_bounds(Rect::new(0.0, 0.0, 320.0, 240.0));
/// view.set_gif_path("cat.gif")?;
/// view.set_border_width(12.0);
/// view.set_border_color(Color::GREEN);
/// view.set_corner_radius(67.0);
/// view.start_gif_with_loops(5);
/// view.set_gif_listener(|n: u32| println!("loop {n} done"));
///
/// let mut canvas = RecordingCanvas::new();
/// if view.advance(Duration::from_millis(16)) {
///     view.draw(&mut canvas);
/// }
/// # Ok::<(), giftransform::GifError>(())
/// ```
#[derive(Debug)]
pub struct GifView {
    params: VisualParameters,
    transformation: GifTransformation,
    bounds: Rect,
    content: Option<Content>,
    mode: RenderMode,
    base_paint: Paint,
    needs_redraw: bool,
}

impl Default for GifView {
    fn default() -> Self {
        Self::new()
    }
}

impl GifView {
    /// Create an empty widget with default styling.
    ///
    /// The first widget in a process sizes the shared frame pool.
    pub fn new() -> Self {
        pool::initialize(FramePoolOpts::with_budget(DEFAULT_POOL_BYTES));
        Self {
            params: VisualParameters::default(),
            transformation: GifTransformation::new(0.0, 0.0),
            bounds: Rect::ZERO,
            content: None,
            mode: RenderMode::RoundedTransform,
            base_paint: Paint::default(),
            needs_redraw: false,
        }
    }

    fn push_params(&mut self) {
        let before = self.transformation.stats().invalidations;
        self.params.apply_to(&mut self.transformation);
        if self.transformation.stats().invalidations != before {
            self.needs_redraw = true;
        }
    }

    /// Set the border width in pixels; `0` removes the border.
    pub fn set_border_width(&mut self, width: f64) {
        self.params.border_width = width.max(0.0);
        self.push_params();
    }

    /// Border width in pixels.
    pub fn border_width(&self) -> f64 {
        self.params.border_width
    }

    /// Set the corner radius in pixels; `0` for square corners.
    pub fn set_corner_radius(&mut self, radius: f64) {
        self.params.corner_radius = radius.max(0.0);
        self.push_params();
    }

    /// Corner radius in pixels.
    pub fn corner_radius(&self) -> f64 {
        self.params.corner_radius
    }

    /// Set the border color.
    pub fn set_border_color(&mut self, color: Color) {
        self.params.border_color = color;
        self.push_params();
    }

    /// Set the border color from a literal such as `"#00FF00"` or `"green"`.
    pub fn set_border_color_str(&mut self, color: &str) -> GifResult<()> {
        self.set_border_color(parse_color(color)?);
        Ok(())
    }

    /// Border color.
    pub fn border_color(&self) -> Color {
        self.params.border_color
    }

    /// Set the overlay color, composited source-over.
    pub fn set_filler_color(&mut self, color: Color) {
        self.set_filler_color_with_mode(color, CompositeMode::SrcOver);
    }

    /// Set the overlay color and its composite mode.
    pub fn set_filler_color_with_mode(&mut self, color: Color, mode: CompositeMode) {
        self.params.filler_color = color;
        self.params.composite_mode = mode;
        self.push_params();
    }

    /// Overlay color.
    pub fn filler_color(&self) -> Color {
        self.params.filler_color
    }

    /// Set the overlay composite mode, keeping its color.
    pub fn set_composite_mode(&mut self, mode: CompositeMode) {
        self.params.composite_mode = mode;
        self.push_params();
    }

    /// Set the overlay opacity percentage; `100` is fully visible.
    pub fn set_filler_alpha(&mut self, alpha: u8) {
        self.params.filler_alpha = alpha;
        self.push_params();
    }

    /// Overlay opacity percentage.
    pub fn filler_alpha(&self) -> u8 {
        self.params.filler_alpha
    }

    /// Current visual parameters.
    pub fn params(&self) -> &VisualParameters {
        &self.params
    }

    /// The per-frame transformation, read-only.
    pub fn transformation(&self) -> &GifTransformation {
        &self.transformation
    }

    /// Set the paint the host wants frames drawn with.
    pub fn set_base_paint(&mut self, paint: Paint) {
        if paint != self.base_paint {
            self.base_paint = paint;
            self.needs_redraw = true;
        }
    }

    /// Layout bounds in canvas coordinates.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Update the layout bounds.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.transformation.on_bounds_change(bounds);
        self.needs_redraw = true;
    }

    /// Active render mode.
    pub fn render_mode(&self) -> RenderMode {
        self.mode
    }

    /// Return and clear the pending redraw request.
    pub fn take_needs_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Displayed content, if any.
    pub fn content(&self) -> Option<&Content> {
        self.content.as_ref()
    }

    /// Replace the displayed content.
    ///
    /// Animated content starts playing from its first frame with an infinite loop count. Static
    /// content is rounded once with the current corner radius.
    pub fn set_source(&mut self, content: Content) -> GifResult<()> {
        self.mode = RenderMode::RoundedTransform;
        self.needs_redraw = true;
        match content {
            Content::Animated(anim) => {
                tracing::debug!(frames = anim.frame_count(), "animated content set");
                self.params.apply_to(&mut self.transformation);
                self.transformation.on_bounds_change(self.bounds);
                self.content = Some(Content::Animated(anim));
                self.start_gif();
            }
            Content::Static(frame) => {
                tracing::debug!(
                    width = frame.width(),
                    height = frame.height(),
                    "static content set"
                );
                let rounded = still::round_corners(&frame, self.params.corner_radius)?;
                self.content = Some(Content::Static(rounded));
            }
        }
        Ok(())
    }

    /// Decode and display GIF bytes.
    pub fn set_gif_bytes(&mut self, bytes: &[u8]) -> GifResult<()> {
        let anim = GifAnimation::from_bytes(bytes)?;
        self.set_source(Content::animated(anim))
    }

    /// Decode and display a GIF file.
    pub fn set_gif_path(&mut self, path: impl AsRef<Path>) -> GifResult<()> {
        let anim = GifAnimation::from_path(path)?;
        self.set_source(Content::animated(anim))
    }

    /// Decode and display a still image (PNG, JPEG, ...).
    pub fn set_image_bytes(&mut self, bytes: &[u8]) -> GifResult<()> {
        self.set_source(Content::Static(FrameBuffer::decode(bytes)?))
    }

    /// Switch between the oval clip and the rounded transform for `content`.
    ///
    /// The oval mode renders one still bitmap (the current frame for animations) and does not
    /// play.
    pub fn set_oval(&mut self, is_oval: bool, content: Content) -> GifResult<()> {
        if !is_oval {
            return self.set_source(content);
        }
        let filler = self.params.filler_color;
        let clipped = still::oval_clip(content.current_frame(), filler)?;
        tracing::debug!(filler = filler.0, "oval clip applied");
        self.content = Some(Content::Static(clipped));
        self.mode = RenderMode::OvalClip { filler };
        self.needs_redraw = true;
        Ok(())
    }

    /// Play from the first frame, looping forever.
    pub fn start_gif(&mut self) {
        self.start_gif_with_loops(0);
    }

    /// Play from the first frame `loop_count` times; `0` loops forever.
    pub fn start_gif_with_loops(&mut self, loop_count: u16) {
        let Some(Content::Animated(anim)) = self.content.as_mut() else {
            tracing::warn!(loop_count, "start_gif called with no gif loaded");
            return;
        };
        anim.set_loop_count(loop_count);
        anim.reset();
        self.needs_redraw = true;
    }

    /// Stop playback if it is running.
    pub fn stop_gif(&mut self) {
        if let Some(Content::Animated(anim)) = self.content.as_mut()
            && anim.is_running()
        {
            anim.stop();
        }
    }

    /// Register the completion callback of the loaded gif, replacing any previous one.
    ///
    /// With nothing loaded the listener is dropped.
    pub fn set_gif_listener(&mut self, listener: impl AnimationListener + 'static) {
        let Some(Content::Animated(anim)) = self.content.as_mut() else {
            tracing::warn!("gif listener dropped: no gif loaded");
            return;
        };
        anim.set_completion_listener(Some(Box::new(listener)));
    }

    /// Return `true` when animated content is held.
    pub fn is_gif_loaded(&self) -> bool {
        matches!(self.content, Some(Content::Animated(_)))
    }

    /// Return `true` while the held animation is playing.
    pub fn is_running(&self) -> bool {
        match &self.content {
            Some(Content::Animated(anim)) => anim.is_running(),
            _ => false,
        }
    }

    /// Forward elapsed host time to the animation. Returns `true` when the frame changed.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        let Some(Content::Animated(anim)) = self.content.as_mut() else {
            return false;
        };
        let changed = anim.advance(elapsed);
        if changed {
            tracing::trace!(index = anim.current_frame_index(), "frame advanced");
            self.needs_redraw = true;
        }
        changed
    }

    /// Apply every field set in `style`. Loop counts restart playback.
    pub fn apply_style(&mut self, style: &WidgetStyle) {
        if let Some(r) = style.corner_radius {
            self.set_corner_radius(r);
        }
        if let Some(w) = style.border_width {
            self.set_border_width(w);
        }
        if let Some(c) = style.border_color {
            self.set_border_color(c);
        }
        match (style.filler_color, style.composite_mode) {
            (Some(c), Some(m)) => self.set_filler_color_with_mode(c, m),
            (Some(c), None) => self.set_filler_color(c),
            (None, Some(m)) => self.set_composite_mode(m),
            (None, None) => {}
        }
        if let Some(a) = style.filler_alpha {
            self.set_filler_alpha(a);
        }
        if let Some(n) = style.loop_count {
            self.start_gif_with_loops(n);
        }
    }

    /// Draw the current content into `canvas` at the widget bounds.
    pub fn draw(&mut self, canvas: &mut dyn Canvas) {
        match &self.content {
            None => {}
            Some(Content::Animated(anim)) => {
                let frame = anim.current_frame();
                self.transformation.draw(canvas, &self.base_paint, frame);
            }
            Some(Content::Static(frame)) => {
                canvas.draw_frame(frame, self.bounds, &self.base_paint);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widget/view.rs"]
mod tests;

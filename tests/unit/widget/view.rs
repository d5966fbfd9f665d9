use super::*;
use crate::render::record::{DrawOp, RecordingCanvas};
use std::cell::RefCell;
use std::rc::Rc;

fn anim(frames: usize) -> Content {
    let delay = Duration::from_millis(50);
    let frames = (0..frames)
        .map(|i| {
            let c = if i % 2 == 0 { Color::RED } else { Color::BLUE };
            (FrameBuffer::solid(c, 4, 4).unwrap(), delay)
        })
        .collect();
    Content::animated(GifAnimation::from_frames(frames).unwrap())
}

fn loaded_view() -> GifView {
    let mut v = GifView::new();
    v.set_bounds(Rect::new(0.0, 0.0, 40.0, 40.0));
    v.set_source(anim(3)).unwrap();
    v
}

#[test]
fn new_view_has_documented_defaults() {
    let v = GifView::new();
    assert_eq!(*v.params(), VisualParameters::default());
    assert_eq!(v.border_color(), Color::BLACK);
    assert_eq!(v.filler_color(), Color::TRANSPARENT);
    assert_eq!(v.filler_alpha(), 100);
    assert_eq!(v.corner_radius(), 0.0);
    assert_eq!(v.border_width(), 0.0);
    assert!(!v.is_gif_loaded());
    assert_eq!(v.render_mode(), RenderMode::RoundedTransform);
}

#[test]
fn setters_mirror_into_the_transformation() {
    let mut v = GifView::new();
    v.set_border_width(12.0);
    v.set_border_color(Color::GREEN);
    v.set_corner_radius(67.0);
    v.set_filler_color(Color::BLACK);
    v.set_filler_alpha(25);
    let t = v.transformation();
    assert_eq!(t.border_width(), 12.0);
    assert_eq!(t.border_color(), Color::GREEN);
    assert_eq!(t.corner_radius(), 67.0);
    assert_eq!(t.filler_color(), Color::BLACK);
    assert_eq!(t.fill_alpha(), 25);
    assert_eq!(t.composite_mode(), CompositeMode::SrcOver);
}

#[test]
fn repeated_setter_does_not_request_redraw() {
    let mut v = GifView::new();
    v.set_corner_radius(8.0);
    assert!(v.take_needs_redraw());
    v.set_corner_radius(8.0);
    assert!(!v.take_needs_redraw());
}

#[test]
fn negative_sizes_clamp() {
    let mut v = GifView::new();
    v.set_corner_radius(-4.0);
    v.set_border_width(-1.0);
    assert_eq!(v.corner_radius(), 0.0);
    assert_eq!(v.border_width(), 0.0);
}

#[test]
fn border_color_strings_parse_or_fail() {
    let mut v = GifView::new();
    v.set_border_color_str("#00FF00").unwrap();
    assert_eq!(v.border_color(), Color::GREEN);
    assert!(matches!(
        v.set_border_color_str("not-a-color"),
        Err(crate::GifError::Color(_))
    ));
    assert_eq!(v.border_color(), Color::GREEN);
}

#[test]
fn animated_source_starts_playing() {
    let v = loaded_view();
    assert!(v.is_gif_loaded());
    assert!(v.is_running());
}

#[test]
fn playback_controls_without_gif_are_noops() {
    let mut v = GifView::new();
    v.start_gif_with_loops(3);
    v.start_gif();
    v.stop_gif();
    let called = Rc::new(std::cell::Cell::new(false));
    let flag = Rc::clone(&called);
    v.set_gif_listener(move |_: u32| flag.set(true));
    assert!(!v.is_running());
    assert!(!v.advance(Duration::from_secs(1)));
    assert!(!called.get());
}

#[test]
fn start_with_loops_resets_to_first_frame() {
    let mut v = loaded_view();
    v.advance(Duration::from_millis(60));
    let Some(Content::Animated(a)) = v.content() else {
        panic!("expected animation");
    };
    assert_eq!(a.current_frame_index(), 1);

    v.stop_gif();
    assert!(!v.is_running());
    v.stop_gif();

    v.start_gif_with_loops(3);
    let Some(Content::Animated(a)) = v.content() else {
        panic!("expected animation");
    };
    assert_eq!(a.current_frame_index(), 0);
    assert_eq!(a.loop_count(), 3);
    assert!(v.is_running());
}

#[test]
fn listener_sees_each_loop_and_none_after_stop() {
    let mut v = loaded_view();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    v.set_gif_listener(move |n: u32| sink.borrow_mut().push(n));

    for _ in 0..6 {
        v.advance(Duration::from_millis(50));
    }
    assert_eq!(*seen.borrow(), vec![0, 1]);

    v.stop_gif();
    v.advance(Duration::from_secs(2));
    assert_eq!(seen.borrow().len(), 2);
}

#[test]
fn draw_routes_frames_through_the_transformation() {
    let mut v = loaded_view();
    let mut c = RecordingCanvas::new();
    v.draw(&mut c);
    assert!(matches!(c.ops(), [DrawOp::Frame { .. }]));

    v.set_corner_radius(6.0);
    v.set_border_width(2.0);
    c.take_ops();
    v.draw(&mut c);
    assert!(matches!(c.ops(), [DrawOp::RoundedRect { .. }, DrawOp::Stroke { .. }]));
}

#[test]
fn static_content_is_rounded_once_and_blitted() {
    let mut v = GifView::new();
    v.set_bounds(Rect::new(0.0, 0.0, 20.0, 20.0));
    v.set_corner_radius(5.0);
    let still = FrameBuffer::solid(Color::RED, 20, 20).unwrap();
    v.set_source(Content::Static(still)).unwrap();
    assert!(!v.is_gif_loaded());

    let Some(Content::Static(f)) = v.content() else {
        panic!("expected still");
    };
    assert_eq!(f.pixel(0, 0).unwrap()[3], 0);
    assert_eq!(f.pixel(10, 10), Some([255, 0, 0, 255]));

    let mut c = RecordingCanvas::new();
    v.draw(&mut c);
    assert!(matches!(c.ops(), [DrawOp::Frame { .. }]));
}

#[test]
fn oval_mode_replaces_animation_with_a_still() {
    let mut v = loaded_view();
    v.set_filler_color(Color::WHITE);
    v.set_oval(true, anim(2)).unwrap();
    assert!(!v.is_gif_loaded());
    assert_eq!(
        v.render_mode(),
        RenderMode::OvalClip {
            filler: Color::WHITE
        }
    );

    v.set_oval(false, anim(2)).unwrap();
    assert!(v.is_gif_loaded());
    assert_eq!(v.render_mode(), RenderMode::RoundedTransform);
}

#[test]
fn style_applies_through_setters() {
    let mut v = loaded_view();
    let style = WidgetStyle {
        corner_radius: Some(10.0),
        border_color: Some(Color::BLUE),
        composite_mode: Some(CompositeMode::Multiply),
        loop_count: Some(2),
        ..WidgetStyle::default()
    };
    v.apply_style(&style);
    assert_eq!(v.corner_radius(), 10.0);
    assert_eq!(v.border_color(), Color::BLUE);
    assert_eq!(v.transformation().composite_mode(), CompositeMode::Multiply);
    let Some(Content::Animated(a)) = v.content() else {
        panic!("expected animation");
    };
    assert_eq!(a.loop_count(), 2);
}

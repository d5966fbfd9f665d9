use super::*;
use crate::render::record::{DrawOp, RecordedFill, RecordingCanvas};

fn frame() -> FrameBuffer {
    FrameBuffer::solid(Color::RED, 10, 5).unwrap()
}

fn styled() -> GifTransformation {
    let mut t = GifTransformation::new(20.0, 10.0);
    t.on_bounds_change(Rect::new(0.0, 0.0, 100.0, 50.0));
    t
}

#[test]
fn defaults_are_unstyled() {
    let t = GifTransformation::default();
    assert!(t.is_unstyled());
    assert_eq!(t.border_color(), Color::BLACK);
    assert_eq!(t.filler_color(), Color::TRANSPARENT);
    assert_eq!(t.fill_alpha(), 100);
    assert_eq!(t.composite_mode(), CompositeMode::SrcOver);
}

#[test]
fn unchanged_setters_do_not_invalidate() {
    let mut t = styled();
    let mut c = RecordingCanvas::new();
    t.draw(&mut c, &Paint::default(), &frame());
    assert!(t.is_shader_valid());

    let before = t.stats().invalidations;
    t.set_corner_radius(20.0)
        .set_border_width(10.0)
        .set_border_color(Color::BLACK)
        .set_filler_color(Color::TRANSPARENT, CompositeMode::SrcOver)
        .set_fill_alpha(100);
    assert_eq!(t.stats().invalidations, before);
    assert!(t.is_shader_valid());

    t.set_border_color(Color::GREEN);
    assert!(!t.is_shader_valid());
    assert_eq!(t.stats().invalidations, before + 1);
}

#[test]
fn shader_is_reused_across_frames_of_the_same_size() {
    let mut t = styled();
    let mut c = RecordingCanvas::new();
    for _ in 0..3 {
        t.draw(&mut c, &Paint::default(), &frame());
    }
    assert_eq!(t.stats().shader_builds, 1);

    let bigger = FrameBuffer::solid(Color::RED, 20, 10).unwrap();
    t.draw(&mut c, &Paint::default(), &bigger);
    assert_eq!(t.stats().shader_builds, 2);
}

#[test]
fn bounds_change_always_invalidates() {
    let mut t = styled();
    let mut c = RecordingCanvas::new();
    t.draw(&mut c, &Paint::default(), &frame());
    t.on_bounds_change(Rect::new(0.0, 0.0, 100.0, 50.0));
    assert!(!t.is_shader_valid());
}

#[test]
fn fast_path_blits_with_base_paint() {
    let mut t = GifTransformation::default();
    t.on_bounds_change(Rect::new(0.0, 0.0, 30.0, 30.0));
    let mut c = RecordingCanvas::new();
    let base = Paint::default().with_alpha(128);
    t.draw(&mut c, &base, &frame());
    assert_eq!(
        c.ops(),
        &[DrawOp::Frame {
            dst: Rect::new(0.0, 0.0, 30.0, 30.0),
            frame_width: 10,
            frame_height: 5,
            paint: base,
        }]
    );
    assert_eq!(t.stats().fast_path_draws, 1);
    assert!(!t.is_shader_valid());
}

#[test]
fn styled_draw_emits_image_filler_then_border() {
    let mut t = styled();
    t.set_filler_color(Color::BLACK, CompositeMode::Multiply)
        .set_fill_alpha(50)
        .set_border_color(Color::GREEN);
    let mut c = RecordingCanvas::new();
    t.draw(&mut c, &Paint::default(), &frame());

    let ops = c.ops();
    assert_eq!(ops.len(), 3);
    assert!(matches!(
        &ops[0],
        DrawOp::RoundedRect { radius, fill: RecordedFill::Frame { frame_width: 10, .. }, .. }
            if *radius == 20.0
    ));
    match &ops[1] {
        DrawOp::RoundedRect { fill, paint, .. } => {
            assert_eq!(*fill, RecordedFill::Solid(Color::BLACK.with_alpha(127)));
            assert_eq!(paint.mode, CompositeMode::Multiply);
        }
        other => panic!("unexpected op {other:?}"),
    }
    match &ops[2] {
        DrawOp::Stroke { style, color, .. } => {
            assert_eq!(style.width, 10.0);
            assert_eq!(*color, Color::GREEN);
        }
        other => panic!("unexpected op {other:?}"),
    }
}

#[test]
fn negative_border_width_clamps_to_zero() {
    let mut t = GifTransformation::new(0.0, 0.0);
    t.set_border_width(-3.0);
    assert_eq!(t.border_width(), 0.0);
    assert!(t.is_unstyled());
}

#[test]
fn fill_alpha_saturates_above_100() {
    let mut t = GifTransformation::default();
    t.set_fill_alpha(250);
    assert_eq!(t.filler_alpha_byte(), 255);
    t.set_fill_alpha(0);
    assert_eq!(t.filler_alpha_byte(), 0);
}

use super::*;
use crate::foundation::core::Color;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, Rgba, RgbaImage};
use std::cell::RefCell;
use std::rc::Rc;

fn gif_bytes(colors: &[[u8; 4]], delay_ms: u32) -> Vec<u8> {
    let mut out = Vec::new();
    {
        let mut enc = GifEncoder::new(&mut out);
        enc.set_repeat(Repeat::Infinite).unwrap();
        let frames = colors.iter().map(|c| {
            Frame::from_parts(
                RgbaImage::from_pixel(4, 3, Rgba(*c)),
                0,
                0,
                Delay::from_numer_denom_ms(delay_ms, 1),
            )
        });
        enc.encode_frames(frames).unwrap();
    }
    out
}

fn three_frames() -> GifAnimation {
    let delay = Duration::from_millis(50);
    let frames = [Color::RED, Color::GREEN, Color::BLUE]
        .into_iter()
        .map(|c| (FrameBuffer::solid(c, 2, 2).unwrap(), delay))
        .collect();
    GifAnimation::from_frames(frames).unwrap()
}

fn recorder() -> (Rc<RefCell<Vec<u32>>>, Box<dyn AnimationListener>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let listener: Box<dyn AnimationListener> = Box::new(move |n: u32| sink.borrow_mut().push(n));
    (seen, listener)
}

#[test]
fn decodes_every_frame_with_its_delay() {
    let bytes = gif_bytes(&[[255, 0, 0, 255], [0, 0, 255, 255]], 200);
    let anim = GifAnimation::from_bytes(&bytes).unwrap();
    assert_eq!(anim.frame_count(), 2);
    assert_eq!(anim.frame_size(), (4, 3));
    assert_eq!(anim.frame_delay(0), Some(Duration::from_millis(200)));
    assert_eq!(anim.current_frame().pixel(0, 0), Some([255, 0, 0, 255]));
    assert!(anim.is_running());
    assert_eq!(anim.loop_count(), 0);
}

#[test]
fn short_delays_play_at_default_speed() {
    let bytes = gif_bytes(&[[0, 0, 0, 255], [255, 255, 255, 255]], 10);
    let anim = GifAnimation::from_bytes(&bytes).unwrap();
    assert_eq!(anim.frame_delay(1), Some(DEFAULT_FRAME_DELAY));
}

#[test]
fn garbage_and_empty_input_are_decode_errors() {
    assert!(matches!(
        GifAnimation::from_bytes(b"GIF89a but not really"),
        Err(GifError::Decode(_))
    ));
    assert!(matches!(GifAnimation::from_bytes(&[]), Err(GifError::Decode(_))));
    assert!(matches!(
        GifAnimation::from_frames(Vec::new()),
        Err(GifError::Validation(_))
    ));
}

#[test]
fn mismatched_frame_sizes_are_rejected() {
    let delay = Duration::from_millis(50);
    let frames = vec![
        (FrameBuffer::solid(Color::RED, 2, 2).unwrap(), delay),
        (FrameBuffer::solid(Color::RED, 3, 2).unwrap(), delay),
    ];
    assert!(GifAnimation::from_frames(frames).is_err());
}

#[test]
fn advance_steps_by_accumulated_time() {
    let mut a = three_frames();
    assert!(!a.advance(Duration::from_millis(30)));
    assert_eq!(a.current_frame_index(), 0);
    assert!(a.advance(Duration::from_millis(30)));
    assert_eq!(a.current_frame_index(), 1);
    assert!(a.advance(Duration::from_millis(100)));
    assert_eq!(a.current_frame_index(), 0);
    assert_eq!(a.loops_completed(), 1);
}

#[test]
fn listener_fires_once_per_loop_with_zero_based_index() {
    let mut a = three_frames();
    let (seen, listener) = recorder();
    a.set_completion_listener(Some(listener));
    for _ in 0..9 {
        a.advance(Duration::from_millis(50));
    }
    assert_eq!(*seen.borrow(), vec![0, 1, 2]);
}

#[test]
fn finite_loop_count_stops_on_last_frame() {
    let mut a = three_frames();
    let (seen, listener) = recorder();
    a.set_completion_listener(Some(listener));
    a.set_loop_count(2);
    a.advance(Duration::from_secs(10));
    assert!(!a.is_running());
    assert_eq!(a.current_frame_index(), 2);
    assert_eq!(*seen.borrow(), vec![0, 1]);
    assert!(!a.advance(Duration::from_secs(1)));
}

#[test]
fn no_callbacks_after_stop_until_reset() {
    let mut a = three_frames();
    let (seen, listener) = recorder();
    a.set_completion_listener(Some(listener));
    a.advance(Duration::from_millis(100));
    a.stop();
    assert!(!a.advance(Duration::from_secs(5)));
    assert!(seen.borrow().is_empty());

    a.reset();
    assert_eq!(a.current_frame_index(), 0);
    a.advance(Duration::from_millis(150));
    assert_eq!(*seen.borrow(), vec![0]);
}

#[test]
fn long_idle_time_keeps_the_playback_position() {
    let mut a = three_frames();
    let (seen, listener) = recorder();
    a.set_completion_listener(Some(listener));
    a.advance(Duration::from_millis(60));
    assert_eq!(a.current_frame_index(), 1);

    // A year is a whole number of 150 ms loops.
    let year = Duration::from_secs(365 * 24 * 60 * 60);
    assert!(a.advance(year));
    assert_eq!(a.current_frame_index(), 1);
    assert_eq!(a.loops_completed(), 210_240_000);
    assert_eq!(*seen.borrow(), vec![210_239_999]);
    assert!(a.is_running());

    a.advance(Duration::from_millis(40));
    assert_eq!(a.current_frame_index(), 2);
}

#[test]
fn saturated_elapsed_time_returns_promptly() {
    let mut a = three_frames();
    assert!(a.advance(Duration::MAX));
    assert!(a.current_frame_index() < 3);
    assert!(a.is_running());
    assert_eq!(a.loops_completed(), u32::MAX);
}

#[test]
fn single_frame_never_advances() {
    let mut a = GifAnimation::from_frames(vec![(
        FrameBuffer::solid(Color::RED, 1, 1).unwrap(),
        Duration::from_millis(50),
    )])
    .unwrap();
    assert!(!a.advance(Duration::from_secs(1)));
    assert!(a.is_running());
}

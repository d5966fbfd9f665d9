use super::*;
use crate::foundation::core::Color;

#[test]
fn maps_frame_space_onto_destination() {
    let s = FrameShader::new(Rect::new(10.0, 20.0, 110.0, 70.0), 50, 25);
    let a = s.transform() * kurbo::Point::new(0.0, 0.0);
    let b = s.transform() * kurbo::Point::new(50.0, 25.0);
    assert_eq!((a.x, a.y), (10.0, 20.0));
    assert_eq!((b.x, b.y), (110.0, 70.0));
    assert_eq!(s.buffer_size(), (50, 25));
}

#[test]
fn fits_only_matching_frame_sizes() {
    let s = FrameShader::new(Rect::new(0.0, 0.0, 8.0, 8.0), 4, 4);
    assert!(s.fits(&FrameBuffer::solid(Color::RED, 4, 4).unwrap()));
    assert!(!s.fits(&FrameBuffer::solid(Color::RED, 4, 5).unwrap()));
}

#[test]
fn cache_starts_stale_and_invalidates() {
    let mut c = ShaderCache::default();
    assert!(!c.is_valid());
    c = ShaderCache::Valid(FrameShader::new(Rect::new(0.0, 0.0, 1.0, 1.0), 1, 1));
    assert!(c.valid().is_some());
    c.invalidate();
    assert_eq!(c, ShaderCache::Stale);
}

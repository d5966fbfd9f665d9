use super::*;

#[test]
fn alpha_percent_floors_to_byte() {
    assert_eq!(alpha_percent_to_byte(100), 255);
    assert_eq!(alpha_percent_to_byte(0), 0);
    assert_eq!(alpha_percent_to_byte(50), 127);
    assert_eq!(alpha_percent_to_byte(25), 63);
    assert_eq!(alpha_percent_to_byte(200), 255);
}

#[test]
fn premultiply_then_unpremultiply_is_close_for_opaque_and_clear() {
    let mut px = vec![10, 20, 30, 255, 200, 100, 50, 0];
    premultiply_rgba8_in_place(&mut px);
    assert_eq!(&px[0..4], &[10, 20, 30, 255]);
    assert_eq!(&px[4..8], &[0, 0, 0, 0]);
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(&px[0..4], &[10, 20, 30, 255]);
}

#[test]
fn unpremultiply_recovers_half_alpha_channels() {
    let mut px = vec![64, 0, 128, 128];
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(px, vec![128, 0, 255, 128]);
}

#[test]
fn mul_div255_rounds() {
    assert_eq!(mul_div255_u8(255, 255), 255);
    assert_eq!(mul_div255_u8(255, 128), 128);
    assert_eq!(mul_div255_u8(0, 200), 0);
}

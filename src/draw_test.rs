use super::*;

#[test]
fn outline_is_clipped_to_frame() {
    let mut fb = FrameBuffer::new(10, 10);
    draw_pad_outline(&mut fb, 0, 0, 6, 0x00_FF_00_00);
    assert_eq!(fb.pixels[2], 0x00_FF_00_00); // right edge at x = 2
    assert_eq!(fb.pixels[2 * 10 + 1], 0x00_FF_00_00);
    assert_eq!(fb.pixels[0], 0x00_FF_00_00); // center dot
    assert_eq!(fb.pixels[10 + 1], 0);
}

#[test]
fn outline_frames_the_pad_footprint() {
    let mut fb = FrameBuffer::new(20, 20);
    draw_pad_outline(&mut fb, 10, 10, 8, 0x00_00_FF_00);
    let lit = fb.pixels.iter().filter(|&&p| p == 0x00_00_FF_00).count();
    // 4 * 8 - 4 border pixels plus the center dot
    assert_eq!(lit, 29);
    assert_eq!(fb.pixels[6 * 20 + 6], 0x00_00_FF_00);
    assert_eq!(fb.pixels[13 * 20 + 13], 0x00_00_FF_00);
    assert_eq!(fb.pixels[7 * 20 + 7], 0);
}

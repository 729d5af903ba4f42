use super::*;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

#[test]
fn set_rect_then_get_rect_reads_back_block() {
    let mut board = Whiteboard::new(8, 6, WHITE);
    let block: Vec<Rgba<u8>> = (0..6u8).map(|i| Rgba([i, i, i, 255])).collect();
    board.set_rect(2, 1, 3, 2, &block);

    let mut out = Vec::new();
    board.get_rect(2, 1, 3, 2, &mut out);
    assert_eq!(out, block);
    assert_eq!(board.texel(2, 1), Some(Rgba([0, 0, 0, 255])));
    assert_eq!(board.texel(4, 2), Some(Rgba([5, 5, 5, 255])));
    assert_eq!(board.texel(1, 1), Some(WHITE));
}

#[test]
fn texture_origin_is_bottom_left() {
    let mut board = Whiteboard::new(4, 4, WHITE);
    board.set_rect(0, 0, 1, 1, &[RED]);
    board.commit();

    // Bottom-left texel lands on the last row of the top-down window frame.
    let frame = board.frame();
    assert_eq!(frame.pixels[3 * frame.width], 0x00_FF_00_00);
    assert_eq!(frame.pixels[0], 0x00_FF_FF_FF);
    assert_eq!(board.texture().get_pixel(0, 3), &RED);
}

#[test]
fn frame_only_changes_on_commit() {
    let mut board = Whiteboard::new(4, 4, WHITE);
    board.set_rect(1, 1, 2, 2, &[RED; 4]);
    assert!(board.frame().pixels.iter().all(|&p| p == 0x00_FF_FF_FF));
    assert_eq!(board.commits(), 0);

    board.commit();
    assert_eq!(board.commits(), 1);
    assert_eq!(board.frame().pixels.iter().filter(|&&p| p == 0x00_FF_00_00).count(), 4);
}

#[test]
fn set_rect_skips_texels_outside_board() {
    let mut board = Whiteboard::new(4, 4, WHITE);
    board.set_rect(3, 3, 2, 2, &[RED; 4]);
    assert_eq!(board.texel(3, 3), Some(RED));
    assert_eq!(board.texel(2, 3), Some(WHITE));
}

#[test]
fn texel_off_board_is_none() {
    let board = Whiteboard::new(4, 3, WHITE);
    assert_eq!(board.texel(3, 2), Some(WHITE));
    assert_eq!(board.texel(4, 0), None);
    assert_eq!(board.texel(0, 3), None);

    let mut out = Vec::new();
    board.get_rect(3, 2, 2, 1, &mut out);
    assert_eq!(out, vec![WHITE, Rgba([0, 0, 0, 0])]);
}

#[test]
fn scribbles_put_ink_on_the_board() {
    let board = Whiteboard::with_scribbles(64, 48);
    let inked = board.texture().pixels().filter(|&&p| p == INK).count();
    assert!(inked > 64, "expected visible ink, got {inked} texels");
}

#[test]
fn clear_wipes_ink_and_presents() {
    let mut board = Whiteboard::with_scribbles(32, 32);
    board.clear(WHITE);
    assert!(board.texture().pixels().all(|&p| p == WHITE));
    assert!(board.frame().pixels.iter().all(|&p| p == 0x00_FF_FF_FF));
}

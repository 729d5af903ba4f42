// Window + software overlay for the eraser demo.
// Visual effects provided here:
// 1) A window that shows the whiteboard texture.
// 2) An outline of the eraser pad that follows your mouse.

use crate::error::Error;
use crate::types::FrameBuffer;
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create a window sized to the board texture.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(60);
        Ok(Self { window })
    }

    /// Push this frame's pixels to the screen.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Mouse position in window pixels; `None` while the pointer is outside the window.
    pub fn mouse_pos(&self) -> Option<(f32, f32)> {
        self.window.get_mouse_pos(MouseMode::Discard)
    }

    /// Held = eraser pressed onto the board.
    pub fn left_mouse_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }

    /// Wipe the whole board.
    pub fn c_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::C, KeyRepeat::No)
    }
}

#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    fb.pixels[y * fb.width + x] = color;
}

/// Square outline of `size` pixels centered on (cx,cy), in window coordinates.
pub fn draw_pad_outline(fb: &mut FrameBuffer, cx: i32, cy: i32, size: i32, color: u32) {
    let (x0, y0) = (cx - size / 2, cy - size / 2);
    let (x1, y1) = (x0 + size - 1, y0 + size - 1);
    for x in x0..=x1 {
        put_pixel(fb, x, y0, color);
        put_pixel(fb, x, y1, color);
    }
    for y in y0..=y1 {
        put_pixel(fb, x0, y, color);
        put_pixel(fb, x1, y, color);
    }
    // Center dot marks the tip
    put_pixel(fb, cx, cy, color);
}

#[cfg(test)]
#[path = "draw_test.rs"]
mod tests;

// The paintable surface: a texture the eraser writes into, plus what the window shows.
// Visual expectation: erased blocks appear on screen only after `commit()`.

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::types::FrameBuffer;

/// Owner of the pixel buffer the painter mutates.
///
/// Coordinates are texture pixels with (0,0) at the bottom-left. Rectangles are
/// row-major starting from their bottom-left texel, `w * h` entries long.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Read the `w`x`h` rectangle at (x,y) into `out`, replacing its contents.
    fn get_rect(&self, x: u32, y: u32, w: u32, h: u32, out: &mut Vec<Rgba<u8>>);

    /// Write `pixels` into the `w`x`h` rectangle at (x,y).
    fn set_rect(&mut self, x: u32, y: u32, w: u32, h: u32, pixels: &[Rgba<u8>]);

    /// Flush pending writes to whatever presents the surface.
    fn commit(&mut self);
}

/// Dark marker ink used for the demo scribbles.
pub const INK: Rgba<u8> = Rgba([30, 34, 48, 255]);

/// A whiteboard texture backed by an RGBA image (stored top-down, like any image file).
pub struct Whiteboard {
    texture: RgbaImage,
    frame: FrameBuffer,
    commits: u64,
}

impl Whiteboard {
    /// Blank board filled with `background`, already presented.
    pub fn new(width: u32, height: u32, background: Rgba<u8>) -> Self {
        let texture = RgbaImage::from_pixel(width, height, background);
        Self::from_image(texture)
    }

    /// Load any image the `image` crate can decode as the starting board.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, image::ImageError> {
        let texture = image::open(path)?.to_rgba8();
        Ok(Self::from_image(texture))
    }

    pub fn from_image(texture: RgbaImage) -> Self {
        let frame = FrameBuffer::new(texture.width() as usize, texture.height() as usize);
        let mut board = Self { texture, frame, commits: 0 };
        board.present();
        board
    }

    /// White board covered in ink strokes, so there is something to erase.
    pub fn with_scribbles(width: u32, height: u32) -> Self {
        let mut board = Self::new(width, height, Rgba([255, 255, 255, 255]));
        let (w, h) = (width as i32, height as i32);

        // Diagonal hatching across the whole board
        let mut offset = -h;
        while offset < w {
            board.draw_ink_line(offset, 0, offset + h, h - 1, INK);
            board.draw_ink_line(offset + 1, 0, offset + h + 1, h - 1, INK);
            offset += 24;
        }
        // A few horizontal "text lines"
        for row in (h / 6..h).step_by((h / 6).max(1) as usize) {
            board.draw_ink_line(w / 10, row, w - w / 10, row, INK);
            board.draw_ink_line(w / 10, row + 1, w - w / 10, row + 1, INK);
        }

        board.present();
        board
    }

    /// Bresenham line in texture coordinates; pixels off the board are skipped.
    pub fn draw_ink_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba<u8>) {
        let (mut x0, mut y0) = (x0, y0);
        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            if x0 >= 0 && y0 >= 0 {
                if let Some(px) = self.texel_mut(x0 as u32, y0 as u32) {
                    *px = color;
                }
            }
            if x0 == x1 && y0 == y1 { break; }
            let e2 = 2 * err;
            if e2 >= dy { err += dy; x0 += sx; }
            if e2 <= dx { err += dx; y0 += sy; }
        }
    }

    /// Wipe the whole board to `color` and present it.
    pub fn clear(&mut self, color: Rgba<u8>) {
        for px in self.texture.pixels_mut() {
            *px = color;
        }
        self.present();
    }

    /// Texel at texture coordinates (bottom-left origin); `None` off the board.
    pub fn texel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        if y >= self.texture.height() {
            return None;
        }
        self.texture.get_pixel_checked(x, self.row(y)).copied()
    }

    /// What the window shows as of the last commit.
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Number of commits since the board was created.
    pub fn commits(&self) -> u64 {
        self.commits
    }

    pub fn texture(&self) -> &RgbaImage {
        &self.texture
    }

    #[inline]
    fn row(&self, y: u32) -> u32 {
        self.texture.height() - 1 - y
    }

    #[inline]
    fn texel_mut(&mut self, x: u32, y: u32) -> Option<&mut Rgba<u8>> {
        if y >= self.texture.height() {
            return None;
        }
        let row = self.row(y);
        self.texture.get_pixel_mut_checked(x, row)
    }

    /// Pack the texture into 0x00RRGGBB for the window (alpha is dropped).
    fn present(&mut self) {
        for (dst, src) in self.frame.pixels.iter_mut().zip(self.texture.pixels()) {
            let [r, g, b, _] = src.0;
            *dst = ((r as u32) << 16) | ((g as u32) << 8) | b as u32;
        }
    }
}

impl Surface for Whiteboard {
    fn width(&self) -> u32 {
        self.texture.width()
    }

    fn height(&self) -> u32 {
        self.texture.height()
    }

    fn get_rect(&self, x: u32, y: u32, w: u32, h: u32, out: &mut Vec<Rgba<u8>>) {
        out.clear();
        for ry in 0..h {
            for rx in 0..w {
                out.push(self.texel(x + rx, y + ry).unwrap_or(Rgba([0, 0, 0, 0])));
            }
        }
    }

    fn set_rect(&mut self, x: u32, y: u32, w: u32, h: u32, pixels: &[Rgba<u8>]) {
        for (i, color) in pixels.iter().enumerate().take((w * h) as usize) {
            let (rx, ry) = (i as u32 % w, i as u32 / w);
            if let Some(px) = self.texel_mut(x + rx, y + ry) {
                *px = *color;
            }
        }
    }

    fn commit(&mut self) {
        self.present();
        self.commits += 1;
    }
}

#[cfg(test)]
#[path = "surface_test.rs"]
mod tests;

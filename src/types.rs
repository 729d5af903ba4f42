// Core types shared by the painter, the board and the host window.

/// What the window shows: 0x00RRGGBB per pixel, rows top-down (minifb layout).
#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }
}

/// One tick's answer from the raycaster: did the tip touch the board, and where.
/// `u`/`v` are texture coordinates; (0,0) is the bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactSample {
    pub u: f32,
    pub v: f32,
    pub valid: bool,
}

impl ContactSample {
    pub fn hit(u: f32, v: f32) -> Self {
        Self { u, v, valid: true }
    }

    pub fn miss() -> Self {
        Self { u: 0.0, v: 0.0, valid: false }
    }
}

/// Bottom-left texel of a stamped block, in texture pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockOrigin {
    pub x: u32,
    pub y: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StrokePhase {
    /// No contact; the next valid sample starts a fresh stroke.
    #[default]
    Idle,
    /// Contact chain active; the next valid sample interpolates from the last origin.
    Painting,
}

/// Where the last stamp landed and whether the previous tick was in contact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrokeState {
    pub last_origin: BlockOrigin,
    pub last_contact: bool,
}

impl StrokeState {
    pub fn phase(&self) -> StrokePhase {
        if self.last_contact { StrokePhase::Painting } else { StrokePhase::Idle }
    }
}

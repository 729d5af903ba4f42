// What you SEE:
// • A whiteboard covered in ink (or the image named by ERASER_BOARD_IMAGE).
// • Hold Left Mouse: the eraser pad presses onto the board and wipes a band.
// • The square outline shows the pad footprint. C wipes the whole board. ESC quits.
//
// Eraser size, softness and color come from ERASER_SIZE / ERASER_SOFTNESS / ERASER_COLOR.

use tracing_subscriber::EnvFilter;
use whiteboard_eraser::draw::{Drawer, draw_pad_outline};
use whiteboard_eraser::{BoardPlane, ContactSample, EraserConfig, Error, StrokePainter, Surface, Tip, Whiteboard};

const BOARD_WIDTH: u32 = 640;
const BOARD_HEIGHT: u32 = 480;
/// Physical board height in meters; width follows the texture aspect.
const BOARD_METERS: f32 = 1.2;
/// Eraser pad height: the tip ray only reaches the board when pressed.
const TIP_REACH: f32 = 0.02;
const TIP_PRESSED: f32 = 0.01;
const TIP_HOVER: f32 = 0.05;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = EraserConfig::from_env()?;
    let mut board = match std::env::var("ERASER_BOARD_IMAGE") {
        Ok(path) => {
            tracing::info!(%path, "loading board image");
            Whiteboard::open(&path)?
        }
        Err(_) => Whiteboard::with_scribbles(BOARD_WIDTH, BOARD_HEIGHT),
    };
    let mut painter = StrokePainter::new(config, &board)?;
    tracing::info!(
        size = config.block_size,
        softness = config.softness,
        width = board.width(),
        height = board.height(),
        "eraser ready"
    );

    let (w, h) = (board.width() as f32, board.height() as f32);
    let plane = BoardPlane::upright(BOARD_METERS * w / h, BOARD_METERS);
    let mut drawer = Drawer::new("Whiteboard Eraser", board.width() as usize, board.height() as usize)?;
    let mut screen = board.frame().clone();

    while drawer.is_open() && !drawer.esc_pressed() {
        if drawer.c_pressed_once() {
            board.clear(config.color);
            tracing::info!("board wiped");
        }

        // Mouse → tip pose above the board plane (window y grows down, texture v grows up).
        let pointer = drawer.mouse_pos();
        let sample = match pointer {
            Some((mx, my)) => {
                let (u, v) = (mx / w, 1.0 - my / h);
                let height = if drawer.left_mouse_down() { TIP_PRESSED } else { TIP_HOVER };
                let tip = Tip {
                    position: plane.point_at(u, v) + plane.normal() * height,
                    direction: -plane.normal(),
                    reach: TIP_REACH,
                };
                plane.raycast(&tip)
            }
            None => ContactSample::miss(),
        };
        painter.process_sample(sample, Some(&mut board));

        screen.pixels.copy_from_slice(&board.frame().pixels);
        if let Some((mx, my)) = pointer {
            let color = if sample.valid { 0x00_E0_40_40 } else { 0x00_40_80_E0 };
            draw_pad_outline(&mut screen, mx as i32, my as i32, config.block_size as i32, color);
        }
        drawer.present(&screen)?;
    }

    Ok(())
}

// Window + overlay drawing.
// Visual effects provided here:
// 1) A window that shows the cup (a copy of the paint surface).
// 2) A ring at the cursor showing how wide the foam can grow.
// 3) A small swatch in the corner with the current milk colour.
// The overlay is drawn on the window frame only; the surface never sees it.

use crate::error::Error;
use crate::types::{Color, FrameBuffer};
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

const PALETTE_KEYS: [Key; 5] = [Key::Key1, Key::Key2, Key::Key3, Key::Key4, Key::Key5];

pub struct Drawer {
    window: Window,
}

impl Drawer {
    /// Create a window sized to the canvas.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(60);
        Ok(Self { window })
    }

    /// Push the frame to the screen. Also pumps window events, so call it every frame.
    pub fn present(&mut self, frame: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&frame.pixels, frame.width, frame.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))
    }

    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Cursor in canvas pixels, or `None` while it is outside the window.
    pub fn mouse_pos(&self) -> Option<(i32, i32)> {
        self.window
            .get_mouse_pos(MouseMode::Discard)
            .map(|(x, y)| (x.floor() as i32, y.floor() as i32))
    }

    pub fn left_mouse_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }

    // C: pour the cup out (clear to espresso).
    pub fn c_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::C, KeyRepeat::No)
    }

    // S: save a PNG.
    pub fn s_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::S, KeyRepeat::No)
    }

    /// Index of the palette preset whose number key was just pressed.
    pub fn palette_pressed(&self) -> Option<usize> {
        PALETTE_KEYS
            .iter()
            .position(|&k| self.window.is_key_pressed(k, KeyRepeat::No))
    }

    /// Brush slider: +1 for Up, -1 for Down (auto-repeats while held).
    pub fn brush_delta(&self) -> i32 {
        let up = self.window.is_key_pressed(Key::Up, KeyRepeat::Yes) as i32;
        let down = self.window.is_key_pressed(Key::Down, KeyRepeat::Yes) as i32;
        up - down
    }
}

/* ---------- Software overlay drawing on the window frame ---------- */

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

/// One-pixel circle outline (midpoint algorithm).
/// Visual: a thin ring the size of the fully grown foam follows the cursor.
pub fn draw_ring(fb: &mut FrameBuffer, cx: i32, cy: i32, radius: i32, color: u32) {
    if radius <= 0 {
        put_pixel(fb, cx, cy, color);
        return;
    }
    let (mut x, mut y, mut err) = (radius, 0, 1 - radius);
    while x >= y {
        for (px, py) in [(x, y), (y, x), (-y, x), (-x, y), (-x, -y), (-y, -x), (y, -x), (x, -y)] {
            put_pixel(fb, cx + px, cy + py, color);
        }
        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}

/// Filled square with a 1-pixel border.
/// Visual: the colour chip in the top-left corner.
pub fn draw_swatch(fb: &mut FrameBuffer, x: i32, y: i32, size: i32, fill: Color, border: u32) {
    for sy in 0..size {
        for sx in 0..size {
            let edge = sx == 0 || sy == 0 || sx == size - 1 || sy == size - 1;
            put_pixel(fb, x + sx, y + sy, if edge { border } else { fill.to_0rgb() });
        }
    }
}

/// Ring colour that stays visible on both milk and espresso.
pub fn contrast_for(color: Color) -> u32 {
    let luma = 299 * color.r as u32 + 587 * color.g as u32 + 114 * color.b as u32;
    if luma > 128_000 { 0x0030_1a0a } else { 0x00f5_ead8 }
}

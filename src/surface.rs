// The paint surface: a fixed-size RGBA8888 buffer plus the stamps that draw into it.
// Visual: this is the cup. Everything the user pours ends up in `pixels`,
// and the window only ever shows a copy of it.

use crate::error::{Error, Result};
use crate::types::Color;
use image::RgbaImage;

/// Owned RGBA8888 pixel buffer, row-major, top-left origin.
///
/// `pixels.len() == width * height * 4` for the whole lifetime of the surface.
/// Every drawing call writes straight into the buffer; there is no back buffer.
pub struct PaintSurface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PaintSurface {
    /// Allocate a zeroed canvas. Fails when either side is 0 or the byte
    /// count does not fit in memory addressing.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .filter(|&n| n > 0)
            .ok_or(Error::InvalidDimensions { width, height })?;

        tracing::debug!(width, height, bytes = len, "allocated paint surface");
        Ok(Self { width, height, pixels: vec![0; len] })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Read-only view of the live buffer (RGBA, row-major).
    /// Not a copy: take a copy before the next drawing call if you need a stable snapshot.
    pub fn get_pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// RGBA of one pixel, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = &self.pixels[i..i + 4];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Fill the whole canvas with `color` at full opacity.
    pub fn clear(&mut self, color: Color) {
        let rgba = color.to_rgba();
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
    }

    /// Write a single pixel; off-canvas writes are dropped.
    pub fn draw_point(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.pixels[i..i + 4].copy_from_slice(&color.to_rgba());
    }

    /// Filled disk: every pixel with `dx² + dy² <= radius²` around (cx, cy).
    /// The disk is clipped to the canvas; a radius of 0 is a single pixel.
    pub fn draw_circle(&mut self, cx: i32, cy: i32, radius: u32, color: Color) {
        let w = self.width as i64;
        let h = self.height as i64;
        let (cx, cy, r) = (cx as i64, cy as i64, radius as i64);

        let y_lo = (cy - r).max(0);
        let y_hi = (cy + r).min(h - 1);
        if y_lo > y_hi {
            return;
        }

        let rgba = color.to_rgba();
        let r2 = (radius as u64) * (radius as u64);

        // One horizontal span per row: |dx| <= floor(sqrt(r² - dy²)) is exact.
        for y in y_lo..=y_hi {
            let dy = (y - cy).unsigned_abs();
            let half = (r2 - dy * dy).isqrt() as i64;

            let x_lo = (cx - half).max(0);
            let x_hi = (cx + half).min(w - 1);
            if x_lo > x_hi {
                continue;
            }

            let start = ((y * w + x_lo) * 4) as usize;
            let end = ((y * w + x_hi + 1) * 4) as usize;
            for px in self.pixels[start..end].chunks_exact_mut(4) {
                px.copy_from_slice(&rgba);
            }
        }
    }

    /// Constant-width stroke.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color, radius: u32) {
        self.draw_line_gradient_size(x0, y0, x1, y1, color, radius, radius);
    }

    /// Stroke from (x0, y0) to (x1, y1) whose radius goes linearly from `r0` to `r1`.
    ///
    /// Disks are stamped at unit steps along the major axis, so consecutive
    /// stamps always touch. A zero-length segment is one disk of radius `r1`.
    /// Samples whose disk cannot reach the canvas are skipped, so the cost is
    /// bounded by the on-canvas part of the stroke.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_line_gradient_size(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Color,
        r0: u32,
        r1: u32,
    ) {
        if x0 == x1 && y0 == y1 {
            self.draw_circle(x1, y1, r1, color);
            return;
        }

        let (fx0, fy0, fx1, fy1) = (x0 as f64, y0 as f64, x1 as f64, y1 as f64);
        let (dx, dy) = (fx1 - fx0, fy1 - fy0);
        let steps = dx.abs().max(dy.abs()).max(1.0);

        // A stamp at rounded position p with radius <= reach-1 only touches the
        // canvas if p lies inside the canvas grown by that radius.
        let reach = r0.max(r1) as f64 + 1.0;
        let Some((t_enter, t_exit)) = clip_segment(
            (fx0, fy0),
            (dx, dy),
            (-reach, -reach),
            (self.width as f64 - 1.0 + reach, self.height as f64 - 1.0 + reach),
        ) else {
            return;
        };

        let first = (t_enter * steps).ceil().max(0.0) as u64;
        let last = (t_exit * steps).floor().min(steps) as u64;

        for i in first..=last {
            let t = i as f64 / steps;
            let x = lerp(fx0, fx1, t).round() as i32;
            let y = lerp(fy0, fy1, t).round() as i32;
            let r = lerp(r0 as f64, r1 as f64, t).round().max(0.0) as u32;
            self.draw_circle(x, y, r, color);
        }
    }

    /// Copy the buffer into an owned image (for PNG export).
    pub fn to_image(&self) -> RgbaImage {
        let mut img = RgbaImage::new(self.width, self.height);
        img.copy_from_slice(&self.pixels);
        img
    }
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Liang–Barsky: the parameter interval of `p + t*d`, t in [0,1], inside the box.
fn clip_segment(p: (f64, f64), d: (f64, f64), lo: (f64, f64), hi: (f64, f64)) -> Option<(f64, f64)> {
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;

    for (p, d, lo, hi) in [(p.0, d.0, lo.0, hi.0), (p.1, d.1, lo.1, hi.1)] {
        if d == 0.0 {
            if p < lo || p > hi {
                return None;
            }
            continue;
        }
        let a = (lo - p) / d;
        let b = (hi - p) / d;
        t0 = t0.max(a.min(b));
        t1 = t1.min(a.max(b));
    }

    (t0 <= t1).then_some((t0, t1))
}

// Core value types shared by the surface, the stroke controller and the window.

use crate::error::Error;
use std::str::FromStr;
use std::time::Duration;

/// An opaque RGB colour. Strokes are always drawn at full alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Bytes as they are stored in the pixel buffer.
    #[inline]
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }

    /// Packed 0x00RRGGBB, the layout minifb expects.
    #[inline]
    pub const fn to_0rgb(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

pub const ESPRESSO: Color = Color::rgb(101, 67, 33);
pub const MILK: Color = Color::rgb(255, 255, 255);
pub const CREMA: Color = Color::rgb(198, 142, 82);
pub const CHOCOLATE: Color = Color::rgb(74, 44, 23);
pub const CARAMEL: Color = Color::rgb(193, 124, 47);

/// Preset buttons, in the order the number keys select them.
pub const PALETTE: [Color; 5] = [MILK, CREMA, CARAMEL, CHOCOLATE, ESPRESSO];

impl FromStr for Color {
    type Err = Error;

    /// Accepts `#rrggbb` or `rrggbb`, any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::ParseColor(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| Error::ParseColor(s.to_string()))
        };
        Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// What the window shows: one 0x00RRGGBB word per pixel.
#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u32>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0; width * height] }
    }

    /// Repack an RGBA8888 buffer of the same size; alpha is dropped.
    pub fn copy_from_rgba(&mut self, rgba: &[u8]) {
        for (dst, px) in self.pixels.iter_mut().zip(rgba.chunks_exact(4)) {
            *dst = ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32;
        }
    }
}

/// Where a pointer sample sits within a gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Start,
    Move,
    End,
}

/// One normalized pointer event. Mouse and touch adapters both produce these.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub x: i32,
    pub y: i32,
    /// Time since an arbitrary fixed origin (e.g. app start).
    pub timestamp: Duration,
    pub phase: PointerPhase,
}

impl PointerSample {
    pub fn new(x: i32, y: i32, timestamp: Duration, phase: PointerPhase) -> Self {
        Self { x, y, timestamp, phase }
    }
}

// Turns pointer samples into surface calls: the "foam pour".
// Visual: a press leaves a small dot; dragging lays down a stroke that
// widens the longer the pour lasts, up to the brush size.

use crate::surface::PaintSurface;
use crate::types::{Color, MILK, PointerPhase, PointerSample};
use std::time::Duration;

pub const MIN_BRUSH_LIMIT: u32 = 1;
pub const MAX_BRUSH_LIMIT: u32 = 100;

/// Foam growth curve. Sizes are diameters, like the brush slider.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FoamConfig {
    /// Diameter at the very start of every pour.
    pub min_brush_size: u32,
    /// Largest diameter a pour can grow to.
    pub max_brush_size: u32,
    /// Growth per second, as a fraction of `max_brush_size`.
    pub expansion_rate: f32,
}

impl Default for FoamConfig {
    fn default() -> Self {
        Self { min_brush_size: 3, max_brush_size: 30, expansion_rate: 1.5 }
    }
}

impl FoamConfig {
    /// Diameter reached after `elapsed` of continuous pouring (not yet floored).
    pub fn size_after(&self, elapsed: Duration) -> f32 {
        let min = self.min_brush_size as f32;
        let max = self.max_brush_size as f32;
        (min + elapsed.as_secs_f32() * self.expansion_rate * max).min(max)
    }
}

/// The active gesture, if any.
#[derive(Clone, Copy, Debug)]
struct ActiveStroke {
    started: Duration,
    last_x: i32,
    last_y: i32,
}

/// Per-gesture state threaded through the pointer handlers.
#[derive(Debug)]
pub struct StrokeController {
    foam: FoamConfig,
    color: Color,
    active: Option<ActiveStroke>,
}

impl StrokeController {
    pub fn new(foam: FoamConfig) -> Self {
        Self { foam, color: MILK, active: None }
    }

    pub fn foam(&self) -> FoamConfig {
        self.foam
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Applies to the next segment drawn, even mid-stroke.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Slider input; clamped to 1..=100.
    pub fn set_max_brush_size(&mut self, size: u32) {
        self.foam.max_brush_size = size.clamp(MIN_BRUSH_LIMIT, MAX_BRUSH_LIMIT);
    }

    pub fn is_drawing(&self) -> bool {
        self.active.is_some()
    }

    /// Feed one sample. Returns true when `surface` was drawn on.
    pub fn handle(&mut self, sample: PointerSample, surface: &mut PaintSurface) -> bool {
        match sample.phase {
            PointerPhase::Start => {
                self.active = Some(ActiveStroke {
                    started: sample.timestamp,
                    last_x: sample.x,
                    last_y: sample.y,
                });
                tracing::debug!(x = sample.x, y = sample.y, "stroke start");
                surface.draw_circle(sample.x, sample.y, self.foam.min_brush_size / 2, self.color);
                true
            }
            PointerPhase::Move => {
                let Some(stroke) = self.active.as_mut() else {
                    return false;
                };
                let elapsed = sample.timestamp.saturating_sub(stroke.started);
                let current_max = self.foam.size_after(elapsed).floor() as u32;

                surface.draw_line_gradient_size(
                    stroke.last_x,
                    stroke.last_y,
                    sample.x,
                    sample.y,
                    self.color,
                    self.foam.min_brush_size / 2,
                    current_max / 2,
                );
                stroke.last_x = sample.x;
                stroke.last_y = sample.y;
                true
            }
            PointerPhase::End => {
                if let Some(stroke) = self.active.take() {
                    let elapsed = sample.timestamp.saturating_sub(stroke.started);
                    tracing::debug!(ms = elapsed.as_millis() as u64, "stroke end");
                }
                false
            }
        }
    }
}

/// Mouse adapter: polled (position, button) state in, normalized samples out.
#[derive(Debug, Default)]
pub struct PointerTracker {
    down: bool,
    last: Option<(i32, i32)>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// `pos` is `None` while the pointer is outside the canvas; leaving ends the stroke.
    pub fn update(
        &mut self,
        pos: Option<(i32, i32)>,
        button_down: bool,
        timestamp: Duration,
    ) -> Option<PointerSample> {
        let pressed = button_down && pos.is_some();

        let sample = match (self.down, pressed, pos) {
            (false, true, Some((x, y))) => Some(PointerSample::new(x, y, timestamp, PointerPhase::Start)),
            (true, true, Some((x, y))) if self.last != Some((x, y)) => {
                Some(PointerSample::new(x, y, timestamp, PointerPhase::Move))
            }
            (true, false, _) => {
                let (x, y) = pos.or(self.last).unwrap_or_default();
                Some(PointerSample::new(x, y, timestamp, PointerPhase::End))
            }
            _ => None,
        };

        self.down = pressed;
        if pos.is_some() {
            self.last = pos;
        }
        sample
    }
}

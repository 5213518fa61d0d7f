// What you SEE:
// • An espresso-brown cup. Hold Left Mouse to pour milk foam; the longer
//   the pour, the wider the foam spreads (up to the brush size).
// • 1-5 pick a preset colour, Up/Down change the brush size.
// • C clears the cup, S saves a PNG, ESC quits.

use anyhow::Context as _;
use clap::Parser;
use latte_art::draw::{contrast_for, draw_ring, draw_swatch, Drawer};
use latte_art::types::PALETTE;
use latte_art::{export, Config, FrameBuffer, PaintSurface, PointerTracker, StrokeController};
use std::time::{Duration, Instant};

fn main() -> anyhow::Result<()> {
    let cfg = Config::parse();
    tracing_subscriber::fmt().with_max_level(cfg.log_level()).init();

    /* --- Cup + window setup ---
       Visual: window opens showing the freshly cleared espresso. */
    let mut surface = PaintSurface::new(cfg.width, cfg.height).context("create paint surface")?;
    surface.clear(cfg.background);

    let (w, h) = (cfg.width as usize, cfg.height as usize);
    let mut drawer = Drawer::new("Espresso Latte Art", w, h).context("open window")?;
    let mut screen = FrameBuffer::new(w, h);
    // What the cup looks like without any overlay; refreshed only when the surface changes.
    let mut cup = FrameBuffer::new(w, h);
    cup.copy_from_rgba(surface.get_pixels());

    let mut strokes = StrokeController::new(cfg.foam());
    strokes.set_color(cfg.color);
    let mut pointer = PointerTracker::new();

    tracing::info!(width = w, height = h, brush = cfg.brush_size, "latte art ready");

    let started = Instant::now();
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        let now = Instant::now();
        let mut dirty = false;

        /* 1) Keys: palette, brush slider, clear, export */
        if let Some(i) = drawer.palette_pressed() {
            strokes.set_color(PALETTE[i]);
        }
        let delta = drawer.brush_delta();
        if delta != 0 {
            let size = strokes.foam().max_brush_size.saturating_add_signed(delta);
            strokes.set_max_brush_size(size);
            tracing::debug!(brush = strokes.foam().max_brush_size, "brush size");
        }
        if drawer.c_pressed_once() {
            surface.clear(cfg.background);
            tracing::debug!("cup cleared");
            dirty = true;
        }
        if drawer.s_pressed_once() {
            // A failed export should not close the window.
            if let Err(e) = export::save_png(&surface, &cfg.out_dir) {
                tracing::error!(error = %e, "export failed");
            }
        }

        /* 2) Pointer: normalized samples drive the foam pour. */
        let pos = drawer.mouse_pos();
        if let Some(sample) = pointer.update(pos, drawer.left_mouse_down(), now - started) {
            dirty |= strokes.handle(sample, &mut surface);
        }

        /* 3) Copy the surface out only when it changed. */
        if dirty {
            cup.copy_from_rgba(surface.get_pixels());
        }

        /* 4) Overlay on top of the copy: brush ring + colour swatch. */
        screen.pixels.copy_from_slice(&cup.pixels);
        if let Some((mx, my)) = pos {
            let ring = (strokes.foam().max_brush_size / 2) as i32;
            draw_ring(&mut screen, mx, my, ring, contrast_for(strokes.color()));
        }
        draw_swatch(&mut screen, 8, 8, 18, strokes.color(), 0x0000_0000);

        /* 5) Present */
        drawer.present(&screen).context("present frame")?;

        /* 6) FPS once per second */
        frames_this_second += 1;
        let since = now.duration_since(last_fps_time);
        if since >= Duration::from_secs(1) {
            let fps = frames_this_second as f32 / since.as_secs_f32();
            tracing::debug!("FPS: {fps:.1}");
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    Ok(())
}

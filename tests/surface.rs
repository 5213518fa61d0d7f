use latte_art::types::{ESPRESSO, MILK};
use latte_art::{Color, Error, PaintSurface};

const BLACK: Color = Color::rgb(0, 0, 0);
const WHITE: [u8; 4] = [255, 255, 255, 255];

fn black(w: u32, h: u32) -> PaintSurface {
    let mut s = PaintSurface::new(w, h).unwrap();
    s.clear(BLACK);
    s
}

#[test]
fn zero_sized_canvas_is_rejected() {
    for (w, h) in [(0, 0), (0, 5), (5, 0)] {
        match PaintSurface::new(w, h) {
            Err(Error::InvalidDimensions { width, height }) => assert_eq!((width, height), (w, h)),
            _ => panic!("{w}x{h} should be rejected"),
        }
    }
}

#[test]
fn circles_never_write_out_of_bounds() {
    let mut s = black(17, 11);
    let coords = [i32::MIN, -1000, -20, -1, 0, 5, 10, 16, 17, 40, 1000, i32::MAX];
    let radii = [0, 1, 3, 16, 17, 100, u32::MAX];
    for &cx in &coords {
        for &cy in &coords {
            for &r in &radii {
                s.draw_circle(cx, cy, r, MILK);
            }
        }
    }
    assert_eq!(s.get_pixels().len(), 17 * 11 * 4);
}

#[test]
fn clear_is_idempotent() {
    let mut once = black(9, 7);
    once.draw_circle(4, 3, 2, MILK);
    once.clear(ESPRESSO);
    let mut twice = black(9, 7);
    twice.clear(ESPRESSO);
    twice.clear(ESPRESSO);
    assert_eq!(once.get_pixels(), twice.get_pixels());
}

#[test]
fn circle_covers_exactly_its_disk() {
    for (cx, cy, r) in [(10, 10, 0), (10, 10, 4), (0, 19, 6), (13, 2, 7), (25, -3, 5)] {
        let mut s = black(21, 21);
        s.draw_circle(cx, cy, r, MILK);
        for y in 0..21i64 {
            for x in 0..21i64 {
                let (dx, dy) = (x - cx as i64, y - cy as i64);
                let inside = dx * dx + dy * dy <= (r as i64) * (r as i64);
                let want = if inside { WHITE } else { BLACK.to_rgba() };
                assert_eq!(s.pixel(x as u32, y as u32), Some(want), "({x},{y}) for ({cx},{cy},{r})");
            }
        }
    }
}

#[test]
fn horizontal_line_has_no_gaps() {
    let mut s = black(20, 20);
    s.draw_line_gradient_size(0, 0, 10, 0, MILK, 2, 2);
    for x in 0..=10 {
        assert_eq!(s.pixel(x, 0), Some(WHITE), "gap at x={x}");
    }
}

#[test]
fn steep_widening_line_is_continuous() {
    let mut s = black(40, 40);
    s.draw_line_gradient_size(3, 2, 9, 37, MILK, 0, 4);
    // Every row the segment crosses has a lit pixel on the ideal line.
    for y in 2..=37 {
        let t = (y - 2) as f64 / 35.0;
        let x = (3.0 + 6.0 * t).round() as u32;
        assert_eq!(s.pixel(x, y as u32), Some(WHITE), "gap at y={y}");
    }
}

#[test]
fn degenerate_line_is_a_point() {
    for (r0, r1) in [(0, 0), (2, 7), (9, 3)] {
        let mut line = black(12, 12);
        line.draw_line_gradient_size(5, 5, 5, 5, ESPRESSO, r0, r1);
        let mut dot = black(12, 12);
        dot.draw_circle(5, 5, r1, ESPRESSO);
        assert_eq!(line.get_pixels(), dot.get_pixels());
    }
}

#[test]
fn export_view_is_the_live_buffer() {
    let mut s = black(8, 8);
    let before = s.get_pixels().as_ptr();

    s.draw_circle(3, 3, 1, MILK);
    let i = (3 * 8 + 3) * 4;
    assert_eq!(&s.get_pixels()[i..i + 4], &WHITE);

    s.draw_point(7, 7, ESPRESSO);
    let j = (7 * 8 + 7) * 4;
    assert_eq!(&s.get_pixels()[j..j + 4], &ESPRESSO.to_rgba());

    // Same allocation every time: no copy, no reallocation.
    assert_eq!(s.get_pixels().as_ptr(), before);
    assert_eq!(s.get_pixels().len(), 8 * 8 * 4);
}

#[test]
fn end_to_end_pour() {
    let mut s = PaintSurface::new(100, 100).unwrap();
    s.clear(Color::rgb(101, 67, 33));
    s.draw_circle(50, 50, 3, Color::rgb(255, 255, 255));
    s.draw_line_gradient_size(50, 50, 60, 50, Color::rgb(255, 255, 255), 3, 10);
    assert_eq!(s.pixel(55, 50), Some(WHITE));
    assert_eq!(s.pixel(10, 10), Some([101, 67, 33, 255]));
}

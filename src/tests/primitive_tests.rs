use crate::display::colors::Color;
use crate::display::dirty_rect::DirtyRegion;
use crate::display::frame_buffer::FrameBuffer;

fn panel() -> FrameBuffer {
    FrameBuffer::new(128, 64).unwrap()
}

fn lit_pixels(fb: &FrameBuffer) -> Vec<(i32, i32)> {
    let mut lit = Vec::new();
    for y in 0..fb.height() as i32 {
        for x in 0..fb.width() as i32 {
            if fb.pixel(x, y) == Some(true) {
                lit.push((x, y));
            }
        }
    }
    lit
}

#[test]
fn test_white_then_black_clears() {
    let mut fb = panel();
    fb.set_pixel(7, 13, Color::White);
    assert_eq!(fb.pixel(7, 13), Some(true));
    fb.set_pixel(7, 13, Color::Black);
    assert_eq!(fb.pixel(7, 13), Some(false));
}

#[test]
fn test_invert_twice_restores() {
    let mut fb = panel();
    fb.set_pixel(0, 0, Color::White);
    for (x, y) in [(0, 0), (1, 0), (127, 63)] {
        let before = fb.pixel(x, y);
        fb.set_pixel(x, y, Color::Invert);
        assert_ne!(fb.pixel(x, y), before);
        fb.set_pixel(x, y, Color::Invert);
        assert_eq!(fb.pixel(x, y), before);
    }
}

#[test]
fn test_vline_matches_pixel_by_pixel() {
    for h in [1u16, 7, 8, 9, 16, 17] {
        for y in 0..8 {
            let mut fast = panel();
            let mut slow = panel();
            fast.draw_vline(20, y, h, Color::White);
            for i in 0..h as i32 {
                slow.set_pixel(20, y + i, Color::White);
            }
            assert_eq!(fast.as_bytes(), slow.as_bytes(), "y={} h={}", y, h);
            assert_eq!(fast.dirty_region(), slow.dirty_region(), "y={} h={}", y, h);
        }
    }
}

#[test]
fn test_fill_rect_clipped_at_left_edge() {
    let mut fb = panel();
    fb.fill_rect(-5, 0, 10, 10, Color::White);

    let lit = lit_pixels(&fb);
    assert_eq!(lit.len(), 5 * 10);
    assert!(lit.iter().all(|&(x, y)| (0..5).contains(&x) && (0..10).contains(&y)));
    assert_eq!(fb.dirty_region(), DirtyRegion { top: 0, left: 0, right: 4, bottom: 9 });
}

#[test]
fn test_draw_outside_panel_leaves_region_unchanged() {
    let mut fb = panel();
    fb.set_pixel(3, 3, Color::White);
    let before = fb.dirty_region();

    fb.set_pixel(-1, 3, Color::White);
    fb.set_pixel(128, 3, Color::White);
    fb.draw_hline(-20, 5, 20, Color::White);
    fb.draw_vline(5, 64, 10, Color::White);
    fb.fill_rect(200, 0, 10, 10, Color::White);
    fb.draw_rect(0, -30, 10, 20, Color::White);
    fb.fill_circle(-50, -50, 10, Color::White);

    assert_eq!(fb.dirty_region(), before);
    assert_eq!(lit_pixels(&fb), vec![(3, 3)]);
}

#[test]
fn test_dirty_region_is_union_of_draws() {
    let mut fb = panel();
    fb.draw_hline(10, 3, 5, Color::White);
    assert_eq!(fb.dirty_region(), DirtyRegion { top: 3, left: 10, right: 14, bottom: 3 });
    fb.draw_vline(2, 20, 4, Color::Black);
    assert_eq!(fb.dirty_region(), DirtyRegion { top: 3, left: 2, right: 14, bottom: 23 });
}

#[test]
fn test_circle_is_symmetric() {
    for r in 1..30u16 {
        let mut fb = panel();
        fb.draw_circle(64, 32, r, Color::White);
        for (x, y) in lit_pixels(&fb) {
            let (dx, dy) = (x - 64, y - 32);
            assert_eq!(fb.pixel(64 - dx, y), Some(true), "r={} mirror x", r);
            assert_eq!(fb.pixel(x, 32 - dy), Some(true), "r={} mirror y", r);
            assert_eq!(fb.pixel(64 + dy, 32 + dx), Some(true), "r={} transpose", r);
        }
    }
}

#[test]
fn test_circle_invert_matches_white() {
    for r in 1..30u16 {
        let mut white = panel();
        let mut invert = panel();
        white.draw_circle(64, 32, r, Color::White);
        invert.draw_circle(64, 32, r, Color::Invert);
        assert_eq!(white.as_bytes(), invert.as_bytes(), "r={}", r);
    }
}

#[test]
fn test_fill_circle_invert_matches_white() {
    for r in 1..30u16 {
        let mut white = panel();
        let mut invert = panel();
        white.fill_circle(64, 32, r, Color::White);
        invert.fill_circle(64, 32, r, Color::Invert);
        assert_eq!(white.as_bytes(), invert.as_bytes(), "r={}", r);
    }
}

#[test]
fn test_fill_circle_covers_outline() {
    for r in 1..30u16 {
        let mut outline = panel();
        let mut disk = panel();
        outline.draw_circle(64, 32, r, Color::White);
        disk.fill_circle(64, 32, r, Color::White);
        for (x, y) in lit_pixels(&outline) {
            assert_eq!(disk.pixel(x, y), Some(true), "r={} ({}, {})", r, x, y);
        }
    }
}

#[test]
fn test_rect_invert_matches_white() {
    let mut white = panel();
    let mut invert = panel();
    for (w, h) in [(1, 1), (1, 5), (5, 1), (2, 2), (3, 3), (20, 11)] {
        white.draw_rect(30, 20, w, h, Color::White);
        invert.draw_rect(30, 20, w, h, Color::Invert);
        assert_eq!(white.as_bytes(), invert.as_bytes(), "{}x{}", w, h);
        white.clear();
        invert.clear();
    }
}

#[test]
fn test_rect_outline_pixels() {
    let mut fb = panel();
    fb.draw_rect(10, 10, 4, 3, Color::White);
    let lit = lit_pixels(&fb);
    assert_eq!(lit.len(), 4 + 4 + 2);
    assert_eq!(fb.pixel(11, 11), Some(false));
    assert_eq!(fb.pixel(12, 11), Some(false));
}

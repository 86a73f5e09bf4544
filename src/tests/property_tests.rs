use proptest::prelude::*;

use crate::config::DisplayConfig;
use crate::display::colors::Color;
use crate::display::fonts::FONT_5X8;
use crate::display::frame_buffer::FrameBuffer;
use crate::display::simulator::PanelSimulator;
use crate::display::Sh1106;

fn drawing_color() -> impl Strategy<Value = Color> {
    prop_oneof![Just(Color::White), Just(Color::Black), Just(Color::Invert)]
}

fn seeded(bytes: &[u8]) -> FrameBuffer {
    let mut fb = FrameBuffer::new(128, 64).unwrap();
    fb.replace(bytes);
    fb.take_dirty();
    fb
}

proptest! {
    #[test]
    fn vline_equals_pixel_loop(
        seed in proptest::collection::vec(any::<u8>(), 1024),
        x in -4i32..132,
        y in -20i32..80,
        h in 0u16..90,
        color in drawing_color(),
    ) {
        let mut fast = seeded(&seed);
        let mut slow = seeded(&seed);
        fast.draw_vline(x, y, h, color);
        for i in 0..h as i32 {
            slow.set_pixel(x, y + i, color);
        }
        prop_assert_eq!(fast.as_bytes(), slow.as_bytes());
        prop_assert_eq!(fast.dirty_region(), slow.dirty_region());
    }

    #[test]
    fn hline_equals_pixel_loop(
        seed in proptest::collection::vec(any::<u8>(), 1024),
        x in -40i32..140,
        y in -4i32..68,
        w in 0u16..200,
        color in drawing_color(),
    ) {
        let mut fast = seeded(&seed);
        let mut slow = seeded(&seed);
        fast.draw_hline(x, y, w, color);
        for i in 0..w as i32 {
            slow.set_pixel(x + i, y, color);
        }
        prop_assert_eq!(fast.as_bytes(), slow.as_bytes());
        prop_assert_eq!(fast.dirty_region(), slow.dirty_region());
    }

    #[test]
    fn dirty_region_bounds_changed_pixels(
        x in -40i32..140,
        y in -40i32..80,
        w in 0u16..80,
        h in 0u16..80,
    ) {
        let mut fb = FrameBuffer::new(128, 64).unwrap();
        fb.fill_rect(x, y, w, h, Color::White);
        let region = fb.dirty_region();

        let mut lit = 0;
        for py in 0..64 {
            for px in 0..128 {
                if fb.pixel(px, py) == Some(true) {
                    lit += 1;
                    prop_assert!(region.contains(px as u16, py as u16));
                }
            }
        }
        // on a blank panel the region is exactly the lit box
        let area = match region.pages() {
            Some(_) => region.columns() as usize * (region.bottom - region.top + 1) as usize,
            None => 0,
        };
        prop_assert_eq!(lit, area);
    }

    #[test]
    fn fill_circle_invert_twice_restores(
        seed in proptest::collection::vec(any::<u8>(), 1024),
        x0 in -20i32..150,
        y0 in -20i32..90,
        r in 0u16..60,
    ) {
        let mut fb = seeded(&seed);
        fb.fill_circle(x0, y0, r, Color::Invert);
        fb.fill_circle(x0, y0, r, Color::Invert);
        prop_assert_eq!(fb.as_bytes(), &seed[..]);
    }

    #[test]
    fn circle_reflections(r in 1u16..31) {
        let mut fb = FrameBuffer::new(128, 64).unwrap();
        fb.draw_circle(64, 32, r, Color::White);
        for y in 0..64 {
            for x in 0..128 {
                if fb.pixel(x, y) == Some(true) {
                    prop_assert_eq!(fb.pixel(128 - x, y), Some(true));
                    prop_assert_eq!(fb.pixel(x, 64 - y), Some(true));
                }
            }
        }
    }

    #[test]
    fn measure_equals_drawn_advance(text in "[ -~]{0,24}", x in -50i32..130) {
        let mut fb = FrameBuffer::new(128, 64).unwrap();
        let drawn = fb.draw_string(&FONT_5X8, x, 10, &text, Color::White, Color::Transparent);
        prop_assert_eq!(drawn, FONT_5X8.measure(&text));
    }

    #[test]
    fn partial_flushes_mirror_buffer(
        ops in proptest::collection::vec((0i32..128, 0i32..64, 1u16..40, 1u16..40, drawing_color()), 1..8),
    ) {
        let mut display = Sh1106::new(PanelSimulator::new(128, 64), &DisplayConfig::default()).unwrap();
        for (x, y, w, h, color) in ops {
            display.fill_rect(x, y, w, h, color);
            display.flush(false);
        }
        prop_assert_eq!(display.transport().ram(), display.frame_buffer().as_bytes());
    }
}

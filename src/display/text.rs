// Glyph blitter: draws font glyphs through the pixel rasterizer

use log::trace;

use super::colors::Color;
use super::font::Font;
use super::frame_buffer::FrameBuffer;

impl FrameBuffer {
    /// Draw one character with its top-left corner at `(x, y)`.
    ///
    /// Set glyph bits are painted with `foreground`. Unset bits are painted
    /// with `background` when it is `White` or `Black`; `Transparent` and
    /// `Invert` backgrounds leave them untouched. Returns the glyph width.
    pub fn draw_char(
        &mut self,
        font: &Font,
        x: i32,
        y: i32,
        c: char,
        foreground: Color,
        background: Color,
    ) -> u32 {
        let glyph = font.glyph(c);
        if glyph.width == 0 {
            return 0;
        }

        trace!("Drawing {:?} at {},{}", c, x, y);

        let paint_background = matches!(background, Color::White | Color::Black);
        let bitmap = font.glyph_bitmap(&glyph);
        for (row, line) in bitmap.chunks(glyph.stride()).enumerate() {
            let py = y + row as i32;
            for col in 0..glyph.width as usize {
                let px = x + col as i32;
                if line[col / 8] & (0x80 >> (col % 8)) != 0 {
                    self.set_pixel(px, py, foreground);
                } else if paint_background {
                    self.set_pixel(px, py, background);
                }
            }
        }

        glyph.width as u32
    }

    /// Draw `text` left to right from `(x, y)`; returns the pixels advanced.
    ///
    /// Spacing is inserted between characters, never after the last one, so
    /// the result always equals [`Font::measure`].
    pub fn draw_string(
        &mut self,
        font: &Font,
        x: i32,
        y: i32,
        text: &str,
        foreground: Color,
        background: Color,
    ) -> u32 {
        let mut advance = 0u32;
        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            let cursor = x.saturating_add(advance as i32);
            advance += self.draw_char(font, cursor, y, c, foreground, background);
            if chars.peek().is_some() {
                advance += font.spacing as u32;
            }
        }
        advance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::fonts::{FONT_10X16, FONT_5X8};

    fn lit(fb: &FrameBuffer) -> usize {
        fb.as_bytes().iter().map(|b| b.count_ones() as usize).sum()
    }

    #[test]
    fn test_exclamation_mark() {
        let mut fb = FrameBuffer::new(16, 16).unwrap();
        let width = fb.draw_char(&FONT_5X8, 3, 4, '!', Color::White, Color::Transparent);
        assert_eq!(width, 1);
        for row in 0..8 {
            let expected = row < 5 || row == 6;
            assert_eq!(fb.pixel(3, 4 + row), Some(expected), "row {}", row);
        }
        assert_eq!(lit(&fb), 6);
    }

    #[test]
    fn test_background_fills_cell() {
        let mut fb = FrameBuffer::new(16, 16).unwrap();
        fb.draw_char(&FONT_5X8, 0, 0, '!', Color::Black, Color::White);
        // one column, eight rows: two unset glyph bits painted white
        assert_eq!(lit(&fb), 2);
        assert_eq!(fb.pixel(0, 5), Some(true));
        assert_eq!(fb.pixel(0, 7), Some(true));
    }

    #[test]
    fn test_invert_background_is_noop() {
        let mut fb = FrameBuffer::new(16, 16).unwrap();
        fb.fill_rect(0, 0, 16, 16, Color::White);
        fb.draw_char(&FONT_5X8, 0, 0, '!', Color::Black, Color::Invert);
        // only the six glyph bits were cleared
        assert_eq!(lit(&fb), 256 - 6);
    }

    #[test]
    fn test_space_with_transparent_background_leaves_region_empty() {
        let mut fb = FrameBuffer::new(16, 16).unwrap();
        let width = fb.draw_char(&FONT_5X8, 0, 0, ' ', Color::White, Color::Transparent);
        assert_eq!(width, 3);
        assert!(fb.dirty_region().is_empty());
    }

    #[test]
    fn test_wide_glyph_uses_two_bytes_per_row() {
        let mut narrow = FrameBuffer::new(32, 32).unwrap();
        let mut wide = FrameBuffer::new(32, 32).unwrap();
        narrow.draw_char(&FONT_5X8, 0, 0, 'M', Color::White, Color::Transparent);
        wide.draw_char(&FONT_10X16, 0, 0, 'M', Color::White, Color::Transparent);
        for y in 0..16 {
            for x in 0..10 {
                assert_eq!(wide.pixel(x, y), narrow.pixel(x / 2, y / 2), "({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_string_advance_matches_measure() {
        let mut fb = FrameBuffer::new(128, 16).unwrap();
        for text in ["", "A", "Hello, world", "\u{7F}x"] {
            let drawn = fb.draw_string(&FONT_5X8, 0, 0, text, Color::White, Color::Transparent);
            assert_eq!(drawn, FONT_5X8.measure(text), "{:?}", text);
        }
    }

    #[test]
    fn test_string_clips_at_right_edge() {
        let mut fb = FrameBuffer::new(16, 8).unwrap();
        let drawn = fb.draw_string(&FONT_5X8, 10, 0, "WWW", Color::White, Color::Transparent);
        assert_eq!(drawn, 17);
        let region = fb.dirty_region();
        assert!(region.right <= 15);
    }
}

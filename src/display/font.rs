//! Bitmap font tables and glyph lookup
//!
//! Glyph bitmaps are packed row-major, one bit per pixel, most significant
//! bit leftmost. Every row is padded to a whole number of bytes, so a glyph
//! of width `w` uses `(w + 7) / 8` bytes per row and `height` rows.

use super::fonts::{FONT_10X16, FONT_5X8};

/// Width and bitmap offset of one character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub width: u8,
    pub offset: u16,
}

impl Glyph {
    pub const fn new(width: u8, offset: u16) -> Self {
        Self { width, offset }
    }

    /// Bytes per bitmap row
    pub const fn stride(&self) -> usize {
        (self.width as usize + 7) / 8
    }
}

/// Immutable font description
#[derive(Debug)]
pub struct Font {
    pub name: &'static str,
    /// First character covered (inclusive)
    pub char_start: u8,
    /// Last character covered (inclusive)
    pub char_end: u8,
    /// Glyph row count
    pub height: u8,
    /// Horizontal gap between characters
    pub spacing: u8,
    pub glyphs: &'static [Glyph],
    pub bitmap: &'static [u8],
}

/// Registered fonts, selectable by index
pub static FONTS: [&Font; 2] = [&FONT_5X8, &FONT_10X16];

/// Look up a registered font by index
pub fn font_by_index(index: usize) -> Option<&'static Font> {
    FONTS.get(index).copied()
}

impl Font {
    /// Glyph for `c`; characters outside the font map to the space glyph
    pub fn glyph(&self, c: char) -> Glyph {
        let code = self.code_for(c);
        self.glyphs[(code - self.char_start) as usize]
    }

    /// Bitmap rows of a glyph, `height * stride` bytes
    pub fn glyph_bitmap(&self, glyph: &Glyph) -> &'static [u8] {
        let start = glyph.offset as usize;
        let end = start + glyph.stride() * self.height as usize;
        &self.bitmap[start..end.min(self.bitmap.len())]
    }

    /// Advance width of `c` in pixels
    pub fn char_width(&self, c: char) -> u32 {
        self.glyph(c).width as u32
    }

    /// Width of `text`: glyph widths plus spacing between characters
    pub fn measure(&self, text: &str) -> u32 {
        let mut width = 0;
        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            width += self.char_width(c);
            if chars.peek().is_some() {
                width += self.spacing as u32;
            }
        }
        width
    }

    pub fn covers(&self, c: char) -> bool {
        let code = c as u32;
        code >= self.char_start as u32 && code <= self.char_end as u32
    }

    fn code_for(&self, c: char) -> u8 {
        if self.covers(c) {
            c as u8
        } else {
            b' '
        }
    }
}

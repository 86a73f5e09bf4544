// Primitive rasterizer: pixels, lines, rectangles and circles
//
// Everything here clips against the panel and silently drops what falls
// outside. Every call that changes bits widens the dirty region by exactly
// the clipped extent it touched.

use super::colors::Color;
use super::frame_buffer::FrameBuffer;

/// Top-byte masks, indexed by the number of rows the run covers in its first
/// (unaligned) byte. The run always ends at bit 7 of that byte.
const PREMASK: [u8; 8] = [0x00, 0x80, 0xC0, 0xE0, 0xF0, 0xF8, 0xFC, 0xFE];

/// Bottom-byte masks, indexed by the number of leftover rows (< 8). The run
/// always starts at bit 0 of that byte.
const POSTMASK: [u8; 8] = [0x00, 0x01, 0x03, 0x07, 0x0F, 0x1F, 0x3F, 0x7F];

// Clipping happens against the panel afterwards, so clamping keeps the extent
fn clamp_coord(v: i64) -> i32 {
    v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

impl FrameBuffer {
    /// Set, clear or invert one pixel. Out-of-range coordinates are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if color.is_transparent() || !self.in_bounds(x, y) {
            return;
        }

        let index = self.index(x as usize, y as usize);
        color.apply(&mut self.bytes_mut()[index], 1 << (y & 7));
        self.dirty.include_point(x as u16, y as u16);
    }

    /// Horizontal line of `w` pixels starting at `(x, y)`
    pub fn draw_hline(&mut self, x: i32, y: i32, w: u16, color: Color) {
        if w == 0 || color.is_transparent() {
            return;
        }
        self.hline_span(x, x.saturating_add(w as i32), y, color);
    }

    /// Vertical line of `h` pixels starting at `(x, y)`
    pub fn draw_vline(&mut self, x: i32, y: i32, h: u16, color: Color) {
        if h == 0 || color.is_transparent() {
            return;
        }
        self.vline_span(x, y, y.saturating_add(h as i32), color);
    }

    /// Unfilled rectangle. Each border pixel is touched once, so `Invert`
    /// leaves the corners inverted like the rest of the outline.
    pub fn draw_rect(&mut self, x: i32, y: i32, w: u16, h: u16, color: Color) {
        if w == 0 || h == 0 || color.is_transparent() {
            return;
        }

        let right = x.saturating_add(w as i32 - 1);
        let bottom = y.saturating_add(h as i32 - 1);
        let inner_top = y.saturating_add(1);

        self.draw_hline(x, y, w, color);
        if h > 1 {
            self.draw_hline(x, bottom, w, color);
        }
        if h > 2 {
            self.draw_vline(x, inner_top, h - 2, color);
            if w > 1 {
                self.draw_vline(right, inner_top, h - 2, color);
            }
        }
    }

    /// Filled rectangle, drawn column by column
    pub fn fill_rect(&mut self, x: i32, y: i32, w: u16, h: u16, color: Color) {
        if w == 0 || h == 0 || color.is_transparent() {
            return;
        }

        let first = x.max(0);
        let last = x.saturating_add(w as i32).min(self.width() as i32);
        for column in first..last {
            self.draw_vline(column, y, h, color);
        }
    }

    /// Circle outline using the midpoint algorithm
    pub fn draw_circle(&mut self, x0: i32, y0: i32, r: u16, color: Color) {
        if r == 0 || color.is_transparent() {
            return;
        }

        let (x0, y0, r) = (x0 as i64, y0 as i64, r as i64);
        let mut x = r;
        let mut y = 1;
        let mut radius_err = 1 - r;

        self.plot(x0 - r, y0, color);
        self.plot(x0 + r, y0, color);
        self.plot(x0, y0 - r, color);
        self.plot(x0, y0 + r, color);

        while x >= y {
            self.plot(x0 + x, y0 + y, color);
            self.plot(x0 - x, y0 + y, color);
            self.plot(x0 + x, y0 - y, color);
            self.plot(x0 - x, y0 - y, color);
            // On the diagonal the mirrored points are the same four pixels
            if x != y {
                self.plot(x0 + y, y0 + x, color);
                self.plot(x0 - y, y0 + x, color);
                self.plot(x0 + y, y0 - x, color);
                self.plot(x0 - y, y0 - x, color);
            }

            y += 1;
            if radius_err < 0 {
                radius_err += 2 * y + 1;
            } else {
                x -= 1;
                radius_err += 2 * (y - x + 1);
            }
        }
    }

    /// Filled disk made of vertical chords.
    ///
    /// Columns `1..` up to the octant diagonal take their chord straight from
    /// the recurrence. Columns past the diagonal repeat across several steps,
    /// so each one is drawn only at its widest chord (the last step before the
    /// recurrence moves on). No column is drawn twice, which keeps `Invert`
    /// identical in shape to the other colors.
    pub fn fill_circle(&mut self, x0: i32, y0: i32, r: u16, color: Color) {
        if r == 0 || color.is_transparent() {
            return;
        }

        let (x0, y0, r) = (x0 as i64, y0 as i64, r as i64);
        let mut x = 1;
        let mut y = r;
        let mut radius_err = 1 - y;

        self.chord(x0, y0, r, color);
        while y >= x {
            self.chord(x0 - x, y0, y, color);
            self.chord(x0 + x, y0, y, color);

            let (step_x, step_y) = (x, y);
            x += 1;
            if radius_err < 0 {
                radius_err += 2 * x + 1;
            } else {
                y -= 1;
                radius_err += 2 * (x - y + 1);
            }

            let leaving_column = y != step_y || y < x;
            if leaving_column && step_y > step_x {
                self.chord(x0 - step_y, y0, step_x, color);
                self.chord(x0 + step_y, y0, step_x, color);
            }
        }
    }

    /// Vertical chord through `center_y` reaching `half` pixels up and down
    fn chord(&mut self, x: i64, center_y: i64, half: i64, color: Color) {
        let Ok(x) = i32::try_from(x) else {
            return;
        };
        let top = clamp_coord(center_y - half);
        let bottom = clamp_coord(center_y + half + 1);
        self.vline_span(x, top, bottom, color);
    }

    /// Pixel at widened coordinates; anything beyond `i32` is off the panel
    fn plot(&mut self, x: i64, y: i64, color: Color) {
        if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
            self.set_pixel(x, y, color);
        }
    }

    /// Row `y`, columns `left..right` (exclusive end), clipped to the panel
    fn hline_span(&mut self, left: i32, right: i32, y: i32, color: Color) {
        if y < 0 || y >= self.height() as i32 {
            return;
        }
        let start = left.max(0);
        let end = right.min(self.width() as i32);
        if start >= end {
            return;
        }

        let row = self.index(0, y as usize);
        let mask = 1u8 << (y & 7);
        let bytes = &mut self.bytes_mut()[row + start as usize..row + end as usize];
        for byte in bytes {
            color.apply(byte, mask);
        }

        self.dirty
            .include_span(start as u16, y as u16, (end - 1) as u16, y as u16);
    }

    /// Column `x`, rows `top..bottom` (exclusive end), clipped to the panel.
    ///
    /// Works a byte at a time: a masked partial byte at the top, whole bytes
    /// while at least 8 rows remain, then a masked partial byte at the bottom.
    fn vline_span(&mut self, x: i32, top: i32, bottom: i32, color: Color) {
        if x < 0 || x >= self.width() as i32 {
            return;
        }
        let top = top.max(0);
        let bottom = bottom.min(self.height() as i32);
        if top >= bottom {
            return;
        }

        let stride = self.width() as usize;
        let mut index = self.index(x as usize, top as usize);
        let mut remaining = (bottom - top) as usize;
        let bytes = self.bytes_mut();

        let offset = (top & 7) as usize;
        if offset != 0 {
            let run = 8 - offset;
            let mut mask = PREMASK[run];
            if remaining < run {
                mask &= 0xFF >> (run - remaining);
            }
            color.apply(&mut bytes[index], mask);
            remaining = remaining.saturating_sub(run);
            index += stride;
        }

        while remaining >= 8 {
            bytes[index] = color.fill_byte(bytes[index]);
            remaining -= 8;
            index += stride;
        }

        if remaining > 0 {
            color.apply(&mut bytes[index], POSTMASK[remaining]);
        }

        self.dirty
            .include_span(x as u16, top as u16, x as u16, (bottom - 1) as u16);
    }
}

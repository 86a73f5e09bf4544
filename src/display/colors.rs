// Pixel color semantics for the 1-bit frame buffer

use embedded_graphics_core::pixelcolor::BinaryColor;
use serde::{Deserialize, Serialize};

/// How a draw call treats each addressed bit.
///
/// `Transparent` used as a drawing color does nothing at all (no bits, no
/// dirty region). As a glyph background it means "leave unset glyph bits
/// alone".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Color {
    /// Skip the write
    Transparent,
    /// Clear the bit (pixel off)
    Black,
    /// Set the bit (pixel on)
    #[default]
    White,
    /// XOR the bit
    Invert,
}

impl Color {
    /// Apply this color to the bits selected by `mask` in `byte`.
    #[inline]
    pub fn apply(self, byte: &mut u8, mask: u8) {
        match self {
            Color::White => *byte |= mask,
            Color::Black => *byte &= !mask,
            Color::Invert => *byte ^= mask,
            Color::Transparent => {}
        }
    }

    /// Value of a fully covered byte after drawing.
    #[inline]
    pub fn fill_byte(self, byte: u8) -> u8 {
        match self {
            Color::White => 0xFF,
            Color::Black => 0x00,
            Color::Invert => !byte,
            Color::Transparent => byte,
        }
    }

    pub fn is_transparent(self) -> bool {
        self == Color::Transparent
    }
}

impl From<BinaryColor> for Color {
    fn from(color: BinaryColor) -> Self {
        match color {
            BinaryColor::On => Color::White,
            BinaryColor::Off => Color::Black,
        }
    }
}

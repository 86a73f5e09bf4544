// Built-in fonts: classic 5x7 glyphs on an 8-row cell, plus a 2x scaled copy

use super::font::{Font, Glyph};

pub static FONT_5X8: Font = Font {
    name: "font_5x8",
    char_start: b' ',
    char_end: b'~',
    height: 8,
    spacing: 1,
    glyphs: &FONT_5X8_GLYPHS,
    bitmap: &FONT_5X8_BITMAP,
};

static FONT_5X8_GLYPHS: [Glyph; 95] = [
    Glyph::new(3, 0), // ' '
    Glyph::new(1, 8), // '!'
    Glyph::new(3, 16), // '"'
    Glyph::new(5, 24), // '#'
    Glyph::new(5, 32), // '$'
    Glyph::new(5, 40), // '%'
    Glyph::new(5, 48), // '&'
    Glyph::new(3, 56), // '\''
    Glyph::new(3, 64), // '('
    Glyph::new(3, 72), // ')'
    Glyph::new(5, 80), // '*'
    Glyph::new(5, 88), // '+'
    Glyph::new(3, 96), // ','
    Glyph::new(5, 104), // '-'
    Glyph::new(2, 112), // '.'
    Glyph::new(5, 120), // '/'
    Glyph::new(5, 128), // '0'
    Glyph::new(3, 136), // '1'
    Glyph::new(5, 144), // '2'
    Glyph::new(5, 152), // '3'
    Glyph::new(5, 160), // '4'
    Glyph::new(5, 168), // '5'
    Glyph::new(5, 176), // '6'
    Glyph::new(5, 184), // '7'
    Glyph::new(5, 192), // '8'
    Glyph::new(5, 200), // '9'
    Glyph::new(1, 208), // ':'
    Glyph::new(2, 216), // ';'
    Glyph::new(4, 224), // '<'
    Glyph::new(5, 232), // '='
    Glyph::new(4, 240), // '>'
    Glyph::new(5, 248), // '?'
    Glyph::new(5, 256), // '@'
    Glyph::new(5, 264), // 'A'
    Glyph::new(5, 272), // 'B'
    Glyph::new(5, 280), // 'C'
    Glyph::new(5, 288), // 'D'
    Glyph::new(5, 296), // 'E'
    Glyph::new(5, 304), // 'F'
    Glyph::new(5, 312), // 'G'
    Glyph::new(5, 320), // 'H'
    Glyph::new(3, 328), // 'I'
    Glyph::new(5, 336), // 'J'
    Glyph::new(5, 344), // 'K'
    Glyph::new(5, 352), // 'L'
    Glyph::new(5, 360), // 'M'
    Glyph::new(5, 368), // 'N'
    Glyph::new(5, 376), // 'O'
    Glyph::new(5, 384), // 'P'
    Glyph::new(5, 392), // 'Q'
    Glyph::new(5, 400), // 'R'
    Glyph::new(5, 408), // 'S'
    Glyph::new(5, 416), // 'T'
    Glyph::new(5, 424), // 'U'
    Glyph::new(5, 432), // 'V'
    Glyph::new(5, 440), // 'W'
    Glyph::new(5, 448), // 'X'
    Glyph::new(5, 456), // 'Y'
    Glyph::new(5, 464), // 'Z'
    Glyph::new(4, 472), // '['
    Glyph::new(5, 480), // '\\'
    Glyph::new(4, 488), // ']'
    Glyph::new(5, 496), // '^'
    Glyph::new(5, 504), // '_'
    Glyph::new(3, 512), // '`'
    Glyph::new(5, 520), // 'a'
    Glyph::new(5, 528), // 'b'
    Glyph::new(5, 536), // 'c'
    Glyph::new(5, 544), // 'd'
    Glyph::new(5, 552), // 'e'
    Glyph::new(4, 560), // 'f'
    Glyph::new(5, 568), // 'g'
    Glyph::new(5, 576), // 'h'
    Glyph::new(3, 584), // 'i'
    Glyph::new(4, 592), // 'j'
    Glyph::new(4, 600), // 'k'
    Glyph::new(3, 608), // 'l'
    Glyph::new(5, 616), // 'm'
    Glyph::new(5, 624), // 'n'
    Glyph::new(5, 632), // 'o'
    Glyph::new(5, 640), // 'p'
    Glyph::new(5, 648), // 'q'
    Glyph::new(5, 656), // 'r'
    Glyph::new(5, 664), // 's'
    Glyph::new(5, 672), // 't'
    Glyph::new(5, 680), // 'u'
    Glyph::new(5, 688), // 'v'
    Glyph::new(5, 696), // 'w'
    Glyph::new(5, 704), // 'x'
    Glyph::new(5, 712), // 'y'
    Glyph::new(5, 720), // 'z'
    Glyph::new(3, 728), // '{'
    Glyph::new(1, 736), // '|'
    Glyph::new(3, 744), // '}'
    Glyph::new(5, 752), // '~'
];

static FONT_5X8_BITMAP: [u8; 760] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80, 0x80, 0x80, 0x80, 0x80, 0x00, 0x80, 0x00,
    0xA0, 0xA0, 0xA0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x50, 0x50, 0xF8, 0x50, 0xF8, 0x50, 0x50, 0x00,
    0x20, 0x78, 0xA0, 0x70, 0x28, 0xF0, 0x20, 0x00, 0xC0, 0xC8, 0x10, 0x20, 0x40, 0x98, 0x18, 0x00,
    0x40, 0xA0, 0xA0, 0x40, 0xA8, 0x90, 0x68, 0x00, 0x60, 0x60, 0x40, 0x80, 0x00, 0x00, 0x00, 0x00,
    0x20, 0x40, 0x80, 0x80, 0x80, 0x40, 0x20, 0x00, 0x80, 0x40, 0x20, 0x20, 0x20, 0x40, 0x80, 0x00,
    0x20, 0xA8, 0x70, 0xF8, 0x70, 0xA8, 0x20, 0x00, 0x00, 0x20, 0x20, 0xF8, 0x20, 0x20, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x60, 0x60, 0x40, 0x80, 0x00, 0x00, 0x00, 0xF8, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0xC0, 0xC0, 0x00, 0x00, 0x08, 0x10, 0x20, 0x40, 0x80, 0x00, 0x00,
    0x70, 0x88, 0x98, 0xA8, 0xC8, 0x88, 0x70, 0x00, 0x40, 0xC0, 0x40, 0x40, 0x40, 0x40, 0xE0, 0x00,
    0x70, 0x88, 0x08, 0x70, 0x80, 0x80, 0xF8, 0x00, 0xF8, 0x08, 0x10, 0x30, 0x08, 0x88, 0x70, 0x00,
    0x10, 0x30, 0x50, 0x90, 0xF8, 0x10, 0x10, 0x00, 0xF8, 0x80, 0xF0, 0x08, 0x08, 0x88, 0x70, 0x00,
    0x38, 0x40, 0x80, 0xF0, 0x88, 0x88, 0x70, 0x00, 0xF8, 0x08, 0x08, 0x10, 0x20, 0x40, 0x80, 0x00,
    0x70, 0x88, 0x88, 0x70, 0x88, 0x88, 0x70, 0x00, 0x70, 0x88, 0x88, 0x78, 0x08, 0x10, 0xE0, 0x00,
    0x00, 0x00, 0x80, 0x00, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x40, 0x00, 0x40, 0x40, 0x80, 0x00,
    0x10, 0x20, 0x40, 0x80, 0x40, 0x20, 0x10, 0x00, 0x00, 0x00, 0xF8, 0x00, 0xF8, 0x00, 0x00, 0x00,
    0x80, 0x40, 0x20, 0x10, 0x20, 0x40, 0x80, 0x00, 0x70, 0x88, 0x08, 0x30, 0x20, 0x00, 0x20, 0x00,
    0x70, 0x88, 0xA8, 0xB8, 0xB0, 0x80, 0x78, 0x00, 0x20, 0x50, 0x88, 0x88, 0xF8, 0x88, 0x88, 0x00,
    0xF0, 0x88, 0x88, 0xF0, 0x88, 0x88, 0xF0, 0x00, 0x70, 0x88, 0x80, 0x80, 0x80, 0x88, 0x70, 0x00,
    0xF0, 0x88, 0x88, 0x88, 0x88, 0x88, 0xF0, 0x00, 0xF8, 0x80, 0x80, 0xF0, 0x80, 0x80, 0xF8, 0x00,
    0xF8, 0x80, 0x80, 0xF0, 0x80, 0x80, 0x80, 0x00, 0x78, 0x88, 0x80, 0x80, 0x98, 0x88, 0x78, 0x00,
    0x88, 0x88, 0x88, 0xF8, 0x88, 0x88, 0x88, 0x00, 0xE0, 0x40, 0x40, 0x40, 0x40, 0x40, 0xE0, 0x00,
    0x38, 0x10, 0x10, 0x10, 0x10, 0x90, 0x60, 0x00, 0x88, 0x90, 0xA0, 0xC0, 0xA0, 0x90, 0x88, 0x00,
    0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0xF8, 0x00, 0x88, 0xD8, 0xA8, 0xA8, 0xA8, 0x88, 0x88, 0x00,
    0x88, 0x88, 0xC8, 0xA8, 0x98, 0x88, 0x88, 0x00, 0x70, 0x88, 0x88, 0x88, 0x88, 0x88, 0x70, 0x00,
    0xF0, 0x88, 0x88, 0xF0, 0x80, 0x80, 0x80, 0x00, 0x70, 0x88, 0x88, 0x88, 0xA8, 0x90, 0x68, 0x00,
    0xF0, 0x88, 0x88, 0xF0, 0xA0, 0x90, 0x88, 0x00, 0x70, 0x88, 0x80, 0x70, 0x08, 0x88, 0x70, 0x00,
    0xF8, 0xA8, 0x20, 0x20, 0x20, 0x20, 0x20, 0x00, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x70, 0x00,
    0x88, 0x88, 0x88, 0x88, 0x88, 0x50, 0x20, 0x00, 0x88, 0x88, 0x88, 0xA8, 0xA8, 0xA8, 0x50, 0x00,
    0x88, 0x88, 0x50, 0x20, 0x50, 0x88, 0x88, 0x00, 0x88, 0x88, 0x50, 0x20, 0x20, 0x20, 0x20, 0x00,
    0xF8, 0x08, 0x10, 0x70, 0x40, 0x80, 0xF8, 0x00, 0xF0, 0x80, 0x80, 0x80, 0x80, 0x80, 0xF0, 0x00,
    0x00, 0x80, 0x40, 0x20, 0x10, 0x08, 0x00, 0x00, 0xF0, 0x10, 0x10, 0x10, 0x10, 0x10, 0xF0, 0x00,
    0x20, 0x50, 0x88, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF8, 0x00,
    0xC0, 0xC0, 0x40, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x60, 0x10, 0x70, 0x90, 0x78, 0x00,
    0x80, 0x80, 0xB0, 0xC8, 0x88, 0xC8, 0xB0, 0x00, 0x00, 0x00, 0x70, 0x88, 0x80, 0x88, 0x70, 0x00,
    0x08, 0x08, 0x68, 0x98, 0x88, 0x98, 0x68, 0x00, 0x00, 0x00, 0x70, 0x88, 0xF8, 0x80, 0x70, 0x00,
    0x20, 0x50, 0x40, 0xE0, 0x40, 0x40, 0x40, 0x00, 0x00, 0x00, 0x70, 0x98, 0x98, 0x68, 0x08, 0x70,
    0x80, 0x80, 0xB0, 0xC8, 0x88, 0x88, 0x88, 0x00, 0x40, 0x00, 0xC0, 0x40, 0x40, 0x40, 0xE0, 0x00,
    0x10, 0x00, 0x10, 0x10, 0x10, 0x90, 0x60, 0x00, 0x80, 0x80, 0x90, 0xA0, 0xC0, 0xA0, 0x90, 0x00,
    0xC0, 0x40, 0x40, 0x40, 0x40, 0x40, 0xE0, 0x00, 0x00, 0x00, 0xD0, 0xA8, 0xA8, 0xA8, 0xA8, 0x00,
    0x00, 0x00, 0xB0, 0xC8, 0x88, 0x88, 0x88, 0x00, 0x00, 0x00, 0x70, 0x88, 0x88, 0x88, 0x70, 0x00,
    0x00, 0x00, 0xB0, 0xC8, 0xC8, 0xB0, 0x80, 0x80, 0x00, 0x00, 0x68, 0x98, 0x98, 0x68, 0x08, 0x08,
    0x00, 0x00, 0xB0, 0xC8, 0x80, 0x80, 0x80, 0x00, 0x00, 0x00, 0x78, 0x80, 0x70, 0x08, 0xF0, 0x00,
    0x20, 0x20, 0xF8, 0x20, 0x20, 0x28, 0x10, 0x00, 0x00, 0x00, 0x88, 0x88, 0x88, 0x98, 0x68, 0x00,
    0x00, 0x00, 0x88, 0x88, 0x88, 0x50, 0x20, 0x00, 0x00, 0x00, 0x88, 0x88, 0xA8, 0xA8, 0x50, 0x00,
    0x00, 0x00, 0x88, 0x50, 0x20, 0x50, 0x88, 0x00, 0x00, 0x00, 0x88, 0x88, 0x78, 0x08, 0x88, 0x70,
    0x00, 0x00, 0xF8, 0x10, 0x20, 0x40, 0xF8, 0x00, 0x20, 0x40, 0x40, 0x80, 0x40, 0x40, 0x20, 0x00,
    0x80, 0x80, 0x80, 0x00, 0x80, 0x80, 0x80, 0x00, 0x80, 0x40, 0x40, 0x20, 0x40, 0x40, 0x80, 0x00,
    0x40, 0xA8, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00,
];

pub static FONT_10X16: Font = Font {
    name: "font_10x16",
    char_start: b' ',
    char_end: b'~',
    height: 16,
    spacing: 2,
    glyphs: &FONT_10X16_GLYPHS,
    bitmap: &FONT_10X16_BITMAP,
};

static FONT_10X16_GLYPHS: [Glyph; 95] = [
    Glyph::new(6, 0), // ' '
    Glyph::new(2, 16), // '!'
    Glyph::new(6, 32), // '"'
    Glyph::new(10, 48), // '#'
    Glyph::new(10, 80), // '$'
    Glyph::new(10, 112), // '%'
    Glyph::new(10, 144), // '&'
    Glyph::new(6, 176), // '\''
    Glyph::new(6, 192), // '('
    Glyph::new(6, 208), // ')'
    Glyph::new(10, 224), // '*'
    Glyph::new(10, 256), // '+'
    Glyph::new(6, 288), // ','
    Glyph::new(10, 304), // '-'
    Glyph::new(4, 336), // '.'
    Glyph::new(10, 352), // '/'
    Glyph::new(10, 384), // '0'
    Glyph::new(6, 416), // '1'
    Glyph::new(10, 432), // '2'
    Glyph::new(10, 464), // '3'
    Glyph::new(10, 496), // '4'
    Glyph::new(10, 528), // '5'
    Glyph::new(10, 560), // '6'
    Glyph::new(10, 592), // '7'
    Glyph::new(10, 624), // '8'
    Glyph::new(10, 656), // '9'
    Glyph::new(2, 688), // ':'
    Glyph::new(4, 704), // ';'
    Glyph::new(8, 720), // '<'
    Glyph::new(10, 736), // '='
    Glyph::new(8, 768), // '>'
    Glyph::new(10, 784), // '?'
    Glyph::new(10, 816), // '@'
    Glyph::new(10, 848), // 'A'
    Glyph::new(10, 880), // 'B'
    Glyph::new(10, 912), // 'C'
    Glyph::new(10, 944), // 'D'
    Glyph::new(10, 976), // 'E'
    Glyph::new(10, 1008), // 'F'
    Glyph::new(10, 1040), // 'G'
    Glyph::new(10, 1072), // 'H'
    Glyph::new(6, 1104), // 'I'
    Glyph::new(10, 1120), // 'J'
    Glyph::new(10, 1152), // 'K'
    Glyph::new(10, 1184), // 'L'
    Glyph::new(10, 1216), // 'M'
    Glyph::new(10, 1248), // 'N'
    Glyph::new(10, 1280), // 'O'
    Glyph::new(10, 1312), // 'P'
    Glyph::new(10, 1344), // 'Q'
    Glyph::new(10, 1376), // 'R'
    Glyph::new(10, 1408), // 'S'
    Glyph::new(10, 1440), // 'T'
    Glyph::new(10, 1472), // 'U'
    Glyph::new(10, 1504), // 'V'
    Glyph::new(10, 1536), // 'W'
    Glyph::new(10, 1568), // 'X'
    Glyph::new(10, 1600), // 'Y'
    Glyph::new(10, 1632), // 'Z'
    Glyph::new(8, 1664), // '['
    Glyph::new(10, 1680), // '\\'
    Glyph::new(8, 1712), // ']'
    Glyph::new(10, 1728), // '^'
    Glyph::new(10, 1760), // '_'
    Glyph::new(6, 1792), // '`'
    Glyph::new(10, 1808), // 'a'
    Glyph::new(10, 1840), // 'b'
    Glyph::new(10, 1872), // 'c'
    Glyph::new(10, 1904), // 'd'
    Glyph::new(10, 1936), // 'e'
    Glyph::new(8, 1968), // 'f'
    Glyph::new(10, 1984), // 'g'
    Glyph::new(10, 2016), // 'h'
    Glyph::new(6, 2048), // 'i'
    Glyph::new(8, 2064), // 'j'
    Glyph::new(8, 2080), // 'k'
    Glyph::new(6, 2096), // 'l'
    Glyph::new(10, 2112), // 'm'
    Glyph::new(10, 2144), // 'n'
    Glyph::new(10, 2176), // 'o'
    Glyph::new(10, 2208), // 'p'
    Glyph::new(10, 2240), // 'q'
    Glyph::new(10, 2272), // 'r'
    Glyph::new(10, 2304), // 's'
    Glyph::new(10, 2336), // 't'
    Glyph::new(10, 2368), // 'u'
    Glyph::new(10, 2400), // 'v'
    Glyph::new(10, 2432), // 'w'
    Glyph::new(10, 2464), // 'x'
    Glyph::new(10, 2496), // 'y'
    Glyph::new(10, 2528), // 'z'
    Glyph::new(6, 2560), // '{'
    Glyph::new(2, 2576), // '|'
    Glyph::new(6, 2592), // '}'
    Glyph::new(10, 2608), // '~'
];

static FONT_10X16_BITMAP: [u8; 2640] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0x00, 0x00, 0xC0, 0xC0, 0x00, 0x00,
    0xCC, 0xCC, 0xCC, 0xCC, 0xCC, 0xCC, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x33, 0x00, 0x33, 0x00, 0x33, 0x00, 0x33, 0x00, 0xFF, 0xC0, 0xFF, 0xC0, 0x33, 0x00, 0x33, 0x00,
    0xFF, 0xC0, 0xFF, 0xC0, 0x33, 0x00, 0x33, 0x00, 0x33, 0x00, 0x33, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x0C, 0x00, 0x0C, 0x00, 0x3F, 0xC0, 0x3F, 0xC0, 0xCC, 0x00, 0xCC, 0x00, 0x3F, 0x00, 0x3F, 0x00,
    0x0C, 0xC0, 0x0C, 0xC0, 0xFF, 0x00, 0xFF, 0x00, 0x0C, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xF0, 0x00, 0xF0, 0x00, 0xF0, 0xC0, 0xF0, 0xC0, 0x03, 0x00, 0x03, 0x00, 0x0C, 0x00, 0x0C, 0x00,
    0x30, 0x00, 0x30, 0x00, 0xC3, 0xC0, 0xC3, 0xC0, 0x03, 0xC0, 0x03, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0x30, 0x00, 0x30, 0x00, 0xCC, 0x00, 0xCC, 0x00, 0xCC, 0x00, 0xCC, 0x00, 0x30, 0x00, 0x30, 0x00,
    0xCC, 0xC0, 0xCC, 0xC0, 0xC3, 0x00, 0xC3, 0x00, 0x3C, 0xC0, 0x3C, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0x3C, 0x3C, 0x3C, 0x3C, 0x30, 0x30, 0xC0, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x0C, 0x0C, 0x30, 0x30, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0x30, 0x30, 0x0C, 0x0C, 0x00, 0x00,
    0xC0, 0xC0, 0x30, 0x30, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x30, 0x30, 0xC0, 0xC0, 0x00, 0x00,
    0x0C, 0x00, 0x0C, 0x00, 0xCC, 0xC0, 0xCC, 0xC0, 0x3F, 0x00, 0x3F, 0x00, 0xFF, 0xC0, 0xFF, 0xC0,
    0x3F, 0x00, 0x3F, 0x00, 0xCC, 0xC0, 0xCC, 0xC0, 0x0C, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00, 0xFF, 0xC0, 0xFF, 0xC0,
    0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3C, 0x3C, 0x3C, 0x3C, 0x30, 0x30, 0xC0, 0xC0,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xC0, 0xFF, 0xC0,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF0, 0xF0, 0xF0, 0xF0, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0xC0, 0x00, 0xC0, 0x03, 0x00, 0x03, 0x00, 0x0C, 0x00, 0x0C, 0x00,
    0x30, 0x00, 0x30, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x3F, 0x00, 0x3F, 0x00, 0xC0, 0xC0, 0xC0, 0xC0, 0xC3, 0xC0, 0xC3, 0xC0, 0xCC, 0xC0, 0xCC, 0xC0,
    0xF0, 0xC0, 0xF0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0x3F, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x30, 0x30, 0xF0, 0xF0, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0xFC, 0xFC, 0x00, 0x00,
    0x3F, 0x00, 0x3F, 0x00, 0xC0, 0xC0, 0xC0, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x3F, 0x00, 0x3F, 0x00,
    0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xFF, 0xC0, 0xFF, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0xFF, 0xC0, 0xFF, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x03, 0x00, 0x03, 0x00, 0x0F, 0x00, 0x0F, 0x00,
    0x00, 0xC0, 0x00, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0x3F, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x03, 0x00, 0x03, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x33, 0x00, 0x33, 0x00, 0xC3, 0x00, 0xC3, 0x00,
    0xFF, 0xC0, 0xFF, 0xC0, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xFF, 0xC0, 0xFF, 0xC0, 0xC0, 0x00, 0xC0, 0x00, 0xFF, 0x00, 0xFF, 0x00, 0x00, 0xC0, 0x00, 0xC0,
    0x00, 0xC0, 0x00, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0x3F, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x0F, 0xC0, 0x0F, 0xC0, 0x30, 0x00, 0x30, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xFF, 0x00, 0xFF, 0x00,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0x3F, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xFF, 0xC0, 0xFF, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x03, 0x00, 0x03, 0x00,
    0x0C, 0x00, 0x0C, 0x00, 0x30, 0x00, 0x30, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x3F, 0x00, 0x3F, 0x00, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0x3F, 0x00, 0x3F, 0x00,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0x3F, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x3F, 0x00, 0x3F, 0x00, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0x3F, 0xC0, 0x3F, 0xC0,
    0x00, 0xC0, 0x00, 0xC0, 0x03, 0x00, 0x03, 0x00, 0xFC, 0x00, 0xFC, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0xC0, 0xC0, 0x00, 0x00, 0xC0, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x30, 0x30, 0x00, 0x00, 0x30, 0x30, 0x30, 0x30, 0xC0, 0xC0, 0x00, 0x00,
    0x03, 0x03, 0x0C, 0x0C, 0x30, 0x30, 0xC0, 0xC0, 0x30, 0x30, 0x0C, 0x0C, 0x03, 0x03, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xC0, 0xFF, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0xFF, 0xC0, 0xFF, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xC0, 0xC0, 0x30, 0x30, 0x0C, 0x0C, 0x03, 0x03, 0x0C, 0x0C, 0x30, 0x30, 0xC0, 0xC0, 0x00, 0x00,
    0x3F, 0x00, 0x3F, 0x00, 0xC0, 0xC0, 0xC0, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x0F, 0x00, 0x0F, 0x00,
    0x0C, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x3F, 0x00, 0x3F, 0x00, 0xC0, 0xC0, 0xC0, 0xC0, 0xCC, 0xC0, 0xCC, 0xC0, 0xCF, 0xC0, 0xCF, 0xC0,
    0xCF, 0x00, 0xCF, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0x3F, 0xC0, 0x3F, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0x0C, 0x00, 0x0C, 0x00, 0x33, 0x00, 0x33, 0x00, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0xFF, 0xC0, 0xFF, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0xFF, 0x00, 0xFF, 0x00, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xFF, 0x00, 0xFF, 0x00,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xFF, 0x00, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x3F, 0x00, 0x3F, 0x00, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00,
    0xC0, 0x00, 0xC0, 0x00, 0xC0, 0xC0, 0xC0, 0xC0, 0x3F, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xFF, 0x00, 0xFF, 0x00, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xFF, 0x00, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xFF, 0xC0, 0xFF, 0xC0, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xFF, 0x00, 0xFF, 0x00,
    0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xFF, 0xC0, 0xFF, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0xFF, 0xC0, 0xFF, 0xC0, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xFF, 0x00, 0xFF, 0x00,
    0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x3F, 0xC0, 0x3F, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00,
    0xC3, 0xC0, 0xC3, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0x3F, 0xC0, 0x3F, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xFF, 0xC0, 0xFF, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0xFC, 0xFC, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0xFC, 0xFC, 0x00, 0x00,
    0x0F, 0xC0, 0x0F, 0xC0, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00,
    0x03, 0x00, 0x03, 0x00, 0xC3, 0x00, 0xC3, 0x00, 0x3C, 0x00, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC3, 0x00, 0xC3, 0x00, 0xCC, 0x00, 0xCC, 0x00, 0xF0, 0x00, 0xF0, 0x00,
    0xCC, 0x00, 0xCC, 0x00, 0xC3, 0x00, 0xC3, 0x00, 0xC0, 0xC0, 0xC0, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00,
    0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xFF, 0xC0, 0xFF, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0xC0, 0xC0, 0xC0, 0xC0, 0xF3, 0xC0, 0xF3, 0xC0, 0xCC, 0xC0, 0xCC, 0xC0, 0xCC, 0xC0, 0xCC, 0xC0,
    0xCC, 0xC0, 0xCC, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xF0, 0xC0, 0xF0, 0xC0, 0xCC, 0xC0, 0xCC, 0xC0,
    0xC3, 0xC0, 0xC3, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0x3F, 0x00, 0x3F, 0x00, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0x3F, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xFF, 0x00, 0xFF, 0x00, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xFF, 0x00, 0xFF, 0x00,
    0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x3F, 0x00, 0x3F, 0x00, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0xCC, 0xC0, 0xCC, 0xC0, 0xC3, 0x00, 0xC3, 0x00, 0x3C, 0xC0, 0x3C, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0xFF, 0x00, 0xFF, 0x00, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xFF, 0x00, 0xFF, 0x00,
    0xCC, 0x00, 0xCC, 0x00, 0xC3, 0x00, 0xC3, 0x00, 0xC0, 0xC0, 0xC0, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0x3F, 0x00, 0x3F, 0x00, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0x00, 0xC0, 0x00, 0x3F, 0x00, 0x3F, 0x00,
    0x00, 0xC0, 0x00, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0x3F, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xFF, 0xC0, 0xFF, 0xC0, 0xCC, 0xC0, 0xCC, 0xC0, 0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00,
    0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0x3F, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0x33, 0x00, 0x33, 0x00, 0x0C, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xCC, 0xC0, 0xCC, 0xC0,
    0xCC, 0xC0, 0xCC, 0xC0, 0xCC, 0xC0, 0xCC, 0xC0, 0x33, 0x00, 0x33, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0x33, 0x00, 0x33, 0x00, 0x0C, 0x00, 0x0C, 0x00,
    0x33, 0x00, 0x33, 0x00, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0x33, 0x00, 0x33, 0x00, 0x0C, 0x00, 0x0C, 0x00,
    0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xFF, 0xC0, 0xFF, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x03, 0x00, 0x03, 0x00, 0x3F, 0x00, 0x3F, 0x00,
    0x30, 0x00, 0x30, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xFF, 0xC0, 0xFF, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0xFF, 0xFF, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xFF, 0xFF, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0x30, 0x00, 0x30, 0x00, 0x0C, 0x00, 0x0C, 0x00,
    0x03, 0x00, 0x03, 0x00, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xFF, 0xFF, 0x03, 0x03, 0x03, 0x03, 0x03, 0x03, 0x03, 0x03, 0x03, 0x03, 0xFF, 0xFF, 0x00, 0x00,
    0x0C, 0x00, 0x0C, 0x00, 0x33, 0x00, 0x33, 0x00, 0xC0, 0xC0, 0xC0, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xC0, 0xFF, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0xF0, 0xF0, 0xF0, 0xF0, 0x30, 0x30, 0x0C, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3C, 0x00, 0x3C, 0x00, 0x03, 0x00, 0x03, 0x00,
    0x3F, 0x00, 0x3F, 0x00, 0xC3, 0x00, 0xC3, 0x00, 0x3F, 0xC0, 0x3F, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xCF, 0x00, 0xCF, 0x00, 0xF0, 0xC0, 0xF0, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0xF0, 0xC0, 0xF0, 0xC0, 0xCF, 0x00, 0xCF, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3F, 0x00, 0x3F, 0x00, 0xC0, 0xC0, 0xC0, 0xC0,
    0xC0, 0x00, 0xC0, 0x00, 0xC0, 0xC0, 0xC0, 0xC0, 0x3F, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x3C, 0xC0, 0x3C, 0xC0, 0xC3, 0xC0, 0xC3, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC3, 0xC0, 0xC3, 0xC0, 0x3C, 0xC0, 0x3C, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3F, 0x00, 0x3F, 0x00, 0xC0, 0xC0, 0xC0, 0xC0,
    0xFF, 0xC0, 0xFF, 0xC0, 0xC0, 0x00, 0xC0, 0x00, 0x3F, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x0C, 0x0C, 0x33, 0x33, 0x30, 0x30, 0xFC, 0xFC, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3F, 0x00, 0x3F, 0x00, 0xC3, 0xC0, 0xC3, 0xC0,
    0xC3, 0xC0, 0xC3, 0xC0, 0x3C, 0xC0, 0x3C, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x3F, 0x00, 0x3F, 0x00,
    0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xCF, 0x00, 0xCF, 0x00, 0xF0, 0xC0, 0xF0, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0x30, 0x30, 0x00, 0x00, 0xF0, 0xF0, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0xFC, 0xFC, 0x00, 0x00,
    0x03, 0x03, 0x00, 0x00, 0x03, 0x03, 0x03, 0x03, 0x03, 0x03, 0xC3, 0xC3, 0x3C, 0x3C, 0x00, 0x00,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC3, 0xC3, 0xCC, 0xCC, 0xF0, 0xF0, 0xCC, 0xCC, 0xC3, 0xC3, 0x00, 0x00,
    0xF0, 0xF0, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0xFC, 0xFC, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF3, 0x00, 0xF3, 0x00, 0xCC, 0xC0, 0xCC, 0xC0,
    0xCC, 0xC0, 0xCC, 0xC0, 0xCC, 0xC0, 0xCC, 0xC0, 0xCC, 0xC0, 0xCC, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xCF, 0x00, 0xCF, 0x00, 0xF0, 0xC0, 0xF0, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3F, 0x00, 0x3F, 0x00, 0xC0, 0xC0, 0xC0, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0x3F, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xCF, 0x00, 0xCF, 0x00, 0xF0, 0xC0, 0xF0, 0xC0,
    0xF0, 0xC0, 0xF0, 0xC0, 0xCF, 0x00, 0xCF, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3C, 0xC0, 0x3C, 0xC0, 0xC3, 0xC0, 0xC3, 0xC0,
    0xC3, 0xC0, 0xC3, 0xC0, 0x3C, 0xC0, 0x3C, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xCF, 0x00, 0xCF, 0x00, 0xF0, 0xC0, 0xF0, 0xC0,
    0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3F, 0xC0, 0x3F, 0xC0, 0xC0, 0x00, 0xC0, 0x00,
    0x3F, 0x00, 0x3F, 0x00, 0x00, 0xC0, 0x00, 0xC0, 0xFF, 0x00, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00, 0xFF, 0xC0, 0xFF, 0xC0, 0x0C, 0x00, 0x0C, 0x00,
    0x0C, 0x00, 0x0C, 0x00, 0x0C, 0xC0, 0x0C, 0xC0, 0x03, 0x00, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC3, 0xC0, 0xC3, 0xC0, 0x3C, 0xC0, 0x3C, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0x33, 0x00, 0x33, 0x00, 0x0C, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0xCC, 0xC0, 0xCC, 0xC0, 0xCC, 0xC0, 0xCC, 0xC0, 0x33, 0x00, 0x33, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xC0, 0xC0, 0xC0, 0xC0, 0x33, 0x00, 0x33, 0x00,
    0x0C, 0x00, 0x0C, 0x00, 0x33, 0x00, 0x33, 0x00, 0xC0, 0xC0, 0xC0, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0x3F, 0xC0, 0x3F, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0x3F, 0x00, 0x3F, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xC0, 0xFF, 0xC0, 0x03, 0x00, 0x03, 0x00,
    0x0C, 0x00, 0x0C, 0x00, 0x30, 0x00, 0x30, 0x00, 0xFF, 0xC0, 0xFF, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0x0C, 0x0C, 0x30, 0x30, 0x30, 0x30, 0xC0, 0xC0, 0x30, 0x30, 0x30, 0x30, 0x0C, 0x0C, 0x00, 0x00,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0x00, 0x00, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0x00, 0x00,
    0xC0, 0xC0, 0x30, 0x30, 0x30, 0x30, 0x0C, 0x0C, 0x30, 0x30, 0x30, 0x30, 0xC0, 0xC0, 0x00, 0x00,
    0x30, 0x00, 0x30, 0x00, 0xCC, 0xC0, 0xCC, 0xC0, 0x03, 0x00, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

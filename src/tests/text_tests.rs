use crate::config::DisplayConfig;
use crate::display::simulator::PanelSimulator;
use crate::display::Sh1106;
use crate::Color;

fn display() -> Sh1106<PanelSimulator> {
    Sh1106::new(PanelSimulator::new(128, 64), &DisplayConfig::default()).unwrap()
}

#[test]
fn test_font_metrics() {
    let mut display = display();
    assert_eq!(display.font_height(), 8);
    assert_eq!(display.font_spacing(), 1);

    display.select_font(1);
    assert_eq!(display.font_height(), 16);
    assert_eq!(display.font_spacing(), 2);
}

#[test]
fn test_unknown_font_index_keeps_current() {
    let mut display = display();
    display.select_font(1);
    display.select_font(42);
    assert_eq!(display.font().map(|f| f.name), Some("font_10x16"));
}

#[test]
fn test_configured_font_is_selected() {
    let config = DisplayConfig { font: 1, ..Default::default() };
    let display = Sh1106::new(PanelSimulator::new(128, 64), &config).unwrap();
    assert_eq!(display.font_height(), 16);
}

#[test]
fn test_measure_matches_draw() {
    let mut display = display();
    for font in 0..2 {
        display.select_font(font);
        for text in ["", " ", "Hi!", "The quick brown fox", "~{|}", "tab\there"] {
            let measured = display.measure_string(text);
            let drawn = display.draw_string_color(0, 0, text, Color::Invert, Color::Black);
            assert_eq!(measured, drawn, "font {} {:?}", font, text);
        }
    }
}

#[test]
fn test_draw_string_is_white_on_transparent() {
    let mut display = display();
    display.fill_rect(0, 0, 40, 8, Color::White);
    display.draw_string(0, 0, "....");
    // nothing was cleared: transparent background, white glyph bits
    assert!((0..40).all(|x| (0..8).all(|y| display.frame_buffer().pixel(x, y) == Some(true))));
}

#[test]
fn test_background_fills_glyph_cell() {
    let mut display = display();
    display.fill_rect(0, 0, 20, 8, Color::White);
    let width = display.draw_char(0, 0, ' ', Color::White, Color::Black) as i32;
    assert_eq!(width, 3);
    for x in 0..width {
        for y in 0..8 {
            assert_eq!(display.frame_buffer().pixel(x, y), Some(false));
        }
    }
    assert_eq!(display.frame_buffer().pixel(width, 0), Some(true));
}

#[test]
fn test_string_dirty_region_starts_at_cursor() {
    let mut display = display();
    display.flush(false);
    display.draw_string_color(30, 16, "A", Color::White, Color::Black);
    let region = display.dirty_region();
    assert_eq!((region.left, region.right), (30, 34));
    assert_eq!((region.top, region.bottom), (16, 23));

    let stats = display.flush(false);
    assert_eq!(stats.bursts, 1);
    assert_eq!(stats.bytes, 5);
}

#[test]
fn test_rendered_text_reaches_panel() {
    let mut display = display();
    display.draw_string(0, 0, "!");
    display.flush(false);
    let sim = display.transport();
    for y in 0..8 {
        assert_eq!(sim.pixel(0, y), y < 5 || y == 6, "row {}", y);
    }
}

use crate::config::DisplayConfig;
use crate::display::commands::*;
use crate::display::flush::FlushStats;
use crate::display::simulator::PanelSimulator;
use crate::display::Sh1106;
use crate::Color;

/// 128x64 driver with the init traffic already discarded
fn display() -> Sh1106<PanelSimulator> {
    let mut display = Sh1106::new(PanelSimulator::new(128, 64), &DisplayConfig::default()).unwrap();
    display.transport_mut().clear_trace();
    display
}

#[test]
fn test_single_pixel_sends_one_byte() {
    let mut display = display();
    display.set_pixel(5, 5, Color::White);

    let stats = display.flush(false);
    assert_eq!(stats, FlushStats { bursts: 1, bytes: 1, failures: 0 });

    let sim = display.transport();
    assert_eq!(sim.commands(), vec![CMD_COLUMN_ADDR, 5, 5, CMD_PAGE_ADDR, 0, 0]);
    assert_eq!(sim.data_writes(), vec![&[0x20][..]]);
    assert!(display.dirty_region().is_empty());
}

#[test]
fn test_forced_flush_sends_whole_frame() {
    let mut display = display();
    display.set_pixel(5, 5, Color::White);

    let stats = display.flush(true);
    assert_eq!(stats.bursts, 1);
    assert_eq!(stats.bytes, 1024);

    let sim = display.transport();
    assert_eq!(sim.commands(), vec![CMD_COLUMN_ADDR, 0, 127, CMD_PAGE_ADDR, 0, 7]);
    assert_eq!(sim.data_writes()[0].len(), 1024);
}

#[test]
fn test_clear_then_flush_then_nothing() {
    let mut display = display();
    display.fill_rect(10, 10, 20, 20, Color::White);
    display.clear();

    display.flush(true);
    let data = display.transport().data_writes();
    assert_eq!(data.len(), 1);
    assert!(data[0].iter().all(|&b| b == 0));

    display.transport_mut().clear_trace();
    let stats = display.flush(false);
    assert_eq!(stats, FlushStats::default());
    assert!(display.transport().trace().is_empty());
}

#[test]
fn test_region_spanning_pages_sends_one_burst_per_page() {
    let mut display = display();
    display.draw_vline(10, 4, 10, Color::White);
    display.draw_hline(10, 20, 3, Color::White);

    let stats = display.flush(false);
    assert_eq!(stats.bursts, 3);
    assert_eq!(stats.bytes, 9);

    let sim = display.transport();
    assert_eq!(sim.commands(), vec![CMD_COLUMN_ADDR, 10, 12, CMD_PAGE_ADDR, 0, 2]);
    assert_eq!(
        sim.data_writes(),
        vec![&[0xF0, 0, 0][..], &[0x3F, 0, 0][..], &[0x10, 0x10, 0x10][..]]
    );
}

#[test]
fn test_region_covering_panel_takes_full_frame_path() {
    let mut display = display();
    display.fill_rect(0, 0, 128, 64, Color::White);

    let stats = display.flush(false);
    assert_eq!(stats.bursts, 1);
    assert_eq!(stats.bytes, 1024);
    assert!(display.transport().ram().iter().all(|&b| b == 0xFF));
}

#[test]
fn test_simulated_ram_matches_buffer() {
    let mut display = display();
    display.draw_circle(40, 30, 20, Color::White);
    display.fill_circle(90, 40, 12, Color::Invert);
    display.draw_string(3, 50, "flush");
    display.flush(false);

    display.fill_rect(60, 5, 30, 30, Color::Invert);
    display.flush(false);

    assert_eq!(display.transport().ram(), display.frame_buffer().as_bytes());
}

#[test]
fn test_transport_failure_is_counted_and_region_reset() {
    let mut display = display();
    display.set_pixel(1, 1, Color::White);
    display.transport_mut().fail_writes(true);

    let stats = display.flush(false);
    assert_eq!(stats.failures, 1);
    assert_eq!(stats.bursts, 0);
    assert!(display.dirty_region().is_empty());

    display.transport_mut().fail_writes(false);
    display.flush(false);
    assert!(display.transport().trace().is_empty());
    assert!(!display.transport().pixel(1, 1));
}

#[test]
fn test_forced_flush_failure() {
    let mut display = display();
    display.transport_mut().fail_writes(true);
    let stats = display.flush(true);
    assert_eq!(stats, FlushStats { bursts: 0, bytes: 0, failures: 1 });
}

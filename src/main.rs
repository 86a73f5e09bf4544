use anyhow::Result;
use clap::Parser;
use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{Line, PrimitiveStyle},
};
use log::{info, LevelFilter};
use std::path::PathBuf;

use sh1106_oled::config::load_or_default;
use sh1106_oled::logging::{init_logger, parse_level};
use sh1106_oled::{Color, PanelSimulator, Sh1106};

#[derive(Parser)]
#[command(name = "oled-preview")]
#[command(about = "Render a demo scene on a simulated SH1106 panel", long_about = None)]
struct Cli {
    /// JSON display config (defaults are used when missing or invalid)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Text drawn in the middle of the panel
    #[arg(short, long, default_value = "Hello SH1106")]
    text: String,

    /// Font index, overriding the config
    #[arg(short, long)]
    font: Option<usize>,

    /// off, error, warn, info, debug or trace
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Print the decoded bus traffic after rendering
    #[arg(long)]
    trace: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = parse_level(&cli.log_level).unwrap_or(LevelFilter::Info);
    if let Err(e) = init_logger(level) {
        eprintln!("Logger already installed: {}", e);
    }

    let config = load_or_default(cli.config.as_deref());
    let simulator = PanelSimulator::with_address(config.address, config.width(), config.height());
    let mut display = Sh1106::new(simulator, &config)?;

    if let Some(font) = cli.font {
        display.select_font(font);
    }

    draw_scene(&mut display, &cli.text)?;
    let stats = display.flush(false);
    info!(
        "Flushed {} bytes in {} bursts ({} failures)",
        stats.bytes, stats.bursts, stats.failures
    );

    let simulator = display.close();
    print!("{}", simulator.render_ascii());
    if cli.trace {
        simulator.print_trace_summary();
    }
    Ok(())
}

fn draw_scene(display: &mut Sh1106<PanelSimulator>, text: &str) -> Result<()> {
    let w = display.width() as i32;
    let h = display.height() as i32;
    let r = (h / 4).max(1) as u16;

    display.draw_rect(0, 0, display.width(), display.height(), Color::White);
    display.draw_circle(r as i32 + 2, h / 2, r, Color::White);
    display.fill_circle(w - r as i32 - 3, h / 2, r, Color::White);
    display.fill_rect(w - 2 * r as i32 - 3, h / 2 - 2, 2 * r, 4, Color::Invert);

    let text_width = display.measure_string(text) as i32;
    let text_y = (h - display.font_height() as i32) / 2;
    display.draw_string(((w - text_width) / 2).max(1), text_y, text);

    Line::new(Point::new(1, h - 2), Point::new(w - 2, h - 2))
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
        .draw(display)?;

    Ok(())
}

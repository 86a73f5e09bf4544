use log::{Level, LevelFilter, Metadata, Record};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

static START_TIME: OnceLock<Instant> = OnceLock::new();

mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BRIGHT_RED: &str = "\x1b[91m";
    pub const BRIGHT_YELLOW: &str = "\x1b[93m";
    pub const BRIGHT_GREEN: &str = "\x1b[92m";
    pub const BRIGHT_BLUE: &str = "\x1b[94m";
    pub const GRAY: &str = "\x1b[90m";
}

/// Colored, timestamped lines on stderr so stdout stays free for output
struct OledLogger;

impl log::Log for OledLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let start = START_TIME.get_or_init(Instant::now);
        let ts_compact = format_elapsed(start.elapsed());

        let (color, level_char) = match record.level() {
            Level::Error => (colors::BRIGHT_RED, 'E'),
            Level::Warn => (colors::BRIGHT_YELLOW, 'W'),
            Level::Info => (colors::BRIGHT_GREEN, 'I'),
            Level::Debug => (colors::BRIGHT_BLUE, 'D'),
            Level::Trace => (colors::GRAY, 'T'),
        };
        let module = short_module(record.module_path().unwrap_or("unknown"));

        eprintln!(
            "{}{} [{}] {:>12} | {}{}",
            color,
            ts_compact,
            level_char,
            module,
            record.args(),
            colors::RESET
        );
    }

    fn flush(&self) {}
}

static LOGGER: OledLogger = OledLogger;

/// Install the logger; fails if another logger is already set
pub fn init_logger(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    let _ = START_TIME.set(Instant::now());
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

/// Parse and set log level from a string; returns true if applied
pub fn set_max_level_from_str(level: &str) -> bool {
    match parse_level(level) {
        Some(lf) => {
            log::set_max_level(lf);
            true
        }
        None => false,
    }
}

/// Current global max level
pub fn current_max_level() -> LevelFilter {
    log::max_level()
}

pub fn parse_level(level: &str) -> Option<LevelFilter> {
    let lf = match level.to_ascii_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" | "warning" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => return None,
    };
    Some(lf)
}

fn format_elapsed(elapsed: Duration) -> String {
    let seconds = elapsed.as_secs();
    if seconds < 60 {
        format!("{:>3}.{:03}s", seconds, elapsed.subsec_millis())
    } else if seconds < 3600 {
        format!("{:>2}m{:02}s", seconds / 60, seconds % 60)
    } else {
        format!("{:>2}h{:02}m", seconds / 3600, (seconds % 3600) / 60)
    }
}

/// Last path segment, cut to 12 characters
fn short_module(path: &str) -> &str {
    let module = path.rsplit("::").next().unwrap_or(path);
    match module.char_indices().nth(12) {
        Some((end, _)) => &module[..end],
        None => module,
    }
}

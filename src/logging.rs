#![cfg(feature = "std")]

use std::env;
use std::io::Write;

use log::{self, LevelFilter, Metadata, Record};

/// Environment variable holding the default log level.
pub const LOG_ENV: &str = "BATTLESHIP_LOG";

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // stdout carries the board, so log lines go to stderr.
            let _ = writeln!(
                std::io::stderr().lock(),
                "{} {} - {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Resolve the level from an explicit override, then `BATTLESHIP_LOG`,
/// falling back to `warn`.
pub fn log_level(explicit: Option<&str>) -> LevelFilter {
    explicit
        .map(str::to_string)
        .or_else(|| env::var(LOG_ENV).ok())
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Install the stderr logger. Later calls keep the first logger.
pub fn init_logging(explicit: Option<&str>) {
    let level = log_level(explicit);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}

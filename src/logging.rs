#![cfg(feature = "std")]

use log::{LevelFilter, Metadata, Record};
use std::env;

/// Environment variable naming the log level, e.g. `TICTACTOE_LOG=debug`.
pub const LOG_ENV: &str = "TICTACTOE_LOG";

/// Writes `LEVEL [module] message` lines to stderr so stdout stays free for
/// the board and the simulation report.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{:<5} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Level for a raw `TICTACTOE_LOG` value. Unset or unrecognised values fall
/// back to `warn`; `off` silences everything.
pub fn log_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Install the stderr logger at the level taken from [`LOG_ENV`].
/// Calling it again keeps the first logger.
pub fn init_logging() {
    let level = log_level(env::var(LOG_ENV).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

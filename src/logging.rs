#![cfg(feature = "std")]

//! stderr logger. Prompt boxes own stdout, so diagnostics never go there.

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable holding the log level (`error` .. `trace`, `off`).
pub const LOG_ENV: &str = "QUIKCLI_LOG";

struct PromptLogger;

impl Log for PromptLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        eprintln!("[{}] {:<5} {}", record.target(), record.level(), record.args());
    }

    fn flush(&self) {}
}

static LOGGER: PromptLogger = PromptLogger;

/// Level named by `value`, `warn` when missing or unknown.
pub fn log_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Install the stderr logger at the level from [`LOG_ENV`]. A second call,
/// or a logger installed by the host application, is left alone.
pub fn init_logging() {
    let level = log_level(std::env::var(LOG_ENV).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

use log::LevelFilter;
use std::sync::Once;

/// Environment variable holding the max log level (`error`..`trace`, or `off`).
pub const LOG_ENV: &str = "TAGCURVE_LOG";

struct ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        // stdout carries the simplified curves; keep diagnostics on stderr.
        eprintln!("[{}] {}: {}", record.level(), record.target(), record.args());
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;
static INIT: Once = Once::new();

/// Parses a level name, falling back to `Info` for anything unrecognised.
pub fn level_from_str(s: Option<&str>) -> LevelFilter {
    s.and_then(|s| s.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Installs the console logger once. The level comes from `TAGCURVE_LOG`.
pub fn init_logger() {
    INIT.call_once(|| {
        let level = level_from_str(std::env::var(LOG_ENV).ok().as_deref());
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(level);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parsing_falls_back_to_info() {
        assert_eq!(level_from_str(Some("debug")), LevelFilter::Debug);
        assert_eq!(level_from_str(Some(" TRACE ")), LevelFilter::Trace);
        assert_eq!(level_from_str(Some("off")), LevelFilter::Off);
        assert_eq!(level_from_str(Some("loud")), LevelFilter::Info);
        assert_eq!(level_from_str(None), LevelFilter::Info);
    }
}

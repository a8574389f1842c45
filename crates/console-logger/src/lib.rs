//! Console Logger
//!
//! `log` backend for the browser: every record goes to the matching
//! `console.*` method so devtools level filters keep working.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;

/// Logger that forwards records to `web_sys::console`
pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    pub const fn new(level: LevelFilter) -> Self {
        Self { level }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format_line(
            record.level(),
            record.target(),
            &record.args().to_string(),
        ));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug => web_sys::console::log_1(&line),
            Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger as the global `log` backend.
///
/// Fails if another logger was installed first.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger: &'static ConsoleLogger = Box::leak(Box::new(ConsoleLogger::new(level)));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Render one console line: `LEVEL target: message`.
///
/// The crate-root target is dropped for messages that already carry their
/// own `[Area]` prefix.
pub fn format_line(level: Level, target: &str, message: &str) -> String {
    if message.starts_with('[') {
        format!("{:<5} {}", level, message)
    } else {
        format!("{:<5} {}: {}", level, target, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_with_target() {
        let line = format_line(Level::Warn, "workforce_admin_ui::api", "slow response");
        assert_eq!(line, "WARN  workforce_admin_ui::api: slow response");
    }

    #[test]
    fn test_format_line_with_area_prefix() {
        let line = format_line(Level::Info, "workforce_admin_ui", "[API] GET /api/region/");
        assert_eq!(line, "INFO  [API] GET /api/region/");
    }

    #[test]
    fn test_enabled_respects_level() {
        let logger = ConsoleLogger::new(LevelFilter::Info);
        let warn = Metadata::builder().level(Level::Warn).build();
        let debug = Metadata::builder().level(Level::Debug).build();
        assert!(logger.enabled(&warn));
        assert!(!logger.enabled(&debug));
    }
}

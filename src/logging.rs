//! Bridge from the `log` crate to the process-wide logger
//!
//! After [`init`], records emitted with the `log` macros are printed through
//! the same prompt and options as [`crate::log`].

use log::{Level, LevelFilter, Metadata, Record};

use crate::logger::Logger;
use crate::severity::Severity;
use crate::Result;

static BRIDGE: LogBridge = LogBridge;

/// `log::Log` implementation writing to standard output
pub struct LogBridge;

impl log::Log for LogBridge {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        // The message is already formatted, so it goes out as a template
        // with no arguments and is printed literally.
        let message = record.args().to_string();
        Logger::global().log(severity_for(record.level()), &message, &[]);
    }

    fn flush(&self) {}
}

/// Severity a `log` level is printed with.
pub fn severity_for(level: Level) -> Severity {
    match level {
        Level::Error => Severity::Error,
        Level::Warn => Severity::Warning,
        Level::Info => Severity::Info,
        Level::Debug | Level::Trace => Severity::Trace,
    }
}

/// Install the bridge as the `log` crate's global logger.
///
/// Fails if a logger has already been installed.
pub fn init() -> Result<()> {
    log::set_logger(&BRIDGE)?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}

// Re-export the log crate macros
pub use log::{debug, error, info, trace, warn};

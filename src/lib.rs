//! Severity-tagged console logging with positional placeholders.
//!
//! A log line is a prompt followed by a message template in which every
//! placeholder character (`@` by default) is replaced, left to right, by the
//! next argument.
//!
//! ```
//! use tiny_logger::{Options, tl_info, tl_value};
//!
//! tiny_logger::initialise(Options::with_prompt(" * tiny ({sev}) | "));
//! tl_info!("Hello, @!", "World");
//! tl_value!(123.456);
//! ```
//!
//! Logging itself never fails. Only loading [`Options`] from JSON and
//! installing the `log` bridge return [`Result`].
//!
//! The process-wide options sit behind a lock, but lines written from
//! several threads may interleave in any order.

use std::error::Error as StdError;
use std::fmt;

pub mod format;
pub mod loggable;
pub mod logger;
pub mod logging;
mod macros;
pub mod options;
pub mod schema;
pub mod severity;

// Re-export key types
pub use format::{format_message, render_prompt};
pub use loggable::{Arg, Loggable};
pub use logger::{initialise, log, log_value, Logger};
pub use options::Options;
pub use severity::Severity;

/// Custom error type for the library
#[derive(Debug)]
pub enum Error {
    /// Input/output error
    Io(std::io::Error),
    /// JSON serialization/deserialization error
    Json(serde_json::Error),
    /// Invalid parameter error
    InvalidParam(String),
    /// A `log` crate logger was already installed
    Logger(log::SetLoggerError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "I/O error: {}", err),
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::InvalidParam(msg) => write!(f, "Invalid parameter: {}", msg),
            Error::Logger(err) => write!(f, "Logger error: {}", err),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::InvalidParam(_) => None,
            Error::Logger(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<log::SetLoggerError> for Error {
    fn from(err: log::SetLoggerError) -> Self {
        Error::Logger(err)
    }
}

/// Type alias for library results
pub type Result<T> = std::result::Result<T, Error>;

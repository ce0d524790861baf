//! The logger and its process-wide instance.
//!
//! The free functions [`initialise`], [`log`] and [`log_value`] work on a
//! process-wide configuration. A [`Logger`] value can also be built with its
//! own [`Options`] and used independently of it.

use std::io::{self, Write};
use std::sync::{PoisonError, RwLock};

use crate::format::{render_prompt, value_template, write_substituted};
use crate::loggable::Arg;
use crate::options::Options;
use crate::severity::Severity;

static GLOBAL_OPTIONS: RwLock<Options> = RwLock::new(Options::DEFAULT);

/// Formats and writes log lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Logger {
    options: Options,
}

impl Logger {
    /// Create a logger with its own options.
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Snapshot of the process-wide logger.
    pub fn global() -> Self {
        let options = GLOBAL_OPTIONS
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        Self { options }
    }

    /// Options this logger formats with.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Prompt for `sev` under this logger's options.
    pub fn prompt(&self, sev: Severity) -> String {
        render_prompt(sev, &self.options.prompt)
    }

    /// Write one severity-tagged line to `out`.
    pub fn write_line<W: Write + ?Sized>(
        &self,
        out: &mut W,
        sev: Severity,
        fmt: &str,
        args: &[Arg<'_>],
    ) -> io::Result<()> {
        out.write_all(self.prompt(sev).as_bytes())?;
        write_substituted(out, fmt, self.options.format_char, args)?;
        out.write_all(b"\n")?;
        out.flush()
    }

    /// Write space-separated values to `out`, without a prompt.
    pub fn write_values<W: Write + ?Sized>(
        &self,
        out: &mut W,
        initial: Arg<'_>,
        rest: &[Arg<'_>],
    ) -> io::Result<()> {
        let format_char = self.options.format_char;
        let template = value_template(rest.len() + 1, format_char);

        let mut args = Vec::with_capacity(rest.len() + 1);
        args.push(initial);
        args.extend_from_slice(rest);

        write_substituted(out, &template, format_char, &args)?;
        out.write_all(b"\n")?;
        out.flush()
    }

    /// Write one severity-tagged line to standard output.
    ///
    /// Errors writing to standard output are ignored.
    pub fn log(&self, sev: Severity, fmt: &str, args: &[Arg<'_>]) {
        let stdout = io::stdout();
        let _ = self.write_line(&mut stdout.lock(), sev, fmt, args);
    }

    /// Write space-separated values to standard output.
    pub fn log_value(&self, initial: Arg<'_>, rest: &[Arg<'_>]) {
        let stdout = io::stdout();
        let _ = self.write_values(&mut stdout.lock(), initial, rest);
    }
}

/// Replace the process-wide options. The last call wins.
///
/// Lines already being written by other threads keep the options they
/// started with.
pub fn initialise(options: Options) {
    let mut current = GLOBAL_OPTIONS
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    *current = options;
}

/// Log a line through the process-wide logger.
pub fn log(sev: Severity, fmt: &str, args: &[Arg<'_>]) {
    Logger::global().log(sev, fmt, args);
}

/// Log bare values through the process-wide logger.
pub fn log_value(initial: Arg<'_>, rest: &[Arg<'_>]) {
    Logger::global().log_value(initial, rest);
}

//! Log severities and their display strings.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Urgency of a log line.
///
/// Variants are declared from most to least urgent, so `Severity::Fatal` is
/// the smallest value under `Ord`. Use [`Severity::is_more_urgent_than`] when
/// comparing by urgency reads better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Unrecoverable failure
    Fatal = 0,
    /// Recoverable failure
    Error = 1,
    /// Something unexpected that did not fail
    Warning = 2,
    /// Normal operation
    Info = 3,
    /// Fine-grained tracing
    Trace = 4,
}

impl Severity {
    /// Every severity, most urgent first.
    pub const ALL: [Severity; 5] = [
        Severity::Fatal,
        Severity::Error,
        Severity::Warning,
        Severity::Info,
        Severity::Trace,
    ];

    /// Plain upper-case name, without colour codes.
    pub const fn name(self) -> &'static str {
        match self {
            Severity::Fatal => "FATAL",
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
            Severity::Trace => "TRACE",
        }
    }

    /// String substituted for `{sev}` in a prompt. Carries ANSI colour escapes.
    pub const fn display_str(self) -> &'static str {
        match self {
            Severity::Fatal => "\x1b[1;31mFATAL\x1b[0m",
            Severity::Error => "\x1b[31mERROR\x1b[0m",
            Severity::Warning => "\x1b[33mWARNING\x1b[0m",
            Severity::Info => "\x1b[34mINFO\x1b[0m",
            Severity::Trace => "TRACE",
        }
    }

    /// Whether `self` should be acted on before `other`.
    pub fn is_more_urgent_than(self, other: Severity) -> bool {
        self < other
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|sev| sev.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidParam(format!("Unknown severity: {}", s)))
    }
}

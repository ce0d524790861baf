//! Logger configuration.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::Result;

/// Default placeholder character.
pub const DEFAULT_FORMAT_CHAR: char = '@';

/// Logger options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Options {
    /// Prompt printed before every severity-tagged line. The first `{sev}`
    /// is replaced with the severity's display string.
    pub prompt: String,

    /// Character marking a substitution slot in message templates
    pub format_char: char,
}

impl Options {
    /// Options used until the logger is initialised.
    pub const DEFAULT: Options = Options {
        prompt: String::new(),
        format_char: DEFAULT_FORMAT_CHAR,
    };

    /// Options with the given prompt and the default placeholder.
    pub fn with_prompt(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Self::DEFAULT
        }
    }

    /// Replace the placeholder character.
    pub fn format_char(mut self, format_char: char) -> Self {
        self.format_char = format_char;
        self
    }

    /// Parse options from a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read options from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading logger options from {}", path.display());

        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::DEFAULT
    }
}

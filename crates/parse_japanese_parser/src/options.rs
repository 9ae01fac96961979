//! Parser configuration.

use std::fs;
use std::path::Path;

use parse_japanese_text::DEFAULT_DICTIONARY;
use serde::{Deserialize, Serialize};

use crate::ParseError;

/// Options resolved once when a parser is built.
///
/// The JSON form uses camelCase keys and also accepts the short keys
/// `position`, `pos`, and `dicDir`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ParserOptions {
    /// Attach a position to every node.
    #[serde(default = "default_position_tracking", alias = "position")]
    pub position_tracking: bool,

    /// Attach the raw token record to every leaf.
    #[serde(default, alias = "pos")]
    pub attach_token_metadata: bool,

    /// Dictionary directory, or an `embedded://` URI.
    #[serde(default = "default_dictionary_path", alias = "dicDir")]
    pub dictionary_path: String,
}

fn default_position_tracking() -> bool {
    true
}

fn default_dictionary_path() -> String {
    DEFAULT_DICTIONARY.to_string()
}

impl ParserOptions {
    /// Creates options with every default applied.
    pub fn new() -> Self {
        Self {
            position_tracking: default_position_tracking(),
            attach_token_metadata: false,
            dictionary_path: default_dictionary_path(),
        }
    }

    /// Sets whether nodes carry positions.
    pub fn with_position_tracking(mut self, enabled: bool) -> Self {
        self.position_tracking = enabled;
        self
    }

    /// Sets whether leaves carry their token records.
    pub fn with_token_metadata(mut self, enabled: bool) -> Self {
        self.attach_token_metadata = enabled;
        self
    }

    /// Sets the dictionary location.
    pub fn with_dictionary_path(mut self, path: impl Into<String>) -> Self {
        self.dictionary_path = path.into();
        self
    }

    /// Loads options from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ParseError::config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::from_json(&content)
    }

    /// Parses and validates options from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ParseError> {
        let options: Self = serde_json::from_str(json)
            .map_err(|e| ParseError::config(format!("Invalid options: {}", e)))?;

        options.validate()?;
        Ok(options)
    }

    /// Checks option values that serde cannot.
    pub fn validate(&self) -> Result<(), ParseError> {
        if self.dictionary_path.trim().is_empty() {
            return Err(ParseError::config("dictionaryPath must not be empty"));
        }
        Ok(())
    }
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self::new()
    }
}

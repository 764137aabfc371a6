//! Per-call options passed to write, update and create_dir.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Option bag for a single operation.
///
/// Unknown keys are carried but ignored. Recognized keys:
///
/// * `mimetype` - string used instead of the guessed mimetype
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Config {
    settings: Map<String, Value>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object such as `{"mimetype": "text/markdown"}`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }

    pub fn with_mimetype(self, mimetype: impl Into<String>) -> Self {
        self.with("mimetype", mimetype.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.settings.get(key)
    }

    pub fn has(&self, key: &str) -> bool {
        self.settings.contains_key(key)
    }

    pub fn mimetype(&self) -> Option<&str> {
        self.get("mimetype").and_then(Value::as_str)
    }
}

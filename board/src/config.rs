//! Board configuration: persistence key, export name, draft defaults, keys.
//!
//! Every field has a default, so an empty JSON object (or no config at all)
//! reproduces the stock behavior. Hosts can override individual fields with
//! [`BoardConfig::from_json`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{CONFIRM_KEY, DEFAULT_FONT_SIZE, DEFAULT_FONT_WEIGHT, DELETE_KEY, EXPORT_FILE_NAME, STORAGE_KEY};

/// Runtime settings shared by the engine and the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Key under which the element snapshot is persisted.
    pub storage_key: String,
    /// File name used for exported snapshots.
    pub export_file_name: String,
    /// Font size of a new element draft.
    pub default_font_size: f64,
    /// Font weight of a new element draft.
    pub default_font_weight: String,
    /// Key that opens the editor for the focused element.
    pub confirm_key: String,
    /// Keys that delete the current selection.
    pub delete_keys: Vec<String>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_owned(),
            export_file_name: EXPORT_FILE_NAME.to_owned(),
            default_font_size: DEFAULT_FONT_SIZE,
            default_font_weight: DEFAULT_FONT_WEIGHT.to_owned(),
            confirm_key: CONFIRM_KEY.to_owned(),
            delete_keys: vec![DELETE_KEY.to_owned()],
        }
    }
}

impl BoardConfig {
    /// Parse a config from JSON. Absent fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns the decode error when `raw` is not a JSON object of the
    /// expected field types.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Return a copy using a different storage key.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Whether `key` is bound to deleting the selection.
    #[must_use]
    pub fn is_delete_key(&self, key: &str) -> bool {
        self.delete_keys.iter().any(|k| k == key)
    }

    /// Whether `key` is the confirm key.
    #[must_use]
    pub fn is_confirm_key(&self, key: &str) -> bool {
        self.confirm_key == key
    }
}

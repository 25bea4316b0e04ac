//! Picker Configuration

use serde::{Deserialize, Serialize};

use crate::dispatch::DEFAULT_PASTE_FAILURE_MESSAGE;
use crate::entity::{PickerError, PickerResult};
use crate::recency::DEFAULT_RECENT_CAP;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// How many selections the recents list remembers
    pub recent_cap: usize,
    /// How many recents the default view shows
    pub recent_display_limit: usize,
    /// Toast text when a paste is rejected
    pub paste_failure_message: String,
    /// Clear search, category and hover once a paste succeeds
    pub reset_after_paste: bool,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            recent_cap: DEFAULT_RECENT_CAP,
            recent_display_limit: DEFAULT_RECENT_CAP,
            paste_failure_message: DEFAULT_PASTE_FAILURE_MESSAGE.to_string(),
            reset_after_paste: true,
        }
    }
}

impl PickerConfig {
    /// Parse a JSON object; missing fields take their defaults.
    /// Anything other than an object is rejected.
    pub fn from_json(json: &str) -> PickerResult<Self> {
        let invalid = |e: serde_json::Error| PickerError::InvalidConfig(e.to_string());

        let value: serde_json::Value = serde_json::from_str(json).map_err(invalid)?;
        if !value.is_object() {
            return Err(PickerError::InvalidConfig("expected a JSON object".to_string()));
        }
        serde_json::from_value(value).map_err(invalid)
    }
}

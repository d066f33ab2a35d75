use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One remembered input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Feature the input belongs to (e.g., "json-to-code")
    pub module: String,
    /// The raw input text
    pub input: String,
    /// Milliseconds since the Unix epoch
    pub time: i64,
    /// Caller-supplied attributes stored alongside the entry
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HistoryEntry {
    /// Create an entry stamped with the current time.
    ///
    /// `extra` keys named like the built-in fields are dropped.
    pub fn new(
        module: impl Into<String>,
        input: impl Into<String>,
        mut extra: Map<String, Value>,
    ) -> Self {
        for reserved in ["module", "input", "time"] {
            extra.remove(reserved);
        }
        Self {
            module: module.into(),
            input: input.into(),
            time: chrono::Utc::now().timestamp_millis(),
            extra,
        }
    }

    /// Look up a caller-supplied attribute.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Whether this entry records `input` for `module`.
    pub fn matches(&self, module: &str, input: &str) -> bool {
        self.module == module && self.input == input
    }
}

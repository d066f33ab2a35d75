//! Input history for typesmith.
//!
//! Remembers the most recent inputs per module in a single JSON file,
//! newest first, so a tool can restore what the user last worked on.
//!
//! ```no_run
//! use serde_json::Map;
//! use typesmith_history::HistoryStore;
//!
//! # fn main() -> Result<(), typesmith_history::HistoryError> {
//! let store = HistoryStore::open(".typesmith/history.json");
//! store.save("json-to-code", r#"{"id": 1}"#, Map::new())?;
//! assert_eq!(store.last("json-to-code"), r#"{"id": 1}"#);
//! # Ok(())
//! # }
//! ```

mod entry;
mod error;
mod store;

pub use entry::HistoryEntry;
pub use error::{HistoryError, Result};
pub use store::{DEFAULT_MAX_ENTRIES, HistoryStore};

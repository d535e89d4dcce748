//! Record domain model.
//!
//! # Responsibility
//! - Define the single persisted entity of this system.
//!
//! # Invariants
//! - `id` is assigned by the store, is unique, and is never reused or
//!   mutated by the application layer.
//! - Values handed to callers are independent snapshots with no
//!   back-reference to storage.

use serde::{Deserialize, Serialize};

/// Stable store-assigned identifier for a record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type RecordId = i64;

/// Canonical persisted record: an id plus a user-supplied name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Store-assigned primary key, immutable once created.
    pub id: RecordId,
    /// User-supplied display name, mutable via the `edit` command.
    pub name: String,
}

impl Record {
    /// Creates a record snapshot from already-persisted row data.
    pub fn new(id: RecordId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Record;

    #[test]
    fn record_serializes_with_plain_field_names() {
        let record = Record::new(7, "Alice");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"id":7,"name":"Alice"}"#);
    }
}

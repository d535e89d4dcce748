//! Domain model for the record console.
//!
//! # Responsibility
//! - Define the canonical data structure persisted in `entities`.
//!
//! # Invariants
//! - Every record is identified by a stable, store-assigned `RecordId`.

pub mod record;

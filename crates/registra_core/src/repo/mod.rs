//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from service/shell orchestration.
//!
//! # Invariants
//! - Lookups report absence as `Ok(None)`, never as an error.
//! - Mutations report rows-affected so callers can distinguish "not found"
//!   from "no-op" without a second query.

pub mod record_repo;

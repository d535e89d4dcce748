//! Record use-case service.
//!
//! # Responsibility
//! - Provide one stable entry point per CRUD verb.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - No business validation happens here: empty names pass through as-is,
//!   and existence checks are expressed only via the repository's
//!   rows-affected / `Option` results.

use crate::model::record::{Record, RecordId};
use crate::repo::record_repo::{RecordRepository, RepoResult};

/// Use-case service wrapper for record CRUD operations.
pub struct RecordService<R: RecordRepository> {
    repo: R,
}

impl<R: RecordRepository> RecordService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists every persisted record. Never fails for an empty table.
    pub fn list_all(&self) -> RepoResult<Vec<Record>> {
        self.repo.find_all()
    }

    /// Gets one record by id; `None` means no such id exists.
    pub fn get_by_id(&self, id: RecordId) -> RepoResult<Option<Record>> {
        self.repo.find_by_id(id)
    }

    /// Creates a record with a store-assigned id.
    ///
    /// Returns rows-affected; a value greater than zero means the insert
    /// took effect.
    pub fn create(&self, name: &str) -> RepoResult<usize> {
        self.repo.insert(name)
    }

    /// Renames the record with the given id.
    ///
    /// Returns rows-affected; zero means the id did not exist.
    pub fn update(&self, id: RecordId, name: &str) -> RepoResult<usize> {
        self.repo.update(id, name)
    }

    /// Removes the record with the given id.
    ///
    /// Returns rows-affected; zero means the id did not exist.
    pub fn delete(&self, id: RecordId) -> RepoResult<usize> {
        self.repo.delete(id)
    }
}

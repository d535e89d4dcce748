//! Core domain logic for registra, a localized interactive console over a
//! single-table record store.
//! This crate is the single source of truth for command and persistence
//! semantics; the CLI member only wires the pieces together.

pub mod db;
pub mod i18n;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod shell;

pub use i18n::{system_language, translate, translate_with_args, Language, MessageKey};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::record::{Record, RecordId};
pub use repo::record_repo::{RecordRepository, RepoError, RepoResult, SqliteRecordRepository};
pub use service::record_service::RecordService;
pub use shell::{parse_command, Command, ParseError, Shell};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

//! Record repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the canonical `entities` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `find_by_id` absorbs the engine's "no rows" condition and returns
//!   `Ok(None)`; absence is never surfaced as an error.
//! - `find_all` makes no ordering guarantee; rows come back in whatever
//!   order the store naturally returns them.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::record::{Record, RecordId};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const RECORD_SELECT_SQL: &str = "SELECT id, name FROM entities";

const REQUIRED_COLUMNS: &[&str] = &["id", "name"];

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for record persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection has schema version {actual_version}, expected {expected_version}; run migrations first"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` does not exist")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` does not exist")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::UninitializedConnection { .. } => None,
            Self::MissingRequiredTable(_) => None,
            Self::MissingRequiredColumn { .. } => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for record CRUD operations.
///
/// Mutations return rows-affected; zero means the target id did not exist.
pub trait RecordRepository {
    fn find_all(&self) -> RepoResult<Vec<Record>>;
    fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Record>>;
    fn insert(&self, name: &str) -> RepoResult<usize>;
    fn update(&self, id: RecordId, name: &str) -> RepoResult<usize>;
    fn delete(&self, id: RecordId) -> RepoResult<usize>;
}

/// SQLite-backed record repository.
pub struct SqliteRecordRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteRecordRepository<'conn> {
    /// Creates a repository after verifying the connection carries the
    /// expected schema.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations have not been applied.
    /// - `MissingRequiredTable`/`MissingRequiredColumn` when the schema does
    ///   not match what this binary expects.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        verify_schema(conn)?;
        Ok(Self { conn })
    }
}

impl RecordRepository for SqliteRecordRepository<'_> {
    fn find_all(&self) -> RepoResult<Vec<Record>> {
        let mut stmt = self.conn.prepare(&format!("{RECORD_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut records = Vec::new();

        while let Some(row) = rows.next()? {
            records.push(parse_record_row(row)?);
        }

        Ok(records)
    }

    fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Record>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{RECORD_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_record_row(row)?));
        }

        Ok(None)
    }

    fn insert(&self, name: &str) -> RepoResult<usize> {
        let changed = self
            .conn
            .execute("INSERT INTO entities (name) VALUES (?1);", params![name])?;
        Ok(changed)
    }

    fn update(&self, id: RecordId, name: &str) -> RepoResult<usize> {
        let changed = self.conn.execute(
            "UPDATE entities SET name = ?1 WHERE id = ?2;",
            params![name, id],
        )?;
        Ok(changed)
    }

    fn delete(&self, id: RecordId) -> RepoResult<usize> {
        let changed = self
            .conn
            .execute("DELETE FROM entities WHERE id = ?1;", params![id])?;
        Ok(changed)
    }
}

fn parse_record_row(row: &Row<'_>) -> RepoResult<Record> {
    Ok(Record {
        id: row.get("id")?,
        name: row.get("name")?,
    })
}

fn verify_schema(conn: &Connection) -> RepoResult<()> {
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version == 0 {
        return Err(RepoError::UninitializedConnection {
            expected_version: latest_version(),
            actual_version,
        });
    }

    let table_exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'entities'
        );",
        [],
        |row| row.get(0),
    )?;
    if table_exists == 0 {
        return Err(RepoError::MissingRequiredTable("entities"));
    }

    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info('entities');")?;
    let mut rows = stmt.query([])?;
    let mut present = Vec::new();
    while let Some(row) = rows.next()? {
        present.push(row.get::<_, String>(0)?);
    }

    for column in REQUIRED_COLUMNS {
        if !present.iter().any(|name| name == column) {
            return Err(RepoError::MissingRequiredColumn {
                table: "entities",
                column,
            });
        }
    }

    Ok(())
}

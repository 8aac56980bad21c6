//! Durable slot repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Read and fully overwrite one named JSON document slot.
//!
//! # Invariants
//! - `save` replaces prior content in a single statement; no partial writes
//!   are modeled.
//! - A missing slot is `Ok(None)`, not an error.

use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Named key of the field-kit document slot.
pub const SLOT_KEY: &str = "lifefield";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for slot persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
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

/// Storage interface for the single JSON document slot.
pub trait SlotRepository {
    /// Returns the stored raw document, or `None` when never written.
    fn load(&self) -> RepoResult<Option<String>>;
    /// Overwrites the slot with `document` in full.
    fn save(&self, document: &str) -> RepoResult<()>;
}

/// SQLite-backed slot repository over the `slots` table.
pub struct SqliteSlotRepository<'conn> {
    conn: &'conn Connection,
    key: &'static str,
}

impl<'conn> SqliteSlotRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self {
            conn,
            key: SLOT_KEY,
        }
    }
}

impl SlotRepository for SqliteSlotRepository<'_> {
    fn load(&self) -> RepoResult<Option<String>> {
        let document = self
            .conn
            .query_row(
                "SELECT document FROM slots WHERE key = ?1;",
                params![self.key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(document)
    }

    fn save(&self, document: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO slots (key, document)
             VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                document = excluded.document,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![self.key, document],
        )?;
        Ok(())
    }
}

//! JSON document tables on SQLite.
//!
//! Every aggregate is stored as a single serialized body keyed by its
//! identifier. Saving rewrites the whole body; there is no partial update and
//! no version check, so the last writer wins.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Errors raised by the document stores.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        StoreError::Database(e.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Serialization(e.to_string())
    }
}

/// Generate a fresh store-assigned identifier.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Give `id` a store-assigned value if it is still empty.
pub(crate) fn assign_if_empty(id: &mut String) -> bool {
    if id.is_empty() {
        *id = new_id();
        true
    } else {
        false
    }
}

/// A single SQLite table of JSON documents.
pub(crate) struct DocumentTable {
    conn: Mutex<Connection>,
    table: &'static str,
}

impl DocumentTable {
    /// Open (or create) the table in the database file at `path`.
    pub(crate) fn open(path: &Path, table: &'static str) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        Self::initialize_schema(&conn, table)?;
        Ok(Self {
            conn: Mutex::new(conn),
            table,
        })
    }

    /// Open the table in a private in-memory database.
    pub(crate) fn in_memory(table: &'static str) -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        Self::initialize_schema(&conn, table)?;
        Ok(Self {
            conn: Mutex::new(conn),
            table,
        })
    }

    fn initialize_schema(conn: &Connection, table: &str) -> Result<(), StoreError> {
        conn.execute_batch(&format!(
            r#"
            CREATE TABLE IF NOT EXISTS {table} (
                id TEXT PRIMARY KEY,
                body TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_{table}_updated_at ON {table}(updated_at);
            "#
        ))?;
        Ok(())
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn
            .lock()
            .map_err(|_| StoreError::Database(format!("{} connection lock poisoned", self.table)))
    }

    /// Load and deserialize the document with the given id.
    pub(crate) fn load<D: DeserializeOwned>(&self, id: &str) -> Result<Option<D>, StoreError> {
        let conn = self.conn()?;
        let body: Option<String> = conn
            .query_row(
                &format!("SELECT body FROM {} WHERE id = ?", self.table),
                params![id],
                |row| row.get(0),
            )
            .optional()?;

        body.map(|body| serde_json::from_str(&body))
            .transpose()
            .map_err(StoreError::from)
    }

    /// Load every document, most recently updated first.
    pub(crate) fn load_all<D: DeserializeOwned>(&self) -> Result<Vec<D>, StoreError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT body FROM {} ORDER BY updated_at DESC, id",
            self.table
        ))?;

        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut documents = Vec::new();
        for row in rows {
            documents.push(serde_json::from_str(&row?)?);
        }
        Ok(documents)
    }

    /// Insert or overwrite the whole document body.
    pub(crate) fn upsert<D: Serialize>(
        &self,
        id: &str,
        document: &D,
        updated_at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        let body = serde_json::to_string(document)?;
        let conn = self.conn()?;
        conn.execute(
            &format!(
                "INSERT INTO {} (id, body, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(id) DO UPDATE SET body = excluded.body, updated_at = excluded.updated_at",
                self.table
            ),
            params![id, body, updated_at.to_rfc3339()],
        )?;
        Ok(())
    }
}

//! SQLite persistence for todo records.
//!
//! # Design
//! `TodoStore` owns a single `rusqlite::Connection` and exposes one method
//! per operation. Every method runs exactly one SQL statement, so each call
//! is atomic without explicit transactions. Timestamps are written by the
//! store as fixed-width RFC 3339 text (microsecond precision, `Z` suffix) so
//! that both creation columns receive the same instant and text ordering
//! matches chronological ordering.

use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::types::{Type, Value};
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub type TodoId = i64;

pub type StoreResult<T> = Result<T, StoreError>;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL CHECK (length(trim(title)) > 0),
    completed INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);";

const SELECT_COLUMNS: &str = "SELECT id, title, completed, created_at, updated_at FROM todos";

/// A persisted todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial field set for [`TodoStore::update`]. `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoChanges {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

impl TodoChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.completed.is_none()
    }
}

/// Result of [`TodoStore::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated,
    NotFound,
    /// The change set was empty; nothing was written.
    NoChanges,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("title must not be empty")]
    EmptyTitle,
}

pub struct TodoStore {
    conn: Connection,
}

impl TodoStore {
    /// Opens (or creates) the database file at `path` and ensures the
    /// `todos` table exists.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let conn = Connection::open(path)?;
        Self::bootstrap(conn)
    }

    /// Opens a private in-memory database. Each call yields an isolated store.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::bootstrap(conn)
    }

    fn bootstrap(conn: Connection) -> StoreResult<Self> {
        // journal_mode answers with a row, so it needs the checking variant.
        let mode: String =
            conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        conn.busy_timeout(Duration::from_secs(5))?;
        conn.execute_batch(SCHEMA)?;
        debug!(journal_mode = %mode, "todo store ready");
        Ok(Self { conn })
    }

    /// All todos, most recently created first.
    pub fn list_all(&self) -> StoreResult<Vec<Todo>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SELECT_COLUMNS} ORDER BY created_at DESC, id DESC"))?;
        let todos = stmt
            .query_map([], todo_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        debug!(count = todos.len(), "listed todos");
        Ok(todos)
    }

    pub fn get_by_id(&self, id: TodoId) -> StoreResult<Option<Todo>> {
        let todo = self
            .conn
            .query_row(
                &format!("{SELECT_COLUMNS} WHERE id = ?1"),
                params![id],
                todo_from_row,
            )
            .optional()?;
        Ok(todo)
    }

    /// Inserts a new, incomplete todo and returns its id.
    ///
    /// The caller is expected to trim `title`; a blank title is still
    /// rejected here.
    pub fn create(&self, title: &str) -> StoreResult<TodoId> {
        ensure_title(title)?;
        let now = format_timestamp(Utc::now());
        self.conn.execute(
            "INSERT INTO todos (title, completed, created_at, updated_at)
             VALUES (?1, 0, ?2, ?2)",
            params![title, now],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!(id, "created todo");
        Ok(id)
    }

    /// Applies `changes` to the todo with `id` and refreshes `updated_at`.
    pub fn update(&self, id: TodoId, changes: &TodoChanges) -> StoreResult<UpdateOutcome> {
        if changes.is_empty() {
            return Ok(UpdateOutcome::NoChanges);
        }

        let mut assignments = Vec::with_capacity(3);
        let mut values: Vec<Value> = Vec::with_capacity(4);

        if let Some(title) = changes.title.as_deref() {
            ensure_title(title)?;
            assignments.push("title = ?");
            values.push(Value::Text(title.to_string()));
        }
        if let Some(completed) = changes.completed {
            assignments.push("completed = ?");
            values.push(Value::Integer(i64::from(completed)));
        }
        // MAX keeps updated_at >= created_at even if the wall clock steps back.
        assignments.push("updated_at = MAX(?, created_at)");
        values.push(Value::Text(format_timestamp(Utc::now())));
        values.push(Value::Integer(id));

        let sql = format!("UPDATE todos SET {} WHERE id = ?", assignments.join(", "));
        let changed = self.conn.execute(&sql, params_from_iter(values))?;
        debug!(id, changed, "updated todo");

        if changed == 0 {
            return Ok(UpdateOutcome::NotFound);
        }
        Ok(UpdateOutcome::Updated)
    }

    /// Removes the todo with `id`. Returns whether a row was deleted.
    pub fn delete(&self, id: TodoId) -> StoreResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM todos WHERE id = ?1", params![id])?;
        debug!(id, changed, "deleted todo");
        Ok(changed > 0)
    }
}

fn ensure_title(title: &str) -> StoreResult<()> {
    if title.trim().is_empty() {
        return Err(StoreError::EmptyTitle);
    }
    Ok(())
}

fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn timestamp_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let raw: String = row.get(idx)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn todo_from_row(row: &Row<'_>) -> rusqlite::Result<Todo> {
    Ok(Todo {
        id: row.get(0)?,
        title: row.get(1)?,
        completed: row.get(2)?,
        created_at: timestamp_column(row, 3)?,
        updated_at: timestamp_column(row, 4)?,
    })
}

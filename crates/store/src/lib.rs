//! SQLite storage for to-do items.
//!
//! Items are soft deleted: moving an item to the trash stamps
//! `deleted_at`, and only a permanent delete removes the row.

use chrono::{DateTime, Utc};
use core_types::{Move, SCHEMA_VERSION, Todo};
use rusqlite::{Connection, OptionalExtension, Result as SqlResult, params};
use std::path::Path;
use thiserror::Error;

pub use rusqlite;

/// Errors from the store crate.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Todo {0} not found")]
    NotFound(i64),

    #[error("Todo {0} is not in the trash")]
    NotTrashed(i64),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// What a reorder request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderOutcome {
    Unchanged,
    Moved,
}

const TODO_COLUMNS: &str =
    "id, title, completed, display_order, created_at, updated_at, deleted_at";

/// SQLite-backed storage for to-do items.
pub struct TodoStore {
    conn: Connection,
}

impl TodoStore {
    /// Open or create a database at the given path.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Initialize the database schema.
    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS schema_info (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS todos (
                id INTEGER PRIMARY KEY,
                title TEXT NOT NULL,
                completed INTEGER NOT NULL DEFAULT 0,
                display_order INTEGER NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                deleted_at TEXT
            );

            CREATE INDEX IF NOT EXISTS idx_todos_order ON todos(display_order);
            CREATE INDEX IF NOT EXISTS idx_todos_deleted ON todos(deleted_at);
            "#,
        )?;

        self.conn.execute(
            "INSERT OR REPLACE INTO schema_info (key, value) VALUES ('version', ?1)",
            params![SCHEMA_VERSION.to_string()],
        )?;

        tracing::debug!(version = SCHEMA_VERSION, "todo schema ready");
        Ok(())
    }

    /// Get the current schema version.
    pub fn schema_version(&self) -> Result<u32> {
        let version: String = self.conn.query_row(
            "SELECT value FROM schema_info WHERE key = 'version'",
            [],
            |row| row.get(0),
        )?;
        Ok(version.parse().unwrap_or(0))
    }

    /// Active items, ordered by display order.
    pub fn list(&self) -> Result<Vec<Todo>> {
        self.query_todos("deleted_at IS NULL")
    }

    /// Trashed items, ordered by display order.
    pub fn list_trashed(&self) -> Result<Vec<Todo>> {
        self.query_todos("deleted_at IS NOT NULL")
    }

    /// Get an active item by ID.
    pub fn get(&self, id: i64) -> Result<Option<Todo>> {
        Ok(self.get_any(id)?.filter(|t| !t.is_trashed()))
    }

    /// Get an item by ID, trashed or not.
    pub fn get_any(&self, id: i64) -> Result<Option<Todo>> {
        let sql = format!("SELECT {TODO_COLUMNS} FROM todos WHERE id = ?1");
        let todo = self
            .conn
            .query_row(&sql, params![id], row_to_todo)
            .optional()?;
        Ok(todo)
    }

    /// Insert a new item. Without an explicit display order the item goes
    /// after every existing row, trashed ones included.
    pub fn create(&self, title: &str, completed: bool, display_order: Option<i64>) -> Result<Todo> {
        let display_order = match display_order {
            Some(order) => order,
            None => self.conn.query_row(
                "SELECT COALESCE(MAX(display_order), 0) + 1 FROM todos",
                [],
                |row| row.get(0),
            )?,
        };
        let now = Utc::now().to_rfc3339();

        self.conn.execute(
            r#"
            INSERT INTO todos (title, completed, display_order, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?4)
            "#,
            params![title, completed as i32, display_order, now],
        )?;

        let id = self.conn.last_insert_rowid();
        self.get_any(id)?.ok_or(StoreError::NotFound(id))
    }

    /// Overwrite the title and completion flag of an active item.
    pub fn update(&self, id: i64, title: &str, completed: bool) -> Result<Todo> {
        let changed = self.conn.execute(
            r#"
            UPDATE todos SET title = ?1, completed = ?2, updated_at = ?3
            WHERE id = ?4 AND deleted_at IS NULL
            "#,
            params![title, completed as i32, Utc::now().to_rfc3339(), id],
        )?;

        if changed == 0 {
            return Err(StoreError::NotFound(id));
        }
        self.get(id)?.ok_or(StoreError::NotFound(id))
    }

    /// Move an active item from display order `old` to `new`, shifting the
    /// active items in between. Runs in a single transaction.
    pub fn reorder(&mut self, item_id: i64, old: i64, new: i64) -> Result<ReorderOutcome> {
        let direction = Move::between(old, new);
        if direction == Move::Unchanged {
            return Ok(ReorderOutcome::Unchanged);
        }

        let tx = self.conn.transaction()?;
        let now = Utc::now().to_rfc3339();

        let updated = tx.execute(
            r#"
            UPDATE todos SET display_order = ?1, updated_at = ?2
            WHERE id = ?3 AND deleted_at IS NULL
            "#,
            params![new, now, item_id],
        )?;
        if updated == 0 {
            // dropping the transaction rolls it back
            return Err(StoreError::NotFound(item_id));
        }

        let shifted = match direction {
            Move::Up => tx.execute(
                r#"
                UPDATE todos SET display_order = display_order + 1
                WHERE display_order >= ?1 AND display_order < ?2
                  AND id != ?3 AND deleted_at IS NULL
                "#,
                params![new, old, item_id],
            )?,
            Move::Down => tx.execute(
                r#"
                UPDATE todos SET display_order = display_order - 1
                WHERE display_order > ?1 AND display_order <= ?2
                  AND id != ?3 AND deleted_at IS NULL
                "#,
                params![old, new, item_id],
            )?,
            Move::Unchanged => 0,
        };

        tx.commit()?;
        tracing::debug!(item_id, old, new, shifted, "reordered todo");
        Ok(ReorderOutcome::Moved)
    }

    /// Move an active item to the trash.
    pub fn trash(&self, id: i64) -> Result<()> {
        let changed = self.conn.execute(
            "UPDATE todos SET deleted_at = ?1 WHERE id = ?2 AND deleted_at IS NULL",
            params![Utc::now().to_rfc3339(), id],
        )?;

        if changed == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    /// Bring a trashed item back to the active list.
    pub fn restore(&self, id: i64) -> Result<Todo> {
        let todo = self.get_any(id)?.ok_or(StoreError::NotFound(id))?;
        if !todo.is_trashed() {
            return Err(StoreError::NotTrashed(id));
        }

        self.conn.execute(
            "UPDATE todos SET deleted_at = NULL, updated_at = ?1 WHERE id = ?2",
            params![Utc::now().to_rfc3339(), id],
        )?;

        self.get(id)?.ok_or(StoreError::NotFound(id))
    }

    /// Delete an item for good and close the gap it leaves in the display
    /// order of every remaining row, trashed rows included.
    pub fn purge(&mut self, id: i64) -> Result<()> {
        let todo = self.get_any(id)?.ok_or(StoreError::NotFound(id))?;

        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM todos WHERE id = ?1", params![id])?;
        let shifted = tx.execute(
            "UPDATE todos SET display_order = display_order - 1 WHERE display_order > ?1",
            params![todo.display_order],
        )?;
        tx.commit()?;

        tracing::debug!(id, shifted, "purged todo");
        Ok(())
    }

    fn query_todos(&self, condition: &str) -> Result<Vec<Todo>> {
        let sql = format!(
            "SELECT {TODO_COLUMNS} FROM todos WHERE {condition} ORDER BY display_order ASC, id ASC"
        );
        let mut stmt = self.conn.prepare(&sql)?;

        let todos = stmt
            .query_map([], row_to_todo)?
            .collect::<SqlResult<Vec<_>>>()?;

        Ok(todos)
    }
}

/// Convert a database row to a Todo.
fn row_to_todo(row: &rusqlite::Row) -> SqlResult<Todo> {
    let deleted_at: Option<String> = row.get(6)?;

    Ok(Todo {
        id: row.get(0)?,
        title: row.get(1)?,
        completed: row.get::<_, i32>(2)? != 0,
        display_order: row.get(3)?,
        created_at: parse_timestamp(4, &row.get::<_, String>(4)?)?,
        updated_at: parse_timestamp(5, &row.get::<_, String>(5)?)?,
        deleted_at: deleted_at
            .as_deref()
            .map(|raw| parse_timestamp(6, raw))
            .transpose()?,
    })
}

/// Parse an RFC 3339 column; a malformed value fails the row.
fn parse_timestamp(column: usize, raw: &str) -> SqlResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, Box::new(e))
        })
}

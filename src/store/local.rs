use std::path::{Path, PathBuf};

use log::{debug, warn};
use rusqlite::{params, Connection};

use super::TaskStore;
use crate::error::{Error, Result};
use crate::models::{Status, Task, LIST_LIMIT};

/// SQLite file store. Every operation opens its own connection and closes it
/// before returning.
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn with_connection<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T>,
    {
        let conn = Connection::open(&self.path)?;
        debug!("Local DB {}", self.path.display());

        let result = op(&conn);

        match conn.close() {
            Ok(()) => debug!("Local DB closed"),
            Err((_, e)) => warn!("{e}"),
        }

        Ok(result?)
    }
}

fn check_description(description: &str) -> Result<()> {
    if description.trim().is_empty() {
        return Err(Error::EmptyDescription);
    }
    Ok(())
}

impl TaskStore for SqliteStore {
    fn initialize(&self) -> Result<()> {
        self.with_connection(|conn| {
            conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS tasks (id INTEGER PRIMARY KEY, task TEXT NOT NULL, status INTEGER DEFAULT 0);",
            )
        })
    }

    fn create(&self, description: &str) -> Result<Task> {
        check_description(description)?;

        let id = self.with_connection(|conn| {
            conn.execute("INSERT INTO tasks (task) VALUES (?1)", [description])?;
            Ok(conn.last_insert_rowid())
        })?;

        Ok(Task {
            id,
            description: description.to_string(),
            status: Status::Open,
        })
    }

    fn list(&self) -> Result<Vec<Task>> {
        self.with_connection(|conn| {
            let mut stmt =
                conn.prepare("SELECT id, task, status FROM tasks ORDER BY id DESC LIMIT ?1")?;

            let tasks = stmt
                .query_map([LIST_LIMIT as i64], |row| {
                    Ok(Task {
                        id: row.get(0)?,
                        description: row.get(1)?,
                        status: Status::from_code(row.get::<_, Option<i64>>(2)?.unwrap_or(0)),
                    })
                })?
                .collect::<rusqlite::Result<Vec<_>>>()?;

            Ok(tasks)
        })
    }

    fn update(&self, id: i64, description: &str) -> Result<usize> {
        check_description(description)?;

        self.with_connection(|conn| {
            conn.execute(
                "UPDATE tasks SET task = ?1 WHERE id = ?2",
                params![description, id],
            )
        })
    }

    fn close(&self, id: i64) -> Result<usize> {
        self.with_connection(|conn| {
            conn.execute(
                "UPDATE tasks SET status = ?1 WHERE id = ?2",
                params![Status::Done.code(), id],
            )
        })
    }

    fn delete(&self, id: i64) -> Result<usize> {
        self.with_connection(|conn| conn.execute("DELETE FROM tasks WHERE id = ?1", [id]))
    }
}

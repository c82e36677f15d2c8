use std::path::Path;

use rusqlite::{Connection, OptionalExtension, params};

use crate::Result;

// NOTE: Why SQLite for two text fields?
//
// The notes widget needs one plain-text value per note id, no expiry,
// no schema versioning. A single-table SQLite file keeps that contract
// while surviving concurrent CLI invocations, and the schema is created
// on open so there is no migration step.

/// Key/value store for user note fields. One row per note id.
pub struct NotesStore {
    conn: Connection,
}

impl NotesStore {
    pub fn open(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(db_path)?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS notes (
                id TEXT PRIMARY KEY,
                body TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );
            "#,
        )?;

        Ok(())
    }

    /// Fetch a note body by id. Absent notes are None, not an error.
    pub fn get(&self, note_id: &str) -> Result<Option<String>> {
        let body = self
            .conn
            .query_row(
                "SELECT body FROM notes WHERE id = ?1",
                params![note_id],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        Ok(body)
    }

    /// Save a note body, replacing any prior value for the id.
    pub fn put(&self, note_id: &str, body: &str) -> Result<()> {
        let updated_at = chrono::Utc::now().to_rfc3339();
        self.conn.execute(
            r#"
            INSERT INTO notes (id, body, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(id) DO UPDATE SET
                body = ?2,
                updated_at = ?3
            "#,
            params![note_id, body, updated_at],
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn absent_note_is_none() {
        let store = NotesStore::open_in_memory().unwrap();
        assert_eq!(store.get("global").unwrap(), None);
    }

    #[test]
    fn put_then_get_round_trips() {
        let store = NotesStore::open_in_memory().unwrap();
        store.put("global", "remember the timeline").unwrap();
        assert_eq!(
            store.get("global").unwrap().as_deref(),
            Some("remember the timeline")
        );
    }

    #[test]
    fn put_replaces_prior_value() {
        let store = NotesStore::open_in_memory().unwrap();
        store.put("global", "first").unwrap();
        store.put("global", "second").unwrap();
        assert_eq!(store.get("global").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn note_ids_are_independent() {
        let store = NotesStore::open_in_memory().unwrap();
        store.put("global", "a").unwrap();
        store.put("daily", "b").unwrap();
        assert_eq!(store.get("global").unwrap().as_deref(), Some("a"));
        assert_eq!(store.get("daily").unwrap().as_deref(), Some("b"));
    }

    #[test]
    fn persists_across_reopen() {
        let dir = TempDir::new().unwrap();
        let db_path = dir.path().join("notes.db");

        {
            let store = NotesStore::open(&db_path).unwrap();
            store.put("global", "survives reopen").unwrap();
        }

        let store = NotesStore::open(&db_path).unwrap();
        assert_eq!(
            store.get("global").unwrap().as_deref(),
            Some("survives reopen")
        );
    }
}

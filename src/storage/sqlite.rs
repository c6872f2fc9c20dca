use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

use super::{schema, KeyValueStore, PersistenceError};

/// Key-value store kept in a single SQLite file.
pub(crate) struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub(crate) fn open(path: &Path) -> Result<Self, PersistenceError> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        let mut store = Self { conn };
        store.migrate()?;
        tracing::debug!(path = %path.display(), "opened budget database");
        Ok(store)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self, PersistenceError> {
        let conn = Connection::open_in_memory()?;
        let mut store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    fn migrate(&mut self) -> Result<(), PersistenceError> {
        self.migrate_to(schema::CURRENT_VERSION, schema::MIGRATIONS)
    }

    /// Brings the schema up to `target`. A database without a recorded
    /// version gets the v1 tables first. Each step runs in its own
    /// transaction together with its version bump.
    pub(super) fn migrate_to(
        &mut self,
        target: i32,
        migrations: &[(i32, &str)],
    ) -> Result<(), PersistenceError> {
        let mut version = match self.stored_version()? {
            Some(version) => version,
            None => {
                self.conn.execute_batch(schema::SCHEMA_V1)?;
                self.conn
                    .execute("INSERT INTO schema_version (version) VALUES (1)", [])?;
                1
            }
        };

        for &(from, sql) in migrations {
            if from != version || from >= target {
                continue;
            }
            let tx = self.conn.transaction()?;
            tx.execute_batch(sql)?;
            tx.execute(
                "UPDATE schema_version SET version = ?1",
                params![from + 1],
            )?;
            tx.commit()?;
            version = from + 1;
            tracing::debug!(version, "migrated budget database");
        }
        Ok(())
    }

    fn stored_version(&self) -> Result<Option<i32>, PersistenceError> {
        let has_table: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
            [],
            |row| row.get(0),
        )?;
        if !has_table {
            return Ok(None);
        }
        Ok(self
            .conn
            .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
                row.get(0)
            })
            .optional()?)
    }

    #[cfg(test)]
    pub(crate) fn columns(&self, table: &str) -> Result<Vec<String>, PersistenceError> {
        let mut stmt = self.conn.prepare(&format!("PRAGMA table_info({table})"))?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(1))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(names)
    }

    #[cfg(test)]
    pub(crate) fn schema_version(&self) -> Result<i32, PersistenceError> {
        Ok(self
            .conn
            .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
                row.get(0)
            })?)
    }
}

impl KeyValueStore for SqliteStore {
    fn read(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = ?3",
            params![key, value, chrono::Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }
}

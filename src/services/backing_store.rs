//! Flat string-keyed storage backends for the key-value store.
//!
//! A backing store knows nothing about prefixes, envelopes or expiry; it maps
//! physical keys to opaque strings.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::{params, OptionalExtension};

use crate::database::connection::Database;
use crate::types::errors::StoreError;

/// Trait defining the physical storage operations.
pub trait BackingStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    /// Deleting an absent key succeeds.
    fn delete(&mut self, key: &str) -> Result<(), StoreError>;
    /// Every physical key currently stored, in no particular order.
    fn keys(&self) -> Result<Vec<String>, StoreError>;
}

/// Process-local backend. Contents are lost when dropped.
#[derive(Debug, Default, Clone)]
pub struct MemoryBackingStore {
    entries: BTreeMap<String, String>,
}

impl MemoryBackingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw view of a physical entry, bypassing any envelope handling.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl BackingStore for MemoryBackingStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.entries.keys().cloned().collect())
    }
}

/// Durable backend over the `kv_entries` table.
///
/// Several processes may open the same database file; SQLite serializes
/// their writes.
pub struct SqliteBackingStore {
    db: Arc<Database>,
}

impl SqliteBackingStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }
}

impl BackingStore for SqliteBackingStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.db
            .connection()
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| StoreError::Read(e.to_string()))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.db
            .connection()
            .execute(
                "INSERT INTO kv_entries (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                params![key, value, Self::now()],
            )
            .map_err(|e| StoreError::Write(e.to_string()))?;
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        self.db
            .connection()
            .execute("DELETE FROM kv_entries WHERE key = ?1", params![key])
            .map_err(|e| StoreError::Delete(e.to_string()))?;
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        let conn = self.db.connection();
        let mut stmt = conn
            .prepare("SELECT key FROM kv_entries")
            .map_err(|e| StoreError::List(e.to_string()))?;

        let rows = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(|e| StoreError::List(e.to_string()))?;

        let mut keys = Vec::new();
        for key in rows {
            keys.push(key.map_err(|e| StoreError::List(e.to_string()))?);
        }
        Ok(keys)
    }
}

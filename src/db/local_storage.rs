// src/db/local_storage.rs
use parking_lot::Mutex;
use rusqlite::{params, OptionalExtension};
use std::collections::HashMap;

use crate::db::connection::Database;
use crate::errors::ServerError;

/// Device-local string storage, the server-side stand-in for the browser's
/// `localStorage`.
pub trait KeyValueStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, ServerError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), ServerError>;
    fn remove_item(&self, key: &str) -> Result<(), ServerError>;
}

impl KeyValueStorage for Database {
    fn get_item(&self, key: &str) -> Result<Option<String>, ServerError> {
        self.with_conn(|conn| {
            conn.query_row(
                "select value from local_storage where key = ?",
                params![key],
                |r| r.get(0),
            )
            .optional()
            .map_err(|e| ServerError::DbError(format!("local storage read failed: {e}")))
        })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), ServerError> {
        let now = chrono::Utc::now().timestamp();
        self.with_conn(|conn| {
            conn.execute(
                r#"
                insert into local_storage (key, value, updated_at)
                values (?, ?, ?)
                on conflict(key) do update set value = excluded.value, updated_at = excluded.updated_at
                "#,
                params![key, value, now],
            )
            .map_err(|e| ServerError::DbError(format!("local storage write failed: {e}")))?;
            Ok(())
        })
    }

    fn remove_item(&self, key: &str) -> Result<(), ServerError> {
        self.with_conn(|conn| {
            conn.execute("delete from local_storage where key = ?", params![key])
                .map_err(|e| ServerError::DbError(format!("local storage delete failed: {e}")))?;
            Ok(())
        })
    }
}

/// Process-memory storage; nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, ServerError> {
        Ok(self.items.lock().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), ServerError> {
        self.items.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), ServerError> {
        self.items.lock().remove(key);
        Ok(())
    }
}

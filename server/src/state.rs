//! Shared application state handed to every handler.
//!
//! `rusqlite::Connection` is `!Sync`, so the store sits behind an async
//! `tokio::sync::Mutex`. Handlers hold the lock for the duration of one
//! store call (plus the read-back after a write).

use std::path::Path;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::store::{StoreResult, TodoStore};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<TodoStore>>,
}

impl AppState {
    pub fn new(store: TodoStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// State backed by the database file at `path`.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        TodoStore::open(path).map(Self::new)
    }

    /// State backed by a fresh in-memory database, isolated per call.
    pub fn in_memory() -> StoreResult<Self> {
        TodoStore::open_in_memory().map(Self::new)
    }
}

//! Application state for the web server.

use std::sync::Arc;
use store::TodoStore;
use tokio::sync::{Mutex, MutexGuard};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// To-do storage; SQLite connections are not shareable, so access is serialized.
    store: Arc<Mutex<TodoStore>>,
}

impl AppState {
    /// Create a new app state around an opened store.
    pub fn new(store: TodoStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Lock the store for one operation.
    pub async fn store(&self) -> MutexGuard<'_, TodoStore> {
        self.store.lock().await
    }
}

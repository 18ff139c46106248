use std::sync::Arc;

use storage::repository::{ProgressStore, Storage};

use crate::Clock;
use crate::error::AppServicesError;
use crate::session::ProgressSession;

/// Assembles the storage backend and hands out progress sessions.
#[derive(Clone)]
pub struct AppServices {
    clock: Clock,
    storage: Storage,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str, clock: Clock) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self { clock, storage })
    }

    /// Build services over a fresh in-memory store.
    #[must_use]
    pub fn in_memory(clock: Clock) -> Self {
        Self {
            clock,
            storage: Storage::in_memory(),
        }
    }

    #[must_use]
    pub fn progress_store(&self) -> Arc<dyn ProgressStore> {
        Arc::clone(&self.storage.progress)
    }

    /// Opens a session with saved progress loaded.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub async fn open_session(&self) -> ProgressSession {
        ProgressSession::open(self.progress_store(), self.clock).await
    }
}

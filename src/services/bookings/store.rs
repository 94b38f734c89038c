//! The in-memory booking record store and its cancellable loader.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::models::Booking;

pub const LOAD_FAILED_MESSAGE: &str = "Failed to fetch bookings data";

#[async_trait]
pub trait BookingSource: Send + Sync {
    async fn fetch(&self) -> anyhow::Result<Vec<Booking>>;
}

#[derive(Debug, Clone)]
pub enum LoadState {
    Loading,
    Ready(Arc<Vec<Booking>>),
    Failed(String),
}

pub struct BookingStore {
    state: Mutex<LoadState>,
}

impl Default for BookingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingStore {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(LoadState::Loading),
        }
    }

    pub fn with_bookings(bookings: Vec<Booking>) -> Self {
        Self {
            state: Mutex::new(LoadState::Ready(Arc::new(bookings))),
        }
    }

    pub fn snapshot(&self) -> LoadState {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, LoadState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Installs `next` unless `cancel` has fired. The check happens under the
    /// store lock so a cancelled load can never overwrite newer state.
    fn install(&self, cancel: &CancellationToken, next: LoadState) -> bool {
        let mut guard = self.lock();
        if cancel.is_cancelled() {
            return false;
        }
        *guard = next;
        true
    }

    /// Marks the store as loading and fetches from `source` after `latency`.
    /// Cancelling or dropping the returned handle stops the load; a stopped
    /// load never writes to the store.
    pub fn spawn_load(
        self: &Arc<Self>,
        source: Arc<dyn BookingSource>,
        latency: Duration,
    ) -> LoadHandle {
        *self.lock() = LoadState::Loading;

        let cancel = CancellationToken::new();
        let store = Arc::clone(self);
        let token = cancel.clone();

        let task = tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    tracing::debug!("booking load cancelled before fetch");
                    return;
                }
                _ = tokio::time::sleep(latency) => {}
            }

            let result = tokio::select! {
                _ = token.cancelled() => {
                    tracing::debug!("booking load cancelled during fetch");
                    return;
                }
                result = source.fetch() => result,
            };

            let next = match result {
                Ok(bookings) => {
                    tracing::info!(count = bookings.len(), "bookings loaded");
                    LoadState::Ready(Arc::new(bookings))
                }
                Err(e) => {
                    tracing::error!(error = %e, "failed to fetch bookings");
                    LoadState::Failed(LOAD_FAILED_MESSAGE.to_string())
                }
            };

            if !store.install(&token, next) {
                tracing::debug!("discarded bookings from a cancelled load");
            }
        });

        LoadHandle {
            cancel,
            task: Some(task),
        }
    }
}

/// Owns an in-flight load. Dropping it cancels the load.
pub struct LoadHandle {
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl LoadHandle {
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Waits for the load task to finish without cancelling it.
    pub async fn join(mut self) {
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                tracing::error!(error = %e, "booking load task panicked");
            }
        }
    }
}

impl Drop for LoadHandle {
    fn drop(&mut self) {
        if self.task.is_some() {
            self.cancel.cancel();
        }
    }
}

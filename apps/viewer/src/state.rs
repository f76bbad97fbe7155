//! Application state.

use crate::config::ViewerConfig;
use crate::debounce::SearchDebouncer;
use crate::events::EventSink;
use crate::session::Session;
use crate::watcher::IntersectionWatcher;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::Mutex as AsyncMutex;

/// Global view state shared by every command.
pub struct AppState {
    pub session: Arc<Mutex<Session>>,
    pub debouncer: Mutex<SearchDebouncer>,
    pub watcher: AsyncMutex<IntersectionWatcher>,
    pub sink: Arc<dyn EventSink>,
}

impl AppState {
    pub fn new(config: &ViewerConfig, sink: Arc<dyn EventSink>) -> Self {
        let session = Arc::new(Mutex::new(Session::new(
            &config.settings,
            config.viewport_width,
            config.viewport_height,
        )));

        Self {
            debouncer: Mutex::new(SearchDebouncer::new(config.settings.debounce_delay())),
            watcher: AsyncMutex::new(IntersectionWatcher::new(Arc::clone(&session))),
            session,
            sink,
        }
    }

    /// Cancel the pending search update and disconnect the intersection
    /// watcher. Nothing fires after this returns.
    pub async fn shutdown(&self) {
        lock(&self.debouncer).cancel();
        self.watcher.lock().await.stop();
        tracing::info!("view session shut down");
    }
}

/// Lock a std mutex, recovering the data if a previous holder panicked.
pub fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

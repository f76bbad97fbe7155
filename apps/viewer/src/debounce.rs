//! Timer side of the debounced search box.

use crate::events::EventSink;
use crate::session::Session;
use crate::state::lock;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use vocab_core::Ticket;

/// Owns at most one sleeping task. Scheduling a new ticket aborts the
/// previous task, so a burst of keystrokes ends in a single recompute.
pub struct SearchDebouncer {
    delay: Duration,
    task: Option<JoinHandle<()>>,
}

impl SearchDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, task: None }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Commit `ticket` after the delay, recompute, and emit the results.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(
        &mut self,
        ticket: Ticket,
        session: Arc<Mutex<Session>>,
        sink: Arc<dyn EventSink>,
    ) {
        self.cancel();

        let delay = self.delay;
        self.task = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let event = {
                let mut session = lock(&session);
                if !session.commit_search(ticket) {
                    return;
                }
                session.recompute();
                session.results_event()
            };

            tracing::debug!(?event, "debounced search applied");
            sink.emit(event);
        }));
    }

    /// Abort the pending task, if any.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.task
            .as_ref()
            .map(|task| !task.is_finished())
            .unwrap_or(false)
    }
}

impl Drop for SearchDebouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

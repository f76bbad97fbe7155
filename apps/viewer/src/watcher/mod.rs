//! Intersection watcher that turns viewport signals into reveal events.
//!
//! The environment pushes [`IntersectionSignal`]s into the sender handed out
//! by [`IntersectionWatcher::start`]. Which regions count is decided by the
//! session's visibility tracker, which is reattached on every recompute.

use crate::events::{EventSink, ViewEvent};
use crate::session::Session;
use crate::state::lock;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use vocab_core::RegionBounds;

/// A section's position as reported by the environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntersectionSignal {
    pub region: String,
    pub bounds: RegionBounds,
}

#[derive(Debug, Error)]
pub enum WatcherError {
    #[error("intersection watcher needs a running tokio runtime")]
    NoRuntime,
}

/// Watcher that feeds intersection signals into the session.
pub struct IntersectionWatcher {
    session: Arc<Mutex<Session>>,
    signal_tx: Option<UnboundedSender<IntersectionSignal>>,
    stop_tx: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl IntersectionWatcher {
    pub fn new(session: Arc<Mutex<Session>>) -> Self {
        Self {
            session,
            signal_tx: None,
            stop_tx: None,
            task: None,
        }
    }

    /// Check if the watcher has been started.
    pub fn is_started(&self) -> bool {
        self.signal_tx.is_some()
    }

    /// Start the event loop and return the sender signals should be pushed
    /// into. Starting twice hands out the existing sender.
    pub fn start(
        &mut self,
        sink: Arc<dyn EventSink>,
    ) -> Result<UnboundedSender<IntersectionSignal>, WatcherError> {
        if let Some(tx) = &self.signal_tx {
            return Ok(tx.clone());
        }

        let runtime = tokio::runtime::Handle::try_current().map_err(|_| WatcherError::NoRuntime)?;

        let (tx, rx) = unbounded_channel();
        let (stop_tx, stop_rx) = oneshot::channel();

        lock(&self.session).reattach();

        let session = Arc::clone(&self.session);
        self.task = Some(runtime.spawn(Self::event_loop(rx, stop_rx, session, sink)));
        self.signal_tx = Some(tx.clone());
        self.stop_tx = Some(stop_tx);

        tracing::info!("intersection watcher started");
        Ok(tx)
    }

    /// Another handle to push signals into, if started.
    pub fn subscribe(&self) -> Option<UnboundedSender<IntersectionSignal>> {
        self.signal_tx.clone()
    }

    /// Unsubscribe from every region and end the event loop.
    pub fn stop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        self.signal_tx = None;
        if let Some(task) = self.task.take() {
            task.abort();
        }
        lock(&self.session).detach();
        tracing::info!("intersection watcher stopped");
    }

    /// Regions currently observed.
    pub fn observed_regions(&self) -> Vec<String> {
        lock(&self.session).observed_regions()
    }

    async fn event_loop(
        mut rx: UnboundedReceiver<IntersectionSignal>,
        mut stop_rx: oneshot::Receiver<()>,
        session: Arc<Mutex<Session>>,
        sink: Arc<dyn EventSink>,
    ) {
        loop {
            tokio::select! {
                _ = &mut stop_rx => break,
                signal = rx.recv() => match signal {
                    Some(signal) => Self::handle_signal(&signal, &session, sink.as_ref()),
                    None => break,
                },
            }
        }
    }

    fn handle_signal(signal: &IntersectionSignal, session: &Mutex<Session>, sink: &dyn EventSink) {
        let revealed = lock(session).record_signal(&signal.region, signal.bounds);
        if revealed {
            tracing::debug!(region = %signal.region, "section revealed");
            sink.emit(ViewEvent::SectionRevealed {
                category: signal.region.clone(),
            });
        }
    }
}

impl Drop for IntersectionWatcher {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

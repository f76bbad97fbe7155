//! Snapshot, viewport and visibility commands.

use super::CommandError;
use crate::events::ViewEvent;
use crate::session::ViewSnapshot;
use crate::state::{lock, AppState};
use crate::watcher::IntersectionSignal;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use vocab_core::RegionBounds;

/// Current frame.
pub async fn get_snapshot(state: &AppState) -> Result<ViewSnapshot, CommandError> {
    Ok(lock(&state.session).snapshot())
}

/// Feed one intersection signal synchronously. Returns true if the section
/// was revealed by it.
pub async fn record_signal(
    region: String,
    bounds: RegionBounds,
    state: &AppState,
) -> Result<bool, CommandError> {
    let revealed = lock(&state.session).record_signal(&region, bounds);
    if revealed {
        state.sink.emit(ViewEvent::SectionRevealed { category: region });
    }
    Ok(revealed)
}

pub async fn resize_viewport(
    width: f64,
    height: f64,
    state: &AppState,
) -> Result<ViewSnapshot, CommandError> {
    let mut session = lock(&state.session);
    session.resize(width, height);
    Ok(session.snapshot())
}

/// Start the intersection watcher and hand out the signal sender.
pub async fn start_observing(
    state: &AppState,
) -> Result<UnboundedSender<IntersectionSignal>, CommandError> {
    let mut watcher = state.watcher.lock().await;
    watcher.start(Arc::clone(&state.sink)).map_err(Into::into)
}

/// Disconnect the intersection watcher.
pub async fn stop_observing(state: &AppState) -> Result<(), CommandError> {
    state.watcher.lock().await.stop();
    Ok(())
}

/// Regions the watcher currently cares about.
pub async fn get_observed_regions(state: &AppState) -> Result<Vec<String>, CommandError> {
    let watcher = state.watcher.lock().await;
    Ok(watcher.observed_regions())
}

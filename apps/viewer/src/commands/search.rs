//! Search and difficulty filter commands.

use super::CommandError;
use crate::session::ViewSnapshot;
use crate::state::{lock, AppState};
use std::sync::Arc;
use vocab_core::Difficulty;

/// Echo a keystroke immediately and schedule the debounced filter update.
/// Returns the raw text for the search box.
pub async fn type_search(raw: String, state: &AppState) -> Result<String, CommandError> {
    let now = tokio::time::Instant::now().into_std();
    let ticket = lock(&state.session).type_search(raw.clone(), now);

    lock(&state.debouncer).schedule(ticket, Arc::clone(&state.session), Arc::clone(&state.sink));
    Ok(raw)
}

/// Apply the typed term right away, as on Enter.
pub async fn submit_search(state: &AppState) -> Result<ViewSnapshot, CommandError> {
    lock(&state.debouncer).cancel();

    let (event, snapshot) = {
        let mut session = lock(&state.session);
        if !session.flush_search() {
            return Ok(session.snapshot());
        }
        session.recompute();
        (session.results_event(), session.snapshot())
    };

    state.sink.emit(event);
    Ok(snapshot)
}

/// Set or clear the difficulty selector. Takes effect immediately.
pub async fn select_difficulty(
    difficulty: Option<Difficulty>,
    state: &AppState,
) -> Result<ViewSnapshot, CommandError> {
    let (event, snapshot) = {
        let mut session = lock(&state.session);
        session.select_difficulty(difficulty);
        (session.results_event(), session.snapshot())
    };

    state.sink.emit(event);
    Ok(snapshot)
}

/// Clear search and difficulty, cancelling any pending search update.
pub async fn reset_filters(state: &AppState) -> Result<ViewSnapshot, CommandError> {
    lock(&state.debouncer).cancel();

    let (event, snapshot) = {
        let mut session = lock(&state.session);
        session.reset_filters();
        (session.results_event(), session.snapshot())
    };

    state.sink.emit(event);
    Ok(snapshot)
}

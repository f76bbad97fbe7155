//! Vocabulary loading commands.

use super::CommandError;
use crate::session::ViewSnapshot;
use crate::state::{lock, AppState};
use vocab_core::{parser, VocabularyEntry};

/// Replace the vocabulary and return the first frame.
pub async fn load_vocabulary(
    entries: Vec<VocabularyEntry>,
    state: &AppState,
) -> Result<ViewSnapshot, CommandError> {
    let count = entries.len();
    let (event, snapshot) = {
        let mut session = lock(&state.session);
        session.load(entries);
        (session.results_event(), session.snapshot())
    };

    tracing::info!(entries = count, "vocabulary loaded");
    state.sink.emit(event);
    Ok(snapshot)
}

/// Load a vocabulary sheet.
pub async fn load_sheet(content: String, state: &AppState) -> Result<ViewSnapshot, CommandError> {
    let entries = parser::parse(&content)?;
    load_vocabulary(entries, state).await
}

/// Load a JSON array of entries.
pub async fn load_json(content: String, state: &AppState) -> Result<ViewSnapshot, CommandError> {
    let entries = parser::parse_json(&content)?;
    load_vocabulary(entries, state).await
}

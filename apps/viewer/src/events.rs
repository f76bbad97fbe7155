//! Events pushed from the session to whatever is drawing it.

use serde::Serialize;
use tokio::sync::mpsc::UnboundedSender;
use vocab_core::{Difficulty, FilterState, FilteredView};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewEvent {
    /// The filtered view was recomputed.
    ResultsUpdated {
        search_term: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        selected_difficulty: Option<Difficulty>,
        shown: usize,
        total: usize,
        categories: Vec<String>,
    },
    /// A section was seen for the first time.
    SectionRevealed { category: String },
}

impl ViewEvent {
    pub fn results(filter: &FilterState, view: &FilteredView) -> Self {
        Self::ResultsUpdated {
            search_term: filter.search_term.clone(),
            selected_difficulty: filter.selected_difficulty,
            shown: view.shown,
            total: view.total,
            categories: view.categories().map(str::to_string).collect(),
        }
    }
}

/// Receiver side of the session's notifications.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: ViewEvent);
}

impl EventSink for UnboundedSender<ViewEvent> {
    fn emit(&self, event: ViewEvent) {
        if self.send(event).is_err() {
            tracing::trace!("view event dropped, receiver closed");
        }
    }
}

/// Sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&self, _event: ViewEvent) {}
}

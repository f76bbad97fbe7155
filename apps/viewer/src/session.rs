//! View session: the pipeline plus the user's filter inputs and what has
//! scrolled into view.

use crate::events::ViewEvent;
use crate::layout::Breakpoint;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use vocab_core::{
    AggregatorSettings, BuildStats, Debounced, Difficulty, FilterState, FilteredView,
    RegionBounds, Ticket, Viewport, VisibilityTracker, VocabularyAggregator, VocabularyEntry,
};

/// One word pair as the presentation layer draws it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryView {
    pub arabic: String,
    pub bengali: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    pub difficulty: Difficulty,
    pub label: &'static str,
    pub tag: &'static str,
}

impl From<&VocabularyEntry> for EntryView {
    fn from(entry: &VocabularyEntry) -> Self {
        let info = entry.difficulty.info();
        Self {
            arabic: entry.arabic.clone(),
            bengali: entry.bengali.clone(),
            pronunciation: entry.pronunciation.clone(),
            difficulty: entry.difficulty,
            label: info.label,
            tag: info.tag,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionView {
    pub category: String,
    pub revealed: bool,
    pub entries: Vec<EntryView>,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewSnapshot {
    pub raw_search: String,
    pub search_term: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_difficulty: Option<Difficulty>,
    pub sections: Vec<SectionView>,
    pub shown: usize,
    pub total: usize,
    pub summary: String,
    pub no_results: bool,
    pub breakpoint: Breakpoint,
    pub columns: u8,
}

pub struct Session {
    aggregator: VocabularyAggregator,
    search: Debounced<String>,
    difficulty: Option<Difficulty>,
    tracker: VisibilityTracker,
    viewport: Viewport,
    breakpoint: Breakpoint,
    current: Arc<FilteredView>,
    /// Cleared on teardown so recomputes stop re-observing sections.
    observing: bool,
}

impl Session {
    pub fn new(settings: &AggregatorSettings, viewport_width: f64, viewport_height: f64) -> Self {
        Self {
            aggregator: VocabularyAggregator::default(),
            search: Debounced::new(String::new(), settings.debounce_delay()),
            difficulty: None,
            tracker: VisibilityTracker::new(),
            viewport: Viewport::new(viewport_height, settings.lookahead_margin_px),
            breakpoint: Breakpoint::from_width(viewport_width),
            current: Arc::new(FilteredView::default()),
            observing: true,
        }
    }

    /// Current filter inputs, using the settled search term.
    pub fn filter_state(&self) -> FilterState {
        FilterState::new(self.difficulty, self.search.settled().clone())
    }

    /// Replace the vocabulary and recompute.
    pub fn load(&mut self, entries: impl Into<Arc<[VocabularyEntry]>>) -> Arc<FilteredView> {
        self.aggregator.set_vocabulary(entries);
        self.recompute()
    }

    /// Echo a keystroke. The filter does not change until the ticket commits.
    pub fn type_search(&mut self, raw: impl Into<String>, now: Instant) -> Ticket {
        self.search.input(raw.into(), now)
    }

    /// Apply a debounced search term. False if the ticket went stale.
    pub fn commit_search(&mut self, ticket: Ticket) -> bool {
        self.search.commit(ticket).is_some()
    }

    /// Apply whatever was typed without waiting for the quiet period.
    pub fn flush_search(&mut self) -> bool {
        self.search.flush().is_some()
    }

    pub fn select_difficulty(&mut self, difficulty: Option<Difficulty>) -> Arc<FilteredView> {
        self.difficulty = difficulty;
        self.recompute()
    }

    /// Clear both filters, dropping any pending search update.
    pub fn reset_filters(&mut self) -> Arc<FilteredView> {
        self.search.reset(String::new());
        self.difficulty = None;
        self.recompute()
    }

    /// Run the pipeline for the current inputs and reattach visibility
    /// observation when the set of rendered sections changed, unless
    /// observation has been detached.
    pub fn recompute(&mut self) -> Arc<FilteredView> {
        let filter = self.filter_state();
        let view = self.aggregator.view(&filter);
        if !Arc::ptr_eq(&view, &self.current) {
            if self.observing {
                self.tracker.attach(view.categories());
            }
            self.current = Arc::clone(&view);
        }
        view
    }

    pub fn current(&self) -> Arc<FilteredView> {
        Arc::clone(&self.current)
    }

    pub fn results_event(&self) -> ViewEvent {
        ViewEvent::results(&self.filter_state(), &self.current)
    }

    /// Feed one intersection signal. True if the section was newly revealed.
    pub fn record_signal(&mut self, region: &str, bounds: RegionBounds) -> bool {
        self.tracker.record_bounds(region, bounds, &self.viewport)
    }

    /// Stop observing every section.
    pub fn detach(&mut self) {
        self.observing = false;
        self.tracker.detach();
    }

    /// Re-observe the sections currently rendered.
    pub fn reattach(&mut self) {
        self.observing = true;
        let current = Arc::clone(&self.current);
        self.tracker.attach(current.categories());
    }

    pub fn observed_regions(&self) -> Vec<String> {
        let mut regions: Vec<String> = self.tracker.observed().map(str::to_string).collect();
        regions.sort();
        regions
    }

    pub fn is_observing(&self) -> bool {
        self.observing
    }

    pub fn is_revealed(&self, category: &str) -> bool {
        self.tracker.is_revealed(category)
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.breakpoint = Breakpoint::from_width(width);
        self.viewport.height = height;
    }

    pub fn raw_search(&self) -> &str {
        self.search.raw()
    }

    pub fn is_search_pending(&self) -> bool {
        self.search.is_pending()
    }

    pub fn stats(&self) -> BuildStats {
        self.aggregator.stats()
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        let view = &self.current;
        let sections = view
            .groups
            .iter()
            .map(|group| SectionView {
                category: group.category.clone(),
                revealed: self.tracker.is_revealed(&group.category),
                entries: group.entries.iter().map(EntryView::from).collect(),
            })
            .collect();

        ViewSnapshot {
            raw_search: self.search.raw().clone(),
            search_term: self.search.settled().clone(),
            selected_difficulty: self.difficulty,
            sections,
            shown: view.shown,
            total: view.total,
            summary: view.count().to_string(),
            no_results: view.no_results(),
            breakpoint: self.breakpoint,
            columns: self.breakpoint.columns(),
        }
    }
}

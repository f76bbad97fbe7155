//! Memoized aggregation pipeline.
//!
//! The index is rebuilt only when the vocabulary changes and the filtered view
//! only when the vocabulary or the filter state changes. Results are shared as
//! `Arc`s and replaced whole.

use crate::filter::{self, FilteredView};
use crate::index::CategoryIndex;
use crate::types::{FilterState, VocabularyEntry};
use std::sync::Arc;

/// How many times each stage actually ran.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub index_builds: u64,
    pub view_builds: u64,
}

#[derive(Debug, Clone)]
struct CachedView {
    version: u64,
    filter: FilterState,
    view: Arc<FilteredView>,
}

#[derive(Debug, Clone)]
pub struct VocabularyAggregator {
    vocabulary: Arc<[VocabularyEntry]>,
    version: u64,
    index: Option<(u64, Arc<CategoryIndex>)>,
    view: Option<CachedView>,
    stats: BuildStats,
}

impl Default for VocabularyAggregator {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl VocabularyAggregator {
    pub fn new(vocabulary: impl Into<Arc<[VocabularyEntry]>>) -> Self {
        Self {
            vocabulary: vocabulary.into(),
            version: 0,
            index: None,
            view: None,
            stats: BuildStats::default(),
        }
    }

    /// Replace the vocabulary. Handing back the same `Arc` is a no-op.
    pub fn set_vocabulary(&mut self, vocabulary: impl Into<Arc<[VocabularyEntry]>>) {
        let vocabulary = vocabulary.into();
        if Arc::ptr_eq(&vocabulary, &self.vocabulary) {
            return;
        }
        self.vocabulary = vocabulary;
        self.version += 1;
    }

    pub fn vocabulary(&self) -> &Arc<[VocabularyEntry]> {
        &self.vocabulary
    }

    /// Bumped on every vocabulary replacement.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn stats(&self) -> BuildStats {
        self.stats
    }

    /// Grouped and ranked categories for the current vocabulary.
    pub fn index(&mut self) -> Arc<CategoryIndex> {
        if let Some((version, index)) = &self.index {
            if *version == self.version {
                return Arc::clone(index);
            }
        }

        let index = Arc::new(CategoryIndex::build(&self.vocabulary));
        self.stats.index_builds += 1;
        self.index = Some((self.version, Arc::clone(&index)));
        index
    }

    /// Filtered view for the given filter state. Search terms differing
    /// only in surrounding whitespace share one cached view.
    pub fn view(&mut self, filter: &FilterState) -> Arc<FilteredView> {
        let key = FilterState::new(filter.selected_difficulty, filter.search_term.trim());
        if let Some(cached) = &self.view {
            if cached.version == self.version && cached.filter == key {
                tracing::trace!("filtered view cache hit");
                return Arc::clone(&cached.view);
            }
        }

        let index = self.index();
        let view = Arc::new(filter::apply(&index, &key));
        self.stats.view_builds += 1;
        self.view = Some(CachedView {
            version: self.version,
            filter: key,
            view: Arc::clone(&view),
        });
        view
    }
}

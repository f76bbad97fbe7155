//! Difficulty and text filtering over a ranked category index.

use crate::index::{CategoryGroup, CategoryIndex};
use crate::matching::SearchQuery;
use crate::types::{Difficulty, FilterState, VocabularyEntry};
use serde::Serialize;
use std::fmt;

/// One surviving category and the entries left in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilteredGroup {
    pub category: String,
    pub entries: Vec<VocabularyEntry>,
}

/// Output of the filtering pipeline, in category rank order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilteredView {
    pub groups: Vec<FilteredGroup>,
    /// Entries that survived filtering.
    pub shown: usize,
    /// Entries in the unfiltered vocabulary.
    pub total: usize,
}

impl FilteredView {
    /// True when nothing matched. Only meaningful as "no results" when the
    /// vocabulary itself is non-empty, see [`FilteredView::no_results`].
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The vocabulary has entries but the filters removed all of them.
    pub fn no_results(&self) -> bool {
        self.groups.is_empty() && self.total > 0
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.category.as_str())
    }

    pub fn count(&self) -> ResultCount {
        ResultCount {
            shown: self.shown,
            total: self.total,
        }
    }
}

/// "Showing N of M" counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResultCount {
    pub shown: usize,
    pub total: usize,
}

impl fmt::Display for ResultCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing {} of {} words", self.shown, self.total)
    }
}

/// Whether an entry passes the difficulty selector. Unknown difficulty only
/// passes when no selector is active.
pub fn matches_difficulty(entry: &VocabularyEntry, selected: Option<Difficulty>) -> bool {
    match selected {
        Some(level) => entry.difficulty == level && level != Difficulty::Unknown,
        None => true,
    }
}

/// Run both filter steps over the index.
pub fn apply(index: &CategoryIndex, filter: &FilterState) -> FilteredView {
    let query = SearchQuery::new(&filter.search_term);

    let groups: Vec<FilteredGroup> = index
        .groups()
        .iter()
        .filter_map(|group| filter_group(group, filter.selected_difficulty, query.as_ref()))
        .collect();

    let shown = groups.iter().map(|g| g.entries.len()).sum();

    tracing::debug!(
        difficulty = ?filter.selected_difficulty,
        search = %filter.search_term.trim(),
        shown,
        total = index.entry_count(),
        "filtered vocabulary"
    );

    FilteredView {
        groups,
        shown,
        total: index.entry_count(),
    }
}

fn filter_group(
    group: &CategoryGroup,
    selected: Option<Difficulty>,
    query: Option<&SearchQuery>,
) -> Option<FilteredGroup> {
    let by_difficulty = group
        .entries
        .iter()
        .filter(|e| matches_difficulty(e, selected));

    let entries: Vec<VocabularyEntry> = match query {
        // A category-name hit keeps every difficulty-filtered entry.
        Some(q) if !q.matches(&group.category) => {
            by_difficulty.filter(|e| q.matches_entry(e)).cloned().collect()
        }
        _ => by_difficulty.cloned().collect(),
    };

    if entries.is_empty() {
        return None;
    }

    Some(FilteredGroup {
        category: group.category.clone(),
        entries,
    })
}

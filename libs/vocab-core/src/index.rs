//! Grouping entries by category and ranking categories by difficulty.

use crate::types::VocabularyEntry;
use std::cmp::Reverse;
use std::collections::HashMap;

/// All entries of one category, hardest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    pub category: String,
    /// Sum of member difficulty weights.
    pub score: u32,
    pub entries: Vec<VocabularyEntry>,
}

/// Categories keyed by name, plus their rank order.
///
/// Ranking is by descending score. Both sorts are stable, so equal scores keep
/// first-seen order and equal weights keep input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryIndex {
    groups: Vec<CategoryGroup>,
    positions: HashMap<String, usize>,
    entry_count: usize,
}

impl CategoryIndex {
    /// Group and rank entries in a single pass plus two stable sorts.
    pub fn build(entries: &[VocabularyEntry]) -> Self {
        let mut groups: Vec<CategoryGroup> = Vec::new();
        let mut first_seen: HashMap<&str, usize> = HashMap::new();

        for entry in entries {
            let slot = *first_seen.entry(entry.category.as_str()).or_insert_with(|| {
                groups.push(CategoryGroup {
                    category: entry.category.clone(),
                    score: 0,
                    entries: Vec::new(),
                });
                groups.len() - 1
            });

            let group = &mut groups[slot];
            group.score += entry.difficulty.weight();
            group.entries.push(entry.clone());
        }

        for group in &mut groups {
            group.entries.sort_by_key(|e| Reverse(e.difficulty.weight()));
        }
        groups.sort_by_key(|g| Reverse(g.score));

        let positions = groups
            .iter()
            .enumerate()
            .map(|(pos, g)| (g.category.clone(), pos))
            .collect();

        tracing::debug!(
            categories = groups.len(),
            entries = entries.len(),
            "built category index"
        );

        Self {
            groups,
            positions,
            entry_count: entries.len(),
        }
    }

    /// Category names, highest score first.
    pub fn ranked(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.category.as_str()).collect()
    }

    /// Groups in rank order.
    pub fn groups(&self) -> &[CategoryGroup] {
        &self.groups
    }

    /// Look up a category by name.
    pub fn group(&self, category: &str) -> Option<&CategoryGroup> {
        self.positions.get(category).map(|&pos| &self.groups[pos])
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of entries across all groups.
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }
}

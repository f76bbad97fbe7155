//! Search term matching.

use crate::types::VocabularyEntry;

/// A prepared search needle. Lowercased once so each candidate only pays for
/// lowercasing the haystack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    /// Build a query from a raw term. Returns `None` when the trimmed term is
    /// empty, which callers treat as "no search".
    pub fn new(term: &str) -> Option<Self> {
        let trimmed = term.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            needle: trimmed.to_lowercase(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.needle
    }

    /// Case-insensitive substring test.
    pub fn matches(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.needle)
    }

    /// Whether the Arabic, Bengali or pronunciation text contains the needle.
    /// A missing pronunciation never matches.
    pub fn matches_entry(&self, entry: &VocabularyEntry) -> bool {
        self.matches(&entry.arabic)
            || self.matches(&entry.bengali)
            || entry
                .pronunciation
                .as_deref()
                .map(|p| self.matches(p))
                .unwrap_or(false)
    }
}

/// Case-insensitive substring test for one-off checks.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    SearchQuery::new(needle)
        .map(|query| query.matches(haystack))
        .unwrap_or(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Difficulty;

    #[test]
    fn blank_terms_are_no_query() {
        assert!(SearchQuery::new("").is_none());
        assert!(SearchQuery::new(" \t\n").is_none());
    }

    #[test]
    fn match_ignores_case_and_outer_whitespace() {
        let query = SearchQuery::new("  KiTa ").unwrap();
        assert!(query.matches("kitab"));
        assert!(!query.matches("qalam"));
        assert!(contains_ignore_case("Family Members", "family"));
        assert!(contains_ignore_case("anything", "   "));
    }

    #[test]
    fn match_script_text_exactly() {
        let entry = VocabularyEntry::new("كتاب", "বই", "Nouns", Difficulty::Easy);
        assert!(SearchQuery::new("كت").unwrap().matches_entry(&entry));
        assert!(SearchQuery::new("বই").unwrap().matches_entry(&entry));
        assert!(!SearchQuery::new("kitab").unwrap().matches_entry(&entry));
    }

    #[test]
    fn match_pronunciation_when_present() {
        let entry = VocabularyEntry::new("كتاب", "বই", "Nouns", Difficulty::Easy)
            .with_pronunciation("Kitab");
        assert!(SearchQuery::new("kitab").unwrap().matches_entry(&entry));
    }
}

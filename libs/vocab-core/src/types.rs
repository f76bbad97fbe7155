//! Core types for the vocabulary aggregator.

use serde::{Deserialize, Deserializer, Serialize};
use std::time::Duration;

/// Difficulty rating of a vocabulary entry.
///
/// `Unknown` absorbs anything outside the known levels so malformed input
/// degrades to the lowest weight instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    #[serde(other)]
    Unknown,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Unknown
    }
}

/// Static presentation and ordering data for one difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyInfo {
    pub difficulty: Difficulty,
    /// Sort weight, also summed into a category's score.
    pub weight: u32,
    pub label: &'static str,
    /// Visual treatment token for the presentation layer.
    pub tag: &'static str,
}

/// Read-only lookup table, one row per difficulty.
pub const DIFFICULTY_TABLE: [DifficultyInfo; 4] = [
    DifficultyInfo {
        difficulty: Difficulty::Easy,
        weight: 1,
        label: "Easy",
        tag: "green",
    },
    DifficultyInfo {
        difficulty: Difficulty::Medium,
        weight: 2,
        label: "Medium",
        tag: "amber",
    },
    DifficultyInfo {
        difficulty: Difficulty::Hard,
        weight: 3,
        label: "Hard",
        tag: "red",
    },
    DifficultyInfo {
        difficulty: Difficulty::Unknown,
        weight: 0,
        label: "Unrated",
        tag: "neutral",
    },
];

impl Difficulty {
    /// Levels a user can select as a filter.
    pub const SELECTABLE: [Difficulty; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Table row for this difficulty.
    pub fn info(self) -> &'static DifficultyInfo {
        match self {
            Self::Easy => &DIFFICULTY_TABLE[0],
            Self::Medium => &DIFFICULTY_TABLE[1],
            Self::Hard => &DIFFICULTY_TABLE[2],
            Self::Unknown => &DIFFICULTY_TABLE[3],
        }
    }

    /// Sort weight (easy=1, medium=2, hard=3, unknown=0).
    pub fn weight(self) -> u32 {
        self.info().weight
    }

    pub fn label(self) -> &'static str {
        self.info().label
    }

    pub fn tag(self) -> &'static str {
        self.info().tag
    }

    /// Get the difficulty name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Unknown => "unknown",
        }
    }

    /// Parse leniently: case and surrounding whitespace are ignored, anything
    /// unrecognised becomes `Unknown`.
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "easy" => Self::Easy,
            "medium" => Self::Medium,
            "hard" => Self::Hard,
            _ => Self::Unknown,
        }
    }
}

fn lenient_difficulty<'de, D>(deserializer: D) -> Result<Difficulty, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .as_deref()
        .map(Difficulty::parse_lenient)
        .unwrap_or_default())
}

/// A single Arabic/Bengali word pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub arabic: String,
    pub bengali: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_difficulty")]
    pub difficulty: Difficulty,
}

impl VocabularyEntry {
    /// Create an entry without a pronunciation.
    pub fn new(
        arabic: impl Into<String>,
        bengali: impl Into<String>,
        category: impl Into<String>,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            arabic: arabic.into(),
            bengali: bengali.into(),
            pronunciation: None,
            category: category.into(),
            difficulty,
        }
    }

    pub fn with_pronunciation(mut self, pronunciation: impl Into<String>) -> Self {
        self.pronunciation = Some(pronunciation.into());
        self
    }
}

/// User-controlled filter inputs. The search term is the settled
/// (debounced) value, never the raw keystroke buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_difficulty: Option<Difficulty>,
    pub search_term: String,
}

impl FilterState {
    pub fn new(selected_difficulty: Option<Difficulty>, search_term: impl Into<String>) -> Self {
        Self {
            selected_difficulty,
            search_term: search_term.into(),
        }
    }

    /// Whether either filter narrows the result.
    pub fn is_active(&self) -> bool {
        self.selected_difficulty.is_some() || !self.search_term.trim().is_empty()
    }
}

/// Tunables for the aggregator and its view session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregatorSettings {
    /// Quiet period before a typed search term is applied.
    pub debounce_ms: u64,
    /// How far outside the viewport a section starts counting as visible.
    pub lookahead_margin_px: f64,
}

impl Default for AggregatorSettings {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            lookahead_margin_px: 100.0,
        }
    }
}

impl AggregatorSettings {
    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_weights() {
        assert_eq!(Difficulty::Easy.weight(), 1);
        assert_eq!(Difficulty::Medium.weight(), 2);
        assert_eq!(Difficulty::Hard.weight(), 3);
        assert_eq!(Difficulty::Unknown.weight(), 0);
        assert_eq!(Difficulty::Unknown.tag(), "neutral");
    }

    #[test]
    fn table_rows_match_variants() {
        for row in DIFFICULTY_TABLE.iter() {
            assert_eq!(row.difficulty.info(), row);
        }
    }

    #[test]
    fn parse_lenient_ignores_case() {
        assert_eq!(Difficulty::parse_lenient(" HARD "), Difficulty::Hard);
        assert_eq!(Difficulty::parse_lenient("expert"), Difficulty::Unknown);
    }

    #[test]
    fn deserialize_malformed_entry() {
        let json = r#"{"arabic":"قلم","bengali":"কলম","difficulty":"extreme"}"#;
        let entry: VocabularyEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.difficulty, Difficulty::Unknown);
        assert_eq!(entry.category, "");
        assert_eq!(entry.pronunciation, None);

        let json = r#"{"arabic":"قلم","bengali":"কলম","category":"Objects","difficulty":null}"#;
        let entry: VocabularyEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.difficulty, Difficulty::Unknown);
    }

    #[test]
    fn whitespace_search_is_inactive() {
        assert!(!FilterState::new(None, "   ").is_active());
        assert!(FilterState::new(Some(Difficulty::Easy), "").is_active());
    }

    #[test]
    fn settings_defaults() {
        let settings: AggregatorSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, AggregatorSettings::default());
        assert_eq!(settings.debounce_delay(), Duration::from_millis(300));
    }
}

//! Core vocabulary library shared by the viewer and any other front end.
//!
//! Provides:
//! - Parsers for vocabulary sheets and JSON word lists
//! - Category grouping and difficulty ranking
//! - Difficulty and free-text filtering
//! - Debounced input state and lazy-reveal visibility tracking
//! - A memoizing aggregator tying the pipeline together

pub mod aggregator;
pub mod debounce;
pub mod error;
pub mod filter;
pub mod index;
pub mod matching;
pub mod parser;
pub mod types;
pub mod visibility;

pub use aggregator::{BuildStats, VocabularyAggregator};
pub use debounce::{Debounced, Ticket};
pub use error::{ParseError, Result};
pub use filter::{FilteredGroup, FilteredView, ResultCount};
pub use index::{CategoryGroup, CategoryIndex};
pub use matching::{contains_ignore_case, SearchQuery};
pub use parser::{parse, parse_json};
pub use types::{
    AggregatorSettings, Difficulty, DifficultyInfo, FilterState, VocabularyEntry,
    DIFFICULTY_TABLE,
};
pub use visibility::{RegionBounds, Viewport, VisibilityTracker};

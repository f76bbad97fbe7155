//! Test fixtures and factory functions for creating vocabulary data.

use vocab_core::{Difficulty, RegionBounds, VocabularyEntry};

/// Eight entries over four categories.
///
/// Scores: Family 5, Objects 5, Verbs 3, Colors 0.
pub fn vocabulary() -> Vec<VocabularyEntry> {
    vec![
        VocabularyEntry::new("أب", "বাবা", "Family", Difficulty::Easy).with_pronunciation("ab"),
        VocabularyEntry::new("كتاب", "বই", "Objects", Difficulty::Medium).with_pronunciation("kitab"),
        VocabularyEntry::new("أم", "মা", "Family", Difficulty::Easy).with_pronunciation("umm"),
        VocabularyEntry::new("ذهب", "যাওয়া", "Verbs", Difficulty::Medium).with_pronunciation("dhahaba"),
        VocabularyEntry::new("جد", "দাদা", "Family", Difficulty::Hard).with_pronunciation("jadd"),
        VocabularyEntry::new("أحمر", "লাল", "Colors", Difficulty::Unknown),
        VocabularyEntry::new("قلم", "কলম", "Objects", Difficulty::Hard).with_pronunciation("qalam"),
        VocabularyEntry::new("أكل", "খাওয়া", "Verbs", Difficulty::Easy).with_pronunciation("akala"),
    ]
}

/// The same words in sheet form, minus Colors.
pub fn sample_sheet() -> String {
    [
        "# Family",
        "AR: أب",
        "BN: বাবা",
        "PR: ab",
        "LV: easy",
        "",
        "AR: جد",
        "BN: দাদা",
        "LV: hard",
        "",
        "# Verbs",
        "AR: ذهب",
        "BN: যাওয়া",
        "LV: medium",
    ]
    .join("\n")
}

/// Bounds well inside an 800px viewport.
pub fn in_view() -> RegionBounds {
    RegionBounds {
        top: 120.0,
        bottom: 480.0,
    }
}

/// Bounds far below the fold, outside any lookahead margin.
pub fn far_below() -> RegionBounds {
    RegionBounds {
        top: 5000.0,
        bottom: 5400.0,
    }
}

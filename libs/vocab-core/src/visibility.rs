//! Lazy-reveal bookkeeping for category sections.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Vertical extent of a section relative to the top of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionBounds {
    pub top: f64,
    pub bottom: f64,
}

/// Visible area plus the lookahead margin applied on both edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub height: f64,
    pub margin: f64,
}

impl Viewport {
    pub fn new(height: f64, margin: f64) -> Self {
        Self { height, margin }
    }

    /// Whether the region overlaps the margin-expanded viewport.
    pub fn intersects(&self, bounds: RegionBounds) -> bool {
        bounds.top <= self.height + self.margin && bounds.bottom >= -self.margin
    }
}

/// Tracks which categories have been seen at least once.
///
/// The revealed set only grows. Observation can be detached and reattached to
/// a new set of regions when the rendered sections change.
#[derive(Debug, Clone, Default)]
pub struct VisibilityTracker {
    revealed: HashSet<String>,
    observed: HashSet<String>,
}

impl VisibilityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the observed regions. Returns false if the set is unchanged.
    pub fn attach<I, S>(&mut self, regions: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let next: HashSet<String> = regions.into_iter().map(Into::into).collect();
        if next == self.observed {
            return false;
        }
        tracing::debug!(regions = next.len(), "reattached visibility observation");
        self.observed = next;
        true
    }

    /// Stop observing every region. Revealed names are kept.
    pub fn detach(&mut self) {
        self.observed.clear();
    }

    pub fn is_observing(&self, region: &str) -> bool {
        self.observed.contains(region)
    }

    pub fn observed(&self) -> impl Iterator<Item = &str> {
        self.observed.iter().map(String::as_str)
    }

    /// Mark a region as seen. Returns true only the first time an observed
    /// region is recorded; signals for unobserved regions are dropped.
    pub fn record(&mut self, region: &str) -> bool {
        if !self.observed.contains(region) || self.revealed.contains(region) {
            return false;
        }
        self.revealed.insert(region.to_string());
        true
    }

    /// Record a region only if its bounds intersect the viewport.
    pub fn record_bounds(&mut self, region: &str, bounds: RegionBounds, viewport: &Viewport) -> bool {
        viewport.intersects(bounds) && self.record(region)
    }

    /// Before anything has been recorded every category counts as revealed,
    /// so a first paint without signals is never blank.
    pub fn is_revealed(&self, category: &str) -> bool {
        self.revealed.is_empty() || self.revealed.contains(category)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker(regions: &[&str]) -> VisibilityTracker {
        let mut tracker = VisibilityTracker::new();
        tracker.attach(regions.iter().copied());
        tracker
    }

    #[test]
    fn everything_revealed_before_first_signal() {
        let tracker = tracker(&["Nouns", "Verbs"]);
        assert!(tracker.is_revealed("Nouns"));
        assert!(tracker.is_revealed("Verbs"));
    }

    #[test]
    fn first_signal_switches_off_bootstrap() {
        let mut tracker = tracker(&["Nouns", "Verbs", "Colors"]);
        assert!(tracker.record("Nouns"));

        assert!(tracker.is_revealed("Nouns"));
        assert!(!tracker.is_revealed("Verbs"));
        assert!(!tracker.is_revealed("Colors"));
    }

    #[test]
    fn record_is_idempotent() {
        let mut tracker = tracker(&["Nouns"]);
        assert!(tracker.record("Nouns"));
        assert!(!tracker.record("Nouns"));
        assert_eq!(tracker.revealed_count(), 1);
    }

    #[test]
    fn unobserved_regions_are_ignored() {
        let mut tracker = tracker(&["Nouns"]);
        assert!(!tracker.record("Verbs"));
        tracker.detach();
        assert!(!tracker.record("Nouns"));
        assert_eq!(tracker.revealed_count(), 0);
    }

    #[test]
    fn reattach_keeps_revealed() {
        let mut tracker = tracker(&["Nouns", "Verbs"]);
        tracker.record("Nouns");

        assert!(tracker.attach(["Verbs"]));
        assert!(!tracker.attach(["Verbs"]));
        assert!(tracker.is_revealed("Nouns"));
        assert!(!tracker.is_observing("Nouns"));
        assert!(tracker.record("Verbs"));
    }

    #[test]
    fn lookahead_margin() {
        let viewport = Viewport::new(800.0, 100.0);
        assert!(viewport.intersects(RegionBounds { top: 850.0, bottom: 1200.0 }));
        assert!(!viewport.intersects(RegionBounds { top: 950.0, bottom: 1200.0 }));
        assert!(viewport.intersects(RegionBounds { top: -400.0, bottom: -50.0 }));
        assert!(!viewport.intersects(RegionBounds { top: -400.0, bottom: -150.0 }));

        let mut tracker = tracker(&["Verbs"]);
        assert!(!tracker.record_bounds("Verbs", RegionBounds { top: 2000.0, bottom: 2400.0 }, &viewport));
        assert!(tracker.record_bounds("Verbs", RegionBounds { top: 880.0, bottom: 1200.0 }, &viewport));
    }
}

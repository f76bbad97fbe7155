//! Containment boundary around an external renderer.
//!
//! A renderer failure never propagates: the boundary serves a fallback until
//! [`RenderBoundary::retry`] is called. The snapshot being rendered is only
//! ever borrowed, so a failure cannot corrupt session state.

use crate::session::ViewSnapshot;
use std::fmt::Display;

/// Draws a snapshot. Implemented by whatever presentation layer is in use.
pub trait SectionRenderer {
    type Output;
    type Error: Display;

    fn render(&mut self, snapshot: &ViewSnapshot) -> Result<Self::Output, Self::Error>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered<T> {
    Content(T),
    Fallback { message: String },
}

impl<T> Rendered<T> {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

pub struct RenderBoundary<R> {
    renderer: R,
    failure: Option<String>,
    failures: u32,
}

impl<R: SectionRenderer> RenderBoundary<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            failure: None,
            failures: 0,
        }
    }

    /// Render, or return the fallback if this or an earlier render failed.
    pub fn render(&mut self, snapshot: &ViewSnapshot) -> Rendered<R::Output> {
        if let Some(message) = &self.failure {
            return Rendered::Fallback {
                message: message.clone(),
            };
        }

        match self.renderer.render(snapshot) {
            Ok(output) => Rendered::Content(output),
            Err(e) => {
                let message = e.to_string();
                tracing::warn!(error = %message, "render failed, showing fallback");
                self.failure = Some(message.clone());
                self.failures += 1;
                Rendered::Fallback { message }
            }
        }
    }

    /// Clear the failure so the next render reaches the renderer again.
    pub fn retry(&mut self) {
        self.failure = None;
    }

    pub fn is_tripped(&self) -> bool {
        self.failure.is_some()
    }

    /// Total failures since creation.
    pub fn failure_count(&self) -> u32 {
        self.failures
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;
    use vocab_core::{AggregatorSettings, Difficulty, VocabularyEntry};

    /// Fails on the calls listed in `fail_on`, counting every attempt.
    struct Flaky {
        calls: u32,
        fail_on: Vec<u32>,
    }

    impl SectionRenderer for Flaky {
        type Output = usize;
        type Error = String;

        fn render(&mut self, snapshot: &ViewSnapshot) -> Result<usize, String> {
            self.calls += 1;
            if self.fail_on.contains(&self.calls) {
                Err(format!("render {} exploded", self.calls))
            } else {
                Ok(snapshot.sections.len())
            }
        }
    }

    fn snapshot() -> ViewSnapshot {
        let mut session = Session::new(&AggregatorSettings::default(), 800.0, 600.0);
        session.load(vec![VocabularyEntry::new("ماء", "পানি", "Nature", Difficulty::Easy)]);
        session.snapshot()
    }

    #[test]
    fn failure_is_contained() {
        let snapshot = snapshot();
        let mut boundary = RenderBoundary::new(Flaky { calls: 0, fail_on: vec![1] });

        let first = boundary.render(&snapshot);
        assert_eq!(
            first,
            Rendered::Fallback {
                message: "render 1 exploded".to_string()
            }
        );
        assert!(boundary.is_tripped());

        // Tripped: the renderer is not called again.
        assert!(boundary.render(&snapshot).is_fallback());
        assert_eq!(boundary.renderer().calls, 1);
    }

    #[test]
    fn retry_recovers() {
        let snapshot = snapshot();
        let mut boundary = RenderBoundary::new(Flaky { calls: 0, fail_on: vec![1] });
        boundary.render(&snapshot);

        boundary.retry();
        assert_eq!(boundary.render(&snapshot), Rendered::Content(1));
        assert!(!boundary.is_tripped());
        assert_eq!(boundary.failure_count(), 1);
    }
}

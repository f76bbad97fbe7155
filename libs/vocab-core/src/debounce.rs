//! Debounced input state.
//!
//! [`Debounced`] keeps an immediately-updated raw value and a settled value
//! that only catches up after a quiet period. It owns no timer: callers either
//! poll it with the current [`Instant`] or run their own timer and hand back
//! the [`Ticket`] they were given.

use std::time::{Duration, Instant};

/// Identifies one input. Only the most recent ticket can settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Copy)]
struct Pending {
    ticket: u64,
    due: Instant,
}

#[derive(Debug, Clone)]
pub struct Debounced<T> {
    raw: T,
    settled: T,
    delay: Duration,
    generation: u64,
    pending: Option<Pending>,
}

impl<T: Clone> Debounced<T> {
    pub fn new(initial: T, delay: Duration) -> Self {
        Self {
            raw: initial.clone(),
            settled: initial,
            delay,
            generation: 0,
            pending: None,
        }
    }

    /// Value as last typed.
    pub fn raw(&self) -> &T {
        &self.raw
    }

    /// Value the rest of the system should act on.
    pub fn settled(&self) -> &T {
        &self.settled
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Record a new raw value and restart the quiet period.
    pub fn input(&mut self, value: T, now: Instant) -> Ticket {
        self.generation += 1;
        self.raw = value;
        self.pending = Some(Pending {
            ticket: self.generation,
            due: now + self.delay,
        });
        Ticket(self.generation)
    }

    /// Settle if the quiet period has elapsed. Returns the newly settled value.
    pub fn poll(&mut self, now: Instant) -> Option<&T> {
        match self.pending {
            Some(pending) if now >= pending.due => self.settle(),
            _ => None,
        }
    }

    /// Settle on behalf of an external timer. Stale tickets are ignored.
    pub fn commit(&mut self, ticket: Ticket) -> Option<&T> {
        match self.pending {
            Some(pending) if pending.ticket == ticket.0 => self.settle(),
            _ => None,
        }
    }

    /// Settle right away, skipping the rest of the quiet period.
    pub fn flush(&mut self) -> Option<&T> {
        if self.pending.is_some() {
            self.settle()
        } else {
            None
        }
    }

    /// Drop the pending update. The raw value keeps what was typed.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Set both values at once and cancel anything pending.
    pub fn reset(&mut self, value: T) {
        self.generation += 1;
        self.pending = None;
        self.raw = value.clone();
        self.settled = value;
    }

    fn settle(&mut self) -> Option<&T> {
        self.pending = None;
        self.settled = self.raw.clone();
        Some(&self.settled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(300);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn burst_settles_once_with_final_value() {
        let start = Instant::now();
        let mut search = Debounced::new(String::new(), DELAY);
        let mut settles = Vec::new();

        for (offset, text) in [(0, "k"), (100, "ki"), (200, "kit")] {
            search.input(text.to_string(), start + ms(offset));
            if let Some(v) = search.poll(start + ms(offset)) {
                settles.push(v.clone());
            }
        }
        assert_eq!(search.raw(), "kit");
        assert_eq!(search.settled(), "");

        assert!(search.poll(start + ms(499)).is_none());
        if let Some(v) = search.poll(start + ms(500)) {
            settles.push(v.clone());
        }
        assert!(search.poll(start + ms(900)).is_none());

        assert_eq!(settles, vec!["kit".to_string()]);
    }

    #[test]
    fn stale_ticket_is_ignored() {
        let now = Instant::now();
        let mut search = Debounced::new(String::new(), DELAY);
        let first = search.input("a".into(), now);
        let second = search.input("ab".into(), now);

        assert!(search.commit(first).is_none());
        assert_eq!(search.commit(second).map(String::as_str), Some("ab"));
        assert!(search.commit(second).is_none());
    }

    #[test]
    fn cancel_prevents_late_settle() {
        let now = Instant::now();
        let mut search = Debounced::new(String::new(), DELAY);
        let ticket = search.input("late".into(), now);
        search.cancel();

        assert!(!search.is_pending());
        assert!(search.poll(now + ms(1000)).is_none());
        assert!(search.commit(ticket).is_none());
        assert_eq!(search.settled(), "");
    }

    #[test]
    fn reset_invalidates_outstanding_ticket() {
        let now = Instant::now();
        let mut search = Debounced::new(String::new(), DELAY);
        let ticket = search.input("abc".into(), now);
        search.reset(String::new());

        assert!(search.commit(ticket).is_none());
        assert_eq!(search.raw(), "");
    }

    #[test]
    fn flush_settles_immediately() {
        let mut search = Debounced::new(0u32, DELAY);
        search.input(7, Instant::now());
        assert_eq!(search.flush(), Some(&7));
        assert_eq!(search.flush(), None);
    }
}

//! Sliding-window usage log for a single model.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Grant timestamps, oldest first.
///
/// Entries are only ever appended at the back and removed from the front,
/// so the log stays sorted and expiry is a prefix trim.
#[derive(Debug, Clone, Default)]
pub struct UsageWindow {
    grants: VecDeque<Instant>,
}

impl UsageWindow {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty log with room for `capacity` grants.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            grants: VecDeque::with_capacity(capacity),
        }
    }

    /// Whether a grant made at `at` has aged out of `window` by `now`.
    fn is_expired(at: Instant, now: Instant, window: Duration) -> bool {
        now.saturating_duration_since(at) >= window
    }

    /// Drop every grant that has aged out of `window`. Returns how many were removed.
    ///
    /// The window is half-open: a grant made at `t` counts during
    /// `[t, t + window)` and is dropped once `now - t >= window`.
    pub fn prune(&mut self, now: Instant, window: Duration) -> usize {
        let mut removed = 0;
        while let Some(&oldest) = self.grants.front() {
            if !Self::is_expired(oldest, now, window) {
                break;
            }
            self.grants.pop_front();
            removed += 1;
        }
        removed
    }

    /// Record a grant at `now`.
    ///
    /// A `now` earlier than the newest entry is clamped to that entry so the
    /// log never goes out of order.
    pub fn record(&mut self, now: Instant) {
        let at = self.grants.back().map_or(now, |&newest| newest.max(now));
        self.grants.push_back(at);
    }

    /// Number of grants currently held, including any not yet pruned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.grants.len()
    }

    /// Whether the log holds no grants.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grants.is_empty()
    }

    /// Oldest grant still held.
    #[must_use]
    pub fn oldest(&self) -> Option<Instant> {
        self.grants.front().copied()
    }

    /// Number of grants still inside `window` at `now`, without mutating.
    #[must_use]
    pub fn live_count(&self, now: Instant, window: Duration) -> usize {
        let expired = self
            .grants
            .iter()
            .take_while(|&&at| Self::is_expired(at, now, window))
            .count();
        self.grants.len() - expired
    }

    /// Instant at which the grant at `index` (0 = oldest) leaves `window`.
    ///
    /// `None` when there is no such grant or the instant is not representable.
    #[must_use]
    pub fn expiring_at(&self, index: usize, window: Duration) -> Option<Instant> {
        self.grants.get(index).and_then(|&at| at.checked_add(window))
    }
}

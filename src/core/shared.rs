//! Thread-safe rotator handle.
//!
//! Ranking and granting must happen as one unit: re-ranking from stale
//! counts and then granting against a since-changed log can exceed a limit.
//! [`SharedRotator`] holds a `parking_lot::Mutex` across the whole
//! prune-rank-select-grant sequence.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::core::{ModelRotator, ModelState};
use crate::util::{Clock, SystemClock};

/// Cloneable, lock-protected [`ModelRotator`].
#[derive(Debug)]
pub struct SharedRotator<C: Clock = SystemClock> {
    inner: Arc<Mutex<ModelRotator<C>>>,
}

impl<C: Clock> Clone for SharedRotator<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: Clock> From<ModelRotator<C>> for SharedRotator<C> {
    fn from(rotator: ModelRotator<C>) -> Self {
        Self::new(rotator)
    }
}

impl<C: Clock> SharedRotator<C> {
    /// Wrap a rotator for shared use.
    pub fn new(rotator: ModelRotator<C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(rotator)),
        }
    }

    /// Select and grant the next model under the lock.
    #[must_use]
    pub fn get_next_model(&self) -> Option<String> {
        self.inner.lock().get_next_model().map(str::to_owned)
    }

    /// Snapshot every model in configuration order.
    #[must_use]
    pub fn get_state(&self) -> Vec<ModelState> {
        self.inner.lock().get_state()
    }

    /// Snapshot every model in most recent ranking order.
    #[must_use]
    pub fn ranked_state(&self) -> Vec<ModelState> {
        self.inner.lock().ranked_state()
    }

    /// How long until some model can be granted.
    #[must_use]
    pub fn next_available_in(&self) -> Duration {
        self.inner.lock().next_available_in()
    }
}

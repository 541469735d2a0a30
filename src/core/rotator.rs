//! Priority-tiered, rate-limited model selection.
//!
//! A [`ModelRotator`] owns one usage log per configured model. Each call to
//! [`ModelRotator::get_next_model`] expires old grants, ranks models by
//! `(priority rank, live usage, configuration order)`, and grants the first
//! model still under its limit. When every model is at its limit the call
//! returns `None` and grants nothing.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::config::{validate_models, Model, ModelConfig, RotatorConfig, DEFAULT_WINDOW};
use crate::core::{RotatorError, UsageWindow};
use crate::util::{now_ms, Clock, Priority, SystemClock};

/// Point-in-time view of one model's accounting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelState {
    /// Model identifier.
    pub name: String,
    /// Priority tier.
    pub priority: Priority,
    /// Maximum calls within the window.
    pub limit: usize,
    /// Grants held in the usage log as of the last prune.
    pub current_usage: usize,
}

#[derive(Debug, Clone)]
struct ModelRecord {
    model: Model,
    usage: UsageWindow,
}

impl ModelRecord {
    fn snapshot(&self) -> ModelState {
        ModelState {
            name: self.model.name.clone(),
            priority: self.model.priority,
            limit: self.model.limit,
            current_usage: self.usage.len(),
        }
    }

    fn has_capacity(&self) -> bool {
        self.usage.len() < self.model.limit
    }
}

/// Selects the next model to call.
///
/// Not synchronized; wrap it in [`crate::core::SharedRotator`] when several
/// threads select concurrently.
#[derive(Debug)]
pub struct ModelRotator<C: Clock = SystemClock> {
    /// Records in configuration order.
    records: Vec<ModelRecord>,
    /// Indices into `records` in the order of the most recent ranking.
    ranking: Vec<usize>,
    window: Duration,
    clock: C,
}

impl ModelRotator<SystemClock> {
    /// Build a rotator with the default 60-second window and the system clock.
    ///
    /// Every configuration is validated before any state is built.
    pub fn new(configs: &[ModelConfig]) -> Result<Self, RotatorError> {
        Self::with_clock(configs, DEFAULT_WINDOW, SystemClock)
    }

    /// Build a rotator from a root configuration.
    pub fn from_config(cfg: &RotatorConfig) -> Result<Self, RotatorError> {
        Self::with_clock(&cfg.models, cfg.window(), SystemClock)
    }
}

impl<C: Clock> ModelRotator<C> {
    /// Build a rotator with an explicit window and time source.
    pub fn with_clock(
        configs: &[ModelConfig],
        window: Duration,
        clock: C,
    ) -> Result<Self, RotatorError> {
        if window.is_zero() {
            return Err(RotatorError::InvalidWindow);
        }
        let models = validate_models(configs)?;
        Ok(Self::from_models(models, window, clock))
    }

    pub(crate) fn from_models(models: Vec<Model>, window: Duration, clock: C) -> Self {
        let mut seen = HashSet::with_capacity(models.len());
        for model in &models {
            if !seen.insert(model.name.as_str()) {
                tracing::warn!(model = %model.name, "duplicate model name configured");
            }
        }

        let records: Vec<ModelRecord> = models
            .into_iter()
            .map(|model| ModelRecord {
                usage: UsageWindow::with_capacity(model.limit.min(1024)),
                model,
            })
            .collect();
        tracing::info!(
            models = records.len(),
            window_secs = window.as_secs_f64(),
            "model rotator ready"
        );

        Self {
            ranking: (0..records.len()).collect(),
            records,
            window,
            clock,
        }
    }

    /// Expire grants older than the window for the record at `index`.
    fn prune(&mut self, index: usize, now: Instant) {
        let record = &mut self.records[index];
        let expired = record.usage.prune(now, self.window);
        if expired > 0 {
            tracing::debug!(
                model = %record.model.name,
                expired,
                remaining = record.usage.len(),
                "pruned expired grants"
            );
        }
    }

    /// Re-rank every record by priority, then live usage, then configuration order.
    fn rank(&mut self) {
        let records = &self.records;
        self.ranking
            .sort_unstable_by_key(|&i| (records[i].model.priority.rank(), records[i].usage.len(), i));
    }

    /// Select and grant the next model, or `None` if every model is at its limit.
    ///
    /// All accounting in one call uses a single reading of the clock.
    pub fn get_next_model(&mut self) -> Option<&str> {
        let now = self.clock.now();
        for index in 0..self.records.len() {
            self.prune(index, now);
        }
        self.rank();

        let winner = self
            .ranking
            .iter()
            .copied()
            .find(|&i| self.records[i].has_capacity());

        let Some(index) = winner else {
            tracing::warn!(
                models = self.records.len(),
                at_ms = now_ms(),
                "all models exhausted"
            );
            return None;
        };

        let record = &mut self.records[index];
        record.usage.record(now);
        tracing::debug!(
            model = %record.model.name,
            priority = %record.model.priority,
            usage = record.usage.len(),
            limit = record.model.limit,
            at_ms = now_ms(),
            "granted model"
        );
        Some(record.model.name.as_str())
    }

    /// Snapshot every model in configuration order. Does not prune.
    #[must_use]
    pub fn get_state(&self) -> Vec<ModelState> {
        self.records.iter().map(ModelRecord::snapshot).collect()
    }

    /// Snapshot every model in the order the most recent selection ranked them.
    ///
    /// Before the first selection this is configuration order. Does not prune.
    #[must_use]
    pub fn ranked_state(&self) -> Vec<ModelState> {
        self.ranking
            .iter()
            .map(|&i| self.records[i].snapshot())
            .collect()
    }

    /// How long until some model can be granted.
    ///
    /// Zero when a model has capacity now, `Duration::MAX` when no grant can
    /// ever expire within the representable time range. Read-only: grants
    /// that have logically expired but are not yet pruned are treated as gone.
    #[must_use]
    pub fn next_available_in(&self) -> Duration {
        let now = self.clock.now();
        self.records
            .iter()
            .map(|record| {
                let live = record.usage.live_count(now, self.window);
                if live < record.model.limit {
                    return Duration::ZERO;
                }
                // The oldest `live - limit + 1` live grants must expire.
                let expired = record.usage.len() - live;
                let index = expired + (live - record.model.limit);
                record
                    .usage
                    .expiring_at(index, self.window)
                    .map_or(Duration::MAX, |at| at.saturating_duration_since(now))
            })
            .min()
            .unwrap_or(Duration::ZERO)
    }

    /// Number of configured models.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a constructed rotator.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sliding window length.
    #[must_use]
    pub const fn window(&self) -> Duration {
        self.window
    }
}

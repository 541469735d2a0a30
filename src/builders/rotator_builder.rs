//! Fluent construction of rotators.

use std::time::Duration;

use crate::config::{ModelConfig, RotatorConfig, DEFAULT_WINDOW};
use crate::core::{ModelRotator, RotatorError, SharedRotator};
use crate::util::{Clock, Priority, SystemClock};

/// Collects model configurations, a window, and a clock, then validates them
/// all at once in [`RotatorBuilder::build`].
#[derive(Debug, Clone)]
pub struct RotatorBuilder<C: Clock = SystemClock> {
    configs: Vec<ModelConfig>,
    window: Duration,
    clock: C,
}

impl RotatorBuilder<SystemClock> {
    /// Start an empty builder with the default window and the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self {
            configs: Vec::new(),
            window: DEFAULT_WINDOW,
            clock: SystemClock,
        }
    }

    /// Start a builder seeded from a root configuration.
    #[must_use]
    pub fn from_config(cfg: &RotatorConfig) -> Self {
        Self::new().configs(cfg.models.iter().cloned()).window(cfg.window())
    }
}

impl Default for RotatorBuilder<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> RotatorBuilder<C> {
    /// Add a fully specified model.
    #[must_use]
    pub fn model(self, name: impl Into<String>, priority: Priority, limit: usize) -> Self {
        self.config(ModelConfig::new(name, priority, limit))
    }

    /// Add a raw model configuration; it is validated at build time.
    #[must_use]
    pub fn config(mut self, config: ModelConfig) -> Self {
        self.configs.push(config);
        self
    }

    /// Add several raw model configurations.
    #[must_use]
    pub fn configs(mut self, configs: impl IntoIterator<Item = ModelConfig>) -> Self {
        self.configs.extend(configs);
        self
    }

    /// Override the sliding window.
    #[must_use]
    pub fn window(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }

    /// Swap the time source.
    #[must_use]
    pub fn clock<C2: Clock>(self, clock: C2) -> RotatorBuilder<C2> {
        RotatorBuilder {
            configs: self.configs,
            window: self.window,
            clock,
        }
    }

    /// Configurations added so far, in order.
    #[must_use]
    pub fn model_configs(&self) -> &[ModelConfig] {
        &self.configs
    }

    /// Validate and build the rotator.
    pub fn build(self) -> Result<ModelRotator<C>, RotatorError> {
        ModelRotator::with_clock(&self.configs, self.window, self.clock)
    }

    /// Validate and build a thread-safe rotator handle.
    pub fn build_shared(self) -> Result<SharedRotator<C>, RotatorError> {
        self.build().map(SharedRotator::new)
    }
}

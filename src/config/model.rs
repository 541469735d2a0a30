//! Model and rotator configuration structures.

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::{AppResult, RotatorError};
use crate::util::Priority;

/// Default sliding window over which call limits apply.
pub const DEFAULT_WINDOW: Duration = Duration::from_secs(60);

/// Caller-supplied configuration for one model.
///
/// Every field is optional on the wire so an omitted field surfaces as
/// [`RotatorError::MissingField`] during validation rather than as a parse
/// failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Unique model identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Priority tier label: `high`, `medium`, or `low`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    /// Maximum calls within the sliding window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

/// Validated, immutable model definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    /// Unique model identifier.
    pub name: String,
    /// Priority tier.
    pub priority: Priority,
    /// Maximum calls within the sliding window.
    pub limit: usize,
}

impl ModelConfig {
    /// Build a complete configuration entry.
    pub fn new(name: impl Into<String>, priority: Priority, limit: usize) -> Self {
        Self {
            name: Some(name.into()),
            priority: Some(priority.as_str().to_string()),
            limit: Some(limit),
        }
    }

    /// Validate this entry, found at `index` in the input list.
    pub fn validate(&self, index: usize) -> Result<Model, RotatorError> {
        let (Some(name), Some(priority), Some(limit)) = (&self.name, &self.priority, self.limit)
        else {
            let field = if self.name.is_none() {
                "name"
            } else if self.priority.is_none() {
                "priority"
            } else {
                "limit"
            };
            return Err(RotatorError::MissingField { index, field });
        };

        if name.is_empty() {
            return Err(RotatorError::EmptyName { index });
        }
        let priority: Priority = priority.parse()?;
        if limit == 0 {
            return Err(RotatorError::InvalidLimit { name: name.clone() });
        }

        Ok(Model {
            name: name.clone(),
            priority,
            limit,
        })
    }
}

impl From<Model> for ModelConfig {
    fn from(model: Model) -> Self {
        Self::new(model.name, model.priority, model.limit)
    }
}

/// Root rotator configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotatorConfig {
    /// Models in selection tie-break order.
    pub models: Vec<ModelConfig>,
    /// Sliding window length in seconds; defaults to 60.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_secs: Option<u64>,
}

impl RotatorConfig {
    /// Effective sliding window.
    #[must_use]
    pub fn window(&self) -> Duration {
        self.window_secs.map_or(DEFAULT_WINDOW, Duration::from_secs)
    }

    /// Validate every model and the window, returning the validated models.
    pub fn validate(&self) -> Result<Vec<Model>, RotatorError> {
        if self.window().is_zero() {
            return Err(RotatorError::InvalidWindow);
        }
        validate_models(&self.models)
    }

    /// Parse rotator configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, RotatorError> {
        let cfg: Self =
            serde_json::from_str(input).map_err(|e| RotatorError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse, and validate a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading rotator config {}", path.display()))?;
        let cfg = Self::from_json_str(&raw)
            .with_context(|| format!("loading rotator config {}", path.display()))?;
        Ok(cfg)
    }
}

/// Validate a full model list. Fails on the first invalid entry.
pub fn validate_models(configs: &[ModelConfig]) -> Result<Vec<Model>, RotatorError> {
    if configs.is_empty() {
        return Err(RotatorError::EmptyPool);
    }
    configs
        .iter()
        .enumerate()
        .map(|(index, cfg)| cfg.validate(index))
        .collect()
}

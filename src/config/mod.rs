//! Configuration models for rotated models and the sliding window.

pub mod model;

pub use model::{validate_models, Model, ModelConfig, RotatorConfig, DEFAULT_WINDOW};

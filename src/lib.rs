//! # Model Rotator
//!
//! Priority-tiered, rate-limited selection across a fixed pool of LLM backends.
//!
//! Each backend is configured with a name, a priority tier, and a maximum
//! number of calls within a trailing sliding window (60 seconds by default).
//! On every request the rotator picks the least-loaded backend of the highest
//! tier that still has budget, records the grant, and returns its name. When
//! every backend is at its limit it returns `None` so the caller can back off
//! and retry.
//!
//! ## Key Features
//!
//! - **Sliding-Window Limits**: Per-backend call budgets over a trailing window
//! - **Priority Tiers**: `high` before `medium` before `low`, never skipping a
//!   higher tier that has capacity
//! - **Least-Loaded Spreading**: Within a tier, the backend with fewer live
//!   grants wins; ties fall back to configuration order
//! - **Injectable Clock**: Deterministic window expiry in tests via `ManualClock`
//! - **Thread-Safe Handle**: `SharedRotator` makes prune-rank-grant atomic
//!
//! ```rust
//! use model_rotator::builders::RotatorBuilder;
//! use model_rotator::util::Priority;
//!
//! let mut rotator = RotatorBuilder::new()
//!     .model("model1", Priority::High, 2)
//!     .model("model2", Priority::Low, 5)
//!     .build()
//!     .expect("valid configuration");
//!
//! assert_eq!(rotator.get_next_model(), Some("model1"));
//! assert_eq!(rotator.get_next_model(), Some("model1"));
//! assert_eq!(rotator.get_next_model(), Some("model2"));
//! ```
//!
//! Configuration can also be loaded from JSON:
//!
//! ```rust
//! use model_rotator::config::RotatorConfig;
//! use model_rotator::core::ModelRotator;
//!
//! let cfg = RotatorConfig::from_json_str(r#"{
//!     "models": [
//!         {"name": "model1", "priority": "high", "limit": 30},
//!         {"name": "model2", "priority": "medium", "limit": 20}
//!     ]
//! }"#).expect("valid configuration");
//!
//! let mut rotator = ModelRotator::from_config(&cfg).expect("valid configuration");
//! assert_eq!(rotator.get_next_model(), Some("model1"));
//! ```

#![deny(warnings)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core selection engine and usage accounting.
pub mod core;
/// Configuration models for rotated models and the sliding window.
pub mod config;
/// Builders to construct rotators from configuration.
pub mod builders;
/// Shared utilities: priority tiers, clocks, and telemetry.
pub mod util;

pub use crate::builders::RotatorBuilder;
pub use crate::config::{ModelConfig, RotatorConfig};
pub use crate::core::{ModelRotator, ModelState, RotatorError, SharedRotator};
pub use crate::util::{Clock, ManualClock, Priority, SystemClock};

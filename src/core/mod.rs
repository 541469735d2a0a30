//! Core selection engine and usage accounting.

pub mod error;
pub mod rotator;
pub mod shared;
pub mod usage;

pub use error::{AppResult, RotatorError};
pub use rotator::{ModelRotator, ModelState};
pub use shared::SharedRotator;
pub use usage::UsageWindow;

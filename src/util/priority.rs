//! Priority tiers for rotated models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::RotatorError;

/// Static priority tier assigned to a model.
///
/// Variants are declared in service order, so the derived `Ord` sorts
/// `High` before `Medium` before `Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Served first whenever it has capacity.
    High,
    /// Served when no high-tier model has capacity.
    Medium,
    /// Served last.
    Low,
}

impl Priority {
    /// Sortable rank; lower is served first.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
        }
    }

    /// Configuration label for this tier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = RotatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            other => Err(RotatorError::InvalidPriority(other.to_string())),
        }
    }
}

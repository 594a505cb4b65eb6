//! Configuration errors
//!
//! Degenerate tuning is rejected when a [`crate::Match`] or
//! [`crate::OpponentAi`] is built, never mid-simulation.

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A `[min, max]` range whose lower bound exceeds its upper bound.
    InvertedRange {
        field: &'static str,
        min: f32,
        max: f32,
    },
    /// A size, speed or step count that must be strictly positive.
    NonPositive { field: &'static str },
    /// An entity that cannot fit inside the arena.
    DoesNotFit { field: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvertedRange { field, min, max } => {
                write!(f, "{field}: min {min} is greater than max {max}")
            }
            Self::NonPositive { field } => write!(f, "{field} must be positive"),
            Self::DoesNotFit { field } => write!(f, "{field} does not fit inside the arena"),
        }
    }
}

impl std::error::Error for ConfigError {}

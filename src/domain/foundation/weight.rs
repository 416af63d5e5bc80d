//! Weight value object (1-5 importance multiplier).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Importance multiplier for a criterion, from 1 to 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Weight(u8);

impl Weight {
    /// Lowest allowed weight.
    pub const MIN: Self = Self(1);

    /// Weight given to new criteria.
    pub const DEFAULT: Self = Self(3);

    /// Floor applied to criteria whose keywords appear in the decision context.
    pub const EMPHASIZED: Self = Self(4);

    /// Highest allowed weight.
    pub const MAX: Self = Self(5);

    /// Creates a Weight, returning error if outside 1..=5.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&value) {
            return Err(ValidationError::out_of_range(
                "weight",
                i32::from(Self::MIN.0),
                i32::from(Self::MAX.0),
                i32::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for Weight {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Weight> for u8 {
    fn from(weight: Weight) -> Self {
        weight.0
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}

//! Share link configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::sharing::{
    SlugGenerator, DEFAULT_MAX_RETRIES, DEFAULT_SLUG_LENGTH, MAX_SLUG_LENGTH, MIN_SLUG_LENGTH,
};

/// Share slug generation settings
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SharingConfig {
    /// Characters per slug, 8 to 12
    #[serde(default = "default_slug_length")]
    pub slug_length: usize,

    /// Collisions tolerated before saving fails
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

impl SharingConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(MIN_SLUG_LENGTH..=MAX_SLUG_LENGTH).contains(&self.slug_length) {
            return Err(ValidationError::InvalidSlugLength(self.slug_length));
        }
        if self.max_retries == 0 {
            return Err(ValidationError::InvalidMaxRetries);
        }
        Ok(())
    }
}

impl Default for SharingConfig {
    fn default() -> Self {
        Self {
            slug_length: default_slug_length(),
            max_retries: default_max_retries(),
        }
    }
}

impl SlugGenerator {
    /// Builds a generator from the sharing section.
    pub fn from_config(config: &SharingConfig) -> Self {
        SlugGenerator::new()
            .with_length(config.slug_length)
            .with_max_retries(config.max_retries)
    }
}

fn default_slug_length() -> usize {
    DEFAULT_SLUG_LENGTH
}

fn default_max_retries() -> u32 {
    DEFAULT_MAX_RETRIES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SharingConfig::default();
        assert_eq!(config.slug_length, 10);
        assert_eq!(config.max_retries, 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_length() {
        let config = SharingConfig {
            slug_length: 16,
            ..SharingConfig::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidSlugLength(16)));
    }

    #[test]
    fn rejects_zero_retries() {
        let config = SharingConfig {
            max_retries: 0,
            ..SharingConfig::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidMaxRetries));
    }

    #[test]
    fn generator_follows_config() {
        let generator = SlugGenerator::from_config(&SharingConfig {
            slug_length: 12,
            max_retries: 3,
        });
        assert_eq!(generator.length(), 12);
        assert_eq!(generator.max_retries(), 3);
    }
}

//! Slug Generator - Random share slugs with bounded collision retry.

use rand::rngs::OsRng;
use rand::Rng;
use std::future::Future;

use super::share_slug::{ShareSlug, MAX_SLUG_LENGTH, MIN_SLUG_LENGTH, SLUG_ALPHABET};
use super::ShareSlugError;
use crate::ports::DecisionStoreError;

/// Slug length used when nothing else is configured.
pub const DEFAULT_SLUG_LENGTH: usize = 10;

/// Collisions tolerated before giving up.
pub const DEFAULT_MAX_RETRIES: u32 = 6;

/// Produces share slugs from the OS CSPRNG.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlugGenerator {
    length: usize,
    max_retries: u32,
}

impl Default for SlugGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SlugGenerator {
    /// Generator with the default length and retry bound.
    pub fn new() -> Self {
        Self {
            length: DEFAULT_SLUG_LENGTH,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Sets the slug length, clamped to 8..=12.
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length.clamp(MIN_SLUG_LENGTH, MAX_SLUG_LENGTH);
        self
    }

    /// Sets the retry bound; at least one attempt is always made.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries.max(1);
        self
    }

    /// Returns the effective slug length.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Returns the retry bound.
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Draws one slug. Each character is uniform over `a-z0-9`.
    pub fn generate(&self) -> ShareSlug {
        let mut rng = OsRng;
        let value: String = (0..self.length)
            .map(|_| SLUG_ALPHABET[rng.gen_range(0..SLUG_ALPHABET.len())] as char)
            .collect();
        ShareSlug::from_generated(value)
    }

    /// Draws slugs until `exists` reports one as free.
    ///
    /// Checks run one at a time. A failing check is returned as
    /// `ShareSlugError::Store` without further attempts.
    ///
    /// # Errors
    ///
    /// - `ExhaustedRetries` after `max_retries` consecutive collisions
    pub async fn generate_unique<F, Fut>(&self, mut exists: F) -> Result<ShareSlug, ShareSlugError>
    where
        F: FnMut(ShareSlug) -> Fut,
        Fut: Future<Output = Result<bool, DecisionStoreError>>,
    {
        for attempt in 1..=self.max_retries {
            let candidate = self.generate();
            if !exists(candidate.clone()).await? {
                return Ok(candidate);
            }
            tracing::debug!(attempt, slug = %candidate, "share slug collision");
        }

        tracing::warn!(attempts = self.max_retries, "share slug retries exhausted");
        Err(ShareSlugError::ExhaustedRetries {
            attempts: self.max_retries,
        })
    }

    /// Runs `insert` with fresh slugs until it stops reporting a share slug
    /// conflict.
    ///
    /// Any other store error, including a clash on another unique
    /// constraint, is returned immediately.
    ///
    /// # Errors
    ///
    /// - `ExhaustedRetries` after `max_retries` consecutive conflicts
    /// - `Store` for non-conflict failures
    pub async fn insert_with_retry<F, Fut, T>(&self, mut insert: F) -> Result<T, ShareSlugError>
    where
        F: FnMut(ShareSlug) -> Fut,
        Fut: Future<Output = Result<T, DecisionStoreError>>,
    {
        for attempt in 1..=self.max_retries {
            let candidate = self.generate();
            match insert(candidate.clone()).await {
                Ok(value) => return Ok(value),
                Err(err) if err.is_slug_conflict() => {
                    tracing::debug!(attempt, slug = %candidate, "share slug taken on insert");
                }
                Err(err) => return Err(ShareSlugError::Store(err)),
            }
        }

        tracing::warn!(attempts = self.max_retries, "share slug retries exhausted");
        Err(ShareSlugError::ExhaustedRetries {
            attempts: self.max_retries,
        })
    }
}

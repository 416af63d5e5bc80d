//! Sharing module - Public slugs for read-only decision links.

mod errors;
mod share_slug;
mod slug_generator;

pub use errors::ShareSlugError;
pub use share_slug::{ShareSlug, MAX_SLUG_LENGTH, MIN_SLUG_LENGTH, SLUG_ALPHABET};
pub use slug_generator::{SlugGenerator, DEFAULT_MAX_RETRIES, DEFAULT_SLUG_LENGTH};

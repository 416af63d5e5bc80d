//! Decision Helper - weighted-criteria decision scoring.
//!
//! A user lists 2 to 5 options, scores each on a set of criteria (1 to 5),
//! and weights the criteria (1 to 5). Free-text context raises the weight of
//! criteria whose keywords it mentions. Options are ranked by weighted total
//! with a deterministic tie-break, and a saved decision can be shared
//! read-only under a random slug.
//!
//! # Layout
//!
//! - `domain` - Scoring, the Decision aggregate, share slugs
//! - `ports` - Storage contracts
//! - `adapters` - In-memory, PostgreSQL and YAML-file implementations
//! - `application` - Command and query handlers
//! - `config` - Environment-driven configuration
//! - `telemetry` - Tracing subscriber setup

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;

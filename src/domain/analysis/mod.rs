//! Analysis Module - Pure scoring functions for comparing options.
//!
//! # Components
//!
//! - `KeywordWeighting` - Raises criterion weights from keywords in the context
//! - `ScoreNormalizer` - Fills unscored cells with the neutral score
//! - `Aggregator` - Weighted totals per option
//! - `Ranker` - Deterministic ordering, recommendation, top contributions
//!
//! All functions are pure and stateless: inputs are borrowed, outputs are
//! fresh values.

mod aggregator;
mod keyword_weighting;
mod keywords;
mod ranker;
mod score_normalizer;

pub use aggregator::{Aggregator, TotalsMap};
pub use keyword_weighting::KeywordWeighting;
pub use ranker::{Contribution, Ranker, DEFAULT_CONTRIBUTION_LIMIT};
pub use score_normalizer::ScoreNormalizer;

//! Score Normalizer - Fills unscored cells with the neutral midpoint.

use crate::domain::decision::{Criterion, DecisionOption, ScoreMatrix};
use crate::domain::foundation::Score;

/// Score matrix normalization.
pub struct ScoreNormalizer;

impl ScoreNormalizer {
    /// Returns a matrix with a score for every (option, criterion) pair.
    ///
    /// Existing scores are kept; missing ones become [`Score::NEUTRAL`].
    /// Disabled criteria are filled too so re-enabling one keeps its history.
    /// Rows for options not in `options` are dropped. Idempotent.
    pub fn normalize(
        options: &[DecisionOption],
        criteria: &[Criterion],
        existing: &ScoreMatrix,
    ) -> ScoreMatrix {
        let mut next = ScoreMatrix::empty();

        for option in options {
            if let Some(row) = existing.row(option.id.as_str()) {
                for (criterion_id, score) in row {
                    next.set(option.id.clone(), criterion_id.clone(), *score);
                }
            }
            for criterion in criteria {
                let score = existing
                    .get(option.id.as_str(), criterion.id.as_str())
                    .unwrap_or(Score::NEUTRAL);
                next.set(option.id.clone(), criterion.id.clone(), score);
            }
        }

        next
    }
}

//! Score matrix mapping options x criteria to scores.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::{CriterionId, OptionId, Score};

/// Per-option, per-criterion scores.
///
/// Serialized as a nested JSON object `{ option_id: { criterion_id: score } }`,
/// which is the shape persisted in the `scores` column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreMatrix {
    rows: HashMap<OptionId, HashMap<CriterionId, Score>>,
}

impl ScoreMatrix {
    /// Creates an empty score matrix.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a builder for test fixtures.
    #[cfg(test)]
    pub(crate) fn builder() -> ScoreMatrixBuilder {
        ScoreMatrixBuilder::default()
    }

    /// Gets the score for an option on a criterion.
    pub fn get(&self, option_id: &str, criterion_id: &str) -> Option<Score> {
        self.rows
            .get(option_id)
            .and_then(|row| row.get(criterion_id))
            .copied()
    }

    /// Gets the raw score value, treating a missing cell as 0.
    pub fn value_or_zero(&self, option_id: &str, criterion_id: &str) -> u32 {
        self.get(option_id, criterion_id)
            .map(|s| u32::from(s.value()))
            .unwrap_or(0)
    }

    /// Sets one cell, creating the option row if needed.
    pub fn set(&mut self, option_id: OptionId, criterion_id: CriterionId, score: Score) {
        self.rows
            .entry(option_id)
            .or_default()
            .insert(criterion_id, score);
    }

    pub(crate) fn row(&self, option_id: &str) -> Option<&HashMap<CriterionId, Score>> {
        self.rows.get(option_id)
    }

    /// Removes every score belonging to an option.
    pub fn remove_option(&mut self, option_id: &str) {
        self.rows.remove(option_id);
    }
}

/// Fixture builder keyed by plain strings.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct ScoreMatrixBuilder {
    matrix: ScoreMatrix,
}

#[cfg(test)]
impl ScoreMatrixBuilder {
    pub(crate) fn score(mut self, option_id: &str, criterion_id: &str, score: Score) -> Self {
        let option_id = OptionId::new(option_id).expect("option id must not be blank");
        let criterion_id =
            CriterionId::new(criterion_id).expect("criterion id must not be blank");
        self.matrix.set(option_id, criterion_id, score);
        self
    }

    pub(crate) fn build(self) -> ScoreMatrix {
        self.matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_cells() {
        let matrix = ScoreMatrix::builder()
            .score("A", "cost", Score::MAX)
            .score("B", "cost", Score::MIN)
            .build();

        assert_eq!(matrix.get("A", "cost"), Some(Score::MAX));
        assert_eq!(matrix.get("B", "cost"), Some(Score::MIN));
        assert_eq!(matrix.row("B").map(|row| row.len()), Some(1));
    }

    #[test]
    fn missing_cell_counts_as_zero() {
        let matrix = ScoreMatrix::empty();
        assert_eq!(matrix.get("A", "cost"), None);
        assert_eq!(matrix.value_or_zero("A", "cost"), 0);
    }

    #[test]
    fn remove_option_drops_its_row() {
        let mut matrix = ScoreMatrix::builder()
            .score("A", "cost", Score::MAX)
            .score("B", "cost", Score::MIN)
            .build();
        matrix.remove_option("A");
        assert!(matrix.row("A").is_none());
        assert!(matrix.row("B").is_some());
    }

    #[test]
    fn matrix_serializes_as_nested_object() {
        let matrix = ScoreMatrix::builder().score("A", "cost", Score::MAX).build();
        let json = serde_json::to_string(&matrix).unwrap();
        assert_eq!(json, r#"{"A":{"cost":5}}"#);

        let parsed: ScoreMatrix = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, matrix);
    }
}

//! Aggregator - Weighted-sum totals per option.

use std::collections::HashMap;

use crate::domain::decision::{enabled_criteria, Criterion, DecisionOption, ScoreMatrix};
use crate::domain::foundation::OptionId;

/// Option id to weighted total.
pub type TotalsMap = HashMap<OptionId, u32>;

/// Weighted-sum aggregation.
pub struct Aggregator;

impl Aggregator {
    /// Computes the weighted total for each option.
    ///
    /// # Algorithm
    /// For each option: total = Σ(weight × score) over enabled criteria
    ///
    /// # Edge Cases
    /// - No options: empty map
    /// - No enabled criteria: 0 for every option
    /// - Missing cells: contribute 0
    pub fn compute_totals(
        options: &[DecisionOption],
        criteria: &[Criterion],
        scores: &ScoreMatrix,
    ) -> TotalsMap {
        let enabled = enabled_criteria(criteria);

        options
            .iter()
            .map(|option| {
                let total = enabled
                    .iter()
                    .map(|criterion| {
                        u32::from(criterion.weight.value())
                            * scores.value_or_zero(option.id.as_str(), criterion.id.as_str())
                    })
                    .sum();
                (option.id.clone(), total)
            })
            .collect()
    }
}

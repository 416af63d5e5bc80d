//! Scoring report derived from options, criteria and scores.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::{Aggregator, Contribution, Ranker, TotalsMap, DEFAULT_CONTRIBUTION_LIMIT};
use crate::domain::decision::{Criterion, DecisionOption, ScoreMatrix};
use crate::domain::foundation::OptionId;

/// One option's position in the ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSummary {
    pub option_id: OptionId,
    pub label: String,
    pub total: u32,
    pub top_contributions: Vec<Contribution>,
}

/// Totals, recommendation and per-option breakdown, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionReport {
    pub totals: TotalsMap,
    /// `None` only when there is nothing to compare.
    pub recommended_option_id: Option<OptionId>,
    /// Options from most to least preferred.
    pub ranking: Vec<OptionSummary>,
}

impl DecisionReport {
    /// Runs aggregation and ranking over already-normalized scores.
    pub fn compute(
        options: &[DecisionOption],
        criteria: &[Criterion],
        scores: &ScoreMatrix,
    ) -> Self {
        let totals = Aggregator::compute_totals(options, criteria, scores);
        let ranked = Ranker::rank(options, criteria, scores, &totals);

        let ranking = ranked
            .iter()
            .map(|option| OptionSummary {
                option_id: option.id.clone(),
                label: option.label.clone(),
                total: totals.get(&option.id).copied().unwrap_or(0),
                top_contributions: Ranker::top_contributions(
                    &option.id,
                    criteria,
                    scores,
                    DEFAULT_CONTRIBUTION_LIMIT,
                ),
            })
            .collect::<Vec<_>>();

        Self {
            recommended_option_id: ranking.first().map(|summary| summary.option_id.clone()),
            totals,
            ranking,
        }
    }

    /// Returns the summary of the recommended option.
    pub fn recommended(&self) -> Option<&OptionSummary> {
        self.ranking.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decision::base_criteria;

    #[test]
    fn no_options_yields_empty_report() {
        let report = DecisionReport::compute(&[], &base_criteria(), &ScoreMatrix::empty());
        assert!(report.totals.is_empty());
        assert!(report.ranking.is_empty());
        assert_eq!(report.recommended_option_id, None);
        assert!(report.recommended().is_none());
    }

    #[test]
    fn ranking_carries_labels_and_totals() {
        let options = vec![
            DecisionOption::new("공부").unwrap(),
            DecisionOption::new("운동").unwrap(),
        ];
        let mut criteria = base_criteria();
        criteria.truncate(2);

        let report = DecisionReport::compute(&options, &criteria, &ScoreMatrix::empty());
        assert_eq!(report.ranking[0].label, "공부");
        assert_eq!(report.ranking[0].total, 0);
        assert_eq!(report.ranking[0].top_contributions.len(), 2);
        assert_eq!(report.recommended_option_id, Some(options[0].id.clone()));
    }
}

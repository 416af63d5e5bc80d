//! Ranker - Deterministic ordering of options and contribution breakdowns.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::TotalsMap;
use crate::domain::decision::{enabled_criteria, Criterion, DecisionOption, ScoreMatrix};
use crate::domain::foundation::{CriterionId, OptionId, Weight};

/// Number of contributions shown per option unless a caller asks otherwise.
pub const DEFAULT_CONTRIBUTION_LIMIT: usize = 2;

/// How much one criterion adds to an option's total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contribution {
    pub id: CriterionId,
    pub label: String,
    pub weight: Weight,
    /// Raw score, 0 when the cell was never scored.
    pub score: u8,
    /// `weight × score`.
    pub total: u32,
}

/// Option ranking functions.
pub struct Ranker;

impl Ranker {
    /// Orders options from most to least preferred.
    ///
    /// # Algorithm
    /// 1. Higher total wins.
    /// 2. Otherwise walk the enabled criteria by weight (heaviest first, equal
    ///    weights in input order); the first criterion with differing scores
    ///    decides, higher score wins. Missing scores count as 0.
    /// 3. Options still tied keep their input order (stable sort).
    pub fn rank<'a>(
        options: &'a [DecisionOption],
        criteria: &[Criterion],
        scores: &ScoreMatrix,
        totals: &TotalsMap,
    ) -> Vec<&'a DecisionOption> {
        let tie_breakers = Self::tie_break_order(criteria);
        let mut ranked: Vec<&DecisionOption> = options.iter().collect();
        ranked.sort_by(|a, b| Self::compare_with(&tie_breakers, scores, totals, &a.id, &b.id));
        ranked
    }

    /// Returns the recommended option, or `None` when there are no options.
    pub fn recommend(
        options: &[DecisionOption],
        criteria: &[Criterion],
        scores: &ScoreMatrix,
        totals: &TotalsMap,
    ) -> Option<OptionId> {
        Self::rank(options, criteria, scores, totals)
            .first()
            .map(|option| option.id.clone())
    }

    /// Compares two options with the ranking comparator.
    ///
    /// `Ordering::Less` means `a` is preferred over `b`.
    pub fn compare(
        criteria: &[Criterion],
        scores: &ScoreMatrix,
        totals: &TotalsMap,
        a: &OptionId,
        b: &OptionId,
    ) -> Ordering {
        Self::compare_with(&Self::tie_break_order(criteria), scores, totals, a, b)
    }

    /// Returns the criteria contributing most to an option's total.
    ///
    /// Contributions are `weight × score` over enabled criteria, sorted
    /// descending; equal products keep criteria order. At most `limit`
    /// entries are returned.
    pub fn top_contributions(
        option_id: &OptionId,
        criteria: &[Criterion],
        scores: &ScoreMatrix,
        limit: usize,
    ) -> Vec<Contribution> {
        let mut contributions: Vec<Contribution> = enabled_criteria(criteria)
            .into_iter()
            .map(|criterion| {
                let score = scores
                    .get(option_id.as_str(), criterion.id.as_str())
                    .map(|s| s.value())
                    .unwrap_or(0);
                Contribution {
                    id: criterion.id.clone(),
                    label: criterion.label.clone(),
                    weight: criterion.weight,
                    score,
                    total: u32::from(criterion.weight.value()) * u32::from(score),
                }
            })
            .collect();

        contributions.sort_by(|a, b| b.total.cmp(&a.total));
        contributions.truncate(limit);
        contributions
    }

    /// Enabled criteria, heaviest first, stable among equal weights.
    fn tie_break_order(criteria: &[Criterion]) -> Vec<&Criterion> {
        let mut ordered = enabled_criteria(criteria);
        ordered.sort_by(|x, y| y.weight.cmp(&x.weight));
        ordered
    }

    fn compare_with(
        tie_breakers: &[&Criterion],
        scores: &ScoreMatrix,
        totals: &TotalsMap,
        a: &OptionId,
        b: &OptionId,
    ) -> Ordering {
        let total_a = totals.get(a).copied().unwrap_or(0);
        let total_b = totals.get(b).copied().unwrap_or(0);

        total_b.cmp(&total_a).then_with(|| {
            tie_breakers
                .iter()
                .map(|criterion| {
                    let score_a = scores.value_or_zero(a.as_str(), criterion.id.as_str());
                    let score_b = scores.value_or_zero(b.as_str(), criterion.id.as_str());
                    score_b.cmp(&score_a)
                })
                .find(|ordering| ordering.is_ne())
                .unwrap_or(Ordering::Equal)
        })
    }
}

//! Keyword Weighting - Infers criterion importance from free-text context.

use super::keywords::{strip_whitespace, PreparedKeyword, KEYWORD_TABLE};
use crate::domain::decision::{base_criteria, Criterion};
use crate::domain::foundation::Weight;

/// Context-driven weight inference.
pub struct KeywordWeighting;

impl KeywordWeighting {
    /// Raises the weight of every criterion whose keywords occur in `context`.
    ///
    /// # Algorithm
    /// The trimmed context is lower-cased, and a whitespace-free copy is kept.
    /// A criterion matches when any keyword is a substring of the lower-cased
    /// context, or its whitespace-free form is a substring of the
    /// whitespace-free context. Matched criteria get
    /// `weight = max(weight, 4)`.
    ///
    /// # Edge Cases
    /// - Empty or whitespace-only context: criteria returned unchanged
    /// - Criterion ids without keywords (custom criteria, `convenience`): untouched
    /// - Weight already above 4: kept as is
    ///
    /// The result is always a fresh copy of `criteria`.
    pub fn infer_weights(criteria: &[Criterion], context: &str) -> Vec<Criterion> {
        let mut next = criteria.to_vec();
        let context = context.trim();
        if context.is_empty() {
            return next;
        }

        let lowered = context.to_lowercase();
        let compact = strip_whitespace(&lowered);

        for criterion in next.iter_mut() {
            let Some(keywords) = KEYWORD_TABLE.get(criterion.id.as_str()) else {
                continue;
            };
            if Self::matches_any(&lowered, &compact, keywords) {
                criterion.weight = criterion.weight.max(Weight::EMPHASIZED);
            }
        }

        next
    }

    /// Base criteria weighted by `context`.
    ///
    /// Used when a new draft is created.
    pub fn criteria_from_context(context: &str) -> Vec<Criterion> {
        Self::infer_weights(&base_criteria(), context)
    }

    /// Returns the ids of criteria whose keywords occur in `context`.
    pub fn matched_criteria(context: &str) -> Vec<&'static str> {
        let context = context.trim();
        if context.is_empty() {
            return Vec::new();
        }
        let lowered = context.to_lowercase();
        let compact = strip_whitespace(&lowered);

        let mut matched: Vec<&'static str> = KEYWORD_TABLE
            .iter()
            .filter(|(_, keywords)| Self::matches_any(&lowered, &compact, keywords))
            .map(|(id, _)| *id)
            .collect();
        matched.sort_unstable();
        matched
    }

    fn matches_any(lowered: &str, compact: &str, keywords: &[PreparedKeyword]) -> bool {
        keywords.iter().any(|keyword| {
            lowered.contains(keyword.lowered.as_str())
                || compact.contains(keyword.compact.as_str())
        })
    }
}

//! Decision draft - the in-memory working copy a user edits before saving.

use serde::{Deserialize, Serialize};

use super::{
    enabled_criteria, Criterion, DecisionOption, DecisionReport, ScoreMatrix, MAX_OPTIONS,
    MIN_ENABLED_CRITERIA, MIN_OPTIONS,
};
use crate::domain::analysis::{KeywordWeighting, ScoreNormalizer};
use crate::domain::foundation::{
    CriterionId, DomainError, ErrorCode, OptionId, Score, ValidationError, Weight,
};

/// Maximum length for the decision title, in characters.
pub const MAX_TITLE_LENGTH: usize = 60;

/// Maximum length for the free-text context, in characters.
pub const MAX_CONTEXT_LENGTH: usize = 500;

/// Maximum length for an option label, in characters.
pub const MAX_OPTION_LABEL_LENGTH: usize = 40;

/// Unsaved decision.
///
/// Every mutation keeps `scores` normalized against `options` and
/// `criteria`, so a partially edited matrix never zeroes out a cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub context: String,
    pub options: Vec<DecisionOption>,
    pub criteria: Vec<Criterion>,
    #[serde(default)]
    pub scores: ScoreMatrix,
}

impl DecisionDraft {
    /// Starts a draft: base criteria weighted by `context`, neutral scores.
    pub fn new(options: Vec<DecisionOption>, context: impl Into<String>) -> Self {
        let context = context.into();
        let criteria = KeywordWeighting::criteria_from_context(&context);
        let scores = ScoreNormalizer::normalize(&options, &criteria, &ScoreMatrix::empty());
        Self {
            title: String::new(),
            context,
            options,
            criteria,
            scores,
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Re-normalizes scores, e.g. after deserializing a draft from storage.
    pub fn normalized(mut self) -> Self {
        self.renormalize();
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Options
    // ─────────────────────────────────────────────────────────────────────────

    /// Adds an option with neutral scores.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the label is blank or the draft already has
    ///   the maximum number of options
    pub fn add_option(&mut self, label: &str) -> Result<OptionId, DomainError> {
        if self.options.len() >= MAX_OPTIONS {
            return Err(ValidationError::too_many("options", MAX_OPTIONS, self.options.len() + 1).into());
        }
        let option = DecisionOption::new(label)?;
        let id = option.id.clone();
        self.options.push(option);
        self.renormalize();
        Ok(id)
    }

    /// Removes an option and its scores. Returns false if it was not present.
    pub fn remove_option(&mut self, option_id: &OptionId) -> bool {
        let before = self.options.len();
        self.options.retain(|option| &option.id != option_id);
        self.scores.remove_option(option_id.as_str());
        before != self.options.len()
    }

    /// Renames an option.
    pub fn rename_option(&mut self, option_id: &OptionId, label: &str) -> Result<(), DomainError> {
        let renamed = DecisionOption::with_id(option_id.clone(), label)?;
        let option = self
            .options
            .iter_mut()
            .find(|option| &option.id == option_id)
            .ok_or_else(|| option_not_found(option_id))?;
        *option = renamed;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Criteria
    // ─────────────────────────────────────────────────────────────────────────

    /// Adds a user-defined criterion (weight 3, enabled) with neutral scores.
    pub fn add_criterion(&mut self, label: &str, description: &str) -> Result<CriterionId, DomainError> {
        let criterion = Criterion::custom(label, description)?;
        let id = criterion.id.clone();
        self.criteria.push(criterion);
        self.renormalize();
        Ok(id)
    }

    /// Flips a criterion between enabled and disabled; returns the new state.
    ///
    /// Scores are kept either way.
    pub fn toggle_criterion(&mut self, criterion_id: &CriterionId) -> Result<bool, DomainError> {
        let criterion = self.criterion_mut(criterion_id)?;
        criterion.enabled = !criterion.enabled;
        Ok(criterion.enabled)
    }

    /// Sets a criterion's weight.
    pub fn set_weight(&mut self, criterion_id: &CriterionId, weight: Weight) -> Result<(), DomainError> {
        self.criterion_mut(criterion_id)?.weight = weight;
        Ok(())
    }

    /// Replaces the context and floor-raises weights for matching keywords.
    ///
    /// Weights the user already raised are never lowered.
    pub fn apply_context(&mut self, context: impl Into<String>) {
        self.context = context.into();
        self.criteria = KeywordWeighting::infer_weights(&self.criteria, &self.context);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Scores
    // ─────────────────────────────────────────────────────────────────────────

    /// Scores one option on one criterion.
    pub fn set_score(
        &mut self,
        option_id: &OptionId,
        criterion_id: &CriterionId,
        score: Score,
    ) -> Result<(), DomainError> {
        if !self.options.iter().any(|option| &option.id == option_id) {
            return Err(option_not_found(option_id));
        }
        if !self.criteria.iter().any(|criterion| &criterion.id == criterion_id) {
            return Err(criterion_not_found(criterion_id));
        }
        self.scores
            .set(option_id.clone(), criterion_id.clone(), score);
        Ok(())
    }

    /// Resets every enabled cell to the neutral score.
    pub fn fill_neutral(&mut self) {
        let enabled: Vec<CriterionId> = enabled_criteria(&self.criteria)
            .into_iter()
            .map(|criterion| criterion.id.clone())
            .collect();
        for option in &self.options {
            for criterion_id in &enabled {
                self.scores
                    .set(option.id.clone(), criterion_id.clone(), Score::NEUTRAL);
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Validation & evaluation
    // ─────────────────────────────────────────────────────────────────────────

    /// Checks the draft is ready to be compared and saved.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the title is blank
    /// - `OutOfRange` if title, context or an option label is too long
    /// - `TooFew`/`TooMany` if options are outside 2..=5
    /// - `TooFew` if fewer than 2 criteria are enabled
    pub fn validate(&self) -> Result<(), ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        check_length("title", title, MAX_TITLE_LENGTH)?;
        check_length("context", &self.context, MAX_CONTEXT_LENGTH)?;

        if self.options.len() < MIN_OPTIONS {
            return Err(ValidationError::too_few("options", MIN_OPTIONS, self.options.len()));
        }
        if self.options.len() > MAX_OPTIONS {
            return Err(ValidationError::too_many("options", MAX_OPTIONS, self.options.len()));
        }
        for option in &self.options {
            if option.label.trim().is_empty() {
                return Err(ValidationError::empty_field("option_label"));
            }
            check_length("option_label", &option.label, MAX_OPTION_LABEL_LENGTH)?;
        }

        let enabled = enabled_criteria(&self.criteria).len();
        if enabled < MIN_ENABLED_CRITERIA {
            return Err(ValidationError::too_few(
                "enabled_criteria",
                MIN_ENABLED_CRITERIA,
                enabled,
            ));
        }
        Ok(())
    }

    /// Computes totals, ranking and contributions for the current state.
    pub fn evaluate(&self) -> DecisionReport {
        DecisionReport::compute(&self.options, &self.criteria, &self.scores)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn renormalize(&mut self) {
        self.scores = ScoreNormalizer::normalize(&self.options, &self.criteria, &self.scores);
    }

    fn criterion_mut(&mut self, criterion_id: &CriterionId) -> Result<&mut Criterion, DomainError> {
        self.criteria
            .iter_mut()
            .find(|criterion| &criterion.id == criterion_id)
            .ok_or_else(|| criterion_not_found(criterion_id))
    }
}

fn check_length(field: &str, value: &str, max: usize) -> Result<(), ValidationError> {
    let length = value.chars().count();
    if length > max {
        return Err(ValidationError::out_of_range(
            field,
            0,
            max as i32,
            length as i32,
        ));
    }
    Ok(())
}

fn option_not_found(option_id: &OptionId) -> DomainError {
    DomainError::new(
        ErrorCode::OptionNotFound,
        format!("Option not found: {}", option_id),
    )
}

fn criterion_not_found(criterion_id: &CriterionId) -> DomainError {
    DomainError::new(
        ErrorCode::CriterionNotFound,
        format!("Criterion not found: {}", criterion_id),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_with(labels: &[&str], context: &str) -> DecisionDraft {
        let options = labels
            .iter()
            .map(|label| DecisionOption::new(label).unwrap())
            .collect();
        DecisionDraft::new(options, context).with_title("오늘 저녁 뭐할까?")
    }

    fn criterion_id(id: &str) -> CriterionId {
        CriterionId::new(id).unwrap()
    }

    #[test]
    fn new_draft_has_neutral_scores_everywhere() {
        let draft = draft_with(&["study", "exercise"], "");
        for option in &draft.options {
            for criterion in &draft.criteria {
                assert_eq!(
                    draft.scores.get(option.id.as_str(), criterion.id.as_str()),
                    Some(Score::NEUTRAL)
                );
            }
        }
    }

    #[test]
    fn new_draft_weights_criteria_from_context() {
        let draft = draft_with(&["study", "exercise"], "너무 피곤해서");
        let effort = draft
            .criteria
            .iter()
            .find(|c| c.id.as_str() == "effort")
            .unwrap();
        assert_eq!(effort.weight, Weight::EMPHASIZED);
    }

    #[test]
    fn add_option_stops_at_five() {
        let mut draft = draft_with(&["a", "b", "c", "d"], "");
        draft.add_option("e").unwrap();
        let err = draft.add_option("f").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(draft.options.len(), 5);
    }

    #[test]
    fn added_option_gets_neutral_scores() {
        let mut draft = draft_with(&["a", "b"], "");
        let id = draft.add_option("  c ").unwrap();
        assert_eq!(draft.scores.get(id.as_str(), "cost"), Some(Score::NEUTRAL));
        assert_eq!(draft.options.last().unwrap().label, "c");
    }

    #[test]
    fn remove_option_cascades_scores() {
        let mut draft = draft_with(&["a", "b", "c"], "");
        let id = draft.options[0].id.clone();
        assert!(draft.remove_option(&id));
        assert!(draft.scores.row(id.as_str()).is_none());
        assert!(!draft.remove_option(&id));
    }

    #[test]
    fn rename_unknown_option_fails() {
        let mut draft = draft_with(&["a", "b"], "");
        let err = draft
            .rename_option(&OptionId::new("missing").unwrap(), "x")
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::OptionNotFound);
    }

    #[test]
    fn custom_criterion_is_scored_neutral() {
        let mut draft = draft_with(&["a", "b"], "");
        let id = draft.add_criterion("통근", "").unwrap();
        let option_id = draft.options[0].id.clone();
        assert_eq!(draft.scores.get(option_id.as_str(), id.as_str()), Some(Score::NEUTRAL));
    }

    #[test]
    fn toggling_keeps_scores() {
        let mut draft = draft_with(&["a", "b"], "");
        let option_id = draft.options[0].id.clone();
        draft
            .set_score(&option_id, &criterion_id("cost"), Score::MAX)
            .unwrap();

        assert!(!draft.toggle_criterion(&criterion_id("cost")).unwrap());
        assert!(draft.toggle_criterion(&criterion_id("cost")).unwrap());
        assert_eq!(draft.scores.get(option_id.as_str(), "cost"), Some(Score::MAX));
    }

    #[test]
    fn set_score_rejects_unknown_criterion() {
        let mut draft = draft_with(&["a", "b"], "");
        let option_id = draft.options[0].id.clone();
        let err = draft
            .set_score(&option_id, &criterion_id("nope"), Score::MAX)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::CriterionNotFound);
    }

    #[test]
    fn fill_neutral_resets_enabled_cells() {
        let mut draft = draft_with(&["a", "b"], "");
        let option_id = draft.options[0].id.clone();
        draft
            .set_score(&option_id, &criterion_id("time"), Score::MIN)
            .unwrap();
        draft.fill_neutral();
        assert_eq!(draft.scores.get(option_id.as_str(), "time"), Some(Score::NEUTRAL));
    }

    #[test]
    fn apply_context_keeps_manual_raise() {
        let mut draft = draft_with(&["a", "b"], "");
        draft.set_weight(&criterion_id("cost"), Weight::MAX).unwrap();
        draft.apply_context("예산이 부족");
        let cost = draft.criteria.iter().find(|c| c.id.as_str() == "cost").unwrap();
        assert_eq!(cost.weight, Weight::MAX);
    }

    #[test]
    fn validate_rejects_blank_title() {
        let draft = draft_with(&["a", "b"], "").with_title("   ");
        assert_eq!(draft.validate(), Err(ValidationError::empty_field("title")));
    }

    #[test]
    fn validate_rejects_single_option() {
        let draft = draft_with(&["a"], "");
        assert_eq!(
            draft.validate(),
            Err(ValidationError::too_few("options", 2, 1))
        );
    }

    #[test]
    fn validate_requires_two_enabled_criteria() {
        let mut draft = draft_with(&["a", "b"], "");
        for criterion in draft.criteria.iter_mut().skip(1) {
            criterion.enabled = false;
        }
        assert_eq!(
            draft.validate(),
            Err(ValidationError::too_few("enabled_criteria", 2, 1))
        );
    }

    #[test]
    fn validate_rejects_long_title() {
        let draft = draft_with(&["a", "b"], "").with_title("가".repeat(61));
        assert!(matches!(
            draft.validate(),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn valid_draft_passes() {
        assert!(draft_with(&["a", "b", "c"], "").validate().is_ok());
    }

    #[test]
    fn evaluate_recommends_highest_total() {
        let mut draft = draft_with(&["a", "b"], "");
        let b = draft.options[1].id.clone();
        draft.set_score(&b, &criterion_id("benefit"), Score::MAX).unwrap();

        let report = draft.evaluate();
        assert_eq!(report.recommended_option_id, Some(b.clone()));
        assert_eq!(report.totals.get(&b), Some(&78));
        assert_eq!(report.ranking.len(), 2);
        assert_eq!(report.ranking[0].top_contributions[0].id.as_str(), "benefit");
    }

    #[test]
    fn draft_roundtrips_through_yaml() {
        let draft = draft_with(&["a", "b"], "피곤");
        let yaml = serde_yaml::to_string(&draft).unwrap();
        let parsed: DecisionDraft = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, draft);
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::domain::analysis::Aggregator;
    use proptest::prelude::*;

    fn scored_draft(weights: &[u8], cells: &[Vec<u8>]) -> DecisionDraft {
        let options = (0..cells.len())
            .map(|i| DecisionOption::new(&format!("option {}", i)).unwrap())
            .collect();
        let mut draft = DecisionDraft::new(options, "").with_title("property");
        for (criterion, weight) in draft.criteria.iter_mut().zip(weights) {
            criterion.weight = Weight::try_new(*weight).unwrap();
        }
        let option_ids: Vec<OptionId> = draft.options.iter().map(|o| o.id.clone()).collect();
        let criterion_ids: Vec<CriterionId> = draft.criteria.iter().map(|c| c.id.clone()).collect();
        for (option_id, row) in option_ids.iter().zip(cells) {
            for (criterion_id, value) in criterion_ids.iter().zip(row) {
                draft
                    .set_score(option_id, criterion_id, Score::try_new(*value).unwrap())
                    .unwrap();
            }
        }
        draft
    }

    fn weights() -> impl Strategy<Value = Vec<u8>> {
        prop::collection::vec(1u8..=5, 8)
    }

    fn cells() -> impl Strategy<Value = Vec<Vec<u8>>> {
        prop::collection::vec(prop::collection::vec(1u8..=5, 8), 2..=5)
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(weights in weights(), cells in cells()) {
            let draft = scored_draft(&weights, &cells);
            let once = ScoreNormalizer::normalize(&draft.options, &draft.criteria, &draft.scores);
            let twice = ScoreNormalizer::normalize(&draft.options, &draft.criteria, &once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn disabling_a_criterion_never_increases_totals(
            weights in weights(),
            cells in cells(),
            disabled in 0usize..8,
        ) {
            let mut draft = scored_draft(&weights, &cells);
            let before = Aggregator::compute_totals(&draft.options, &draft.criteria, &draft.scores);

            let id = draft.criteria[disabled].id.clone();
            draft.toggle_criterion(&id).unwrap();
            let after = Aggregator::compute_totals(&draft.options, &draft.criteria, &draft.scores);

            for option in &draft.options {
                prop_assert!(after[&option.id] <= before[&option.id]);
            }
        }

        #[test]
        fn recommendation_has_the_highest_total(weights in weights(), cells in cells()) {
            let report = scored_draft(&weights, &cells).evaluate();
            let best = report.totals.values().copied().max().unwrap();
            let recommended = report.recommended_option_id.unwrap();
            prop_assert_eq!(report.totals[&recommended], best);
        }
    }
}

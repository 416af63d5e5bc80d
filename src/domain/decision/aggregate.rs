//! Decision aggregate entity.
//!
//! A decision is a saved, scored comparison owned by one user. It can be
//! published under a share slug for read-only viewing.
//!
//! # Sharing
//!
//! The slug is assigned the first time a decision is published and never
//! changes afterwards. Unpublishing hides the decision but keeps the slug so
//! the same link works again after re-publishing.

use serde::{Deserialize, Serialize};

use super::{Criterion, DecisionDraft, DecisionOption, DecisionReport, ScoreMatrix};
use crate::domain::analysis::{ScoreNormalizer, TotalsMap};
use crate::domain::foundation::{DecisionId, DomainError, ErrorCode, OptionId, Timestamp, UserId};
use crate::domain::sharing::ShareSlug;

/// Decision aggregate - a persisted comparison with its computed result.
///
/// # Invariants
///
/// - `scores` are normalized against `options` and `criteria`
/// - `total_scores` and `recommended_option_id` match the current scores
/// - `is_public` implies `share_slug` is set
/// - `share_slug`, once set, never changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    id: DecisionId,
    user_id: UserId,
    title: String,
    context: String,
    options: Vec<DecisionOption>,
    criteria: Vec<Criterion>,
    scores: ScoreMatrix,
    total_scores: TotalsMap,
    recommended_option_id: Option<OptionId>,
    share_slug: Option<ShareSlug>,
    is_public: bool,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Decision {
    /// Creates a private decision from a validated draft.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the draft does not pass `DecisionDraft::validate`
    pub fn from_draft(id: DecisionId, user_id: UserId, draft: DecisionDraft) -> Result<Self, DomainError> {
        draft.validate()?;

        let now = Timestamp::now();
        let mut decision = Self {
            id,
            user_id,
            title: String::new(),
            context: String::new(),
            options: Vec::new(),
            criteria: Vec::new(),
            scores: ScoreMatrix::empty(),
            total_scores: TotalsMap::new(),
            recommended_option_id: None,
            share_slug: None,
            is_public: false,
            created_at: now,
            updated_at: now,
        };
        decision.apply_draft(draft);
        Ok(decision)
    }

    /// Reconstitute a decision from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: DecisionId,
        user_id: UserId,
        title: String,
        context: String,
        options: Vec<DecisionOption>,
        criteria: Vec<Criterion>,
        scores: ScoreMatrix,
        total_scores: TotalsMap,
        recommended_option_id: Option<OptionId>,
        share_slug: Option<ShareSlug>,
        is_public: bool,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            title,
            context,
            options,
            criteria,
            scores,
            total_scores,
            recommended_option_id,
            share_slug,
            is_public,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &DecisionId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn options(&self) -> &[DecisionOption] {
        &self.options
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn scores(&self) -> &ScoreMatrix {
        &self.scores
    }

    /// Totals as computed at the last save.
    pub fn total_scores(&self) -> &TotalsMap {
        &self.total_scores
    }

    pub fn recommended_option_id(&self) -> Option<&OptionId> {
        self.recommended_option_id.as_ref()
    }

    pub fn share_slug(&self) -> Option<&ShareSlug> {
        self.share_slug.as_ref()
    }

    pub fn is_public(&self) -> bool {
        self.is_public
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Returns the editable content as a draft.
    pub fn to_draft(&self) -> DecisionDraft {
        DecisionDraft {
            title: self.title.clone(),
            context: self.context.clone(),
            options: self.options.clone(),
            criteria: self.criteria.clone(),
            scores: self.scores.clone(),
        }
    }

    /// Recomputes the full report from the stored inputs.
    pub fn report(&self) -> DecisionReport {
        DecisionReport::compute(&self.options, &self.criteria, &self.scores)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Authorization
    // ─────────────────────────────────────────────────────────────────────────

    /// Checks if the given user owns this decision.
    pub fn is_owner(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    /// Validates that the user can modify this decision.
    ///
    /// # Errors
    ///
    /// - `Forbidden` if user is not the owner
    pub fn authorize(&self, user_id: &UserId) -> Result<(), DomainError> {
        if self.is_owner(user_id) {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::Forbidden,
                "User is not authorized to modify this decision",
            ))
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Replaces content with an edited draft and recomputes the result.
    ///
    /// Sharing state is untouched.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the draft is invalid
    pub fn update_from_draft(&mut self, draft: DecisionDraft) -> Result<(), DomainError> {
        draft.validate()?;
        self.apply_draft(draft);
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Sets the share slug. Allowed only once.
    ///
    /// # Errors
    ///
    /// - `SlugAlreadyAssigned` if a slug is already set
    pub fn assign_share_slug(&mut self, slug: ShareSlug) -> Result<(), DomainError> {
        if let Some(existing) = &self.share_slug {
            return Err(DomainError::new(
                ErrorCode::SlugAlreadyAssigned,
                format!("Decision already shared as '{}'", existing),
            ));
        }
        self.share_slug = Some(slug);
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Makes the decision visible through its slug.
    ///
    /// # Errors
    ///
    /// - `DecisionNotPublic` if no slug has been assigned yet
    pub fn publish(&mut self) -> Result<(), DomainError> {
        if self.share_slug.is_none() {
            return Err(DomainError::new(
                ErrorCode::DecisionNotPublic,
                "Cannot publish a decision without a share slug",
            ));
        }
        if !self.is_public {
            self.is_public = true;
            self.updated_at = Timestamp::now();
        }
        Ok(())
    }

    /// Hides the decision. The slug is kept.
    pub fn unpublish(&mut self) {
        if self.is_public {
            self.is_public = false;
            self.updated_at = Timestamp::now();
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn apply_draft(&mut self, draft: DecisionDraft) {
        let scores = ScoreNormalizer::normalize(&draft.options, &draft.criteria, &draft.scores);
        let report = DecisionReport::compute(&draft.options, &draft.criteria, &scores);

        self.title = draft.title.trim().to_string();
        self.context = draft.context;
        self.options = draft.options;
        self.criteria = draft.criteria;
        self.scores = scores;
        self.total_scores = report.totals;
        self.recommended_option_id = report.recommended_option_id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{CriterionId, Score};

    fn draft() -> DecisionDraft {
        let options = vec![
            DecisionOption::new("공부").unwrap(),
            DecisionOption::new("운동").unwrap(),
        ];
        DecisionDraft::new(options, "").with_title("  주말 계획  ")
    }

    fn owner() -> UserId {
        UserId::new("user-1").unwrap()
    }

    fn decision() -> Decision {
        Decision::from_draft(DecisionId::new(), owner(), draft()).unwrap()
    }

    fn slug(value: &str) -> ShareSlug {
        ShareSlug::parse(value).unwrap()
    }

    #[test]
    fn from_draft_computes_totals_and_recommendation() {
        let mut input = draft();
        let second = input.options[1].id.clone();
        input
            .set_score(&second, &CriterionId::new("cost").unwrap(), Score::MAX)
            .unwrap();

        let decision = Decision::from_draft(DecisionId::new(), owner(), input).unwrap();
        assert_eq!(decision.title(), "주말 계획");
        assert_eq!(decision.recommended_option_id(), Some(&second));
        assert_eq!(decision.total_scores().get(&second), Some(&78));
        assert!(!decision.is_public());
        assert!(decision.share_slug().is_none());
    }

    #[test]
    fn from_draft_rejects_invalid_draft() {
        let err = Decision::from_draft(DecisionId::new(), owner(), draft().with_title(""))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn authorize_rejects_other_users() {
        let decision = decision();
        assert!(decision.authorize(&owner()).is_ok());
        let err = decision
            .authorize(&UserId::new("intruder").unwrap())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
    }

    #[test]
    fn publish_requires_slug() {
        let mut decision = decision();
        assert_eq!(decision.publish().unwrap_err().code, ErrorCode::DecisionNotPublic);

        decision.assign_share_slug(slug("abcd1234ef")).unwrap();
        decision.publish().unwrap();
        assert!(decision.is_public());
    }

    #[test]
    fn slug_is_assigned_only_once() {
        let mut decision = decision();
        decision.assign_share_slug(slug("abcd1234ef")).unwrap();
        let err = decision.assign_share_slug(slug("zzzz9999zz")).unwrap_err();
        assert_eq!(err.code, ErrorCode::SlugAlreadyAssigned);
        assert_eq!(decision.share_slug().unwrap().as_str(), "abcd1234ef");
    }

    #[test]
    fn unpublish_keeps_slug() {
        let mut decision = decision();
        decision.assign_share_slug(slug("abcd1234ef")).unwrap();
        decision.publish().unwrap();
        decision.unpublish();

        assert!(!decision.is_public());
        assert_eq!(decision.share_slug().unwrap().as_str(), "abcd1234ef");
    }

    #[test]
    fn update_recomputes_and_keeps_sharing() {
        let mut decision = decision();
        decision.assign_share_slug(slug("abcd1234ef")).unwrap();
        decision.publish().unwrap();

        let mut edited = decision.to_draft();
        let first = edited.options[0].id.clone();
        edited
            .set_score(&first, &CriterionId::new("benefit").unwrap(), Score::MAX)
            .unwrap();
        decision.update_from_draft(edited).unwrap();

        assert_eq!(decision.recommended_option_id(), Some(&first));
        assert!(decision.is_public());
        assert_eq!(decision.share_slug().unwrap().as_str(), "abcd1234ef");
    }

    #[test]
    fn report_matches_stored_totals() {
        let decision = decision();
        assert_eq!(&decision.report().totals, decision.total_scores());
    }
}

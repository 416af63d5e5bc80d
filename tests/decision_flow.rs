//! Integration tests for the decision lifecycle.
//!
//! Covers the full path a user takes:
//! 1. Build a draft from options and a free-text context
//! 2. Score it and get a deterministic recommendation
//! 3. Save and publish it, then open it through the share slug
//! 4. Hide, re-share, list and delete it
//!
//! Uses the in-memory repository so no database is needed.

use std::sync::Arc;

use decision_helper::adapters::InMemoryDecisionRepository;
use decision_helper::application::{
    DeleteDecisionCommand, DeleteDecisionHandler, GetSharedDecisionHandler, GetSharedDecisionQuery,
    ListDecisionsHandler, ListDecisionsQuery, SaveDecisionCommand, SaveDecisionHandler,
    SetVisibilityCommand, SetVisibilityHandler,
};
use decision_helper::domain::decision::{DecisionDraft, DecisionError, DecisionOption};
use decision_helper::domain::foundation::{CriterionId, OptionId, Score, UserId, Weight};
use decision_helper::domain::sharing::SlugGenerator;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn option(id: &str) -> DecisionOption {
    DecisionOption::with_id(OptionId::new(id).unwrap(), id).unwrap()
}

fn criterion(id: &str) -> CriterionId {
    CriterionId::new(id).unwrap()
}

fn score(value: u8) -> Score {
    Score::try_new(value).unwrap()
}

fn tired_evening_draft() -> DecisionDraft {
    DecisionDraft::new(
        vec![option("study"), option("exercise"), option("friends")],
        "너무 피곤해서",
    )
    .with_title("퇴근 후 뭐하지?")
}

fn user() -> UserId {
    UserId::new("user-1").unwrap()
}

// =============================================================================
// Scoring
// =============================================================================

#[test]
fn fatigue_context_emphasizes_effort_only() {
    let draft = tired_evening_draft();

    for criterion in &draft.criteria {
        let expected = if criterion.id.as_str() == "effort" {
            Weight::EMPHASIZED
        } else {
            Weight::DEFAULT
        };
        assert_eq!(criterion.weight, expected, "criterion {}", criterion.id);
    }
}

#[test]
fn default_scores_give_equal_totals_and_first_option_wins() {
    let report = tired_evening_draft().evaluate();

    // Seven criteria at weight 3 plus effort at 4, every cell neutral.
    for id in ["study", "exercise", "friends"] {
        assert_eq!(report.totals.get(id), Some(&75));
    }
    assert_eq!(report.recommended_option_id, Some(OptionId::new("study").unwrap()));
}

#[test]
fn effort_breaks_a_tie_between_equal_totals() {
    let mut draft = tired_evening_draft();
    let study = OptionId::new("study").unwrap();
    let exercise = OptionId::new("exercise").unwrap();
    let friends = OptionId::new("friends").unwrap();

    // study: effort 2, cost 4 => 75 - 4 + 3 = 74
    draft.set_score(&study, &criterion("effort"), score(2)).unwrap();
    draft.set_score(&study, &criterion("cost"), score(4)).unwrap();
    // friends: effort 5, cost 1, time 2 => 75 + 8 - 6 - 3 = 74
    draft.set_score(&friends, &criterion("effort"), score(5)).unwrap();
    draft.set_score(&friends, &criterion("cost"), score(1)).unwrap();
    draft.set_score(&friends, &criterion("time"), score(2)).unwrap();
    // exercise: benefit 2 => 72
    draft.set_score(&exercise, &criterion("benefit"), score(2)).unwrap();

    let report = draft.evaluate();

    assert_eq!(report.totals.get("study"), Some(&74));
    assert_eq!(report.totals.get("friends"), Some(&74));
    assert_eq!(report.totals.get("exercise"), Some(&72));
    assert_eq!(report.recommended_option_id, Some(friends.clone()));

    let order: Vec<&str> = report.ranking.iter().map(|s| s.option_id.as_str()).collect();
    assert_eq!(order, vec!["friends", "study", "exercise"]);
    assert_eq!(report.ranking[0].top_contributions[0].id.as_str(), "effort");
    assert_eq!(report.ranking[0].top_contributions[0].total, 20);
}

#[test]
fn disabling_effort_removes_its_contribution() {
    let mut draft = tired_evening_draft();
    draft.toggle_criterion(&criterion("effort")).unwrap();

    let report = draft.evaluate();
    assert_eq!(report.totals.get("study"), Some(&63));
}

// =============================================================================
// Persistence and sharing
// =============================================================================

#[tokio::test]
async fn publish_view_hide_and_reshare() {
    let repo = Arc::new(InMemoryDecisionRepository::new());
    let generator = SlugGenerator::new();
    let save = SaveDecisionHandler::new(repo.clone(), generator);
    let visibility = SetVisibilityHandler::new(repo.clone(), generator);
    let shared = GetSharedDecisionHandler::new(repo.clone());

    let saved = save
        .handle(SaveDecisionCommand {
            user_id: user(),
            draft: tired_evening_draft(),
            publish: true,
        })
        .await
        .unwrap();
    let slug = saved.decision.share_slug().unwrap().to_string();
    assert_eq!(slug.len(), 10);

    let view = shared
        .handle(GetSharedDecisionQuery { slug: slug.clone() })
        .await
        .unwrap();
    assert_eq!(view.decision.id(), saved.decision.id());
    assert_eq!(view.report.recommended_option_id, saved.report.recommended_option_id);

    visibility
        .handle(SetVisibilityCommand {
            decision_id: *saved.decision.id(),
            user_id: user(),
            public: false,
        })
        .await
        .unwrap();
    let hidden = shared
        .handle(GetSharedDecisionQuery { slug: slug.clone() })
        .await;
    assert!(matches!(hidden, Err(DecisionError::NotShared(_))));

    let reshared = visibility
        .handle(SetVisibilityCommand {
            decision_id: *saved.decision.id(),
            user_id: user(),
            public: true,
        })
        .await
        .unwrap();
    assert_eq!(reshared.share_slug.map(|s| s.to_string()), Some(slug.clone()));
    assert!(shared.handle(GetSharedDecisionQuery { slug }).await.is_ok());
}

#[tokio::test]
async fn dashboard_lists_and_deletes() {
    let repo = Arc::new(InMemoryDecisionRepository::new());
    let save = SaveDecisionHandler::new(repo.clone(), SlugGenerator::new());
    let list = ListDecisionsHandler::new(repo.clone());
    let delete = DeleteDecisionHandler::new(repo.clone());

    let saved = save
        .handle(SaveDecisionCommand {
            user_id: user(),
            draft: tired_evening_draft(),
            publish: false,
        })
        .await
        .unwrap();

    let rows = list
        .handle(ListDecisionsQuery { user_id: user() })
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].recommended_label.as_deref(), Some("study"));
    assert!(rows[0].share_slug.is_none());

    delete
        .handle(DeleteDecisionCommand {
            decision_id: *saved.decision.id(),
            user_id: user(),
        })
        .await
        .unwrap();

    let rows = list
        .handle(ListDecisionsQuery { user_id: user() })
        .await
        .unwrap();
    assert!(rows.is_empty());
}

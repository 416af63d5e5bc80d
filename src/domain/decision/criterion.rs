//! Criteria options are compared against.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CriterionId, ValidationError, Weight};

/// Fewest enabled criteria that still make a meaningful comparison.
pub const MIN_ENABLED_CRITERIA: usize = 2;

/// A weighted dimension of comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    pub id: CriterionId,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub weight: Weight,
    pub enabled: bool,
}

impl Criterion {
    /// Creates a user-defined criterion with default weight, enabled.
    ///
    /// Label and description are trimmed; a blank description is dropped.
    pub fn custom(label: &str, description: &str) -> Result<Self, ValidationError> {
        let label = label.trim();
        if label.is_empty() {
            return Err(ValidationError::empty_field("criterion_label"));
        }
        let description = description.trim();
        Ok(Self {
            id: CriterionId::generate(),
            label: label.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            weight: Weight::DEFAULT,
            enabled: true,
        })
    }

    fn builtin(id: &'static str, label: &str, description: &str) -> Self {
        Self {
            id: CriterionId::builtin(id),
            label: label.to_string(),
            description: Some(description.to_string()),
            weight: Weight::DEFAULT,
            enabled: true,
        }
    }
}

/// The eight criteria every new decision starts with.
pub fn base_criteria() -> Vec<Criterion> {
    vec![
        Criterion::builtin("cost", "비용", "지출/기회비용"),
        Criterion::builtin("time", "시간", "소요 시간"),
        Criterion::builtin("effort", "노력/피로", "난이도/체력 소모"),
        Criterion::builtin("risk", "리스크", "실패 시 손해"),
        Criterion::builtin("benefit", "효용/이득", "기대 이득"),
        Criterion::builtin("enjoyment", "만족도", "주관적 만족"),
        Criterion::builtin("convenience", "편의성", "실행/준비의 번거로움"),
        Criterion::builtin("reversibility", "되돌리기 쉬움", "취소/변경 가능성"),
    ]
}

/// Returns the enabled criteria, preserving order.
pub fn enabled_criteria(criteria: &[Criterion]) -> Vec<&Criterion> {
    criteria.iter().filter(|c| c.enabled).collect()
}

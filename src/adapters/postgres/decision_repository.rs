//! PostgreSQL implementation of DecisionRepository.
//!
//! Options, criteria, scores and totals are stored as JSONB. The unique
//! index on `share_slug` is what makes slug collisions detectable.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::{PgPool, Row};

use crate::domain::analysis::TotalsMap;
use crate::domain::decision::{Criterion, Decision, DecisionOption, ScoreMatrix};
use crate::domain::foundation::{DecisionId, OptionId, Timestamp, UserId};
use crate::domain::sharing::ShareSlug;
use crate::ports::{DecisionRepository, DecisionStoreError};

/// SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

const SELECT_COLUMNS: &str = r#"
    SELECT id, user_id, title, context, options, criteria, scores, total_scores,
           recommended_option_id, share_slug, is_public, created_at, updated_at
    FROM decisions
"#;

/// PostgreSQL implementation of DecisionRepository.
#[derive(Clone)]
pub struct PostgresDecisionRepository {
    pool: PgPool,
}

impl PostgresDecisionRepository {
    /// Creates a new PostgresDecisionRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DecisionRepository for PostgresDecisionRepository {
    async fn insert(&self, decision: &Decision) -> Result<(), DecisionStoreError> {
        sqlx::query(
            r#"
            INSERT INTO decisions (
                id, user_id, title, context, options, criteria, scores, total_scores,
                recommended_option_id, share_slug, is_public, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(decision.id().as_uuid())
        .bind(decision.user_id().as_str())
        .bind(decision.title())
        .bind(decision.context())
        .bind(Json(decision.options()))
        .bind(Json(decision.criteria()))
        .bind(Json(decision.scores()))
        .bind(Json(decision.total_scores()))
        .bind(decision.recommended_option_id().map(OptionId::as_str))
        .bind(decision.share_slug().map(ShareSlug::as_str))
        .bind(decision.is_public())
        .bind(decision.created_at().as_datetime())
        .bind(decision.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error("insert", e))?;

        Ok(())
    }

    async fn update(&self, decision: &Decision) -> Result<(), DecisionStoreError> {
        let result = sqlx::query(
            r#"
            UPDATE decisions SET
                title = $2,
                context = $3,
                options = $4,
                criteria = $5,
                scores = $6,
                total_scores = $7,
                recommended_option_id = $8,
                share_slug = $9,
                is_public = $10,
                updated_at = $11
            WHERE id = $1
            "#,
        )
        .bind(decision.id().as_uuid())
        .bind(decision.title())
        .bind(decision.context())
        .bind(Json(decision.options()))
        .bind(Json(decision.criteria()))
        .bind(Json(decision.scores()))
        .bind(Json(decision.total_scores()))
        .bind(decision.recommended_option_id().map(OptionId::as_str))
        .bind(decision.share_slug().map(ShareSlug::as_str))
        .bind(decision.is_public())
        .bind(decision.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error("update", e))?;

        if result.rows_affected() == 0 {
            return Err(DecisionStoreError::NotFound(*decision.id()));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &DecisionId) -> Result<Option<Decision>, DecisionStoreError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", SELECT_COLUMNS))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_read_error("fetch decision", e))?;

        row.map(row_to_decision).transpose()
    }

    async fn find_by_slug(&self, slug: &ShareSlug) -> Result<Option<Decision>, DecisionStoreError> {
        let row = sqlx::query(&format!("{} WHERE share_slug = $1", SELECT_COLUMNS))
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_read_error("fetch decision by slug", e))?;

        row.map(row_to_decision).transpose()
    }

    async fn slug_exists(&self, slug: &ShareSlug) -> Result<bool, DecisionStoreError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM decisions WHERE share_slug = $1)")
                .bind(slug.as_str())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| map_read_error("check share slug", e))?;

        Ok(result.0)
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Decision>, DecisionStoreError> {
        let rows = sqlx::query(&format!(
            "{} WHERE user_id = $1 ORDER BY updated_at DESC",
            SELECT_COLUMNS
        ))
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_read_error("list decisions", e))?;

        rows.into_iter().map(row_to_decision).collect()
    }

    async fn delete(&self, id: &DecisionId) -> Result<(), DecisionStoreError> {
        let result = sqlx::query("DELETE FROM decisions WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| map_write_error("delete", e))?;

        if result.rows_affected() == 0 {
            return Err(DecisionStoreError::NotFound(*id));
        }

        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn unique_violation_constraint(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) => {
            Some(db_err.constraint().unwrap_or("unknown").to_string())
        }
        _ => None,
    }
}

fn map_write_error(action: &str, err: sqlx::Error) -> DecisionStoreError {
    if let Some(constraint) = unique_violation_constraint(&err) {
        return DecisionStoreError::UniquenessConflict { constraint };
    }
    tracing::error!(error = %err, action, "decision write failed");
    DecisionStoreError::Database(format!("Failed to {} decision: {}", action, err))
}

fn map_read_error(action: &str, err: sqlx::Error) -> DecisionStoreError {
    tracing::error!(error = %err, action, "decision read failed");
    DecisionStoreError::Database(format!("Failed to {}: {}", action, err))
}

fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DecisionStoreError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name)
        .map_err(|e| DecisionStoreError::Serialization(format!("Failed to get {}: {}", name, e)))
}

fn row_to_decision(row: PgRow) -> Result<Decision, DecisionStoreError> {
    let id: uuid::Uuid = column(&row, "id")?;
    let user_id: String = column(&row, "user_id")?;
    let Json(options): Json<Vec<DecisionOption>> = column(&row, "options")?;
    let Json(criteria): Json<Vec<Criterion>> = column(&row, "criteria")?;
    let Json(scores): Json<ScoreMatrix> = column(&row, "scores")?;
    let Json(total_scores): Json<TotalsMap> = column(&row, "total_scores")?;
    let recommended: Option<String> = column(&row, "recommended_option_id")?;
    let share_slug: Option<String> = column(&row, "share_slug")?;
    let created_at: chrono::DateTime<chrono::Utc> = column(&row, "created_at")?;
    let updated_at: chrono::DateTime<chrono::Utc> = column(&row, "updated_at")?;

    let invalid = |field: &str, e: crate::domain::foundation::ValidationError| {
        DecisionStoreError::Serialization(format!("Invalid {}: {}", field, e))
    };

    Ok(Decision::reconstitute(
        DecisionId::from_uuid(id),
        UserId::new(user_id).map_err(|e| invalid("user_id", e))?,
        column(&row, "title")?,
        column(&row, "context")?,
        options,
        criteria,
        scores,
        total_scores,
        recommended
            .filter(|value| !value.is_empty())
            .map(OptionId::new)
            .transpose()
            .map_err(|e| invalid("recommended_option_id", e))?,
        share_slug
            .filter(|value| !value.is_empty())
            .map(ShareSlug::parse)
            .transpose()
            .map_err(|e| invalid("share_slug", e))?,
        column(&row, "is_public")?,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}

// src/handlers/result.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sqlx::PgPool;
use validator::Validate;

use crate::{
    error::AppError,
    grading::grade,
    handlers::test::fetch_test,
    models::result::{ResultEntry, SubmitResultRequest},
};

/// Persists one graded submission.
///
/// Two accepted shapes:
/// * `answers` present: the test is loaded and the score computed here from
///   the stored keys; any client-supplied `score` is ignored. This is the
///   path the quiz page uses.
/// * `answers` absent: `score` must be supplied. Presence is checked via the
///   `Option`, so 0 is a valid score, not a missing field.
pub async fn submit_result(
    State(pool): State<PgPool>,
    Json(payload): Json<SubmitResultRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    // Presence enforced by `validate` above.
    let test_id = payload.test_id.unwrap_or_default();
    let student_name = payload.student_name.unwrap_or_default();
    let student_group = payload.student_group.unwrap_or_default();

    let score = match payload.answers {
        Some(answers) => {
            let test = fetch_test(&pool, test_id).await?;
            grade(&test.questions.0, &answers)
        }
        None => payload.score.ok_or(AppError::BadRequest(
            "Either score or answers must be provided.".to_string(),
        ))?,
    };

    sqlx::query("INSERT INTO results (test_id, student_name, student_group, score) VALUES ($1, $2, $3, $4)")
        .bind(test_id)
        .bind(&student_name)
        .bind(&student_group)
        .bind(score)
        .execute(&pool)
        .await
        .map_err(|e| {
            // Postgres error code for foreign key violation is 23503
            if e.to_string().contains("foreign key") || e.to_string().contains("23503") {
                AppError::BadRequest(format!("Test {} does not exist.", test_id))
            } else {
                tracing::error!("Failed to save result: {:?}", e);
                AppError::InternalServerError(e.to_string())
            }
        })?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "Result saved successfully.",
            "score": score,
        })),
    ))
}

/// Lists every submission for a test, ordered by group then name so the
/// instructor sees one class at a time. An empty list is not an error.
pub async fn list_results(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let results = sqlx::query_as::<_, ResultEntry>(
        "SELECT student_name, student_group, score, created_at
         FROM results
         WHERE test_id = $1
         ORDER BY student_group, student_name",
    )
    .bind(id)
    .fetch_all(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to fetch results for test {}: {:?}", id, e);
        AppError::InternalServerError(e.to_string())
    })?;

    Ok(Json(results))
}

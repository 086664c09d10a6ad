// src/models/result.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// DTO for submitting a result.
///
/// Either `answers` is present and the server grades the submission against
/// the stored keys, or `score` must be supplied directly. `score` stays an
/// `Option` so that 0 survives the presence check.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitResultRequest {
    #[validate(required(message = "test_id is required."))]
    pub test_id: Option<i64>,
    #[validate(required(message = "student_name is required."), length(min = 1, message = "student_name must not be empty."))]
    pub student_name: Option<String>,
    #[validate(required(message = "student_group is required."), length(min = 1, message = "student_group must not be empty."))]
    pub student_group: Option<String>,
    pub score: Option<i64>,
    pub answers: Option<Vec<String>>,
}

/// Row shape for the instructor's results listing.
#[derive(Debug, Serialize, FromRow)]
pub struct ResultEntry {
    pub student_name: String,
    pub student_group: String,
    pub score: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

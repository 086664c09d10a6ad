// src/handlers/pages.rs

use askama::Template;
use axum::{
    extract::Path,
    response::{Html, IntoResponse},
};

use crate::error::AppError;

/// Instructor dashboard: create a test, look up results.
/// Self-contained document; the embedded script drives the JSON API.
#[derive(Template)]
#[template(path = "instructor.html")]
struct InstructorPage;

/// Student quiz page. The test id is interpolated into the embedded script,
/// which then loads the answer-free projection and submits raw answers for
/// server-side grading.
#[derive(Template)]
#[template(path = "quiz.html")]
struct QuizPage {
    test_id: i64,
}

pub async fn instructor_page() -> Result<impl IntoResponse, AppError> {
    Ok(Html(InstructorPage.render()?))
}

pub async fn quiz_page(Path(id): Path<i64>) -> Result<impl IntoResponse, AppError> {
    Ok(Html(QuizPage { test_id: id }.render()?))
}

// src/routes.rs

use axum::{
    Router,
    http::Method,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{pages, result, test},
    state::AppState,
};

/// Assembles the main application router.
///
/// * API routes under /api, HTML views at / and /quiz/:id.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (pool + config).
pub fn create_router(state: AppState) -> Router {
    // Quiz links are distributed out-of-band and opened from anywhere.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    let test_routes = Router::new()
        .route("/", post(test::create_test))
        .route("/{id}", get(test::get_test))
        .route("/{id}/quiz", get(test::get_quiz))
        .route("/{id}/results", get(result::list_results));

    let result_routes = Router::new().route("/", post(result::submit_result));

    Router::new()
        .route("/", get(pages::instructor_page))
        .route("/quiz/{id}", get(pages::quiz_page))
        .nest("/api/tests", test_routes)
        .nest("/api/results", result_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

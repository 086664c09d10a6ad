use crate::config::Config;
use axum::extract::FromRef;
use sqlx::PgPool;

/// Process-wide shared state: the connection pool and the loaded config.
/// Constructed once in `main` and injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Config,
}

impl FromRef<AppState> for PgPool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

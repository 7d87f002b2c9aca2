//! Health check endpoints

use axum::{Router, extract::State, response::IntoResponse, routing::get};
use axum_helpers::{HealthCheckFuture, run_health_checks};

use crate::state::AppState;

/// Create a health check router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Readiness check - verifies MongoDB through the connection cache
async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    let cache = &state.cache;
    let checks: Vec<(&str, HealthCheckFuture)> = vec![(
        "mongodb",
        Box::pin(async move {
            if database::mongodb::check_cache_health(cache).await {
                Ok(())
            } else {
                Err("unreachable".to_string())
            }
        }),
    )];

    match run_health_checks(checks).await {
        Ok(response) => response.into_response(),
        Err(response) => response.into_response(),
    }
}

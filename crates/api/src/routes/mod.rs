pub mod health;
pub mod mint_jobs;
pub mod reconcile;
pub mod releases;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /releases/{id}/mint        enqueue a batch mint (POST)
///
/// /mint-jobs                 artist notification feed (GET ?artist=...)
/// /mint-jobs/{id}            job progress (GET)
/// /mint-jobs/{id}/seen       dismiss notification (POST)
///
/// /reconcile                 run all reconciliation passes (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/releases", releases::router())
        .nest("/mint-jobs", mint_jobs::router())
        .nest("/reconcile", reconcile::router())
}

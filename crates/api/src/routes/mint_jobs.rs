//! Route definitions for the `/mint-jobs` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::mint_jobs;
use crate::state::AppState;

/// Routes mounted at `/mint-jobs`.
///
/// ```text
/// GET    /                -> list_for_artist
/// GET    /{id}            -> get_progress
/// POST   /{id}/seen       -> mark_seen
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(mint_jobs::list_for_artist))
        .route("/{id}", get(mint_jobs::get_progress))
        .route("/{id}/seen", post(mint_jobs::mark_seen))
}

//! Route definitions for the `/releases` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::releases;
use crate::state::AppState;

/// Routes mounted at `/releases`.
///
/// ```text
/// POST   /{id}/mint       -> enqueue_mint
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}/mint", post(releases::enqueue_mint))
}

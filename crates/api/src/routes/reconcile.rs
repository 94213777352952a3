//! Route definitions for the `/reconcile` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::reconcile;
use crate::state::AppState;

/// Routes mounted at `/reconcile`.
///
/// ```text
/// POST   /                -> run_reconciliation
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(reconcile::run_reconciliation))
}

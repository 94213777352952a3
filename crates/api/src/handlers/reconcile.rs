//! Handler for the on-demand reconciliation trigger.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use soundmint_reconcile::run_all;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/reconcile
///
/// Run all three reconciliation passes inline and return the aggregate
/// report. Row-level failures are inside the report; only a pass-level
/// failure (pool or ledger down) maps to an error response.
pub async fn run_reconciliation(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    tracing::info!("On-demand reconciliation triggered");

    let report = run_all(&state.pool, state.ledger.as_ref(), &state.platform_wallet).await?;

    Ok(Json(DataResponse { data: report }))
}

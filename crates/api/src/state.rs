use std::sync::Arc;

use soundmint_ledger::LedgerClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: sqlx::PgPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Ledger client, used by the on-demand reconciliation trigger.
    pub ledger: Arc<dyn LedgerClient>,
    /// Platform wallet address; on-ledger custody is checked against it.
    pub platform_wallet: String,
}

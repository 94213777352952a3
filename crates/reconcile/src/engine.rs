//! Full reconciliation run.

use sqlx::PgPool;
use soundmint_ledger::LedgerClient;

use crate::counter_sync::sync_counters;
use crate::custody_sync::sync_legacy_custody;
use crate::renumber::renumber_editions;
use crate::report::ReconcileReport;
use crate::ReconcileError;

/// Run all three passes in order: counter sync, custody sync, edition
/// renumbering. Each pass is idempotent; so is the whole run.
pub async fn run_all(
    pool: &PgPool,
    ledger: &dyn LedgerClient,
    platform_wallet: &str,
) -> Result<ReconcileReport, ReconcileError> {
    let counters = sync_counters(pool).await?;
    let custody = sync_legacy_custody(pool, ledger, platform_wallet).await?;
    let editions = renumber_editions(pool).await?;

    let report = ReconcileReport {
        passes: vec![counters, custody, editions],
    };
    tracing::info!(
        updated = report.total_updated(),
        errors = report.total_errors(),
        "Reconciliation run finished",
    );
    Ok(report)
}

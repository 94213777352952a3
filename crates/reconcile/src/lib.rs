//! Reconciliation engine.
//!
//! Repairs drift between cached counters, sale records, and on-ledger
//! custody. Three independent, idempotent passes:
//!
//! - **counter sync**: track `sold_count` and release `sold_editions`
//!   rebuilt from sale rows;
//! - **custody sync**: legacy pre-queue releases rebuilt from the tokens
//!   still held by the platform wallet;
//! - **edition renumbering**: canonical 1-based edition numbers assigned
//!   by sale chronology.
//!
//! Passes are best-effort bulk repair: a row failure is collected in the
//! pass report and the pass moves on.

pub mod counter_sync;
pub mod custody_sync;
pub mod engine;
pub mod renumber;
pub mod report;

pub use engine::run_all;
pub use report::{PassReport, ReconcileReport, RowError};

/// A pass-level failure: the pass could not run at all. Per-row failures
/// never surface here; they live in the pass report.
#[derive(Debug, thiserror::Error)]
pub enum ReconcileError {
    #[error("Database error: {0}")]
    Db(#[from] sqlx::Error),

    #[error("Ledger error: {0}")]
    Ledger(#[from] soundmint_ledger::LedgerError),
}

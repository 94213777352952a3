//! The polling loop.
//!
//! Claims the oldest pending job via `SELECT FOR UPDATE SKIP LOCKED`
//! ([`MintJobRepo::claim_next_pending`]) and runs it to completion
//! before looking again, so jobs are processed strictly oldest-first.

use std::sync::Arc;

use sqlx::PgPool;
use tokio_util::sync::CancellationToken;
use soundmint_db::repositories::MintJobRepo;
use soundmint_ledger::LedgerClient;

use crate::config::WorkerConfig;
use crate::mint_job::run_job;

/// The mint worker process.
pub struct MintWorker {
    pool: PgPool,
    ledger: Arc<dyn LedgerClient>,
    config: WorkerConfig,
    platform_wallet: String,
}

impl MintWorker {
    pub fn new(
        pool: PgPool,
        ledger: Arc<dyn LedgerClient>,
        config: WorkerConfig,
        platform_wallet: String,
    ) -> Self {
        Self {
            pool,
            ledger,
            config,
            platform_wallet,
        }
    }

    /// Run the worker loop until the cancellation token is triggered.
    pub async fn run(&self, cancel: CancellationToken) {
        let mut ticker = tokio::time::interval(self.config.poll_interval);
        tracing::info!(
            poll_interval_ms = self.config.poll_interval.as_millis() as u64,
            "Mint worker started",
        );

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::info!("Mint worker shutting down");
                    break;
                }
                _ = ticker.tick() => {
                    if let Err(e) = self.drain_pending(&cancel).await {
                        tracing::error!(error = %e, "Worker cycle failed");
                    }
                }
            }
        }
    }

    /// Process pending jobs back to back until the queue is empty.
    async fn drain_pending(&self, cancel: &CancellationToken) -> Result<(), sqlx::Error> {
        while !cancel.is_cancelled() {
            let Some(job) = MintJobRepo::claim_next_pending(&self.pool).await? else {
                break;
            };

            tracing::info!(
                job_id = job.id,
                release_id = job.release_id,
                total_units = job.total_units,
                "Claimed mint job",
            );
            run_job(
                &self.pool,
                self.ledger.as_ref(),
                &self.config,
                &self.platform_wallet,
                job,
                cancel,
            )
            .await;
        }
        Ok(())
    }
}

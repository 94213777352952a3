//! Per-job mint execution.
//!
//! A claimed job runs the full per-edition loop: verify the minter
//! delegation once, then mint track by track, edition by edition, in
//! order. A single failed edition is logged and skipped; job-fatal
//! conditions (bad payload, missing release, no tracks, authorization)
//! abort the whole job. Either way the job always lands in a terminal
//! status, and progress is persisted after every attempt so polling
//! clients see it live.

use sqlx::PgPool;
use tokio_util::sync::CancellationToken;
use soundmint_core::minting::MintJobPayload;
use soundmint_core::token_uri::encode_token_uri;
use soundmint_core::types::DbId;
use soundmint_db::models::mint_job::MintJob;
use soundmint_db::models::nft::CreateNft;
use soundmint_db::models::track::Track;
use soundmint_db::repositories::{MintJobRepo, NftRepo, ReleaseRepo, TrackRepo};
use soundmint_ledger::{LedgerClient, LedgerError, MintRequest};

use crate::config::WorkerConfig;

/// Job-fatal failures. Per-unit failures never become one of these;
/// they are logged inside the loop and the loop moves on.
#[derive(Debug, thiserror::Error)]
pub enum JobError {
    #[error("Release {0} not found")]
    ReleaseNotFound(DbId),

    #[error("Release has no tracks to mint")]
    NoTracks,

    /// The artist never ran the one-time delegation that lets the
    /// platform wallet mint on their behalf. Every unit would fail
    /// identically, so nothing is attempted.
    #[error("Artist {artist} has not authorized the platform wallet as minter")]
    MinterNotAuthorized { artist: String },

    #[error("Invalid job payload: {0}")]
    BadPayload(String),

    #[error("Worker shutting down")]
    Shutdown,

    #[error("Database error: {0}")]
    Db(#[from] sqlx::Error),

    /// Transport failure during the authorization check. Mint-time
    /// ledger errors are per-unit and handled inside the loop.
    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),
}

/// Execute one claimed job to a terminal status.
///
/// Never returns an error: fatal failures are written to the job row
/// with the message preserved verbatim for the operator.
pub async fn run_job(
    pool: &PgPool,
    ledger: &dyn LedgerClient,
    config: &WorkerConfig,
    platform_wallet: &str,
    job: MintJob,
    cancel: &CancellationToken,
) {
    let job_id = job.id;
    match execute(pool, ledger, config, platform_wallet, job, cancel).await {
        Ok(minted) => {
            tracing::info!(job_id, minted, "Mint job complete");
        }
        Err(e) => {
            tracing::error!(job_id, error = %e, "Mint job failed");
            if let Err(db_err) = MintJobRepo::fail(pool, job_id, &e.to_string()).await {
                tracing::error!(job_id, error = %db_err, "Failed to mark job as failed");
            }
        }
    }
}

async fn execute(
    pool: &PgPool,
    ledger: &dyn LedgerClient,
    config: &WorkerConfig,
    platform_wallet: &str,
    job: MintJob,
    cancel: &CancellationToken,
) -> Result<i32, JobError> {
    let payload = job
        .mint_payload()
        .map_err(|e| JobError::BadPayload(e.to_string()))?;

    let release = ReleaseRepo::find_by_id(pool, job.release_id)
        .await?
        .ok_or(JobError::ReleaseNotFound(job.release_id))?;
    let tracks = TrackRepo::for_release(pool, release.id).await?;
    if tracks.is_empty() {
        return Err(JobError::NoTracks);
    }

    // One-time delegation check; skipped when the platform mints for
    // its own account.
    if payload.artist_address != platform_wallet {
        let authorized = ledger
            .verify_minter(&payload.artist_address, platform_wallet)
            .await?;
        if !authorized {
            return Err(JobError::MinterNotAuthorized {
                artist: payload.artist_address,
            });
        }
    }

    // All editions of a release share one taxon as their group tag.
    let taxon = (release.id % i64::from(u32::MAX)) as u32;
    let mut minted: i32 = 0;

    for track in &tracks {
        for n in 1..=payload.quantity {
            if cancel.is_cancelled() {
                return Err(JobError::Shutdown);
            }

            let edition = track.total_editions + n as i32;
            if mint_unit(pool, ledger, platform_wallet, &payload, track, taxon, edition).await {
                minted += 1;
                TrackRepo::add_editions(pool, track.id, 1).await?;
            }

            // Progress is live even for failed attempts.
            MintJobRepo::update_progress(pool, job.id, minted).await?;
            tokio::time::sleep(config.mint_throttle).await;
        }
    }

    ReleaseRepo::add_minted_editions(pool, release.id, minted).await?;
    MintJobRepo::complete(pool, job.id, minted).await?;
    Ok(minted)
}

/// Mint a single edition. Returns whether the mint validated; all
/// failure modes are logged here and absorbed.
async fn mint_unit(
    pool: &PgPool,
    ledger: &dyn LedgerClient,
    platform_wallet: &str,
    payload: &MintJobPayload,
    track: &Track,
    taxon: u32,
    edition: i32,
) -> bool {
    let Some(uri) = &track.metadata_uri else {
        tracing::warn!(track_id = track.id, "Track has no metadata URI; skipping edition");
        return false;
    };

    let request = MintRequest {
        issuer: Some(payload.artist_address.clone()),
        uri_hex: encode_token_uri(uri),
        transfer_fee_bps: payload.transfer_fee_bps,
        taxon,
    };

    let outcome = match ledger.mint_nft(&request).await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!(
                track_id = track.id,
                edition,
                error = %e,
                "Edition mint failed; continuing with next unit",
            );
            return false;
        }
    };

    match outcome.token_id {
        Some(token_id) => {
            let unit = CreateNft {
                token_id,
                track_id: track.id,
                release_id: track.release_id,
                edition_number: edition,
                owner_address: platform_wallet.to_string(),
                mint_tx_hash: Some(outcome.tx_hash),
            };
            match NftRepo::insert_minted(pool, &unit).await {
                Ok(true) => {}
                Ok(false) => {
                    // Index lag surfaced the same token twice.
                    tracing::debug!(token_id = %unit.token_id, "Token already recorded; skipping");
                }
                Err(e) => {
                    tracing::error!(
                        token_id = %unit.token_id,
                        error = %e,
                        "Minted but failed to record inventory row",
                    );
                }
            }
        }
        None => {
            // Minted but unindexed: counted, flagged for manual reconciliation.
            tracing::warn!(
                track_id = track.id,
                tx_hash = %outcome.tx_hash,
                "Minted edition has no extractable token ID",
            );
        }
    }

    true
}

//! Repository for the `mint_jobs` table.
//!
//! Status transitions are monotonic (pending -> minting -> complete or
//! failed) and every transition query guards on the current status, so a
//! terminal row can never be moved again.

use sqlx::PgPool;
use soundmint_core::types::DbId;

use crate::models::mint_job::{EnqueueMintJob, MintJob};
use crate::models::status::MintJobStatus;

/// Column list for `mint_jobs` queries.
const COLUMNS: &str = "\
    id, release_id, status_id, total_units, minted_count, payload, \
    error_message, seen, created_at, started_at, completed_at, updated_at";

/// How far back the artist notification feed reaches.
const FEED_WINDOW_DAYS: i32 = 7;

/// Provides queue operations for mint jobs.
pub struct MintJobRepo;

impl MintJobRepo {
    /// Insert a new `pending` job. Returns immediately with the job row;
    /// the ledger is never touched here.
    pub async fn enqueue(pool: &PgPool, input: &EnqueueMintJob) -> Result<MintJob, sqlx::Error> {
        let payload = serde_json::to_value(&input.payload)
            .map_err(|e| sqlx::Error::Encode(Box::new(e)))?;
        let query = format!(
            "INSERT INTO mint_jobs (release_id, status_id, total_units, payload) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MintJob>(&query)
            .bind(input.release_id)
            .bind(MintJobStatus::Pending.id())
            .bind(input.total_units)
            .bind(payload)
            .fetch_one(pool)
            .await
    }

    /// Find a job by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MintJob>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM mint_jobs WHERE id = $1");
        sqlx::query_as::<_, MintJob>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Atomically claim the oldest pending job, transitioning it to
    /// `minting` and stamping `started_at`.
    ///
    /// Uses `SELECT FOR UPDATE SKIP LOCKED` so two worker instances run
    /// by mistake cannot both claim the same job.
    pub async fn claim_next_pending(pool: &PgPool) -> Result<Option<MintJob>, sqlx::Error> {
        let query = format!(
            "UPDATE mint_jobs \
             SET status_id = $1, started_at = NOW(), updated_at = NOW() \
             WHERE id = ( \
                 SELECT id FROM mint_jobs \
                 WHERE status_id = $2 \
                 ORDER BY created_at ASC \
                 LIMIT 1 \
                 FOR UPDATE SKIP LOCKED \
             ) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MintJob>(&query)
            .bind(MintJobStatus::Minting.id())
            .bind(MintJobStatus::Pending.id())
            .fetch_optional(pool)
            .await
    }

    /// Persist progress after a mint attempt. `minted_count` only ever
    /// grows; polling clients read this between attempts.
    pub async fn update_progress(
        pool: &PgPool,
        job_id: DbId,
        minted_count: i32,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE mint_jobs \
             SET minted_count = GREATEST(minted_count, $2), updated_at = NOW() \
             WHERE id = $1 AND status_id = $3",
        )
        .bind(job_id)
        .bind(minted_count)
        .bind(MintJobStatus::Minting.id())
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Mark a job `complete` with its final minted count.
    ///
    /// The final count may be below `total_units` when some editions
    /// failed; that shortfall is surfaced to clients, not hidden.
    pub async fn complete(
        pool: &PgPool,
        job_id: DbId,
        minted_count: i32,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE mint_jobs \
             SET status_id = $2, minted_count = $3, completed_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND status_id = $4",
        )
        .bind(job_id)
        .bind(MintJobStatus::Complete.id())
        .bind(minted_count)
        .bind(MintJobStatus::Minting.id())
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Mark a job `failed`, preserving the error message verbatim for
    /// operator visibility. `minted_count` keeps its last persisted value;
    /// already-recorded editions are not rolled back.
    pub async fn fail(pool: &PgPool, job_id: DbId, error: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE mint_jobs \
             SET status_id = $2, error_message = $3, completed_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND status_id = $4",
        )
        .bind(job_id)
        .bind(MintJobStatus::Failed.id())
        .bind(error)
        .bind(MintJobStatus::Minting.id())
        .execute(pool)
        .await?;
        Ok(())
    }

    /// List an artist's jobs from the notification window (last 7 days),
    /// newest first. The artist address lives in the JSONB payload.
    pub async fn list_recent_for_artist(
        pool: &PgPool,
        artist_address: &str,
    ) -> Result<Vec<MintJob>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM mint_jobs \
             WHERE payload->>'artist_address' = $1 \
               AND created_at > NOW() - make_interval(days => $2) \
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, MintJob>(&query)
            .bind(artist_address)
            .bind(FEED_WINDOW_DAYS)
            .fetch_all(pool)
            .await
    }

    /// Dismiss a job notification. Only the job's owning artist may do
    /// so; returns `false` when the job is absent or the address does
    /// not match.
    pub async fn mark_seen(
        pool: &PgPool,
        job_id: DbId,
        artist_address: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE mint_jobs \
             SET seen = true, updated_at = NOW() \
             WHERE id = $1 AND payload->>'artist_address' = $2",
        )
        .bind(job_id)
        .bind(artist_address)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}

//! Repository for the `releases` table.

use sqlx::PgPool;
use soundmint_core::types::DbId;

use crate::models::release::{CreateRelease, Release, ReleaseCounters};

/// Column list for `releases` queries.
const COLUMNS: &str = "\
    id, title, artist_address, release_type, total_editions, sold_editions, \
    is_minted, mint_fee_paid, created_at, updated_at";

/// Provides CRUD operations for releases.
pub struct ReleaseRepo;

impl ReleaseRepo {
    /// Insert a new release, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateRelease) -> Result<Release, sqlx::Error> {
        let query = format!(
            "INSERT INTO releases (title, artist_address, release_type, mint_fee_paid) \
             VALUES ($1, $2, COALESCE($3, 'single'), COALESCE($4, false)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Release>(&query)
            .bind(&input.title)
            .bind(&input.artist_address)
            .bind(&input.release_type)
            .bind(input.mint_fee_paid)
            .fetch_one(pool)
            .await
    }

    /// Find a release by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Release>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM releases WHERE id = $1");
        sqlx::query_as::<_, Release>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Record the outcome of a completed mint batch: grow the edition
    /// total and flip the minted flag.
    pub async fn add_minted_editions(
        pool: &PgPool,
        id: DbId,
        minted: i32,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE releases \
             SET total_editions = total_editions + $2, is_minted = true, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(minted)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Overwrite the cached `sold_editions` counter.
    pub async fn set_sold_editions(pool: &PgPool, id: DbId, sold: i32) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE releases SET sold_editions = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(sold)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Counter fields for every release the counter-sync pass owns.
    /// Legacy releases are excluded for the same reason their tracks are:
    /// sale rows say nothing about them.
    pub async fn list_counters(pool: &PgPool) -> Result<Vec<ReleaseCounters>, sqlx::Error> {
        sqlx::query_as::<_, ReleaseCounters>(
            "SELECT id, sold_editions FROM releases \
             WHERE NOT (is_minted AND NOT mint_fee_paid) \
             ORDER BY id",
        )
        .fetch_all(pool)
        .await
    }

    /// Releases from the pre-queue era: minted on-ledger but with no mint
    /// fee recorded. Only this cohort is reconciled against ledger custody.
    pub async fn legacy_releases(pool: &PgPool) -> Result<Vec<Release>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM releases \
             WHERE is_minted = true AND mint_fee_paid = false \
             ORDER BY id"
        );
        sqlx::query_as::<_, Release>(&query).fetch_all(pool).await
    }
}

//! Repository for the `nfts` (inventory) table.

use sqlx::PgPool;
use soundmint_core::types::DbId;

use crate::models::nft::{CreateNft, Nft};
use crate::models::status::NftStatus;

/// Column list for `nfts` queries.
const COLUMNS: &str = "\
    id, token_id, track_id, release_id, edition_number, status_id, \
    owner_address, mint_tx_hash, minted_at, updated_at";

/// Provides CRUD operations for inventory units.
pub struct NftRepo;

impl NftRepo {
    /// Record a freshly minted edition as `available`.
    ///
    /// Returns `false` when a row with the same token ID already exists
    /// (index lag can surface the same mint twice); the duplicate is
    /// skipped silently via `ON CONFLICT DO NOTHING`.
    pub async fn insert_minted(pool: &PgPool, input: &CreateNft) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO nfts \
                 (token_id, track_id, release_id, edition_number, status_id, \
                  owner_address, mint_tx_hash) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             ON CONFLICT (token_id) DO NOTHING",
        )
        .bind(&input.token_id)
        .bind(input.track_id)
        .bind(input.release_id)
        .bind(input.edition_number)
        .bind(NftStatus::Available.id())
        .bind(&input.owner_address)
        .bind(&input.mint_tx_hash)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Find an inventory unit by its on-ledger token ID.
    pub async fn find_by_token_id(
        pool: &PgPool,
        token_id: &str,
    ) -> Result<Option<Nft>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM nfts WHERE token_id = $1");
        sqlx::query_as::<_, Nft>(&query)
            .bind(token_id)
            .fetch_optional(pool)
            .await
    }

    /// Propagate a canonical edition number to the inventory row, joined
    /// by token ID. Returns `false` when no such unit exists (the sale
    /// may predate inventory tracking).
    pub async fn set_edition_number(
        pool: &PgPool,
        token_id: &str,
        edition_number: i32,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE nfts SET edition_number = $2, updated_at = NOW() WHERE token_id = $1",
        )
        .bind(token_id)
        .bind(edition_number)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Units still sellable for a track.
    pub async fn count_available_for_track(
        pool: &PgPool,
        track_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM nfts WHERE track_id = $1 AND status_id = $2")
            .bind(track_id)
            .bind(NftStatus::Available.id())
            .fetch_one(pool)
            .await
    }

    /// Repair tooling: reset reservations abandoned before the cutoff
    /// back to `available`. Returns the number of units released.
    pub async fn release_abandoned_reservations(
        pool: &PgPool,
        older_than_minutes: i32,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE nfts \
             SET status_id = $1, updated_at = NOW() \
             WHERE status_id = $2 \
               AND updated_at < NOW() - make_interval(mins => $3)",
        )
        .bind(NftStatus::Available.id())
        .bind(NftStatus::Pending.id())
        .bind(older_than_minutes)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}

//! Repository for the `tracks` table.

use sqlx::PgPool;
use soundmint_core::types::DbId;

use crate::models::track::{CreateTrack, Track, TrackSaleCount};

/// Column list for `tracks` queries.
const COLUMNS: &str = "\
    id, release_id, title, track_index, metadata_uri, total_editions, \
    sold_count, created_at, updated_at";

/// Provides CRUD operations for tracks.
pub struct TrackRepo;

impl TrackRepo {
    /// Insert a new track, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTrack) -> Result<Track, sqlx::Error> {
        let query = format!(
            "INSERT INTO tracks (release_id, title, track_index, metadata_uri) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Track>(&query)
            .bind(input.release_id)
            .bind(&input.title)
            .bind(input.track_index)
            .bind(&input.metadata_uri)
            .fetch_one(pool)
            .await
    }

    /// A release's tracks in track order. The mint loop depends on this
    /// ordering being stable.
    pub async fn for_release(pool: &PgPool, release_id: DbId) -> Result<Vec<Track>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tracks WHERE release_id = $1 ORDER BY track_index ASC"
        );
        sqlx::query_as::<_, Track>(&query)
            .bind(release_id)
            .fetch_all(pool)
            .await
    }

    /// Overwrite the cached `sold_count` counter.
    pub async fn set_sold_count(pool: &PgPool, id: DbId, sold: i32) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE tracks SET sold_count = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(sold)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Grow a track's edition total after a mint batch.
    pub async fn add_editions(pool: &PgPool, id: DbId, minted: i32) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE tracks \
             SET total_editions = total_editions + $2, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(minted)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Every track's stored `sold_count` next to the authoritative count
    /// of its sale rows, for the counter-sync pass. Tracks of legacy
    /// releases (minted, no mint fee recorded) are excluded: they have no
    /// sale rows, and their counters belong to the custody-sync pass.
    pub async fn list_with_sale_counts(pool: &PgPool) -> Result<Vec<TrackSaleCount>, sqlx::Error> {
        sqlx::query_as::<_, TrackSaleCount>(
            "SELECT t.id, t.release_id, t.sold_count, COUNT(s.id) AS sale_count \
             FROM tracks t \
             JOIN releases r ON r.id = t.release_id \
             LEFT JOIN sales s ON s.track_id = t.id \
             WHERE NOT (r.is_minted AND NOT r.mint_fee_paid) \
             GROUP BY t.id, t.release_id, t.sold_count \
             ORDER BY t.id",
        )
        .fetch_all(pool)
        .await
    }
}

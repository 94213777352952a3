//! Repository for the `sales` table.

use sqlx::PgPool;
use soundmint_core::types::DbId;

use crate::models::sale::{CreateSale, Sale};

/// Column list for `sales` queries.
const COLUMNS: &str = "\
    id, track_id, release_id, token_id, edition_number, buyer_address, \
    seller_address, price_drops, fee_drops, tx_hash, sale_type, created_at";

/// Provides CRUD operations for sales.
pub struct SaleRepo;

impl SaleRepo {
    /// Record a sale, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSale) -> Result<Sale, sqlx::Error> {
        let query = format!(
            "INSERT INTO sales \
                 (track_id, release_id, token_id, buyer_address, seller_address, \
                  price_drops, fee_drops, tx_hash, sale_type) \
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, 0), $8, COALESCE($9, 'primary')) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Sale>(&query)
            .bind(input.track_id)
            .bind(input.release_id)
            .bind(&input.token_id)
            .bind(&input.buyer_address)
            .bind(&input.seller_address)
            .bind(input.price_drops)
            .bind(input.fee_drops)
            .bind(&input.tx_hash)
            .bind(&input.sale_type)
            .fetch_one(pool)
            .await
    }

    /// A track's sales in sale order: `(created_at, id)` ascending. This
    /// ordering defines canonical edition numbering.
    pub async fn list_for_track_chronological(
        pool: &PgPool,
        track_id: DbId,
    ) -> Result<Vec<Sale>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sales \
             WHERE track_id = $1 \
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Sale>(&query)
            .bind(track_id)
            .fetch_all(pool)
            .await
    }

    /// IDs of tracks that have at least one sale, for the renumbering pass.
    pub async fn track_ids_with_sales(pool: &PgPool) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar("SELECT DISTINCT track_id FROM sales ORDER BY track_id")
            .fetch_all(pool)
            .await
    }

    /// Write a sale's canonical edition number.
    pub async fn set_edition_number(
        pool: &PgPool,
        sale_id: DbId,
        edition_number: i32,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE sales SET edition_number = $2 WHERE id = $1")
            .bind(sale_id)
            .bind(edition_number)
            .execute(pool)
            .await?;
        Ok(())
    }
}

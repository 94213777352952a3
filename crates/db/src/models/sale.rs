//! Sale entity model and DTOs.

use serde::{Deserialize, Serialize};
use soundmint_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `sales` table: one ownership transfer of one token.
///
/// `edition_number` is written by the reconciliation engine (order of
/// sale), not by the sale-processing flow that inserts the row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Sale {
    pub id: DbId,
    pub track_id: DbId,
    pub release_id: DbId,
    pub token_id: String,
    pub edition_number: Option<i32>,
    pub buyer_address: String,
    pub seller_address: String,
    pub price_drops: i64,
    pub fee_drops: i64,
    pub tx_hash: Option<String>,
    /// `primary` (platform sale) or `secondary` (resale).
    pub sale_type: String,
    pub created_at: Timestamp,
}

/// DTO for recording a sale.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSale {
    pub track_id: DbId,
    pub release_id: DbId,
    pub token_id: String,
    pub buyer_address: String,
    pub seller_address: String,
    pub price_drops: i64,
    pub fee_drops: Option<i64>,
    pub tx_hash: Option<String>,
    pub sale_type: Option<String>,
}

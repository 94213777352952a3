//! Inventory unit (minted edition) model and DTOs.

use serde::Serialize;
use soundmint_core::types::{DbId, Timestamp};
use sqlx::FromRow;

use super::status::StatusId;

/// A row from the `nfts` table: one minted edition of one track.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Nft {
    pub id: DbId,
    /// On-ledger NFTokenID; unique.
    pub token_id: String,
    pub track_id: DbId,
    pub release_id: DbId,
    /// 1-based, dense per track once reconciled. Provisional at mint
    /// time; canonical numbering is by sale chronology.
    pub edition_number: i32,
    pub status_id: StatusId,
    pub owner_address: String,
    pub mint_tx_hash: Option<String>,
    pub minted_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for recording a freshly minted edition.
#[derive(Debug, Clone)]
pub struct CreateNft {
    pub token_id: String,
    pub track_id: DbId,
    pub release_id: DbId,
    pub edition_number: i32,
    pub owner_address: String,
    pub mint_tx_hash: Option<String>,
}

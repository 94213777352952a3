//! Track entity model and DTOs.

use serde::{Deserialize, Serialize};
use soundmint_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `tracks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Track {
    pub id: DbId,
    pub release_id: DbId,
    pub title: String,
    /// Position within the release; the mint loop walks tracks in this order.
    pub track_index: i32,
    /// `ipfs://<cid>` metadata pointer, shared by all editions of the track.
    pub metadata_uri: Option<String>,
    pub total_editions: i32,
    pub sold_count: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new track.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTrack {
    pub release_id: DbId,
    pub title: String,
    pub track_index: i32,
    pub metadata_uri: Option<String>,
}

/// A track's stored sold count next to the authoritative count of its
/// sale rows. Produced by `TrackRepo::list_with_sale_counts` for the
/// counter-sync pass.
#[derive(Debug, Clone, FromRow)]
pub struct TrackSaleCount {
    pub id: DbId,
    pub release_id: DbId,
    pub sold_count: i32,
    pub sale_count: i64,
}

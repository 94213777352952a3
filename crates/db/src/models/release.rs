//! Release entity model and DTOs.

use serde::{Deserialize, Serialize};
use soundmint_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `releases` table.
///
/// `total_editions` and `sold_editions` are derived caches; Sale rows and
/// ledger custody are the sources of truth the reconciliation engine
/// rebuilds them from.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Release {
    pub id: DbId,
    pub title: String,
    pub artist_address: String,
    /// `album` or `single`; controls how `sold_editions` aggregates.
    pub release_type: String,
    pub total_editions: i32,
    pub sold_editions: i32,
    pub is_minted: bool,
    pub mint_fee_paid: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new release.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRelease {
    pub title: String,
    pub artist_address: String,
    pub release_type: Option<String>,
    pub mint_fee_paid: Option<bool>,
}

/// Counter fields of a release, as read by the reconciliation engine.
#[derive(Debug, Clone, FromRow)]
pub struct ReleaseCounters {
    pub id: DbId,
    pub sold_editions: i32,
}

//! Mint job entity model and DTOs.

use serde::{Deserialize, Serialize};
use soundmint_core::minting::MintJobPayload;
use soundmint_core::types::{DbId, Timestamp};
use sqlx::FromRow;

use super::status::StatusId;

/// A row from the `mint_jobs` table.
///
/// The table is the single source of truth for job state; there is no
/// in-memory queue. Rows are never deleted (the notification feed reads
/// the last seven days).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MintJob {
    pub id: DbId,
    pub release_id: DbId,
    pub status_id: StatusId,
    /// `track_count x quantity`, fixed at enqueue time.
    pub total_units: i32,
    /// Monotonically non-decreasing; never exceeds `total_units`.
    pub minted_count: i32,
    pub payload: serde_json::Value,
    pub error_message: Option<String>,
    /// Notification dismissal flag, owned by the job's artist.
    pub seen: bool,
    pub created_at: Timestamp,
    pub started_at: Option<Timestamp>,
    pub completed_at: Option<Timestamp>,
    pub updated_at: Timestamp,
}

impl MintJob {
    /// Deserialize the JSONB payload into its typed form.
    pub fn mint_payload(&self) -> Result<MintJobPayload, serde_json::Error> {
        serde_json::from_value(self.payload.clone())
    }
}

/// DTO for enqueueing a mint job. `total_units` has already been computed
/// and validated by `soundmint_core::minting::validate_mint_request`.
#[derive(Debug, Clone, Deserialize)]
pub struct EnqueueMintJob {
    pub release_id: DbId,
    pub total_units: i32,
    pub payload: MintJobPayload,
}

//! Mint request validation and the typed mint-job payload.
//!
//! A mint job covers `track_count x quantity` editions. The unit count is
//! computed here, once, at enqueue time; the worker never recomputes it.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::LedgerAddress;

/// Default ceiling on `track_count x quantity` for a single job.
///
/// Overridable via `MINT_UNIT_CAP`. Each unit is a separate ledger
/// transaction taking seconds to validate, so a runaway quantity would
/// occupy the worker for hours.
pub const DEFAULT_UNIT_CAP: u32 = 500;

/// Maximum transfer fee in basis points (50%, the ledger's own ceiling).
pub const MAX_TRANSFER_FEE_BPS: u16 = 5000;

/// Job-specific payload stored in the `mint_jobs.payload` JSONB column.
///
/// Single job kind today. If more kinds are added this becomes a tagged
/// union; the column is already generic JSONB so no migration is needed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MintJobPayload {
    /// Artist account the editions are issued for.
    pub artist_address: LedgerAddress,
    /// Editions requested per track.
    pub quantity: u32,
    /// Royalty on secondary sales, in basis points.
    pub transfer_fee_bps: u16,
}

/// Total editions a job will attempt: `track_count x quantity`.
pub fn total_units(track_count: usize, quantity: u32) -> u64 {
    track_count as u64 * u64::from(quantity)
}

/// Validate a mint request before a job row is created.
///
/// Returns the computed total unit count on success. The release must have
/// at least one track, the quantity must be positive, the total must stay
/// under `unit_cap`, and the transfer fee must be within the ledger's range.
pub fn validate_mint_request(
    track_count: usize,
    quantity: u32,
    transfer_fee_bps: u16,
    unit_cap: u32,
) -> Result<u32, CoreError> {
    if track_count == 0 {
        return Err(CoreError::Validation(
            "Release has no tracks to mint".to_string(),
        ));
    }
    if quantity == 0 {
        return Err(CoreError::Validation(
            "Quantity must be at least 1".to_string(),
        ));
    }
    if transfer_fee_bps > MAX_TRANSFER_FEE_BPS {
        return Err(CoreError::Validation(format!(
            "Transfer fee {transfer_fee_bps} bps exceeds maximum {MAX_TRANSFER_FEE_BPS}"
        )));
    }

    let total = total_units(track_count, quantity);
    if total > u64::from(unit_cap) {
        return Err(CoreError::Validation(format!(
            "Job of {total} editions exceeds the per-job cap of {unit_cap}"
        )));
    }

    Ok(total as u32)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::error::CoreError;

    #[test]
    fn total_units_is_tracks_times_quantity() {
        assert_eq!(total_units(2, 3), 6);
        assert_eq!(total_units(12, 100), 1200);
    }

    #[test]
    fn valid_request_returns_total() {
        assert_eq!(validate_mint_request(2, 3, 500, 500).unwrap(), 6);
    }

    #[test]
    fn zero_tracks_is_rejected() {
        assert_matches!(
            validate_mint_request(0, 3, 0, 500),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn zero_quantity_is_rejected() {
        assert_matches!(
            validate_mint_request(2, 0, 0, 500),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn over_cap_is_rejected() {
        assert_matches!(
            validate_mint_request(10, 51, 0, 500),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn exactly_at_cap_is_allowed() {
        assert_eq!(validate_mint_request(10, 50, 0, 500).unwrap(), 500);
    }

    #[test]
    fn transfer_fee_over_ledger_max_is_rejected() {
        assert_matches!(
            validate_mint_request(1, 1, 5001, 500),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn payload_round_trips_through_json() {
        let payload = MintJobPayload {
            artist_address: "rArtist123".to_string(),
            quantity: 3,
            transfer_fee_bps: 750,
        };
        let value = serde_json::to_value(&payload).unwrap();
        let back: MintJobPayload = serde_json::from_value(value).unwrap();
        assert_eq!(back.artist_address, "rArtist123");
        assert_eq!(back.quantity, 3);
        assert_eq!(back.transfer_fee_bps, 750);
    }
}

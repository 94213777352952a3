//! Aggregate counter computation for tracks and releases.
//!
//! Stored counters are derived caches. Sale rows are authoritative for
//! modern releases; ledger custody is authoritative only for the legacy
//! pre-queue cohort. The reconciliation passes in `soundmint-reconcile`
//! apply these functions and write back only values that drifted.

/// Release kind: an album only counts a "sold edition" when every one of
/// its tracks has sold that many times.
pub const RELEASE_TYPE_ALBUM: &str = "album";
/// Release kind: a single's sold editions equal its one track's count.
pub const RELEASE_TYPE_SINGLE: &str = "single";

/// Compute a release's `sold_editions` from its tracks' sold counts.
///
/// Albums take the minimum across tracks; singles have one track so the
/// minimum is the same value. A release with no tracks has sold nothing.
pub fn release_sold_editions(track_sold_counts: &[i32]) -> i32 {
    track_sold_counts.iter().copied().min().unwrap_or(0)
}

/// Outcome of the custody-based sold count for one legacy track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustodyCount {
    /// `total_editions - tokens_in_wallet`, clamped at zero.
    Sold(i32),
    /// More tokens in the wallet than editions exist: corrupt or
    /// incomplete seed data. The track must not be written.
    Corrupt,
}

/// Derive a legacy track's sold count from ledger custody.
///
/// A burned token is indistinguishable from a sold one under this
/// formula; callers log that caveat when applying the result.
pub fn legacy_sold_count(total_editions: i32, tokens_in_wallet: i32) -> CustodyCount {
    if tokens_in_wallet > total_editions {
        CustodyCount::Corrupt
    } else {
        CustodyCount::Sold((total_editions - tokens_in_wallet).max(0))
    }
}

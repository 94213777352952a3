//! Custody sync: rebuild legacy counters from ledger custody.
//!
//! Applies only to the pre-queue cohort (`is_minted AND NOT
//! mint_fee_paid`), whose sales were never recorded as rows. For those
//! tracks the only signal is how many editions the platform wallet still
//! holds: `sold = total_editions - tokens_in_wallet`.

use sqlx::PgPool;
use soundmint_core::counters::{legacy_sold_count, CustodyCount};
use soundmint_ledger::client::count_tokens_by_uri;
use soundmint_ledger::LedgerClient;
use soundmint_db::repositories::{ReleaseRepo, TrackRepo};

use crate::report::PassReport;
use crate::ReconcileError;

/// Rewrite drifted `sold_count` on legacy tracks from wallet custody.
///
/// The custody listing happens once up front; if it fails the pass runs
/// not at all rather than against partial data. A track holding more
/// wallet tokens than its recorded edition total is skipped untouched:
/// that is corrupt seed data, not sales.
pub async fn sync_legacy_custody(
    pool: &PgPool,
    ledger: &dyn LedgerClient,
    platform_wallet: &str,
) -> Result<PassReport, ReconcileError> {
    let mut report = PassReport::new("custody_sync");

    let tokens = ledger.account_nfts(platform_wallet).await?;
    let custody = count_tokens_by_uri(&tokens);

    for release in ReleaseRepo::legacy_releases(pool).await? {
        let tracks = match TrackRepo::for_release(pool, release.id).await {
            Ok(tracks) => tracks,
            Err(e) => {
                report.record_error("releases", release.id, e);
                continue;
            }
        };

        for track in tracks {
            report.examined += 1;

            let Some(uri) = &track.metadata_uri else {
                report.skipped += 1;
                continue;
            };
            let in_wallet = custody.get(uri).copied().unwrap_or(0);

            match legacy_sold_count(track.total_editions, in_wallet) {
                CustodyCount::Corrupt => {
                    tracing::warn!(
                        track_id = track.id,
                        total_editions = track.total_editions,
                        in_wallet,
                        "Wallet holds more tokens than recorded editions; skipping track",
                    );
                    report.skipped += 1;
                }
                CustodyCount::Sold(sold) if sold != track.sold_count => {
                    // Burned tokens are indistinguishable from sold ones
                    // under this formula; the legacy cohort predates burn
                    // support so the inaccuracy is accepted and logged.
                    match TrackRepo::set_sold_count(pool, track.id, sold).await {
                        Ok(()) => {
                            tracing::info!(
                                track_id = track.id,
                                stored = track.sold_count,
                                computed = sold,
                                in_wallet,
                                "Corrected legacy track sold_count from custody",
                            );
                            report.updated += 1;
                        }
                        Err(e) => report.record_error("tracks", track.id, e),
                    }
                }
                CustodyCount::Sold(_) => {}
            }
        }
    }

    Ok(report)
}

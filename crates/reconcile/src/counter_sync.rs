//! Counter sync: rebuild cached counters from sale rows.
//!
//! Sale rows are authoritative for modern releases only; the legacy
//! cohort never appears in the listings this pass reads, so its
//! custody-derived counters are left alone. Only rows whose computed
//! value differs from the stored value are written, which is what makes
//! a second run over unchanged data a no-op.

use std::collections::HashMap;

use sqlx::PgPool;
use soundmint_core::counters::release_sold_editions;
use soundmint_core::types::DbId;
use soundmint_db::repositories::{ReleaseRepo, TrackRepo};

use crate::report::PassReport;

/// Rewrite every drifted `track.sold_count` and `release.sold_editions`.
pub async fn sync_counters(pool: &PgPool) -> Result<PassReport, sqlx::Error> {
    let mut report = PassReport::new("counter_sync");

    let rows = TrackRepo::list_with_sale_counts(pool).await?;
    let mut counts_by_release: HashMap<DbId, Vec<i32>> = HashMap::new();

    for row in rows {
        report.examined += 1;
        let computed = row.sale_count as i32;
        counts_by_release
            .entry(row.release_id)
            .or_default()
            .push(computed);

        if computed != row.sold_count {
            match TrackRepo::set_sold_count(pool, row.id, computed).await {
                Ok(()) => {
                    tracing::info!(
                        track_id = row.id,
                        stored = row.sold_count,
                        computed,
                        "Corrected track sold_count",
                    );
                    report.updated += 1;
                }
                Err(e) => report.record_error("tracks", row.id, e),
            }
        }
    }

    for release in ReleaseRepo::list_counters(pool).await? {
        report.examined += 1;
        let counts = counts_by_release
            .get(&release.id)
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        let computed = release_sold_editions(counts);

        if computed != release.sold_editions {
            match ReleaseRepo::set_sold_editions(pool, release.id, computed).await {
                Ok(()) => {
                    tracing::info!(
                        release_id = release.id,
                        stored = release.sold_editions,
                        computed,
                        "Corrected release sold_editions",
                    );
                    report.updated += 1;
                }
                Err(e) => report.record_error("releases", release.id, e),
            }
        }
    }

    Ok(report)
}

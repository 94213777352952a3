//! Edition renumbering: canonical numbering by sale chronology.
//!
//! Batch minting does not mint in sale order, so mint-time edition
//! numbers are provisional. This pass assigns each track's sales dense
//! 1-based numbers by `(created_at, id)` and propagates them to the
//! matching inventory rows by token ID.

use sqlx::PgPool;
use soundmint_core::editions::{assign_editions, SaleRef};
use soundmint_db::repositories::{NftRepo, SaleRepo};

use crate::report::PassReport;

/// Renumber every track that has at least one sale.
pub async fn renumber_editions(pool: &PgPool) -> Result<PassReport, sqlx::Error> {
    let mut report = PassReport::new("renumber");

    for track_id in SaleRepo::track_ids_with_sales(pool).await? {
        let sales = match SaleRepo::list_for_track_chronological(pool, track_id).await {
            Ok(sales) => sales,
            Err(e) => {
                report.record_error("tracks", track_id, e);
                continue;
            }
        };
        report.examined += sales.len();

        let refs: Vec<SaleRef> = sales
            .iter()
            .map(|s| SaleRef {
                sale_id: s.id,
                token_id: s.token_id.clone(),
                created_at: s.created_at,
                edition_number: s.edition_number,
            })
            .collect();

        for assignment in assign_editions(&refs) {
            if let Err(e) =
                SaleRepo::set_edition_number(pool, assignment.sale_id, assignment.edition_number)
                    .await
            {
                report.record_error("sales", assignment.sale_id, e);
                continue;
            }

            // The sale may predate inventory tracking; a missing unit is fine.
            match NftRepo::set_edition_number(
                pool,
                &assignment.token_id,
                assignment.edition_number,
            )
            .await
            {
                Ok(_found) => {}
                Err(e) => report.record_error("nfts", &assignment.token_id, e),
            }

            report.updated += 1;
        }
    }

    Ok(report)
}

//! Canonical edition numbering by sale chronology.
//!
//! Edition numbers assigned at mint time are provisional: batch minting
//! does not mint in sale order, and editions sell out of mint order. The
//! canonical numbering is "order of sale": the first sale of a track is
//! edition 1, regardless of which token it happened to move.

use crate::types::{DbId, Timestamp, TokenId};

/// The fields of a sale relevant to renumbering.
#[derive(Debug, Clone)]
pub struct SaleRef {
    pub sale_id: DbId,
    pub token_id: TokenId,
    pub created_at: Timestamp,
    /// Edition number currently stored on the sale, if any.
    pub edition_number: Option<i32>,
}

/// A corrected edition number for one sale (and its inventory row).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditionAssignment {
    pub sale_id: DbId,
    pub token_id: TokenId,
    pub edition_number: i32,
}

/// Assign dense 1-based edition numbers to a track's sales by `(created_at,
/// id)` ascending, returning only the sales whose stored number differs.
///
/// The id tiebreak makes the ordering total: two sales in the same ledger
/// close can share a timestamp.
pub fn assign_editions(sales: &[SaleRef]) -> Vec<EditionAssignment> {
    let mut ordered: Vec<&SaleRef> = sales.iter().collect();
    ordered.sort_by_key(|s| (s.created_at, s.sale_id));

    ordered
        .iter()
        .enumerate()
        .filter_map(|(position, sale)| {
            let edition = position as i32 + 1;
            if sale.edition_number == Some(edition) {
                None
            } else {
                Some(EditionAssignment {
                    sale_id: sale.sale_id,
                    token_id: sale.token_id.clone(),
                    edition_number: edition,
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;

    fn sale(id: DbId, token: &str, offset_secs: i64, edition: Option<i32>) -> SaleRef {
        SaleRef {
            sale_id: id,
            token_id: token.to_string(),
            created_at: Utc::now() + Duration::seconds(offset_secs),
            edition_number: edition,
        }
    }

    #[test]
    fn numbers_follow_sale_time_not_input_order() {
        // Token B sold first even though it appears second in the input.
        let sales = vec![sale(2, "A", 10, None), sale(1, "B", 0, None)];
        let assigned = assign_editions(&sales);
        assert_eq!(
            assigned,
            vec![
                EditionAssignment {
                    sale_id: 1,
                    token_id: "B".to_string(),
                    edition_number: 1,
                },
                EditionAssignment {
                    sale_id: 2,
                    token_id: "A".to_string(),
                    edition_number: 2,
                },
            ]
        );
    }

    #[test]
    fn equal_timestamps_break_ties_by_sale_id() {
        let t = Utc::now();
        let a = SaleRef {
            sale_id: 7,
            token_id: "A".to_string(),
            created_at: t,
            edition_number: None,
        };
        let b = SaleRef {
            sale_id: 3,
            token_id: "B".to_string(),
            created_at: t,
            edition_number: None,
        };
        let assigned = assign_editions(&[a, b]);
        assert_eq!(assigned[0].sale_id, 3);
        assert_eq!(assigned[0].edition_number, 1);
        assert_eq!(assigned[1].sale_id, 7);
        assert_eq!(assigned[1].edition_number, 2);
    }

    #[test]
    fn already_correct_numbers_produce_no_assignments() {
        let sales = vec![sale(1, "A", 0, Some(1)), sale(2, "B", 5, Some(2))];
        assert!(assign_editions(&sales).is_empty());
    }

    #[test]
    fn assignments_are_dense_with_no_gaps() {
        let sales: Vec<SaleRef> = (0..5)
            .map(|i| sale(i + 1, &format!("T{i}"), i * 3, None))
            .collect();
        let mut editions: Vec<i32> = assign_editions(&sales)
            .into_iter()
            .map(|a| a.edition_number)
            .collect();
        editions.sort_unstable();
        assert_eq!(editions, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(assign_editions(&[]).is_empty());
    }
}

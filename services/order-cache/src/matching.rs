//! Matching-size computation
//!
//! Determines how much aggregate buy quantity can cross against aggregate
//! sell quantity on one security when orders from the same company never
//! match each other.
//!
//! For a company with combined volume `v` on the security, the quantity of
//! one side that can never find a counterparty is bounded by how far `v`
//! overshoots the opposing total. Only the *largest* single-company volume
//! can produce such an overshoot, so the closed form below needs just the
//! two side totals and the leading combined volume — all read from the
//! snapshot in O(1).

use crate::snapshot::SecuritySnapshot;

/// Total quantity that can match on the snapshot's security
///
/// Computed in signed 64-bit to keep the intermediate differences from
/// underflowing; results beyond `u32::MAX` saturate.
pub fn matching_size(snapshot: &SecuritySnapshot) -> u32 {
    let buy_total = snapshot.total_buy() as i64;
    let sell_total = snapshot.total_sell() as i64;
    if buy_total == 0 || sell_total == 0 {
        return 0;
    }

    let leading = snapshot.max_volume() as i64;
    let excess_buy = (leading - sell_total).max(0);
    let excess_sell = (leading - buy_total).max(0);

    let match_buy = (buy_total - excess_buy).max(0);
    let match_sell = (sell_total - excess_sell).max(0);
    u32::try_from(match_buy.min(match_sell)).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::ids::{OrderId, SecurityId};
    use types::numeric::Quantity;
    use types::order::{Order, Side};

    fn fold(entries: &[(Side, u32, &str)]) -> SecuritySnapshot {
        let mut snapshot = SecuritySnapshot::new();
        for (slot, &(side, qty, company)) in entries.iter().enumerate() {
            snapshot.apply(&Order::new(
                OrderId::from_slot(slot as u64),
                SecurityId::new("SecId1"),
                side,
                Quantity::new(qty),
                "user1",
                company,
            ));
        }
        snapshot
    }

    #[test]
    fn test_matching_size_empty_snapshot() {
        assert_eq!(matching_size(&SecuritySnapshot::new()), 0);
    }

    #[test]
    fn test_matching_size_one_sided_book() {
        let snapshot = fold(&[(Side::Buy, 1000, "CompanyA"), (Side::Buy, 500, "CompanyB")]);
        assert_eq!(matching_size(&snapshot), 0);
    }

    #[test]
    fn test_matching_size_single_company_never_matches() {
        let snapshot = fold(&[(Side::Buy, 1000, "CompanyA"), (Side::Sell, 500, "CompanyA")]);
        assert_eq!(matching_size(&snapshot), 0);
    }

    #[test]
    fn test_matching_size_two_companies() {
        let snapshot = fold(&[(Side::Buy, 1000, "CompanyA"), (Side::Sell, 700, "CompanyB")]);
        assert_eq!(matching_size(&snapshot), 700);
    }

    #[test]
    fn test_matching_size_leader_overshoots_both_sides() {
        // CompanyB's combined 3100 exceeds the 2100 of opposing buys
        let snapshot = fold(&[
            (Side::Buy, 1000, "CompanyA"),
            (Side::Sell, 3000, "CompanyB"),
            (Side::Buy, 500, "CompanyA"),
            (Side::Buy, 600, "CompanyC"),
            (Side::Sell, 100, "CompanyB"),
            (Side::Sell, 2000, "CompanyC"),
        ]);
        assert_eq!(matching_size(&snapshot), 2100);
    }

    #[test]
    fn test_matching_size_bounded_by_smaller_side() {
        let snapshot = fold(&[
            (Side::Buy, 100, "CompanyA"),
            (Side::Sell, 1_000_000, "CompanyB"),
        ]);
        assert_eq!(matching_size(&snapshot), 100);
    }
}

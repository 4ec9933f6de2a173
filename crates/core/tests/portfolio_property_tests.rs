//! Property-based integration tests for the portfolio engine.
//!
//! These tests verify that universal properties hold across all valid inputs,
//! using the `proptest` crate for random test case generation.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use folio_core::portfolio::{compute_allocation_breakdown, compute_summary, GroupBy};
use folio_core::positions::{AssetClass, Position};
use folio_core::prices::{AssetPrice, PriceTable};

// =============================================================================
// Generators
// =============================================================================

/// Generates a random asset class.
fn arb_asset_class() -> impl Strategy<Value = AssetClass> {
    prop_oneof![
        Just(AssetClass::Equity),
        Just(AssetClass::FixedIncome),
        Just(AssetClass::Crypto),
        Just(AssetClass::Cash),
        Just(AssetClass::Other),
    ]
}

/// Generates a non-negative currency amount with two decimal places.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Generates a position together with its current price. Asset identifiers
/// are assigned from the vector index so every position prices distinctly.
fn arb_priced_positions(max_count: usize) -> impl Strategy<Value = Vec<(Position, Decimal)>> {
    proptest::collection::vec(
        (arb_amount(), arb_amount(), arb_amount(), arb_asset_class()),
        0..=max_count,
    )
    .prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(i, (quantity, average_cost, price, asset_class))| {
                let position = Position::new(
                    format!("POS-{i}"),
                    format!("ASSET-{i}"),
                    quantity,
                    average_cost,
                    asset_class,
                    "USD",
                );
                (position, price)
            })
            .collect()
    })
}

fn price_table(priced: &[(Position, Decimal)]) -> PriceTable {
    let mut table = PriceTable::new();
    for (position, price) in priced {
        table.insert(position.asset_id.clone(), AssetPrice::Priced(*price));
    }
    table
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Total value always equals the sum of market values plus cash,
    /// exactly in decimal arithmetic.
    #[test]
    fn prop_total_value_is_sum_of_parts(
        priced in arb_priced_positions(12),
        cash in arb_amount(),
    ) {
        let positions: Vec<Position> = priced.iter().map(|(p, _)| p.clone()).collect();
        let table = price_table(&priced);

        let summary = compute_summary(&positions, &table, cash, "USD").unwrap();

        let expected: Decimal = priced
            .iter()
            .map(|(p, price)| p.quantity * price)
            .sum::<Decimal>()
            + cash;
        prop_assert_eq!(summary.total_value, expected);
        prop_assert_eq!(summary.invested_value, expected - cash);
    }

    /// For non-zero totals, position weights plus the cash weight sum to 1
    /// within 1e-9.
    #[test]
    fn prop_weights_sum_to_one(
        priced in arb_priced_positions(12),
        cash in arb_amount(),
    ) {
        let positions: Vec<Position> = priced.iter().map(|(p, _)| p.clone()).collect();
        let table = price_table(&priced);

        let summary = compute_summary(&positions, &table, cash, "USD").unwrap();
        prop_assume!(summary.total_value > Decimal::ZERO);

        let weight_sum: Decimal = summary
            .positions
            .iter()
            .map(|v| v.weight)
            .sum::<Decimal>()
            + summary.cash_weight;
        prop_assert!(
            (weight_sum - Decimal::ONE).abs() <= dec!(0.000000001),
            "weights summed to {}",
            weight_sum
        );
    }

    /// Identical inputs yield identical output, including serialized form.
    #[test]
    fn prop_summary_is_referentially_transparent(
        priced in arb_priced_positions(8),
        cash in arb_amount(),
    ) {
        let positions: Vec<Position> = priced.iter().map(|(p, _)| p.clone()).collect();
        let table = price_table(&priced);

        let first = compute_summary(&positions, &table, cash, "USD").unwrap();
        let second = compute_summary(&positions, &table, cash, "USD").unwrap();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    /// Allocation groups are always ordered by descending value with ties
    /// broken by ascending key, and group values account for every priced
    /// position plus cash.
    #[test]
    fn prop_allocation_ordering_is_deterministic(
        priced in arb_priced_positions(12),
        cash in arb_amount(),
    ) {
        let positions: Vec<Position> = priced.iter().map(|(p, _)| p.clone()).collect();
        let table = price_table(&priced);

        let breakdown =
            compute_allocation_breakdown(&positions, &table, cash, GroupBy::AssetClass).unwrap();

        for pair in breakdown.groups.windows(2) {
            let ordered = pair[0].value > pair[1].value
                || (pair[0].value == pair[1].value && pair[0].key < pair[1].key);
            prop_assert!(
                ordered,
                "groups out of order: {}={} then {}={}",
                pair[0].key, pair[0].value, pair[1].key, pair[1].value
            );
        }

        let grouped_total: Decimal = breakdown.groups.iter().map(|g| g.value).sum();
        prop_assert_eq!(grouped_total, breakdown.total_value);

        let repeat =
            compute_allocation_breakdown(&positions, &table, cash, GroupBy::AssetClass).unwrap();
        prop_assert_eq!(breakdown, repeat);
    }

    /// Marking any single position unpriced removes exactly its market value
    /// from the total and surfaces exactly one warning.
    #[test]
    fn prop_unpriced_position_is_excluded(
        priced in arb_priced_positions(12),
        cash in arb_amount(),
        pick in any::<prop::sample::Index>(),
    ) {
        prop_assume!(!priced.is_empty());
        let positions: Vec<Position> = priced.iter().map(|(p, _)| p.clone()).collect();
        let unpriced_idx = pick.index(positions.len());

        let mut table = price_table(&priced);
        table.insert(
            positions[unpriced_idx].asset_id.clone(),
            AssetPrice::Unpriced,
        );

        let summary = compute_summary(&positions, &table, cash, "USD").unwrap();

        let excluded_value = priced[unpriced_idx].0.quantity * priced[unpriced_idx].1;
        let full_total: Decimal = priced
            .iter()
            .map(|(p, price)| p.quantity * price)
            .sum::<Decimal>()
            + cash;
        prop_assert_eq!(summary.total_value, full_total - excluded_value);
        prop_assert_eq!(summary.warnings.len(), 1);
        prop_assert_eq!(
            summary.warnings[0].position_id.as_str(),
            positions[unpriced_idx].id.as_str()
        );
    }
}

//! Computes allocation breakdowns grouped by a classification key.

use std::collections::BTreeMap;

use log::{debug, warn};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::{ALLOCATION_PERCENT_PRECISION, CASH_GROUP_KEY, UNCLASSIFIED_GROUP_KEY};
use crate::errors::{InvalidInputError, Result};
use crate::portfolio::summary::UnpricedAsset;
use crate::positions::Position;
use crate::prices::{AssetPrice, PriceTable};

use super::{AllocationBreakdown, AllocationGroup, GroupBy};

/// Groups position market values by the chosen classification key and
/// reports each group's share of total portfolio value.
///
/// The cash balance always lands in a residual `"cash"` group; positions
/// classified as cash (e.g. money-market funds) merge into that same group
/// when grouping by asset class. Zero-valued groups are omitted. Unpriced
/// positions are excluded from group values and reported as warnings.
pub fn compute_allocation_breakdown(
    positions: &[Position],
    prices: &PriceTable,
    cash_balance: Decimal,
    group_by: GroupBy,
) -> Result<AllocationBreakdown> {
    debug!(
        "Computing allocation breakdown for {} positions, grouped by {:?}",
        positions.len(),
        group_by
    );

    if cash_balance < Decimal::ZERO {
        return Err(InvalidInputError::NegativeCashBalance { cash_balance }.into());
    }

    let mut group_values: BTreeMap<String, Decimal> = BTreeMap::new();
    let mut warnings: Vec<UnpricedAsset> = Vec::new();

    for position in positions {
        position.validate()?;

        let price = match prices.get(&position.asset_id) {
            Some(AssetPrice::Priced(price)) => *price,
            Some(AssetPrice::Unpriced) => {
                warn!(
                    "Position {} ({}): asset is unpriced, excluding from allocation",
                    position.id, position.asset_id
                );
                warnings.push(UnpricedAsset {
                    position_id: position.id.clone(),
                    asset_id: position.asset_id.clone(),
                    quantity: position.quantity,
                });
                continue;
            }
            None => {
                return Err(InvalidInputError::MissingPrice {
                    position_id: position.id.clone(),
                    asset_id: position.asset_id.clone(),
                }
                .into())
            }
        };
        if price < Decimal::ZERO {
            return Err(InvalidInputError::NegativePrice {
                position_id: position.id.clone(),
                asset_id: position.asset_id.clone(),
                price,
            }
            .into());
        }

        let key = match group_by {
            GroupBy::AssetClass => position.asset_class.as_str().to_string(),
            GroupBy::Sector => position
                .sector
                .clone()
                .unwrap_or_else(|| UNCLASSIFIED_GROUP_KEY.to_string()),
            GroupBy::Currency => position.currency.clone(),
        };

        *group_values.entry(key).or_insert(Decimal::ZERO) += position.quantity * price;
    }

    if cash_balance > Decimal::ZERO {
        *group_values
            .entry(CASH_GROUP_KEY.to_string())
            .or_insert(Decimal::ZERO) += cash_balance;
    }

    let total_value: Decimal = group_values.values().copied().sum();

    let mut groups: Vec<AllocationGroup> = group_values
        .into_iter()
        .filter(|(_, value)| *value > Decimal::ZERO)
        .map(|(key, value)| {
            let weight = if total_value > Decimal::ZERO {
                value / total_value
            } else {
                Decimal::ZERO
            };
            AllocationGroup {
                key,
                value,
                weight,
                percentage: (weight * dec!(100)).round_dp(ALLOCATION_PERCENT_PRECISION),
            }
        })
        .collect();

    // Descending by value; equal values ordered by key (BTreeMap iteration
    // already yields ascending keys, and the sort is stable).
    groups.sort_by(|a, b| b.value.cmp(&a.value));

    Ok(AllocationBreakdown {
        group_by,
        total_value,
        groups,
        warnings,
    })
}

//! Computes the portfolio summary from positions, prices, and cash.

use log::{debug, warn};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::PERCENT_DECIMAL_PRECISION;
use crate::errors::{InvalidInputError, Result};
use crate::portfolio::performance::compute_unrealized_pnl;
use crate::positions::Position;
use crate::prices::{AssetPrice, PriceTable};

use super::{PortfolioSummary, PositionValuation, UnpricedAsset};

/// Computes total value, cash/invested split, per-position weights, and
/// unrealized gains for a snapshot of positions plus a cash balance.
///
/// Referentially transparent: identical inputs yield identical output. An
/// empty position list with zero cash is a zero-valued summary, not an
/// error. Positions the provider marked unpriced are excluded from value
/// sums and reported in `warnings`.
pub fn compute_summary(
    positions: &[Position],
    prices: &PriceTable,
    cash_balance: Decimal,
    base_currency: &str,
) -> Result<PortfolioSummary> {
    debug!(
        "Computing portfolio summary for {} positions in {}",
        positions.len(),
        base_currency
    );

    if cash_balance < Decimal::ZERO {
        return Err(InvalidInputError::NegativeCashBalance { cash_balance }.into());
    }

    let mut valuations: Vec<PositionValuation> = Vec::with_capacity(positions.len());
    let mut warnings: Vec<UnpricedAsset> = Vec::new();

    for position in positions {
        position.validate()?;

        let price = match prices.get(&position.asset_id) {
            Some(AssetPrice::Priced(price)) => *price,
            Some(AssetPrice::Unpriced) => {
                warn!(
                    "Position {} ({}): asset is unpriced, excluding from value sums",
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

        let pnl = compute_unrealized_pnl(position, price)?;

        valuations.push(PositionValuation {
            position_id: position.id.clone(),
            asset_id: position.asset_id.clone(),
            market_value: position.quantity * price,
            cost_basis: position.cost_basis(),
            weight: Decimal::ZERO,
            unrealized_gain: pnl.amount,
            unrealized_gain_percent: pnl.percent,
        });
    }

    let invested_value: Decimal = valuations.iter().map(|v| v.market_value).sum();
    let total_value = invested_value + cash_balance;

    let cash_weight = if total_value > Decimal::ZERO {
        for valuation in &mut valuations {
            valuation.weight = valuation.market_value / total_value;
        }
        cash_balance / total_value
    } else {
        debug!("Total portfolio value is zero. Weights set to 0.");
        Decimal::ZERO
    };

    Ok(PortfolioSummary {
        base_currency: base_currency.to_string(),
        total_value,
        invested_value,
        cash_balance,
        cash_weight,
        cash_percentage: (cash_weight * dec!(100)).round_dp(PERCENT_DECIMAL_PRECISION),
        positions: valuations,
        warnings,
        as_of: prices.as_of,
    })
}

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::PERCENT_DECIMAL_PRECISION;
use crate::errors::{InvalidInputError, Result};
use crate::positions::Position;

use super::UnrealizedPnl;

/// Computes the unrealized gain/loss of a position at the given price.
///
/// Pure: no I/O, no shared state. Fails with an input error when the
/// position or the price is negative.
pub fn compute_unrealized_pnl(position: &Position, current_price: Decimal) -> Result<UnrealizedPnl> {
    position.validate()?;
    if current_price < Decimal::ZERO {
        return Err(InvalidInputError::NegativePrice {
            position_id: position.id.clone(),
            asset_id: position.asset_id.clone(),
            price: current_price,
        }
        .into());
    }

    let amount = (current_price - position.average_cost) * position.quantity;
    let percent = if position.average_cost > Decimal::ZERO {
        Some(
            ((current_price - position.average_cost) / position.average_cost * dec!(100))
                .round_dp(PERCENT_DECIMAL_PRECISION),
        )
    } else {
        None
    };

    Ok(UnrealizedPnl { amount, percent })
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Paper profit or loss on a position not yet sold.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UnrealizedPnl {
    /// (current price - average cost) x quantity.
    pub amount: Decimal,
    /// (current price - average cost) / average cost, on the 0-100 scale.
    /// None when the average cost is zero; a zero cost basis is a valid
    /// state and must not raise a division error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent: Option<Decimal>,
}

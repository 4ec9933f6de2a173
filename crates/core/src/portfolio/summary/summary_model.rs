//! Summary domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Valuation figures for a single priced position.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PositionValuation {
    pub position_id: String,
    pub asset_id: String,
    /// Quantity x current price.
    pub market_value: Decimal,
    /// Quantity x average cost.
    pub cost_basis: Decimal,
    /// Market value as a fraction of total portfolio value (0-1, unrounded).
    pub weight: Decimal,
    pub unrealized_gain: Decimal,
    /// Gain relative to cost, on the 0-100 scale. None when the average cost
    /// is zero (e.g. gifted shares).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unrealized_gain_percent: Option<Decimal>,
}

/// Non-fatal warning for a position excluded from value sums because the
/// provider marked its asset unpriced.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UnpricedAsset {
    pub position_id: String,
    pub asset_id: String,
    pub quantity: Decimal,
}

/// Snapshot of the whole portfolio, derived from positions + prices + cash.
/// Not persisted; serialized by the API collaborator.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub base_currency: String,
    /// Sum of priced market values plus the cash balance.
    pub total_value: Decimal,
    /// Total value minus cash.
    pub invested_value: Decimal,
    pub cash_balance: Decimal,
    /// Cash as a fraction of total value (0-1, unrounded).
    pub cash_weight: Decimal,
    /// Cash as a percentage of total value (0-100, rounded for display).
    pub cash_percentage: Decimal,
    pub positions: Vec<PositionValuation>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub warnings: Vec<UnpricedAsset>,
    /// Provider timestamp for the price batch, when supplied.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub as_of: Option<DateTime<Utc>>,
}

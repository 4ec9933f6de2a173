//! Allocation models for portfolio breakdown by classification.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::portfolio::summary::UnpricedAsset;

/// Classification axis for an allocation breakdown.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum GroupBy {
    AssetClass,
    Sector,
    Currency,
}

/// Allocation for a single classification group.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AllocationGroup {
    /// Classification key (e.g., "equity", "Technology", "USD", "cash").
    pub key: String,
    /// Total market value of the group in base currency.
    pub value: Decimal,
    /// Group value as a fraction of total portfolio value (0-1, unrounded).
    pub weight: Decimal,
    /// Group value as a percentage of total portfolio value (0-100).
    pub percentage: Decimal,
}

/// Complete allocation breakdown along one classification axis.
///
/// Groups are sorted by descending value; ties broken by ascending key so
/// repeated calls with the same input produce identical output.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AllocationBreakdown {
    pub group_by: GroupBy,
    /// Total portfolio value (priced positions plus cash) in base currency.
    pub total_value: Decimal,
    pub groups: Vec<AllocationGroup>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub warnings: Vec<UnpricedAsset>,
}

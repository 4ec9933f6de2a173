use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::InvalidInputError;

/// Asset classification used for allocation breakdowns.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum AssetClass {
    Equity,
    FixedIncome,
    Crypto,
    Cash,
    Other,
}

impl AssetClass {
    /// Stable string key for grouping and serialization.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetClass::Equity => "equity",
            AssetClass::FixedIncome => "fixedIncome",
            AssetClass::Crypto => "crypto",
            AssetClass::Cash => "cash",
            AssetClass::Other => "other",
        }
    }
}

/// A holding of a specific asset with quantity and cost basis.
///
/// The current price is NOT part of the position: prices arrive separately
/// from the market-data collaborator as a [`crate::prices::PriceTable`].
/// Cash is never represented as a synthetic position; the cash balance is an
/// explicit parameter to every aggregation call.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub id: String,
    pub asset_id: String,
    pub quantity: Decimal,
    /// Average cost per unit in the position's currency. Zero is a valid
    /// state (e.g. gifted shares).
    pub average_cost: Decimal,
    pub asset_class: AssetClass,
    /// Sector classification, when known.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sector: Option<String>,
    /// The currency of the asset and its cost basis (e.g., "USD", "EUR").
    pub currency: String,
}

impl Position {
    pub fn new(
        id: impl Into<String>,
        asset_id: impl Into<String>,
        quantity: Decimal,
        average_cost: Decimal,
        asset_class: AssetClass,
        currency: impl Into<String>,
    ) -> Self {
        Position {
            id: id.into(),
            asset_id: asset_id.into(),
            quantity,
            average_cost,
            asset_class,
            sector: None,
            currency: currency.into(),
        }
    }

    pub fn with_sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = Some(sector.into());
        self
    }

    /// Cost basis of the whole position (quantity x average cost).
    pub fn cost_basis(&self) -> Decimal {
        self.quantity * self.average_cost
    }

    /// Checks the non-negativity invariants on quantity and average cost.
    pub fn validate(&self) -> std::result::Result<(), InvalidInputError> {
        if self.quantity < Decimal::ZERO {
            return Err(InvalidInputError::NegativeQuantity {
                position_id: self.id.clone(),
                quantity: self.quantity,
            });
        }
        if self.average_cost < Decimal::ZERO {
            return Err(InvalidInputError::NegativeAverageCost {
                position_id: self.id.clone(),
                average_cost: self.average_cost,
            });
        }
        Ok(())
    }
}

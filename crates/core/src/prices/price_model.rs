use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Tagged price state for a single asset.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "status", content = "price", rename_all = "camelCase")]
pub enum AssetPrice {
    /// A resolvable current price, in the asset's currency.
    Priced(Decimal),
    /// The provider could not price the asset. The aggregator excludes the
    /// position from value sums and reports a warning entry.
    Unpriced,
}

/// Mapping from asset identifier to its current price state.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceTable {
    prices: HashMap<String, AssetPrice>,
    /// Timestamp reported by the provider for this batch of prices.
    /// Threaded through to results untouched; the engine never reads a clock.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub as_of: Option<DateTime<Utc>>,
}

impl PriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_as_of(as_of: DateTime<Utc>) -> Self {
        PriceTable {
            prices: HashMap::new(),
            as_of: Some(as_of),
        }
    }

    pub fn insert(&mut self, asset_id: impl Into<String>, price: AssetPrice) {
        self.prices.insert(asset_id.into(), price);
    }

    pub fn get(&self, asset_id: &str) -> Option<&AssetPrice> {
        self.prices.get(asset_id)
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl FromIterator<(String, AssetPrice)> for PriceTable {
    fn from_iter<I: IntoIterator<Item = (String, AssetPrice)>>(iter: I) -> Self {
        PriceTable {
            prices: iter.into_iter().collect(),
            as_of: None,
        }
    }
}

//! Typed parsing of the market-data provider envelope.
//!
//! The provider wraps its payload as `{"data": {"prices": {...}, "asOf": ...}}`.
//! The envelope is validated at this boundary: a missing or mis-shaped field
//! fails with [`MalformedResponseError`] instead of defaulting to zero.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::errors::{MalformedResponseError, Result};
use crate::prices::{AssetPrice, PriceTable};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProviderResponse {
    data: Option<ProviderData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProviderData {
    prices: Option<BTreeMap<String, Value>>,
    as_of: Option<DateTime<Utc>>,
}

/// Parses a provider response body into a [`PriceTable`].
///
/// A `null` price marks the asset as explicitly unpriced. Numeric prices may
/// arrive as JSON numbers or decimal strings; anything else is rejected.
pub fn parse_provider_response(body: &str) -> Result<PriceTable> {
    let response: ProviderResponse = serde_json::from_str(body)
        .map_err(|e| MalformedResponseError::InvalidJson(e.to_string()))?;

    let data = response
        .data
        .ok_or(MalformedResponseError::MissingField("data"))?;
    let prices = data
        .prices
        .ok_or(MalformedResponseError::MissingField("data.prices"))?;

    let mut table = PriceTable::new();
    table.as_of = data.as_of;

    for (asset_id, value) in prices {
        let price = match value {
            Value::Null => AssetPrice::Unpriced,
            Value::Number(n) => {
                let parsed = n.to_string().parse::<Decimal>().map_err(|_| {
                    MalformedResponseError::InvalidPrice {
                        asset_id: asset_id.clone(),
                        value: n.to_string(),
                    }
                })?;
                AssetPrice::Priced(parsed)
            }
            Value::String(s) => {
                let parsed =
                    s.parse::<Decimal>()
                        .map_err(|_| MalformedResponseError::InvalidPrice {
                            asset_id: asset_id.clone(),
                            value: s.clone(),
                        })?;
                AssetPrice::Priced(parsed)
            }
            other => {
                return Err(MalformedResponseError::InvalidPrice {
                    asset_id,
                    value: other.to_string(),
                }
                .into())
            }
        };
        table.insert(asset_id, price);
    }

    Ok(table)
}

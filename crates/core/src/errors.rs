//! Core error types for the portfolio engine.
//!
//! All errors are detected and reported synchronously at the point of
//! computation; there is no I/O and therefore nothing to retry. The caller
//! (the API layer) translates these into user-visible messages.

use rust_decimal::Decimal;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the portfolio engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    InvalidInput(#[from] InvalidInputError),

    #[error("Malformed provider response: {0}")]
    MalformedResponse(#[from] MalformedResponseError),
}

/// Validation errors for position and price inputs.
///
/// Each variant identifies the offending position and field so the caller
/// can surface a precise message.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidInputError {
    #[error("Position {position_id}: quantity {quantity} is negative")]
    NegativeQuantity {
        position_id: String,
        quantity: Decimal,
    },

    #[error("Position {position_id}: average cost {average_cost} is negative")]
    NegativeAverageCost {
        position_id: String,
        average_cost: Decimal,
    },

    #[error("Position {position_id}: price {price} for asset {asset_id} is negative")]
    NegativePrice {
        position_id: String,
        asset_id: String,
        price: Decimal,
    },

    #[error("Cash balance {cash_balance} is negative")]
    NegativeCashBalance { cash_balance: Decimal },

    #[error(
        "Position {position_id}: no price entry for asset {asset_id}; \
         supply a price or mark the asset unpriced"
    )]
    MissingPrice {
        position_id: String,
        asset_id: String,
    },
}

/// Errors raised when a market-data provider response does not have the
/// expected shape. Never silently defaulted to zero.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MalformedResponseError {
    #[error("Response is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("Expected field '{0}' is missing")]
    MissingField(&'static str),

    #[error("Price for asset {asset_id} is not a decimal number: {value}")]
    InvalidPrice { asset_id: String, value: String },
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}

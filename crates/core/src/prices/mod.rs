//! Price inputs from the market-data collaborator.
//!
//! "No price available" is data, not control flow: an asset is either
//! explicitly priced or explicitly unpriced, and a missing entry is an input
//! error at computation time.

mod price_model;
mod provider_response;

pub use price_model::*;
pub use provider_response::*;

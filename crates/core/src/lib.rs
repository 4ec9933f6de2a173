//! Folio Core - portfolio valuation and allocation engine.
//!
//! This crate contains the pure computation core of the portfolio tracker:
//! given a set of positions, a price table, and a cash balance it produces
//! summary, allocation, and unrealized-gain figures. It performs no I/O and
//! holds no state; storage and market-data fetching live in the surrounding
//! application.

pub mod constants;
pub mod errors;
pub mod portfolio;
pub mod positions;
pub mod prices;

// Re-export common types from the positions, prices, and portfolio modules
pub use portfolio::*;
pub use positions::*;
pub use prices::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;

//! Portfolio summary - total value, cash split, per-position weights.

mod summary_calculator;
mod summary_model;

pub use summary_calculator::*;
pub use summary_model::*;

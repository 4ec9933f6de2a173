//! Portfolio allocation module for classification-based breakdowns.

mod allocation_calculator;
mod allocation_model;

pub use allocation_calculator::*;
pub use allocation_model::*;

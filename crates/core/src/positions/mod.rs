//! Position domain models and input validation.

mod positions_model;

pub use positions_model::*;

//! Portfolio computation module - summary, allocation, and performance figures.

pub mod allocation;
pub mod performance;
pub mod summary;

pub use allocation::*;
pub use performance::*;
pub use summary::*;

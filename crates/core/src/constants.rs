/// Decimal places for percentage figures on the 0-100 scale
/// (cash percentage, unrealized gain percentage).
pub const PERCENT_DECIMAL_PRECISION: u32 = 4;

/// Decimal places for allocation breakdown percentages.
pub const ALLOCATION_PERCENT_PRECISION: u32 = 2;

/// Group key used for positions with no sector classification.
pub const UNCLASSIFIED_GROUP_KEY: &str = "unclassified";

/// Group key for the residual cash group in allocation breakdowns.
pub const CASH_GROUP_KEY: &str = "cash";

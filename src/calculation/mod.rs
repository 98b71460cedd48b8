//! Calculation logic for the bean calculator.
//!
//! This module contains the three pure calculation stages (salary tier
//! lookup, salary and commission totals, greedy diamond conversion) and the
//! batch pipeline that validates input and composes them.

mod commission;
mod diamond_conversion;
mod pipeline;
mod tier_lookup;

pub use commission::{CommissionResult, compute_totals};
pub use diamond_conversion::{DiamondConversionResult, convert_to_diamonds};
pub use pipeline::{MAX_AMOUNT, calculate_batch, calculate_record, validate_inputs};
pub use tier_lookup::{TierLookupResult, resolve_salary};

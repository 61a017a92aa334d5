//! Pay calculation for the staff roster.
//!
//! This module holds the per-kind pay rules and the pay summary row
//! produced for each employee.

mod pay;

pub use pay::{PaySummary, calculate_pay, summarize_pay};

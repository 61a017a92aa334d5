//! Per-kind pay rules.
//!
//! - Teacher: `teacher_per_hour` times the total hours across all courses
//! - Administrator: `administrator_fixed`, regardless of position
//! - Logistics: `logistics_per_day` times the working days
//!
//! No range checks are applied; negative hours or days give negative pay.
//! Results beyond the range of `Decimal` saturate at `Decimal::MAX` or
//! `Decimal::MIN`.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::PayRates;
use crate::models::{Employee, Kind};

/// One row of the pay report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaySummary {
    /// Staff number.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Record kind.
    pub kind: Kind,
    /// Computed pay.
    pub pay: Decimal,
}

/// Computes an employee's pay.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use staff_roster::calculation::calculate_pay;
/// use staff_roster::config::PayRates;
/// use staff_roster::models::{Administrator, Employee};
///
/// let wu = Employee::Administrator(Administrator::new("Wu", 2, "Dean"));
/// assert_eq!(calculate_pay(&wu, &PayRates::default()), Decimal::from(5000));
/// ```
pub fn calculate_pay(employee: &Employee, rates: &PayRates) -> Decimal {
    match employee {
        Employee::Teacher(t) => rates.teacher_per_hour.saturating_mul(t.total_hours()),
        Employee::Administrator(_) => rates.administrator_fixed,
        Employee::Logistics(l) => rates
            .logistics_per_day
            .saturating_mul(Decimal::from(l.working_days)),
    }
}

/// Builds the pay report row for an employee.
pub fn summarize_pay(employee: &Employee, rates: &PayRates) -> PaySummary {
    PaySummary {
        id: employee.id(),
        name: employee.name().to_string(),
        kind: employee.kind(),
        pay: calculate_pay(employee, rates),
    }
}

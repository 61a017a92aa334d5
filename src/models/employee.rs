//! Employee records and their human-readable descriptions.
//!
//! An [`Employee`] is one of three closed variants. Pay rules live in
//! [`crate::calculation`]; this module only holds the record shapes.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::calculate_pay;
use crate::config::PayRates;

use super::Kind;

/// A teaching staff member and the hours taught per course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    /// Staff number. Not checked for uniqueness.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Course name to hours taught. Sorted so encoding is deterministic.
    #[serde(default)]
    pub courses: BTreeMap<String, i64>,
}

impl Teacher {
    /// Creates a teacher with the given courses.
    pub fn new(name: impl Into<String>, id: i64, courses: BTreeMap<String, i64>) -> Self {
        Self {
            id,
            name: name.into(),
            courses,
        }
    }

    /// Sets the hours for a course, replacing any existing entry of the same name.
    ///
    /// # Examples
    ///
    /// ```
    /// use staff_roster::models::Teacher;
    ///
    /// let mut teacher = Teacher::new("Li", 1, Default::default());
    /// teacher.add_course("Math", 3);
    /// teacher.add_course("Math", 4);
    /// assert_eq!(teacher.courses.len(), 1);
    /// assert_eq!(teacher.courses["Math"], 4);
    /// ```
    pub fn add_course(&mut self, course: impl Into<String>, hours: i64) {
        self.courses.insert(course.into(), hours);
    }

    /// Total hours across all courses.
    ///
    /// Summed as a `Decimal`, saturating at its bounds.
    pub fn total_hours(&self) -> Decimal {
        self.courses
            .values()
            .fold(Decimal::ZERO, |total, hours| {
                total.saturating_add(Decimal::from(*hours))
            })
    }
}

/// An administrator holding a named position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Administrator {
    /// Staff number. Not checked for uniqueness.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Job title, free text.
    pub position: String,
}

impl Administrator {
    /// Creates an administrator.
    pub fn new(name: impl Into<String>, id: i64, position: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            position: position.into(),
        }
    }
}

/// A logistics staff member paid by the working day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Logistics {
    /// Staff number. Not checked for uniqueness.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Days worked in the period. Negative values are accepted.
    pub working_days: i64,
}

impl Logistics {
    /// Creates a logistics staff record.
    pub fn new(name: impl Into<String>, id: i64, working_days: i64) -> Self {
        Self {
            id,
            name: name.into(),
            working_days,
        }
    }

    /// Overwrites the number of working days.
    pub fn set_working_days(&mut self, days: i64) {
        self.working_days = days;
    }
}

/// An employee record of any kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Employee {
    /// Teaching staff.
    Teacher(Teacher),
    /// Administrative staff.
    Administrator(Administrator),
    /// Logistics staff.
    Logistics(Logistics),
}

impl Employee {
    /// Returns the discriminator tag.
    pub fn kind(&self) -> Kind {
        match self {
            Employee::Teacher(_) => Kind::Teacher,
            Employee::Administrator(_) => Kind::Administrator,
            Employee::Logistics(_) => Kind::Logistics,
        }
    }

    /// Returns the staff number.
    pub fn id(&self) -> i64 {
        match self {
            Employee::Teacher(t) => t.id,
            Employee::Administrator(a) => a.id,
            Employee::Logistics(l) => l.id,
        }
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        match self {
            Employee::Teacher(t) => &t.name,
            Employee::Administrator(a) => &a.name,
            Employee::Logistics(l) => &l.name,
        }
    }

    /// Computes pay using the standard rates.
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_decimal::Decimal;
    /// use staff_roster::models::{Employee, Logistics};
    ///
    /// let chen = Employee::Logistics(Logistics::new("Chen", 3, 20));
    /// assert_eq!(chen.compute_pay(), Decimal::from(2000));
    /// ```
    pub fn compute_pay(&self) -> Decimal {
        calculate_pay(self, &PayRates::default())
    }

    /// One-line summary using the standard rates.
    pub fn describe(&self) -> String {
        self.describe_with(&PayRates::default())
    }

    /// One-line summary; the logistics salary is computed with `rates`.
    pub fn describe_with(&self, rates: &PayRates) -> String {
        match self {
            Employee::Teacher(t) => {
                let courses = t
                    .courses
                    .iter()
                    .map(|(course, hours)| format!("{} ({} hours)", course, hours))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("Teacher: {}, ID: {}, Courses: {}", t.name, t.id, courses)
            }
            Employee::Administrator(a) => format!(
                "Administrator: {}, ID: {}, Position: {}",
                a.name, a.id, a.position
            ),
            Employee::Logistics(l) => format!(
                "Logistics: {}, ID: {}, Working Days: {}, Salary: {}",
                l.name,
                l.id,
                l.working_days,
                calculate_pay(self, rates)
            ),
        }
    }

    /// Names the first text field whose content cannot survive the line format.
    ///
    /// Names may not contain `,`; course names may not contain `,`, `:` or `;`.
    /// No field may contain a line break. Returns `None` when the record
    /// round-trips.
    pub fn unencodable_field(&self) -> Option<&'static str> {
        fn breaks_line(s: &str) -> bool {
            s.contains(['\n', '\r'])
        }

        if self.name().contains(',') || breaks_line(self.name()) {
            return Some("name");
        }

        match self {
            Employee::Teacher(t) => t
                .courses
                .keys()
                .any(|c| c.contains([',', ':', ';']) || breaks_line(c))
                .then_some("course"),
            Employee::Administrator(a) => breaks_line(&a.position).then_some("position"),
            Employee::Logistics(_) => None,
        }
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl From<Teacher> for Employee {
    fn from(value: Teacher) -> Self {
        Employee::Teacher(value)
    }
}

impl From<Administrator> for Employee {
    fn from(value: Administrator) -> Self {
        Employee::Administrator(value)
    }
}

impl From<Logistics> for Employee {
    fn from(value: Logistics) -> Self {
        Employee::Logistics(value)
    }
}

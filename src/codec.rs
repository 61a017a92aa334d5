//! Flat-file line encoding for employee records.
//!
//! Each record is one line:
//!
//! ```text
//! Teacher,<id>,<name>,<course>:<hours>;<course>:<hours>;...
//! Administrator,<id>,<name>,<position>
//! Logistics,<id>,<name>,<workingDays>
//! ```
//!
//! Delimiters inside field values are not escaped. Names must not contain
//! `,` and course names must not contain `,`, `:` or `;`, or the record will
//! not decode to the same value. An administrator's position is the rest of
//! the line and may contain commas.

use std::collections::BTreeMap;

use crate::error::{RosterError, RosterResult};
use crate::models::{Administrator, Employee, Kind, Logistics, Teacher};

const FIELD_SEPARATOR: char = ',';
const COURSE_SEPARATOR: char = ';';
const HOURS_SEPARATOR: char = ':';

/// Encodes a record as a single line, without the line terminator.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use staff_roster::codec::encode_line;
/// use staff_roster::models::{Employee, Teacher};
///
/// let li = Employee::Teacher(Teacher::new(
///     "Li",
///     1,
///     BTreeMap::from([("Math".to_string(), 3), ("Art".to_string(), 2)]),
/// ));
/// assert_eq!(encode_line(&li), "Teacher,1,Li,Art:2;Math:3;");
/// ```
pub fn encode_line(employee: &Employee) -> String {
    let mut line = format!(
        "{}{sep}{}{sep}{}{sep}",
        employee.kind(),
        employee.id(),
        employee.name(),
        sep = FIELD_SEPARATOR
    );

    match employee {
        Employee::Teacher(t) => line.extend(t.courses.iter().map(|(course, hours)| {
            format!("{}{}{}{}", course, HOURS_SEPARATOR, hours, COURSE_SEPARATOR)
        })),
        Employee::Administrator(a) => line.push_str(&a.position),
        Employee::Logistics(l) => line.push_str(&l.working_days.to_string()),
    }

    line
}

/// Decodes a single line into a record.
///
/// A trailing carriage return is ignored.
///
/// # Errors
///
/// - `UnknownKind` if the first field is not a known kind tag
/// - `MalformedLine` if a field is missing or a number does not parse
pub fn parse_line(line: &str) -> RosterResult<Employee> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let mut fields = line.splitn(4, FIELD_SEPARATOR);

    let kind: Kind = fields.next().unwrap_or_default().parse()?;
    let id = parse_integer(fields.next(), "id")?;
    let name = fields
        .next()
        .ok_or_else(|| RosterError::malformed("missing name"))?
        .to_string();
    let payload = fields
        .next()
        .ok_or_else(|| RosterError::malformed("missing payload"))?;

    let employee = match kind {
        Kind::Teacher => {
            let courses = parse_courses(payload)?;
            Teacher::new(name, id, courses).into()
        }
        Kind::Administrator => Administrator::new(name, id, payload).into(),
        Kind::Logistics => {
            let working_days = parse_integer(Some(payload), "working days")?;
            Logistics::new(name, id, working_days).into()
        }
    };

    Ok(employee)
}

fn parse_integer(field: Option<&str>, what: &str) -> RosterResult<i64> {
    let field = field.ok_or_else(|| RosterError::malformed(format!("missing {}", what)))?;
    field
        .trim()
        .parse()
        .map_err(|_| RosterError::malformed(format!("invalid {} '{}'", what, field)))
}

/// Parses `course:hours;...` up to the next field separator.
fn parse_courses(payload: &str) -> RosterResult<BTreeMap<String, i64>> {
    let payload = payload
        .split(FIELD_SEPARATOR)
        .next()
        .unwrap_or_default();

    let mut courses = BTreeMap::new();
    for entry in payload.split(COURSE_SEPARATOR).filter(|e| !e.is_empty()) {
        let (course, hours) = entry.split_once(HOURS_SEPARATOR).ok_or_else(|| {
            RosterError::malformed(format!("course entry '{}' has no hours", entry))
        })?;
        let hours = parse_integer(Some(hours), "course hours")?;
        courses.insert(course.to_string(), hours);
    }
    Ok(courses)
}

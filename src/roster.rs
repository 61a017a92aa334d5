//! The roster store: an ordered collection of employee records with
//! flat-file persistence.
//!
//! Insertion order is display order and save order. Records are owned by
//! value and ids are not checked for uniqueness.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::calculation::{PaySummary, summarize_pay};
use crate::codec::{encode_line, parse_line};
use crate::config::PayRates;
use crate::error::{RosterError, RosterResult};
use crate::models::{Administrator, Employee, Logistics, Teacher};

/// The outcome of [`Roster::load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadReport {
    /// The data file does not exist yet; the roster was left unchanged.
    NoExistingData,
    /// The data file was read.
    Loaded {
        /// Records appended to the roster.
        records: usize,
        /// Lines dropped because they did not decode.
        skipped: usize,
    },
}

/// An ordered, in-memory collection of employee records.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use rust_decimal::Decimal;
/// use staff_roster::roster::Roster;
///
/// let mut roster = Roster::new();
/// roster.add_teacher("Li", 1, BTreeMap::from([("Math".to_string(), 3)]));
/// roster.add_administrator("Wu", 2, "Dean");
/// roster.add_logistics("Chen", 3, 20);
///
/// let pays: Vec<Decimal> = roster.compute_all_pays().into_iter().map(|p| p.pay).collect();
/// assert_eq!(pays, vec![Decimal::from(3000), Decimal::from(5000), Decimal::from(2000)]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Roster {
    employees: Vec<Employee>,
    rates: PayRates,
}

impl Roster {
    /// Creates an empty roster using the standard pay rates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty roster that computes pay with `rates`.
    pub fn with_rates(rates: PayRates) -> Self {
        Self {
            employees: Vec::new(),
            rates,
        }
    }

    /// Returns the pay rates in use.
    pub fn rates(&self) -> &PayRates {
        &self.rates
    }

    /// Appends a teacher.
    pub fn add_teacher(
        &mut self,
        name: impl Into<String>,
        id: i64,
        courses: BTreeMap<String, i64>,
    ) {
        self.push(Teacher::new(name, id, courses));
    }

    /// Appends an administrator.
    pub fn add_administrator(
        &mut self,
        name: impl Into<String>,
        id: i64,
        position: impl Into<String>,
    ) {
        self.push(Administrator::new(name, id, position));
    }

    /// Appends a logistics staff member.
    pub fn add_logistics(&mut self, name: impl Into<String>, id: i64, working_days: i64) {
        self.push(Logistics::new(name, id, working_days));
    }

    /// Appends an already-built record.
    pub fn push(&mut self, employee: impl Into<Employee>) {
        let employee = employee.into();
        debug!(kind = %employee.kind(), id = employee.id(), "Adding employee");
        self.employees.push(employee);
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// True if the roster holds no records.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Returns the record at `index`, in insertion order.
    pub fn get(&self, index: usize) -> Option<&Employee> {
        self.employees.get(index)
    }

    /// Iterates over records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Employee> {
        self.employees.iter()
    }

    /// Writes every record's description, one per line, in roster order.
    pub fn display_all<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for employee in &self.employees {
            writeln!(out, "{}", employee.describe_with(&self.rates))?;
        }
        Ok(())
    }

    /// Computes pay for every record, in roster order.
    pub fn compute_all_pays(&self) -> Vec<PaySummary> {
        self.employees
            .iter()
            .map(|e| summarize_pay(e, &self.rates))
            .collect()
    }

    /// Writes every record to `path`, replacing any existing file.
    ///
    /// Returns the number of records written. On failure the roster is
    /// unchanged; the file may have been truncated or partially written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> RosterResult<usize> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| RosterError::storage(path, e))?;
        let mut writer = BufWriter::new(file);

        for employee in &self.employees {
            if let Some(field) = employee.unencodable_field() {
                warn!(
                    id = employee.id(),
                    name = %employee.name(),
                    field,
                    "Record contains a reserved delimiter and will not reload unchanged"
                );
            }
            writeln!(writer, "{}", encode_line(employee))
                .map_err(|e| RosterError::storage(path, e))?;
        }
        writer.flush().map_err(|e| RosterError::storage(path, e))?;

        info!(path = %path.display(), records = self.employees.len(), "Roster saved");
        Ok(self.employees.len())
    }

    /// Appends every record decoded from `path`, in file order.
    ///
    /// A missing file is not an error. Lines that do not decode, including
    /// lines that are not valid UTF-8, are skipped and counted in the report.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> RosterResult<LoadReport> {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "No existing data file");
                return Ok(LoadReport::NoExistingData);
            }
            Err(err) => return Err(RosterError::storage(path, err)),
        };

        let mut records = 0;
        let mut skipped = 0;
        for (index, bytes) in BufReader::new(file).split(b'\n').enumerate() {
            let bytes = bytes.map_err(|e| RosterError::storage(path, e))?;
            let decoded = String::from_utf8(bytes)
                .map_err(|_| RosterError::malformed("line is not valid UTF-8"));
            match decoded.and_then(|line| parse_line(&line)) {
                Ok(employee) => {
                    self.employees.push(employee);
                    records += 1;
                }
                Err(err) => {
                    debug!(line = index + 1, error = %err, "Skipping record line");
                    skipped += 1;
                }
            }
        }

        info!(path = %path.display(), records, skipped, "Roster loaded");
        Ok(LoadReport::Loaded { records, skipped })
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Employee;
    type IntoIter = std::slice::Iter<'a, Employee>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//! The discriminator tag of an employee record.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RosterError;

/// Identifies which employee variant a record is.
///
/// The textual form is the tag used at the start of every persisted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    /// Teaching staff, paid per course hour.
    Teacher,
    /// Administrative staff, paid a fixed amount.
    Administrator,
    /// Logistics staff, paid per working day.
    Logistics,
}

impl Kind {
    /// All kinds, in menu order.
    pub const ALL: [Kind; 3] = [Kind::Teacher, Kind::Administrator, Kind::Logistics];

    /// Returns the tag as written in the data file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Teacher => "Teacher",
            Kind::Administrator => "Administrator",
            Kind::Logistics => "Logistics",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = RosterError;

    /// Parses a tag exactly; tags are case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| RosterError::UnknownKind {
                kind: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_kinds() {
        assert_eq!("Teacher".parse::<Kind>().unwrap(), Kind::Teacher);
        assert_eq!("Administrator".parse::<Kind>().unwrap(), Kind::Administrator);
        assert_eq!("Logistics".parse::<Kind>().unwrap(), Kind::Logistics);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        match "teacher".parse::<Kind>() {
            Err(RosterError::UnknownKind { kind }) => assert_eq!(kind, "teacher"),
            other => panic!("Expected UnknownKind error, got {:?}", other),
        }
    }

    #[test]
    fn test_display_matches_tag() {
        for kind in Kind::ALL {
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }
}

//! Enumerated field codes and the fields they belong to.
//!
//! The numeric values follow the task provider conventions used by CalDAV
//! task stores, so records synchronised from such stores can be shared
//! without translation.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Status codes.
pub mod status {
    /// Task has not been started
    pub const NEEDS_ACTION: i32 = 0;
    /// Task is being worked on
    pub const IN_PROCESS: i32 = 1;
    /// Task has been completed
    pub const COMPLETED: i32 = 2;
    /// Task has been cancelled
    pub const CANCELLED: i32 = 3;
}

/// Classification (privacy) codes.
pub mod classification {
    pub const PUBLIC: i32 = 0;
    pub const PRIVATE: i32 = 1;
    pub const CONFIDENTIAL: i32 = 2;
}

/// Priority codes. 1 is the most urgent, 9 the least; 0 means undefined.
pub mod priority {
    pub const UNDEFINED: i32 = 0;
    pub const HIGHEST: i32 = 1;
    pub const MEDIUM: i32 = 5;
    pub const LOWEST: i32 = 9;
}

/// Type-safe enumeration of the fields whose values are enumerated codes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ChoiceField {
    /// Task priority
    Priority,

    /// Privacy classification
    Classification,

    /// Task status
    Status,
}

impl FromStr for ChoiceField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "priority" => Ok(ChoiceField::Priority),
            "classification" | "privacy" => Ok(ChoiceField::Classification),
            "status" => Ok(ChoiceField::Status),
            _ => Err(format!("Invalid choice field: {s}")),
        }
    }
}

impl ChoiceField {
    /// Field identifier as used by choice tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChoiceField::Priority => "priority",
            ChoiceField::Classification => "classification",
            ChoiceField::Status => "status",
        }
    }
}

impl fmt::Display for ChoiceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

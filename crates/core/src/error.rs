use std::fmt;

use thiserror::Error;

/// The clock field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeField {
    Hour,
    Minute,
    Second,
}

impl TimeField {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeField::Hour => "hour",
            TimeField::Minute => "minute",
            TimeField::Second => "second",
        }
    }

    /// Largest valid value for this field.
    pub fn max(&self) -> i64 {
        match self {
            TimeField::Hour => 23,
            TimeField::Minute | TimeField::Second => 59,
        }
    }
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClockError {
    #[error("Invalid {field} {value} (expected 0..={max})", max = .field.max())]
    InvalidRange { field: TimeField, value: i64 },

    #[error("Malformed time of day: {0}")]
    Malformed(String),
}

impl ClockError {
    /// The offending field, if this is a range violation.
    pub fn field(&self) -> Option<TimeField> {
        match self {
            ClockError::InvalidRange { field, .. } => Some(*field),
            ClockError::Malformed(_) => None,
        }
    }
}

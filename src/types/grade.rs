//! Grade type with validation and parsing.
//!
//! The `Grade` newtype ensures values are always within the grading
//! scale (0-10 inclusive). Deserialization validates too, so an
//! out-of-range grade can never enter the store from a file.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated grade on the 0-10 scale.
///
/// Using a newtype prevents accidental misuse of raw f64 values
/// and ensures grades are always within bounds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Grade(f64);

impl Grade {
    /// Minimum valid grade.
    pub const MIN: f64 = 0.0;
    /// Maximum valid grade.
    pub const MAX: f64 = 10.0;
    /// Lowest passing grade (sufficienza).
    pub const PASS: f64 = 6.0;

    /// Create a new Grade from an f64, returning None if out of range.
    #[inline]
    pub fn new(value: f64) -> Option<Self> {
        if value.is_finite() && (Self::MIN..=Self::MAX).contains(&value) {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the raw grade value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Check if this is a passing grade (>= 6).
    #[inline]
    pub fn is_passing(self) -> bool {
        self.0 >= Self::PASS
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<f64> for Grade {
    type Error = GradeError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(GradeError::OutOfRange(value))
    }
}

impl From<Grade> for f64 {
    fn from(grade: Grade) -> Self {
        grade.0
    }
}

impl FromStr for Grade {
    type Err = GradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| GradeError::InvalidFormat(s.to_string()))?;
        Self::new(value).ok_or(GradeError::OutOfRange(value))
    }
}

/// Error type for grade parsing and validation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GradeError {
    #[error("grade {0} is out of valid range (0-10)")]
    OutOfRange(f64),
    #[error("invalid grade: {0}")]
    InvalidFormat(String),
}

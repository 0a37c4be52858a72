//! Parsing of crop coordinates.
//!
//! Coordinates are plain unsigned decimal integers. Anything `u64::from_str`
//! would additionally accept, such as a leading `+`, is rejected.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Names of the four coordinate columns, in record order.
pub const COORD_NAMES: [&str; 4] = ["ax", "ay", "bx", "by"];

/// Why a coordinate field could not be read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateError {
    #[error("empty value")]
    Empty,

    #[error("not an unsigned decimal integer")]
    InvalidDigit,

    #[error("value does not fit in 64 bits")]
    Overflow,
}

/// Parses a single coordinate field.
pub fn parse_coordinate(text: &str) -> Result<u64, CoordinateError> {
    if text.is_empty() {
        return Err(CoordinateError::Empty);
    }
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoordinateError::InvalidDigit);
    }
    // Only digits remain, so the sole failure left is overflow.
    text.parse::<u64>().map_err(|_| CoordinateError::Overflow)
}

/// A coordinate field that failed to parse.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BadCoordinate {
    /// Column name (`ax`, `ay`, `bx` or `by`).
    pub axis: &'static str,
    /// The field text as it appeared in the record.
    pub value: String,
    pub error: CoordinateError,
}

impl fmt::Display for BadCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {:?}: {}", self.axis, self.value, self.error)
    }
}

/// Parses the four coordinate fields of a partial record.
///
/// Stops at the first failing field.
pub fn parse_coordinates(fields: [&str; 4]) -> Result<[u64; 4], BadCoordinate> {
    let mut coords = [0u64; 4];
    for (i, text) in fields.iter().enumerate() {
        coords[i] = parse_coordinate(text).map_err(|error| BadCoordinate {
            axis: COORD_NAMES[i],
            value: (*text).to_string(),
            error,
        })?;
    }
    Ok(coords)
}

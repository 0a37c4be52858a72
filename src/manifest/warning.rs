//! Non-fatal, record-level problems found while reading a manifest.
//!
//! A warning never stops the reader. It keeps the offending record's raw
//! fields so it can be displayed to users or processed programmatically.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::coord::BadCoordinate;
use super::shape::{FULL_FIELDS, PARTIAL_FIELDS};

/// A record that was recognized but could not become an image.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ManifestWarning {
    /// Manifest the record came from.
    pub source: PathBuf,

    /// 1-based line the record starts on.
    pub line: u64,

    /// The record's fields as tokenized.
    pub record: Vec<String>,

    /// What was wrong with it.
    pub kind: WarningKind,
}

impl ManifestWarning {
    /// Creates a new warning.
    pub fn new(source: &Path, line: u64, record: Vec<String>, kind: WarningKind) -> Self {
        Self {
            source: source.to_path_buf(),
            line,
            record,
            kind,
        }
    }

    /// Warning for a record with neither 2 nor 6 fields.
    pub fn invalid_field_count(source: &Path, line: u64, record: Vec<String>) -> Self {
        let count = record.len();
        Self::new(source, line, record, WarningKind::InvalidFieldCount { count })
    }

    /// Warning for a 6-field record with an unreadable coordinate.
    pub fn invalid_coordinate(
        source: &Path,
        line: u64,
        record: Vec<String>,
        bad: BadCoordinate,
    ) -> Self {
        Self::new(source, line, record, WarningKind::InvalidCoordinate(bad))
    }
}

impl fmt::Display for ManifestWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid CSV record in {} on line {}: {} {:?}",
            self.source.display(),
            self.line,
            self.kind,
            self.record
        )
    }
}

/// The kind of problem a warning reports.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum WarningKind {
    /// The record has a field count other than 2 or 6.
    InvalidFieldCount { count: usize },

    /// One of the four coordinates of a partial record failed to parse.
    InvalidCoordinate(BadCoordinate),
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarningKind::InvalidFieldCount { count } => write!(
                f,
                "invalid number of fields ({}, expected {} or {})",
                count, FULL_FIELDS, PARTIAL_FIELDS
            ),
            WarningKind::InvalidCoordinate(bad) => {
                write!(f, "failed to parse image coordinate {}", bad)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::coord::CoordinateError;

    #[test]
    fn test_field_count_warning_display() {
        let warning = ManifestWarning::invalid_field_count(
            Path::new("list.csv"),
            3,
            vec!["a".into(), "b".into(), "c".into()],
        );
        assert_eq!(warning.kind, WarningKind::InvalidFieldCount { count: 3 });
        assert_eq!(
            warning.to_string(),
            "invalid CSV record in list.csv on line 3: \
             invalid number of fields (3, expected 2 or 6) [\"a\", \"b\", \"c\"]"
        );
    }

    #[test]
    fn test_coordinate_warning_display() {
        let warning = ManifestWarning::invalid_coordinate(
            Path::new("list.csv"),
            1,
            vec!["bad".into()],
            BadCoordinate {
                axis: "ax",
                value: "x".into(),
                error: CoordinateError::InvalidDigit,
            },
        );
        let text = warning.to_string();
        assert!(text.contains("ax = \"x\""), "{text}");
        assert!(text.contains("not an unsigned decimal integer"), "{text}");
    }

    #[test]
    fn test_warning_serializes_with_code() {
        let warning =
            ManifestWarning::invalid_field_count(Path::new("m.csv"), 7, vec!["solo".into()]);
        let json = serde_json::to_value(&warning).expect("serialize");
        assert_eq!(json["kind"]["code"], "invalid_field_count");
        assert_eq!(json["kind"]["count"], 1);
        assert_eq!(json["line"], 7);
    }
}

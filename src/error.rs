use std::path::PathBuf;
use thiserror::Error;

use crate::manifest::SyntaxErrorKind;

/// The main error type for imgmanifest operations.
///
/// These are fatal: the manifest as a whole cannot be trusted. Problems with
/// individual records are reported as [`ManifestWarning`](crate::manifest::ManifestWarning)s
/// instead.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to open manifest {path}: {source}")]
    ManifestOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read manifest {path}: {source}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV in {path} on line {line}: {kind}")]
    ManifestSyntax {
        path: PathBuf,
        line: u64,
        kind: SyntaxErrorKind,
    },

    #[error("Failed to parse manifest {path}: {source}")]
    ManifestCsv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to write manifest {path}: {source}")]
    ManifestWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to render JSON report: {0}")]
    ReportJson(#[source] serde_json::Error),

    #[error("Manifest produced {warning_count} warning(s) in strict mode")]
    WarningsPresent { warning_count: usize },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

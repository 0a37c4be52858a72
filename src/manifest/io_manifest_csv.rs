//! Manifest CSV reader and writer.
//!
//! # Manifest Format Reference
//!
//! A manifest is headerless CSV, one record per line:
//!
//! ```text
//! name,path
//! name,path,ax,ay,bx,by
//! ;comment
//! ```
//!
//! - `name,path` references a whole image.
//! - `name,path,ax,ay,bx,by` references a crop of an image. The four
//!   coordinates must be unsigned decimal integers.
//! - A record whose first byte is `;` is a comment and is ignored.
//!
//! Fields follow standard CSV quoting: a field containing commas or line
//! breaks is wrapped in double quotes, and a literal double quote inside a
//! quoted field is doubled.
//!
//! # Tolerance
//!
//! Records are classified by field count. A record with a bad field count or
//! an unreadable coordinate becomes a [`ManifestWarning`] and reading goes
//! on. Empty lines produce no record at all; a line holding only whitespace
//! is a one-field record and therefore a warning.
//!
//! Broken quoting, invalid UTF-8 and read failures are fatal: the reader
//! returns a [`ManifestError`] and no partial results.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use csv::StringRecord;

use super::coord::parse_coordinates;
use super::model::{Image, Manifest, PartialImage};
use super::shape::RecordShape;
use super::syntax::scan_records;
use super::warning::ManifestWarning;
use crate::error::ManifestError;

/// First byte of a comment record.
pub const COMMENT: u8 = b';';

const DELIMITER: u8 = b',';

// ============================================================================
// Public API
// ============================================================================

/// Reads a manifest from a file.
///
/// # Errors
/// Returns an error if the file cannot be opened or read, or if its CSV
/// syntax is broken. Invalid records are not errors; they are collected in
/// [`Manifest::warnings`].
///
/// # Example
/// ```no_run
/// use std::path::Path;
/// use imgmanifest::manifest::io_manifest_csv::read_manifest;
///
/// let manifest = read_manifest(Path::new("list.csv"))?;
/// for warning in &manifest.warnings {
///     eprintln!("{warning}");
/// }
/// # Ok::<(), imgmanifest::ManifestError>(())
/// ```
pub fn read_manifest(path: &Path) -> Result<Manifest, ManifestError> {
    let file = File::open(path).map_err(|source| ManifestError::ManifestOpen {
        path: path.to_path_buf(),
        source,
    })?;
    parse_manifest(BufReader::new(file), path)
}

/// Reads a manifest from any byte stream.
///
/// The whole stream is consumed before any record is classified. `path`
/// only labels warnings and errors. Pass `&mut reader` to keep ownership of
/// the stream; it is never closed here.
pub fn parse_manifest<R: Read>(mut reader: R, path: &Path) -> Result<Manifest, ManifestError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|source| ManifestError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;

    manifest_from_bytes(&bytes, path)
}

/// Reads a manifest from a string.
///
/// Useful for testing without file I/O.
pub fn from_manifest_str(csv_str: &str) -> Result<Manifest, ManifestError> {
    from_manifest_slice(csv_str.as_bytes())
}

/// Reads a manifest from raw bytes.
///
/// Useful for fuzzing and processing raw bytes without requiring UTF-8 upfront.
pub fn from_manifest_slice(bytes: &[u8]) -> Result<Manifest, ManifestError> {
    manifest_from_bytes(bytes, Path::new("<bytes>"))
}

/// Writes a manifest to a file.
///
/// Full images are written first, then partial images, each in their
/// original order. Warnings are not written.
pub fn write_manifest(path: &Path, manifest: &Manifest) -> Result<(), ManifestError> {
    let file = File::create(path).map_err(ManifestError::Io)?;
    let mut csv_writer = manifest_writer(BufWriter::new(file));

    write_records(&mut csv_writer, manifest, path)?;

    csv_writer
        .into_inner()
        .map_err(|e| ManifestError::Io(e.into_error()))?
        .flush()
        .map_err(ManifestError::Io)?;

    Ok(())
}

/// Writes a manifest to a string.
///
/// Useful for testing without file I/O.
pub fn to_manifest_string(manifest: &Manifest) -> Result<String, ManifestError> {
    let mut csv_writer = manifest_writer(Vec::new());
    write_records(&mut csv_writer, manifest, Path::new("<string>"))?;

    let bytes = csv_writer
        .into_inner()
        .map_err(|e| ManifestError::Io(e.into_error()))?;

    String::from_utf8(bytes)
        .map_err(|e| ManifestError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// Fuzz-only entrypoint for the quoting scan alone.
#[cfg(feature = "fuzzing")]
pub fn fuzz_scan_records(bytes: &[u8]) -> Result<usize, ManifestError> {
    scan_records(bytes, DELIMITER, COMMENT)
        .map(|lines| lines.len())
        .map_err(|e| ManifestError::ManifestSyntax {
            path: Path::new("<fuzz>").to_path_buf(),
            line: e.line,
            kind: e.kind,
        })
}

// ============================================================================
// Reading
// ============================================================================

fn manifest_from_bytes(bytes: &[u8], path: &Path) -> Result<Manifest, ManifestError> {
    let record_lines =
        scan_records(bytes, DELIMITER, COMMENT).map_err(|e| ManifestError::ManifestSyntax {
            path: path.to_path_buf(),
            line: e.line,
            kind: e.kind,
        })?;

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(DELIMITER)
        .comment(Some(COMMENT))
        .from_reader(bytes);

    let mut manifest = Manifest::default();
    let mut record = StringRecord::new();
    let mut index = 0;

    while csv_reader
        .read_record(&mut record)
        .map_err(|source| ManifestError::ManifestCsv {
            path: path.to_path_buf(),
            source,
        })?
    {
        let line = record_lines
            .get(index)
            .copied()
            .or_else(|| record.position().map(csv::Position::line))
            .unwrap_or_default();
        index += 1;

        classify_record(&mut manifest, &record, line, path);
    }

    tracing::debug!(
        path = %path.display(),
        images = manifest.images.len(),
        partial_images = manifest.partial_images.len(),
        warnings = manifest.warnings.len(),
        "manifest parsed"
    );

    Ok(manifest)
}

/// Files one tokenized record into the manifest as an image, a partial image
/// or a warning.
fn classify_record(manifest: &mut Manifest, record: &StringRecord, line: u64, path: &Path) {
    match RecordShape::classify(record) {
        RecordShape::Full {
            name,
            path: image_path,
        } => manifest.images.push(Image::new(name, image_path)),

        RecordShape::Partial {
            name,
            path: image_path,
            coords,
        } => match parse_coordinates(coords) {
            Ok(coords) => manifest
                .partial_images
                .push(PartialImage::new(name, image_path, coords)),
            Err(bad) => {
                tracing::debug!(line, axis = bad.axis, "skipping partial image record");
                manifest.warnings.push(ManifestWarning::invalid_coordinate(
                    path,
                    line,
                    raw_fields(record),
                    bad,
                ));
            }
        },

        RecordShape::Invalid { field_count } => {
            tracing::debug!(line, field_count, "skipping record with invalid field count");
            manifest.warnings.push(ManifestWarning::invalid_field_count(
                path,
                line,
                raw_fields(record),
            ));
        }
    }
}

fn raw_fields(record: &StringRecord) -> Vec<String> {
    record.iter().map(str::to_string).collect()
}

// ============================================================================
// Writing
// ============================================================================

fn manifest_writer<W: Write>(inner: W) -> csv::Writer<W> {
    // The comment byte makes the writer quote fields that would otherwise be
    // read back as comments.
    csv::WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(DELIMITER)
        .comment(Some(COMMENT))
        .from_writer(inner)
}

fn write_records<W: Write>(
    csv_writer: &mut csv::Writer<W>,
    manifest: &Manifest,
    path: &Path,
) -> Result<(), ManifestError> {
    let write_error = |source| ManifestError::ManifestWrite {
        path: path.to_path_buf(),
        source,
    };

    for image in &manifest.images {
        csv_writer
            .write_record([image.name.as_str(), image.path.as_str()])
            .map_err(write_error)?;
    }

    for partial in &manifest.partial_images {
        let [ax, ay, bx, by] = partial.coords().map(|c| c.to_string());
        csv_writer
            .write_record([
                partial.name(),
                partial.path(),
                ax.as_str(),
                ay.as_str(),
                bx.as_str(),
                by.as_str(),
            ])
            .map_err(write_error)?;
    }

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

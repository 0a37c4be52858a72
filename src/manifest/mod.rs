//! Image manifests.
//!
//! A manifest is a CSV list of named images. Each record is either a whole
//! image (`name,path`) or a crop of one (`name,path,ax,ay,bx,by`); lines
//! starting with `;` are comments.
//!
//! # Two tiers of failure
//!
//! 1. **Warnings**: a record with the wrong number of fields or an
//!    unreadable coordinate is skipped and reported as a [`ManifestWarning`].
//!    Reading continues.
//!
//! 2. **Errors**: broken CSV quoting, invalid UTF-8 or a failing reader make
//!    the whole manifest untrustworthy. Reading stops with a
//!    [`ManifestError`](crate::ManifestError).
//!
//! # Example
//!
//! ```
//! use imgmanifest::manifest::{io_manifest_csv::from_manifest_str, Image};
//!
//! let manifest = from_manifest_str(
//!     ";portraits\n\
//!      alice,alice.webp\n\
//!      face,group.webp,10,20,110,140\n\
//!      broken,broken.webp,1,2\n",
//! )?;
//!
//! assert_eq!(manifest.images, vec![Image::new("alice", "alice.webp")]);
//! assert_eq!(manifest.partial_images[0].coords(), [10, 20, 110, 140]);
//! assert_eq!(manifest.warnings.len(), 1);
//! # Ok::<(), imgmanifest::ManifestError>(())
//! ```

mod coord;
pub mod io_manifest_csv;
mod model;
mod shape;
mod syntax;
mod warning;

// Re-export core types for convenient access
pub use coord::{parse_coordinate, BadCoordinate, CoordinateError, COORD_NAMES};
pub use model::{Image, Manifest, PartialImage};
pub use shape::{RecordShape, FULL_FIELDS, PARTIAL_FIELDS};
pub use syntax::{SyntaxError, SyntaxErrorKind};
pub use warning::{ManifestWarning, WarningKind};

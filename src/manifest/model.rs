//! Record types produced by the manifest reader.
//!
//! A manifest is a flat list of named image references. Some references
//! point at a whole image, others at a rectangular crop inside one.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::warning::ManifestWarning;

/// Everything recovered from one manifest, in stream order.
///
/// Full images, partial images and warnings are kept in separate sequences.
/// Order is preserved within each sequence but carries no meaning across
/// them.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Manifest {
    /// Records of the form `name,path`.
    pub images: Vec<Image>,

    /// Records of the form `name,path,ax,ay,bx,by`.
    pub partial_images: Vec<PartialImage>,

    /// Recognizable records that could not be turned into an image.
    pub warnings: Vec<ManifestWarning>,
}

impl Manifest {
    /// Returns true if no record was recovered and nothing was warned about.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty() && self.partial_images.is_empty() && self.warnings.is_empty()
    }

    /// Total number of image records (full and partial).
    pub fn record_count(&self) -> usize {
        self.images.len() + self.partial_images.len()
    }
}

impl fmt::Display for Manifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Images:")?;
        for image in &self.images {
            writeln!(f, "{}", image)?;
        }

        writeln!(f, "Partial images:")?;
        for partial in &self.partial_images {
            writeln!(f, "{}", partial)?;
        }

        Ok(())
    }
}

/// A reference to a whole image.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Image {
    /// Name the image is referred to by.
    pub name: String,

    /// Location of the image file. Not checked for existence.
    pub path: String,
}

impl Image {
    /// Creates a new image reference.
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

impl fmt::Display for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.path)
    }
}

/// A reference to a rectangular region of an image.
///
/// `(ax, ay)` and `(bx, by)` are two corners of the crop in pixels. They are
/// stored exactly as written: no ordering between the corners is enforced.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PartialImage {
    #[serde(flatten)]
    pub image: Image,
    pub ax: u64,
    pub ay: u64,
    pub bx: u64,
    pub by: u64,
}

impl PartialImage {
    /// Creates a new partial image reference.
    pub fn new(
        name: impl Into<String>,
        path: impl Into<String>,
        [ax, ay, bx, by]: [u64; 4],
    ) -> Self {
        Self {
            image: Image::new(name, path),
            ax,
            ay,
            bx,
            by,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.image.name
    }

    #[inline]
    pub fn path(&self) -> &str {
        &self.image.path
    }

    /// Returns the crop corners as `[ax, ay, bx, by]`.
    #[inline]
    pub fn coords(&self) -> [u64; 4] {
        [self.ax, self.ay, self.bx, self.by]
    }
}

impl fmt::Display for PartialImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [({}, {}) - ({}, {})]",
            self.image, self.ax, self.ay, self.bx, self.by
        )
    }
}

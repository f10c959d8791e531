//! Conversion summary printed after a successful run.

use serde::Serialize;
use std::fmt;

/// Counts gathered while converting one document.
///
/// `annotations` is the number of entries in the document's list, while
/// `files_written` counts label files; the two differ whenever several
/// annotations share an image.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    /// Images declared in the document.
    pub images: usize,
    /// Categories declared in the document.
    pub categories: usize,
    /// Annotations converted to label lines.
    pub annotations: usize,
    /// Label files written to the output directory.
    pub files_written: usize,
}

impl fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of images: {}", self.images)?;
        writeln!(f, "Number of categories: {}", self.categories)?;
        writeln!(f, "Number of annotations: {}", self.annotations)?;
        writeln!(f, "Label files written: {}", self.files_written)
    }
}

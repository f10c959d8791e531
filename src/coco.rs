//! COCO JSON document model and loader.
//!
//! This module defines the subset of the COCO annotation schema the
//! converter consumes and the functions that load it from disk.
//!
//! # COCO Format Reference
//!
//! COCO bounding boxes use `[x, y, width, height]` format where:
//! - `(x, y)` is the top-left corner in absolute pixel coordinates
//! - `width` and `height` are the dimensions
//!
//! Only the keys listed on the types below are read; everything else in
//! the document (info, licenses, segmentation, areas, scores) is ignored.
//!
//! # Absent vs. empty annotations
//!
//! A document without an `annotations` key is treated differently from one
//! with an empty `annotations` list. The field is therefore an
//! `Option<Vec<_>>`: `None` means the key was absent and conversion must
//! fail, `Some(vec![])` means the document genuinely has zero annotations
//! and conversion succeeds with no label files written.

use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConvertError;
use crate::ids::{CategoryId, ImageId};

// ============================================================================
// Schema Types
// ============================================================================

/// Top-level COCO annotation document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CocoDocument {
    pub images: Vec<CocoImage>,

    pub categories: Vec<CocoCategory>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Vec<CocoAnnotation>>,
}

/// COCO image entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CocoImage {
    pub id: ImageId,
    pub width: u32,
    pub height: u32,

    /// Path as recorded in the document; may carry directory components.
    pub file_name: String,
}

/// COCO category entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CocoCategory {
    pub id: CategoryId,
    pub name: String,
}

/// COCO annotation entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CocoAnnotation {
    pub image_id: ImageId,
    pub category_id: CategoryId,

    /// COCO bbox format: [x, y, width, height] with (x,y) as top-left corner
    pub bbox: [f64; 4],
}

// ============================================================================
// Loading
// ============================================================================

/// Reads a COCO document from a JSON file.
///
/// # Arguments
/// * `path` - Path to the COCO JSON file
///
/// # Errors
/// Returns [`ConvertError::InputNotFound`] if the file does not exist,
/// [`ConvertError::CocoJsonParse`] if it is not valid COCO JSON.
///
/// # Example
/// ```no_run
/// use std::path::Path;
/// use coco2yolo::coco::read_coco_json;
///
/// let doc = read_coco_json(Path::new("annotations.json"))?;
/// # Ok::<(), coco2yolo::ConvertError>(())
/// ```
pub fn read_coco_json(path: &Path) -> Result<CocoDocument, ConvertError> {
    let file = File::open(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            ConvertError::InputNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConvertError::Io(source)
        }
    })?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader).map_err(|source| ConvertError::CocoJsonParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a COCO document from a JSON string.
///
/// Useful for testing without file I/O.
pub fn from_coco_str(json: &str) -> Result<CocoDocument, serde_json::Error> {
    serde_json::from_str(json)
}

/// Reads a COCO document from a JSON byte slice.
///
/// Useful for fuzzing and processing raw bytes without UTF-8 validation overhead.
pub fn from_coco_slice(bytes: &[u8]) -> Result<CocoDocument, serde_json::Error> {
    serde_json::from_slice(bytes)
}

// ============================================================================
// Document Queries
// ============================================================================

impl CocoDocument {
    /// Resolves categories to `(id, name)` pairs in document order.
    ///
    /// Document order is what defines the dense class-index space later,
    /// so this deliberately does not sort or deduplicate.
    pub fn category_names(&self) -> Vec<(CategoryId, &str)> {
        self.categories
            .iter()
            .map(|category| (category.id, category.name.as_str()))
            .collect()
    }

    /// Checks the structural minimum a convertible document must satisfy.
    ///
    /// Conversion needs at least one image and at least one category;
    /// `path` is only used to name the offending file in the error.
    pub fn check_structure(&self, path: &Path) -> Result<(), ConvertError> {
        if self.images.is_empty() {
            return Err(ConvertError::EmptyImages {
                path: path.to_path_buf(),
            });
        }
        if self.categories.is_empty() {
            return Err(ConvertError::EmptyCategories {
                path: path.to_path_buf(),
            });
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

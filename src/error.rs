use std::path::PathBuf;
use thiserror::Error;

use crate::ids::{CategoryId, ImageId};

/// The main error type for coco2yolo operations.
///
/// Every failure is fatal: the converter reports the first problem it
/// encounters and stops rather than writing a partial label set silently.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Input file not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse COCO JSON from {path}: {source}")]
    CocoJsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("No images declared in {path}")]
    EmptyImages { path: PathBuf },

    #[error("No categories declared in {path}")]
    EmptyCategories { path: PathBuf },

    #[error("Document has no 'annotations' list")]
    MissingAnnotations,

    #[error("Annotation references unknown image ID {image_id}")]
    MissingImage { image_id: ImageId },

    #[error("Annotation references undeclared category ID {category_id}")]
    UnknownCategory { category_id: CategoryId },

    #[error("Failed to write label file {path}: {source}")]
    LabelWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

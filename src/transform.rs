//! Annotation to label-record transformation.
//!
//! This is the middle of the pipeline: a single pass over the annotation
//! list that resolves each entry against the prebuilt lookup tables,
//! normalizes its box, and groups the results by owning image.

use std::collections::BTreeMap;

use crate::bbox::{NormalizedBox, PixelBox};
use crate::coco::CocoDocument;
use crate::error::ConvertError;
use crate::ids::ImageId;
use crate::index::{ClassIndex, ImageIndex};

/// One converted annotation, ready to be formatted as a label line.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelRecord {
    /// The owning image's recorded path; the writer derives the label
    /// file name from its stem.
    pub file_name: String,
    pub class_index: usize,
    pub bbox: NormalizedBox,
}

/// Converted records grouped by owning image.
///
/// A `BTreeMap` keeps groups in ascending image-ID order so the writer
/// visits files deterministically. Within a group, records stay in the
/// order their annotations appeared in the document.
pub type LabelGroups = BTreeMap<ImageId, Vec<LabelRecord>>;

/// Converts every annotation in the document and groups the results by image.
///
/// The walk is strict: the first annotation that references an undeclared
/// image or category aborts the whole conversion.
///
/// # Errors
/// * [`ConvertError::MissingAnnotations`] if the document has no
///   `annotations` key at all. An empty list is fine and yields empty groups.
/// * [`ConvertError::MissingImage`] if an annotation references an image
///   ID that is not declared.
/// * [`ConvertError::UnknownCategory`] if an annotation references a
///   category ID that is not declared.
pub fn group_annotations(
    doc: &CocoDocument,
    images: &ImageIndex,
    classes: &ClassIndex,
) -> Result<LabelGroups, ConvertError> {
    let annotations = doc
        .annotations
        .as_deref()
        .ok_or(ConvertError::MissingAnnotations)?;

    let mut groups = LabelGroups::new();
    for annotation in annotations {
        let info = images
            .get(annotation.image_id)
            .ok_or(ConvertError::MissingImage {
                image_id: annotation.image_id,
            })?;

        let bbox =
            PixelBox::from(annotation.bbox).normalize(info.width as f64, info.height as f64);

        let class_index =
            classes
                .class_of(annotation.category_id)
                .ok_or(ConvertError::UnknownCategory {
                    category_id: annotation.category_id,
                })?;

        groups
            .entry(annotation.image_id)
            .or_default()
            .push(LabelRecord {
                file_name: info.file_name.clone(),
                class_index,
                bbox,
            });
    }

    Ok(groups)
}

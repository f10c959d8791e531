//! End-to-end conversion pipeline.

use std::path::Path;

use crate::coco;
use crate::emit;
use crate::error::ConvertError;
use crate::index::{ClassIndex, ImageIndex};
use crate::report::ConversionReport;
use crate::transform;

/// Knobs for a conversion run.
#[derive(Clone, Debug, Default)]
pub struct ConvertOptions {
    /// Also write `classes.txt` next to the label files.
    pub classes_file: bool,
}

/// Converts one COCO JSON file into a directory of YOLO label files.
///
/// `output_dir` must already exist; the CLI creates it before calling
/// in here. The stages run strictly in order: load, check, index,
/// transform, emit. The first failure aborts the run, so a document
/// that fails to resolve never produces a partial label set beyond the
/// files already flushed when the error surfaced.
///
/// Converting the same input into the same directory twice produces
/// byte-identical files; stale files from other runs are overwritten,
/// never appended to.
pub fn convert_file(
    input: &Path,
    output_dir: &Path,
    opts: &ConvertOptions,
) -> Result<ConversionReport, ConvertError> {
    let doc = coco::read_coco_json(input)?;
    doc.check_structure(input)?;

    let images = ImageIndex::from_images(&doc.images);
    let classes = ClassIndex::from_category_names(doc.category_names());
    let groups = transform::group_annotations(&doc, &images, &classes)?;

    let files_written = emit::write_labels(&groups, output_dir)?;
    if opts.classes_file {
        emit::write_class_names(&classes, output_dir)?;
    }

    Ok(ConversionReport {
        images: doc.images.len(),
        categories: doc.categories.len(),
        annotations: doc.annotations.as_deref().map_or(0, |a| a.len()),
        files_written,
    })
}

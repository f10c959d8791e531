//! YOLO label file writer.
//!
//! One `.txt` file per annotated image, named after the stem of the
//! image's recorded path. Each line is
//! `<class> <cx> <cy> <w> <h>` with the four box values printed to six
//! decimal places. Images without annotations get no file.

use std::fs;
use std::path::Path;

use crate::error::ConvertError;
use crate::index::ClassIndex;
use crate::transform::{LabelGroups, LabelRecord};

/// Derives the label file name for an image path.
///
/// Only the basename's stem survives: `train/pic.jpg` becomes `pic.txt`,
/// so label files land flat in the output directory regardless of how
/// the document nests its image paths. A name without a stem degrades to
/// a bare `.txt`.
fn label_file_name(file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{stem}.txt")
}

/// Renders a group of records as the contents of one label file.
///
/// Useful for testing without file I/O. Every line is newline-terminated,
/// including the last.
pub fn labels_to_string(records: &[LabelRecord]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&format!(
            "{} {:.6} {:.6} {:.6} {:.6}\n",
            record.class_index, record.bbox.cx, record.bbox.cy, record.bbox.w, record.bbox.h
        ));
    }
    out
}

/// Writes one label file per group into `output_dir`.
///
/// The directory must already exist. Existing files are overwritten in
/// full, never appended to, so re-running a conversion converges on the
/// same bytes. Returns the number of files written.
///
/// # Errors
/// Returns [`ConvertError::LabelWrite`] naming the file that could not
/// be written.
pub fn write_labels(groups: &LabelGroups, output_dir: &Path) -> Result<usize, ConvertError> {
    let mut files_written = 0;
    for records in groups.values() {
        // Groups are created on first push, so `records` is never empty;
        // every record in it carries the same image path.
        let Some(first) = records.first() else {
            continue;
        };

        let path = output_dir.join(label_file_name(&first.file_name));
        fs::write(&path, labels_to_string(records))
            .map_err(|source| ConvertError::LabelWrite { path, source })?;
        files_written += 1;
    }

    Ok(files_written)
}

/// Writes `classes.txt` into `output_dir`: one class name per line, in
/// class-index order.
///
/// Downstream YOLO tooling conventionally reads this file to recover the
/// index-to-name mapping.
pub fn write_class_names(classes: &ClassIndex, output_dir: &Path) -> Result<(), ConvertError> {
    let mut contents = String::new();
    for name in classes.names() {
        contents.push_str(name);
        contents.push('\n');
    }

    let path = output_dir.join("classes.txt");
    fs::write(&path, contents).map_err(|source| ConvertError::LabelWrite { path, source })
}

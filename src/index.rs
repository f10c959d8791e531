//! Lookup tables built once per document.
//!
//! The per-annotation loop needs two resolutions: image ID to image
//! metadata, and category ID to dense class index. Both are built up
//! front from the document collections so each annotation costs a pair
//! of constant-time hash lookups instead of a scan.

use std::collections::HashMap;

use crate::coco::CocoImage;
use crate::ids::{CategoryId, ImageId};

/// Metadata needed to convert one annotation: the owning image's
/// recorded path and pixel dimensions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub file_name: String,
    pub width: u32,
    pub height: u32,
}

/// Image ID to metadata table.
#[derive(Clone, Debug, Default)]
pub struct ImageIndex {
    by_id: HashMap<ImageId, ImageInfo>,
}

impl ImageIndex {
    /// Builds the table from the document's image list.
    ///
    /// If two entries share an ID the later one wins, mirroring how a
    /// plain dict insert would behave.
    pub fn from_images(images: &[CocoImage]) -> Self {
        let by_id = images
            .iter()
            .map(|image| {
                (
                    image.id,
                    ImageInfo {
                        file_name: image.file_name.clone(),
                        width: image.width,
                        height: image.height,
                    },
                )
            })
            .collect();

        Self { by_id }
    }

    /// Looks up the metadata for an image ID.
    pub fn get(&self, id: ImageId) -> Option<&ImageInfo> {
        self.by_id.get(&id)
    }
}

/// Category ID to dense class index table.
///
/// YOLO classes are contiguous indexes starting at zero. The index space
/// is defined by the order categories appear in the document, not by
/// their numeric IDs, and categories sharing a name collapse onto the
/// slot of the first occurrence.
#[derive(Clone, Debug)]
pub struct ClassIndex {
    by_id: HashMap<CategoryId, usize>,
    names: Vec<String>,
}

impl ClassIndex {
    /// Builds the dense class-index space from the ordered id-to-name
    /// resolution (see [`CocoDocument::category_names`]).
    ///
    /// [`CocoDocument::category_names`]: crate::coco::CocoDocument::category_names
    pub fn from_category_names<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (CategoryId, &'a str)>,
    {
        let mut names: Vec<String> = Vec::new();
        let mut slots: HashMap<String, usize> = HashMap::new();
        let mut by_id: HashMap<CategoryId, usize> = HashMap::new();

        for (id, name) in pairs {
            let slot = match slots.get(name) {
                Some(&slot) => slot,
                None => {
                    let slot = names.len();
                    slots.insert(name.to_string(), slot);
                    names.push(name.to_string());
                    slot
                }
            };
            by_id.insert(id, slot);
        }

        Self { by_id, names }
    }

    /// Looks up the class index for a category ID.
    pub fn class_of(&self, id: CategoryId) -> Option<usize> {
        self.by_id.get(&id).copied()
    }

    /// The class names in index order.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

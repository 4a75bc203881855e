//! A batch preservation project.

use crate::item::Item;
use crate::metadata::ProjectMetadata;

/// A preservation project: an ordered set of items plus the metadata
/// export that describes them.
#[derive(Debug, Clone, Default)]
pub struct Project {
    pub items: Vec<Item>,
    pub metadata: ProjectMetadata,
}

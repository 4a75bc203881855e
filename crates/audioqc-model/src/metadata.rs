//! Spreadsheet metadata records from the project's metadata export.

use std::collections::BTreeMap;

/// Descriptive metadata for one item, as exported from the collection
/// management spreadsheet. Every field is optional; absent columns or blank
/// cells are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemMetadata {
    pub item_title: Option<String>,
    pub collection_title: Option<String>,
    pub item_date: Option<String>,
}

/// Metadata for a whole project, keyed by item id. Items without a
/// spreadsheet row simply have no entry.
#[derive(Debug, Clone, Default)]
pub struct ProjectMetadata {
    pub item_metadata: BTreeMap<String, ItemMetadata>,
}

impl ProjectMetadata {
    /// Metadata record for an item, if the spreadsheet has a row for it.
    pub fn for_item(&self, item_id: &str) -> Option<&ItemMetadata> {
        self.item_metadata.get(item_id)
    }
}

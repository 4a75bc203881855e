//! Item discovery over a batch directory tree.

use std::collections::BTreeMap;
use std::path::Path;

use audioqc_model::{FileCategory, Item, Project, ProjectMetadata};

use crate::error::{IngestError, Result};
use crate::export::load_metadata_export;

/// Discovers items in a project directory.
///
/// Each immediate subdirectory is one item; its name is the item id. Files
/// inside are classified by extension and listed sorted by name. Hidden
/// files and nested directories are skipped.
///
/// Returns items sorted by id.
pub fn discover_items(root: &Path) -> Result<Vec<Item>> {
    if !root.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut items = Vec::new();

    let entries = std::fs::read_dir(root).map_err(|e| IngestError::DirectoryRead {
        path: root.to_path_buf(),
        source: e,
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: root.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        let id = entry.file_name().to_string_lossy().to_string();
        if id.starts_with('.') {
            continue;
        }

        let files = list_item_files(&path)?;
        tracing::debug!(item = %id, "discovered item");
        items.push(Item { id, path, files });
    }

    items.sort_by(|a, b| a.id.cmp(&b.id));

    Ok(items)
}

/// Loads a whole project: discovered items plus the optional metadata
/// export spreadsheet.
pub fn load_project(root: &Path, export: Option<&Path>) -> Result<Project> {
    let items = discover_items(root)?;
    let metadata = match export {
        Some(path) => load_metadata_export(path)?,
        None => ProjectMetadata::default(),
    };
    tracing::debug!(
        items = items.len(),
        metadata_rows = metadata.item_metadata.len(),
        "project loaded"
    );
    Ok(Project { items, metadata })
}

fn list_item_files(dir: &Path) -> Result<BTreeMap<FileCategory, Vec<String>>> {
    let mut files: BTreeMap<FileCategory, Vec<String>> = BTreeMap::new();

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        if name.starts_with('.') {
            continue;
        }

        let category = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(FileCategory::from_extension)
            .unwrap_or(FileCategory::Other);

        files.entry(category).or_default().push(name);
    }

    for names in files.values_mut() {
        names.sort();
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_project_dir() -> TempDir {
        let dir = TempDir::new().unwrap();

        for (item, names) in [
            (
                "0001",
                vec!["0001.xml", "track02.wav", "track01.wav", "track01.mp3", "notes.txt"],
            ),
            ("0002", vec!["0002.xml", "side_a.wav", "label.jpg"]),
        ] {
            let item_dir = dir.path().join(item);
            std::fs::create_dir(&item_dir).unwrap();
            for name in names {
                std::fs::write(item_dir.join(name), b"data").unwrap();
            }
        }

        // Stray file at the project root is not an item
        std::fs::write(dir.path().join("export.csv"), b"Item ID\n").unwrap();

        dir
    }

    #[test]
    fn discovers_items_sorted_by_id() {
        let dir = create_project_dir();
        let items = discover_items(dir.path()).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "0001");
        assert_eq!(items[1].id, "0002");
    }

    #[test]
    fn classifies_and_sorts_files() {
        let dir = create_project_dir();
        let items = discover_items(dir.path()).unwrap();

        let item = &items[0];
        assert_eq!(
            item.files_in(FileCategory::Wav),
            ["track01.wav", "track02.wav"]
        );
        assert_eq!(item.files_in(FileCategory::Mp3), ["track01.mp3"]);
        assert_eq!(item.files_in(FileCategory::Txt), ["notes.txt"]);
        assert_eq!(item.mets_file(), Some("0001.xml"));
    }

    #[test]
    fn missing_root_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let err = discover_items(&missing).unwrap_err();
        assert!(matches!(err, IngestError::DirectoryNotFound { .. }));
    }
}

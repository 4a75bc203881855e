//! CSV loader for the collection management metadata export.

use std::path::Path;

use audioqc_model::{ItemMetadata, ProjectMetadata};

use crate::error::{IngestError, Result};

/// Load the metadata export spreadsheet.
///
/// The export must carry an `Item ID` column; `Item Title`,
/// `Collection Title`, and `Item Date` are optional. Rows with a blank id
/// are skipped; blank cells become `None`.
pub fn load_metadata_export(path: &Path) -> Result<ProjectMetadata> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();

    let id_idx = find_column(&headers, "Item ID")?;
    let title_idx = headers.iter().position(|h| h == "Item Title");
    let collection_idx = headers.iter().position(|h| h == "Collection Title");
    let date_idx = headers.iter().position(|h| h == "Item Date");

    let mut metadata = ProjectMetadata::default();

    for result in reader.records() {
        let record = result?;

        let id = record.get(id_idx).unwrap_or("").trim().to_string();
        if id.is_empty() {
            continue;
        }

        let row = ItemMetadata {
            item_title: optional_field(&record, title_idx),
            collection_title: optional_field(&record, collection_idx),
            item_date: optional_field(&record, date_idx),
        };

        metadata.item_metadata.insert(id, row);
    }

    tracing::debug!(rows = metadata.item_metadata.len(), "metadata export loaded");

    Ok(metadata)
}

fn find_column(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| IngestError::MissingColumn(name.to_string()))
}

fn optional_field(record: &csv::StringRecord, idx: Option<usize>) -> Option<String> {
    let value = record.get(idx?)?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_export(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_rows_keyed_by_item_id() {
        let file = write_export(
            "Item ID,Item Title,Collection Title,Item Date\n\
             0001,Oral history interview,Local History Collection,January 1 2020\n\
             0002,,,\n",
        );

        let metadata = load_metadata_export(file.path()).unwrap();
        assert_eq!(metadata.item_metadata.len(), 2);

        let row = metadata.for_item("0001").unwrap();
        assert_eq!(row.item_title.as_deref(), Some("Oral history interview"));
        assert_eq!(
            row.collection_title.as_deref(),
            Some("Local History Collection")
        );
        assert_eq!(row.item_date.as_deref(), Some("January 1 2020"));

        // Blank cells become None
        let row = metadata.for_item("0002").unwrap();
        assert_eq!(*row, ItemMetadata::default());
    }

    #[test]
    fn skips_blank_ids_and_tolerates_missing_optional_columns() {
        let file = write_export("Item ID\n0001\n   \n");

        let metadata = load_metadata_export(file.path()).unwrap();
        assert_eq!(metadata.item_metadata.len(), 1);
        assert!(metadata.for_item("0001").unwrap().item_title.is_none());
    }

    #[test]
    fn missing_id_column_is_an_error() {
        let file = write_export("Identifier,Item Title\n0001,Title\n");

        let err = load_metadata_export(file.path()).unwrap_err();
        assert!(matches!(err, IngestError::MissingColumn(ref c) if c == "Item ID"));
    }
}

//! Items and their categorized file listings.

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Category of a file within an item directory, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FileCategory {
    Xml,
    Wav,
    Mp3,
    Txt,
    Jpg,
    Other,
}

impl FileCategory {
    /// Classify a filename extension (case-insensitive).
    pub fn from_extension(extension: &str) -> Self {
        match extension.to_ascii_lowercase().as_str() {
            "xml" => Self::Xml,
            "wav" => Self::Wav,
            "mp3" => Self::Mp3,
            "txt" => Self::Txt,
            "jpg" | "jpeg" => Self::Jpg,
            _ => Self::Other,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Xml => "xml",
            Self::Wav => "wav",
            Self::Mp3 => "mp3",
            Self::Txt => "txt",
            Self::Jpg => "jpg",
            Self::Other => "other",
        }
    }
}

/// One item of a preservation project: a directory of digitized files
/// described by a single METS document.
#[derive(Debug, Clone)]
pub struct Item {
    /// Canonical object identifier; matches the directory name, the METS
    /// `OBJID` attribute, and the `dc:identifier` element.
    pub id: String,
    /// Filesystem location of the item directory.
    pub path: PathBuf,
    /// Filenames grouped by category, sorted by name within each category.
    pub files: BTreeMap<FileCategory, Vec<String>>,
}

impl Item {
    /// Filenames in a category; empty when the category is absent.
    pub fn files_in(&self, category: FileCategory) -> &[String] {
        self.files
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The item's METS document filename, if any.
    pub fn mets_file(&self) -> Option<&str> {
        self.files_in(FileCategory::Xml).first().map(String::as_str)
    }

    /// All audio filenames (wav then mp3), the set referenced by the METS
    /// administrative metadata and structural map.
    pub fn audio_files(&self) -> Vec<String> {
        let mut files = self.files_in(FileCategory::Wav).to_vec();
        files.extend(self.files_in(FileCategory::Mp3).iter().cloned());
        files
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item() -> Item {
        let mut files = BTreeMap::new();
        files.insert(
            FileCategory::Wav,
            vec!["track01.wav".to_string(), "track02.wav".to_string()],
        );
        files.insert(FileCategory::Mp3, vec!["track01.mp3".to_string()]);
        files.insert(FileCategory::Xml, vec!["0001.xml".to_string()]);
        Item {
            id: "0001".to_string(),
            path: PathBuf::from("/project/0001"),
            files,
        }
    }

    #[test]
    fn classifies_extensions_case_insensitively() {
        assert_eq!(FileCategory::from_extension("WAV"), FileCategory::Wav);
        assert_eq!(FileCategory::from_extension("Jpeg"), FileCategory::Jpg);
        assert_eq!(FileCategory::from_extension("md5"), FileCategory::Other);
    }

    #[test]
    fn missing_category_reads_as_empty() {
        let item = make_item();
        assert!(item.files_in(FileCategory::Txt).is_empty());
    }

    #[test]
    fn audio_files_concatenates_wav_then_mp3() {
        let item = make_item();
        assert_eq!(
            item.audio_files(),
            vec!["track01.wav", "track02.wav", "track01.mp3"]
        );
    }

    #[test]
    fn mets_file_is_first_xml() {
        assert_eq!(make_item().mets_file(), Some("0001.xml"));
    }
}

//! Validation findings and the append-only sink they accumulate in.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Severity of a validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The item violates the institutional profile.
    Error,
    /// Advisory only; a check was skipped for lack of comparison data.
    Warning,
}

impl Severity {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
        }
    }
}

/// One validation finding, attributed to a document and an item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub path: PathBuf,
    pub item_id: String,
    pub message: String,
    pub severity: Severity,
}

/// Append-only sink for validation findings. Validators only ever write;
/// reporting reads the accumulated list after the run.
#[derive(Debug, Default)]
pub struct FindingLog {
    findings: Vec<Finding>,
}

impl FindingLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error-severity finding.
    pub fn error(&mut self, path: &Path, item_id: &str, message: String) {
        self.findings.push(Finding {
            path: path.to_path_buf(),
            item_id: item_id.to_string(),
            message,
            severity: Severity::Error,
        });
    }

    /// Record a warning-severity finding.
    pub fn warn(&mut self, path: &Path, item_id: &str, message: String) {
        self.findings.push(Finding {
            path: path.to_path_buf(),
            item_id: item_id.to_string(),
            message,
            severity: Severity::Warning,
        });
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Findings attributed to one item, in the order they were recorded.
    pub fn findings_for<'a>(&'a self, item_id: &'a str) -> impl Iterator<Item = &'a Finding> {
        self.findings
            .iter()
            .filter(move |finding| finding.item_id == item_id)
    }

    pub fn error_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|finding| finding.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|finding| finding.severity == Severity::Warning)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_by_severity() {
        let mut log = FindingLog::new();
        let path = Path::new("/project/0001/0001.xml");
        log.error(path, "0001", "mets xml is not valid".to_string());
        log.warn(
            path,
            "0001",
            "item date not found in metadata export spreadsheet to validate against mets xml"
                .to_string(),
        );

        assert_eq!(log.error_count(), 1);
        assert_eq!(log.warning_count(), 1);
        assert!(log.has_errors());
        assert_eq!(log.findings_for("0001").count(), 2);
        assert_eq!(log.findings_for("0002").count(), 0);
    }

    #[test]
    fn finding_round_trips_through_serde() {
        let finding = Finding {
            path: PathBuf::from("/project/0001/0001.xml"),
            item_id: "0001".to_string(),
            message: "OBJID attribute does not exists in mets:mets".to_string(),
            severity: Severity::Error,
        };

        let json = serde_json::to_string(&finding).unwrap();
        assert!(json.contains("\"severity\":\"error\""));
        let back: Finding = serde_json::from_str(&json).unwrap();
        assert_eq!(back.item_id, finding.item_id);
        assert_eq!(back.severity, finding.severity);
    }
}

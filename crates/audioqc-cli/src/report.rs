//! JSON findings report.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;

use audioqc_model::{Finding, FindingLog};

const REPORT_SCHEMA: &str = "audioqc.findings-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
struct FindingsReportPayload<'a> {
    schema: &'static str,
    schema_version: u32,
    generated_at: String,
    items_checked: usize,
    error_count: usize,
    warning_count: usize,
    findings: &'a [Finding],
}

/// Write the accumulated findings as a schema-tagged JSON report.
pub fn write_findings_report(
    output_path: &Path,
    items_checked: usize,
    log: &FindingLog,
) -> Result<PathBuf> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let payload = FindingsReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        items_checked,
        error_count: log.error_count(),
        warning_count: log.warning_count(),
        findings: log.findings(),
    };

    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(output_path, format!("{json}\n"))?;
    Ok(output_path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    #[test]
    fn report_round_trips_through_serde() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("reports").join("findings.json");

        let mut log = FindingLog::new();
        let mets = Path::new("/project/0001/0001.xml");
        log.error(mets, "0001", "mets xml is not valid".to_string());
        log.warn(
            mets,
            "0001",
            "item title not found in metadata export spreadsheet to validate against mets xml"
                .to_string(),
        );

        let written = write_findings_report(&output, 2, &log).unwrap();
        assert_eq!(written, output);

        let contents = std::fs::read_to_string(&output).unwrap();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(value["schema"], "audioqc.findings-report");
        assert_eq!(value["items_checked"], 2);
        assert_eq!(value["error_count"], 1);
        assert_eq!(value["warning_count"], 1);

        let findings: Vec<Finding> =
            serde_json::from_value(value["findings"].clone()).unwrap();
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].item_id, "0001");
    }
}

use std::path::PathBuf;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use audioqc_ingest::load_project;
use audioqc_model::FindingLog;
use audioqc_validate::MetsValidator;

use crate::cli::Cli;
use crate::report::write_findings_report;

/// Outcome of a validation run, for the summary and exit code.
pub struct RunResult {
    pub item_ids: Vec<String>,
    pub log: FindingLog,
    pub report_path: Option<PathBuf>,
}

impl RunResult {
    pub fn has_errors(&self) -> bool {
        self.log.has_errors()
    }
}

pub fn run_validation(args: &Cli) -> Result<RunResult> {
    let project = load_project(&args.project_dir, args.export.as_deref())?;
    info!(items = project.items.len(), "project loaded");

    let mut log = FindingLog::new();

    let progress = ProgressBar::new(project.items.len() as u64);
    progress.set_style(ProgressStyle::with_template(
        "{msg} [{bar:40}] {pos}/{len}",
    )?);
    progress.set_message("METS validation");

    {
        let mut validator = MetsValidator::new(&project.metadata, &mut log);
        for item in &project.items {
            validator.validate_item(item)?;
            progress.inc(1);
        }
    }
    progress.finish_and_clear();

    info!(
        errors = log.error_count(),
        warnings = log.warning_count(),
        "validation finished"
    );

    let report_path = match &args.report {
        Some(path) => Some(write_findings_report(path, project.items.len(), &log)?),
        None => None,
    };

    Ok(RunResult {
        item_ids: project.items.iter().map(|item| item.id.clone()).collect(),
        log,
        report_path,
    })
}

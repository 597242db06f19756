//! Discover → parse → dedup → write

use crate::config::Config;
use crate::discovery::discover_files;
use crate::error::Result;
use crate::parser::parse_file;
use crate::types::RecordSet;
use crate::writer::write_workbook;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// What a run did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Message files found
    pub discovered: usize,

    /// Files that produced a record
    pub parsed: usize,

    /// Files dropped for missing fields or parse failures
    pub skipped: usize,

    /// Rows written after dedup
    pub unique: usize,

    /// Workbook path, when one was written
    pub output: Option<PathBuf>,
}

/// Run the whole pipeline for one directory.
///
/// Discovery and per-file failures are logged and skipped. Only a failure to
/// write the workbook is returned.
pub fn run(config: &Config) -> Result<RunSummary> {
    let files = discover_files(config.input_dir(), &config.suffix).unwrap_or_else(|e| {
        error!("File discovery failed: {e}");
        Vec::new()
    });
    info!("Found {} {} files in {}", files.len(), config.suffix, config.input_dir().display());

    let mut summary = RunSummary {
        discovered: files.len(),
        ..RunSummary::default()
    };

    if files.is_empty() {
        info!("No {} files found, nothing to write", config.suffix);
        return Ok(summary);
    }

    let records = collect_records(&files, &mut summary);
    summary.unique = records.len();
    info!(
        "Parsed {} of {} files, {} unique registrants",
        summary.parsed, summary.discovered, summary.unique
    );

    let output = config.output_path();
    write_workbook(&records.into_records(), &config.sheet_name, &output)?;
    info!("Wrote roster to {}", output.display());

    summary.output = Some(output);
    Ok(summary)
}

/// Parse every file in order, keeping the last record per email
pub fn collect_records(files: &[PathBuf], summary: &mut RunSummary) -> RecordSet {
    let mut records = RecordSet::new();

    for path in files {
        match parse_file(path) {
            Ok(record) => {
                summary.parsed += 1;
                if let Some(previous) = records.insert(record) {
                    info!("{} replaces an earlier entry for {}", file_name(path), previous.email);
                }
            }
            Err(e) if e.is_missing_fields() => {
                summary.skipped += 1;
                warn!("Name, phone number or email not found in {}: {e}", file_name(path));
            }
            Err(e) => {
                summary.skipped += 1;
                error!("Failed to parse {}: {e}", file_name(path));
            }
        }
    }

    records
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

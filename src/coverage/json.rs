use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use super::CoverageReport;
use crate::report_helpers;

/// Pretty-printed JSON document for a report (2-space indent, non-ASCII
/// kept as-is).
pub fn to_json(report: &CoverageReport) -> Result<String, Box<dyn Error>> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Write the report into `results_dir/file_name`, creating the directory
/// if needed. Returns the written path.
pub fn save_report(
    report: &CoverageReport,
    results_dir: &Path,
    file_name: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    fs::create_dir_all(results_dir)
        .map_err(|e| format!("cannot create {}: {e}", results_dir.display()))?;
    let path = results_dir.join(file_name);
    fs::write(&path, to_json(report)?)
        .map_err(|e| format!("cannot write {}: {e}", path.display()))?;
    Ok(path)
}

pub fn print_json(report: &CoverageReport) -> Result<(), Box<dyn Error>> {
    report_helpers::print_json_stdout(report)
}

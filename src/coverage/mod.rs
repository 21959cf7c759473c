//! Coverage estimation (`covscan` main flow).
//!
//! For each configured service, scans `src/main/<lang>` and `src/test/<lang>`,
//! derives count-based metrics, lists source types without a name-matching
//! test type, and turns both into recommendations. Optionally runs the
//! service's external test task. Per-service records are merged into one
//! report that is saved as JSON and summarized on the console.
//!
//! Faults stay local: an unreadable file drops that file, a missing
//! directory counts as empty, a failing test task is recorded in its
//! service's record. Only config and report persistence errors abort.

/// Cross-service statistics.
mod aggregate;
/// Report data structures shared by the sink and the printer.
pub(crate) mod data;
/// JSON persistence of the report.
mod json;
/// File/type/method/line totals and ratios.
pub mod metrics;
/// Missing-test detection by naming convention.
pub mod missing;
/// Fixed-threshold improvement suggestions.
pub mod recommend;
/// Console summary.
mod report;

use std::error::Error;
use std::path::Path;

use chrono::Local;
use indexmap::IndexMap;

use crate::config::{Config, ServiceSpec};
use crate::runner::{GradleRunner, TestRunner};
use crate::scan::{self, Language};

pub use aggregate::aggregate;
pub use data::*;
pub use json::save_report;

/// Local time in ISO-8601 with microseconds.
fn timestamp() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

/// Analyze one service from its source and test trees.
///
/// Missing directories count as empty trees. The test run is left unset.
pub fn analyze_service(
    source_dir: &Path,
    test_dir: &Path,
    service_name: &str,
    lang: &Language,
) -> ServiceCoverageRecord {
    let source_files = scan::scan(source_dir, lang);
    let test_files = scan::scan(test_dir, lang);

    let metrics = metrics::compute(&source_files, &test_files);
    let missing_tests = missing::find_missing(&source_files, &test_files, lang);
    let recommendations = recommend::recommend(&metrics, &missing_tests);

    ServiceCoverageRecord {
        service_name: service_name.to_string(),
        timestamp: timestamp(),
        source_files,
        test_files,
        metrics,
        missing_tests,
        recommendations,
        test_run: None,
    }
}

/// Build the report for every service whose root directory exists.
///
/// When a runner is given it is invoked exactly once per analyzed service.
pub fn build_report(
    project_root: &Path,
    services: &[ServiceSpec],
    lang: &Language,
    runner: Option<&dyn TestRunner>,
) -> CoverageReport {
    let mut records = IndexMap::new();

    for service in services {
        if !service.path.is_dir() {
            eprintln!(
                "note: skipping {}: {} not found",
                service.name,
                service.path.display()
            );
            continue;
        }

        let source_dir = service.path.join("src").join("main").join(lang.source_dir);
        let test_dir = service.path.join("src").join("test").join(lang.source_dir);
        let mut record = analyze_service(&source_dir, &test_dir, &service.name, lang);

        if let Some(runner) = runner {
            let result = runner.run(&service.path);
            if result.timed_out() {
                eprintln!("warning: {}: test run timed out", service.name);
            } else if !result.success {
                eprintln!("warning: {}: test run failed", service.name);
            }
            record.test_run = Some(result);
        }

        records.insert(service.name.clone(), record);
    }

    let overall_statistics = aggregate(&records);
    CoverageReport {
        timestamp: timestamp(),
        project_root: project_root.display().to_string(),
        services: records,
        overall_statistics,
    }
}

/// Entry point: analyze, save the report, then print it as a summary or JSON.
pub fn run(config: &Config, lang: &Language, json: bool) -> Result<(), Box<dyn Error>> {
    let gradle = GradleRunner::new(config.timeout);
    let runner: Option<&dyn TestRunner> = if config.run_tests {
        Some(&gradle)
    } else {
        None
    };

    let report = build_report(&config.project_root, &config.services, lang, runner);
    let path = save_report(&report, &config.results_dir, &config.report_name)?;

    if json {
        json::print_json(&report)?;
        eprintln!("note: report saved to {}", path.display());
    } else {
        report::print_summary(&report);
        println!();
        println!("Report saved to {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

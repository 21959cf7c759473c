/// Console summary of a coverage report.
///
/// Presentation only: overall totals, one block per service, then the
/// numbered list of distinct recommendations.
use super::{CoverageReport, ServiceCoverageRecord};
use crate::report_helpers::{format_pct, separator};
use crate::runner::TestRunResult;

const WIDTH: usize = 60;

/// One-line status of the external test run.
fn test_run_status(run: Option<&TestRunResult>) -> String {
    match run {
        None => "not run".to_string(),
        Some(r) if r.success => "passed".to_string(),
        Some(r) => match &r.error {
            Some(err) => format!("failed ({err})"),
            None => format!("failed (exit code {})", r.exit_code),
        },
    }
}

fn print_service(name: &str, record: &ServiceCoverageRecord) {
    let m = &record.metrics;
    println!(" {name}:");
    println!("   Source files:       {}", m.source_file_count);
    println!("   Test files:         {}", m.test_file_count);
    println!(
        "   Classes:            {} source, {} test",
        m.source_type_count, m.test_type_count
    );
    println!(
        "   Methods:            {} source, {} test",
        m.source_method_count, m.test_method_count
    );
    println!("   File coverage:      {}", format_pct(m.file_coverage_pct));
    println!("   Class coverage:     {}", format_pct(m.type_coverage_pct));
    println!(
        "   Test code ratio:    {}",
        format_pct(m.test_to_source_line_ratio_pct)
    );
    println!("   Missing tests:      {} classes", record.missing_tests.len());
    println!(
        "   Test run:           {}",
        test_run_status(record.test_run.as_ref())
    );
}

pub fn print_summary(report: &CoverageReport) {
    let sep = separator(WIDTH);
    let overall = &report.overall_statistics;

    println!();
    println!("{sep}");
    println!(" Test Coverage Estimate");
    println!("{sep}");
    println!(" Project:             {}", report.project_root);
    println!(" Services:            {}", overall.total_services);
    println!(" Source files:        {}", overall.total_source_files);
    println!(" Test files:          {}", overall.total_test_files);
    println!(
        " File coverage:       {}",
        format_pct(overall.overall_file_coverage_pct)
    );
    println!(" Missing tests:       {} classes", overall.total_missing_tests);

    if !report.services.is_empty() {
        println!("{sep}");
        for (name, record) in &report.services {
            print_service(name, record);
        }
    }

    println!("{sep}");
    if overall.unique_recommendations.is_empty() {
        println!(" No recommendations.");
    } else {
        println!(" Recommendations:");
        for (i, rec) in overall.unique_recommendations.iter().enumerate() {
            println!("   {}. {rec}", i + 1);
        }
    }
    println!("{sep}");
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;

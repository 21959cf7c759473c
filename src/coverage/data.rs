/// Data structures for the coverage report.
///
/// Populated by the analyzers and consumed by the JSON sink and the
/// console summary. Serialized key names are stable: downstream tooling
/// parses the saved report.
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::runner::TestRunResult;
use crate::scan::FileSummary;

/// Count-based coverage estimate for one service.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CoverageMetrics {
    #[serde(rename = "total_source_files")]
    pub source_file_count: usize,
    #[serde(rename = "total_test_files")]
    pub test_file_count: usize,
    #[serde(rename = "total_source_classes")]
    pub source_type_count: usize,
    #[serde(rename = "total_test_classes")]
    pub test_type_count: usize,
    #[serde(rename = "total_source_methods")]
    pub source_method_count: usize,
    #[serde(rename = "total_test_methods")]
    pub test_method_count: usize,
    #[serde(rename = "total_source_loc")]
    pub source_line_count: usize,
    #[serde(rename = "total_test_loc")]
    pub test_line_count: usize,
    /// Test files per source file, as a percentage.
    #[serde(rename = "estimated_file_coverage")]
    pub file_coverage_pct: f64,
    /// Test types per source type, as a percentage.
    #[serde(rename = "estimated_class_coverage")]
    pub type_coverage_pct: f64,
    /// Test lines per source line, as a percentage.
    #[serde(rename = "test_to_source_ratio")]
    pub test_to_source_line_ratio_pct: f64,
}

/// A source type with no name-matching test type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingTestEntry {
    #[serde(rename = "source_class")]
    pub source_type_name: String,
    #[serde(rename = "source_file")]
    pub source_file_path: String,
    #[serde(rename = "suggested_test_file")]
    pub suggested_test_file_name: String,
}

/// Everything learned about one service in one run.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceCoverageRecord {
    pub service_name: String,
    pub timestamp: String,
    pub source_files: Vec<FileSummary>,
    pub test_files: Vec<FileSummary>,
    #[serde(rename = "coverage_metrics")]
    pub metrics: CoverageMetrics,
    pub missing_tests: Vec<MissingTestEntry>,
    pub recommendations: Vec<String>,
    /// Present only when the external test task was invoked.
    #[serde(
        rename = "gradle_test_result",
        skip_serializing_if = "Option::is_none"
    )]
    pub test_run: Option<TestRunResult>,
}

/// Cross-service totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OverallStatistics {
    pub total_services: usize,
    pub total_source_files: usize,
    pub total_test_files: usize,
    pub total_missing_tests: usize,
    #[serde(rename = "overall_file_coverage")]
    pub overall_file_coverage_pct: f64,
    /// Deduplicated recommendations, first-seen order.
    pub unique_recommendations: IndexSet<String>,
}

/// Top-level report artifact.
#[derive(Debug, Clone, Serialize)]
pub struct CoverageReport {
    pub timestamp: String,
    pub project_root: String,
    /// Service name to record, in analysis order.
    pub services: IndexMap<String, ServiceCoverageRecord>,
    pub overall_statistics: OverallStatistics,
}

use super::data::{CoverageMetrics, MissingTestEntry};

pub const LOW_FILE_COVERAGE: &str = "file coverage low, add more test files";
pub const LOW_TEST_VOLUME: &str =
    "test code volume relatively low, write more comprehensive cases";
pub const LOW_TEST_METHODS: &str = "test method count relatively low, add more test methods";

/// File coverage below this percentage triggers a recommendation.
const FILE_COVERAGE_THRESHOLD: f64 = 50.0;
/// Test-to-source line ratio below this percentage triggers a recommendation.
const LINE_RATIO_THRESHOLD: f64 = 30.0;
/// Minimum test methods per source method.
const METHOD_RATIO_THRESHOLD: f64 = 0.5;

pub fn missing_tests_message(count: usize) -> String {
    format!("found {count} classes missing tests, add corresponding test classes")
}

/// Apply the fixed rule set. Every matching rule fires, in rule order.
pub fn recommend(metrics: &CoverageMetrics, missing_tests: &[MissingTestEntry]) -> Vec<String> {
    let mut out = Vec::new();

    if metrics.file_coverage_pct < FILE_COVERAGE_THRESHOLD {
        out.push(LOW_FILE_COVERAGE.to_string());
    }
    if metrics.test_to_source_line_ratio_pct < LINE_RATIO_THRESHOLD {
        out.push(LOW_TEST_VOLUME.to_string());
    }
    if !missing_tests.is_empty() {
        out.push(missing_tests_message(missing_tests.len()));
    }
    if (metrics.test_method_count as f64)
        < metrics.source_method_count as f64 * METHOD_RATIO_THRESHOLD
    {
        out.push(LOW_TEST_METHODS.to_string());
    }

    out
}

#[cfg(test)]
#[path = "recommend_test.rs"]
mod tests;

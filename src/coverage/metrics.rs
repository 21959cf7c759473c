//! Count-based coverage metrics.
//!
//! Sums files, types, methods and non-blank lines over a source tree and a
//! test tree, and derives three ratios from them. Every ratio is 0 when its
//! denominator is 0 and is rounded to two decimals.

use super::data::CoverageMetrics;
use crate::scan::FileSummary;

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `numerator / denominator * 100`, rounded to two decimals; 0 for an empty
/// denominator.
pub fn percentage(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    round2(numerator as f64 / denominator as f64 * 100.0)
}

struct Totals {
    files: usize,
    types: usize,
    methods: usize,
    lines: usize,
}

fn totals(files: &[FileSummary]) -> Totals {
    Totals {
        files: files.len(),
        types: files.iter().map(|f| f.types.len()).sum(),
        methods: files.iter().map(|f| f.methods.len()).sum(),
        lines: files.iter().map(|f| f.line_count).sum(),
    }
}

/// Compute coverage metrics for a pair of scanned trees.
pub fn compute(source_files: &[FileSummary], test_files: &[FileSummary]) -> CoverageMetrics {
    let src = totals(source_files);
    let test = totals(test_files);

    CoverageMetrics {
        source_file_count: src.files,
        test_file_count: test.files,
        source_type_count: src.types,
        test_type_count: test.types,
        source_method_count: src.methods,
        test_method_count: test.methods,
        source_line_count: src.lines,
        test_line_count: test.lines,
        file_coverage_pct: percentage(test.files, src.files),
        type_coverage_pct: percentage(test.types, src.types),
        test_to_source_line_ratio_pct: percentage(test.lines, src.lines),
    }
}

#[cfg(test)]
#[path = "metrics_test.rs"]
mod tests;

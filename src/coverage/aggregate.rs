use indexmap::{IndexMap, IndexSet};

use super::data::{OverallStatistics, ServiceCoverageRecord};
use super::metrics::percentage;

/// Combine per-service records into project-wide statistics.
pub fn aggregate(services: &IndexMap<String, ServiceCoverageRecord>) -> OverallStatistics {
    let mut stats = OverallStatistics {
        total_services: services.len(),
        ..OverallStatistics::default()
    };
    let mut recommendations: IndexSet<String> = IndexSet::new();

    for record in services.values() {
        stats.total_source_files += record.metrics.source_file_count;
        stats.total_test_files += record.metrics.test_file_count;
        stats.total_missing_tests += record.missing_tests.len();
        recommendations.extend(record.recommendations.iter().cloned());
    }

    stats.overall_file_coverage_pct = percentage(stats.total_test_files, stats.total_source_files);
    stats.unique_recommendations = recommendations;
    stats
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod tests;

use super::*;

fn summary(types: &[&str], methods: &[&str], lines: usize) -> FileSummary {
    FileSummary {
        relative_path: "F.java".to_string(),
        absolute_path: "/p/F.java".to_string(),
        types: types.iter().map(|s| s.to_string()).collect(),
        methods: methods.iter().map(|s| s.to_string()).collect(),
        line_count: lines,
    }
}

#[test]
fn percentage_zero_denominator() {
    assert_eq!(percentage(0, 0), 0.0);
    assert_eq!(percentage(5, 0), 0.0);
}

#[test]
fn percentage_rounds_to_two_decimals() {
    assert_eq!(percentage(1, 3), 33.33);
    assert_eq!(percentage(2, 3), 66.67);
    assert_eq!(percentage(1, 2), 50.0);
}

#[test]
fn percentage_can_exceed_hundred() {
    assert_eq!(percentage(3, 2), 150.0);
}

#[test]
fn round2_values() {
    assert_eq!(round2(12.344), 12.34);
    assert_eq!(round2(12.346), 12.35);
    assert_eq!(round2(0.0), 0.0);
}

#[test]
fn compute_empty_trees() {
    let m = compute(&[], &[]);
    assert_eq!(m, CoverageMetrics::default());
    assert_eq!(m.file_coverage_pct, 0.0);
    assert_eq!(m.type_coverage_pct, 0.0);
    assert_eq!(m.test_to_source_line_ratio_pct, 0.0);
    assert!(!m.file_coverage_pct.is_nan());
}

#[test]
fn compute_no_tests() {
    let src = vec![summary(&["Widget"], &["a", "b"], 10)];
    let m = compute(&src, &[]);
    assert_eq!(m.source_file_count, 1);
    assert_eq!(m.test_file_count, 0);
    assert_eq!(m.file_coverage_pct, 0.0);
    assert_eq!(m.type_coverage_pct, 0.0);
    assert_eq!(m.test_to_source_line_ratio_pct, 0.0);
}

#[test]
fn compute_tests_without_sources() {
    let test = vec![summary(&["OrphanTest"], &["t"], 7)];
    let m = compute(&[], &test);
    assert_eq!(m.test_file_count, 1);
    assert_eq!(m.file_coverage_pct, 0.0, "no source files: denominator is 0");
    assert_eq!(m.test_to_source_line_ratio_pct, 0.0);
}

#[test]
fn compute_sums_everything() {
    let src = vec![
        summary(&["A", "AInner"], &["a1", "a2", "a3"], 40),
        summary(&["B"], &["b1"], 20),
        summary(&[], &[], 0),
    ];
    let test = vec![summary(&["ATest"], &["t1", "t2"], 15)];
    let m = compute(&src, &test);

    assert_eq!(m.source_file_count, 3);
    assert_eq!(m.test_file_count, 1);
    assert_eq!(m.source_type_count, 3);
    assert_eq!(m.test_type_count, 1);
    assert_eq!(m.source_method_count, 4);
    assert_eq!(m.test_method_count, 2);
    assert_eq!(m.source_line_count, 60);
    assert_eq!(m.test_line_count, 15);
    assert_eq!(m.file_coverage_pct, 33.33);
    assert_eq!(m.type_coverage_pct, 33.33);
    assert_eq!(m.test_to_source_line_ratio_pct, 25.0);
}

#[test]
fn compute_serializes_with_report_keys() {
    let m = compute(&[summary(&["A"], &["a"], 4)], &[summary(&["ATest"], &[], 2)]);
    let v = serde_json::to_value(&m).unwrap();
    assert_eq!(v["total_source_files"], 1);
    assert_eq!(v["total_test_files"], 1);
    assert_eq!(v["total_source_classes"], 1);
    assert_eq!(v["total_test_classes"], 1);
    assert_eq!(v["total_source_methods"], 1);
    assert_eq!(v["total_test_methods"], 0);
    assert_eq!(v["total_source_loc"], 4);
    assert_eq!(v["total_test_loc"], 2);
    assert_eq!(v["estimated_file_coverage"], 100.0);
    assert_eq!(v["estimated_class_coverage"], 100.0);
    assert_eq!(v["test_to_source_ratio"], 50.0);
}

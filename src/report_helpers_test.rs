use super::*;

#[test]
fn separator_width() {
    let s = separator(5);
    // Each ─ is 3 bytes in UTF-8
    assert_eq!(s.chars().count(), 5);
    assert_eq!(s.len(), 15);
}

#[test]
fn separator_zero() {
    assert_eq!(separator(0), "");
}

#[test]
fn format_pct_two_decimals() {
    assert_eq!(format_pct(0.0), "0.00%");
    assert_eq!(format_pct(50.0), "50.00%");
    assert_eq!(format_pct(33.333), "33.33%");
}

#[test]
fn print_json_stdout_works() {
    let data = vec![1, 2, 3];
    print_json_stdout(&data).unwrap();
}

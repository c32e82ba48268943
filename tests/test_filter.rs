//! Tests for dropping rows without timing

use captime::pipeline::{has_timing, retain_timed_rows, CsvRow};

fn row(start: Option<&str>, end: Option<&str>, text: &str) -> CsvRow {
    CsvRow {
        start_time: start.map(str::to_string),
        end_time: end.map(str::to_string),
        text: Some(text.to_string()),
        layer_id: Some("1".to_string()),
    }
}

#[test]
fn test_has_timing_requires_both_fields() {
    assert!(has_timing(&row(Some("0;0;1;0"), Some("0;0;2;0"), "ok")));
    assert!(!has_timing(&row(None, Some("0;0;2;0"), "no start")));
    assert!(!has_timing(&row(Some("0;0;1;0"), None, "no end")));
    assert!(!has_timing(&row(Some(""), Some("0;0;2;0"), "empty start")));
    assert!(!has_timing(&row(Some("0;0;1;0"), Some(""), "empty end")));
}

#[test]
fn test_presence_check_does_not_validate_format() {
    // Malformed but non-empty values survive the filter and fail later
    assert!(has_timing(&row(Some("garbage"), Some(" "), "kept")));
}

#[test]
fn test_retain_timed_rows_preserves_order() {
    let rows = vec![
        row(Some("0;0;1;0"), Some("0;0;2;0"), "first"),
        row(Some(""), Some("0;0;3;0"), "dropped"),
        row(Some("0;0;4;0"), Some("0;0;5;0"), "second"),
        row(None, None, "dropped too"),
        row(Some("0;0;6;0"), Some("0;0;7;0"), "third"),
    ];

    let kept = retain_timed_rows(rows);

    let texts: Vec<_> = kept.iter().filter_map(|r| r.text.as_deref()).collect();
    assert_eq!(texts, vec!["first", "second", "third"]);
}

#[test]
fn test_retain_timed_rows_empty_input() {
    assert!(retain_timed_rows(Vec::new()).is_empty());
}

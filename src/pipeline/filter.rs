//! Row filtering - drop captions without both timing cells

use super::record::CsvRow;

/// True when the cell holds a non-empty value.
fn is_present(cell: &Option<String>) -> bool {
    cell.as_deref().is_some_and(|value| !value.is_empty())
}

/// Whether a row carries both a start and an end timecode.
pub fn has_timing(row: &CsvRow) -> bool {
    is_present(&row.start_time) && is_present(&row.end_time)
}

/// Keep only rows with both timecodes present, preserving their order.
///
/// Rejected rows are dropped silently; callers compare lengths if they need a count.
pub fn retain_timed_rows(mut rows: Vec<CsvRow>) -> Vec<CsvRow> {
    rows.retain(has_timing);
    rows
}

//! Single file conversion: caption CSV in, JSON array out

use std::path::Path;

use anyhow::{Context, Result};
use encoding_rs::Encoding;

use super::filter::retain_timed_rows;
use super::loader::load_rows;
use super::record::{CsvRow, JsonRecord};
use super::timecode::parse_timecode;

/// Row counts for one converted file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionStats {
    /// Data rows found in the CSV (header excluded)
    pub rows_read: usize,
    /// Records written to the JSON array
    pub rows_written: usize,
}

impl ConversionStats {
    /// Rows dropped for missing a start or end time.
    pub fn rows_dropped(&self) -> usize {
        self.rows_read.saturating_sub(self.rows_written)
    }
}

/// Convert one timed row. Both timecodes must already be present.
fn to_record(row: CsvRow) -> Result<JsonRecord> {
    let start_time = parse_timecode(row.start_time.as_deref().unwrap_or_default())
        .context("Invalid startTime")?;
    let end_time =
        parse_timecode(row.end_time.as_deref().unwrap_or_default()).context("Invalid endTime")?;

    Ok(JsonRecord {
        start_time,
        end_time,
        text: row.text.unwrap_or_default(),
        layer_id: row.layer_id.unwrap_or_default(),
    })
}

/// Drop untimed rows and convert the rest, stopping at the first bad timecode.
pub fn convert_rows(rows: Vec<CsvRow>) -> Result<Vec<JsonRecord>> {
    retain_timed_rows(rows)
        .into_iter()
        .enumerate()
        .map(|(idx, row)| to_record(row).with_context(|| format!("Caption #{}", idx + 1)))
        .collect()
}

/// Serialize records as a 2-space indented JSON array.
pub fn records_to_json(records: &[JsonRecord]) -> Result<String> {
    serde_json::to_string_pretty(records).context("Failed to serialize captions to JSON")
}

/// Convert a caption CSV file into a JSON file, overwriting `output`.
pub fn convert_file(
    input: &Path,
    output: &Path,
    encoding: &'static Encoding,
) -> Result<ConversionStats> {
    let rows = load_rows(input, encoding)?;
    let rows_read = rows.len();

    let records = convert_rows(rows)
        .with_context(|| format!("Failed to convert timecodes in {}", input.display()))?;
    let json = records_to_json(&records)?;

    std::fs::write(output, json)
        .with_context(|| format!("Failed to write JSON file: {}", output.display()))?;

    Ok(ConversionStats {
        rows_read,
        rows_written: records.len(),
    })
}

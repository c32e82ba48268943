//! Caption CSV loader
//!
//! Files are decoded to text first (so exports in legacy code pages can be
//! read), then parsed with polars against a fixed four-column string schema.
//! The physical header row is skipped and columns are mapped by position onto
//! [`CSV_COLUMNS`](super::record::CSV_COLUMNS), whatever the header says.

use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use encoding_rs::Encoding;
use polars::prelude::*;

use super::record::{CsvRow, CSV_COLUMNS};

/// Read and decode a caption CSV file into positional rows.
///
/// A byte order mark, when present, overrides `encoding`. Undecodable bytes
/// are replaced with U+FFFD rather than failing the file.
pub fn load_rows(path: &Path, encoding: &'static Encoding) -> Result<Vec<CsvRow>> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read CSV file: {}", path.display()))?;
    let (text, _, _) = encoding.decode(&bytes);

    parse_rows(&text).with_context(|| format!("Failed to parse CSV file: {}", path.display()))
}

/// Schema applied to every file: the four caption fields, all as text.
fn caption_schema() -> Schema {
    Schema::from_iter(
        CSV_COLUMNS
            .iter()
            .map(|name| Field::new((*name).into(), DataType::String)),
    )
}

/// Parse CSV text into rows, skipping the header line.
///
/// The header line is dropped before parsing so its width never decides how
/// many cells a data row contributes. Blank lines produce no row.
pub fn parse_rows(text: &str) -> Result<Vec<CsvRow>> {
    let body = text.split_once('\n').map(|(_, rest)| rest).unwrap_or("");
    // polars rejects input with no lines at all
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    let df = CsvReadOptions::default()
        .with_has_header(false)
        .with_schema(Some(Arc::new(caption_schema())))
        .with_parse_options(CsvParseOptions::default().with_truncate_ragged_lines(true))
        .into_reader_with_file_handle(Cursor::new(body.as_bytes()))
        .finish()?;

    let cells = CSV_COLUMNS
        .iter()
        .map(|name| df.column(name)?.as_materialized_series().str())
        .collect::<PolarsResult<Vec<&StringChunked>>>()?;

    let rows = (0..df.height())
        .map(|row_idx| {
            CsvRow::from_cells(
                cells.iter().map(|ca| ca.get(row_idx).map(str::to_string)),
            )
        })
        .filter(|row| *row != CsvRow::default())
        .collect();

    Ok(rows)
}

//! Row types flowing through the conversion pipeline

use serde::{Serialize, Serializer};

/// Header names expected in caption timing exports, in positional order.
///
/// The physical header row of a file is skipped; columns are always mapped
/// by position onto these fields.
pub const CSV_COLUMNS: [&str; 4] = ["Start Time", "End Time", "Text", "Layer ID"];

/// One data row of a caption timing CSV, before any conversion.
///
/// A cell that is absent from the row (short row or fewer columns in the
/// file) is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvRow {
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub text: Option<String>,
    pub layer_id: Option<String>,
}

impl CsvRow {
    /// Build a row from positional cells, ignoring anything past the fourth.
    pub fn from_cells<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = Option<String>>,
    {
        let mut cells = cells.into_iter();
        Self {
            start_time: cells.next().flatten(),
            end_time: cells.next().flatten(),
            text: cells.next().flatten(),
            layer_id: cells.next().flatten(),
        }
    }
}

/// A converted caption entry as written to the output JSON array.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonRecord {
    #[serde(rename = "startTime", serialize_with = "serialize_seconds")]
    pub start_time: f64,
    #[serde(rename = "endTime", serialize_with = "serialize_seconds")]
    pub end_time: f64,
    pub text: String,
    #[serde(rename = "layerID")]
    pub layer_id: String,
}

/// Largest magnitude at which every integer is exactly representable in f64.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Write whole seconds as integers (`120`) and everything else as a float (`90.5`).
fn serialize_seconds<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_finite() && value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

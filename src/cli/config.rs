//! Batch configuration shared by the CLI and library callers

use std::path::PathBuf;

use encoding_rs::{Encoding, UTF_8};

/// Directory scanned for caption CSV files when none is given.
pub const DEFAULT_SOURCE_DIR: &str = "./target_csv";

/// Directory receiving converted JSON files when none is given.
pub const DEFAULT_OUTPUT_DIR: &str = "./target_json";

/// Settings for one batch run, built once at start-up.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Directory holding the `.csv` files to convert
    pub source_dir: PathBuf,
    /// Directory the `.json` files are written to
    pub output_dir: PathBuf,
    /// Character encoding of the CSV files (a BOM takes precedence)
    pub encoding: &'static Encoding,
}

impl BatchConfig {
    pub fn new(source_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            output_dir: output_dir.into(),
            encoding: UTF_8,
        }
    }

    pub fn with_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = encoding;
        self
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_DIR, DEFAULT_OUTPUT_DIR)
    }
}

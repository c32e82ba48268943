//! Command-line argument definitions using clap

use std::path::PathBuf;

use clap::Parser;
use encoding_rs::Encoding;

use super::config::{BatchConfig, DEFAULT_OUTPUT_DIR, DEFAULT_SOURCE_DIR};

/// Captime - Convert caption timing CSV files into JSON
#[derive(Parser, Debug)]
#[command(name = "captime")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory containing the caption CSV files.
    /// Only files ending in exactly ".csv" are converted; subdirectories are ignored.
    #[arg(short, long, default_value = DEFAULT_SOURCE_DIR)]
    pub source_dir: PathBuf,

    /// Directory to write JSON files to (created if missing).
    /// Each file keeps its CSV base name with a ".json" extension.
    #[arg(short = 'd', long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Character encoding of the CSV files (e.g. "utf-8", "euc-kr", "shift_jis").
    /// A byte order mark in the file overrides this.
    #[arg(long, default_value = "utf-8", value_parser = parse_encoding)]
    pub encoding: &'static Encoding,

    /// Exit immediately instead of waiting for Enter after the batch
    #[arg(long, default_value = "false")]
    pub no_wait: bool,
}

impl Cli {
    /// Build the batch configuration from the parsed arguments.
    pub fn to_config(&self) -> BatchConfig {
        BatchConfig::new(&self.source_dir, &self.output_dir).with_encoding(self.encoding)
    }
}

/// Validator for the encoding label
fn parse_encoding(s: &str) -> Result<&'static Encoding, String> {
    Encoding::for_label(s.trim().as_bytes())
        .ok_or_else(|| format!("'{}' is not a supported character encoding", s))
}

//! Source directory scanning

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Extension a directory entry must carry to be converted (case-sensitive).
pub const CSV_EXTENSION: &str = "csv";

/// Extension given to converted files.
pub const JSON_EXTENSION: &str = "json";

/// One CSV file to convert and where its JSON goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Whether a path names a qualifying caption CSV.
pub fn is_csv_file(path: &Path) -> bool {
    path.extension() == Some(OsStr::new(CSV_EXTENSION))
}

/// Destination path for a CSV: same stem, `.json`, inside `output_dir`.
pub fn output_path_for(input: &Path, output_dir: &Path) -> PathBuf {
    let mut file_name = input
        .file_stem()
        .unwrap_or_else(|| OsStr::new("output"))
        .to_os_string();
    file_name.push(".");
    file_name.push(JSON_EXTENSION);
    output_dir.join(file_name)
}

/// List the CSV files directly inside `source_dir`, sorted by file name.
///
/// Subdirectories are not descended into. Failing to read the directory is
/// an error for the whole batch.
pub fn scan_source_dir(source_dir: &Path, output_dir: &Path) -> Result<Vec<ConversionJob>> {
    let entries = std::fs::read_dir(source_dir)
        .with_context(|| format!("Failed to read source directory: {}", source_dir.display()))?;

    let mut jobs = Vec::new();
    for entry in entries {
        let entry = entry
            .with_context(|| format!("Failed to read source directory: {}", source_dir.display()))?;
        let input = entry.path();
        if !is_csv_file(&input) {
            continue;
        }
        let output = output_path_for(&input, output_dir);
        jobs.push(ConversionJob { input, output });
    }

    jobs.sort_by(|a, b| a.input.file_name().cmp(&b.input.file_name()));
    Ok(jobs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_keeps_inner_dots() {
        let output = output_path_for(Path::new("src/ep.01.csv"), Path::new("out"));
        assert_eq!(output, PathBuf::from("out/ep.01.json"));
    }
}

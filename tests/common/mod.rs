//! Shared test utilities and fixture generators

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Header row as exported by the captioning tool
pub const HEADER: &str = "Start Time,End Time,Text,Layer ID";

/// Write `content` to `dir/name` and return the path
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Write a caption CSV with the standard header followed by `rows`
pub fn write_caption_csv(dir: &Path, name: &str, rows: &[&str]) -> PathBuf {
    let mut content = String::from(HEADER);
    content.push('\n');
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    write_file(dir, name, &content)
}

/// A file with two timed captions and one untimed row in between
pub fn mixed_caption_rows() -> Vec<&'static str> {
    vec![
        "00;01;30;50,00;02;00;00,Hello,1",
        ",00;02;05;00,Orphan end,1",
        "00;02;10;25,00;02;12;75,World,2",
    ]
}

/// Read a JSON output file back as a generic value
pub fn read_json(path: &Path) -> serde_json::Value {
    let content = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&content).unwrap()
}

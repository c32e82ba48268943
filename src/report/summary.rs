//! Batch summary report generation

use std::path::PathBuf;
use std::time::Duration;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::pipeline::ConversionStats;

/// Outcome of converting one CSV file.
#[derive(Debug)]
pub struct FileReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub result: anyhow::Result<ConversionStats>,
}

impl FileReport {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Every file outcome of a batch run, in processing order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub files: Vec<FileReport>,
    pub elapsed: Duration,
}

impl BatchReport {
    pub fn push(&mut self, file: FileReport) {
        self.files.push(file);
    }

    pub fn set_elapsed(&mut self, elapsed: Duration) {
        self.elapsed = elapsed;
    }

    pub fn converted_count(&self) -> usize {
        self.files.iter().filter(|f| f.is_success()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.files.len() - self.converted_count()
    }

    /// Files that could not be converted.
    pub fn failures(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(|f| !f.is_success())
    }

    /// Row counts summed over the successfully converted files.
    pub fn totals(&self) -> ConversionStats {
        self.files
            .iter()
            .filter_map(|f| f.result.as_ref().ok())
            .fold(ConversionStats::default(), |acc, stats| ConversionStats {
                rows_read: acc.rows_read + stats.rows_read,
                rows_written: acc.rows_written + stats.rows_written,
            })
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("BATCH SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let totals = self.totals();
        let failed = self.failed_count();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("📁 CSV Files Found"),
            Cell::new(self.files.len()),
        ]);

        table.add_row(vec![
            Cell::new("✅ Converted"),
            Cell::new(self.converted_count())
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("❌ Failed"),
            Cell::new(failed).fg(if failed == 0 { Color::White } else { Color::Red }),
        ]);

        table.add_row(vec![Cell::new("📄 Rows Read"), Cell::new(totals.rows_read)]);

        table.add_row(vec![
            Cell::new("🎬 Captions Written"),
            Cell::new(totals.rows_written).fg(Color::Cyan),
        ]);

        table.add_row(vec![
            Cell::new("🗑️  Untimed Rows Skipped"),
            Cell::new(totals.rows_dropped()).fg(if totals.rows_dropped() == 0 {
                Color::White
            } else {
                Color::Yellow
            }),
        ]);

        table.add_row(vec![
            Cell::new("⏱  Elapsed"),
            Cell::new(format!("{:.2}s", self.elapsed.as_secs_f64())),
        ]);

        // Indent the table
        for line in table.to_string().lines() {
            println!("    {}", line);
        }

        if failed > 0 {
            println!();
            println!(
                "    {} {}",
                style("📝").cyan(),
                style("FAILED FILES").white().bold()
            );
            println!("    {}", style("─".repeat(50)).dim());
            println!();
            for file in self.failures() {
                println!("        {} {}", style("•").dim(), file.input.display());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, result: anyhow::Result<ConversionStats>) -> FileReport {
        FileReport {
            input: PathBuf::from(format!("{}.csv", name)),
            output: PathBuf::from(format!("{}.json", name)),
            result,
        }
    }

    #[test]
    fn test_totals_skip_failed_files() {
        let mut report = BatchReport::default();
        report.push(file(
            "a",
            Ok(ConversionStats {
                rows_read: 5,
                rows_written: 3,
            }),
        ));
        report.push(file("b", Err(anyhow::anyhow!("bad timecode"))));
        report.push(file(
            "c",
            Ok(ConversionStats {
                rows_read: 2,
                rows_written: 2,
            }),
        ));

        assert_eq!(report.converted_count(), 2);
        assert_eq!(report.failed_count(), 1);
        let totals = report.totals();
        assert_eq!(totals.rows_read, 7);
        assert_eq!(totals.rows_written, 5);
        assert_eq!(totals.rows_dropped(), 2);
        let failed: Vec<_> = report.failures().map(|f| f.input.clone()).collect();
        assert_eq!(failed, vec![PathBuf::from("b.csv")]);
    }
}

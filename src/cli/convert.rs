//! Batch driver: convert every caption CSV in the source directory

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use console::style;

use super::config::BatchConfig;
use crate::pipeline::{convert_file, scan_source_dir};
use crate::report::{BatchReport, FileReport};
use crate::utils::{create_spinner, print_failure, print_info, print_success};

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Convert all qualifying files one after another.
///
/// A file that fails to convert is reported and recorded in the returned
/// report; the batch carries on with the next file. Only failing to list the
/// source directory or to create the output directory aborts the run.
pub fn run_batch(config: &BatchConfig) -> Result<BatchReport> {
    let started = Instant::now();

    let jobs = scan_source_dir(&config.source_dir, &config.output_dir)?;

    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            config.output_dir.display()
        )
    })?;

    if jobs.is_empty() {
        print_info(&format!(
            "No .csv files found in {}",
            config.source_dir.display()
        ));
    } else {
        println!(
            "    Found {} CSV file(s) in {}",
            style(jobs.len()).yellow().bold(),
            style(config.source_dir.display()).dim()
        );
        println!();
    }

    let mut report = BatchReport::default();
    for job in jobs {
        let input_name = display_name(&job.input);
        let output_name = display_name(&job.output);

        let spinner = create_spinner(&format!("Converting {}...", input_name));
        let result = convert_file(&job.input, &job.output, config.encoding);
        spinner.finish_and_clear();

        match &result {
            Ok(stats) => {
                print_success(&format!("Converted {} to {}", input_name, output_name));
                if stats.rows_dropped() > 0 {
                    println!(
                        "      {} caption(s), {} untimed row(s) skipped",
                        stats.rows_written,
                        style(stats.rows_dropped()).yellow()
                    );
                }
            }
            Err(err) => print_failure(&format!("Failed to convert {}: {:#}", input_name, err)),
        }

        report.push(FileReport {
            input: job.input,
            output: job.output,
            result,
        });
    }

    report.set_elapsed(started.elapsed());
    Ok(report)
}

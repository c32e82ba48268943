//! Captime: Caption Timing CSV to JSON Converter
//!
//! Converts every caption CSV in a directory into a JSON array of
//! elapsed-seconds records, then waits for Enter before exiting.

use anyhow::Result;
use clap::Parser;

use captime::cli::{run_batch, wait_for_enter, Cli};
use captime::utils::{print_banner, print_completion, print_config};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.to_config();

    print_banner(env!("CARGO_PKG_VERSION"));
    print_config(&config);

    // Per-file failures are already reported; only directory errors end up here
    let report = run_batch(&config)?;
    report.display();

    let awaiting_input = !cli.no_wait;
    print_completion(awaiting_input);

    if awaiting_input {
        wait_for_enter(&mut std::io::stdin().lock())?;
    }

    Ok(())
}

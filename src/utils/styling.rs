//! Terminal styling utilities

use console::{style, Emoji};

use crate::cli::BatchConfig;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static DONE: Emoji<'_, '_> = Emoji("🎬 ", ">> ");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static SAVE: Emoji<'_, '_> = Emoji("💾 ", "");
pub static TEXT: Emoji<'_, '_> = Emoji("🔤 ", "");

/// Print the application banner
pub fn print_banner(version: &str) {
    println!();
    println!(
        "    {} {}",
        style("captime").cyan().bold(),
        style("caption timing CSV → JSON").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print configuration card
pub fn print_config(config: &BatchConfig) {
    println!("    {} Source:   {}", FOLDER, config.source_dir.display());
    println!("    {} Output:   {}", SAVE, config.output_dir.display());
    println!("    {} Encoding: {}", TEXT, style(config.encoding.name()).yellow());
    println!();
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print a failure message to stderr
pub fn print_failure(message: &str) {
    eprintln!("    {} {}", style("✗").red().bold(), style(message).red());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print the final completion message, with the exit hint when a keypress is awaited
pub fn print_completion(awaiting_input: bool) {
    let message = if awaiting_input {
        "All files processed. Press Enter to exit."
    } else {
        "All files processed."
    };
    println!();
    println!("    {} {}", DONE, style(message).green().bold());
}

//! Interactive prompts

use std::io::BufRead;

use anyhow::{Context, Result};

/// Block until one line (or end of input) is read from `input`.
///
/// Takes any reader so the batch can be driven without a terminal.
pub fn wait_for_enter<R: BufRead>(input: &mut R) -> Result<()> {
    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read from standard input")?;
    Ok(())
}

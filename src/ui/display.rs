use anyhow::Result;
use bytesize::ByteSize;
use console::{Term, style};

use crate::file::Destination;
use crate::types::Processing;

/// Prints the one-line result summary to stderr.
pub fn show_success(processing: Processing, destination: &Destination, bytes: u64) -> Result<()> {
    let line = format!("{} {}", style("✓").green(), style(summary(processing, destination, bytes)).bold());
    Term::stderr().write_line(&line)?;
    Ok(())
}

fn summary(processing: Processing, destination: &Destination, bytes: u64) -> String {
    format!("File {} successfully: {} ({})", processing.done(), destination, ByteSize::b(bytes))
}

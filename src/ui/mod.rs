//! Terminal interaction: key prompt, progress bar and result summary.
//!
//! Everything here writes to stderr so stdout stays free for output data.

pub mod display;
pub mod progress;
pub mod prompt;

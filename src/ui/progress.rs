use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

/// Byte progress of one stream pass, drawn on stderr.
///
/// indicatif hides the bar when stderr is not a terminal, so piping the
/// output somewhere does not interleave bar frames with data.
pub struct Bar {
    bar: ProgressBar,
}

impl Bar {
    pub fn new(total: u64, description: &str) -> Result<Self> {
        let bar = ProgressBar::new(total);
        let style = ProgressStyle::default_bar().template("{msg} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec}, {eta})")?.progress_chars("●○ ");

        bar.set_style(style);
        bar.set_message(description.to_owned());

        Ok(Self { bar })
    }

    /// A bar that never draws.
    pub fn hidden() -> Self {
        Self { bar: ProgressBar::hidden() }
    }

    #[inline]
    pub fn add(&self, delta: u64) {
        self.bar.inc(delta);
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    #[cfg(test)]
    pub fn position(&self) -> u64 {
        self.bar.position()
    }
}

impl Drop for Bar {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.abandon();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_while_hidden() {
        let bar = Bar::hidden();
        bar.add(16);
        bar.add(4);
        assert_eq!(bar.position(), 20);
        bar.finish();
    }

    #[test]
    fn test_template_is_valid() {
        assert!(Bar::new(100, "Encrypting...").is_ok());
    }
}

//! Progress bar display for SDK downloads

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display for a single archive download
pub struct DownloadProgress {
    bar: ProgressBar,
}

impl DownloadProgress {
    /// Create a new progress display; a byte bar when the response
    /// advertises its length, a byte spinner otherwise.
    pub fn new(total_bytes: Option<u64>) -> Self {
        let bar = match total_bytes {
            Some(total) => {
                let style = ProgressStyle::default_bar()
                    .template("[{bar:40.cyan/blue}] {bytes}/{total_bytes} {msg}")
                    .unwrap()
                    .progress_chars("#>-");
                let bar = ProgressBar::new(total);
                bar.set_style(style);
                bar
            }
            None => {
                let style = ProgressStyle::default_spinner()
                    .template("{spinner} {bytes} {msg}")
                    .unwrap();
                let bar = ProgressBar::new_spinner();
                bar.set_style(style);
                bar
            }
        };

        Self { bar }
    }

    /// Record downloaded bytes
    pub fn inc(&self, bytes: u64) {
        self.bar.inc(bytes);
    }

    /// Finish the bar on success
    pub fn finish(&self) {
        self.bar.finish_with_message("done");
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.bar.abandon();
    }
}

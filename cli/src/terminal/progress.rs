use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Bar tracking completed probes against the total target count.
///
/// Driven from the engine's completion callback; matches are announced
/// separately through the log lines.
pub fn scan_bar(total: u64) -> ProgressBar {
    let bar = ProgressBar::new(total);

    let style =
        ProgressStyle::with_template("{spinner:.blue} [{bar:30.cyan/blue}] {pos}/{len} probed ({eta})")
            .unwrap()
            .progress_chars("=> ");

    bar.set_style(style);
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

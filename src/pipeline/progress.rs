//! Terminal progress bar for the scrape stage

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

const BAR_TEMPLATE: &str =
    "{spinner:.green} Scraping [{bar:40.green/dim}] {pos}/{len} pages {msg}";

/// Creates the per-page progress bar, or a hidden one when disabled
pub fn create_progress_bar(total: u64, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::hidden());
    }

    let pb = ProgressBar::new(total);
    if let Ok(style) = ProgressStyle::with_template(BAR_TEMPLATE) {
        pb.set_style(
            style
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .progress_chars("█▓░"),
        );
    }
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

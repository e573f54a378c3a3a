//! Progress display for multi-panel runs

use crate::io::configuration::{MAX_INDIVIDUAL_PROGRESS_PANELS, PROGRESS_BAR_WIDTH};
use indicatif::{ProgressBar, ProgressStyle};

/// Tracks generated panels on a single progress bar
///
/// Runs of at most [`MAX_INDIVIDUAL_PROGRESS_PANELS`] panels finish too
/// quickly to be worth a bar, so they use a hidden one.
pub struct ProgressManager {
    bar: ProgressBar,
    panel_count: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with nothing to track yet
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            panel_count: 0,
        }
    }

    /// Prepare the bar for `panel_count` panels
    pub fn initialize(&mut self, panel_count: usize) {
        self.panel_count = panel_count;

        if panel_count > MAX_INDIVIDUAL_PROGRESS_PANELS {
            let bar = ProgressBar::new(panel_count as u64);
            bar.set_style(Self::batch_style());
            self.bar = bar;
        }
    }

    /// Whether a visible bar is in use
    pub fn is_visible(&self) -> bool {
        !self.bar.is_hidden()
    }

    /// Number of panels being tracked
    pub const fn panel_count(&self) -> usize {
        self.panel_count
    }

    /// Number of panels completed so far
    pub fn completed(&self) -> u64 {
        self.bar.position()
    }

    /// Mark one panel as done, labelled with its seed
    pub fn complete_panel(&self, seed: u64) {
        self.bar.set_message(format!("seed {seed}"));
        self.bar.inc(1);
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        self.bar.finish_with_message("All panels generated");
    }

    fn batch_style() -> ProgressStyle {
        let template =
            format!("[{{elapsed_precise}}] Panels: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}");
        ProgressStyle::default_bar()
            .template(&template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
    }
}

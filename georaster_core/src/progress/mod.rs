//! Coarse progress reporting for long-running scans.
//!
//! The bar redraws at most once per second, so wrapping a tight pixel loop
//! with it costs nothing measurable. It is purely observational: dropping
//! every call to it never changes any output.

mod progress_bar;

pub use progress_bar::ProgressBar;

/// Creates a progress bar with a message and a maximum value.
#[must_use]
pub fn get_progress_bar(message: &str, max_value: u64) -> ProgressBar {
	ProgressBar::new(message, max_value)
}

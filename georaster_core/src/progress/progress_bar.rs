use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

const REDRAW_INTERVAL: Duration = Duration::from_secs(1);

struct Inner {
	message: String,
	len: u64,
	pos: u64,
	last_draw: Option<Instant>,
	finished: bool,
}

impl Inner {
	fn update(&mut self, pos: u64) {
		if self.finished {
			return;
		}
		self.pos = pos.min(self.len);
		let due = match self.last_draw {
			None => true,
			Some(t) => t.elapsed() >= REDRAW_INTERVAL,
		};
		if due {
			self.redraw();
		}
	}

	fn redraw(&mut self) {
		self.last_draw = Some(Instant::now());
		let len = self.len.max(1);
		let percent = self.pos * 100 / len;
		let mut stderr = io::stderr();
		let _ = write!(
			stderr,
			"\r\x1b[2K{}: {}/{} ({percent}%)",
			self.message, self.pos, self.len
		);
		let _ = stderr.flush();
	}
}

/// A throttled terminal progress indicator, cloneable and thread-safe.
///
/// Position updates are cheap: the line is only rewritten when at least one
/// second has passed since the previous draw. `finish` always draws the
/// final state and terminates the line.
#[derive(Clone)]
pub struct ProgressBar {
	inner: Arc<Mutex<Inner>>,
}

impl ProgressBar {
	/// Initializes the bar with a message and maximum value. Nothing is
	/// drawn until the first position update.
	pub fn new(message: &str, max_value: u64) -> ProgressBar {
		ProgressBar {
			inner: Arc::new(Mutex::new(Inner {
				message: message.to_string(),
				len: max_value,
				pos: 0,
				last_draw: None,
				finished: false,
			})),
		}
	}

	/// Sets the absolute position, clamped to the maximum value.
	pub fn set_position(&self, value: u64) {
		let mut inner = self.inner.lock().unwrap();
		inner.update(value);
	}

	/// Increments the position by `value`.
	pub fn inc(&self, value: u64) {
		let mut inner = self.inner.lock().unwrap();
		let pos = inner.pos.saturating_add(value);
		inner.update(pos);
	}

	/// Jumps to the maximum value, draws one final time and ends the line.
	pub fn finish(&self) {
		let mut inner = self.inner.lock().unwrap();
		if inner.finished {
			return;
		}
		inner.pos = inner.len;
		inner.redraw();
		inner.finished = true;
		let mut stderr = io::stderr();
		let _ = stderr.write_all(b"\n");
		let _ = stderr.flush();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn new_starts_at_zero() {
		let progress = ProgressBar::new("test", 100);
		let inner = progress.inner.lock().unwrap();
		assert_eq!(inner.pos, 0);
		assert_eq!(inner.len, 100);
		assert_eq!(inner.message, "test");
		assert!(!inner.finished);
	}

	#[test]
	fn set_position_clamps_to_len() {
		let progress = ProgressBar::new("test", 10);
		progress.set_position(25);
		assert_eq!(progress.inner.lock().unwrap().pos, 10);
	}

	#[test]
	fn inc_accumulates() {
		let progress = ProgressBar::new("test", 100);
		progress.set_position(10);
		progress.inc(20);
		assert_eq!(progress.inner.lock().unwrap().pos, 30);
	}

	#[test]
	fn throttles_redraws() {
		let progress = ProgressBar::new("test", 1000);
		progress.set_position(1);
		let first_draw = progress.inner.lock().unwrap().last_draw;
		assert!(first_draw.is_some());
		for i in 2..100 {
			progress.set_position(i);
		}
		// all updates landed within one second of the first draw
		assert_eq!(progress.inner.lock().unwrap().last_draw, first_draw);
	}

	#[test]
	fn finish_jumps_to_len_and_is_idempotent() {
		let progress = ProgressBar::new("test", 100);
		progress.set_position(50);
		progress.finish();
		progress.finish();
		let inner = progress.inner.lock().unwrap();
		assert_eq!(inner.pos, 100);
		assert!(inner.finished);
	}

	#[test]
	fn updates_after_finish_are_ignored() {
		let progress = ProgressBar::new("test", 100);
		progress.finish();
		progress.set_position(5);
		assert_eq!(progress.inner.lock().unwrap().pos, 100);
	}
}

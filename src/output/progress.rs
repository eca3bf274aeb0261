//! Progress display for long build steps.
//!
//! Both display types stop their bar when dropped, so an early return or
//! a panic never leaves a ticker running.

use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

use crate::error::Result;

use super::{format_elapsed, Printer};

/// Spinner redraw interval.
const TICK: Duration = Duration::from_millis(100);

/// Counting progress bar: `label [====    ] 12/40 (30%) 1s`.
pub struct Progress {
    bar: ProgressBar,
}

impl Progress {
    pub fn new(label: &str, total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::with_template("{msg:>12} [{bar:20}] {pos}/{len} ({percent}%) {elapsed}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("== "),
        );
        bar.set_message(label.to_string());
        Self { bar }
    }

    /// Advance by one item.
    pub fn inc(&self) {
        self.bar.inc(1);
    }

    /// Items completed so far.
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Mark the bar complete and leave it on screen.
    pub fn finish(self) {
        self.bar.finish();
    }
}

impl Drop for Progress {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.abandon();
        }
    }
}

/// Elapsed-time spinner for a single step.
///
/// Redraws on a background tick until stopped or dropped.
pub struct Ticker {
    bar: ProgressBar,
    started: Instant,
}

impl Ticker {
    pub fn start(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner} {msg} ({elapsed})")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(TICK);
        Self {
            bar,
            started: Instant::now(),
        }
    }

    pub fn is_running(&self) -> bool {
        !self.bar.is_finished()
    }

    /// Stop the spinner and return the elapsed time.
    pub fn stop(self) -> Duration {
        self.bar.finish_and_clear();
        self.started.elapsed()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}

/// Run `op` under a ticker, reporting `"<message> in <elapsed>"` on success.
pub fn timed<T>(printer: &Printer, message: &str, op: impl FnOnce() -> Result<T>) -> Result<T> {
    let ticker = Ticker::start(message);
    let result = op();
    let elapsed = ticker.stop();

    if result.is_ok() {
        printer.status("Finished", &format!("{} in {}", message, format_elapsed(elapsed)));
    }
    result
}

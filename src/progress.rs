//! Progress reporting infrastructure

use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::borrow::Cow;

/// CLI progress report of ongoing operations
///
/// To avoid corrupted terminal output, you should not write anything to stdout
/// or stderr yourself as long as a report is being displayed. Please use logs
/// for debug messages.
#[derive(Clone, Debug, Default)]
pub struct ProgressReport(MultiProgress);
//
impl ProgressReport {
    /// Prepare to report progress on the cli
    pub fn new() -> Self {
        Self::default()
    }

    /// Report that never displays anything, e.g. for tests
    pub fn hidden() -> Self {
        Self(MultiProgress::with_draw_target(ProgressDrawTarget::hidden()))
    }

    /// Prepare to report on a new operation
    pub fn add(&self, what: impl Into<Cow<'static, str>>, work: Work) -> ProgressTracker {
        let style = match work {
            Work::Bytes(_) => {
                "{prefix} {wide_bar} {decimal_bytes}/{decimal_total_bytes} ({decimal_bytes_per_sec})"
            }
            Work::UnknownBytes => "{prefix} {spinner} {decimal_bytes} ({decimal_bytes_per_sec})",
        };
        let bar = match work {
            Work::Bytes(len) => ProgressBar::new(len),
            Work::UnknownBytes => ProgressBar::new_spinner(),
        }
        .with_prefix(what)
        .with_style(
            ProgressStyle::with_template(style)
                .expect("all styles above should be valid indicatif styles"),
        );
        ProgressTracker {
            bar: self.0.add(bar),
            report: self.0.clone(),
        }
    }
}

/// Work whose progression can be tracked
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum Work {
    /// Known amount of bytes to be processed
    Bytes(u64),

    /// Bytes to be processed, in an amount that is not known in advance
    UnknownBytes,
}
//
impl From<Option<u64>> for Work {
    fn from(len: Option<u64>) -> Self {
        len.map_or(Self::UnknownBytes, Self::Bytes)
    }
}

/// Mechanism to track progress
#[derive(Clone, Debug)]
pub struct ProgressTracker {
    /// Progress bar for this specific process
    bar: ProgressBar,

    /// Underlying process report
    report: MultiProgress,
}
//
impl ProgressTracker {
    /// Show that a certain amount of progress has been made
    pub fn make_progress(&self, progress: u64) {
        self.bar.inc(progress);
    }

    /// Hide the progress bar once the operation is over
    pub fn finish(self) {
        self.bar.finish_and_clear();
        self.report.remove(&self.bar);
    }
}

//! Derived counters over a task store.

use std::fmt;

/// Share of tasks that are completed, in percent.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ProgressPercent(f64);

impl ProgressPercent {
    /// Computes `100 × completed / total`, or `None` when `total` is zero.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "progress is a display ratio; task counts stay far below 2^52"
    )]
    pub const fn from_counts(completed: usize, total: usize) -> Option<Self> {
        if total == 0 {
            return None;
        }
        Some(Self(completed as f64 * 100.0 / total as f64))
    }

    /// Returns the raw percentage.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for ProgressPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}

/// Snapshot of store counters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaskStatistics {
    /// Live tasks across both lists.
    pub total: usize,
    /// Tasks waiting to be done.
    pub pending: usize,
    /// Tasks done and not yet deleted or cleared.
    pub completed: usize,
    /// Completion ratio, absent when the store is empty.
    pub progress: Option<ProgressPercent>,
}

impl TaskStatistics {
    /// Builds statistics from list lengths.
    #[must_use]
    pub const fn from_counts(pending: usize, completed: usize) -> Self {
        let total = pending.saturating_add(completed);
        Self {
            total,
            pending,
            completed,
            progress: ProgressPercent::from_counts(completed, total),
        }
    }
}

//! Run-wide numeric configuration shared by every engine.

/// Default cracking throughput, in passwords per second.
pub const DEFAULT_PPS: u64 = 1_000_000_000;

/// Durations above this many seconds are reported as `>1 year`.
pub const ONE_YEAR_SECS: u128 = 60 * 60 * 24 * 365;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// Passwords per second used to turn complexity into seconds.
    pub pps: u64,
    /// Stop emitting once cumulative estimated time exceeds this many seconds.
    pub time_budget: Option<u64>,
    /// Produce per-mask detail lines in addition to the summary.
    pub show_masks: bool,
}

impl RunConfig {
    /// Estimated seconds to exhaust `complexity` candidates (truncating).
    #[inline]
    pub fn seconds(&self, complexity: u128) -> u128 {
        complexity / u128::from(self.pps.max(1))
    }

    /// True once `elapsed` seconds strictly exceed the configured budget.
    #[inline]
    pub fn budget_exceeded(&self, elapsed: u128) -> bool {
        self.time_budget
            .is_some_and(|budget| elapsed > u128::from(budget))
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            pps: DEFAULT_PPS,
            time_budget: None,
            show_masks: false,
        }
    }
}

/// Share of `total` covered by `sample`, in whole percent (truncating).
///
/// An empty total covers nothing, so the result is 0 instead of a division
/// by zero.
pub fn coverage_percent(sample: u128, total: u128) -> u128 {
    if total == 0 {
        return 0;
    }
    (sample.saturating_mul(100) / total).min(100)
}

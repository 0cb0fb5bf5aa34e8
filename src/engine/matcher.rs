//! Coverage matching: how much of the observed distribution does a given mask
//! list cover, and how long would it take to run.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{info, warn};

use crate::config::{RunConfig, coverage_percent};
use crate::error::Result;
use crate::mask;
use crate::output::{Detail, Emitted, MaskSink};
use crate::table::Table;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSummary {
    /// Candidates found in the table.
    pub matched: u64,
    /// Well-formed candidates processed, matched or not.
    pub checked: u64,
    /// Malformed candidates ignored.
    pub skipped: u64,
    pub sample_occurrence: u128,
    pub total_occurrence: u128,
    /// Keyspace summed over every checked candidate.
    pub total_complexity: u128,
    pub seconds: u128,
    pub budget_exceeded: bool,
    pub interrupted: bool,
}

impl MatchSummary {
    pub fn coverage(&self) -> u128 {
        coverage_percent(self.sample_occurrence, self.total_occurrence)
    }
}

/// Check `candidates` against `table` in order.
///
/// Every candidate spends time budget, but only candidates present in the
/// table are emitted and add occurrence.
pub fn check<I, S>(
    table: &Table,
    candidates: I,
    config: &RunConfig,
    sink: &mut S,
    stop: &AtomicBool,
) -> Result<MatchSummary>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    S: MaskSink + ?Sized,
{
    let mut summary = MatchSummary {
        total_occurrence: table.total_occurrence(),
        ..MatchSummary::default()
    };

    for candidate in candidates {
        if stop.load(Ordering::Relaxed) {
            info!(checked = summary.checked, "mask matching interrupted");
            summary.interrupted = true;
            break;
        }

        let candidate = candidate.as_ref().trim();
        if candidate.is_empty() {
            continue;
        }
        let complexity = match mask::complexity(candidate) {
            Ok(complexity) => complexity,
            Err(error) => {
                warn!(%error, "skipping candidate mask");
                summary.skipped += 1;
                continue;
            }
        };

        summary.checked += 1;
        summary.total_complexity = summary.total_complexity.saturating_add(complexity);

        if let Some(record) = table.get(candidate) {
            sink.emit(&Emitted {
                mask: candidate,
                length: record.length,
                seconds: record.seconds,
                detail: Detail::Occurrence(record.occurrence),
            })?;
            summary.sample_occurrence += u128::from(record.occurrence);
            summary.matched += 1;
        }

        if config.budget_exceeded(config.seconds(summary.total_complexity)) {
            info!(checked = summary.checked, "target time exceeded");
            summary.budget_exceeded = true;
            break;
        }
    }

    summary.seconds = config.seconds(summary.total_complexity);
    Ok(summary)
}

/// Split a comma separated candidate list.
pub fn split_candidates(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|m| !m.is_empty())
}

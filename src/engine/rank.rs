//! Coverage ranking: pick the masks that cover the most passwords per second
//! of cracking time.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::info;

use crate::config::{RunConfig, coverage_percent};
use crate::error::Result;
use crate::output::{Detail, Emitted, MaskSink};
use crate::table::{FrequencyRecord, Table};

/// Metric the admitted masks are ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Highest optimality index first.
    #[default]
    OptIndex,
    /// Most frequently observed first.
    Occurrence,
    /// Smallest keyspace first.
    Complexity,
}

impl SortMode {
    pub fn name(self) -> &'static str {
        match self {
            SortMode::OptIndex => "optindex",
            SortMode::Occurrence => "occurrence",
            SortMode::Complexity => "complexity",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankSummary {
    pub masks: u64,
    pub sample_occurrence: u128,
    pub total_occurrence: u128,
    /// Cumulative estimated seconds of the emitted masks.
    pub seconds: u128,
    pub budget_exceeded: bool,
    pub interrupted: bool,
}

impl RankSummary {
    pub fn coverage(&self) -> u128 {
        coverage_percent(self.sample_occurrence, self.total_occurrence)
    }
}

/// Admitted masks in ranking order.
///
/// The table iterates in ascending mask order and the sort is stable, so
/// ties keep ascending mask order.
pub fn order(table: &Table, mode: SortMode) -> Vec<(&str, &FrequencyRecord)> {
    let mut ranked: Vec<_> = table.iter().collect();
    match mode {
        SortMode::Occurrence => ranked.sort_by(|a, b| b.1.occurrence.cmp(&a.1.occurrence)),
        SortMode::Complexity => ranked.sort_by(|a, b| a.1.complexity.cmp(&b.1.complexity)),
        SortMode::OptIndex => ranked.sort_by(|a, b| b.1.opt_index.total_cmp(&a.1.opt_index)),
    }
    ranked
}

/// Emit masks in ranking order until the time budget is spent.
///
/// The mask that pushes cumulative time past the budget is still emitted.
pub fn rank<S>(
    table: &Table,
    mode: SortMode,
    config: &RunConfig,
    sink: &mut S,
    stop: &AtomicBool,
) -> Result<RankSummary>
where
    S: MaskSink + ?Sized,
{
    let mut summary = RankSummary {
        total_occurrence: table.total_occurrence(),
        ..RankSummary::default()
    };

    for (mask, record) in order(table, mode) {
        if stop.load(Ordering::Relaxed) {
            info!(emitted = summary.masks, "mask generation interrupted");
            summary.interrupted = true;
            break;
        }

        sink.emit(&Emitted {
            mask,
            length: record.length,
            seconds: record.seconds,
            detail: Detail::Occurrence(record.occurrence),
        })?;

        summary.sample_occurrence += u128::from(record.occurrence);
        summary.seconds = summary.seconds.saturating_add(record.seconds);
        summary.masks += 1;

        if config.budget_exceeded(summary.seconds) {
            info!(seconds = %summary.seconds, "target time exceeded");
            summary.budget_exceeded = true;
            break;
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Filters, TableBuilder};

    fn table(rows: &[(&str, &str)], config: &RunConfig) -> Table {
        let mut builder = TableBuilder::new(Filters::default(), config);
        for (mask, occurrence) in rows {
            builder.ingest(mask, occurrence).unwrap();
        }
        builder.finish()
    }

    const ROWS: &[(&str, &str)] = &[
        ("?l?l?l?l?l?l", "300"),
        ("?d?d?d?d", "200"),
        ("?u?l?l?l?d?d", "100"),
        ("?d?d", "200"),
    ];

    fn masks(table: &Table, mode: SortMode) -> Vec<&str> {
        order(table, mode).into_iter().map(|(m, _)| m).collect()
    }

    #[test]
    fn orders_by_each_metric() {
        let t = table(ROWS, &RunConfig::default());
        assert_eq!(
            masks(&t, SortMode::Occurrence),
            ["?l?l?l?l?l?l", "?d?d", "?d?d?d?d", "?u?l?l?l?d?d"]
        );
        assert_eq!(
            masks(&t, SortMode::Complexity),
            ["?d?d", "?d?d?d?d", "?u?l?l?l?d?d", "?l?l?l?l?l?l"]
        );
        assert_eq!(
            masks(&t, SortMode::OptIndex),
            ["?d?d", "?d?d?d?d", "?u?l?l?l?d?d", "?l?l?l?l?l?l"]
        );
    }

    #[test]
    fn ties_keep_ascending_mask_order() {
        let t = table(&[("?u", "5"), ("?d", "5"), ("?l", "5")], &RunConfig::default());
        assert_eq!(masks(&t, SortMode::Occurrence), ["?d", "?l", "?u"]);
    }

    #[test]
    fn emits_everything_without_a_budget() {
        let config = RunConfig::default();
        let t = table(ROWS, &config);
        let mut out: Vec<String> = Vec::new();
        let summary = rank(&t, SortMode::Occurrence, &config, &mut out, &AtomicBool::new(false)).unwrap();

        assert_eq!(out.len(), 4);
        assert_eq!(summary.masks, 4);
        assert_eq!(summary.sample_occurrence, 800);
        assert_eq!(summary.coverage(), 100);
        assert!(!summary.budget_exceeded);
    }

    #[test]
    fn stops_after_the_mask_that_crosses_the_budget() {
        // 1 pps makes seconds equal complexity.
        let config = RunConfig {
            pps: 1,
            time_budget: Some(10_050),
            show_masks: false,
        };
        let t = table(ROWS, &config);
        let mut out: Vec<String> = Vec::new();
        let summary = rank(&t, SortMode::Complexity, &config, &mut out, &AtomicBool::new(false)).unwrap();

        // 100 + 10_000 exceeds 10_050 on the second mask.
        assert_eq!(out, ["?d?d", "?d?d?d?d"]);
        assert_eq!(summary.seconds, 10_100);
        assert!(summary.budget_exceeded);
        assert_eq!(summary.sample_occurrence, 400);
        assert_eq!(summary.coverage(), 50);
    }

    #[test]
    fn stop_flag_halts_before_emitting() {
        let config = RunConfig::default();
        let t = table(ROWS, &config);
        let mut out: Vec<String> = Vec::new();
        let summary = rank(&t, SortMode::Occurrence, &config, &mut out, &AtomicBool::new(true)).unwrap();
        assert!(out.is_empty());
        assert!(summary.interrupted);
        assert_eq!(summary.coverage(), 0);
    }

    #[test]
    fn empty_table_has_zero_coverage() {
        let config = RunConfig::default();
        let t = Table::default();
        let summary = rank(&t, SortMode::OptIndex, &config, &mut Vec::<String>::new(), &AtomicBool::new(false)).unwrap();
        assert_eq!(summary.masks, 0);
        assert_eq!(summary.coverage(), 0);
    }
}

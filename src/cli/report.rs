//! Boxed banners and run summaries.

use passmask::config::RunConfig;
use passmask::engine::{MatchSummary, RankSummary, SortMode};
use passmask::policy::{Bounds, Policy, PolicySummary};
use passmask::table::Table;
use passmask::terminal::{box_bottom, box_field, box_line, box_top, format_number, format_runtime};

use super::quiet;

fn bounds(b: Bounds) -> String {
    let show = |v: Option<usize>| v.map_or("-".to_string(), |v| v.to_string());
    format!("min {:>2}  max {:>2}", show(b.min), show(b.max))
}

fn budget(config: &RunConfig) -> String {
    config
        .time_budget
        .map_or("none".to_string(), |secs| format_runtime(u128::from(secs)))
}

fn stop_notes(budget_exceeded: bool, interrupted: bool) {
    if budget_exceeded {
        box_line("Target time exceeded.");
    }
    if interrupted {
        box_line("Interrupted: totals cover the masks processed so far.");
    }
}

pub fn table_loaded(inputs: &[String], table: &Table, config: &RunConfig, sort: Option<SortMode>) {
    if quiet::enabled() {
        return;
    }
    box_top("Mask statistics");
    for input in inputs {
        box_field("Input", input);
    }
    box_field("Admitted masks", &format_number(table.len() as u128));
    box_field("Total occurrence", &format_number(table.total_occurrence()));
    if !table.rejected().is_empty() {
        box_field("Skipped records", &format_number(table.rejected().len() as u128));
    }
    box_field("Speed", &format!("{} pps", format_number(u128::from(config.pps))));
    box_field("Target time", &budget(config));
    if let Some(sort) = sort {
        box_field("Sorted by", sort.name());
    }
    box_bottom();
    println!();
}

pub fn policy_loaded(policy: &Policy, invert: bool, config: &RunConfig) {
    if quiet::enabled() {
        return;
    }
    box_top("Password policy");
    box_field(
        "Pass lengths",
        &format!("{} - {}", policy.min_length, policy.max_length),
    );
    box_field("Lowercase", &bounds(policy.lower));
    box_field("Uppercase", &bounds(policy.upper));
    box_field("Digits", &bounds(policy.digit));
    box_field("Special", &bounds(policy.special));
    box_field("Emitting", if invert { "non-compliant masks" } else { "compliant masks" });
    box_field("Speed", &format!("{} pps", format_number(u128::from(config.pps))));
    box_field("Target time", &budget(config));
    box_bottom();
    println!();
}

pub fn ranked(summary: &RankSummary) {
    println!();
    box_top("Finished generating masks");
    box_field("Masks generated", &format_number(u128::from(summary.masks)));
    box_field(
        "Masks coverage",
        &format!(
            "{}% ({}/{})",
            summary.coverage(),
            summary.sample_occurrence,
            summary.total_occurrence
        ),
    );
    box_field("Masks runtime", &format_runtime(summary.seconds));
    stop_notes(summary.budget_exceeded, summary.interrupted);
    box_bottom();
}

pub fn matched(summary: &MatchSummary) {
    println!();
    box_top("Finished matching masks");
    box_field("Masks matched", &format_number(u128::from(summary.matched)));
    box_field("Masks checked", &format_number(u128::from(summary.checked)));
    if summary.skipped > 0 {
        box_field("Masks skipped", &format_number(u128::from(summary.skipped)));
    }
    box_field(
        "Masks coverage",
        &format!(
            "{}% ({}/{})",
            summary.coverage(),
            summary.sample_occurrence,
            summary.total_occurrence
        ),
    );
    box_field("Masks runtime", &format_runtime(summary.seconds));
    stop_notes(summary.budget_exceeded, summary.interrupted);
    box_bottom();
}

pub fn enumerated(summary: &PolicySummary) {
    println!();
    box_top("Finished policy masks");
    for totals in &summary.lengths {
        box_line(&format!(
            "[{:>2}] {:>12} masks, {:>12} matching",
            totals.length,
            format_number(u128::from(totals.total_count)),
            format_number(u128::from(totals.sample_count)),
        ));
    }
    box_field(
        "Total masks",
        &format!(
            "{}  Time: {}",
            format_number(u128::from(summary.total_count)),
            format_runtime(summary.total_seconds)
        ),
    );
    box_field(
        "Policy masks",
        &format!(
            "{}  Time: {}",
            format_number(u128::from(summary.sample_count)),
            format_runtime(summary.sample_seconds)
        ),
    );
    stop_notes(summary.budget_exceeded, summary.interrupted);
    box_bottom();
}

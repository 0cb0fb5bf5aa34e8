//! Policy-driven mask enumeration.
//!
//! Cost is `4^length` masks per length, so this is the expensive path.
//! Masks are streamed from [`MaskProduct`] and filtered one at a time; the
//! time budget and the stop flag are the only bounds on the work.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::info;

use super::{MaskProduct, Policy};
use crate::config::RunConfig;
use crate::error::{MaskError, Result};
use crate::mask::{self, ClassCounts};
use crate::output::{Detail, Emitted, MaskSink};

/// Counters for one length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LengthTotals {
    pub length: usize,
    /// Every mask generated, regardless of compliance.
    pub total_count: u64,
    pub total_complexity: u128,
    /// Masks accepted under the policy (or its negation).
    pub sample_count: u64,
    pub sample_complexity: u128,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicySummary {
    pub lengths: Vec<LengthTotals>,
    pub total_count: u64,
    pub total_complexity: u128,
    pub sample_count: u64,
    pub sample_complexity: u128,
    pub total_seconds: u128,
    pub sample_seconds: u128,
    pub budget_exceeded: bool,
    pub interrupted: bool,
}

impl PolicySummary {
    fn absorb(&mut self, totals: LengthTotals) {
        self.total_count += totals.total_count;
        self.total_complexity += totals.total_complexity;
        self.sample_count += totals.sample_count;
        self.sample_complexity += totals.sample_complexity;
        self.lengths.push(totals);
    }
}

/// Emit every mask in the policy's length range that complies with it, or
/// with `invert` set, every mask that violates at least one bound.
pub fn enumerate<S>(
    policy: &Policy,
    invert: bool,
    config: &RunConfig,
    sink: &mut S,
    stop: &AtomicBool,
) -> Result<PolicySummary>
where
    S: MaskSink + ?Sized,
{
    policy.validate()?;

    let mut summary = PolicySummary::default();
    let mut text = String::with_capacity(policy.max_length * 2);

    for length in policy.min_length..=policy.max_length {
        info!(length, "generating {length} character password masks");

        let mut totals = LengthTotals {
            length,
            ..LengthTotals::default()
        };
        let mut product = MaskProduct::new(length);

        while let Some(classes) = product.advance() {
            if stop.load(Ordering::Relaxed) {
                summary.interrupted = true;
                break;
            }

            let complexity = mask::keyspace(classes).ok_or_else(|| MaskError::ComplexityOverflow {
                mask: classes.iter().map(|c| c.token()).collect(),
            })?;
            let counts: ClassCounts = classes.iter().copied().collect();

            totals.total_count += 1;
            totals.total_complexity += complexity;

            if !(policy.complies(&counts) ^ invert) {
                continue;
            }

            totals.sample_count += 1;
            totals.sample_complexity += complexity;

            text.clear();
            for class in classes {
                text.push_str(class.token());
            }
            sink.emit(&Emitted {
                mask: &text,
                length,
                seconds: config.seconds(complexity),
                detail: Detail::Counts(counts),
            })?;

            let spent = summary.sample_complexity + totals.sample_complexity;
            if config.budget_exceeded(config.seconds(spent)) {
                summary.budget_exceeded = true;
                break;
            }
        }

        info!(
            length,
            total = totals.total_count,
            accepted = totals.sample_count,
            "finished {length} character password masks"
        );
        summary.absorb(totals);

        if summary.interrupted {
            info!("policy enumeration interrupted");
            break;
        }
        if summary.budget_exceeded {
            info!("target time exceeded");
            break;
        }
    }

    summary.total_seconds = config.seconds(summary.total_complexity);
    summary.sample_seconds = config.seconds(summary.sample_complexity);
    Ok(summary)
}

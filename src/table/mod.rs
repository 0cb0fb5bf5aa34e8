//! Frequency table: observed masks with derived cost metrics.
//!
//! Records are admitted through [`TableBuilder`], which applies [`Filters`]
//! and keeps the unfiltered occurrence total used as the coverage
//! denominator.

mod file;

use std::collections::BTreeMap;

use tracing::warn;

pub use file::{load_path, read_into};

use crate::config::RunConfig;
use crate::error::{MaskError, Result};
use crate::mask;

/// Metrics derived for one admitted mask.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyRecord {
    pub occurrence: u64,
    pub length: usize,
    pub complexity: u128,
    /// Estimated seconds to exhaust the mask.
    pub seconds: u128,
    /// `1 - complexity / occurrence`; higher means cheaper per observed hit.
    pub opt_index: f64,
}

impl FrequencyRecord {
    pub fn new(mask: &str, occurrence: u64, config: &RunConfig) -> Result<Self> {
        let complexity = mask::complexity(mask)?;
        let length = mask::length(mask)?;
        Ok(Self {
            occurrence,
            length,
            complexity,
            seconds: config.seconds(complexity),
            opt_index: opt_index(complexity, occurrence),
        })
    }
}

fn opt_index(complexity: u128, occurrence: u64) -> f64 {
    if occurrence == 0 {
        return f64::NEG_INFINITY;
    }
    1.0 - complexity as f64 / occurrence as f64
}

/// Inclusive bounds a record must satisfy to be admitted. Absent bounds are
/// unconstrained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Filters {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min_occurrence: Option<u64>,
    pub max_occurrence: Option<u64>,
    pub min_complexity: Option<u128>,
    pub max_complexity: Option<u128>,
    pub min_time: Option<u128>,
    pub max_time: Option<u128>,
}

#[inline]
fn within<T: PartialOrd>(value: T, min: Option<T>, max: Option<T>) -> bool {
    min.is_none_or(|min| value >= min) && max.is_none_or(|max| value <= max)
}

impl Filters {
    pub fn admits(&self, record: &FrequencyRecord) -> bool {
        within(record.occurrence, self.min_occurrence, self.max_occurrence)
            && within(record.complexity, self.min_complexity, self.max_complexity)
            && within(record.seconds, self.min_time, self.max_time)
            && within(record.length, self.min_length, self.max_length)
    }
}

/// A record that was skipped during loading.
#[derive(Debug)]
pub struct Rejected {
    pub line: Option<u64>,
    pub error: MaskError,
}

/// What happened to one ingested pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Admitted,
    Filtered,
    Empty,
}

/// Accumulates records from one or more sources into a [`Table`].
#[derive(Debug)]
pub struct TableBuilder {
    filters: Filters,
    config: RunConfig,
    records: BTreeMap<String, FrequencyRecord>,
    total_occurrence: u128,
    rejected: Vec<Rejected>,
}

impl TableBuilder {
    pub fn new(filters: Filters, config: &RunConfig) -> Self {
        Self {
            filters,
            config: *config,
            records: BTreeMap::new(),
            total_occurrence: 0,
            rejected: Vec::new(),
        }
    }

    /// Ingest one raw `(mask, occurrence)` pair.
    ///
    /// Well-formed records count toward the total occurrence whether or not
    /// the filters admit them. Loading the same mask twice keeps the last
    /// record.
    pub fn ingest(&mut self, mask: &str, occurrence: &str) -> Result<Admission> {
        if mask.is_empty() {
            return Ok(Admission::Empty);
        }
        let occurrence: u64 =
            occurrence
                .trim()
                .parse()
                .map_err(|_| MaskError::MalformedOccurrence {
                    mask: mask.to_string(),
                    value: occurrence.to_string(),
                })?;
        let record = FrequencyRecord::new(mask, occurrence, &self.config)?;

        self.total_occurrence += u128::from(occurrence);

        if !self.filters.admits(&record) {
            return Ok(Admission::Filtered);
        }
        self.records.insert(mask.to_string(), record);
        Ok(Admission::Admitted)
    }

    /// Ingest a pair, recording and logging it instead of failing when it is
    /// malformed.
    pub fn ingest_at(&mut self, line: Option<u64>, mask: &str, occurrence: &str) -> Option<Admission> {
        match self.ingest(mask, occurrence) {
            Ok(admission) => Some(admission),
            Err(error) => {
                self.reject(line, error);
                None
            }
        }
    }

    pub fn reject(&mut self, line: Option<u64>, error: MaskError) {
        warn!(line = ?line, %error, "skipping malformed record");
        self.rejected.push(Rejected { line, error });
    }

    pub fn finish(self) -> Table {
        Table {
            records: self.records,
            total_occurrence: self.total_occurrence,
            rejected: self.rejected,
        }
    }
}

/// Read-only set of admitted masks.
#[derive(Debug, Default)]
pub struct Table {
    records: BTreeMap<String, FrequencyRecord>,
    total_occurrence: u128,
    rejected: Vec<Rejected>,
}

impl Table {
    pub fn get(&self, mask: &str) -> Option<&FrequencyRecord> {
        self.records.get(mask)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Admitted records in ascending mask order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FrequencyRecord)> {
        self.records.iter().map(|(mask, record)| (mask.as_str(), record))
    }

    /// Occurrence summed over every well-formed record, admitted or not.
    pub fn total_occurrence(&self) -> u128 {
        self.total_occurrence
    }

    pub fn rejected(&self) -> &[Rejected] {
        &self.rejected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder(filters: Filters) -> TableBuilder {
        TableBuilder::new(filters, &RunConfig::default())
    }

    #[test]
    fn empty_masks_are_skipped_and_not_counted() {
        let mut b = builder(Filters::default());
        assert_eq!(b.ingest("?l?l?l?l", "500").unwrap(), Admission::Admitted);
        assert_eq!(b.ingest("?d?d?d?d", "10").unwrap(), Admission::Admitted);
        assert_eq!(b.ingest("", "5").unwrap(), Admission::Empty);
        let table = b.finish();

        assert_eq!(table.total_occurrence(), 510);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("?l?l?l?l").unwrap().complexity, 456_976);
        assert_eq!(table.get("?d?d?d?d").unwrap().complexity, 10_000);
        assert_eq!(table.get("?d?d?d?d").unwrap().length, 4);
    }

    #[test]
    fn filtered_records_still_count_toward_total() {
        let filters = Filters {
            min_occurrence: Some(100),
            ..Filters::default()
        };
        let mut b = builder(filters);
        b.ingest("?l?l?l?l", "500").unwrap();
        assert_eq!(b.ingest("?d?d?d?d", "10").unwrap(), Admission::Filtered);
        let table = b.finish();

        assert_eq!(table.total_occurrence(), 510);
        assert_eq!(table.len(), 1);
        assert!(table.get("?d?d?d?d").is_none());
    }

    #[test]
    fn bounds_are_inclusive_and_combined() {
        let filters = Filters {
            min_length: Some(2),
            max_length: Some(3),
            min_complexity: Some(100),
            max_complexity: Some(1_000),
            ..Filters::default()
        };
        let mut b = builder(filters);
        assert_eq!(b.ingest("?d?d", "1").unwrap(), Admission::Admitted);
        assert_eq!(b.ingest("?d?d?d", "1").unwrap(), Admission::Admitted);
        assert_eq!(b.ingest("?d", "1").unwrap(), Admission::Filtered);
        assert_eq!(b.ingest("?l?l?l", "1").unwrap(), Admission::Filtered);
    }

    #[test]
    fn min_filters_keep_masks_at_or_above_the_bound() {
        let filters = Filters {
            min_complexity: Some(1_000),
            min_time: Some(1),
            ..Filters::default()
        };
        let mut b = builder(filters);
        assert_eq!(b.ingest("?a?a?a?a?a", "1").unwrap(), Admission::Admitted);
        assert_eq!(b.ingest("?d?d?d", "1").unwrap(), Admission::Filtered);
    }

    #[test]
    fn last_write_wins() {
        let mut b = builder(Filters::default());
        b.ingest("?d?d", "3").unwrap();
        b.ingest("?d?d", "7").unwrap();
        let table = b.finish();
        assert_eq!(table.get("?d?d").unwrap().occurrence, 7);
        assert_eq!(table.total_occurrence(), 10);
    }

    #[test]
    fn malformed_records_are_rejected_without_counting() {
        let mut b = builder(Filters::default());
        assert!(matches!(
            b.ingest("?d?d", "many"),
            Err(MaskError::MalformedOccurrence { .. })
        ));
        assert!(b.ingest_at(Some(2), "?d?q", "4").is_none());
        assert!(b.ingest_at(Some(3), "?d", "-1").is_none());
        b.ingest("?d", " 5 ").unwrap();
        let table = b.finish();

        assert_eq!(table.total_occurrence(), 5);
        assert_eq!(table.rejected().len(), 2);
        assert_eq!(table.rejected()[0].line, Some(2));
        assert!(matches!(
            table.rejected()[0].error,
            MaskError::MalformedMask { .. }
        ));
    }

    #[test]
    fn opt_index_prefers_frequent_cheap_masks() {
        let config = RunConfig::default();
        let cheap = FrequencyRecord::new("?d?d", 1_000, &config).unwrap();
        let dear = FrequencyRecord::new("?l?l?l", 1_000, &config).unwrap();
        assert!(cheap.opt_index > dear.opt_index);
        assert!((cheap.opt_index - 0.9).abs() < 1e-12);
        let never = FrequencyRecord::new("?d", 0, &config).unwrap();
        assert_eq!(never.opt_index, f64::NEG_INFINITY);
    }
}

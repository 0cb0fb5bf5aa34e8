//! CSV ingestion of `mask,occurrence` statistics.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use tracing::debug;

use super::TableBuilder;
use crate::error::{MaskError, Result};

/// Feed every row of a CSV stream into `builder`.
///
/// Malformed rows are rejected on the builder and reading continues; only
/// I/O failures abort. Returns the number of rows read.
pub fn read_into<R: io::Read>(builder: &mut TableBuilder, reader: R) -> Result<u64> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(b',')
        .quote(b'"')
        .from_reader(reader);

    let mut rows = 0;
    for result in rdr.records() {
        rows += 1;
        let record = match result {
            Ok(record) => record,
            Err(err) if matches!(err.kind(), csv::ErrorKind::Io(_)) => return Err(err.into()),
            Err(err) => {
                let line = err.position().map(|p| p.line());
                builder.reject(line, err.into());
                continue;
            }
        };
        let line = record.position().map(|p| p.line());

        match (record.len(), record.get(0), record.get(1)) {
            (1, Some(""), _) => continue,
            (2, Some(mask), Some(occurrence)) => {
                builder.ingest_at(line, mask, occurrence);
            }
            (fields, _, _) => builder.reject(
                line,
                MaskError::MalformedRecord {
                    line: line.unwrap_or(rows),
                    fields,
                },
            ),
        }
    }
    Ok(rows)
}

/// Feed a CSV file into `builder`.
pub fn load_path(builder: &mut TableBuilder, path: &Path) -> Result<u64> {
    let file = File::open(path)?;
    let rows = read_into(builder, BufReader::new(file))?;
    debug!(path = %path.display(), rows, "loaded mask statistics");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RunConfig;
    use crate::table::Filters;

    fn load(data: &str) -> crate::table::Table {
        let mut builder = TableBuilder::new(Filters::default(), &RunConfig::default());
        read_into(&mut builder, data.as_bytes()).unwrap();
        builder.finish()
    }

    #[test]
    fn reads_plain_and_quoted_rows() {
        let table = load("?l?l?l?l,500\n\"?d?d?d?d\",\"10\"\n,5\n");
        assert_eq!(table.len(), 2);
        assert_eq!(table.total_occurrence(), 510);
        assert!(table.rejected().is_empty());
    }

    #[test]
    fn wrong_arity_is_rejected_and_reading_continues() {
        let table = load("?d?d\n?l,3,extra\n?u,4\n");
        assert_eq!(table.len(), 1);
        assert_eq!(table.total_occurrence(), 4);
        assert_eq!(table.rejected().len(), 2);
        assert!(matches!(
            table.rejected()[0].error,
            MaskError::MalformedRecord { fields: 1, .. }
        ));
    }

    #[test]
    fn bad_occurrence_reports_its_line() {
        let table = load("?d,1\n?d?d,x\n");
        assert_eq!(table.rejected().len(), 1);
        assert_eq!(table.rejected()[0].line, Some(2));
    }
}

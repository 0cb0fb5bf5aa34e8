use std::io::Write;

use passmask::error::MaskError;
use passmask::table::{self, Filters, TableBuilder};
use passmask::RunConfig;
use tempfile::NamedTempFile;

fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write csv");
    file.flush().expect("flush csv");
    file
}

#[test]
fn empty_masks_are_skipped_and_not_counted() {
    let csv = write_csv("?l?l?l?l,500\n?d?d?d?d,10\n,5\n");
    let mut builder = TableBuilder::new(Filters::default(), &RunConfig::default());
    table::load_path(&mut builder, csv.path()).expect("load");
    let table = builder.finish();

    assert_eq!(table.len(), 2);
    assert_eq!(table.total_occurrence(), 510);
    assert!(table.rejected().is_empty());

    let record = table.get("?l?l?l?l").expect("record");
    assert_eq!(record.occurrence, 500);
    assert_eq!(record.length, 4);
    assert_eq!(record.complexity, 456_976);
}

#[test]
fn malformed_rows_are_rejected_without_aborting() {
    let csv = write_csv("?l?x,7\n?d?d,abc\n?u?u,1,2\n?s?s,3\n");
    let mut builder = TableBuilder::new(Filters::default(), &RunConfig::default());
    let rows = table::load_path(&mut builder, csv.path()).expect("load");
    let table = builder.finish();

    assert_eq!(rows, 4);
    assert_eq!(table.len(), 1);
    assert_eq!(table.total_occurrence(), 3);
    assert_eq!(table.rejected().len(), 3);
    assert!(matches!(
        table.rejected()[0].error,
        MaskError::MalformedMask { .. }
    ));
    assert!(matches!(
        table.rejected()[1].error,
        MaskError::MalformedOccurrence { .. }
    ));
    assert!(matches!(
        table.rejected()[2].error,
        MaskError::MalformedRecord { fields: 3, .. }
    ));
}

#[test]
fn filtered_masks_still_count_toward_the_total() {
    let csv = write_csv("?l?l?l?l,500\n?d?d?d?d,10\n?d?d,50\n");
    let filters = Filters {
        min_occurrence: Some(50),
        max_length: Some(3),
        ..Filters::default()
    };
    let mut builder = TableBuilder::new(filters, &RunConfig::default());
    table::load_path(&mut builder, csv.path()).expect("load");
    let table = builder.finish();

    let masks: Vec<_> = table.iter().map(|(mask, _)| mask).collect();
    assert_eq!(masks, vec!["?d?d"]);
    assert_eq!(table.total_occurrence(), 560);
}

#[test]
fn several_inputs_share_one_table() {
    let first = write_csv("?d?d,50\n");
    let second = write_csv("?u?l?l,20\n");
    let mut builder = TableBuilder::new(Filters::default(), &RunConfig::default());
    table::load_path(&mut builder, first.path()).expect("first");
    table::load_path(&mut builder, second.path()).expect("second");
    let table = builder.finish();

    assert_eq!(table.len(), 2);
    assert_eq!(table.total_occurrence(), 70);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut builder = TableBuilder::new(Filters::default(), &RunConfig::default());
    let err = table::load_path(&mut builder, &dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, MaskError::Io(_)));
}

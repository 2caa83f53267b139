//! CSV decoding behavior.

use std::io::Write;

use tidysheet_ingest::{read_csv, read_csv_path};

#[test]
fn reads_headers_and_rows() {
    let data = "Invoice,Qty\nINV-1,2\nINV-2,-1\n";
    let table = read_csv(data.as_bytes()).unwrap();
    assert_eq!(table.columns, vec!["Invoice", "Qty"]);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.cell(1, 1), "-1");
}

#[test]
fn pads_short_rows_and_truncates_long_ones() {
    let data = "A,B,C\n1\n1,2,3,4\n";
    let table = read_csv(data.as_bytes()).unwrap();
    assert_eq!(table.rows[0], vec!["1", "", ""]);
    assert_eq!(table.rows[1], vec!["1", "2", "3"]);
}

#[test]
fn trims_cells_and_headers() {
    let data = " Invoice , Qty \n INV-1 , 2 \n";
    let table = read_csv(data.as_bytes()).unwrap();
    assert_eq!(table.columns, vec!["Invoice", "Qty"]);
    assert_eq!(table.cell(0, 0), "INV-1");
}

#[test]
fn empty_stream_yields_empty_table() {
    let table = read_csv(&b""[..]).unwrap();
    assert_eq!(table.column_count(), 0);
    assert_eq!(table.row_count(), 0);
}

#[test]
fn reads_from_a_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "Name,Qty\nCheese,4\n").unwrap();
    let table = read_csv_path(file.path()).unwrap();
    assert_eq!(table.row_count(), 1);
    assert_eq!(table.cell(0, 0), "Cheese");
}

#[test]
fn missing_file_is_an_error() {
    let err = read_csv_path(std::path::Path::new("/no/such/file.csv")).unwrap_err();
    assert!(err.to_string().contains("/no/such/file.csv"));
}

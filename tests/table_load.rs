//! CSV 입력 표 회귀 테스트.
use std::io::Write;

use sigmap_toolbox::data::{self, TableError};

fn write_csv(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write csv");
    file
}

#[test]
fn header_row_is_consumed_and_extra_columns_ignored() {
    let file = write_csv(
        "stress,strain,void_ratio,comment\n10,0.00,1.10,a\n20,0.01,1.05,b\n",
    );
    let table = data::load_csv(file.path()).expect("load");
    assert_eq!(table.stress, vec![10.0, 20.0]);
    assert_eq!(table.strain, vec![0.0, 0.01]);
    assert_eq!(table.void_ratio, vec![1.10, 1.05]);
}

#[test]
fn fewer_than_three_columns_is_rejected() {
    let file = write_csv("stress,strain\n10,0.0\n");
    match data::load_csv(file.path()) {
        Err(TableError::TooFewColumns { found: 2 }) => {}
        other => panic!("expected TooFewColumns, got {other:?}"),
    }
}

#[test]
fn non_numeric_cell_is_rejected_with_position() {
    let file = write_csv("s,e1,e2\n10,0.0,1.1\n20,abc,1.0\n");
    match data::load_csv(file.path()) {
        Err(TableError::BadNumber { row: 2, column: 2 }) => {}
        other => panic!("expected BadNumber, got {other:?}"),
    }
}

#[test]
fn empty_data_section_loads_as_empty_table() {
    let file = write_csv("a,b,c\n");
    let table = data::load_csv(file.path()).expect("load");
    assert!(table.stress.is_empty());
}

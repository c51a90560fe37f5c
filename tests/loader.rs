//! CSV 로더 형식 검증 테스트.
use std::fs;
use std::path::PathBuf;

use flowloop_analysis::flowloop::loader::{self, DataFormatError};

fn write_fixture(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

#[test]
fn loads_valid_table_regardless_of_column_order() {
    let path = write_fixture(
        "flowloop_loader_valid.csv",
        "Flow Rate (gal/min),Index,Diameter (inch),Pressure Stra (psi),Pressure Globe (psi),Pressure Ball (psi)\n\
         10.0,1,1.0,5.0,3.0,2.0\n\
         12.5,2,1.0,6.1,3.4,2.2\n",
    );
    let table = loader::load_table(&path).expect("load");
    assert_eq!(table.len(), 2);
    assert_eq!(table.index, vec![1, 2]);
    assert!((table.flow_rate[0] - 10.0).abs() < 1e-12);
    assert!((table.diameter[1] - 1.0).abs() < 1e-12);
    assert!((table.dp_ball[1] - 2.2).abs() < 1e-12);
}

#[test]
fn missing_column_is_rejected() {
    let path = write_fixture(
        "flowloop_loader_missing_col.csv",
        "Index,Flow Rate (gal/min),Diameter (inch),Pressure Stra (psi),Pressure Globe (psi)\n\
         1,10.0,1.0,5.0,3.0\n",
    );
    let err = loader::load_table(&path).unwrap_err();
    assert!(matches!(
        err,
        DataFormatError::MissingColumn("Pressure Ball (psi)")
    ));
}

#[test]
fn non_numeric_cell_is_rejected() {
    let path = write_fixture(
        "flowloop_loader_bad_number.csv",
        "Index,Flow Rate (gal/min),Diameter (inch),Pressure Stra (psi),Pressure Globe (psi),Pressure Ball (psi)\n\
         1,abc,1.0,5.0,3.0,2.0\n",
    );
    let err = loader::load_table(&path).unwrap_err();
    match err {
        DataFormatError::InvalidNumber { column, line } => {
            assert_eq!(column, loader::COL_FLOW_RATE);
            assert_eq!(line, 2);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn ragged_row_is_rejected() {
    let path = write_fixture(
        "flowloop_loader_ragged.csv",
        "Index,Flow Rate (gal/min),Diameter (inch),Pressure Stra (psi),Pressure Globe (psi),Pressure Ball (psi)\n\
         1,10.0\n",
    );
    let err = loader::load_table(&path).unwrap_err();
    assert!(matches!(err, DataFormatError::Csv(_)));
}

#[test]
fn missing_file_is_rejected() {
    let path = std::env::temp_dir().join("flowloop_loader_does_not_exist.csv");
    let _ = fs::remove_file(&path);
    assert!(loader::load_table(&path).is_err());
}

// File: crates/hazard-core/tests/loader.rs
// Purpose: Validate typed CSV parsing and its named failure modes.

use chrono::NaiveDate;
use hazard_core::{load_series, ChartError};
use std::path::PathBuf;

fn write_fixture(name: &str, contents: &str) -> PathBuf {
    let dir = PathBuf::from("target/test_out/loader");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn loads_well_formed_series() {
    let path = write_fixture(
        "good.csv",
        "Year,value\n2000-01-01,10\n2010-01-01,30\n2020-01-01,5\n",
    );
    let series = load_series(&path, "Droughts").unwrap();

    assert_eq!(series.title(), "Droughts");
    assert_eq!(series.len(), 3);
    assert_eq!(series.records()[1].value, 30.0);
    assert_eq!(
        series.year_extent(),
        (
            NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
        )
    );
    assert_eq!(series.max_value(), 30.0);
}

#[test]
fn malformed_date_names_the_row() {
    let path = write_fixture("bad_date.csv", "Year,value\n2000-01-01,10\nnot-a-date,30\n");
    let err = load_series(&path, "x").unwrap_err();
    match err {
        ChartError::ParseDate { row, text, .. } => {
            assert_eq!(row, 3);
            assert_eq!(text, "not-a-date");
        }
        other => panic!("expected ParseDate, got {other:?}"),
    }
}

#[test]
fn non_numeric_value_names_the_row() {
    let path = write_fixture("bad_value.csv", "Year,value\n2000-01-01,many\n");
    let err = load_series(&path, "x").unwrap_err();
    match err {
        ChartError::ParseValue { row, text, .. } => {
            assert_eq!(row, 2);
            assert_eq!(text, "many");
        }
        other => panic!("expected ParseValue, got {other:?}"),
    }
}

#[test]
fn non_finite_value_is_rejected() {
    let path = write_fixture("nan_value.csv", "Year,value\n2000-01-01,NaN\n");
    let err = load_series(&path, "x").unwrap_err();
    assert!(matches!(err, ChartError::ParseValue { .. }));
}

#[test]
fn missing_column_is_named() {
    let path = write_fixture("no_value.csv", "Year,count\n2000-01-01,10\n");
    let err = load_series(&path, "x").unwrap_err();
    assert!(matches!(err, ChartError::MissingColumn { column: "value", .. }));
}

#[test]
fn unreachable_file_fails_the_load() {
    let err = load_series("target/test_out/loader/does_not_exist.csv", "x").unwrap_err();
    assert!(matches!(err, ChartError::Load { .. }));
}

#[test]
fn header_only_file_is_an_empty_series() {
    let path = write_fixture("empty.csv", "Year,value\n");
    let err = load_series(&path, "Storms").unwrap_err();
    assert!(matches!(err, ChartError::EmptySeries { ref title } if title == "Storms"));
}

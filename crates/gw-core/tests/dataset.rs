// File: crates/gw-core/tests/dataset.rs
// Purpose: Loader contract: record counts, declared columns, and DataError cases.

use gw_core::{DataError, Dataset};

fn fixture() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/games.csv")
}

#[test]
fn loads_every_row_with_declared_columns() {
    let ds = Dataset::load_csv(fixture()).expect("fixture loads");
    assert_eq!(ds.len(), 10);
    for col in ["release order", "game", "model", "series", "date of release", "produced", "screen"] {
        assert!(ds.has_column(col), "missing column {col}");
    }
    assert_eq!(ds.columns().len(), 7);

    let ball = &ds.records()[0];
    assert_eq!(ball.game, "Ball");
    assert_eq!(ball.model, "AC-01");
    assert_eq!(ball.series, "Silver");
    assert_eq!(ball.year(), 1980);
    assert_eq!(ball.produced, Some(1_000_000));
    assert_eq!(ball.attributes.get("screen").map(String::as_str), Some("single"));

    // empty produced cell means unknown
    assert_eq!(ds.records()[2].produced, None);
    assert_eq!(ds.year_range(), Some((1980, 1983)));
}

#[test]
fn missing_required_column_is_a_data_error() {
    let csv = "game,model,date of release\nBall,AC-01,1980-04-28\n";
    let err = Dataset::from_reader(csv.as_bytes()).unwrap_err();
    match err {
        DataError::MissingColumns(cols) => assert_eq!(cols, vec!["series".to_string()]),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_file_is_a_data_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Dataset::load_csv(dir.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, DataError::Open { .. }));
}

#[test]
fn malformed_date_names_line_and_column() {
    let csv = "game,model,series,date of release\nBall,AC-01,Silver,1980-04-28\nFire,RC-04,Silver,someday\n";
    match Dataset::from_reader(csv.as_bytes()).unwrap_err() {
        DataError::InvalidField { line, column, value, .. } => {
            assert_eq!(line, 3);
            assert_eq!(column, "date of release");
            assert_eq!(value, "someday");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn ragged_rows_and_empty_cells_are_rejected() {
    let ragged = "game,model,series,date of release\nBall,AC-01,Silver\n";
    assert!(matches!(Dataset::from_reader(ragged.as_bytes()), Err(DataError::Csv(_))));

    let empty = "game,model,series,date of release\nBall,,Silver,1980-04-28\n";
    assert!(matches!(
        Dataset::from_reader(empty.as_bytes()),
        Err(DataError::EmptyField { line: 2, .. })
    ));
}

#[test]
fn headers_are_matched_leniently_and_order_defaults_to_row() {
    let csv = "Game,Model_Number,SERIES,Release-Date\nBall,AC-01,Silver,April 28, 1980\n";
    // the unquoted comma in the date makes this row ragged
    assert!(Dataset::from_reader(csv.as_bytes()).is_err());

    let csv = "Game,Model_Number,SERIES,Release-Date\nBall,AC-01,Silver,\"April 28, 1980\"\nFlagman,FL-02,Silver,1980/06/05\n";
    let ds = Dataset::from_reader(csv.as_bytes()).expect("lenient headers");
    assert_eq!(ds.len(), 2);
    assert_eq!(ds.records()[0].release_order, 1);
    assert_eq!(ds.records()[1].release_order, 2);
    assert_eq!(ds.records()[1].released.to_string(), "1980-06-05");
}

#[test]
fn max_release_year_filter() {
    let ds = Dataset::load_csv(fixture()).unwrap();
    assert_eq!(ds.up_to_year(Some(1981)).len(), 6);
    assert_eq!(ds.up_to_year(None).len(), 10);
    assert!(ds.up_to_year(Some(1970)).is_empty());
}

#[test]
fn float_formatted_quantities_are_accepted() {
    let csv = "game,model,series,date of release,produced\nBall,AC-01,Silver,1980-04-28,1000000.0\nFire,RC-04,Silver,1980-07-31,\nFlagman,FL-02,Silver,1980-06-05,250000.5\n";
    match Dataset::from_reader(csv.as_bytes()).unwrap_err() {
        DataError::InvalidField { line, column, .. } => assert_eq!((line, column.as_str()), (4, "produced")),
        other => panic!("unexpected error: {other}"),
    }

    let csv = "game,model,series,date of release,produced\nBall,AC-01,Silver,1980-04-28,1000000.0\nFire,RC-04,Silver,1980-07-31,\n";
    let ds = Dataset::from_reader(csv.as_bytes()).expect("pandas-style quantities");
    assert_eq!(ds.records()[0].produced, Some(1_000_000));
    assert_eq!(ds.records()[1].produced, None);
}

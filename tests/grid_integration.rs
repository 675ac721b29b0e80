//! Integration tests for the grid mutation flow
//!
//! These follow the editor's actual edit loop: parse a file, build rows from
//! header-keyed form fields, append or replace, and read the grid back.

use std::collections::HashMap;

use csvgrid::{parse, GridError};

fn fields(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_add_row_from_form() {
    let mut grid = parse("name,age\nAlice,30");

    let row = grid.row_from_fields(&fields(&[("name", "Bob"), ("age", "25")]));
    grid.append_row(row);

    assert_eq!(grid.row_count(), 2);
    assert_eq!(grid.rows[1], ["Bob", "25"]);
}

#[test]
fn test_add_row_with_missing_fields() {
    let mut grid = parse("name,age,city\nAlice,30,NYC");

    let row = grid.row_from_fields(&fields(&[("name", "Bob")]));
    grid.append_row(row);

    assert_eq!(grid.rows[1], ["Bob", "", ""]);
}

#[test]
fn test_form_fields_ignore_unknown_keys() {
    let grid = parse("name\nAlice");
    let row = grid.row_from_fields(&fields(&[("name", "Bob"), ("phantom", "x")]));
    assert_eq!(row, ["Bob"]);
}

#[test]
fn test_edit_row_in_place() {
    let mut grid = parse("name,age\nAlice,30\nBob,25");

    let row = grid.row_from_fields(&fields(&[("name", "Bob"), ("age", "26")]));
    grid.replace_row(1, row).unwrap();

    assert_eq!(grid.rows[1], ["Bob", "26"]);
    assert_eq!(grid.rows[0], ["Alice", "30"]); // neighbors untouched
    assert_eq!(grid.row_count(), 2);
}

#[test]
fn test_replace_out_of_range_is_guarded() {
    let mut grid = parse("name\nAlice");
    let err = grid.replace_row(5, vec!["x".into()]).unwrap_err();
    assert!(matches!(err, GridError::RowOutOfRange { index: 5, len: 1 }));
}

#[test]
fn test_headers_unchanged_by_mutations() {
    let mut grid = parse("a,b\n1,2");
    let headers = grid.headers.clone();

    grid.append_row(vec!["3".into(), "4".into()]);
    grid.replace_row(0, vec!["9".into(), "8".into()]).unwrap();

    assert_eq!(grid.headers, headers);
}

#[test]
fn test_new_file_replaces_grid_wholesale() {
    // Loading a new file discards the previous grid entirely; nothing merges.
    let mut grid = parse("a,b\n1,2");
    grid.append_row(vec!["3".into(), "4".into()]);

    grid = parse("x\nonly");
    assert_eq!(grid.headers, ["x"]);
    assert_eq!(grid.rows, vec![vec!["only"]]);
}

#[test]
fn test_edits_survive_round_trip() {
    let mut grid = parse("name,age\nAlice,30");
    let row = grid.row_from_fields(&fields(&[("name", "Zoe, Jr."), ("age", "7")]));
    grid.append_row(row);

    let reparsed = csvgrid::parse(&csvgrid::to_csv(&grid));
    assert_eq!(reparsed, grid);
}

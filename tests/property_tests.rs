//! Property-based tests using proptest
//!
//! These tests verify the grid engine's contract across generated inputs:
//! the parse/serialize round-trip over the unambiguous input class, purity
//! of the serializers, and that the parser never panics on arbitrary text.

use csvgrid::{parse, to_csv, to_json, Grid};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// Cells from the round-trip class: no backslashes (the naive escape check
/// makes `\"` ambiguous), trimmed (the parser trims unconditionally).
/// Commas, quotes, newlines, and spaces are all fair game — the serializer
/// must protect them.
fn clean_cell() -> impl Strategy<Value = String> {
    r#"[a-zA-Z0-9," \n]{0,12}"#.prop_map(|s| s.trim().to_string())
}

/// Grids as the parser itself would produce them: trimmed headers, every
/// row at header width, and no row that would serialize to a blank line
/// (the parser drops blank lines, so such a row cannot survive).
fn clean_grid() -> impl Strategy<Value = Grid> {
    prop::collection::vec("[a-zA-Z0-9_]{1,8}", 1..5).prop_flat_map(|headers| {
        let width = headers.len();
        let row = prop::collection::vec(clean_cell(), width..=width).prop_filter(
            "single-cell rows must not be blank",
            move |cells| width > 1 || cells.iter().any(|c| !c.is_empty()),
        );
        prop::collection::vec(row, 0..6)
            .prop_map(move |rows| Grid::new(headers.clone(), rows))
    })
}

// =============================================================================
// Round-Trip Properties
// =============================================================================

proptest! {
    /// parse(to_csv(g)) reproduces g for the unambiguous grid class.
    #[test]
    fn test_csv_round_trip(grid in clean_grid()) {
        let csv = to_csv(&grid);
        prop_assert_eq!(parse(&csv), grid);
    }

    /// Serializing twice from equal grids yields identical CSV text.
    #[test]
    fn test_to_csv_is_pure(grid in clean_grid()) {
        prop_assert_eq!(to_csv(&grid), to_csv(&grid.clone()));
    }

    /// Serializing twice from equal grids yields identical JSON text.
    #[test]
    fn test_to_json_is_pure(grid in clean_grid()) {
        prop_assert_eq!(to_json(&grid).unwrap(), to_json(&grid.clone()).unwrap());
    }

    /// A cell with a comma, quote, or newline always comes back intact
    /// through one serialize/parse cycle.
    #[test]
    fn test_single_cell_survives(cell in clean_cell()) {
        prop_assume!(!cell.is_empty());
        let grid = Grid::new(vec!["h".to_string()], vec![vec![cell.clone()]]);
        let reparsed = parse(&to_csv(&grid));
        prop_assert_eq!(reparsed.rows[0][0].clone(), cell);
    }
}

// =============================================================================
// Robustness Properties
// =============================================================================

proptest! {
    /// Malformed input is never an error: parse accepts any string and the
    /// serializers accept whatever it produced.
    #[test]
    fn test_parse_never_panics(text in "\\PC{0,200}") {
        let grid = parse(&text);
        let _ = to_csv(&grid);
        let _ = to_json(&grid).unwrap();
    }

    /// Every parsed cell is trimmed.
    #[test]
    fn test_parsed_cells_are_trimmed(text in "[a-z, \n]{0,80}") {
        let grid = parse(&text);
        for header in &grid.headers {
            prop_assert_eq!(header.trim(), header.as_str());
        }
        for row in &grid.rows {
            for cell in row {
                prop_assert_eq!(cell.trim(), cell.as_str());
            }
        }
    }

    /// JSON output always has one object per row, keyed by every header.
    #[test]
    fn test_json_shape_matches_grid(grid in clean_grid()) {
        let json = to_json(&grid).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let array = parsed.as_array().unwrap();
        prop_assert_eq!(array.len(), grid.row_count());
        for object in array {
            prop_assert_eq!(object.as_object().unwrap().len(), grid.column_count());
        }
    }
}

//! Loading, solving and saving CSV files

use pretty_assertions::assert_eq;
use rpn_sheets::prelude::*;
use tempfile::TempDir;

#[test]
fn test_open_solve_save() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.csv");
    let output = dir.path().join("output.csv");
    std::fs::write(&input, "3 4 +,5\nA1 B1 -\n\"2 3 ^\",#ERR,A1 A9 +\n").unwrap();

    let mut grid = Grid::open(&input).unwrap();
    let stats = grid.solve().unwrap();
    grid.save(&output).unwrap();

    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "7.0,5.0\n2.0\n8.0,#ERR,#ERR\n"
    );
    assert_eq!(stats.errors, 1);
    assert!(stats.converged);
}

#[test]
fn test_blank_lines_keep_row_numbers() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.csv");
    let output = dir.path().join("output.csv");
    std::fs::write(&input, "1\n\n2\nA3 1 +\n").unwrap();

    let mut grid = Grid::open(&input).unwrap();
    grid.solve().unwrap();
    grid.save(&output).unwrap();

    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "1.0\n\n2.0\n3.0\n"
    );
}

#[test]
fn test_reference_into_blank_row_is_error() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.csv");
    std::fs::write(&input, "A2\n\n").unwrap();

    let mut grid = Grid::open(&input).unwrap();
    grid.solve().unwrap();
    assert_eq!(grid.row_count(), 2);
    assert_eq!(grid.get_value("A1").unwrap(), &CellValue::Error);
}

#[test]
fn test_open_missing_file() {
    let dir = TempDir::new().unwrap();
    assert!(Grid::open(dir.path().join("nope.csv")).is_err());
}

//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::CsvResult;
use crate::options::CsvReadOptions;
use rpn_sheets_core::{CellValue, Grid};

/// CSV file reader
pub struct CsvReader;

impl CsvReader {
    /// Read CSV file into a grid
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Grid> {
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read CSV from a reader into a grid
    ///
    /// Every field becomes one cell and every row is data. Rows keep their
    /// own length, so ragged input stays ragged. A blank line becomes a row
    /// with no cells, which keeps row numbers in step with line numbers.
    pub fn read<R: Read>(mut reader: R, options: &CsvReadOptions) -> CsvResult<Grid> {
        let mut input = Vec::new();
        reader.read_to_end(&mut input)?;

        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(false)
            .flexible(true)
            .from_reader(input.as_slice());

        let mut grid = Grid::new();
        let mut record = csv::StringRecord::new();
        let mut consumed = 0;
        let mut after_cr = false;

        // csv drops blank lines; they sit at the front of the bytes consumed
        // for the next record
        while csv_reader.read_record(&mut record)? {
            let end = csv_reader.position().byte() as usize;
            let span = input.get(consumed..end).unwrap_or_default();

            for _ in 0..blank_lines(span, after_cr) {
                grid.push_row(Vec::new());
            }
            grid.push_row(record.iter().map(CellValue::from_input).collect());

            after_cr = span.last() == Some(&b'\r');
            consumed = end;
        }

        let rest = input.get(consumed..).unwrap_or_default();
        for _ in 0..blank_lines(rest, after_cr) {
            grid.push_row(Vec::new());
        }

        log::debug!(
            "read {} rows ({} cells)",
            grid.row_count(),
            grid.cell_count()
        );
        Ok(grid)
    }
}

/// Count the line breaks that open `bytes`
///
/// `\r\n`, `\n` and `\r` each end one line. `after_cr` says the previous
/// record ended on `\r`, so a leading `\n` completes that terminator.
fn blank_lines(bytes: &[u8], mut after_cr: bool) -> usize {
    let mut count = 0;
    for &b in bytes {
        match b {
            b'\n' if after_cr => after_cr = false,
            b'\n' => count += 1,
            b'\r' => {
                count += 1;
                after_cr = true;
            }
            _ => break,
        }
    }
    count
}

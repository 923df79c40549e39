//! CSV writer

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::CsvResult;
use crate::options::{CsvWriteOptions, LineTerminator};
use rpn_sheets_core::Grid;

/// CSV file writer
pub struct CsvWriter;

impl CsvWriter {
    /// Write a grid to a CSV file
    pub fn write_file<P: AsRef<Path>>(
        grid: &Grid,
        path: P,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let file = File::create(path)?;
        Self::write(grid, file, options)
    }

    /// Write a grid to a writer, one record per row
    ///
    /// A row with no fields left (no cells, or only empty ones when trailing
    /// empty fields are stripped) is written as a bare line break.
    pub fn write<W: Write>(grid: &Grid, writer: W, options: &CsvWriteOptions) -> CsvResult<()> {
        let terminator = match options.line_terminator {
            LineTerminator::LF => csv::Terminator::Any(b'\n'),
            LineTerminator::CRLF => csv::Terminator::CRLF,
        };

        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .terminator(terminator)
            .flexible(true)
            .from_writer(writer);

        for row in grid.rows() {
            let mut record: Vec<String> = row.iter().map(ToString::to_string).collect();
            if options.strip_trailing_empty {
                while record.last().is_some_and(String::is_empty) {
                    record.pop();
                }
            }

            if record.is_empty() {
                // csv would write an empty record as `""`
                csv_writer.flush()?;
                csv_writer
                    .get_mut()
                    .write_all(options.line_terminator.as_bytes())?;
            } else {
                csv_writer.write_record(&record)?;
            }
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Render a grid to a string
    pub fn to_string(grid: &Grid, options: &CsvWriteOptions) -> CsvResult<String> {
        let mut buf = Vec::new();
        Self::write(grid, &mut buf, options)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

//! rpn-sheets CLI - solve a CSV grid of postfix expressions

mod logger;

use anyhow::{bail, Context, Result};
use clap::Parser;
use rpn_sheets::prelude::*;
use rpn_sheets::{CsvReadOptions, CsvWriteOptions, ERROR_MARKER};
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rpn-sheets")]
#[command(
    author,
    version,
    about = "Solve a CSV grid of postfix expressions with cell references"
)]
struct Cli {
    /// Input CSV file
    input: PathBuf,

    /// Output CSV file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Field delimiter for input and output
    #[arg(short, long, default_value = ",")]
    delimiter: char,

    /// Maximum number of resolving sweeps (default: cell count + 1)
    #[arg(long)]
    max_sweeps: Option<usize>,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print solve statistics to stderr
    #[arg(short, long)]
    stats: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose).context("Failed to install logger")?;
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let delimiter = delimiter_byte(cli.delimiter)?;

    let read_options = CsvReadOptions {
        delimiter,
        ..Default::default()
    };
    let mut grid = CsvReader::read_file(&cli.input, &read_options)
        .with_context(|| format!("Failed to read '{}'", cli.input.display()))?;

    let stats = grid
        .solve_with_options(&SolveOptions {
            max_sweeps: cli.max_sweeps,
        })
        .context("Failed to solve grid")?;

    if cli.stats {
        eprintln!(
            "Solved {} cells in {} sweeps ({} evaluated, {} errors, {} unresolved, {} {} in total)",
            grid.cell_count(),
            stats.sweeps,
            stats.cells_evaluated,
            stats.errors,
            stats.forced_errors,
            grid.count_where(CellValue::is_error),
            ERROR_MARKER
        );
    }

    let write_options = CsvWriteOptions {
        delimiter,
        ..Default::default()
    };
    match &cli.output {
        Some(path) => {
            CsvWriter::write_file(&grid, path, &write_options)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            log::info!("Wrote {} rows to '{}'", grid.row_count(), path.display());
        }
        None => {
            CsvWriter::write(&grid, io::stdout().lock(), &write_options)
                .context("Failed to write to stdout")?;
        }
    }

    Ok(())
}

/// The csv crate takes single-byte delimiters
fn delimiter_byte(delimiter: char) -> Result<u8> {
    if !delimiter.is_ascii() {
        bail!("Delimiter must be an ASCII character, got '{}'", delimiter);
    }
    Ok(delimiter as u8)
}

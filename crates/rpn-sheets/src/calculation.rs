//! Grid calculation engine
//!
//! Solves a grid by sweeping it repeatedly. References form an implicit
//! dependency graph: a cell is evaluated once every cell it references holds
//! a number, so each sweep solves the cells whose inputs were finished by an
//! earlier sweep (or earlier in the same sweep). When a sweep changes nothing
//! the grid is stable and one last sweep turns every cell that is still
//! waiting (cycles, chains ending in `#ERR`) into `#ERR`.
//!
//! | State        | Sweep                                      | Next                          |
//! |--------------|--------------------------------------------|-------------------------------|
//! | `Resolving`  | solve what can be solved, skip the rest    | `Stable` when nothing changed |
//! | `Stable`     | none                                       | `Finalizing`                  |
//! | `Finalizing` | like `Resolving`, waiting cells -> `#ERR`  | `Done`                        |
//!
//! # Example
//!
//! ```rust
//! use rpn_sheets::prelude::*;
//!
//! let mut grid = Grid::from_text_rows([["B1 2 *", "10 4 -", "A1 C1 +"]]);
//! let stats = grid.solve().unwrap();
//!
//! assert_eq!(grid.to_text_rows(), vec![vec!["12.0", "6.0", "#ERR"]]);
//! assert_eq!(stats.forced_errors, 1);
//! ```

use crate::{evaluate, resolve, tokenize, CellAddress, CellValue, Error, Grid, Result};

/// Options for solving a grid
#[derive(Debug, Clone, Default)]
pub struct SolveOptions {
    /// Ceiling on resolving sweeps (default: number of cells + 1)
    ///
    /// Every resolving sweep but the last changes at least one cell, and a
    /// cell changes at most once, so the default is never reached on a
    /// well-behaved grid.
    pub max_sweeps: Option<usize>,
}

impl SolveOptions {
    fn sweep_limit(&self, grid: &Grid) -> usize {
        self.max_sweeps
            .unwrap_or_else(|| grid.cell_count().saturating_add(1))
    }
}

/// Statistics from a solve
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// Sweeps performed, the finalizing sweep included
    pub sweeps: usize,
    /// Number of cells whose references resolved and were evaluated
    pub cells_evaluated: usize,
    /// Number of cells that became `#ERR` during the solve
    pub errors: usize,
    /// Cells still waiting on a reference when the grid went stable
    pub forced_errors: usize,
    /// Whether every cell settled without being forced to `#ERR`
    pub converged: bool,
}

/// Solver state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveState {
    /// Sweeping until a sweep changes nothing
    Resolving,
    /// Last resolving sweep changed nothing
    Stable,
    /// Final sweep, waiting cells become errors
    Finalizing,
    /// Every cell is a number or `#ERR`
    Done,
}

/// Extension trait for Grid to add solve methods
pub trait GridSolveExt {
    /// Solve every cell with default options
    fn solve(&mut self) -> Result<SolveStats>;

    /// Solve every cell with custom options
    fn solve_with_options(&mut self, options: &SolveOptions) -> Result<SolveStats>;
}

impl GridSolveExt for Grid {
    fn solve(&mut self) -> Result<SolveStats> {
        self.solve_with_options(&SolveOptions::default())
    }

    fn solve_with_options(&mut self, options: &SolveOptions) -> Result<SolveStats> {
        Solver::new(self, options).run()
    }
}

/// Sweep-by-sweep solver over a borrowed grid
///
/// [`GridSolveExt::solve`] is the usual entry point; `Solver` exposes the
/// individual steps so the grid can be inspected between sweeps.
pub struct Solver<'a> {
    grid: &'a mut Grid,
    state: SolveState,
    limit: usize,
    resolving_sweeps: usize,
    stats: SolveStats,
}

impl<'a> Solver<'a> {
    /// Create a solver in the `Resolving` state
    pub fn new(grid: &'a mut Grid, options: &SolveOptions) -> Self {
        let limit = options.sweep_limit(grid);
        Self {
            grid,
            state: SolveState::Resolving,
            limit,
            resolving_sweeps: 0,
            stats: SolveStats::default(),
        }
    }

    /// Current state
    pub fn state(&self) -> SolveState {
        self.state
    }

    /// Statistics so far
    pub fn stats(&self) -> &SolveStats {
        &self.stats
    }

    /// The grid being solved
    pub fn grid(&self) -> &Grid {
        self.grid
    }

    /// Advance by one transition, returning the new state
    pub fn step(&mut self) -> Result<SolveState> {
        match self.state {
            SolveState::Resolving => {
                if self.resolving_sweeps >= self.limit {
                    return Err(Error::SweepLimitExceeded { limit: self.limit });
                }
                self.resolving_sweeps += 1;
                let changed = self.sweep(false)?;
                log::debug!(
                    "sweep {}: {} cells changed",
                    self.stats.sweeps,
                    changed
                );
                if changed == 0 {
                    self.state = SolveState::Stable;
                }
            }
            SolveState::Stable => {
                self.state = SolveState::Finalizing;
            }
            SolveState::Finalizing => {
                let changed = self.sweep(true)?;
                log::debug!(
                    "final sweep {}: {} cells changed, {} forced",
                    self.stats.sweeps,
                    changed,
                    self.stats.forced_errors
                );
                self.stats.converged = self.stats.forced_errors == 0;
                self.state = SolveState::Done;
            }
            SolveState::Done => {}
        }
        Ok(self.state)
    }

    /// Step until `Done`
    pub fn run(mut self) -> Result<SolveStats> {
        while self.state != SolveState::Done {
            let state = self.step()?;
            log::trace!("solver state: {:?}", state);
        }
        Ok(self.stats)
    }

    /// Visit every pending cell once, in sweep order
    fn sweep(&mut self, finalizing: bool) -> Result<usize> {
        self.stats.sweeps += 1;

        let pending: Vec<CellAddress> = self
            .grid
            .addresses()
            .filter(|&addr| self.grid.get(addr).is_some_and(CellValue::is_pending))
            .collect();

        let mut changed = 0;
        for addr in pending {
            if let Some(value) = self.solve_cell(addr, finalizing) {
                self.grid.set_at(addr.row, addr.col, value)?;
                changed += 1;
            }
        }
        Ok(changed)
    }

    /// Try to solve one cell; `None` leaves it pending
    fn solve_cell(&mut self, addr: CellAddress, finalizing: bool) -> Option<CellValue> {
        let tokens = match self.grid.get(addr) {
            Some(CellValue::Expression(text)) => tokenize(text),
            _ => return None,
        };

        match resolve(&tokens, self.grid) {
            Ok(resolved) => {
                self.stats.cells_evaluated += 1;
                match evaluate(&resolved) {
                    Ok(n) => {
                        log::trace!("{}: {:?} = {}", addr, resolved, n);
                        Some(CellValue::Number(n))
                    }
                    Err(e) => {
                        log::trace!("{}: {}", addr, e);
                        self.stats.errors += 1;
                        Some(CellValue::Error)
                    }
                }
            }
            Err(e) if e.is_retryable() && !finalizing => {
                log::trace!("{}: waiting, {}", addr, e);
                None
            }
            Err(e) => {
                log::debug!("{}: {}", addr, e);
                if e.is_retryable() {
                    self.stats.forced_errors += 1;
                }
                self.stats.errors += 1;
                Some(CellValue::Error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn solved(rows: Vec<Vec<&str>>) -> Vec<Vec<String>> {
        let mut grid = Grid::from_text_rows(rows);
        grid.solve().unwrap();
        grid.to_text_rows()
    }

    #[test]
    fn test_literals() {
        assert_eq!(solved(vec![vec!["5", "-2.5", "3.14159"]]), vec![vec!["5.0", "-2.5", "3.14159"]]);
    }

    #[test]
    fn test_forward_reference() {
        assert_eq!(solved(vec![vec!["B1 1 +", "2 3 *"]]), vec![vec!["7.0", "6.0"]]);
    }

    #[test]
    fn test_empty_cell_is_error() {
        assert_eq!(solved(vec![vec!["", "  "]]), vec![vec!["#ERR", "#ERR"]]);
    }

    #[test]
    fn test_state_sequence() {
        let mut grid = Grid::from_text_rows([["B1 1 +", "A1 1 +"]]);
        let mut solver = Solver::new(&mut grid, &SolveOptions::default());

        assert_eq!(solver.state(), SolveState::Resolving);
        assert_eq!(solver.step().unwrap(), SolveState::Stable);
        assert_eq!(solver.step().unwrap(), SolveState::Finalizing);
        assert_eq!(solver.step().unwrap(), SolveState::Done);
        assert_eq!(solver.step().unwrap(), SolveState::Done);
        assert_eq!(solver.stats().sweeps, 2);
        assert_eq!(solver.stats().forced_errors, 2);
        assert!(!solver.stats().converged);
    }

    #[test]
    fn test_stats() {
        let mut grid = Grid::from_text_rows(vec![vec!["3 4 +", "5"], vec!["A1 B1 -", "10 0 /"]]);
        let stats = grid.solve().unwrap();
        assert_eq!(
            stats,
            SolveStats {
                sweeps: 3,
                cells_evaluated: 4,
                errors: 1,
                forced_errors: 0,
                converged: true,
            }
        );
    }

    #[test]
    fn test_sweep_limit() {
        // B1 resolves in the first sweep, A1 in the second, the third changes nothing
        let options = SolveOptions {
            max_sweeps: Some(2),
        };
        let mut grid = Grid::from_text_rows([["B1 1 +", "5"]]);
        assert!(matches!(
            grid.solve_with_options(&options),
            Err(Error::SweepLimitExceeded { limit: 2 })
        ));

        let options = SolveOptions {
            max_sweeps: Some(3),
        };
        let mut grid = Grid::from_text_rows([["B1 1 +", "5"]]);
        grid.solve_with_options(&options).unwrap();
        assert_eq!(grid.to_text_rows(), vec![vec!["6.0", "5.0"]]);
    }

    #[test]
    fn test_default_limit() {
        let grid = Grid::from_text_rows([["1", "2"]]);
        assert_eq!(SolveOptions::default().sweep_limit(&grid), 3);
    }

    #[test]
    fn test_empty_grid() {
        let mut grid = Grid::new();
        let stats = grid.solve().unwrap();
        assert_eq!(stats.sweeps, 2);
        assert!(stats.converged);
    }
}

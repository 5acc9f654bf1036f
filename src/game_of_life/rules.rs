//! Neighbor-counting rules that decide a cell's next state

use super::{CellState, Grid};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rule variant applied to every cell each generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// The console program's rule as it actually behaves: a dead cell with
    /// 2 or 3 living neighbors is born, every other cell (including every
    /// living one) is dead in the next generation.
    #[default]
    Literal,
    /// Canonical B3/S23: birth on 3, survival on 2 or 3.
    Conway,
}

impl Rule {
    /// Decide the next state from the current state and living-neighbor count
    pub fn apply(self, current: CellState, neighbors: u8) -> CellState {
        match self {
            // Birth on exactly 3 overlaps the "survival" check, which also
            // looks at dead cells, so a dead cell with 2 neighbors is born too.
            Rule::Literal => match (current, neighbors) {
                (CellState::Dead, 2..=3) => CellState::Alive,
                _ => CellState::Dead,
            },
            Rule::Conway => match (current, neighbors) {
                (CellState::Alive, 2) | (CellState::Alive, 3) | (CellState::Dead, 3) => {
                    CellState::Alive
                }
                _ => CellState::Dead,
            },
        }
    }

    /// Next state of the cell at `(row, col)` given the grid it lives in.
    ///
    /// Only the edge-clamped 3×3 neighborhood is read.
    pub fn next_state(self, grid: &Grid, row: usize, col: usize) -> CellState {
        self.apply(grid.get(row, col), grid.count_neighbors(row, col))
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Literal => write!(f, "literal"),
            Rule::Conway => write!(f, "conway"),
        }
    }
}

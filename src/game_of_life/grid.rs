//! Grid representation and utilities for the simulated world

use super::CellState;
use anyhow::Result;
use itertools::Itertools;
use std::fmt;

/// Side length of the world when nothing else is configured
pub const DEFAULT_WORLD_SIZE: usize = 60;

/// A square world of `size × size` cells stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create a new grid with every cell dead
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![CellState::Dead; size * size],
        }
    }

    /// Create a grid from a square 2D array of cell states
    pub fn from_rows(rows: Vec<Vec<CellState>>) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            anyhow::bail!("Grid cannot be empty");
        }

        for (i, row) in rows.iter().enumerate() {
            if row.len() != size {
                anyhow::bail!("Row {} has length {}, expected {}", i, row.len(), size);
            }
        }

        Ok(Self {
            size,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Get the cell state at coordinates; out of range reads are dead
    pub fn get(&self, row: usize, col: usize) -> CellState {
        if row < self.size && col < self.size {
            self.cells[self.index(row, col)]
        } else {
            CellState::Dead
        }
    }

    /// Set the cell state at coordinates
    pub fn set(&mut self, row: usize, col: usize, state: CellState) -> Result<()> {
        if row >= self.size || col >= self.size {
            anyhow::bail!(
                "Coordinates ({}, {}) out of bounds for {}x{} grid",
                row, col, self.size, self.size
            );
        }
        let idx = self.index(row, col);
        self.cells[idx] = state;
        Ok(())
    }

    /// Mutable access for in-crate writers that iterate known-valid positions
    pub(crate) fn cell_mut(&mut self, row: usize, col: usize) -> &mut CellState {
        let idx = self.index(row, col);
        &mut self.cells[idx]
    }

    /// Count living neighbors of a cell.
    ///
    /// The neighborhood is truncated at the edges: a corner cell has 3
    /// neighbors, an edge cell 5. Nothing wraps around.
    pub fn count_neighbors(&self, row: usize, col: usize) -> u8 {
        let last = self.size - 1;
        let rows = row.saturating_sub(1)..=(row + 1).min(last);
        let cols = col.saturating_sub(1)..=(col + 1).min(last);

        rows.cartesian_product(cols)
            .filter(|&(r, c)| (r, c) != (row, col))
            .filter(|&(r, c)| self.cells[self.index(r, c)].is_alive())
            .count() as u8
    }

    /// Row-major iterator over every cell position
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> {
        (0..self.size).cartesian_product(0..self.size)
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Check if the grid has no living cells
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_alive())
    }

    /// Iterate over rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Number of positions whose state differs between two grids of equal size
    pub fn diff_count(&self, other: &Grid) -> usize {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .filter(|(a, b)| a != b)
            .count()
    }
}

/// Renders the grid in the world file format: one row of glyphs per line
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{}", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

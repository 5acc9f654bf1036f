//! Cell states and their on-disk glyphs

use std::fmt;

/// Glyph used for a living cell in world files and on screen
pub const ALIVE_GLYPH: char = '*';

/// Glyph used for a dead cell in world files and on screen
pub const DEAD_GLYPH: char = ' ';

/// State of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    Alive,
    #[default]
    Dead,
}

impl CellState {
    /// Map a raw byte from a world file to a cell state
    pub fn from_glyph(byte: u8) -> Option<Self> {
        match byte as char {
            ALIVE_GLYPH => Some(CellState::Alive),
            DEAD_GLYPH => Some(CellState::Dead),
            _ => None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            CellState::Alive => ALIVE_GLYPH,
            CellState::Dead => DEAD_GLYPH,
        }
    }

    #[inline]
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

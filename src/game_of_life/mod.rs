//! Game of Life core functionality

pub mod cell;
pub mod grid;
pub mod loader;
pub mod rules;
pub mod stepper;

pub use cell::{CellState, ALIVE_GLYPH, DEAD_GLYPH};
pub use grid::{Grid, DEFAULT_WORLD_SIZE};
pub use loader::{load_world_from_file, parse_world, seeded_world, WorldSource};
pub use rules::Rule;
pub use stepper::{step, step_into, WorldBuffers};

//! Game of Life console simulation
//!
//! A fixed-size square world of cells is loaded from a world file or filled
//! at random, then stepped one generation at a time until a generation
//! changes nothing.

pub mod config;
pub mod error;
pub mod game_of_life;
pub mod simulation;
pub mod utils;

pub use config::Settings;
pub use error::{ExitStatus, LoadError};
pub use game_of_life::{CellState, Grid, Rule, WorldSource};
pub use simulation::{Simulation, SimulationReport};

use anyhow::{Context, Result};
use simulation::{Pacer, Renderer};

/// Load the initial world and run it to convergence
pub fn run_simulation<R: Renderer, P: Pacer>(
    settings: &Settings,
    source: &WorldSource,
    renderer: R,
    pacer: P,
) -> Result<SimulationReport> {
    settings.validate().context("Configuration validation failed")?;

    let initial = source
        .load(settings.world.size)
        .context("Failed to load the initial world")?;

    let mut simulation = Simulation::new(initial, settings.simulation.rule, renderer, pacer);
    simulation.run()
}

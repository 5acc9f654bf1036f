//! Driving a world through its generations

pub mod pacing;
pub mod render;
pub mod report;
pub mod runner;

pub use pacing::{FixedDelay, NoDelay, Pacer};
pub use render::{Renderer, TerminalRenderer};
pub use report::SimulationReport;
pub use runner::{Simulation, SimulationState};

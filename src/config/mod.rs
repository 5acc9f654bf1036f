//! Configuration management for the simulation

pub mod settings;

pub use settings::{
    CliOverrides, DisplayConfig, DisplayMode, Settings, SimulationConfig, WorldConfig,
    DEFAULT_DELAY_MS,
};

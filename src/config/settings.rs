//! Configuration settings for the simulation

use crate::game_of_life::{Rule, DEFAULT_WORLD_SIZE};
use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Pause between two generations when nothing else is configured
pub const DEFAULT_DELAY_MS: u64 = 20;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub world: WorldConfig,
    pub simulation: SimulationConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Side length of the square world
    pub size: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub rule: Rule,
    pub delay_ms: u64,
    /// Seed for the random fill; unseeded runs differ every time
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub mode: DisplayMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// Redraw every generation in place at the top of the terminal
    #[default]
    Terminal,
    /// Print generations one after another, suitable for pipes and logs
    Scroll,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_WORLD_SIZE,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rule: Rule::default(),
            delay_ms: DEFAULT_DELAY_MS,
            seed: None,
        }
    }
}

impl SimulationConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.world.size == 0 {
            anyhow::bail!("World size must be positive");
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(seed) = cli_overrides.seed {
            self.simulation.seed = Some(seed);
        }
        if let Some(rule) = cli_overrides.rule {
            self.simulation.rule = rule;
        }
        if cli_overrides.no_delay {
            self.simulation.delay_ms = 0;
        }
        if let Some(mode) = cli_overrides.display_mode {
            self.display.mode = mode;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub seed: Option<u64>,
    pub rule: Option<Rule>,
    pub no_delay: bool,
    pub display_mode: Option<DisplayMode>,
}

//! Summary of a finished simulation run

use crate::game_of_life::Rule;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub rule: Rule,
    pub world_size: usize,
    /// Generation number of the last world drawn
    pub generations: u64,
    /// Number of generation transitions computed
    pub steps: u64,
    pub initial_living_cells: usize,
    pub final_living_cells: usize,
}

impl SimulationReport {
    /// Save the report as pretty-printed JSON
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).context("Failed to serialize report")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, json)
            .with_context(|| format!("Failed to write report to file: {}", path.display()))?;
        Ok(())
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulation Report:")?;
        writeln!(f, "  Rule: {}", self.rule)?;
        writeln!(f, "  World: {}x{}", self.world_size, self.world_size)?;
        writeln!(f, "  Converged at generation {} after {} steps", self.generations, self.steps)?;
        write!(
            f,
            "  Living cells: {} → {}",
            self.initial_living_cells, self.final_living_cells
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn report() -> SimulationReport {
        SimulationReport {
            rule: Rule::Conway,
            world_size: 4,
            generations: 2,
            steps: 1,
            initial_living_cells: 4,
            final_living_cells: 4,
        }
    }

    #[test]
    fn test_report_json_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("reports/run.json");
        report().save_to_file(&path).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["rule"], "conway");
        assert_eq!(json["generations"], 2);
        assert_eq!(json["final_living_cells"], 4);
    }

    #[test]
    fn test_report_display() {
        let text = report().to_string();
        assert!(text.contains("Rule: conway"));
        assert!(text.contains("generation 2 after 1 steps"));
    }
}

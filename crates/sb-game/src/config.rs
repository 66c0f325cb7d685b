//! Configuration for a game session.

use std::path::{Path, PathBuf};

use sb_core::RandomSelector;

use crate::error::GameResult;
use crate::scenario::Scenario;

/// Configuration for a game session.
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    /// RNG seed for reproducible play. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// JSON scenario to load instead of the built-in one.
    pub scenario: Option<PathBuf>,
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load the scenario from a file.
    pub fn with_scenario(mut self, path: impl AsRef<Path>) -> Self {
        self.scenario = Some(path.as_ref().to_path_buf());
        self
    }

    /// Build the selector this configuration asks for.
    pub fn selector(&self) -> RandomSelector {
        match self.seed {
            Some(seed) => RandomSelector::from_seed(seed),
            None => RandomSelector::from_entropy(),
        }
    }

    /// The configured scenario, or the built-in frontier town.
    pub fn load_scenario(&self) -> GameResult<Scenario> {
        match &self.scenario {
            Some(path) => Scenario::load(path),
            None => Ok(Scenario::frontier()),
        }
    }
}

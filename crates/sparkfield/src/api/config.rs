use serde::{Deserialize, Serialize};

/// Configuration for a `SparkManager`, provided by the host.
/// Missing JSON fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SparkConfig {
    /// Seed for every random draw (property randomization, swade drift).
    pub seed: u64,
    /// Pre-allocated capacity of the live spark collection (default: 256).
    pub initial_capacity: usize,
}

impl Default for SparkConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            initial_capacity: 256,
        }
    }
}

impl SparkConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse solver configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("The move ceiling must be at least one")]
    ZeroMoveCeiling,
}

/// Solver settings, loadable from TOML. Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    /// Upper bound on the length of one solution.
    pub move_ceiling: usize,
    /// Re-check every completed stage after each played sequence.
    pub check_invariants: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            move_ceiling: 1000,
            check_invariants: true,
        }
    }
}

impl SolverConfig {
    /// # Errors
    ///
    /// Fails on malformed TOML, unknown keys, or a zero move ceiling.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let config = toml::from_str::<Self>(toml)?;
        if config.move_ceiling == 0 {
            return Err(ConfigError::ZeroMoveCeiling);
        }
        Ok(config)
    }
}

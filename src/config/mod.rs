//! Configuration module
//!
//! Tuning values for the randomizers, parsed from TOML strings and
//! validated before use. Nothing here touches the filesystem; callers hand
//! in the configuration text.

pub mod toml;
pub mod validator;

use crate::scatter::DEFAULT_MAX_TRIES;
use crate::source::uniform::UniformIndex;
use serde::{Deserialize, Serialize};

/// Randomizer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScatterConfig {
    /// Consecutive rejected candidates tolerated by the context-preserving
    /// scatter before it gives up
    #[serde(default = "default_max_tries")]
    pub max_tries: usize,
    /// Fixed seed for reproducible runs (entropy seeded when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_max_tries() -> usize {
    DEFAULT_MAX_TRIES
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            max_tries: default_max_tries(),
            seed: None,
        }
    }
}

impl ScatterConfig {
    /// Build the index source described by this configuration
    pub fn index_source(&self) -> UniformIndex {
        match self.seed {
            Some(seed) => UniformIndex::with_seed(seed),
            None => UniformIndex::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::IndexSource;

    #[test]
    fn test_default_config() {
        let config = ScatterConfig::default();
        assert_eq!(config.max_tries, 1000);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_seeded_index_source() {
        let config = ScatterConfig {
            seed: Some(17),
            ..Default::default()
        };
        let mut a = config.index_source();
        let mut b = config.index_source();
        for _ in 0..10 {
            assert_eq!(a.next_index(1000), b.next_index(1000));
        }
    }
}

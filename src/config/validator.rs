//! Configuration validation

use super::*;
use anyhow::Result;

/// Validate complete configuration
pub fn validate_config(config: &ScatterConfig) -> Result<()> {
    // A zero ceiling would fail every placement before the first draw
    if config.max_tries == 0 {
        anyhow::bail!("max_tries must be at least 1, got {}", config.max_tries);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default() {
        assert!(validate_config(&ScatterConfig::default()).is_ok());
    }

    #[test]
    fn test_validate_zero_tries() {
        let config = ScatterConfig {
            max_tries: 0,
            seed: None,
        };
        assert!(validate_config(&config).is_err());
    }
}

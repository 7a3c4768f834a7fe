//! TOML configuration parsing

use super::*;
use anyhow::{Context, Result};

/// Parse TOML configuration from string
///
/// Missing keys take their defaults. The result is validated before it is
/// returned.
pub fn parse_toml_string(contents: &str) -> Result<ScatterConfig> {
    let config: ScatterConfig = ::toml::from_str(contents)
        .context("Failed to parse TOML configuration")?;

    validator::validate_config(&config)
        .context("Invalid configuration")?;

    Ok(config)
}

/// Render a configuration back to TOML
pub fn to_toml_string(config: &ScatterConfig) -> Result<String> {
    ::toml::to_string(config).context("Failed to serialize configuration")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full() {
        let config = parse_toml_string("max_tries = 250\nseed = 42\n").unwrap();
        assert_eq!(config.max_tries, 250);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_parse_empty_uses_defaults() {
        let config = parse_toml_string("").unwrap();
        assert_eq!(config, ScatterConfig::default());
    }

    #[test]
    fn test_parse_rejects_zero_tries() {
        let err = parse_toml_string("max_tries = 0").unwrap_err();
        assert!(format!("{:#}", err).contains("max_tries"));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_toml_string("max_tries = \"many\"").is_err());
    }

    #[test]
    fn test_roundtrip_seeded() {
        let config = ScatterConfig {
            max_tries: 64,
            seed: Some(9),
        };
        let text = to_toml_string(&config).unwrap();
        assert_eq!(parse_toml_string(&text).unwrap(), config);
    }
}

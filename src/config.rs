use agenda_registry::RegistryConfig;
use thiserror::Error;

/// Registry sizing, loaded from environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub registry: RegistryConfig,
}

impl Config {
    /// Load configuration from environment variables.
    /// AGENDA_REGISTRY_CAPACITY defaults to 0, AGENDA_REGISTRY_SHARDS to the map's own default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let capacity = match lookup("AGENDA_REGISTRY_CAPACITY") {
            Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
                ConfigError::Invalid("AGENDA_REGISTRY_CAPACITY", "must be a non-negative integer")
            })?,
            None => 0,
        };

        let shards = match lookup("AGENDA_REGISTRY_SHARDS") {
            Some(raw) => {
                let shards = raw.trim().parse::<usize>().map_err(|_| {
                    ConfigError::Invalid("AGENDA_REGISTRY_SHARDS", "must be a positive integer")
                })?;
                if shards < 2 || !shards.is_power_of_two() {
                    return Err(ConfigError::Invalid(
                        "AGENDA_REGISTRY_SHARDS",
                        "must be a power of two greater than 1",
                    ));
                }
                Some(shards)
            }
            None => None,
        };

        Ok(Config {
            registry: RegistryConfig { capacity, shards },
        })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, &'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_explicit_values() {
        let config = load(&[
            ("AGENDA_REGISTRY_CAPACITY", "128"),
            ("AGENDA_REGISTRY_SHARDS", "16"),
        ])
        .unwrap();

        assert_eq!(config.registry.capacity, 128);
        assert_eq!(config.registry.shards, Some(16));
    }

    #[test]
    fn test_invalid_capacity() {
        assert_eq!(
            load(&[("AGENDA_REGISTRY_CAPACITY", "lots")]),
            Err(ConfigError::Invalid(
                "AGENDA_REGISTRY_CAPACITY",
                "must be a non-negative integer"
            ))
        );
    }

    #[test]
    fn test_invalid_shards() {
        assert!(load(&[("AGENDA_REGISTRY_SHARDS", "12")]).is_err());
        assert!(load(&[("AGENDA_REGISTRY_SHARDS", "1")]).is_err());
        assert!(load(&[("AGENDA_REGISTRY_SHARDS", "-4")]).is_err());
    }

    #[test]
    fn test_error_message() {
        let err = load(&[("AGENDA_REGISTRY_SHARDS", "3")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value for AGENDA_REGISTRY_SHARDS: must be a power of two greater than 1"
        );
    }
}

//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use crate::application::errors::ConfigError;
use crate::application::services::RemovalPolicy;

/// Manager configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    pub manager: ManagerConfig,
    pub registry: RegistryConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ManagerConfig {
    pub name: String,
    pub prompt: String,
    pub greeting: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct RegistryConfig {
    pub removal_policy: RemovalPolicy,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct LoggingConfig {
    /// Default filter directive; RUST_LOG takes precedence
    pub level: String,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            name: "Virtual Classroom Manager".to_string(),
            prompt: "> ".to_string(),
            greeting: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self)
            .map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Defaults with environment overrides applied
    pub fn load_env() -> Result<Self, ConfigError> {
        let mut config = Config::default();
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply `CLASSROOM_*` overrides read through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(prompt) = lookup("CLASSROOM_PROMPT") {
            self.manager.prompt = prompt;
        }

        if let Some(level) = lookup("CLASSROOM_LOG_LEVEL") {
            self.logging.level = level;
        }

        if let Some(policy) = lookup("CLASSROOM_REMOVAL_POLICY") {
            self.registry.removal_policy = match policy.trim() {
                "cascade" => RemovalPolicy::Cascade,
                "retain" => RemovalPolicy::Retain,
                other => {
                    return Err(ConfigError::InvalidValue(format!(
                        "CLASSROOM_REMOVAL_POLICY must be cascade or retain, got {}",
                        other
                    )))
                }
            };
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = Config::from_yaml("registry:\n  removal-policy: retain\n").unwrap();
        assert_eq!(config.registry.removal_policy, RemovalPolicy::Retain);
        assert_eq!(config.manager, ManagerConfig::default());
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_default_round_trips_through_yaml() {
        let yaml = Config::default().to_yaml().unwrap();
        assert!(yaml.contains("removal-policy: cascade"));
        assert_eq!(Config::from_yaml(&yaml).unwrap(), Config::default());
    }

    #[test]
    fn test_render_and_parse_errors_are_distinct() {
        let render = ConfigError::Serialize("bad key".to_string());
        assert_eq!(render.to_string(), "Failed to render config: bad key");

        let parse = Config::from_yaml("manager: 3\n").unwrap_err();
        assert!(parse.to_string().starts_with("Failed to parse config: "));
    }

    #[test]
    fn test_invalid_policy_is_a_parse_error() {
        let err = Config::from_yaml("registry:\n  removal-policy: sometimes\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("CLASSROOM_PROMPT", "classroom> "),
            ("CLASSROOM_REMOVAL_POLICY", "retain"),
        ]);
        let mut config = Config::default();
        config.apply_env(|key| env.get(key).map(|v| v.to_string())).unwrap();

        assert_eq!(config.manager.prompt, "classroom> ");
        assert_eq!(config.registry.removal_policy, RemovalPolicy::Retain);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_env_rejects_unknown_policy() {
        let mut config = Config::default();
        let result = config.apply_env(|key| (key == "CLASSROOM_REMOVAL_POLICY").then(|| "never".to_string()));
        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
    }
}

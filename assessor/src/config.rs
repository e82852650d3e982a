//! Configuration for the assessment service.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AssessorError, Result};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessorConfig {
    /// Submission handling
    pub service: ServiceConfig,
    /// Record store settings
    pub store: StoreConfig,
    /// General settings
    pub general: GeneralConfig,
}

impl AssessorConfig {
    /// Load config from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Load config from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| AssessorError::Config(format!("{}: {e}", path.display())))?;
        Self::from_yaml(&yaml)
    }

    /// Builder: cap the number of stored records.
    pub fn with_max_records(mut self, max_records: usize) -> Self {
        self.store.max_records = Some(max_records);
        self
    }
}

/// Submission handling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Used when a submission omits the organization name
    pub default_organization_name: String,
    /// Log every submission at info level
    pub audit_enabled: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            default_organization_name: "Anonymous".to_string(),
            audit_enabled: true,
        }
    }
}

/// Record store settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Maximum records held; `None` is unbounded. Full stores reject, never evict.
    pub max_records: Option<usize>,
}

/// General settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level
    pub log_level: String,
}

impl GeneralConfig {
    /// The configured level, parsed.
    pub fn level(&self) -> Result<tracing::Level> {
        self.log_level
            .parse()
            .map_err(|_| AssessorError::Config(format!("invalid log level: {}", self.log_level)))
    }

    /// Default filter directive for this workspace's crates at the configured level.
    pub fn log_directive(&self) -> Result<String> {
        let level = self.level()?.as_str().to_ascii_lowercase();
        Ok(["rmf_assessor", "rmf_scoring", "rmf_taxonomy"]
            .iter()
            .map(|target| format!("{target}={level}"))
            .collect::<Vec<_>>()
            .join(","))
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AssessorConfig::default();
        assert_eq!(config.service.default_organization_name, "Anonymous");
        assert!(config.service.audit_enabled);
        assert_eq!(config.store.max_records, None);
        assert_eq!(config.general.log_level, "info");
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = AssessorConfig::default().with_max_records(500);
        let yaml = config.to_yaml().unwrap();
        let parsed = AssessorConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config = AssessorConfig::from_yaml("store:\n  max_records: 10\n").unwrap();
        assert_eq!(config.store.max_records, Some(10));
        assert_eq!(config.service.default_organization_name, "Anonymous");
    }

    #[test]
    fn test_log_directive_from_level() {
        let config = AssessorConfig::from_yaml("general:\n  log_level: DEBUG\n").unwrap();
        assert_eq!(config.general.level().unwrap(), tracing::Level::DEBUG);
        assert_eq!(
            config.general.log_directive().unwrap(),
            "rmf_assessor=debug,rmf_scoring=debug,rmf_taxonomy=debug"
        );
    }

    #[test]
    fn test_invalid_log_level() {
        let config = AssessorConfig::from_yaml("general:\n  log_level: loud\n").unwrap();
        assert!(matches!(config.general.log_directive(), Err(AssessorError::Config(_))));
    }

    #[test]
    fn test_invalid_yaml_is_config_error() {
        let err = AssessorConfig::from_yaml("store: [not, a, map]").unwrap_err();
        assert!(matches!(err, AssessorError::Config(_)));
    }
}

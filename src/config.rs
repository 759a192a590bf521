use crate::strategy::{Offer, Provider};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Config must list at least one provider")]
    NoProviders,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settings for the strategy demo. Every field falls back to the
/// built-in scenario when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub log_level: String,
    pub output: OutputFormat,
    pub offer: Offer,
    pub providers: Vec<Provider>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            output: OutputFormat::Text,
            offer: Offer::default(),
            providers: Provider::ALL.to_vec(),
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = toml::from_str(content)?;
        if config.providers.is_empty() {
            return Err(ConfigError::NoProviders);
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = DemoConfig::from_toml_str("").unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.providers, Provider::ALL.to_vec());
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn test_full_config() {
        let content = r#"
log_level = "debug"
output = "json"
providers = ["winsim", "telekom"]

[offer]
tariff = "Basic"
calls = "100 min"
speed = "low"
"#;
        let config = DemoConfig::from_toml_str(content).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.providers, vec![Provider::WinSim, Provider::Telekom]);
        assert_eq!(config.offer, Offer::new("Basic", "100 min", "low"));
    }

    #[test]
    fn test_partial_offer_is_rejected() {
        let content = r#"
[offer]
tariff = "Basic"
"#;
        assert!(matches!(
            DemoConfig::from_toml_str(content),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_unknown_provider_is_parse_error() {
        let err = DemoConfig::from_toml_str(r#"providers = ["vodafone"]"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_provider_names_are_case_insensitive() {
        let config = DemoConfig::from_toml_str(r#"providers = ["Telekom", "O2", " WINSIM "]"#).unwrap();
        assert_eq!(
            config.providers,
            vec![Provider::Telekom, Provider::OTwo, Provider::WinSim]
        );
        for name in ["Telekom", "O2", " WINSIM "] {
            assert!(config.providers.contains(&name.parse::<Provider>().unwrap()));
        }
    }

    #[test]
    fn test_unknown_provider_message_names_it() {
        let err = DemoConfig::from_toml_str(r#"providers = ["Vodafone"]"#).unwrap_err();
        assert!(err.to_string().contains("Unknown provider 'Vodafone'"));
    }

    #[test]
    fn test_empty_providers_rejected() {
        let err = DemoConfig::from_toml_str("providers = []").unwrap_err();
        assert!(matches!(err, ConfigError::NoProviders));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "providers = [\"o2\"]").unwrap();

        let config = DemoConfig::load(file.path()).unwrap();
        assert_eq!(config.providers, vec![Provider::OTwo]);
        assert_eq!(config.offer, Offer::default());
    }

    #[test]
    fn test_load_missing_file() {
        let err = DemoConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }
}

//! Loading country configurations from disk.

use std::io;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::ConfigError;
use crate::model::CountryConfiguration;

use super::transport::parse_configuration;

/// Resolves a country code to its parsed form configuration.
///
/// This is the seam between the domain and however configurations are
/// actually stored (a directory of YAML files here; a network source or
/// embedded documents would implement the same contract).
#[async_trait]
pub trait ConfigurationLoader: Send + Sync {
    async fn load(&self, country_code: &str) -> Result<CountryConfiguration, ConfigError>;
}

/// Loads `<base_dir>/<code>.yaml`, keyed by lower-cased country code.
pub struct YamlConfigurationLoader {
    base_dir: PathBuf,
}

impl YamlConfigurationLoader {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }
}

#[async_trait]
impl ConfigurationLoader for YamlConfigurationLoader {
    async fn load(&self, country_code: &str) -> Result<CountryConfiguration, ConfigError> {
        let name = format!("{}.yaml", country_code.to_lowercase());
        let path = self.base_dir.join(&name);

        let text = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| match source.kind() {
                io::ErrorKind::NotFound => ConfigError::FileNotFound { name: name.clone() },
                _ => ConfigError::Decode {
                    name: name.clone(),
                    source: source.into(),
                },
            })?;

        let config = parse_configuration(&text, &name)?;
        tracing::info!(
            country = %config.country,
            fields = config.fields.len(),
            "loaded form configuration from {}",
            name
        );
        Ok(config)
    }
}

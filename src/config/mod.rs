//! Configuration documents: transport format, mapping, and loading.

mod loader;
mod transport;

pub use loader::{ConfigurationLoader, YamlConfigurationLoader};
pub use transport::parse_configuration;

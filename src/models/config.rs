use serde::Deserialize;

/// Location of the settings file used when none is given.
pub const DEFAULT_CONFIG_PATH: &str = "config/settings.yaml";

/// Configuration options for the catalog importer.
///
/// Values come from an optional YAML file, overridden by `APP_`-prefixed
/// environment variables (for example `APP_LOG_LEVEL=debug`).
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Default `env_logger` filter when `RUST_LOG` is not set.
    pub log_level: String,
    /// Pretty-print the JSON report.
    pub pretty: bool,
}

impl CatalogConfig {
    pub fn load(path: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .set_default("log_level", "info")?
            .set_default("pretty", true)?
            .add_source(config::File::new(path, config::FileFormat::Yaml).required(false))
            .add_source(config::Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }
}

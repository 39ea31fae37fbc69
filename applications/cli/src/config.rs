//! CLI configuration
use crate::error::{CliError, Result};
use roster_client::ClientConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "roster.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RosterConfig {
    #[serde(default = "default_api")]
    pub api: ApiSettings,

    #[serde(default = "default_container")]
    pub container: ContainerSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContainerSettings {
    #[serde(default = "default_container_id")]
    pub id: String,
}

impl RosterConfig {
    /// Load configuration from file and environment.
    ///
    /// An explicit `path` must exist. Without one, `roster.toml` in the
    /// working directory is used if present. Environment variables prefixed
    /// with `ROSTER_` override file values, with `__` separating sections
    /// (e.g. `ROSTER_API__BASE_URL`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                settings = settings.add_source(config::File::from(path));
            }
            None => {
                let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("ROSTER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        Ok(settings.build()?.try_deserialize()?)
    }

    /// Load configuration from a single file, ignoring the environment.
    pub fn from_file(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(CliError::Config(
                "API base URL is required (set ROSTER_API__BASE_URL)".to_string(),
            ));
        }

        if self.api.timeout_secs == 0 || self.api.connect_timeout_secs == 0 {
            return Err(CliError::Config(
                "Timeouts must be at least one second".to_string(),
            ));
        }

        if self.container.id.trim().is_empty() {
            return Err(CliError::Config("Container id cannot be empty".to_string()));
        }

        Ok(())
    }

    /// Client configuration derived from the `[api]` section
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.api.base_url.clone()).with_timeouts(
            Duration::from_secs(self.api.timeout_secs),
            Duration::from_secs(self.api.connect_timeout_secs),
        )
    }
}

// Default values
fn default_api() -> ApiSettings {
    ApiSettings {
        base_url: default_base_url(),
        timeout_secs: default_timeout_secs(),
        connect_timeout_secs: default_connect_timeout_secs(),
    }
}

fn default_base_url() -> String {
    roster_client::DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_container() -> ContainerSettings {
    ContainerSettings {
        id: default_container_id(),
    }
}

fn default_container_id() -> String {
    roster_core::DEFAULT_CONTAINER_ID.to_string()
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            api: default_api(),
            container: default_container(),
        }
    }
}

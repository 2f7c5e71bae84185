use crate::remote::{Platform, StubRemoteApi};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub remote: RemoteConfig,
    pub platform: Platform,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_dir: String,
}

/// Simulated latency of the stubbed network calls, in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    pub content_check_delay_ms: u64,
    pub admin_check_delay_ms: u64,
    pub user_sync_delay_ms: u64,
    pub publish_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            remote: RemoteConfig::default(),
            platform: Platform::Ios,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: ".celesta-data".to_string(),
        }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            content_check_delay_ms: 1000,
            admin_check_delay_ms: 1000,
            user_sync_delay_ms: 0,
            publish_delay_ms: 1500,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and config file
    pub fn load() -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        // Add default configuration
        config = config.add_source(config::Config::try_from(&AppConfig::default())?);

        // Add config file if it exists
        config = config.add_source(config::File::with_name("config").required(false));

        // Add environment variables with prefix "CELESTA_"
        config = config.add_source(
            config::Environment::with_prefix("CELESTA")
                .separator("_")
                .prefix_separator("_"),
        );

        let config = config.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        Ok(app_config)
    }

    /// Stub remote seam wired with the configured delays.
    pub fn stub_remote(&self) -> StubRemoteApi {
        StubRemoteApi {
            content_check_delay: Duration::from_millis(self.remote.content_check_delay_ms),
            admin_check_delay: Duration::from_millis(self.remote.admin_check_delay_ms),
            user_sync_delay: Duration::from_millis(self.remote.user_sync_delay_ms),
            publish_delay: Duration::from_millis(self.remote.publish_delay_ms),
        }
    }
}

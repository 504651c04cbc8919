// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShazamConfig {
    /// RapidAPI key. Requests are sent unauthenticated when absent, which the
    /// live API rejects; mock servers in tests do not need one.
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout_secs: u64,
    /// Total attempts per request when rate limited.
    pub max_retries: u32,
    /// Fallback backoff delay when the API sends no `Retry-After` hint.
    pub base_delay_ms: u64,
}

impl Default for ShazamConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: crate::client::SHAZAM_API_BASE.to_string(),
            timeout_secs: 30,
            max_retries: 5,
            base_delay_ms: 1000,
        }
    }
}

/// Load configuration from defaults, optional TOML file, and environment overrides (prefix: SHAZAMCORE_).
pub fn load(config_path: Option<&Path>) -> Result<ShazamConfig> {
    let mut figment = Figment::from(Serialized::defaults(ShazamConfig::default()));

    if let Some(path) = config_path {
        figment = figment.merge(Toml::file(path));
    }

    figment = figment.merge(Env::prefixed("SHAZAMCORE_"));

    let config: ShazamConfig = figment.extract()?;
    info!(target: "config", "configuration loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShazamConfig::default();

        assert!(config.api_key.is_none());
        assert_eq!(config.base_url, "https://shazam-core.p.rapidapi.com");
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.base_delay_ms, 1000);
    }

    #[test]
    fn test_env_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("SHAZAMCORE_API_KEY", "jail-key");
            jail.set_env("SHAZAMCORE_MAX_RETRIES", "3");

            let config = load(None).map_err(|e| figment::Error::from(e.to_string()))?;
            assert_eq!(config.api_key.as_deref(), Some("jail-key"));
            assert_eq!(config.max_retries, 3);
            assert_eq!(config.timeout_secs, 30);
            Ok(())
        });
    }

    #[test]
    fn test_toml_file_merged_under_env() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "shazamcore.toml",
                r#"
                    base_delay_ms = 500
                    max_retries = 2
                "#,
            )?;
            jail.set_env("SHAZAMCORE_MAX_RETRIES", "4");

            let config = load(Some(Path::new("shazamcore.toml")))
                .map_err(|e| figment::Error::from(e.to_string()))?;
            assert_eq!(config.base_delay_ms, 500);
            assert_eq!(config.max_retries, 4);
            Ok(())
        });
    }
}

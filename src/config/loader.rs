use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use crate::provider::{ProviderAdapter, ProviderConfig, ProviderKind, ProviderOverride};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PollingConfig {
    pub interval_ms: u64,
    pub timeout_secs: u64,
    pub tail_lines: Option<usize>,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval_ms: 1000,
            timeout_secs: 600,
            tail_lines: None,
        }
    }
}

impl PollingConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_provider: ProviderKind,
    pub default_profile: String,
    pub polling: PollingConfig,
    pub providers: HashMap<ProviderKind, ProviderOverride>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_provider: ProviderKind::CopilotCli,
            default_profile: "developer".to_string(),
            polling: PollingConfig::default(),
            providers: HashMap::new(),
        }
    }
}

impl Config {
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let path = config_path.unwrap_or_else(Self::default_config_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn default_config_path() -> PathBuf {
        if let Some(config_path) = std::env::var_os("PANELENS_CONFIG") {
            PathBuf::from(config_path)
        } else {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("panelens")
                .join("config.yaml")
        }
    }

    /// Built-in literals for `kind` with any configured overrides applied.
    pub fn provider_config(&self, kind: ProviderKind) -> ProviderConfig {
        let base = kind.default_config();
        match self.providers.get(&kind) {
            Some(over) => base.with_override(over),
            None => base,
        }
    }

    pub fn adapter(
        &self,
        kind: Option<ProviderKind>,
        profile: Option<&str>,
    ) -> Result<ProviderAdapter> {
        let kind = kind.unwrap_or(self.default_provider);
        let profile = profile.unwrap_or(&self.default_profile);
        ProviderAdapter::new(self.provider_config(kind), profile)
            .with_context(|| format!("Invalid pattern configuration for {}", kind))
    }
}

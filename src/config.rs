use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::Level;

use crate::chat::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use crate::controller::PlatformRules;
use crate::error::DashboardError;
use crate::filter::SearchScope;
use crate::forms::ColorPolicy;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub data_dir: PathBuf,
    pub log_level: String,
    /// Platforms reset to the seed on every start unless this is set.
    pub persist_platforms: bool,
    /// json5 file replacing the built-in platform seed.
    pub seed_file: Option<PathBuf>,
    pub search_scope: SearchScope,
    pub validation: PlatformRules,
    pub forms: FormsConfig,
    pub chat: ChatConfig,
    pub auth: AuthConfig
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct FormsConfig {
    pub fixed_color: Option<String>
}

impl FormsConfig {
    pub fn color_policy(&self) -> ColorPolicy {
        ColorPolicy::from_fixed(self.fixed_color.as_deref())
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ChatConfig {
    pub endpoint: String,
    pub model: String,
    pub api_key_env: String
}

impl Default for ChatConfig {
    fn default() -> Self {
        ChatConfig {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key_env: "OPENAI_API_KEY".to_string()
        }
    }
}

impl ChatConfig {
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env).ok()
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AuthConfig {
    pub enabled: bool,
    pub token_env: String
}

impl Default for AuthConfig {
    fn default() -> Self {
        AuthConfig {
            enabled: false,
            token_env: "DASHBOARD_TOKEN".to_string()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from(".dashboard"),
            log_level: "info".to_string(),
            persist_platforms: false,
            seed_file: None,
            search_scope: SearchScope::default(),
            validation: PlatformRules::default(),
            forms: FormsConfig::default(),
            chat: ChatConfig::default(),
            auth: AuthConfig::default()
        }
    }
}

impl Config {
    pub fn parse(content: &str) -> Result<Config, DashboardError> {
        Ok(toml::from_str(content)?)
    }

    pub fn level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }
}

/// Reads the config file, using defaults when it does not exist.
pub async fn load_config(path: Option<&Path>) -> Result<Config, DashboardError> {
    let path = path.unwrap_or(Path::new(DEFAULT_CONFIG_PATH));

    if !tokio::fs::try_exists(path).await? {
        return Ok(Config::default());
    }

    let config_content = tokio::fs::read_to_string(path).await
        .map_err(|err| DashboardError::config(format!("Failed to read {}: {}", path.display(), err)))?;

    Config::parse(config_content.as_str())
}

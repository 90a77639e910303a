use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3000";
pub const DEFAULT_LIST_LIMIT: u32 = 100;

/// Backend connection settings. The token is passed in explicitly and sent
/// as a bearer `Authorization` header.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub request_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: DEFAULT_BACKEND_URL.to_string(),
            token: None,
            request_timeout_secs: 30,
        }
    }
}

impl ApiConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Prefix for image references; empty keeps the site-relative `/{image}` path.
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub assets: AssetConfig,
    /// `limit` used for the admin list fetches.
    pub list_limit: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            api: ApiConfig::default(),
            assets: AssetConfig::default(),
            list_limit: DEFAULT_LIST_LIMIT,
        }
    }
}

impl AppConfig {
    /// Reads `config.toml` when present, then applies environment overrides.
    pub fn load(path: &Path) -> Result<AppConfig> {
        let mut config = if path.exists() {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            AppConfig::from_toml(&text)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        } else {
            AppConfig::default()
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<AppConfig> {
        toml::from_str(text).map_err(|err| anyhow!(err))
    }

    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("BACKEND_URL").filter(|v| !v.trim().is_empty()) {
            self.api.base_url = url;
        }
        if let Some(token) = lookup("STOREFRONT_TOKEN").filter(|v| !v.trim().is_empty()) {
            self.api.token = Some(token);
        }
        if let Some(assets) = lookup("STOREFRONT_ASSETS_URL") {
            self.assets.base_url = assets;
        }
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "storefront", "storefront-admin")
        .ok_or_else(|| anyhow!("unable to resolve config directory"))
}

pub fn default_config_path() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join("config.toml"))
}

pub fn default_webview_data_dir() -> Result<PathBuf> {
    let webview_data_dir = project_dirs()?.data_local_dir().join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

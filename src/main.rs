use tracing::{error, info, warn};

mod app;
mod config;
mod domain;
mod infra;
mod logging;
mod ui;
mod usecase;

#[cfg(test)]
mod tests;

use crate::app::{App, AppServices};
use crate::config::{default_config_path, default_webview_data_dir, AppConfig};
use crate::logging::LoggingConfig;

fn load_config() -> AppConfig {
    let loaded = default_config_path().and_then(|path| {
        info!(path = %path.display(), "loading config");
        AppConfig::load(&path)
    });
    match loaded {
        Ok(config) => config,
        Err(err) => {
            warn!(error = %format!("{err:#}"), "using default config");
            let mut config = AppConfig::default();
            config.apply_env(|key| std::env::var(key).ok());
            config
        }
    }
}

fn main() {
    if let Err(err) = logging::init(LoggingConfig::default()) {
        eprintln!("{err:#}");
    }

    let config = load_config();
    let services = match AppServices::from_config(&config) {
        Ok(services) => services,
        Err(err) => {
            error!(base_url = %config.api.base_url, error = %err, "cannot reach backend configuration");
            std::process::exit(1);
        }
    };
    info!(base_url = %config.api.base_url, list_limit = config.list_limit, "starting storefront admin");

    let mut desktop = dioxus::desktop::Config::new()
        .with_window(dioxus::desktop::WindowBuilder::new().with_title("Storefront Admin"));
    match default_webview_data_dir() {
        Ok(dir) => desktop = desktop.with_data_directory(dir),
        Err(err) => warn!(error = %format!("{err:#}"), "using default webview data directory"),
    }

    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop)
        .with_context(services)
        .launch(App);
}

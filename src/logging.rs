use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Used when `RUST_LOG` is unset.
    pub default_filter: String,
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            default_filter: if cfg!(debug_assertions) {
                "info,storefront_admin=debug".to_string()
            } else {
                "warn,storefront_admin=info".to_string()
            },
            include_location: cfg!(debug_assertions),
        }
    }
}

/// Installs the console subscriber. `RUST_LOG` takes precedence over the default filter.
pub fn init(config: LoggingConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_file(config.include_location)
        .with_line_number(config.include_location)
        .with_filter(env_filter);

    tracing_subscriber::registry()
        .with(console_layer)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install logger: {err}"))?;

    tracing::debug!(filter = %config.default_filter, "logging initialized");
    Ok(())
}

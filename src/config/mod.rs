// Configuration module entry point
// Manages application configuration and immutable runtime state

mod state;
mod types;

use std::net::SocketAddr;

use crate::error::StartupError;

// Re-export public types
pub use state::AppState;
pub use types::{Config, LoggingConfig, PerformanceConfig, ServerConfig, SiteConfig};

impl Config {
    /// Load configuration from the default file ("shopfront.toml" if present)
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("shopfront")
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// The file is optional; every key has a default, so the server runs
    /// with no configuration present. `SHOPFRONT_*` environment variables
    /// override file values.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("SHOPFRONT"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("site.templates_dir", "views")?
            .set_default("site.public_dir", "public")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, StartupError> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse().map_err(|e| StartupError::Address {
            addr,
            reason: format!("{e}"),
        })
    }
}

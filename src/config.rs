//! Configuration module
//!
//! Loads settings from an optional `config.toml` layered over built-in
//! defaults. The defaults reproduce the server's stock behavior: port
//! 8000, `public/` document root, 30 second request deadline.

use serde::Deserialize;
use std::net::SocketAddr;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub resources: ResourcesConfig,
    pub http: HttpConfig,
    pub logging: LoggingConfig,
}

/// Listener configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Tokio worker threads; defaults to the CPU core count when unset
    pub workers: Option<usize>,
}

/// Filesystem layout the server reads from
#[derive(Debug, Deserialize, Clone)]
pub struct ResourcesConfig {
    /// Document root for static files
    pub public_dir: String,
    /// Page served verbatim for `/`, relative to `public_dir`
    pub index_page: String,
    /// Template rendered by the information handler
    pub information_template: String,
}

/// HTTP behavior configuration
#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    /// Per-request deadline in seconds; 408 once exceeded
    pub request_timeout: u64,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
}

impl Config {
    /// Load configuration from the default `config.toml` location.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from specified file path (without extension).
    /// The file is optional; defaults cover every setting.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("resources.public_dir", "public")?
            .set_default("resources.index_page", "index.html")?
            .set_default(
                "resources.information_template",
                "templates/information.html",
            )?
            .set_default("http.request_timeout", 30)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_reproduce_stock_behavior() {
        let cfg = Config::load_from("nonexistent-config").unwrap();
        assert_eq!(cfg.server.port, 8000);
        assert_eq!(cfg.resources.public_dir, "public");
        assert_eq!(cfg.resources.index_page, "index.html");
        assert_eq!(
            cfg.resources.information_template,
            "templates/information.html"
        );
        assert_eq!(cfg.http.request_timeout, 30);
        assert!(cfg.logging.access_log);
        assert!(cfg.server.workers.is_none());
    }

    #[test]
    fn test_socket_addr_from_defaults() {
        let cfg = Config::load_from("nonexistent-config").unwrap();
        let addr = cfg.get_socket_addr().unwrap();
        assert_eq!(addr.port(), 8000);
    }
}

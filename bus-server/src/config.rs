//! Server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Default spreadsheet location, relative to the working directory.
const DEFAULT_DATA_PATH: &str = "bus_data.xlsx";

/// Default static asset directory.
const DEFAULT_STATIC_DIR: &str = "static";

/// Errors in configuration values.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The bind address did not parse
    #[error("invalid bind address {value:?}: {source}")]
    BindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Configuration for the bus route server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Path to the route spreadsheet.
    pub data_path: PathBuf,
    /// Address to listen on.
    pub bind_addr: SocketAddr,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
    /// Enables debug-level logging when `RUST_LOG` is unset.
    pub debug: bool,
}

impl ServerConfig {
    /// Read configuration from `BUS_DATA_PATH`, `BUS_BIND_ADDR`,
    /// `BUS_STATIC_DIR` and `BUS_DEBUG`, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = lookup("BUS_DATA_PATH") {
            config = config.with_data_path(path);
        }
        if let Some(addr) = lookup("BUS_BIND_ADDR") {
            let bind_addr = addr.parse().map_err(|source| ConfigError::BindAddr {
                value: addr.clone(),
                source,
            })?;
            config = config.with_bind_addr(bind_addr);
        }
        if let Some(dir) = lookup("BUS_STATIC_DIR") {
            config = config.with_static_dir(dir);
        }
        if let Some(flag) = lookup("BUS_DEBUG") {
            config = config.with_debug(parse_flag(&flag));
        }

        Ok(config)
    }

    /// Set the spreadsheet path.
    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }

    /// Set the listen address.
    pub fn with_bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = addr;
        self
    }

    /// Set the static asset directory.
    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = dir.into();
        self
    }

    /// Enable or disable debug logging.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Default log filter directive when `RUST_LOG` is unset.
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug { "debug" } else { "info" }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            debug: false,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

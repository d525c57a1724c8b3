//! Server configuration.
//!
//! # Config File Locations
//!
//! Files are loaded in order (later wins):
//! 1. `/etc/fakepy-mcp/config.toml` (system)
//! 2. `~/.config/fakepy-mcp/config.toml` (user)
//! 3. `./fakepy-mcp.toml` (local override), or the `--config` path
//! 4. Environment variables (`FAKEPY_MCP_*`, `RUST_LOG`,
//!    `OTEL_EXPORTER_OTLP_ENDPOINT`)
//!
//! Command-line flags are applied last by the binary.
//!
//! # Example Config
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 8005
//! session_idle_secs = 300
//!
//! [files]
//! root = "~/.cache/fakepy-mcp"
//!
//! [telemetry]
//! log_level = "info,fakepy_mcp=debug"
//! otlp_endpoint = "127.0.0.1:4317"
//! ```

pub mod loader;

pub use loader::{discover_config_files_with_override, expand_path, ConfigSources};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Where the server listens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Default: 0.0.0.0
    #[serde(default = "ServerConfig::default_host")]
    pub host: String,

    /// Default: 8005
    #[serde(default = "ServerConfig::default_port")]
    pub port: u16,

    /// Idle sessions are dropped after this many seconds.
    /// Default: 300
    #[serde(default = "ServerConfig::default_session_idle_secs")]
    pub session_idle_secs: u64,
}

impl ServerConfig {
    fn default_host() -> String {
        "0.0.0.0".to_string()
    }

    fn default_port() -> u16 {
        8005
    }

    fn default_session_idle_secs() -> u64 {
        300
    }

    pub fn session_idle(&self) -> Duration {
        Duration::from_secs(self.session_idle_secs)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            session_idle_secs: Self::default_session_idle_secs(),
        }
    }
}

/// Where `*_file` tools write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilesConfig {
    /// Default: `<tmp>/fakepy-mcp`
    #[serde(default = "FilesConfig::default_root")]
    pub root: PathBuf,
}

impl FilesConfig {
    fn default_root() -> PathBuf {
        std::env::temp_dir().join("fakepy-mcp")
    }
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            root: Self::default_root(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// `EnvFilter` directives.
    /// Default: info,fakepy_mcp=debug
    #[serde(default = "TelemetryConfig::default_log_level")]
    pub log_level: String,

    /// OTLP gRPC endpoint. Export is off when unset.
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
}

impl TelemetryConfig {
    pub const DEFAULT_LOG_LEVEL: &'static str = "info,fakepy_mcp=debug";

    fn default_log_level() -> String {
        Self::DEFAULT_LOG_LEVEL.to_string()
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: Self::default_log_level(),
            otlp_endpoint: None,
        }
    }
}

/// Complete server configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub files: FilesConfig,

    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl Config {
    /// Load configuration from files and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let (config, _sources) = Self::load_with_sources_from(None)?;
        Ok(config)
    }

    /// Load configuration and report where values came from.
    ///
    /// If `config_path` is given it replaces the local `./fakepy-mcp.toml`
    /// and must exist. System and user configs still load first.
    pub fn load_with_sources_from(
        config_path: Option<&Path>,
    ) -> Result<(Self, ConfigSources), ConfigError> {
        let mut sources = ConfigSources::default();
        let mut config = Config::default();

        for path in loader::discover_config_files_with_override(config_path) {
            loader::load_into(&mut config, &path)?;
            sources.files.push(path);
        }

        loader::apply_env_overrides(&mut config, &mut sources);

        Ok((config, sources))
    }

    /// Serialize config to a TOML string.
    pub fn to_toml(&self) -> String {
        let mut output = String::new();

        output.push_str("# fakepy-mcp Configuration\n\n");

        output.push_str("[server]\n");
        output.push_str(&format!("host = \"{}\"\n", self.server.host));
        output.push_str(&format!("port = {}\n", self.server.port));
        output.push_str(&format!(
            "session_idle_secs = {}\n",
            self.server.session_idle_secs
        ));

        output.push_str("\n[files]\n");
        output.push_str(&format!("root = \"{}\"\n", self.files.root.display()));

        output.push_str("\n[telemetry]\n");
        output.push_str(&format!("log_level = \"{}\"\n", self.telemetry.log_level));
        if let Some(endpoint) = &self.telemetry.otlp_endpoint {
            output.push_str(&format!("otlp_endpoint = \"{}\"\n", endpoint));
        }

        output
    }
}

//! Config file discovery, loading, and environment variable overlay.

use super::{Config, ConfigError};
use std::env;
use std::path::{Path, PathBuf};

/// Information about where config values came from.
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    /// Config files that were loaded (in order)
    pub files: Vec<PathBuf>,
    /// Environment variables that overrode config values
    pub env_overrides: Vec<String>,
}

/// Discover config files, optionally with a CLI override path.
///
/// Returns paths in load order (system, user, local/cli). Discovered files
/// are only returned if they exist. A CLI path is always returned so a typo
/// surfaces as a read error instead of being skipped.
pub fn discover_config_files_with_override(cli_path: Option<&Path>) -> Vec<PathBuf> {
    let mut files = Vec::new();

    let system = PathBuf::from("/etc/fakepy-mcp/config.toml");
    if system.exists() {
        files.push(system);
    }

    // XDG_CONFIG_HOME or ~/.config
    if let Some(config_dir) = directories::BaseDirs::new().map(|d| d.config_dir().to_path_buf()) {
        let user = config_dir.join("fakepy-mcp/config.toml");
        if user.exists() {
            files.push(user);
        }
    }

    if let Some(path) = cli_path {
        files.push(path.to_path_buf());
        return files;
    }

    let local = PathBuf::from("fakepy-mcp.toml");
    if local.exists() {
        files.push(local);
    }

    files
}

/// Read a TOML file and apply the keys it sets on top of `config`.
pub fn load_into(config: &mut Config, path: &Path) -> Result<(), ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    apply_toml(config, &contents, path)
}

/// Only keys present in the file are applied, so layered files merge.
fn apply_toml(config: &mut Config, contents: &str, path: &Path) -> Result<(), ConfigError> {
    let table: toml::Table = contents.parse().map_err(|e: toml::de::Error| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let invalid = |key: &str, expected: &str| ConfigError::Parse {
        path: path.to_path_buf(),
        message: format!("{} must be {}", key, expected),
    };

    if let Some(server) = table.get("server").and_then(|v| v.as_table()) {
        if let Some(v) = server.get("host") {
            config.server.host = v
                .as_str()
                .ok_or_else(|| invalid("server.host", "a string"))?
                .to_string();
        }
        if let Some(v) = server.get("port") {
            config.server.port = v
                .as_integer()
                .and_then(|n| u16::try_from(n).ok())
                .ok_or_else(|| invalid("server.port", "an integer between 0 and 65535"))?;
        }
        if let Some(v) = server.get("session_idle_secs") {
            config.server.session_idle_secs = v
                .as_integer()
                .and_then(|n| u64::try_from(n).ok())
                .ok_or_else(|| invalid("server.session_idle_secs", "a non-negative integer"))?;
        }
    }

    if let Some(files) = table.get("files").and_then(|v| v.as_table()) {
        if let Some(v) = files.get("root") {
            config.files.root =
                expand_path(v.as_str().ok_or_else(|| invalid("files.root", "a string"))?);
        }
    }

    if let Some(telemetry) = table.get("telemetry").and_then(|v| v.as_table()) {
        if let Some(v) = telemetry.get("log_level") {
            config.telemetry.log_level = v
                .as_str()
                .ok_or_else(|| invalid("telemetry.log_level", "a string"))?
                .to_string();
        }
        if let Some(v) = telemetry.get("otlp_endpoint") {
            let endpoint = v
                .as_str()
                .ok_or_else(|| invalid("telemetry.otlp_endpoint", "a string"))?;
            config.telemetry.otlp_endpoint = (!endpoint.is_empty()).then(|| endpoint.to_string());
        }
    }

    Ok(())
}

/// Apply environment variable overrides to config.
pub fn apply_env_overrides(config: &mut Config, sources: &mut ConfigSources) {
    apply_env_overrides_from(config, sources, |key| env::var(key).ok());
}

/// Same as [`apply_env_overrides`] with an injectable lookup.
pub fn apply_env_overrides_from<F>(config: &mut Config, sources: &mut ConfigSources, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = lookup("FAKEPY_MCP_HOST") {
        config.server.host = v;
        sources.env_overrides.push("FAKEPY_MCP_HOST".to_string());
    }
    if let Some(v) = lookup("FAKEPY_MCP_PORT") {
        if let Ok(port) = v.parse() {
            config.server.port = port;
            sources.env_overrides.push("FAKEPY_MCP_PORT".to_string());
        }
    }
    if let Some(v) = lookup("FAKEPY_MCP_FILE_ROOT") {
        config.files.root = expand_path(&v);
        sources.env_overrides.push("FAKEPY_MCP_FILE_ROOT".to_string());
    }

    if let Some(v) = lookup("FAKEPY_MCP_LOG_LEVEL") {
        config.telemetry.log_level = v;
        sources.env_overrides.push("FAKEPY_MCP_LOG_LEVEL".to_string());
    }
    // RUST_LOG wins over the crate-specific variable
    if let Some(v) = lookup("RUST_LOG") {
        config.telemetry.log_level = v;
        sources.env_overrides.push("RUST_LOG".to_string());
    }
    if let Some(v) = lookup("OTEL_EXPORTER_OTLP_ENDPOINT") {
        config.telemetry.otlp_endpoint = (!v.is_empty()).then_some(v);
        sources.env_overrides.push("OTEL_EXPORTER_OTLP_ENDPOINT".to_string());
    }
}

/// Expand `~/` and `$VAR` components in a path.
pub fn expand_path(path: &str) -> PathBuf {
    let expanded = if let Some(stripped) = path.strip_prefix("~/") {
        match directories::BaseDirs::new() {
            Some(dirs) => dirs.home_dir().join(stripped),
            None => PathBuf::from(path),
        }
    } else {
        PathBuf::from(path)
    };

    let rendered = expanded.to_string_lossy();
    if !rendered.contains('$') {
        return expanded;
    }

    let parts: Vec<String> = rendered
        .split('/')
        .map(|part| match part.strip_prefix('$') {
            Some(var) => env::var(var).unwrap_or_else(|_| part.to_string()),
            None => part.to_string(),
        })
        .collect();
    PathBuf::from(parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "a.toml", "[server]\nport = 9000\n");

        let mut config = Config::default();
        load_into(&mut config, &path).unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.telemetry, Config::default().telemetry);
    }

    #[test]
    fn test_later_files_layer_over_earlier() {
        let dir = tempfile::tempdir().unwrap();
        let first = write(
            dir.path(),
            "first.toml",
            "[server]\nhost = \"127.0.0.1\"\nport = 9000\n",
        );
        let second = write(
            dir.path(),
            "second.toml",
            "[server]\nport = 9100\n\n[telemetry]\notlp_endpoint = \"localhost:4317\"\n",
        );

        let mut config = Config::default();
        load_into(&mut config, &first).unwrap();
        load_into(&mut config, &second).unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.telemetry.otlp_endpoint.as_deref(), Some("localhost:4317"));
    }

    #[test]
    fn test_parse_errors_name_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let bad_syntax = write(dir.path(), "bad.toml", "[server\n");
        let bad_port = write(dir.path(), "port.toml", "[server]\nport = 70000\n");

        let mut config = Config::default();
        match load_into(&mut config, &bad_syntax).unwrap_err() {
            ConfigError::Parse { path, .. } => assert_eq!(path, bad_syntax),
            other => panic!("unexpected error: {:?}", other),
        }
        let err = load_into(&mut config, &bad_port).unwrap_err();
        assert!(err.to_string().contains("server.port"));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("FAKEPY_MCP_HOST", "127.0.0.1"),
            ("FAKEPY_MCP_PORT", "not-a-port"),
            ("FAKEPY_MCP_LOG_LEVEL", "warn"),
            ("RUST_LOG", "debug"),
            ("OTEL_EXPORTER_OTLP_ENDPOINT", "collector:4317"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        let mut sources = ConfigSources::default();
        apply_env_overrides_from(&mut config, &mut sources, |key| {
            vars.get(key).map(|v| v.to_string())
        });

        assert_eq!(config.server.host, "127.0.0.1");
        // Unparseable ports are ignored
        assert_eq!(config.server.port, 8005);
        assert_eq!(config.telemetry.log_level, "debug");
        assert_eq!(config.telemetry.otlp_endpoint.as_deref(), Some("collector:4317"));
        assert!(!sources.env_overrides.contains(&"FAKEPY_MCP_PORT".to_string()));
        assert!(sources.env_overrides.contains(&"RUST_LOG".to_string()));
    }

    #[test]
    fn test_expand_path() {
        assert_eq!(expand_path("/tmp/fakes"), PathBuf::from("/tmp/fakes"));
        if let Some(dirs) = directories::BaseDirs::new() {
            assert_eq!(expand_path("~/fakes"), dirs.home_dir().join("fakes"));
        }
    }

    #[test]
    fn test_cli_path_is_always_returned() {
        let missing = Path::new("/nowhere/custom.toml");
        let files = discover_config_files_with_override(Some(missing));
        assert_eq!(files.last().map(PathBuf::as_path), Some(missing));
    }
}

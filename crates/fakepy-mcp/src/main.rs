//! fakepy-mcp - MCP server for fake data generation
//!
//! ```text
//! fakepy-mcp            # stdio
//! fakepy-mcp http       # Streamable HTTP on 0.0.0.0:8005
//! fakepy-mcp sse --host 127.0.0.1 --port 9000
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use fakegen::Faker;

use fakepy_mcp::config::Config;
use fakepy_mcp::{serve, telemetry, FakerHandler, Mode, ServeConfig};

#[derive(Parser)]
#[command(name = "fakepy-mcp")]
#[command(about = "MCP server exposing fake.py providers as tools")]
#[command(version)]
struct Cli {
    /// Transport to serve
    #[arg(value_enum, default_value_t = Mode::Stdio)]
    mode: Mode,

    /// Host to bind for http/sse (default: 0.0.0.0)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind for http/sse (default: 8005)
    #[arg(long)]
    port: Option<u16>,

    /// Config file, replacing ./fakepy-mcp.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory that *_file tools write into
    #[arg(long)]
    file_root: Option<PathBuf>,

    /// OTLP gRPC endpoint for traces and logs
    #[arg(long)]
    otlp_endpoint: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let (mut config, sources) =
        Config::load_with_sources_from(cli.config.as_deref()).context("Failed to load config")?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(root) = cli.file_root {
        config.files.root = root;
    }
    if let Some(endpoint) = cli.otlp_endpoint {
        config.telemetry.otlp_endpoint = Some(endpoint);
    }

    let guard = telemetry::init(&config.telemetry)?;
    for file in &sources.files {
        tracing::debug!(path = %file.display(), "Loaded config file");
    }
    if !sources.env_overrides.is_empty() {
        tracing::debug!(vars = ?sources.env_overrides, "Applied environment overrides");
    }

    let handler = FakerHandler::new(Faker::with_file_root(&config.files.root));

    let result = serve::run(
        handler,
        ServeConfig {
            mode: cli.mode,
            host: config.server.host.clone(),
            port: config.server.port,
            session_idle: config.server.session_idle(),
        },
    )
    .await;

    if let Err(e) = &result {
        tracing::error!("Server exited with error: {:#}", e);
    }
    guard.shutdown();
    result
}

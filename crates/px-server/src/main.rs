use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use px_core::config::AppConfig;
use px_server::server::build_router;

/// pixscii HTTP API server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Listen address override, e.g. 0.0.0.0:8000.
    #[arg(short, long)]
    bind: Option<String>,

    /// Optional TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level: error, warn, info, debug, trace.
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Info))
        .init();

    let mut config = match cli.config.as_deref() {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.server.bind = bind;
    }

    let addr = config.server.bind.clone();
    let app = build_router(config);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("unable to bind {addr}"))?;
    log::info!("pixscii server listening on {addr}");
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

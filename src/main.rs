// ABOUTME: Entry point for the qaforge binary.
// ABOUTME: Loads .env and CLI overrides, initializes tracing, and starts the HTTP server.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use qaforge_server::{AppState, QaforgeConfig, create_router};

/// LLM-assisted QA scenario and automation script generator.
#[derive(Debug, Parser)]
#[command(name = "qaforge", version, about)]
struct Cli {
    /// Socket address to bind (overrides QAFORGE_BIND).
    #[arg(long)]
    bind: Option<SocketAddr>,

    /// Base directory for the scenario file and script directory (overrides QAFORGE_DATA_DIR).
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Model identifier (overrides QAFORGE_MODEL).
    #[arg(long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; everything has a default.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("qaforge=info,tower_http=info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = QaforgeConfig::from_env().context("invalid configuration")?;
    if let Some(data_dir) = cli.data_dir {
        config = config.with_data_dir(data_dir);
    }
    if let Some(bind) = cli.bind {
        config.bind = bind;
    }
    if let Some(model) = cli.model {
        config.model = model;
    }

    if config.publish.remote_url.is_none() {
        tracing::warn!("QAFORGE_GIT_REMOTE_URL is not set; publishing will fail until it is");
    }

    let bind = config.bind;
    tracing::info!(
        %bind,
        model = %config.model,
        inference_url = %config.inference_url,
        scenarios = %config.scenario_file.display(),
        script = %config.script_path().display(),
        "qaforge starting up"
    );

    let state = AppState::from_config(config).context("failed to initialize application state")?;
    let app = create_router(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("failed to bind {}", bind))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

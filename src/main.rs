mod config;
mod hmr;
mod plugins;
mod routes;
mod state;
mod watch;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, Overrides};

/// Dev server for the repository validation UI.
#[derive(Debug, Parser)]
#[command(name = "repocheck", version)]
struct Cli {
    /// YAML config file (default: `<root>/repocheck.yaml` when present).
    #[arg(long, env = "REPOCHECK_CONFIG")]
    config: Option<PathBuf>,

    /// Project root.
    #[arg(long, default_value = ".")]
    root: PathBuf,

    #[arg(long)]
    host: Option<String>,

    #[arg(long)]
    port: Option<u16>,
}

#[derive(Debug, thiserror::Error)]
enum ServeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("bind {addr} failed: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is normal.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "repocheck failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), ServeError> {
    let overrides = Overrides { host: cli.host, port: cli.port };
    let config = config::load(&cli.root, cli.config.as_deref(), &overrides)?;
    let plugins = plugins::instantiate(&config.plugins)?;
    let plugin_names: Vec<&str> = plugins.iter().map(|p| p.name()).collect();
    info!(plugins = ?plugin_names, "plugins loaded");
    let state = state::DevState::new(config);
    let config = state.config.clone();

    let _watcher = if config.server.watch.use_polling {
        Some(watch::spawn_watcher(
            config.watch_roots(),
            config.root.clone(),
            Duration::from_millis(config.server.watch.interval_ms),
            state.reload_tx.clone(),
        ))
    } else {
        warn!("polling disabled; file changes will not trigger reloads");
        None
    };

    if !config.hmr_shares_listener() {
        let hmr_addr = config.hmr_addr();
        let hmr_listener = bind(&hmr_addr).await?;
        info!(addr = %hmr_addr, "hmr listening");
        let hmr_router = routes::hmr_app(state.clone());
        tokio::spawn(async move {
            if let Err(e) = axum::serve(hmr_listener, hmr_router).await {
                error!(error = %e, "hmr server failed");
            }
        });
    }

    let addr = config.listen_addr();
    let listener = bind(&addr).await?;
    let app = routes::app(state, &plugins);

    info!(
        %addr,
        hmr_port = config.hmr_port(),
        hmr_client_port = config.hmr_client_port(),
        site = %config.site_dir().display(),
        "repocheck dev server listening"
    );
    axum::serve(listener, app).await.map_err(ServeError::Serve)
}

async fn bind(addr: &str) -> Result<TcpListener, ServeError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind { addr: addr.to_owned(), source })
}

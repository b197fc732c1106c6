use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use roster::api::ApiServer;
use roster::config::Config;
use roster::store::FileStore;
use roster::ui;

#[derive(Parser)]
#[command(name = "roster", version, about = "User directory with a JSON-file API and a terminal client")]
struct Cli {
    /// Config file (default: <config_dir>/roster/config.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the directory API server.
    Serve {
        /// Bind address (host:port), overrides the config file.
        #[arg(long)]
        bind: Option<String>,
        /// Path of the JSON record file, overrides the config file.
        #[arg(long)]
        data: Option<PathBuf>,
    },
    /// Run the terminal client (the default).
    Ui {
        /// Base URL of the directory API, overrides the config file.
        #[arg(long)]
        server_url: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Some(Command::Serve { bind, data }) => {
            init_tracing();
            let mut config = config;
            if let Some(bind) = bind {
                config.server.bind_addr = bind;
            }
            if let Some(data) = data {
                config.server.data_path = data;
            }
            serve(config)
        }
        Some(Command::Ui { server_url }) => {
            let mut config = config;
            if let Some(url) = server_url {
                config.client.base_url = url;
            }
            ui::runtime::run(&config)
        }
        None => ui::runtime::run(&config),
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();
}

fn serve(config: Config) -> anyhow::Result<()> {
    if let Some(parent) = config.server.data_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create data dir {}", parent.display()))?;
    }
    // An unparseable record file is fatal here, before the server binds.
    let store = Arc::new(FileStore::open(&config.server.data_path)?);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        let mut server = ApiServer::new(store);
        server
            .try_bind(&config.server.bind_addr)
            .await
            .with_context(|| format!("failed to bind {}", config.server.bind_addr))?;

        let handle = server.handle();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("ctrl-c received, shutting down");
                handle.shutdown();
            }
        });

        server.run().await.context("server error")
    })
}

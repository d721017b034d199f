use anyhow::Context;
use clap::Parser;
use demo_mcp::{Clock, Config, EnvFile, Server, SystemClock, Transport, http, tools};
use rmcp::{ServiceExt, transport::stdio};
use std::{path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// MCP server exposing the `add` and `get_time` tools
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Transport to serve on [env: MCP_TRANSPORT]
    #[arg(long, value_enum)]
    transport: Option<Transport>,

    /// Interface for the HTTP transport [env: MCP_HOST]
    #[arg(long)]
    host: Option<String>,

    /// Port for the HTTP transport [env: MCP_PORT]
    #[arg(long)]
    port: Option<u16>,

    /// Route of the MCP endpoint [env: MCP_PATH]
    #[arg(long)]
    path: Option<String>,

    /// File with KEY=value lines consulted after the process environment
    #[arg(long, default_value = ".env")]
    env_file: PathBuf,
}

impl Args {
    fn config(&self, env: &EnvFile) -> anyhow::Result<Config> {
        let mut config = Config::from_lookup(|key| env.var(key))?;

        if let Some(transport) = self.transport {
            config = config.with_transport(transport);
        }
        if let Some(host) = &self.host {
            config = config.with_host(host);
        }
        if let Some(port) = self.port {
            config = config.with_port(port);
        }
        if let Some(path) = &self.path {
            config = config.with_path(path);
        }

        Ok(config.validate()?)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout carries protocol frames on the stdio transport
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("info,{}=debug", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let env = EnvFile::load(&args.env_file)
        .with_context(|| format!("reading {}", args.env_file.display()))?;
    tracing::debug!(path = %args.env_file.display(), vars = env.len(), "loaded env file");

    let config = args.config(&env)?;
    tracing::info!("Starting with config: {config:?}");

    let clock = SystemClock;
    clock.probe()?;
    tools::resolve_time_zone(tools::DEFAULT_TIMEZONE)
        .context("timezone database is missing the default timezone")?;
    let clock: Arc<dyn Clock> = Arc::new(clock);

    match config.transport {
        Transport::Stdio => serve_stdio(clock).await,
        Transport::StreamableHttp => serve_http(&config, clock).await,
    }
}

async fn serve_stdio(clock: Arc<dyn Clock>) -> anyhow::Result<()> {
    let service = Server::new(clock).serve(stdio()).await?;
    let reason = service.waiting().await?;
    tracing::info!(?reason, "stdio session ended");
    Ok(())
}

async fn serve_http(config: &Config, clock: Arc<dyn Clock>) -> anyhow::Result<()> {
    let router = http::router(config, clock);

    let addr = config.bind_address()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!("Listening on http://{addr}{}", config.path);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                tracing::error!(%err, "failed to listen for shutdown signal");
            }
        })
        .await?;
    Ok(())
}

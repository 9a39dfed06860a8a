use anyhow::Result;
use clap::{Parser, Subcommand};
use std::sync::{Arc, Mutex};

use tiny_fleet::api::create_router;
use tiny_fleet::registry::InstanceRegistry;
use tiny_fleet::service::InstanceService;
use tiny_fleet::telemetry::init_telemetry;
use tiny_fleet::{config, init_config};

#[derive(Parser)]
#[command(name = "tiny-fleet")]
#[command(about = "Simulated EC2 fleet management API")]
#[command(long_about = "Tiny Fleet serves a fixed in-memory fleet of simulated EC2 instances \
                       over HTTP: list them, look one up, or ask one to stop. Run with no \
                       subcommand to start the server on the configured address.")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Bind address
        #[arg(long, help = "Bind address, overrides configuration")]
        host: Option<String>,
        /// Listen port
        #[arg(long, help = "Port to listen on, overrides configuration")]
        port: Option<u16>,
    },
    /// Print the seeded fleet without starting the server
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_config()?;
    let cfg = config()?;
    init_telemetry(&cfg.observability.log_level)?;

    match cli.command {
        Some(Commands::List) => list_fleet(),
        Some(Commands::Serve { host, port }) => {
            let host = host.unwrap_or_else(|| cfg.server.host.clone());
            let port = port.unwrap_or(cfg.server.port);
            tokio::runtime::Runtime::new()?.block_on(serve(host, port))
        }
        None => {
            let host = cfg.server.host.clone();
            let port = cfg.server.port;
            tokio::runtime::Runtime::new()?.block_on(serve(host, port))
        }
    }
}

async fn serve(host: String, port: u16) -> Result<()> {
    // Registry is built once here and injected; it lives for the whole
    // process and is shared by every request handler.
    let registry = Arc::new(Mutex::new(InstanceRegistry::seeded()));
    let service = InstanceService::new(registry);
    let app = create_router(service);

    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    tracing::info!(%host, port, "Tiny Fleet API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Tiny Fleet API shut down");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutdown signal received");
    }
}

fn list_fleet() -> Result<()> {
    let service = InstanceService::seeded();
    for instance in service.list_all()? {
        println!(
            "{:<22} {:<20} {:<12} {:<14} {}",
            instance.id, instance.name, instance.instance_type, instance.state, instance.region
        );
    }
    Ok(())
}

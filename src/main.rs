//! netstat_exporter - Network Statistics Exporter Binary
//!
//! Samples per-interface network statistics on a timer and serves them as
//! Prometheus metrics on a loopback-only HTTP endpoint.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use netstat_exporter::{
    bind_listener, is_loopback, serve, InterfaceSource, NetworkCollector, NetworkMetrics,
    SimulatedSampler, SysinfoInterfaces, WebConfig, DEFAULT_INTERVAL_SECS, DEFAULT_WEB_HOST,
    DEFAULT_WEB_PORT,
};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "netstat_exporter")]
#[command(about = "Network statistics exporter for Prometheus")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = "Periodically samples per-interface network statistics and serves them as Prometheus metrics")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Metrics server bind address (loopback only)
    #[arg(long, default_value = DEFAULT_WEB_HOST)]
    host: String,

    /// Metrics server port
    #[arg(short, long, default_value_t = DEFAULT_WEB_PORT)]
    port: u16,

    /// Collection interval in seconds
    #[arg(short, long, default_value_t = DEFAULT_INTERVAL_SECS, value_parser = clap::value_parser!(u64).range(1..))]
    interval: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Collect periodically and serve metrics (default)
    Serve,

    /// Run one collection cycle, print the exposition text and exit
    Snapshot,

    /// List the network interfaces and whether they are sampled
    Interfaces(InterfacesArgs),
}

#[derive(Args)]
struct InterfacesArgs {
    /// Output format: json or pretty
    #[arg(short, long, default_value = "pretty")]
    format: String,
}

#[derive(Serialize)]
struct InterfaceEntry {
    name: String,
    sampled: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(&cli)?;

    match &cli.command {
        Some(Commands::Serve) | None => serve_command(&cli).await,
        Some(Commands::Snapshot) => snapshot_command(),
        Some(Commands::Interfaces(args)) => interfaces_command(args),
    }
}

fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    let level = if cli.debug {
        Level::DEBUG
    } else if cli.verbose {
        Level::INFO
    } else {
        Level::WARN
    };

    // RUST_LOG directives take precedence over the flags.
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

async fn serve_command(cli: &Cli) -> anyhow::Result<()> {
    info!("Starting netstat_exporter {}", env!("CARGO_PKG_VERSION"));

    let metrics = Arc::new(NetworkMetrics::new().context("Failed to register metrics")?);

    let config = WebConfig::new(&cli.host, cli.port);
    info!("Binding metrics server on {}", config.bind_address());
    let listener = match bind_listener(&config).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Error starting server: {}", e);
            return Err(e.into());
        }
    };

    let server = tokio::spawn(serve(listener, metrics.clone()));

    let interval = Duration::from_secs(cli.interval);
    info!("Collecting network metrics every {}s", cli.interval);
    let collector = NetworkCollector::new(metrics, SysinfoInterfaces::new(), SimulatedSampler);

    tokio::select! {
        _ = collector.run(interval) => {}
        result = server => {
            let e = match result {
                Ok(Ok(())) => anyhow::anyhow!("Metrics server stopped unexpectedly"),
                Ok(Err(e)) => e.into(),
                Err(e) => e.into(),
            };
            error!("{}", e);
            return Err(e);
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl-C, shutting down");
        }
    }

    Ok(())
}

fn snapshot_command() -> anyhow::Result<()> {
    let metrics = Arc::new(NetworkMetrics::new()?);
    let mut collector = NetworkCollector::new(metrics.clone(), SysinfoInterfaces::new(), SimulatedSampler);

    collector.collect_once()?;
    print!("{}", metrics.render()?);

    Ok(())
}

fn interfaces_command(args: &InterfacesArgs) -> anyhow::Result<()> {
    let entries: Vec<InterfaceEntry> = SysinfoInterfaces::new()
        .interface_names()?
        .into_iter()
        .map(|name| InterfaceEntry {
            sampled: !is_loopback(&name),
            name,
        })
        .collect();

    match args.format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        "pretty" => {
            println!("Network Interfaces:");
            for entry in &entries {
                println!(
                    "  {}: {}",
                    entry.name,
                    if entry.sampled { "sampled" } else { "skipped (loopback)" }
                );
            }
        }
        other => {
            anyhow::bail!("Unsupported format: {}. Use 'json' or 'pretty'", other);
        }
    }

    Ok(())
}

use clap::Parser;
use ferrous_lan_api::AppState;
use ferrous_lan_domain::{CliOverrides, NeighborFormat};
use ferrous_lan_jobs::{JobRunner, SnapshotRefreshJob};
use std::net::{IpAddr, SocketAddr};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "ferrous-lan")]
#[command(version)]
#[command(about = "Ferrous LAN - DHCP lease and IPv6 neighbor status service")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Path to the dhcpd.leases file
    #[arg(short = 'l', long, value_name = "FILE")]
    lease_file: Option<String>,

    /// Neighbor command output dialect (ndp, ip-neigh)
    #[arg(long)]
    neighbor_format: Option<NeighborFormat>,

    /// Seconds between snapshot refreshes
    #[arg(long, value_name = "SECS")]
    refresh_interval: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        web_port: cli.web_port,
        bind_address: cli.bind.clone(),
        lease_path: cli.lease_file.clone(),
        neighbor_format: cli.neighbor_format,
        refresh_interval_secs: cli.refresh_interval,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Ferrous LAN v{}", env!("CARGO_PKG_VERSION"));

    let use_cases = di::UseCases::new(&config);
    let shutdown = CancellationToken::new();

    let job_handles = JobRunner::new()
        .with_snapshot_refresh(
            SnapshotRefreshJob::new(use_cases.refresh.clone())
                .with_interval(config.refresh.interval_secs),
        )
        .with_shutdown_token(shutdown.clone())
        .start()
        .await;

    let app_state = AppState {
        get_snapshot: use_cases.get_snapshot,
        refresh: use_cases.refresh,
    };

    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Shutdown signal received");
                signal_token.cancel();
            }
            Err(e) => error!(error = %e, "Failed to listen for shutdown signal"),
        }
    });

    let bind_ip: IpAddr = config
        .server
        .bind_address
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid bind address {}: {}", config.server.bind_address, e))?;
    let web_addr = SocketAddr::new(bind_ip, config.server.web_port);

    let result = server::start_web_server(web_addr, app_state, shutdown.clone()).await;

    shutdown.cancel();
    for handle in job_handles {
        if let Err(e) = handle.await {
            error!(error = %e, "Background job terminated abnormally");
        }
    }

    result?;
    info!("Server shutdown complete");
    Ok(())
}

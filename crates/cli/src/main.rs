use clap::Parser;
use ip_gate_api::AppState;
use ip_gate_domain::CliOverrides;
use ip_gate_jobs::{CacheMaintenanceJob, JobRunner};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "ip-gate")]
#[command(version)]
#[command(about = "IP Gate - IP, subnet and geolocation based request restrictions")]
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

    /// Database path
    #[arg(long)]
    database: Option<String>,

    /// MaxMind country database (.mmdb) path
    #[arg(long, value_name = "FILE")]
    geo_db: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        web_port: cli.web_port,
        bind_address: cli.bind,
        database_path: cli.database,
        geo_database_path: cli.geo_db,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting IP Gate v{}", env!("CARGO_PKG_VERSION"));

    let database_url = format!("sqlite:{}", config.database.path);
    let pool = bootstrap::init_database(&database_url, &config.database).await?;

    let repos = di::Repositories::new(pool);
    let services = di::Services::new(&config, &repos)?;

    let shutdown = CancellationToken::new();
    JobRunner::new()
        .with_cache_maintenance(
            CacheMaintenanceJob::new(services.cache.clone())
                .with_interval(config.cache.sweep_interval_secs),
        )
        .with_shutdown_token(shutdown.clone())
        .start()
        .await;

    let app_state = AppState {
        evaluate: services.evaluate,
        http: Arc::new(config.http.clone()),
        on_store_unavailable: config.restriction.on_store_unavailable,
    };

    let web_addr: SocketAddr =
        format!("{}:{}", config.server.bind_address, config.server.web_port).parse()?;

    server::start_web_server(web_addr, app_state, shutdown).await?;

    info!("Server shutdown complete");
    Ok(())
}

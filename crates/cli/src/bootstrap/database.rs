use ip_gate_domain::config::DatabaseConfig;
use ip_gate_infrastructure::database::create_pool;
use sqlx::SqlitePool;
use tracing::{error, info};

pub async fn init_database(database_url: &str, cfg: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    info!("Initializing database: {}", database_url);

    let pool = create_pool(database_url, cfg).await.map_err(|e| {
        error!("Failed to initialize database pool: {}", e);
        anyhow::anyhow!(e)
    })?;

    info!(
        max_connections = cfg.max_connections,
        migrations = cfg.run_migrations,
        "Database initialized successfully"
    );

    Ok(pool)
}

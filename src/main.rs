//!
//! Hotel back-office REST API server.
//! Reads configuration from TOML file (~/.config/hotel-service/config.toml).

use std::sync::Arc;

use sea_orm_migration::MigratorTrait;
use tracing::{error, info};

use namsan_hotel::domain::RepositoryProvider;
use namsan_hotel::infrastructure::database::migrator::Migrator;
use namsan_hotel::{
    create_api_router, default_config_path, init_database, ApiState, AppConfig, DatabaseConfig,
    InMemoryRepositoryProvider, SeaOrmRepositoryProvider,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("HOTEL_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            // Initialize logging with configured level
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting Hotel Management API...");

    // ── Storage backend ────────────────────────────────────────
    let repos: Arc<dyn RepositoryProvider> = if app_cfg.database.is_memory() {
        info!("Using in-memory storage backend");
        Arc::new(InMemoryRepositoryProvider::new())
    } else {
        let db_config = DatabaseConfig {
            url: app_cfg.database.connection_url(),
        };
        info!("Database: {}", db_config.url);

        let db = match init_database(&db_config).await {
            Ok(db) => db,
            Err(e) => {
                error!("Failed to connect to database: {}", e);
                return Err(e.into());
            }
        };

        info!("Running database migrations...");
        if let Err(e) = Migrator::up(&db, None).await {
            error!("Failed to run migrations: {}", e);
            return Err(e.into());
        }
        info!("Migrations completed");

        Arc::new(SeaOrmRepositoryProvider::new(db))
    };

    // ── REST API ───────────────────────────────────────────────
    let state = ApiState::new(repos);
    let router = create_api_router(state, &app_cfg.server.cors_origins);

    let addr = format!("{}:{}", app_cfg.server.host, app_cfg.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("REST API server listening on http://{}", addr);
    info!("Swagger UI available at http://{}/docs", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for shutdown signal: {}", e);
            }
            info!("Shutdown signal received");
        })
        .await?;

    info!("Hotel Management API shutdown complete");
    Ok(())
}

//! # Server Setup
//!
//! Server initialization, route registration, and HTTP server startup.
//!
//! One process serves both halves of the site: the deletion API under `/api` and
//! the compiled web app for every other path.

// region: --- Imports
use axum::{routing::{any, get, post}, Router};
use lib_core::{create_pool, run_migrations, Config, DbPool, DeletionRepository, ReferenceIssuer};
use lib_utils::envs::{get_env_list_or, get_env_or};
use crate::handlers;
use crate::middleware::{log_requests, stamp_req};
use crate::spa::{index_path, spa_service};
use crate::sweeper::spawn_purge_sweeper;
use std::path::PathBuf;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
// endregion: --- Imports

// region: --- AppState
/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub config: Config,
    pub issuer: ReferenceIssuer,
}

impl axum::extract::FromRef<AppState> for DbPool {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl axum::extract::FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl axum::extract::FromRef<AppState> for ReferenceIssuer {
    fn from_ref(state: &AppState) -> Self {
        state.issuer.clone()
    }
}
// endregion: --- AppState

// region: --- Server Configuration
const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:8080",
    "http://127.0.0.1:8080",
    "http://localhost:3000",
    "http://127.0.0.1:3000",
];

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:8080")
    pub bind_address: String,
    /// Directory holding the built web app (`index.html`, wasm, assets)
    pub dist_dir: PathBuf,
    /// Allowed CORS origins
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
            dist_dir: PathBuf::from("dist"),
            allowed_origins: DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect(),
        }
    }
}

impl ServerConfig {
    /// Read `SITE_BIND_ADDRESS`, `SITE_DIST_DIR` and `SITE_ALLOWED_ORIGINS`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind_address: get_env_or("SITE_BIND_ADDRESS", &defaults.bind_address),
            dist_dir: PathBuf::from(get_env_or("SITE_DIST_DIR", "dist")),
            allowed_origins: get_env_list_or("SITE_ALLOWED_ORIGINS", DEFAULT_ALLOWED_ORIGINS),
        }
    }
}
// endregion: --- Server Configuration

// region: --- Server Setup
/// Initialize and start the HTTP server
///
/// # Errors
///
/// This function will return an error if:
/// - The tracing subscriber cannot be installed
/// - Configuration loading or validation fails
/// - Database connection or migrations fail
/// - Server binding fails
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    let log_level = std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase();

    let filter = match log_level.as_str() {
        "trace" => tracing_subscriber::EnvFilter::new("trace"),
        "debug" => tracing_subscriber::EnvFilter::new("debug"),
        "info" => tracing_subscriber::EnvFilter::new("info"),
        "warn" => tracing_subscriber::EnvFilter::new("warn"),
        "error" => tracing_subscriber::EnvFilter::new("error"),
        _ => tracing_subscriber::EnvFilter::new("info"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global tracing subscriber: {}", e))?;

    info!(" EXPENZEZ SITE SERVER STARTING");
    info!(" Log level: {}", log_level);

    info!("Loading configuration...");
    let app_config = Config::from_env()?;
    app_config.validate().map_err(|e| anyhow::anyhow!(e))?;
    info!(
        retention_days = app_config.retention_days,
        sweep_interval_secs = app_config.sweep_interval_secs,
        "Deletion policy loaded"
    );

    info!("Database URL: {}", app_config.database_url);
    ensure_sqlite_dir(&app_config.database_url)?;

    info!("Connecting to database...");
    let pool = create_pool(&app_config.database_url).await?;

    info!(" Running database migrations");
    run_migrations(&pool).await?;
    info!(" Migrations complete");

    let latest = DeletionRepository::latest_reference(&pool).await?;
    let issuer = ReferenceIssuer::starting_after(latest);

    spawn_purge_sweeper(pool.clone(), Duration::from_secs(app_config.sweep_interval_secs));
    info!(
        " Purge sweeper started ({}s interval)",
        app_config.sweep_interval_secs
    );

    if !index_path(&config.dist_dir).is_file() {
        warn!(
            dist_dir = %config.dist_dir.display(),
            "index.html not found; page routes will return 404 until the web app is built"
        );
    }

    let state = AppState {
        db: pool,
        config: app_config,
        issuer,
    };

    let app = create_router(state, &config);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;

    info!(" SERVER READY: http://{}", config.bind_address);
    log_server_info(&config);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Create the parent directory of a file-backed SQLite database.
fn ensure_sqlite_dir(database_url: &str) -> std::io::Result<()> {
    let Some(db_path) = database_url.strip_prefix("sqlite:") else {
        return Ok(());
    };
    let db_path = db_path.trim_start_matches("//");
    if db_path.starts_with(":memory:") {
        return Ok(());
    }

    let db_path = db_path.split('?').next().unwrap_or(db_path);
    if let Some(parent) = std::path::Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
            info!("Created database directory: {:?}", parent);
        }
    }
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Create the main application router with all routes
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    use axum::http::{HeaderValue, Method};

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    info!("[ROUTE SETUP] Registering HTTP routes...");
    Router::new()
        .route(
            "/api/account-deletion",
            post(handlers::deletion::request_deletion)
                .fallback(handlers::api_method_not_allowed),
        )
        .route(
            "/api/account-deletion/{reference_id}",
            get(handlers::deletion::get_deletion_status)
                .fallback(handlers::api_method_not_allowed),
        )
        .route("/health", get(|| async { "OK" }))
        .route("/api", any(handlers::api_not_found))
        .route("/api/{*rest}", any(handlers::api_not_found))
        .fallback_service(spa_service(&config.dist_dir))
        .with_state(state)
        // Layers run outermost-last: stamping wraps tracing wraps logging
        .layer(axum::middleware::from_fn(log_requests))
        .layer(
            tower_http::trace::TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    let request_id = request
                        .extensions()
                        .get::<crate::middleware::mw_req_stamp::RequestStamp>()
                        .map(|s| s.id.clone())
                        .unwrap_or_else(|| "unknown".to_string());
                    tracing::info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = %request.method(),
                        uri = %request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_failure(|error: tower_http::classify::ServerErrorsFailureClass, latency: Duration, _span: &tracing::Span| {
                    tracing::error!(
                        error = ?error,
                        latency_ms = latency.as_millis(),
                        "[HTTP FAILURE] Error: {:?}, Latency: {}ms",
                        error,
                        latency.as_millis()
                    );
                }),
        )
        .layer(axum::middleware::from_fn(stamp_req))
        .layer(cors)
}

/// Log server information
fn log_server_info(config: &ServerConfig) {
    info!(" ACCOUNT DELETION:");
    info!("   • POST /api/account-deletion");
    info!("   • GET  /api/account-deletion/{{reference_id}}");
    info!(" WEB APP:");
    info!("   • GET  /*  (served from {})", config.dist_dir.display());
    info!(" HEALTH:");
    info!("   • GET  /health");
}
// endregion: --- Server Setup

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_server_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address, "127.0.0.1:8080");
        assert_eq!(config.dist_dir, PathBuf::from("dist"));
        assert!(config.allowed_origins.contains(&"http://localhost:8080".to_string()));
    }

    #[test]
    fn test_ensure_sqlite_dir_ignores_memory_and_other_schemes() {
        assert!(ensure_sqlite_dir("sqlite::memory:").is_ok());
        assert!(ensure_sqlite_dir("postgres://localhost/db").is_ok());
    }

    #[test]
    fn test_ensure_sqlite_dir_creates_parent() {
        let root = std::env::temp_dir().join(format!("site-db-{}", uuid::Uuid::new_v4()));
        let url = format!("sqlite:{}/nested/site.db?mode=rwc", root.display());

        ensure_sqlite_dir(&url).unwrap();
        assert!(root.join("nested").is_dir());

        std::fs::remove_dir_all(&root).unwrap();
    }
}

//! Notes Server - note-taking REST backend with JWT authentication

use anyhow::{Context, Result};
use axum::Router;
use axum::http::{HeaderValue, Method, StatusCode, header};
use clap::Parser;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod config;

use config::{Config, ConfigSource, CorsConfig};
use notes_api::{AppState, create_router};
use notes_auth::JwtManager;
use notes_db::Database;

/// Notes Server - note-taking REST backend
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, env = "NOTES_CONFIG", default_value = "config/default.toml")]
    config: String,

    /// Bind address
    #[arg(long, env = "NOTES_BIND")]
    bind: Option<String>,

    /// Port
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// SQLite database file
    #[arg(long, env = "NOTES_DATABASE")]
    database: Option<String>,

    /// Secret used to sign session tokens
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    jwt_secret: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration, then apply command line / env overrides
    let (mut config, source) = Config::load(&args.config)?;
    if let Some(path) = args.database {
        config.database.path = path;
    }
    if let Some(secret) = args.jwt_secret {
        config.auth.jwt_secret = secret;
    }
    config.validate()?;

    // Initialize logging
    init_logging(&config.logging.level, &config.logging.format);

    info!("Starting Notes Server v{}", env!("CARGO_PKG_VERSION"));
    match source {
        ConfigSource::File => info!("Loaded configuration from {}", args.config),
        ConfigSource::Defaults => {
            info!("Config file not found at {}, using defaults", args.config)
        }
    }
    config.warn_insecure_defaults();

    // Create data directory
    if let Some(parent) = Path::new(&config.database.path).parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    // Initialize database
    let db_url = format!("sqlite:{}?mode=rwc", config.database.path);
    let db = Database::new(&db_url).await?;

    // Initialize JWT manager
    let jwt = Arc::new(JwtManager::new(
        &config.auth.jwt_secret,
        chrono::Duration::seconds(config.auth.token_ttl_secs),
    ));

    // Install Prometheus recorder
    let metrics_handle = PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install metrics recorder")?;

    // Create router
    let state = AppState::new(db, jwt);
    let app = with_http_layers(create_router(state, Some(Arc::new(metrics_handle))), &config)?;

    // Determine bind address
    let bind_addr = args.bind.unwrap_or(config.server.bind_address);
    let port = args.port.unwrap_or(config.server.port);
    let addr: SocketAddr = format!("{}:{}", bind_addr, port).parse()?;

    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Wrap the API router in CORS, request timeout and tracing
fn with_http_layers(router: Router, config: &Config) -> Result<Router> {
    Ok(router
        .layer(build_cors(&config.cors)?)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.server.request_timeout_secs),
        ))
        .layer(TraceLayer::new_for_http()))
}

/// Build the CORS layer for the browser client
fn build_cors(config: &CorsConfig) -> Result<CorsLayer> {
    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .with_context(|| format!("Invalid CORS origin: {}", origin))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]))
}

/// Initialize logging
fn init_logging(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let registry = tracing_subscriber::registry().with(filter);

    if format == "json" {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

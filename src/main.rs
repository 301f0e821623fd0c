//! VolunTrack Server - REST backend for the VolunTrack volunteering app
//!
//! Serves volunteer posts, volunteer requests and request confirmations over
//! JSON, with cookie-based session tokens guarding every mutation.

use std::env;
use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::{info, warn, Level};

use config::LogFormat;
use voluntrack_server::{api, config, db, AppConfig, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    // Check for --help flag
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        print_help();
        return Ok(());
    }

    // Check for --version flag
    if args.iter().any(|arg| arg == "--version" || arg == "-V") {
        println!("VolunTrack Server {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration first (before logging, so we know log format)
    let config = AppConfig::load().context("Failed to load configuration")?;

    // The guard must outlive the server so buffered file logs are flushed
    let _log_guard = init_logging(&config);

    info!("VolunTrack Server starting up");
    info!(environment = ?config.server.environment, "Configuration loaded successfully");

    ensure_data_directory(&config)?;

    info!("Initializing database connection");
    let db = db::init_pool(&config.database)
        .await
        .context("Failed to initialize database")?;

    if args.iter().any(|arg| arg == "--migrate") {
        // init_pool has already applied pending migrations
        info!("Migrations applied, exiting");
        db::close(db).await;
        return Ok(());
    }

    let state = AppState {
        config: config.clone(),
        db: db.clone(),
    };

    let app = create_router(state, &config);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address configuration")?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("VolunTrack Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server stopped, closing database");
    db::close(db).await;

    Ok(())
}

/// Resolve on SIGINT or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

/// Initialize the logging/tracing infrastructure
fn init_logging(config: &AppConfig) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    use config::LogTarget;
    use tracing_subscriber::{prelude::*, EnvFilter};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    let log_config = &config.logging;

    match &log_config.target {
        LogTarget::Console => {
            let subscriber = tracing_subscriber::registry().with(env_filter);
            init_console_logging(subscriber, &log_config.format);
            None
        }
        LogTarget::File => {
            let (writer, guard) = create_file_writer(log_config);
            let subscriber = tracing_subscriber::registry().with(env_filter);
            init_file_logging(subscriber, &log_config.format, writer);
            Some(guard)
        }
        LogTarget::Both => {
            let (writer, guard) = create_file_writer(log_config);
            let subscriber = tracing_subscriber::registry().with(env_filter);
            init_both_logging(subscriber, &log_config.format, writer);
            Some(guard)
        }
    }
}

/// Create a file writer with optional daily rotation
fn create_file_writer(
    log_config: &config::LoggingConfig,
) -> (
    tracing_appender::non_blocking::NonBlocking,
    tracing_appender::non_blocking::WorkerGuard,
) {
    if let Err(e) = std::fs::create_dir_all(&log_config.log_dir) {
        eprintln!(
            "Warning: Failed to create log directory {:?}: {}",
            log_config.log_dir, e
        );
    }

    let file_appender = if log_config.daily_rotation {
        tracing_appender::rolling::daily(&log_config.log_dir, &log_config.log_prefix)
    } else {
        tracing_appender::rolling::never(&log_config.log_dir, &log_config.log_prefix)
    };

    tracing_appender::non_blocking(file_appender)
}

fn init_console_logging<S>(subscriber: S, format: &LogFormat)
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a> + Send + Sync,
{
    use tracing_subscriber::{fmt, prelude::*};

    match format {
        LogFormat::Json => subscriber.with(fmt::layer().json().with_target(true)).init(),
        LogFormat::Compact => subscriber
            .with(fmt::layer().compact().with_target(false))
            .init(),
        LogFormat::Pretty => subscriber
            .with(fmt::layer().with_target(true).with_thread_ids(false))
            .init(),
    }
}

fn init_file_logging<S>(
    subscriber: S,
    format: &LogFormat,
    writer: tracing_appender::non_blocking::NonBlocking,
) where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a> + Send + Sync,
{
    use tracing_subscriber::{fmt, prelude::*};

    match format {
        LogFormat::Json => subscriber
            .with(fmt::layer().json().with_target(true).with_writer(writer))
            .init(),
        LogFormat::Compact => subscriber
            .with(fmt::layer().compact().with_target(false).with_writer(writer))
            .init(),
        LogFormat::Pretty => subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_ansi(false)
                    .with_writer(writer),
            )
            .init(),
    }
}

fn init_both_logging<S>(
    subscriber: S,
    format: &LogFormat,
    writer: tracing_appender::non_blocking::NonBlocking,
) where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a> + Send + Sync,
{
    use tracing_subscriber::{fmt, prelude::*};

    match format {
        LogFormat::Json => subscriber
            .with(fmt::layer().json().with_target(true)) // Console
            .with(fmt::layer().json().with_target(true).with_writer(writer)) // File
            .init(),
        LogFormat::Compact => subscriber
            .with(fmt::layer().compact().with_target(false)) // Console
            .with(fmt::layer().compact().with_target(false).with_writer(writer)) // File
            .init(),
        LogFormat::Pretty => subscriber
            .with(fmt::layer().with_target(true)) // Console
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_ansi(false)
                    .with_writer(writer),
            ) // File
            .init(),
    }
}

/// Directory that will hold the SQLite file, if the URL names one
fn data_directory(database_url: &str) -> Option<std::path::PathBuf> {
    let path = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() || path == ":memory:" {
        return None;
    }
    std::path::Path::new(path)
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(|parent| parent.to_path_buf())
}

/// Ensure the data directory exists
fn ensure_data_directory(config: &AppConfig) -> Result<()> {
    if let Some(parent) = data_directory(&config.database.url) {
        if !parent.exists() {
            std::fs::create_dir_all(&parent).context("Failed to create data directory")?;
            info!("Created data directory: {:?}", parent);
        }
    }
    Ok(())
}

/// Create the application router with all routes and middleware
fn create_router(state: AppState, config: &AppConfig) -> Router {
    let origins: Vec<HeaderValue> = config
        .server
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    // Credentialed CORS requires explicit origins, methods and headers
    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    api::router(state).layer(trace_layer).layer(cors)
}

/// Print help message
fn print_help() {
    println!(
        r#"VolunTrack Server {}

USAGE:
    voluntrack-server [OPTIONS]

OPTIONS:
    -h, --help              Print this help message
    -V, --version           Print version information
    --migrate               Apply pending database migrations and exit

ENVIRONMENT:
    VOLUNTRACK_CONFIG       Path to configuration file (default: config.yaml)
    PORT                    Listen port (default: 5000)
    DATABASE_URL            SQLite URL (default: sqlite://./data/voluntrack.db)
    ACCESS_TOKEN_SECRET     Session token signing secret (min. 32 characters)
    NODE_ENV                "production" enables Secure/SameSite=None cookies
    ALLOWED_ORIGINS         Comma-separated CORS origins
    RUST_LOG                Log filter (overrides logging.level)

CONFIGURATION:
    The application looks for configuration files in the following order:
    1. Path specified by VOLUNTRACK_CONFIG environment variable
    2. ./config.yaml
    3. ./config/config.yaml
    4. /etc/voluntrack/config.yaml
    5. <user config dir>/voluntrack/config.yaml"#,
        env!("CARGO_PKG_VERSION")
    );
}

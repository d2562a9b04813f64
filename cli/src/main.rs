//! Users service: CLI server
//!
//! ```sh
//! # Run with default config (~/.config/users-service/config.toml)
//! users-service
//!
//! # Custom config path
//! users-service --config /etc/users-service/config.toml
//!
//! # Override the port
//! users-service --port 8080
//!
//! # Validate config without starting
//! users-service --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use users_service::config::AppConfig;
use users_service::infrastructure::database::redact_url;
use users_service::server::{init_tracing, ServerHandle, ServerOptions};

/// Users service: REST API for managing users with paginated listing.
#[derive(Parser, Debug)]
#[command(
    name = "users-service",
    version,
    about = "CRUD REST service for users",
    long_about = "Users service: REST API for creating, listing (paginated), \
                  reading, replacing and deleting users.\n\n\
                  Default config: ~/.config/users-service/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "USERS_SERVICE_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli
        .config
        .unwrap_or_else(users_service::default_config_path);

    let mut config = match AppConfig::load(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            if cli.check {
                eprintln!("Configuration is invalid: {}", e);
                std::process::exit(1);
            }
            eprintln!("{}; using default configuration", e);
            AppConfig::default()
        }
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        if let Err(e) = config.validate() {
            eprintln!("Configuration is invalid: {}", e);
            std::process::exit(1);
        }
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   API address : {}", config.server.address());
        println!("   Database    : {}", redact_url(&config.database.url));
        println!("   Page limit  : default {}, max {}", config.pagination.default_limit, config.pagination.max_limit);
        println!("   Log level   : {}", config.logging.level);
        return Ok(());
    }

    init_tracing(&config);
    info!("Configuration loaded from {}", config_path.display());

    // ── Start server ───────────────────────────────────────────
    let handle = match ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
    })
    .await
    {
        Ok(handle) => handle,
        Err(e) => {
            error!("Failed to start users service: {}", e);
            return Err(e);
        }
    };

    // Install OS signal handlers (SIGTERM, SIGINT)
    handle.install_signal_handler();

    info!("Press Ctrl+C to shutdown gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}

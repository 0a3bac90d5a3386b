use std::net::SocketAddr;

use anyhow::Context;
use axum::{extract::Request, ServiceExt};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use notes_dashboard::config::{self, StoreKind};
use notes_dashboard::database::DatabaseManager;
use notes_dashboard::{is_production, service, AppState};

#[derive(Parser, Debug)]
#[command(name = "notes-dashboard", version, about = "Personal notes dashboard API")]
struct Args {
    /// Port to listen on (overrides PORT / NOTES_API_PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    bind: String,

    /// Note store backend: postgres or memory (overrides NOTES_STORE)
    #[arg(long)]
    store: Option<StoreKind>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("notes_dashboard=info,tower_http=info")),
        )
        .init();

    let args = Args::parse();

    let mut config = config::config().clone();
    if let Some(port) = args.port {
        config.api.port = port;
    }
    if let Some(store) = args.store {
        config.database.store = store;
    }

    tracing::info!("Starting Notes Dashboard in {:?} mode", config.environment);

    if config.security.jwt_secret.is_empty() {
        tracing::warn!("JWT_SECRET is not set; every dashboard request will be rejected");
    }
    if is_production!() && config.database.store == StoreKind::Memory {
        tracing::warn!("In-memory note store in production; notes will not survive a restart");
    }

    let store = DatabaseManager::open_store(&config.database)
        .await
        .context("failed to open note store")?;

    let bind_addr: SocketAddr = format!("{}:{}", args.bind, config.api.port)
        .parse()
        .with_context(|| format!("invalid bind address {}:{}", args.bind, config.api.port))?;

    let app = service(AppState::new(store, config));

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Notes Dashboard listening on http://{}", bind_addr);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .await
        .context("server error")?;

    Ok(())
}

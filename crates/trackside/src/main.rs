//! Trackside server binary.
//!
//! Wires the storage gateway, store, RPC registry, and HTTP gateway
//! together, optionally seeding the database at startup.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use trackside_core::SystemClock;
use trackside_server::http::{AppState, router};
use trackside_server::metrics::install_recorder;
use trackside_server::rpc::{MethodRegistry, RpcContext};
use trackside_store::{Db, Store, schema};

#[derive(Parser)]
#[command(name = "trackside", about = "Races and sporting events API server")]
struct Args {
    /// SQLite database file. Omit to run against a shared in-memory database.
    #[arg(long)]
    db: Option<PathBuf>,

    /// Listen address.
    #[arg(long, default_value = "127.0.0.1:8000")]
    addr: SocketAddr,

    /// Rows to seed per table at startup. 0 skips seeding.
    #[arg(long, default_value_t = 100)]
    seed: i64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let metrics_handle = install_recorder();

    let db = match &args.db {
        Some(path) => Db::open_file(path).with_context(|| format!("open {}", path.display()))?,
        None => Db::open_memory("trackside").context("open in-memory database")?,
    };

    {
        let conn = db.connect().context("provision schema")?;
        schema::create_tables(&conn)?;
        if args.seed > 0 {
            let now = chrono::Utc::now();
            schema::seed_races(&conn, args.seed, now)?;
            schema::seed_events(&conn, args.seed, now)?;
            info!(rows = args.seed, "seeded races and events");
        }
    }

    let store = Store::new(db, Arc::new(SystemClock));
    let state = AppState {
        ctx: Arc::new(RpcContext::new(Arc::new(store))),
        registry: Arc::new(MethodRegistry::new()),
        metrics: metrics_handle,
    };

    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("bind {}", args.addr))?;
    info!(addr = %args.addr, "trackside listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serve")?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown requested");
}

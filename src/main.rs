//! Word Analyzer - server
//!
//! Loads the word list, serves `POST /analyze` on port 8080, and writes the
//! word list back to disk on shutdown.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::task::TaskTracker;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use word_analyzer::{
    server::{PORT, build_router},
    wordlists::WordStore,
};

#[derive(Parser)]
#[command(
    name = "word_analyzer",
    about = "Closest-word matching service (by letter value and by lexical order)",
    version,
    author
)]
struct Cli {
    /// Word list file, loaded at startup and rewritten at shutdown
    #[arg(short = 'w', long, default_value = "words.txt")]
    words: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,word_analyzer=debug,tower_http=info".into()),
        )
        .init();

    let cli = Cli::parse();

    // No listener until the words are in memory
    let store = WordStore::load(&cli.words)
        .await
        .context("failed to load word list")?;
    let store = Arc::new(store);

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, PORT));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;
    info!("server started and listening on port {PORT}");

    let appends = TaskTracker::new();
    let app = build_router(Arc::clone(&store), appends.clone());
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    // Queries answered before shutdown still get remembered
    appends.close();
    info!(pending = appends.len(), "server stopped, waiting for appends");
    appends.wait().await;

    info!("saving word list");
    store
        .persist()
        .await
        .inspect_err(|e| error!(error = %e, "failed to save word list"))
        .context("failed to save word list")
}

/// Resolves on Ctrl-C, or SIGTERM on unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "failed to listen for ctrl-c");
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
                error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("shutdown signal received");
}

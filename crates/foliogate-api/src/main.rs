//! Foliogate server entry point.
//!
//! Binary name: `fgate`
//!
//! Loads `.env`, builds the immutable configuration, wires application
//! state, and serves the portfolio API until Ctrl-C/SIGTERM.

mod http;
mod state;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use foliogate_core::content::load_content;

use state::AppState;

#[derive(Parser)]
#[command(name = "fgate", about = "Portfolio site backend: chat relay and contact relay")]
struct Cli {
    /// Port to listen on (overrides $PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Interface to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Best effort: a missing .env file is not an error.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "info",
        1 => "info,foliogate=debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Missing GROQ_API_KEY in live mode is fatal here, before binding.
    let mut config = foliogate_infra::config::from_env()?;
    if let Some(port) = cli.port {
        config.port = port;
    }

    let content = std::sync::Arc::new(load_content(config.content_path.as_deref()).await);
    let state = AppState::build(&config, content)?;

    let addr = format!("{}:{}", cli.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(
        mode = %config.chat_mode,
        "foliogate listening on http://{addr}"
    );

    axum::serve(listener, http::router::build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

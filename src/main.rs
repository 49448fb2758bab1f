use clap::Parser;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod client;
mod clock;
mod config;
mod messages;
mod queue;
mod server;
mod tcp;
#[cfg(test)]
mod test_utils;

use crate::config::Config;
use crate::messages::QueueMessage;
use crate::queue::{queue_task, task::TICK_PERIOD};

/// Entry point: starts the queue task and the HTTP/WebSocket server
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let (queue_tx, queue_rx) = mpsc::unbounded_channel::<QueueMessage>();
    tokio::spawn(queue_task(queue_rx, TICK_PERIOD));
    info!("Clock broadcasting {} time", clock::CLOCK_ZONE);

    if let Some(tcp_port) = config.tcp_port {
        let listener = TcpListener::bind(("0.0.0.0", tcp_port)).await?;
        info!("TCP transport listening on port {}", tcp_port);
        let tcp_queue_tx = queue_tx.clone();
        tokio::spawn(async move {
            if let Err(e) = tcp::serve_tcp(listener, tcp_queue_tx).await {
                error!("TCP transport stopped: {}", e);
            }
        });
    }

    let app = server::router(queue_tx, &config.cors_origin)?;
    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!("Server is running on http://localhost:{}", config.port);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

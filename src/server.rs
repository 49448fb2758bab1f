//! HTTP surface: liveness route and the WebSocket event channel.

use crate::client::ClientSession;
use crate::messages::{QueueMessage, ServerToClient};
use axum::{
    Router,
    extract::{
        ConnectInfo, State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    http::{HeaderValue, Method},
    response::Response,
    routing::get,
};
use futures::{SinkExt, StreamExt, stream::SplitSink};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::mpsc;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

pub const LIVENESS_BODY: &str = "Server is running!";

/// Handlers only need a way into the queue task
#[derive(Clone)]
pub struct AppContext {
    pub queue_tx: mpsc::UnboundedSender<QueueMessage>,
}

pub fn router(
    queue_tx: mpsc::UnboundedSender<QueueMessage>,
    cors_origin: &str,
) -> anyhow::Result<Router> {
    let origin = HeaderValue::from_str(cors_origin)
        .map_err(|e| anyhow::anyhow!("invalid CORS origin {:?}: {}", cors_origin, e))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST]);

    Ok(Router::new()
        .route("/", get(liveness))
        .route("/ws", get(ws_upgrade))
        .with_state(AppContext { queue_tx })
        .layer(cors))
}

async fn liveness() -> &'static str {
    LIVENESS_BODY
}

async fn ws_upgrade(
    ws: WebSocketUpgrade,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    State(ctx): State<AppContext>,
) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, addr, ctx.queue_tx))
}

async fn handle_socket(
    socket: WebSocket,
    addr: SocketAddr,
    queue_tx: mpsc::UnboundedSender<QueueMessage>,
) {
    let (session, response_rx) = match ClientSession::connect(queue_tx) {
        Ok(connected) => connected,
        Err(e) => {
            error!("Rejecting WebSocket client {}: {}", addr, e);
            return;
        }
    };

    info!("Client {} connected from {}", session.id, addr);

    let (sink, mut stream) = socket.split();
    let write_task = tokio::spawn(handle_ws_writer(sink, response_rx));

    while let Some(frame) = stream.next().await {
        match frame {
            Ok(Message::Text(text)) => session.handle_frame(&text),
            Ok(Message::Binary(bytes)) => match std::str::from_utf8(&bytes) {
                Ok(text) => session.handle_frame(text),
                Err(e) => error!("Client {} sent non UTF-8 frame: {}", session.id, e),
            },
            Ok(Message::Close(_)) => break,
            // Pings are answered by axum
            Ok(_) => {}
            Err(e) => {
                error!("Client {} read error: {}", session.id, e);
                break;
            }
        }
    }

    info!("Client {} disconnected", session.id);
    session.disconnect();
    write_task.abort();
}

async fn handle_ws_writer(
    mut sink: SplitSink<WebSocket, Message>,
    mut rx: mpsc::UnboundedReceiver<Arc<ServerToClient>>,
) {
    while let Some(message) = rx.recv().await {
        if let Err(e) = sink.send(Message::Text(message.to_json())).await {
            error!("Failed to write to client: {}", e);
            break;
        }
    }
}

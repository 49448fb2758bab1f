use crate::client::ClientSession;
use crate::messages::{QueueMessage, ServerToClient};
use socket2::{SockRef, TcpKeepalive};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::sync::mpsc;
use tracing::{error, info};

/// Accept loop for the newline-delimited JSON transport.
pub async fn serve_tcp(
    listener: TcpListener,
    queue_tx: mpsc::UnboundedSender<QueueMessage>,
) -> anyhow::Result<()> {
    loop {
        let (socket, addr) = listener.accept().await?;

        // Configure TCP keep-alive
        let keepalive = TcpKeepalive::new()
            .with_time(Duration::from_secs(10))
            .with_interval(Duration::from_secs(1));
        let sf = SockRef::from(&socket);
        let _ = sf.set_tcp_keepalive(&keepalive);

        let (reader, writer) = socket.into_split();
        tokio::spawn(handle_tcp_client(reader, writer, addr, queue_tx.clone()));
    }
}

/// One line per message in both directions
pub async fn handle_tcp_client(
    socket_reader: OwnedReadHalf,
    socket_writer: OwnedWriteHalf,
    addr: SocketAddr,
    queue_tx: mpsc::UnboundedSender<QueueMessage>,
) {
    let (session, response_rx) = match ClientSession::connect(queue_tx) {
        Ok(connected) => connected,
        Err(e) => {
            error!("Rejecting TCP client {}: {}", addr, e);
            return;
        }
    };

    info!("Client {} connected over TCP from {}", session.id, addr);

    let write_task = tokio::spawn(handle_tcp_writer(socket_writer, response_rx));

    let mut reader = tokio::io::BufReader::new(socket_reader);
    let mut line = Vec::new();

    loop {
        line.clear();
        match reader.read_until(b'\n', &mut line).await {
            Ok(0) => {
                info!("Client {} disconnected", session.id);
                break;
            }
            // A bad line is dropped; only EOF or an I/O error ends the session
            Ok(_) => match std::str::from_utf8(&line) {
                Ok(text) => session.handle_frame(text),
                Err(e) => error!("Client {} sent non UTF-8 line: {}", session.id, e),
            },
            Err(e) => {
                error!("Client {} read error: {}", addr, e);
                break;
            }
        }
    }

    session.disconnect();
    write_task.abort();
}

async fn handle_tcp_writer(
    mut writer: OwnedWriteHalf,
    mut rx: mpsc::UnboundedReceiver<Arc<ServerToClient>>,
) {
    while let Some(message) = rx.recv().await {
        let message_with_newline = format!("{}\n", message.to_json());
        if let Err(e) = writer.write_all(message_with_newline.as_bytes()).await {
            error!("Failed to write to client: {}", e);
            break;
        }
    }
}

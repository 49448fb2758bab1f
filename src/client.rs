use crate::messages::{ClientToServer, QueueMessage, ServerToClient};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error};
use uuid::Uuid;

/// One connected client, independent of transport. Frames go in through
/// [`ClientSession::handle_frame`]; broadcasts come out of the receiver
/// returned by [`ClientSession::connect`].
#[derive(Debug)]
pub struct ClientSession {
    pub id: Uuid,
    queue_tx: mpsc::UnboundedSender<QueueMessage>,
}

impl ClientSession {
    pub fn connect(
        queue_tx: mpsc::UnboundedSender<QueueMessage>,
    ) -> anyhow::Result<(Self, mpsc::UnboundedReceiver<Arc<ServerToClient>>)> {
        let (client_response_tx, client_response_rx) = mpsc::unbounded_channel();
        let session = Self {
            id: Uuid::new_v4(),
            queue_tx,
        };

        session
            .queue_tx
            .send(QueueMessage::client_connected(session.id, client_response_tx))
            .map_err(|_| anyhow::anyhow!("queue task is not running"))?;

        Ok((session, client_response_rx))
    }

    /// Decodes one frame and forwards it. Malformed frames are logged and
    /// dropped; the session stays open.
    pub fn handle_frame(&self, frame: &str) {
        if frame.trim().is_empty() {
            return;
        }

        match ClientToServer::from_json(frame) {
            Ok(action) => {
                debug!("Client {} sent {:?}", self.id, action);
                if self
                    .queue_tx
                    .send(QueueMessage::client_action(self.id, action))
                    .is_err()
                {
                    error!("Queue task gone, dropping action from client {}", self.id);
                }
            }
            Err(e) => {
                error!("Failed to parse action from client {}: {}", self.id, e);
            }
        }
    }

    pub fn disconnect(self) {
        let _ = self
            .queue_tx
            .send(QueueMessage::client_disconnected(self.id));
        debug!("Client {} cleanup complete", self.id);
    }
}

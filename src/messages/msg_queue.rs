use std::sync::Arc;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::messages::{ClientToServer, ServerToClient};

/// Messages consumed by the queue task
#[derive(Debug)]
pub enum QueueMessage {
    /// A session opened; the queue task owns the sender from here on
    ClientConnected {
        client_id: Uuid,
        client_response_tx: mpsc::UnboundedSender<Arc<ServerToClient>>,
    },
    // Decoded command from a connected client
    ClientAction {
        client_id: Uuid,
        action: ClientToServer,
    },
    ClientDisconnected {
        client_id: Uuid,
    },
}

impl QueueMessage {
    pub fn client_connected(
        client_id: Uuid,
        client_response_tx: mpsc::UnboundedSender<Arc<ServerToClient>>,
    ) -> Self {
        Self::ClientConnected {
            client_id,
            client_response_tx,
        }
    }

    pub fn client_action(client_id: Uuid, action: ClientToServer) -> Self {
        Self::ClientAction { client_id, action }
    }

    pub fn client_disconnected(client_id: Uuid) -> Self {
        Self::ClientDisconnected { client_id }
    }
}

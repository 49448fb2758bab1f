use crate::messages::ServerToClient;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use uuid::Uuid;

/// Fan-out to every connected client. Sends are fire-and-forget: a closed
/// client channel is skipped until the session's disconnect removes it.
pub struct ClientBroadcaster {
    client_senders: HashMap<Uuid, mpsc::UnboundedSender<Arc<ServerToClient>>>,
}

impl ClientBroadcaster {
    pub fn new() -> Self {
        Self {
            client_senders: HashMap::new(),
        }
    }

    pub fn add_client(
        &mut self,
        client_id: Uuid,
        sender: mpsc::UnboundedSender<Arc<ServerToClient>>,
    ) {
        self.client_senders.insert(client_id, sender);
    }

    pub fn remove_client(&mut self, client_id: Uuid) -> bool {
        self.client_senders.remove(&client_id).is_some()
    }

    pub fn client_count(&self) -> usize {
        self.client_senders.len()
    }

    pub fn send_to(&self, client_id: Uuid, response: ServerToClient) {
        if let Some(sender) = self.client_senders.get(&client_id) {
            let _ = sender.send(Arc::new(response));
        }
    }

    pub fn broadcast(&self, response: ServerToClient) {
        let message = Arc::new(response);
        for sender in self.client_senders.values() {
            let _ = sender.send(Arc::clone(&message));
        }
    }
}

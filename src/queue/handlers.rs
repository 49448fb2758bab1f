use super::{broadcaster::ClientBroadcaster, player_queue::PlayerQueue};
use crate::clock;
use crate::messages::{ClientToServer, ServerToClient};
use crate::queue::Player;
use tracing::debug;
use uuid::Uuid;

// KISS: Group related handlers
pub struct QueueHandlers;

impl QueueHandlers {
    /// Initial snapshots for a new client, sent to that client only.
    pub fn handle_client_connected(
        queue: &PlayerQueue,
        broadcaster: &ClientBroadcaster,
        client_id: Uuid,
    ) {
        broadcaster.send_to(client_id, queue.players_update());
        broadcaster.send_to(client_id, queue.current_update());
        broadcaster.send_to(client_id, ServerToClient::time_update(clock::current_time()));
        // Clients have always received the current player twice on connect
        broadcaster.send_to(client_id, queue.current_update());
    }

    fn handle_add_player(
        queue: &mut PlayerQueue,
        broadcaster: &ClientBroadcaster,
        client_id: Uuid,
        player: Player,
    ) {
        debug!("Client {} added player {}", client_id, player);
        queue.add_player(player);
        // The current player changed too, but only the queue is announced
        broadcaster.broadcast(queue.players_update());
    }

    fn handle_remove_player(
        queue: &mut PlayerQueue,
        broadcaster: &ClientBroadcaster,
        client_id: Uuid,
        player: Player,
    ) {
        let outcome = queue.remove_player(&player);
        debug!(
            "Client {} removed player {} ({} occurrences)",
            client_id, player, outcome.removed
        );
        if outcome.cleared_current {
            debug!("Current player cleared");
            broadcaster.broadcast(queue.current_update());
        }
        broadcaster.broadcast(queue.players_update());
    }

    fn handle_move_player(
        queue: &mut PlayerQueue,
        broadcaster: &ClientBroadcaster,
        client_id: Uuid,
        from: i64,
        to: i64,
    ) {
        if queue.move_player(from, to) {
            debug!("Client {} moved player {} -> {}", client_id, from, to);
        } else {
            debug!(
                "Client {} move {} -> {} out of range for {} players, ignored",
                client_id,
                from,
                to,
                queue.len()
            );
        }
        broadcaster.broadcast(queue.players_update());
    }

    fn handle_update_players(
        queue: &mut PlayerQueue,
        broadcaster: &ClientBroadcaster,
        client_id: Uuid,
        players: Vec<Player>,
    ) {
        debug!("Client {} replaced queue with {} players", client_id, players.len());
        queue.replace_players(players);
        broadcaster.broadcast(queue.players_update());
    }

    fn handle_update_current_player(
        queue: &mut PlayerQueue,
        broadcaster: &ClientBroadcaster,
        client_id: Uuid,
        current: Option<Player>,
    ) {
        debug!("Client {} set current player to {:?}", client_id, current);
        queue.replace_current(current);
        broadcaster.broadcast(queue.current_update());
    }

    pub fn handle_client_action(
        queue: &mut PlayerQueue,
        broadcaster: &ClientBroadcaster,
        client_id: Uuid,
        action: ClientToServer,
    ) {
        match action {
            ClientToServer::AddPlayer(player) => {
                Self::handle_add_player(queue, broadcaster, client_id, player);
            }
            ClientToServer::RemovePlayer(player) => {
                Self::handle_remove_player(queue, broadcaster, client_id, player);
            }
            ClientToServer::MovePlayer { from, to } => {
                Self::handle_move_player(queue, broadcaster, client_id, from, to);
            }
            ClientToServer::UpdatePlayers(players) => {
                Self::handle_update_players(queue, broadcaster, client_id, players);
            }
            ClientToServer::UpdateCurrentPlayers(current) => {
                Self::handle_update_current_player(queue, broadcaster, client_id, current);
            }
        }
    }
}

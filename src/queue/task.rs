use super::{broadcaster::ClientBroadcaster, handlers::QueueHandlers, player_queue::PlayerQueue};
use crate::{clock, messages::QueueMessage, messages::ServerToClient};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info};

/// Period of the `timeUpdate` broadcast.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Owns the queue and the client fan-out. Messages and clock ticks are handled
/// one at a time, so every command is applied and broadcast before the next.
pub async fn queue_task(mut rx: mpsc::UnboundedReceiver<QueueMessage>, tick_period: Duration) {
    let mut queue = PlayerQueue::new();
    let mut broadcaster = ClientBroadcaster::new();

    let mut ticker = tokio::time::interval_at(Instant::now() + tick_period, tick_period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    info!("Queue task started");

    loop {
        tokio::select! {
            msg = rx.recv() => {
                let Some(msg) = msg else { break };
                match msg {
                    QueueMessage::ClientConnected {
                        client_id,
                        client_response_tx,
                    } => {
                        broadcaster.add_client(client_id, client_response_tx);
                        QueueHandlers::handle_client_connected(&queue, &broadcaster, client_id);
                        debug!(
                            "Client {} joined, {} connected",
                            client_id,
                            broadcaster.client_count()
                        );
                    }
                    QueueMessage::ClientAction { client_id, action } => {
                        QueueHandlers::handle_client_action(
                            &mut queue,
                            &broadcaster,
                            client_id,
                            action,
                        );
                    }
                    QueueMessage::ClientDisconnected { client_id } => {
                        if broadcaster.remove_client(client_id) {
                            debug!(
                                "Client {} left, {} connected",
                                client_id,
                                broadcaster.client_count()
                            );
                        }
                    }
                }
            }
            _ = ticker.tick() => {
                broadcaster.broadcast(ServerToClient::time_update(clock::current_time()));
            }
        }
    }
    debug!("Queue task ended");
}

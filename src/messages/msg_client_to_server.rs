use serde::{Deserialize, Serialize};

use crate::queue::Player;

// Client to Server commands
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "event", content = "data")]
pub enum ClientToServer {
    #[serde(rename = "addPlayer")]
    AddPlayer(Player),

    #[serde(rename = "removePlayer")]
    RemovePlayer(Player),

    // Signed so negative indices decode and are rejected as out of range
    #[serde(rename = "movePlayer")]
    MovePlayer { from: i64, to: i64 },

    #[serde(rename = "updatePlayers")]
    UpdatePlayers(Vec<Player>),

    #[serde(rename = "updateCurrentPlayers")]
    UpdateCurrentPlayers(Option<Player>),
}

impl ClientToServer {
    pub fn from_json(frame: &str) -> serde_json::Result<Self> {
        serde_json::from_str(frame.trim())
    }
}

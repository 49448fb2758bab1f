use serde::{Deserialize, Serialize};

use crate::queue::Player;

// Server to Client events
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "event", content = "data")]
pub enum ServerToClient {
    #[serde(rename = "updatePlayers")]
    UpdatePlayers { players: Vec<Player> },

    #[serde(rename = "currentPlayerUpdate")]
    CurrentPlayerUpdate(Option<Player>),

    #[serde(rename = "timeUpdate")]
    TimeUpdate(String),
}

impl ServerToClient {
    // Simple, safe JSON conversion - no unwrapping!
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            r#"{"event":"error","data":"Serialization failed"}"#.to_string()
        })
    }

    pub fn update_players(players: &[Player]) -> Self {
        Self::UpdatePlayers {
            players: players.to_vec(),
        }
    }

    pub fn current_player_update(current: Option<&Player>) -> Self {
        Self::CurrentPlayerUpdate(current.cloned())
    }

    pub fn time_update(time: impl Into<String>) -> Self {
        Self::TimeUpdate(time.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_wire_format() {
        let players = vec![Player::from(json!("a")), Player::from(json!({"id": 7}))];
        let update: Value =
            serde_json::from_str(&ServerToClient::update_players(&players).to_json()).unwrap();
        assert_eq!(
            update,
            json!({"event": "updatePlayers", "data": {"players": ["a", {"id": 7}]}})
        );

        let cleared: Value =
            serde_json::from_str(&ServerToClient::current_player_update(None).to_json()).unwrap();
        assert_eq!(cleared, json!({"event": "currentPlayerUpdate", "data": null}));

        let time: Value =
            serde_json::from_str(&ServerToClient::time_update("09:05:01").to_json()).unwrap();
        assert_eq!(time, json!({"event": "timeUpdate", "data": "09:05:01"}));
    }
}

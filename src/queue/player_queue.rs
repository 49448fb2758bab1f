use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::messages::ServerToClient;

/// Opaque client-defined player value, compared by structural equality
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Player(Value);

impl From<Value> for Player {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of a remove command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovedPlayer {
    pub removed: usize,
    pub cleared_current: bool,
}

/// The shared queue and the current player. Duplicates are allowed and the
/// current player need not be in the queue.
#[derive(Debug, Clone, Default)]
pub struct PlayerQueue {
    players: Vec<Player>,
    current: Option<Player>,
}

impl PlayerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    // KISS: Simple accessors
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn current(&self) -> Option<&Player> {
        self.current.as_ref()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Appends the player and makes it the current player.
    pub fn add_player(&mut self, player: Player) {
        self.players.push(player.clone());
        self.current = Some(player);
    }

    /// Removes every equal occurrence and clears the current player if it matches.
    pub fn remove_player(&mut self, player: &Player) -> RemovedPlayer {
        let before = self.players.len();
        self.players.retain(|p| p != player);

        let cleared_current = self.current.as_ref() == Some(player);
        if cleared_current {
            self.current = None;
        }

        RemovedPlayer {
            removed: before - self.players.len(),
            cleared_current,
        }
    }

    /// Relocates one player. Returns false and leaves the queue untouched
    /// unless both indices are in `0..len`.
    pub fn move_player(&mut self, from: i64, to: i64) -> bool {
        let len = self.players.len();
        let (Ok(from), Ok(to)) = (usize::try_from(from), usize::try_from(to)) else {
            return false;
        };
        if from >= len || to >= len {
            return false;
        }

        // `to` is relative to the shortened queue
        let moved = self.players.remove(from);
        self.players.insert(to, moved);
        true
    }

    pub fn replace_players(&mut self, players: Vec<Player>) {
        self.players = players;
    }

    pub fn replace_current(&mut self, current: Option<Player>) {
        self.current = current;
    }

    pub fn players_update(&self) -> ServerToClient {
        ServerToClient::update_players(&self.players)
    }

    pub fn current_update(&self) -> ServerToClient {
        ServerToClient::current_player_update(self.current.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn player(name: &str) -> Player {
        Player::from(json!(name))
    }

    fn queue_of(names: &[&str]) -> PlayerQueue {
        let mut queue = PlayerQueue::new();
        queue.replace_players(names.iter().map(|n| player(n)).collect());
        queue
    }

    #[test]
    fn test_starts_empty() {
        let queue = PlayerQueue::new();
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.current(), None);
    }

    #[test]
    fn test_add_sets_current() {
        let mut queue = PlayerQueue::new();
        queue.add_player(player("p1"));
        queue.add_player(player("p2"));

        assert_eq!(queue.players(), &[player("p1"), player("p2")]);
        assert_eq!(queue.current(), Some(&player("p2")));
    }

    #[test]
    fn test_add_overrides_replaced_current() {
        let mut queue = PlayerQueue::new();
        queue.replace_current(Some(player("host")));
        queue.add_player(player("guest"));
        assert_eq!(queue.current(), Some(&player("guest")));
    }

    #[test]
    fn test_remove_clears_matching_current() {
        let mut queue = PlayerQueue::new();
        queue.add_player(player("p"));

        let outcome = queue.remove_player(&player("p"));
        assert_eq!(
            outcome,
            RemovedPlayer {
                removed: 1,
                cleared_current: true
            }
        );
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.current(), None);
    }

    #[test]
    fn test_remove_all_equal_occurrences() {
        let mut queue = queue_of(&["a", "b", "a", "c", "a"]);
        queue.replace_current(Some(player("c")));

        let outcome = queue.remove_player(&player("a"));
        assert_eq!(outcome.removed, 3);
        assert!(!outcome.cleared_current);
        assert_eq!(queue.players(), &[player("b"), player("c")]);
        assert_eq!(queue.current(), Some(&player("c")));
    }

    #[test]
    fn test_remove_missing_player() {
        let mut queue = queue_of(&["a"]);
        let outcome = queue.remove_player(&player("z"));
        assert_eq!(outcome.removed, 0);
        assert!(!outcome.cleared_current);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_remove_clears_current_outside_queue() {
        let mut queue = queue_of(&["a"]);
        queue.replace_current(Some(player("ghost")));
        let outcome = queue.remove_player(&player("ghost"));
        assert_eq!(outcome.removed, 0);
        assert!(outcome.cleared_current);
    }

    #[test]
    fn test_remove_compares_structurally() {
        let mut queue = PlayerQueue::new();
        queue.add_player(Player::from(json!({"name": "a", "rank": 1})));
        queue.remove_player(&Player::from(json!({"rank": 1, "name": "a"})));
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.current(), None);
    }

    #[test]
    fn test_move_forward() {
        let mut queue = queue_of(&["A", "B", "C"]);
        assert!(queue.move_player(0, 2));
        assert_eq!(queue.players(), &[player("B"), player("C"), player("A")]);
    }

    #[test]
    fn test_move_backward() {
        let mut queue = queue_of(&["A", "B", "C", "D"]);
        assert!(queue.move_player(3, 1));
        assert_eq!(
            queue.players(),
            &[player("A"), player("D"), player("B"), player("C")]
        );
    }

    #[test]
    fn test_move_out_of_range_is_noop() {
        let mut queue = queue_of(&["A", "B", "C"]);
        assert!(!queue.move_player(5, 0));
        assert!(!queue.move_player(0, 3));
        assert!(!queue.move_player(-1, 0));
        assert!(!queue.move_player(0, -1));
        assert_eq!(queue.players(), &[player("A"), player("B"), player("C")]);

        let mut empty = PlayerQueue::new();
        assert!(!empty.move_player(0, 0));
    }

    #[test]
    fn test_replace_players_verbatim() {
        let mut queue = queue_of(&["x"]);
        let replacement = vec![player("a"), player("a"), Player::from(json!(null))];
        queue.replace_players(replacement.clone());
        assert_eq!(queue.players(), replacement.as_slice());
    }

    #[test]
    fn test_snapshots() {
        let mut queue = PlayerQueue::new();
        queue.add_player(player("a"));
        assert_eq!(
            queue.players_update(),
            ServerToClient::UpdatePlayers {
                players: vec![player("a")]
            }
        );
        assert_eq!(
            queue.current_update(),
            ServerToClient::CurrentPlayerUpdate(Some(player("a")))
        );
    }
}

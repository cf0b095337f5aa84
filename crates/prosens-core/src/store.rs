// Ordered in-memory collection of extracted players.

use std::collections::HashMap;

use thiserror::Error;

use crate::player::Player;

#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("player limit of {limit} reached")]
    CapacityReached { limit: usize },
}

/// The dataset every report and query reads.
///
/// Order is insertion (document) order and never changes after loading;
/// analyses that need another order build a view over the slice.
#[derive(Debug, Clone)]
pub struct PlayerStore {
    players: Vec<Player>,
    capacity: usize,
}

impl PlayerStore {
    /// An empty store that accepts at most `capacity` players.
    pub fn with_capacity_limit(capacity: usize) -> Self {
        Self {
            players: Vec::new(),
            capacity,
        }
    }

    /// Append a player, failing once the limit is reached.
    pub fn push(&mut self, player: Player) -> Result<(), StoreError> {
        if self.is_full() {
            return Err(StoreError::CapacityReached {
                limit: self.capacity,
            });
        }
        self.players.push(player);
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.players.len() >= self.capacity
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Players sorted by ascending eDPI. Equal values keep store order.
    pub fn by_edpi(&self) -> Vec<&Player> {
        let mut view: Vec<&Player> = self.players.iter().collect();
        view.sort_by(|a, b| a.edpi.total_cmp(&b.edpi));
        view
    }

    /// Players regrouped so each team's records are contiguous. Teams appear
    /// in order of first appearance; records within a team keep store order.
    pub fn by_team(&self) -> Vec<&Player> {
        let mut first_seen: HashMap<&str, usize> = HashMap::new();
        for player in &self.players {
            let next = first_seen.len();
            first_seen.entry(player.team.as_str()).or_insert(next);
        }
        let mut view: Vec<&Player> = self.players.iter().collect();
        view.sort_by_cached_key(|p| first_seen.get(p.team.as_str()).copied());
        view
    }
}

impl FromIterator<Player> for PlayerStore {
    /// Collect into an unbounded store (used by tests and callers that have
    /// already applied their own limit).
    fn from_iter<I: IntoIterator<Item = Player>>(iter: I) -> Self {
        let players: Vec<Player> = iter.into_iter().collect();
        Self {
            capacity: usize::MAX,
            players,
        }
    }
}

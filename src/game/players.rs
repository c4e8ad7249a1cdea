use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::TileIndex;

/// Seat number handed out at join. Unlike the registry index it never shifts
/// when someone ahead of the player is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Zero-based join order, used to line agents up with seats.
    pub fn seat(self) -> usize {
        self.0.saturating_sub(1) as usize
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub id: PlayerId,
    pub name: String,
    pub score: i64,
    pub position: TileIndex,
    pub has_immunity_card: bool,
    pub has_jail_skip_card: bool,
}

impl PlayerState {
    pub fn new(id: PlayerId, name: impl Into<String>, starting_score: i64) -> Self {
        Self {
            id,
            name: name.into(),
            score: starting_score,
            position: 0,
            has_immunity_card: false,
            has_jail_skip_card: false,
        }
    }

    pub fn reset(&mut self, starting_score: i64) {
        self.score = starting_score;
        self.position = 0;
        self.has_immunity_card = false;
        self.has_jail_skip_card = false;
    }

    pub fn adjust_score(&mut self, delta: i64) {
        self.score += delta;
    }

    pub fn is_bankrupt(&self) -> bool {
        self.score <= 0
    }
}

/// Ordered list of seated players. Turn order follows registry order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerRegistry {
    players: Vec<PlayerState>,
    next_id: u32,
}

impl PlayerRegistry {
    pub fn with_players(count: usize, starting_score: i64) -> Self {
        let mut registry = Self::default();
        for _ in 0..count {
            registry.push_default(starting_score);
        }
        registry
    }

    /// Appends "Player N" where N is the new seat number.
    pub fn push_default(&mut self, starting_score: i64) -> usize {
        self.next_id += 1;
        let id = PlayerId(self.next_id);
        let name = format!("Player {}", self.next_id);
        self.players.push(PlayerState::new(id, name, starting_score));
        self.players.len() - 1
    }

    pub fn remove(&mut self, index: usize) -> Option<PlayerState> {
        if index < self.players.len() {
            Some(self.players.remove(index))
        } else {
            None
        }
    }

    pub fn reset_all(&mut self, starting_score: i64) {
        for player in &mut self.players {
            player.reset(starting_score);
        }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PlayerState> {
        self.players.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut PlayerState> {
        self.players.get_mut(index)
    }

    pub fn index_of(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayerState> + '_ {
        self.players.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut PlayerState> + '_ {
        self.players.iter_mut()
    }

    pub fn as_slice(&self) -> &[PlayerState] {
        &self.players
    }
}

impl std::ops::Index<usize> for PlayerRegistry {
    type Output = PlayerState;

    fn index(&self, index: usize) -> &Self::Output {
        &self.players[index]
    }
}

impl std::ops::IndexMut<usize> for PlayerRegistry {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.players[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seats_are_named_and_numbered() {
        let registry = PlayerRegistry::with_players(3, 1000);
        let names: Vec<_> = registry.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Player 1", "Player 2", "Player 3"]);
        assert!(registry.iter().all(|p| p.score == 1000 && p.position == 0));
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut registry = PlayerRegistry::with_players(3, 1000);
        let removed = registry.remove(2).map(|p| p.id);
        assert_eq!(removed, Some(PlayerId(3)));
        let idx = registry.push_default(1000);
        assert_eq!(registry[idx].id, PlayerId(4));
        assert_eq!(registry.index_of(PlayerId(4)), Some(2));
        assert_eq!(registry.index_of(PlayerId(3)), None);
    }

    #[test]
    fn reset_restores_defaults_but_keeps_names() {
        let mut registry = PlayerRegistry::with_players(2, 1000);
        registry[0].name = "Ayu".into();
        registry[0].score = 12;
        registry[0].position = 17;
        registry[0].has_jail_skip_card = true;
        registry[1].has_immunity_card = true;
        registry.reset_all(1000);
        assert_eq!(registry[0].name, "Ayu");
        assert_eq!(registry[0].score, 1000);
        assert_eq!(registry[0].position, 0);
        assert!(!registry[0].has_jail_skip_card);
        assert!(!registry[1].has_immunity_card);
    }
}

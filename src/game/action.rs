use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::TileIndex;
use crate::types::ActionType;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct GameAction {
    pub player_index: usize,
    pub action_type: ActionType,
    pub payload: ActionPayload,
}

impl GameAction {
    pub fn new(player_index: usize, action_type: ActionType) -> Self {
        Self {
            player_index,
            action_type,
            payload: ActionPayload::None,
        }
    }

    pub fn with_payload(mut self, payload: ActionPayload) -> Self {
        self.payload = payload;
        self
    }
}

impl fmt::Display for GameAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.payload {
            ActionPayload::None => write!(f, "{}", self.action_type),
            ActionPayload::Choice(choice) => write!(f, "{} #{}", self.action_type, choice + 1),
            ActionPayload::Tile(tile) => write!(f, "{} -> {}", self.action_type, tile),
            ActionPayload::Dice(value) => write!(f, "{} [{}]", self.action_type, value),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ActionPayload {
    #[default]
    None,
    /// Zero-based answer choice.
    Choice(usize),
    Tile(TileIndex),
    /// Fixed die face, clamped to 1..=6.
    Dice(u8),
}

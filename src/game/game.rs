use log::debug;
use uuid::Uuid;

use crate::game::action::GameAction;
use crate::game::players::PlayerId;
use crate::game::{ConfigError, GameConfig, GameError, GameState};
use crate::players::BasePlayer;

pub const TURNS_LIMIT: u32 = 1000;

/// A single game driven by agents, one per seat in join order.
#[derive(Debug, Clone)]
pub struct Game {
    pub seed: u64,
    pub id: Uuid,
    pub state: GameState,
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            seed: config.seed,
            id: Uuid::new_v4(),
            state: GameState::new(config)?,
        })
    }

    /// Plays until one player is left, everyone is gone, or the turn limit
    /// is hit. Starts the game first if it is still in the lobby.
    pub fn play<P: BasePlayer>(&mut self, players: &[P]) -> Result<Option<PlayerId>, GameError> {
        if !self.state.is_running() {
            self.state.start_game()?;
        }
        while self.state.is_running() && self.state.turn < TURNS_LIMIT {
            if self.play_tick(players).is_none() {
                break;
            }
        }
        Ok(self.state.winner())
    }

    pub fn play_tick<P: BasePlayer>(&mut self, players: &[P]) -> Option<GameAction> {
        let seat = self.state.current()?.id.seat();
        let player = players.get(seat)?;

        let legal_actions = self.state.legal_actions();
        if legal_actions.is_empty() {
            return None;
        }

        let action = player.decide(self, legal_actions)?;
        self.execute(action.clone()).then_some(action)
    }

    pub fn execute(&mut self, action: GameAction) -> bool {
        match self.state.step(action) {
            Ok(_) => true,
            Err(err) => {
                debug!("game {} rejected agent action: {err}", self.id);
                false
            }
        }
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.state.winner()
    }

    pub fn hit_turn_limit(&self) -> bool {
        self.state.is_running() && self.state.turn >= TURNS_LIMIT
    }
}

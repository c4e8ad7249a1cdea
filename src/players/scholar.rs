use rand::{Rng, seq::SliceRandom};

use crate::game::action::{ActionPayload, GameAction};
use crate::game::game::Game;
use crate::game::{GameState, PendingInteraction};
use crate::players::BasePlayer;
use crate::types::{ActionType, TileKind};

/// How far ahead a parked player looks for unclaimed cities.
const LOOKAHEAD: usize = 6;

#[derive(Debug, Clone)]
pub struct ScholarParams {
    /// Probability of knowing the right answer.
    pub accuracy: f64,
    /// Points kept in hand after paying bail; below this the player rolls.
    pub bail_reserve: i64,
}

impl Default for ScholarParams {
    fn default() -> Self {
        Self {
            accuracy: 0.7,
            bail_reserve: 200,
        }
    }
}

/// Answers from knowledge with a fixed accuracy and plays the jail and
/// parking choices greedily.
#[derive(Debug, Clone)]
pub struct ScholarPlayer {
    pub params: ScholarParams,
}

impl ScholarPlayer {
    pub fn new(params: Option<ScholarParams>) -> Self {
        Self {
            params: params.unwrap_or_default(),
        }
    }

    fn answer(&self, state: &GameState, actions: &[GameAction]) -> Option<GameAction> {
        let Some(PendingInteraction::Question { question, .. }) = state.pending() else {
            return actions.first().cloned();
        };
        let mut rng = rand::thread_rng();
        let knows = rng.gen_bool(self.params.accuracy.clamp(0.0, 1.0));
        if knows {
            return actions
                .iter()
                .find(|a| a.payload == ActionPayload::Choice(question.answer))
                .cloned();
        }
        actions.choose(&mut rng).cloned()
    }

    fn jail(&self, state: &GameState, actions: &[GameAction]) -> Option<GameAction> {
        let find = |kind: ActionType| actions.iter().find(|a| a.action_type == kind).cloned();
        if let Some(card) = find(ActionType::UseJailCard) {
            return Some(card);
        }
        let score = state.current().map(|p| p.score).unwrap_or_default();
        if score - state.config.jail_payment_cost >= self.params.bail_reserve {
            if let Some(pay) = find(ActionType::PayJail) {
                return Some(pay);
            }
        }
        find(ActionType::RollForJail)
    }

    /// Parks where the next roll is most likely to hit an unclaimed city.
    fn park(&self, state: &GameState, actions: &[GameAction]) -> Option<GameAction> {
        let size = state.board.len();
        actions
            .iter()
            .max_by_key(|action| {
                let ActionPayload::Tile(tile) = action.payload else {
                    return 0;
                };
                (1..=LOOKAHEAD)
                    .filter(|step| {
                        let target = (tile + step) % size;
                        state.board.tile(target).is_some_and(|t| t.kind == TileKind::City)
                            && state.ownership.owner_of(target).is_none()
                    })
                    .count()
            })
            .cloned()
    }
}

impl BasePlayer for ScholarPlayer {
    fn decide(&self, game: &Game, actions: &[GameAction]) -> Option<GameAction> {
        if actions.len() <= 1 {
            return actions.first().cloned();
        }
        let state = &game.state;
        match state.pending() {
            Some(PendingInteraction::Question { .. }) => self.answer(state, actions),
            Some(PendingInteraction::JailChoice) => self.jail(state, actions),
            Some(PendingInteraction::Parking { .. }) => self.park(state, actions),
            _ => actions.first().cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;

    fn game() -> Game {
        let config = GameConfig {
            initial_players: 2,
            ..GameConfig::default()
        };
        let mut game = Game::new(config).expect("valid");
        game.state.start_game().expect("start");
        game
    }

    #[test]
    fn perfect_scholar_always_answers_right() {
        let mut game = game();
        let roll = GameAction::new(0, ActionType::RollDice).with_payload(ActionPayload::Dice(1));
        game.state.step(roll).expect("roll");
        let player = ScholarPlayer::new(Some(ScholarParams {
            accuracy: 1.0,
            ..ScholarParams::default()
        }));
        let actions = game.state.legal_actions().to_vec();
        let chosen = player.decide(&game, &actions).expect("an answer");
        game.state.step(chosen).expect("answer");
        assert_eq!(game.state.ownership.owner_of(1), Some(0));
    }

    #[test]
    fn prefers_jail_card_then_bail() {
        let mut game = game();
        let roll = GameAction::new(0, ActionType::RollDice).with_payload(ActionPayload::Dice(6));
        game.state.step(roll).expect("roll");
        let player = ScholarPlayer::new(None);

        let actions = game.state.legal_actions().to_vec();
        let chosen = player.decide(&game, &actions).map(|a| a.action_type);
        assert_eq!(chosen, Some(ActionType::PayJail));

        game.state.players[0].score = 250;
        let chosen = player.decide(&game, &actions).map(|a| a.action_type);
        assert_eq!(chosen, Some(ActionType::RollForJail));
    }
}

use itertools::Itertools;
use serde::Serialize;

use crate::board::TileIndex;
use crate::game::{GamePhase, GameState, PendingInteraction, PlayerId, QuestionContext};
use crate::types::{ActionPrompt, QuestionKind};

#[derive(Debug, Clone, Serialize)]
pub struct PlayerObservation {
    pub id: PlayerId,
    pub name: String,
    pub score: i64,
    pub position: TileIndex,
    pub tile_name: &'static str,
    pub in_jail: bool,
    pub turns_in_jail: u8,
    pub has_immunity_card: bool,
    pub has_jail_skip_card: bool,
    pub owned_tiles: Vec<TileIndex>,
    pub is_current: bool,
}

/// Presentation-ready description of the outstanding interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingView {
    pub kind: ActionPrompt,
    pub title: String,
    pub prompt: String,
    pub options: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub prompt: ActionPrompt,
    pub turn: u32,
    pub current_player: usize,
    pub last_roll: Option<u8>,
    pub players: Vec<PlayerObservation>,
    /// (tile, owner index) in board order.
    pub ownership: Vec<(TileIndex, usize)>,
    pub pending: Option<PendingView>,
    pub status: String,
    pub winner: Option<PlayerId>,
    pub questions_remaining: usize,
}

impl Snapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn current(&self) -> Option<&PlayerObservation> {
        self.players.get(self.current_player)
    }
}

pub fn snapshot(state: &GameState) -> Snapshot {
    let running = matches!(state.phase, GamePhase::Running);
    let players = state
        .players
        .iter()
        .enumerate()
        .map(|(idx, player)| {
            let jail = state.jail.get(idx);
            PlayerObservation {
                id: player.id,
                name: player.name.clone(),
                score: player.score,
                position: player.position,
                tile_name: state.board.tile(player.position).map(|t| t.name).unwrap_or("?"),
                in_jail: jail.in_jail,
                turns_in_jail: jail.turns_in_jail,
                has_immunity_card: player.has_immunity_card,
                has_jail_skip_card: player.has_jail_skip_card,
                owned_tiles: state.ownership.tiles_owned_by(idx).collect(),
                is_current: running && idx == state.current_player,
            }
        })
        .collect();

    Snapshot {
        phase: state.phase,
        prompt: state.current_prompt(),
        turn: state.turn,
        current_player: state.current_player,
        last_roll: state.last_roll,
        players,
        ownership: state.ownership.iter().collect(),
        pending: state.pending().map(|pending| pending_view(state, pending)),
        status: state.status().to_string(),
        winner: state.winner(),
        questions_remaining: state.question_bank().remaining(),
    }
}

pub fn pending_view(state: &GameState, pending: &PendingInteraction) -> PendingView {
    let kind = state.current_prompt();
    match pending {
        PendingInteraction::Question { question, context } => {
            let title = match context {
                QuestionContext::Buy { city, price, .. } => {
                    format!("{} {city} (price {price})", QuestionKind::Buy)
                }
                QuestionContext::Fine { city, owner, .. } => {
                    let owner = state.players.get(*owner).map(|p| p.name.as_str()).unwrap_or("?");
                    format!("{} {city} (owned by {owner})", QuestionKind::Fine)
                }
                QuestionContext::Trivia => QuestionKind::Trivia.to_string(),
            };
            PendingView {
                kind,
                title,
                prompt: question.prompt.to_string(),
                options: question.choices.iter().map(|c| c.to_string()).collect(),
            }
        }
        PendingInteraction::Card { deck, card } => PendingView {
            kind,
            title: deck.to_string(),
            prompt: card.text.to_string(),
            options: vec!["OK".to_string()],
        },
        PendingInteraction::JailChoice => {
            let mut options = vec![
                format!("Pay {} points", state.config.jail_payment_cost),
                "Roll for a 6".to_string(),
            ];
            if state.current().is_some_and(|p| p.has_jail_skip_card) {
                options.push("Use get-out-of-jail card".to_string());
            }
            PendingView {
                kind,
                title: "JAIL".to_string(),
                prompt: format!(
                    "Pay {} points or roll the die (a 6 frees you).",
                    state.config.jail_payment_cost
                ),
                options,
            }
        }
        PendingInteraction::Parking { destinations } => PendingView {
            kind,
            title: "FREE PARKING".to_string(),
            prompt: format!(
                "Choose a destination: {}",
                destinations.iter().map(|d| d.to_string()).join(", ")
            ),
            options: destinations
                .iter()
                .map(|tile| {
                    let name = state.board.tile(*tile).map(|t| t.name).unwrap_or("?");
                    format!("{tile}: {name}")
                })
                .collect(),
        },
    }
}

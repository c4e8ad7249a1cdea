pub mod action;
pub mod cards;
pub mod game;
pub mod jail;
pub mod ledger;
pub mod players;
mod resolver;
pub mod state;

pub use action::{ActionPayload, GameAction};
pub use cards::{Card, CardEffect, Deck, Decks};
pub use game::{Game, TURNS_LIMIT};
pub use jail::{JailState, JailTracker};
pub use ledger::OwnershipLedger;
pub use players::{PlayerId, PlayerRegistry, PlayerState};
pub use state::{
    ConfigError, GameConfig, GameError, GameEvent, GamePhase, GameState, LogEntry,
    PendingInteraction, QuestionContext, StepOutcome, TurnPhase,
};

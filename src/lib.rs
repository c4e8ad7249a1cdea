#![warn(clippy::all)]
#![deny(rust_2018_idioms)]

pub mod board;
pub mod cli;
pub mod env;
pub mod game;
pub mod players;
pub mod questions;
pub mod types;

pub use board::{Board, CityPrices, Tile};
pub use env::{PendingView, PlayerObservation, Snapshot, snapshot};
pub use game::{Game, GameAction, GameConfig, GameError, GameEvent, GameState, PlayerId};
pub use questions::{Question, QuestionBank};
pub use types::{ActionPrompt, ActionType, CommunityMode, TileKind};

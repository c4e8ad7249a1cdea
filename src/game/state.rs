use std::fmt;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{
    board::{BOARD_SIZE, Board, CityPrices, TileIndex},
    questions::{Question, QuestionBank},
    types::{ActionPrompt, ActionType, CommunityMode, DeckKind, QuestionKind},
};

use super::{
    action::{ActionPayload, GameAction},
    cards::{Card, Decks},
    jail::JailTracker,
    ledger::OwnershipLedger,
    players::{PlayerId, PlayerRegistry, PlayerState},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub starting_points: i64,
    pub min_players: usize,
    pub max_players: usize,
    pub initial_players: usize,
    pub board_size: usize,
    pub start_pass_bonus: i64,
    pub jail_payment_cost: i64,
    pub max_jail_turns: u8,
    pub fine_amount: i64,
    pub wrong_purchase_penalty: i64,
    pub correct_answer_bonus: i64,
    pub community_question_bonus: i64,
    pub wrong_answer_penalty: i64,
    pub base_city_price: i64,
    pub city_price_increment: i64,
    pub community_mode: CommunityMode,
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_points: 1000,
            min_players: 2,
            max_players: 8,
            initial_players: 4,
            board_size: BOARD_SIZE,
            start_pass_bonus: 50,
            jail_payment_cost: 100,
            max_jail_turns: 3,
            fine_amount: 100,
            wrong_purchase_penalty: 50,
            correct_answer_bonus: 100,
            community_question_bonus: 10,
            wrong_answer_penalty: 50,
            base_city_price: 100,
            city_price_increment: 20,
            community_mode: CommunityMode::Cards,
            seed: 42,
        }
    }
}

impl GameConfig {
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));
        if self.min_players < 1 {
            return invalid("min_players must be at least 1".into());
        }
        if self.min_players > self.max_players {
            return invalid(format!(
                "min_players ({}) exceeds max_players ({})",
                self.min_players, self.max_players
            ));
        }
        if self.initial_players > self.max_players {
            return invalid(format!(
                "initial_players ({}) exceeds max_players ({})",
                self.initial_players, self.max_players
            ));
        }
        if self.board_size != BOARD_SIZE {
            return invalid(format!("board_size must be {BOARD_SIZE}"));
        }
        if self.starting_points <= 0 {
            return invalid("starting_points must be positive".into());
        }
        if self.max_jail_turns == 0 {
            return invalid("max_jail_turns must be at least 1".into());
        }
        let amounts = [
            ("start_pass_bonus", self.start_pass_bonus),
            ("jail_payment_cost", self.jail_payment_cost),
            ("fine_amount", self.fine_amount),
            ("wrong_purchase_penalty", self.wrong_purchase_penalty),
            ("correct_answer_bonus", self.correct_answer_bonus),
            ("community_question_bonus", self.community_question_bonus),
            ("wrong_answer_penalty", self.wrong_answer_penalty),
            ("base_city_price", self.base_city_price),
            ("city_price_increment", self.city_price_increment),
        ];
        if let Some((name, _)) = amounts.iter().find(|(_, value)| *value < 0) {
            return invalid(format!("{name} must not be negative"));
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    NotStarted,
    Running,
    Ended { winner: Option<PlayerId> },
}

/// The question being asked and what hangs on the answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionContext {
    Buy {
        tile: TileIndex,
        city: &'static str,
        price: i64,
    },
    Fine {
        tile: TileIndex,
        city: &'static str,
        owner: usize,
    },
    Trivia,
}

impl QuestionContext {
    pub fn kind(&self) -> QuestionKind {
        match self {
            QuestionContext::Buy { .. } => QuestionKind::Buy,
            QuestionContext::Fine { .. } => QuestionKind::Fine,
            QuestionContext::Trivia => QuestionKind::Trivia,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingInteraction {
    Question {
        question: &'static Question,
        context: QuestionContext,
    },
    Card {
        deck: DeckKind,
        card: Card,
    },
    JailChoice,
    Parking {
        destinations: SmallVec<[TileIndex; 8]>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnPhase {
    AwaitingRoll,
    Pending(PendingInteraction),
}

/// Whether a resolved command hands the turn to the next player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TurnFlow {
    Advance,
    Hold,
}

#[derive(Debug, Clone)]
pub struct StepOutcome {
    pub events: Vec<GameEvent>,
    pub done: bool,
}

impl StepOutcome {
    fn empty() -> Self {
        Self {
            events: Vec::new(),
            done: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    GameStarted {
        players: usize,
    },
    DiceRolled {
        player: usize,
        value: u8,
    },
    PlayerMoved {
        player: usize,
        from: TileIndex,
        to: TileIndex,
    },
    PassedStart {
        player: usize,
        bonus: i64,
    },
    QuestionPosed {
        player: usize,
        question_id: u32,
        kind: QuestionKind,
    },
    QuestionPoolRecycled,
    QuestionAnswered {
        player: usize,
        question_id: u32,
        correct: bool,
    },
    CityAcquired {
        player: usize,
        tile: TileIndex,
    },
    ScoreChanged {
        player: usize,
        delta: i64,
        score: i64,
    },
    CardDrawn {
        player: usize,
        deck: DeckKind,
        card_id: u32,
    },
    Jailed {
        player: usize,
    },
    ReleasedFromJail {
        player: usize,
    },
    PlayerEliminated {
        player: PlayerId,
        reason: String,
    },
    TurnAdvanced {
        next_player: usize,
    },
    GameEnded {
        winner: Option<PlayerId>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("the game is already running")]
    GameInProgress,
    #[error("the game is not running")]
    GameNotRunning,
    #[error("at most {max} players may join")]
    TooManyPlayers { max: usize },
    #[error("at least {min} players are required")]
    TooFewPlayers { min: usize },
    #[error("invalid player index {0}")]
    InvalidPlayer(usize),
    #[error("action by player {actual} but expected {expected}")]
    ActionOutOfTurn { expected: usize, actual: usize },
    #[error("action {action} invalid for prompt {prompt}")]
    InvalidPrompt {
        prompt: ActionPrompt,
        action: ActionType,
    },
    #[error("missing or invalid payload: {0}")]
    InvalidPayload(&'static str),
    #[error("choice {0} is out of range")]
    InvalidChoice(usize),
    #[error("tile {0} is not a parking destination")]
    InvalidDestination(TileIndex),
    #[error("insufficient points: need {needed}, have {available}")]
    InsufficientFunds { needed: i64, available: i64 },
    #[error("no get-out-of-jail card to use")]
    NoJailCard,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub at: DateTime<Utc>,
    pub turn: u32,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.at.format("%H:%M:%S"), self.message)
    }
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    pub board: Board,
    pub players: PlayerRegistry,
    pub ownership: OwnershipLedger,
    pub jail: JailTracker,
    pub prices: CityPrices,
    pub phase: GamePhase,
    pub turn_phase: TurnPhase,
    pub current_player: usize,
    pub turn: u32,
    pub last_roll: Option<u8>,
    pub(super) questions: QuestionBank,
    pub(super) decks: Decks,
    status: String,
    log: Vec<LogEntry>,
    actions: Vec<GameAction>,
    available_actions: Vec<GameAction>,
    pub(super) rng: StdRng,
}

impl GameState {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = StdRng::seed_from_u64(config.seed);
        let players = PlayerRegistry::with_players(config.initial_players, config.starting_points);
        let prices = CityPrices::compute(config.base_city_price, config.city_price_increment);
        let mut jail = JailTracker::default();
        jail.reinit(players.len());

        let mut state = Self {
            config,
            board: Board::standard(),
            players,
            ownership: OwnershipLedger::default(),
            jail,
            prices,
            phase: GamePhase::NotStarted,
            turn_phase: TurnPhase::AwaitingRoll,
            current_player: 0,
            turn: 0,
            last_roll: None,
            questions: QuestionBank::new(),
            decks: Decks::default(),
            status: String::new(),
            log: Vec::new(),
            actions: Vec::new(),
            available_actions: Vec::new(),
            rng,
        };
        state.set_status("Add or remove players, then start the game.");
        Ok(state)
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, GamePhase::Running)
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.phase {
            GamePhase::Ended { winner } => winner,
            _ => None,
        }
    }

    pub fn current(&self) -> Option<&PlayerState> {
        self.players.get(self.current_player)
    }

    pub fn pending(&self) -> Option<&PendingInteraction> {
        match &self.turn_phase {
            TurnPhase::Pending(pending) => Some(pending),
            TurnPhase::AwaitingRoll => None,
        }
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    pub fn action_log(&self) -> &[GameAction] {
        &self.actions
    }

    pub fn question_bank(&self) -> &QuestionBank {
        &self.questions
    }

    pub fn city_price(&self, tile: TileIndex) -> Option<i64> {
        let tile = self.board.tile(tile)?;
        if tile.city_index.is_none() {
            return None;
        }
        self.prices.price_of(tile.name)
    }

    pub fn current_prompt(&self) -> ActionPrompt {
        match (&self.phase, &self.turn_phase) {
            (GamePhase::NotStarted, _) => ActionPrompt::Lobby,
            (GamePhase::Ended { .. }, _) => ActionPrompt::GameOver,
            (GamePhase::Running, TurnPhase::AwaitingRoll) => ActionPrompt::Roll,
            (GamePhase::Running, TurnPhase::Pending(pending)) => match pending {
                PendingInteraction::Question { .. } => ActionPrompt::AnswerQuestion,
                PendingInteraction::Card { .. } => ActionPrompt::ConfirmCard,
                PendingInteraction::JailChoice => ActionPrompt::JailChoice,
                PendingInteraction::Parking { .. } => ActionPrompt::ChooseParking,
            },
        }
    }

    // ----- lobby commands -----

    pub fn add_player(&mut self) -> Result<usize, GameError> {
        if self.is_running() {
            return self.reject(GameError::GameInProgress);
        }
        if self.players.len() >= self.config.max_players {
            return self.reject(GameError::TooManyPlayers {
                max: self.config.max_players,
            });
        }
        let index = self.players.push_default(self.config.starting_points);
        self.jail.ensure_player(index);
        let name = self.players[index].name.clone();
        info!("{name} joined at seat {index}");
        self.push_log(format!("{name} joined the game."));
        self.set_status(format!("{name} joined the game."));
        Ok(index)
    }

    pub fn remove_player(&mut self, index: usize) -> Result<(), GameError> {
        if self.is_running() {
            return self.reject(GameError::GameInProgress);
        }
        if self.players.len() <= self.config.min_players {
            return self.reject(GameError::TooFewPlayers {
                min: self.config.min_players,
            });
        }
        if index >= self.players.len() {
            return self.reject(GameError::InvalidPlayer(index));
        }
        let mut outcome = StepOutcome::empty();
        self.eliminate(index, "removed by host", &mut outcome);
        self.refresh_available_actions();
        Ok(())
    }

    /// Removes the last seat, the host's default removal.
    pub fn remove_last_player(&mut self) -> Result<(), GameError> {
        let last = self.players.len().saturating_sub(1);
        self.remove_player(last)
    }

    pub fn start_game(&mut self) -> Result<StepOutcome, GameError> {
        if self.is_running() {
            return self.reject(GameError::GameInProgress);
        }
        if self.players.len() < self.config.min_players {
            return self.reject(GameError::TooFewPlayers {
                min: self.config.min_players,
            });
        }

        self.questions.reset();
        self.prices = CityPrices::compute(self.config.base_city_price, self.config.city_price_increment);
        self.decks.shuffle_all(&mut self.rng);
        self.players.reset_all(self.config.starting_points);
        self.ownership.clear();
        self.jail.reinit(self.players.len());
        self.current_player = 0;
        self.turn = 0;
        self.last_roll = None;
        self.actions.clear();
        self.turn_phase = TurnPhase::AwaitingRoll;
        self.phase = GamePhase::Running;

        let name = self.players[0].name.clone();
        info!("game started with {} players", self.players.len());
        self.push_log(format!("Game started! {name} goes first."));
        self.set_status(format!("Game started, {name} to roll."));
        self.refresh_available_actions();

        let mut outcome = StepOutcome::empty();
        outcome.events.push(GameEvent::GameStarted {
            players: self.players.len(),
        });
        Ok(outcome)
    }

    pub fn reset_game(&mut self) {
        self.ownership.clear();
        self.questions.reset();
        self.turn_phase = TurnPhase::AwaitingRoll;
        self.current_player = 0;
        self.turn = 0;
        self.last_roll = None;
        self.phase = GamePhase::NotStarted;
        self.players.reset_all(self.config.starting_points);
        self.jail.reinit(self.players.len());
        self.prices = CityPrices::compute(self.config.base_city_price, self.config.city_price_increment);
        self.actions.clear();
        self.refresh_available_actions();
        info!("game reset");
        self.push_log("Game reset. Ready to start again.");
        self.set_status("Game reset. Start a new game when ready.");
    }

    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    // ----- in-game commands -----

    pub fn step(&mut self, mut action: GameAction) -> Result<StepOutcome, GameError> {
        if let Err(err) = self.validate_action(&action) {
            return self.reject(err);
        }
        let mut outcome = StepOutcome::empty();
        let flow = match self.handle_action(&mut action, &mut outcome) {
            Ok(flow) => flow,
            Err(err) => return self.reject(err),
        };
        debug!("player {} applied {}", action.player_index, action);
        self.actions.push(action);
        self.settle(flow, &mut outcome);
        Ok(outcome)
    }

    /// Moves `player` by `steps` and resolves the landing tile, as a roll
    /// would. Used for scripted play, so it obeys the same turn rules.
    pub fn move_player(&mut self, player: usize, steps: usize) -> Result<StepOutcome, GameError> {
        if let Err(err) = self.validate_action(&GameAction::new(player, ActionType::RollDice)) {
            return self.reject(err);
        }
        let prompt = self.current_prompt();
        if prompt != ActionPrompt::Roll {
            return self.reject(GameError::InvalidPrompt {
                prompt,
                action: ActionType::RollDice,
            });
        }
        let mut outcome = StepOutcome::empty();
        let flow = self.move_by(player, steps, &mut outcome);
        self.settle(flow, &mut outcome);
        Ok(outcome)
    }

    /// Eliminates every player at or below zero, scanning from the highest
    /// index so removals never shift an index still to be visited.
    pub fn check_eliminations(&mut self) -> StepOutcome {
        let mut outcome = StepOutcome::empty();
        let was_running = self.is_running();
        self.run_eliminations(&mut outcome);
        self.finish_outcome(was_running, &mut outcome);
        self.refresh_available_actions();
        outcome
    }

    pub fn eliminate_player(&mut self, index: usize, reason: &str) -> Result<StepOutcome, GameError> {
        if index >= self.players.len() {
            return self.reject(GameError::InvalidPlayer(index));
        }
        let mut outcome = StepOutcome::empty();
        let was_running = self.is_running();
        self.eliminate(index, reason, &mut outcome);
        self.finish_outcome(was_running, &mut outcome);
        self.refresh_available_actions();
        Ok(outcome)
    }

    fn validate_action(&self, action: &GameAction) -> Result<(), GameError> {
        if !self.is_running() {
            return Err(GameError::GameNotRunning);
        }
        if action.player_index >= self.players.len() {
            return Err(GameError::InvalidPlayer(action.player_index));
        }
        if action.player_index != self.current_player {
            return Err(GameError::ActionOutOfTurn {
                expected: self.current_player,
                actual: action.player_index,
            });
        }
        Ok(())
    }

    fn handle_action(
        &mut self,
        action: &mut GameAction,
        outcome: &mut StepOutcome,
    ) -> Result<TurnFlow, GameError> {
        let prompt = self.current_prompt();
        match (prompt, action.action_type) {
            (ActionPrompt::Roll, ActionType::RollDice) => self.handle_roll(action, outcome),
            (ActionPrompt::AnswerQuestion, ActionType::AnswerQuestion) => {
                self.handle_answer(action, outcome)
            }
            (ActionPrompt::ConfirmCard, ActionType::ConfirmCard) => {
                self.handle_card_confirm(action.player_index, outcome)
            }
            (ActionPrompt::JailChoice, ActionType::PayJail) => {
                self.handle_pay_jail(action.player_index, outcome)
            }
            (ActionPrompt::JailChoice, ActionType::RollForJail) => {
                self.handle_roll_for_jail(action.player_index)
            }
            (ActionPrompt::JailChoice, ActionType::UseJailCard) => {
                self.handle_use_jail_card(action.player_index, outcome)
            }
            (ActionPrompt::ChooseParking, ActionType::SelectParking) => {
                self.handle_parking(action, outcome)
            }
            _ => Err(GameError::InvalidPrompt {
                prompt,
                action: action.action_type,
            }),
        }
    }

    fn handle_roll(
        &mut self,
        action: &mut GameAction,
        outcome: &mut StepOutcome,
    ) -> Result<TurnFlow, GameError> {
        let value = match action.payload {
            ActionPayload::Dice(value) => value.clamp(1, 6),
            ActionPayload::None => self.roll_die(),
            _ => return Err(GameError::InvalidPayload("expected die value or nothing")),
        };
        action.payload = ActionPayload::Dice(value);
        let player = action.player_index;
        self.last_roll = Some(value);
        outcome.events.push(GameEvent::DiceRolled { player, value });

        if self.jail.is_jailed(player) {
            return Ok(self.jail_roll(player, value, outcome));
        }
        let name = self.players[player].name.clone();
        self.push_log(format!("{name} rolled {value}."));
        Ok(self.move_by(player, value as usize, outcome))
    }

    fn roll_die(&mut self) -> u8 {
        self.rng.gen_range(1..=6)
    }

    /// Ordinary movement: the start bonus is paid whenever the unwrapped
    /// position reaches the board size, before the landing tile resolves.
    pub(crate) fn move_by(
        &mut self,
        player: usize,
        steps: usize,
        outcome: &mut StepOutcome,
    ) -> TurnFlow {
        let size = self.board.len();
        let from = self.players[player].position;
        let to = (from + steps) % size;
        self.players[player].position = to;
        outcome.events.push(GameEvent::PlayerMoved { player, from, to });
        if from + steps >= size {
            self.pay_start_bonus(player, outcome);
        }
        self.resolve_tile(player, outcome)
    }

    pub(crate) fn pay_start_bonus(&mut self, player: usize, outcome: &mut StepOutcome) {
        let bonus = self.config.start_pass_bonus;
        self.adjust_score(player, bonus, outcome);
        outcome.events.push(GameEvent::PassedStart { player, bonus });
        let name = self.players[player].name.clone();
        self.push_log(format!("{name} passed START, +{bonus} points."));
    }

    pub(crate) fn adjust_score(&mut self, player: usize, delta: i64, outcome: &mut StepOutcome) {
        if delta == 0 {
            return;
        }
        let Some(state) = self.players.get_mut(player) else {
            return;
        };
        state.adjust_score(delta);
        outcome.events.push(GameEvent::ScoreChanged {
            player,
            delta,
            score: state.score,
        });
    }

    /// Runs eliminations, then hands the turn over when the command finished it.
    fn settle(&mut self, flow: TurnFlow, outcome: &mut StepOutcome) {
        let was_running = self.is_running();
        self.run_eliminations(outcome);
        if self.is_running() && flow == TurnFlow::Advance {
            self.advance_turn(outcome);
        }
        self.finish_outcome(was_running, outcome);
        self.refresh_available_actions();
    }

    fn finish_outcome(&mut self, was_running: bool, outcome: &mut StepOutcome) {
        if let GamePhase::Ended { winner } = self.phase {
            outcome.done = true;
            if was_running {
                outcome.events.push(GameEvent::GameEnded { winner });
                self.announce_end(winner);
            }
        }
    }

    fn announce_end(&mut self, winner: Option<PlayerId>) {
        let name = winner
            .and_then(|id| self.players.index_of(id))
            .map(|idx| self.players[idx].name.clone());
        match name {
            Some(name) => {
                info!("game over after {} turns, {name} wins", self.turn);
                self.push_log(format!("GAME OVER! {name} is the last player standing."));
                self.set_status(format!("{name} WINS!"));
            }
            None => {
                info!("game over after {} turns, no players left", self.turn);
                self.push_log("GAME OVER! Every player has been eliminated.");
                self.set_status("All players are gone. The game is over.");
            }
        }
    }

    fn run_eliminations(&mut self, outcome: &mut StepOutcome) {
        if matches!(self.phase, GamePhase::NotStarted) {
            return;
        }
        for idx in (0..self.players.len()).rev() {
            if self.players.get(idx).is_some_and(PlayerState::is_bankrupt) {
                self.eliminate(idx, "score reached zero", outcome);
            }
        }
    }

    /// Removes a player. Ledger and jail are renumbered before the registry
    /// splice so their entries keep pointing at the same people.
    fn eliminate(&mut self, index: usize, reason: &str, outcome: &mut StepOutcome) {
        if index >= self.players.len() {
            return;
        }
        self.ownership.reindex_on_removal(index);
        self.jail.reindex_on_removal(index);
        let Some(removed) = self.players.remove(index) else {
            return;
        };
        let running = self.is_running();
        let held_turn = running && index == self.current_player;

        info!("{} eliminated ({reason})", removed.name);
        self.push_log(format!("{} was eliminated ({reason}).", removed.name));
        self.set_status(format!("{} was eliminated from the game.", removed.name));
        outcome.events.push(GameEvent::PlayerEliminated {
            player: removed.id,
            reason: reason.to_string(),
        });

        if self.players.is_empty() {
            self.current_player = 0;
            self.turn_phase = TurnPhase::AwaitingRoll;
            if !matches!(self.phase, GamePhase::NotStarted) {
                self.phase = GamePhase::Ended { winner: None };
            }
            return;
        }
        if self.current_player >= self.players.len() {
            self.current_player %= self.players.len();
        }
        if running && self.players.len() == 1 {
            self.end_with_winner();
        } else if held_turn {
            // The seat now under the pointer starts fresh, without the
            // removed player's pending interaction.
            self.present_turn();
        }
    }

    fn end_with_winner(&mut self) {
        let winner = self.players.get(0).map(|p| p.id);
        self.phase = GamePhase::Ended { winner };
        self.turn_phase = TurnPhase::AwaitingRoll;
        self.current_player = 0;
    }

    fn advance_turn(&mut self, outcome: &mut StepOutcome) {
        if !self.is_running() || self.players.is_empty() {
            return;
        }
        if self.players.len() == 1 {
            self.end_with_winner();
            return;
        }
        self.current_player = (self.current_player + 1) % self.players.len();
        self.turn += 1;
        outcome.events.push(GameEvent::TurnAdvanced {
            next_player: self.current_player,
        });
        self.present_turn();
        debug!("turn {} -> player {}", self.turn, self.current_player);
    }

    /// Offers the player under the pointer a roll, or the jail choice.
    fn present_turn(&mut self) {
        let Some(name) = self.current().map(|p| p.name.clone()) else {
            return;
        };
        if self.jail.is_jailed(self.current_player) {
            self.turn_phase = TurnPhase::Pending(PendingInteraction::JailChoice);
            self.push_log(format!("{name} is still in JAIL. Pay or roll."));
            self.set_status(format!(
                "{name} is in JAIL! Pay {} points or roll for a 6.",
                self.config.jail_payment_cost
            ));
        } else {
            self.turn_phase = TurnPhase::AwaitingRoll;
            self.set_status(format!("{name}'s turn to roll."));
        }
    }

    pub(crate) fn push_log(&mut self, message: impl Into<String>) {
        let message = message.into();
        debug!("log: {message}");
        self.log.push(LogEntry {
            at: Utc::now(),
            turn: self.turn,
            message,
        });
    }

    pub(crate) fn set_status(&mut self, message: impl Into<String>) {
        self.status = message.into();
    }

    fn reject<T>(&mut self, err: GameError) -> Result<T, GameError> {
        warn!("rejected command: {err}");
        self.set_status(err.to_string());
        self.refresh_available_actions();
        Err(err)
    }
}

impl GameState {
    pub fn legal_actions(&self) -> &[GameAction] {
        &self.available_actions
    }

    fn refresh_available_actions(&mut self) {
        self.available_actions = self.compute_available_actions();
    }

    fn compute_available_actions(&self) -> Vec<GameAction> {
        if !self.is_running() {
            return Vec::new();
        }
        let player = self.current_player;
        let Some(state) = self.players.get(player) else {
            return Vec::new();
        };
        match &self.turn_phase {
            TurnPhase::AwaitingRoll => vec![GameAction::new(player, ActionType::RollDice)],
            TurnPhase::Pending(PendingInteraction::Question { question, .. }) => (0..question
                .choices
                .len())
                .map(|choice| {
                    GameAction::new(player, ActionType::AnswerQuestion)
                        .with_payload(ActionPayload::Choice(choice))
                })
                .collect(),
            TurnPhase::Pending(PendingInteraction::Card { .. }) => {
                vec![GameAction::new(player, ActionType::ConfirmCard)]
            }
            TurnPhase::Pending(PendingInteraction::JailChoice) => {
                let mut actions = Vec::with_capacity(3);
                if state.score >= self.config.jail_payment_cost {
                    actions.push(GameAction::new(player, ActionType::PayJail));
                }
                actions.push(GameAction::new(player, ActionType::RollForJail));
                if state.has_jail_skip_card {
                    actions.push(GameAction::new(player, ActionType::UseJailCard));
                }
                actions
            }
            TurnPhase::Pending(PendingInteraction::Parking { destinations }) => destinations
                .iter()
                .map(|tile| {
                    GameAction::new(player, ActionType::SelectParking)
                        .with_payload(ActionPayload::Tile(*tile))
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TileKind;

    fn running(players: usize) -> GameState {
        let config = GameConfig {
            initial_players: players,
            seed: 7,
            ..GameConfig::default()
        };
        let mut state = GameState::new(config).expect("valid config");
        state.start_game().expect("start");
        state
    }

    #[test]
    fn default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
        let bad = GameConfig {
            min_players: 5,
            max_players: 3,
            ..GameConfig::default()
        };
        assert!(matches!(bad.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn config_parses_partial_json() {
        let config = GameConfig::from_json_str(r#"{"seed": 9, "fine_amount": 40}"#).expect("parse");
        assert_eq!(config.seed, 9);
        assert_eq!(config.fine_amount, 40);
        assert_eq!(config.starting_points, 1000);
        assert!(matches!(
            GameConfig::from_json_str(r#"{"board_size": 30}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            GameConfig::from_json_str("{not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn lobby_limits_are_enforced() {
        let mut state = GameState::new(GameConfig::default()).expect("state");
        for _ in 4..8 {
            state.add_player().expect("room left");
        }
        assert_eq!(state.add_player(), Err(GameError::TooManyPlayers { max: 8 }));
        assert_eq!(state.status(), "at most 8 players may join");
        for _ in 2..8 {
            state.remove_last_player().expect("above min");
        }
        assert_eq!(
            state.remove_last_player(),
            Err(GameError::TooFewPlayers { min: 2 })
        );
        assert_eq!(state.players.len(), 2);
    }

    #[test]
    fn start_rejected_while_running() {
        let mut state = running(2);
        assert!(matches!(state.start_game(), Err(GameError::GameInProgress)));
        assert_eq!(state.add_player(), Err(GameError::GameInProgress));
        assert_eq!(state.remove_player(0), Err(GameError::GameInProgress));
    }

    #[test]
    fn roll_moves_and_resolves() {
        let mut state = running(2);
        let action = GameAction::new(0, ActionType::RollDice).with_payload(ActionPayload::Dice(1));
        state.step(action).expect("roll");
        assert_eq!(state.players[0].position, 1);
        assert_eq!(state.last_roll, Some(1));
        assert_eq!(state.current_prompt(), ActionPrompt::AnswerQuestion);
        assert_eq!(state.legal_actions().len(), 4);
    }

    #[test]
    fn dice_payload_is_clamped() {
        let mut state = running(2);
        let action = GameAction::new(0, ActionType::RollDice).with_payload(ActionPayload::Dice(9));
        state.step(action).expect("roll");
        assert_eq!(state.players[0].position, 6);
        assert_eq!(state.board.tile(6).map(|t| t.kind), Some(TileKind::Jail));
        assert!(state.jail.is_jailed(0));
        assert_eq!(state.current_prompt(), ActionPrompt::JailChoice);
    }

    #[test]
    fn out_of_turn_and_wrong_prompt_leave_state_alone() {
        let mut state = running(3);
        let err = state
            .step(GameAction::new(1, ActionType::RollDice))
            .expect_err("not their turn");
        assert_eq!(err, GameError::ActionOutOfTurn { expected: 0, actual: 1 });
        let err = state
            .step(GameAction::new(0, ActionType::ConfirmCard))
            .expect_err("nothing to confirm");
        assert!(matches!(err, GameError::InvalidPrompt { .. }));
        assert_eq!(state.players[0].position, 0);
        assert_eq!(state.current_player, 0);
        assert_eq!(state.status(), err.to_string());
    }

    #[test]
    fn commands_rejected_before_start() {
        let mut state = GameState::new(GameConfig::default()).expect("state");
        let err = state
            .step(GameAction::new(0, ActionType::RollDice))
            .expect_err("lobby");
        assert_eq!(err, GameError::GameNotRunning);
        assert!(state.legal_actions().is_empty());
    }

    #[test]
    fn removing_an_earlier_seat_leaves_pointer_in_place() {
        let mut state = running(4);
        state.current_player = 2;
        state.eliminate_player(0, "test").expect("valid index");
        assert_eq!(state.current_player, 2);
        assert_eq!(state.players[2].name, "Player 4");
    }

    #[test]
    fn removing_current_seat_hands_slot_to_successor_without_a_turn() {
        let mut state = running(4);
        state.current_player = 1;
        let turn = state.turn;
        let outcome = state.eliminate_player(1, "test").expect("valid index");
        assert_eq!(state.current_player, 1);
        assert_eq!(state.players[1].name, "Player 3");
        assert_eq!(state.turn, turn);
        assert!(!outcome
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::TurnAdvanced { .. })));
        assert_eq!(state.current_prompt(), ActionPrompt::Roll);
    }

    #[test]
    fn move_player_obeys_turn_rules() {
        let mut state = running(2);
        let err = state.move_player(1, 1).expect_err("not their turn");
        assert_eq!(err, GameError::ActionOutOfTurn { expected: 0, actual: 1 });
        assert_eq!(state.players[1].position, 0);
        assert_eq!(state.current_prompt(), ActionPrompt::Roll);

        state.move_player(0, 1).expect("turn holder may move");
        assert_eq!(state.current_prompt(), ActionPrompt::AnswerQuestion);
        let pending = state.pending().cloned();
        let err = state.move_player(0, 1).expect_err("question outstanding");
        assert!(matches!(err, GameError::InvalidPrompt { .. }));
        assert_eq!(state.players[0].position, 1);
        assert_eq!(state.pending().cloned(), pending);
    }

    #[test]
    fn removing_last_seat_while_current_wraps() {
        let mut state = running(3);
        state.current_player = 2;
        state.eliminate_player(2, "test").expect("valid index");
        assert_eq!(state.current_player, 0);
        assert!(state.is_running());
    }

    #[test]
    fn reset_returns_to_lobby() {
        let mut state = running(3);
        state.ownership.assign(1, 2);
        state.players[1].score = 10;
        state.reset_game();
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert!(state.ownership.is_empty());
        assert_eq!(state.players[1].score, 1000);
        assert_eq!(state.question_bank().used_count(), 0);
        assert_eq!(state.current_prompt(), ActionPrompt::Lobby);
    }

    #[test]
    fn city_price_follows_city_order() {
        let state = running(2);
        assert_eq!(state.city_price(1), Some(100));
        assert_eq!(state.city_price(2), Some(120));
        assert_eq!(state.city_price(0), None);
        assert_eq!(state.city_price(23), Some(400));
    }
}

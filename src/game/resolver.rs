//! Tile, card, jail and parking effects applied on top of [`GameState`].

use log::debug;

use crate::{
    board::TileIndex,
    types::{CommunityMode, DeckKind, TileKind},
};

use super::{
    action::{ActionPayload, GameAction},
    cards::CardEffect,
    jail::JailRollOutcome,
    state::{
        GameError, GameEvent, GameState, PendingInteraction, QuestionContext, StepOutcome,
        TurnFlow, TurnPhase,
    },
};

const JAIL_ESCAPE_ROLL: u8 = 6;

impl GameState {
    pub(super) fn resolve_tile(&mut self, player: usize, outcome: &mut StepOutcome) -> TurnFlow {
        let position = self.players[player].position;
        let Some(tile) = self.board.tile(position).copied() else {
            return TurnFlow::Advance;
        };
        let name = self.players[player].name.clone();
        debug!("{name} resolves {tile}");

        match tile.kind {
            TileKind::Start => {
                self.push_log(format!("{name} rests on START."));
                TurnFlow::Advance
            }
            TileKind::City => match self.ownership.owner_of(position) {
                None => {
                    let price = self.prices.price_of(tile.name).unwrap_or_default();
                    self.push_log(format!(
                        "{name} landed on {} (price {price}). Answer to claim it!",
                        tile.name
                    ));
                    self.pose_question(
                        player,
                        QuestionContext::Buy {
                            tile: position,
                            city: tile.name,
                            price,
                        },
                        outcome,
                    )
                }
                Some(owner) if owner == player => {
                    self.push_log(format!("{name} visits their own city {}.", tile.name));
                    self.set_status(format!("{} already belongs to {name}.", tile.name));
                    TurnFlow::Advance
                }
                Some(owner) => {
                    let owner_name = self.players[owner].name.clone();
                    self.push_log(format!(
                        "{name} landed on {owner_name}'s city {}. Answer or pay a fine!",
                        tile.name
                    ));
                    self.pose_question(
                        player,
                        QuestionContext::Fine {
                            tile: position,
                            city: tile.name,
                            owner,
                        },
                        outcome,
                    )
                }
            },
            TileKind::Community if self.config.community_mode == CommunityMode::Questions => {
                self.push_log(format!("{name} landed on {}. Trivia time!", tile.name));
                self.pose_question(player, QuestionContext::Trivia, outcome)
            }
            TileKind::Opportunity => self.reveal_card(player, DeckKind::Opportunity, outcome),
            TileKind::Community => self.reveal_card(player, DeckKind::Community, outcome),
            TileKind::Jail => {
                if self.jail.imprison(player) {
                    outcome.events.push(GameEvent::Jailed { player });
                    self.push_log(format!("{name} landed in JAIL."));
                } else {
                    self.push_log(format!("{name} is still serving time."));
                }
                self.set_status(format!(
                    "{name} is in JAIL! Pay {} points or roll for a 6.",
                    self.config.jail_payment_cost
                ));
                self.turn_phase = TurnPhase::Pending(PendingInteraction::JailChoice);
                TurnFlow::Hold
            }
            TileKind::FreeParking => {
                let destinations = self.board.parking_destinations();
                self.push_log(format!("{name} may park anywhere."));
                self.set_status(format!("{name}, pick a destination tile."));
                self.turn_phase = TurnPhase::Pending(PendingInteraction::Parking { destinations });
                TurnFlow::Hold
            }
        }
    }

    fn pose_question(
        &mut self,
        player: usize,
        context: QuestionContext,
        outcome: &mut StepOutcome,
    ) -> TurnFlow {
        let draw = self.questions.draw(&mut self.rng);
        if draw.recycled {
            outcome.events.push(GameEvent::QuestionPoolRecycled);
            self.push_log("Every question has been asked; the pool starts over.");
        }
        outcome.events.push(GameEvent::QuestionPosed {
            player,
            question_id: draw.question.id,
            kind: context.kind(),
        });
        self.set_status(draw.question.prompt);
        self.turn_phase = TurnPhase::Pending(PendingInteraction::Question {
            question: draw.question,
            context,
        });
        TurnFlow::Hold
    }

    fn reveal_card(&mut self, player: usize, deck: DeckKind, outcome: &mut StepOutcome) -> TurnFlow {
        let card = self.decks.get_mut(deck).draw(&mut self.rng);
        outcome.events.push(GameEvent::CardDrawn {
            player,
            deck,
            card_id: card.id,
        });
        let name = self.players[player].name.clone();
        self.push_log(format!("{name} drew a {deck} card: {card}"));
        self.set_status(format!("{deck}: {card}"));
        self.turn_phase = TurnPhase::Pending(PendingInteraction::Card { deck, card });
        TurnFlow::Hold
    }

    pub(super) fn handle_answer(
        &mut self,
        action: &mut GameAction,
        outcome: &mut StepOutcome,
    ) -> Result<TurnFlow, GameError> {
        let choice = match action.payload {
            ActionPayload::Choice(choice) => choice,
            _ => return Err(GameError::InvalidPayload("expected answer choice")),
        };
        let (question, context) = match &self.turn_phase {
            TurnPhase::Pending(PendingInteraction::Question { question, context }) => {
                (*question, context.clone())
            }
            _ => return Err(GameError::GameNotRunning),
        };
        if choice >= question.choices.len() {
            return Err(GameError::InvalidChoice(choice));
        }

        let player = action.player_index;
        let correct = question.is_correct(choice);
        let name = self.players[player].name.clone();
        self.turn_phase = TurnPhase::AwaitingRoll;
        outcome.events.push(GameEvent::QuestionAnswered {
            player,
            question_id: question.id,
            correct,
        });

        match context {
            QuestionContext::Buy { tile, city, .. } => {
                if correct {
                    self.ownership.assign(tile, player);
                    outcome.events.push(GameEvent::CityAcquired { player, tile });
                    self.push_log(format!("{name} answered correctly and claims {city} for free!"));
                    self.set_status(format!("{name} now owns {city}."));
                } else {
                    let penalty = self.config.wrong_purchase_penalty;
                    self.adjust_score(player, -penalty, outcome);
                    self.push_log(format!(
                        "{name} answered wrong while buying {city}. -{penalty} points."
                    ));
                    self.set_status(format!(
                        "Wrong answer! The correct one was \"{}\".",
                        question.correct_choice()
                    ));
                }
            }
            QuestionContext::Fine { city, .. } => {
                if correct {
                    self.push_log(format!("{name} answered correctly, no fine at {city}."));
                    self.set_status("Correct! No fine this time.");
                } else {
                    let fine = self.config.fine_amount;
                    self.adjust_score(player, -fine, outcome);
                    self.push_log(format!("{name} answered wrong and pays a {fine} point fine at {city}."));
                    self.set_status(format!("Wrong answer! Fined {fine} points."));
                }
            }
            QuestionContext::Trivia => {
                if correct {
                    let bonus = self.config.correct_answer_bonus + self.config.community_question_bonus;
                    self.adjust_score(player, bonus, outcome);
                    self.push_log(format!("{name} answered correctly! +{bonus} points."));
                    self.set_status(format!("Correct! {name} earns {bonus} points."));
                } else {
                    let penalty = self.config.wrong_answer_penalty;
                    self.adjust_score(player, -penalty, outcome);
                    self.push_log(format!("{name} answered wrong. -{penalty} points."));
                    self.set_status(format!("Wrong answer! {name} loses {penalty} points."));
                }
            }
        }
        Ok(TurnFlow::Advance)
    }

    pub(super) fn handle_card_confirm(
        &mut self,
        player: usize,
        outcome: &mut StepOutcome,
    ) -> Result<TurnFlow, GameError> {
        let card = match &self.turn_phase {
            TurnPhase::Pending(PendingInteraction::Card { card, .. }) => *card,
            _ => return Err(GameError::GameNotRunning),
        };
        self.turn_phase = TurnPhase::AwaitingRoll;
        let name = self.players[player].name.clone();

        match card.effect {
            CardEffect::Points(delta) => {
                self.adjust_score(player, delta, outcome);
            }
            CardEffect::Move(steps) => {
                self.card_move(player, steps, outcome);
            }
            CardEffect::GoTo {
                target,
                bonus,
                on_wrap_only,
            } => {
                let from = self.players[player].position;
                self.teleport(player, target, outcome);
                if !on_wrap_only || from > target {
                    self.adjust_score(player, bonus, outcome);
                }
            }
            CardEffect::GrantImmunity => {
                self.players[player].has_immunity_card = true;
            }
            CardEffect::GrantJailSkip => {
                self.players[player].has_jail_skip_card = true;
            }
            CardEffect::SendToJail => {
                let jail = self.board.jail_tile();
                self.teleport(player, jail, outcome);
                self.jail.force_imprison(player);
                outcome.events.push(GameEvent::Jailed { player });
            }
            CardEffect::CollectFromEach(amount) => {
                let payers: Vec<usize> = self
                    .players
                    .iter()
                    .enumerate()
                    .filter(|(idx, p)| *idx != player && p.score >= amount)
                    .map(|(idx, _)| idx)
                    .collect();
                for payer in &payers {
                    self.adjust_score(*payer, -amount, outcome);
                }
                let total = amount * payers.len() as i64;
                self.adjust_score(player, total, outcome);
                self.push_log(format!("{name} collects {total} points from the other players."));
            }
        }
        self.push_log(format!("{name}: {card}"));
        Ok(TurnFlow::Advance)
    }

    /// Relative card move. Crossing START pays the ordinary bonus but the
    /// landing tile is not resolved.
    fn card_move(&mut self, player: usize, steps: i32, outcome: &mut StepOutcome) {
        let size = self.board.len() as i64;
        let from = self.players[player].position;
        let unwrapped = from as i64 + i64::from(steps);
        let to = unwrapped.rem_euclid(size) as TileIndex;
        self.teleport(player, to, outcome);
        if unwrapped >= size {
            self.pay_start_bonus(player, outcome);
        }
    }

    fn teleport(&mut self, player: usize, to: TileIndex, outcome: &mut StepOutcome) {
        let from = self.players[player].position;
        self.players[player].position = to;
        outcome.events.push(GameEvent::PlayerMoved { player, from, to });
    }

    /// A roll made from inside jail. Only a six gets out early.
    pub(super) fn jail_roll(&mut self, player: usize, value: u8, outcome: &mut StepOutcome) -> TurnFlow {
        let name = self.players[player].name.clone();
        if value == JAIL_ESCAPE_ROLL {
            self.jail.release(player);
            outcome.events.push(GameEvent::ReleasedFromJail { player });
            self.push_log(format!("{name} rolled a {value} and breaks out of JAIL!"));
            return self.move_by(player, usize::from(value), outcome);
        }
        match self.jail.record_failed_roll(player, self.config.max_jail_turns) {
            JailRollOutcome::ForcedRelease => {
                outcome.events.push(GameEvent::ReleasedFromJail { player });
                self.push_log(format!(
                    "{name} rolled {value}. Served {} turns and is released.",
                    self.config.max_jail_turns
                ));
                self.set_status(format!("{name} has served their time."));
            }
            JailRollOutcome::StillJailed { turns_in_jail } => {
                self.push_log(format!(
                    "{name} rolled {value} and stays in JAIL ({turns_in_jail}/{}).",
                    self.config.max_jail_turns
                ));
                self.set_status(format!("{name} needed a 6 and stays in JAIL."));
            }
        }
        TurnFlow::Advance
    }

    pub(super) fn handle_pay_jail(
        &mut self,
        player: usize,
        outcome: &mut StepOutcome,
    ) -> Result<TurnFlow, GameError> {
        let cost = self.config.jail_payment_cost;
        let available = self.players[player].score;
        if available < cost {
            return Err(GameError::InsufficientFunds {
                needed: cost,
                available,
            });
        }
        self.adjust_score(player, -cost, outcome);
        self.release_from_jail(player, outcome);
        let name = self.players[player].name.clone();
        self.push_log(format!("{name} paid {cost} points to leave JAIL."));
        self.set_status(format!("{name} is free."));
        Ok(TurnFlow::Advance)
    }

    pub(super) fn handle_roll_for_jail(&mut self, player: usize) -> Result<TurnFlow, GameError> {
        self.turn_phase = TurnPhase::AwaitingRoll;
        let name = self.players[player].name.clone();
        self.push_log(format!("{name} tries to roll a 6."));
        self.set_status(format!("{name}, roll the die. Only a 6 gets you out."));
        Ok(TurnFlow::Hold)
    }

    pub(super) fn handle_use_jail_card(
        &mut self,
        player: usize,
        outcome: &mut StepOutcome,
    ) -> Result<TurnFlow, GameError> {
        if !self.players[player].has_jail_skip_card {
            return Err(GameError::NoJailCard);
        }
        self.players[player].has_jail_skip_card = false;
        self.release_from_jail(player, outcome);
        let name = self.players[player].name.clone();
        self.push_log(format!("{name} used a get-out-of-jail card."));
        self.set_status(format!("{name} is free."));
        Ok(TurnFlow::Advance)
    }

    fn release_from_jail(&mut self, player: usize, outcome: &mut StepOutcome) {
        self.jail.release(player);
        self.turn_phase = TurnPhase::AwaitingRoll;
        outcome.events.push(GameEvent::ReleasedFromJail { player });
    }

    pub(super) fn handle_parking(
        &mut self,
        action: &mut GameAction,
        outcome: &mut StepOutcome,
    ) -> Result<TurnFlow, GameError> {
        let target = match action.payload {
            ActionPayload::Tile(tile) => tile,
            _ => return Err(GameError::InvalidPayload("expected destination tile")),
        };
        let allowed = match &self.turn_phase {
            TurnPhase::Pending(PendingInteraction::Parking { destinations }) => {
                destinations.contains(&target)
            }
            _ => false,
        };
        if !allowed {
            return Err(GameError::InvalidDestination(target));
        }
        let player = action.player_index;
        self.turn_phase = TurnPhase::AwaitingRoll;
        self.teleport(player, target, outcome);
        let name = self.players[player].name.clone();
        let tile_name = self.board.tile(target).map(|t| t.name).unwrap_or("?");
        self.push_log(format!("{name} parks at {tile_name}."));
        Ok(TurnFlow::Advance)
    }
}

#[cfg(test)]
mod tests {
    use crate::game::{
        action::{ActionPayload, GameAction},
        cards::{Card, CardEffect},
        state::{GameConfig, GameError, GameState, PendingInteraction, TurnPhase},
    };
    use crate::types::{ActionPrompt, ActionType, CommunityMode, DeckKind};

    fn running(players: usize) -> GameState {
        let config = GameConfig {
            initial_players: players,
            seed: 21,
            ..GameConfig::default()
        };
        let mut state = GameState::new(config).expect("valid config");
        state.start_game().expect("start");
        state
    }

    fn roll(state: &mut GameState, value: u8) {
        let player = state.current_player;
        state
            .step(GameAction::new(player, ActionType::RollDice).with_payload(ActionPayload::Dice(value)))
            .expect("roll accepted");
    }

    fn with_card(state: &mut GameState, effect: CardEffect) {
        state.turn_phase = TurnPhase::Pending(PendingInteraction::Card {
            deck: DeckKind::Opportunity,
            card: Card {
                id: 99,
                text: "test card",
                effect,
            },
        });
    }

    fn confirm(state: &mut GameState) {
        let player = state.current_player;
        state
            .step(GameAction::new(player, ActionType::ConfirmCard))
            .expect("confirm accepted");
    }

    fn answer_index(state: &GameState) -> usize {
        match state.pending() {
            Some(PendingInteraction::Question { question, .. }) => question.answer,
            other => panic!("expected a question, got {other:?}"),
        }
    }

    fn answer(state: &mut GameState, choice: usize) {
        let player = state.current_player;
        state
            .step(
                GameAction::new(player, ActionType::AnswerQuestion)
                    .with_payload(ActionPayload::Choice(choice)),
            )
            .expect("answer accepted");
    }

    #[test]
    fn correct_buy_answer_grants_city_free() {
        let mut state = running(2);
        roll(&mut state, 1);
        let right = answer_index(&state);
        answer(&mut state, right);
        assert_eq!(state.ownership.owner_of(1), Some(0));
        assert_eq!(state.players[0].score, 1000);
        assert_eq!(state.current_player, 1);
    }

    #[test]
    fn wrong_buy_answer_costs_penalty() {
        let mut state = running(2);
        roll(&mut state, 2);
        let wrong = (answer_index(&state) + 1) % 4;
        answer(&mut state, wrong);
        assert_eq!(state.ownership.owner_of(2), None);
        assert_eq!(state.players[0].score, 950);
    }

    #[test]
    fn wrong_answer_on_foreign_city_pays_fine_to_nobody() {
        let mut state = running(2);
        state.ownership.assign(4, 1);
        roll(&mut state, 4);
        assert!(matches!(
            state.pending(),
            Some(PendingInteraction::Question { .. })
        ));
        let wrong = (answer_index(&state) + 1) % 4;
        answer(&mut state, wrong);
        assert_eq!(state.players[0].score, 900);
        assert_eq!(state.players[1].score, 1000);
    }

    #[test]
    fn own_city_is_a_no_op() {
        let mut state = running(2);
        state.ownership.assign(5, 0);
        roll(&mut state, 5);
        assert_eq!(state.current_player, 1);
        assert_eq!(state.current_prompt(), ActionPrompt::Roll);
        assert_eq!(state.players[0].score, 1000);
    }

    #[test]
    fn out_of_range_choice_is_rejected() {
        let mut state = running(2);
        roll(&mut state, 1);
        let err = state
            .step(
                GameAction::new(0, ActionType::AnswerQuestion).with_payload(ActionPayload::Choice(4)),
            )
            .expect_err("only four choices");
        assert_eq!(err, GameError::InvalidChoice(4));
        assert_eq!(state.current_prompt(), ActionPrompt::AnswerQuestion);
    }

    #[test]
    fn opportunity_tile_reveals_card_then_advances() {
        let mut state = running(2);
        roll(&mut state, 3);
        assert_eq!(state.current_prompt(), ActionPrompt::ConfirmCard);
        confirm(&mut state);
        assert_eq!(state.current_player, 1);
    }

    #[test]
    fn relative_card_move_pays_bonus_without_resolving() {
        let mut state = running(2);
        state.players[0].position = 21;
        with_card(&mut state, CardEffect::Move(3));
        confirm(&mut state);
        assert_eq!(state.players[0].position, 0);
        assert_eq!(state.players[0].score, 1050);
        assert_eq!(state.current_player, 1);
    }

    #[test]
    fn go_to_on_wrap_only_pays_when_old_is_past_target() {
        let mut state = running(2);
        let card = CardEffect::GoTo {
            target: 11,
            bonus: 20,
            on_wrap_only: true,
        };
        state.players[0].position = 15;
        with_card(&mut state, card);
        confirm(&mut state);
        assert_eq!(state.players[0].position, 11);
        assert_eq!(state.players[0].score, 1020);

        state.players[1].position = 3;
        with_card(&mut state, card);
        confirm(&mut state);
        assert_eq!(state.players[1].position, 11);
        assert_eq!(state.players[1].score, 1000);
    }

    #[test]
    fn go_to_without_wrap_flag_always_pays() {
        let mut state = running(2);
        let card = CardEffect::GoTo {
            target: 0,
            bonus: 50,
            on_wrap_only: false,
        };
        state.players[0].position = 15;
        with_card(&mut state, card);
        confirm(&mut state);
        assert_eq!(state.players[0].position, 0);
        assert_eq!(state.players[0].score, 1050);

        let card = CardEffect::GoTo {
            target: 11,
            bonus: 20,
            on_wrap_only: false,
        };
        state.players[1].position = 3;
        with_card(&mut state, card);
        confirm(&mut state);
        assert_eq!(state.players[1].position, 11);
        assert_eq!(state.players[1].score, 1020);
    }

    #[test]
    fn busting_on_own_answer_passes_turn_by_index() {
        let mut state = running(3);
        state.current_player = 1;
        state.players[1].score = 50;
        roll(&mut state, 1);
        let wrong = (answer_index(&state) + 1) % 4;
        answer(&mut state, wrong);

        let names: Vec<&str> = state.players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Player 1", "Player 3"]);
        assert_eq!(state.current_player, 0);
        assert_eq!(state.current().map(|p| p.name.as_str()), Some("Player 1"));
    }

    #[test]
    fn earlier_seat_busted_by_collect_card_shifts_next_player() {
        let mut state = running(4);
        state.current_player = 2;
        state.players[0].score = 5;
        with_card(&mut state, CardEffect::CollectFromEach(5));
        confirm(&mut state);

        let names: Vec<&str> = state.players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Player 2", "Player 3", "Player 4"]);
        assert_eq!(state.current_player, 0);
        assert_eq!(state.current().map(|p| p.name.as_str()), Some("Player 2"));
    }

    #[test]
    fn send_to_jail_forces_fresh_sentence() {
        let mut state = running(2);
        state.players[0].position = 9;
        with_card(&mut state, CardEffect::SendToJail);
        confirm(&mut state);
        assert_eq!(state.players[0].position, 6);
        assert!(state.jail.is_jailed(0));
        roll(&mut state, 1);
        let right = answer_index(&state);
        answer(&mut state, right);
        assert_eq!(state.current_player, 0);
        assert_eq!(state.current_prompt(), ActionPrompt::JailChoice);
    }

    #[test]
    fn collect_skips_players_who_cannot_afford() {
        let mut state = running(3);
        state.players[1].score = 3;
        with_card(&mut state, CardEffect::CollectFromEach(5));
        confirm(&mut state);
        assert_eq!(state.players[0].score, 1005);
        assert_eq!(state.players[1].score, 3);
        assert_eq!(state.players[2].score, 995);
    }

    #[test]
    fn jail_pay_requires_funds() {
        let mut state = running(2);
        roll(&mut state, 6);
        state.players[0].score = 60;
        let err = state
            .step(GameAction::new(0, ActionType::PayJail))
            .expect_err("too poor");
        assert_eq!(
            err,
            GameError::InsufficientFunds {
                needed: 100,
                available: 60
            }
        );
        assert!(state.jail.is_jailed(0));
        assert_eq!(state.current_prompt(), ActionPrompt::JailChoice);
        assert!(
            state
                .legal_actions()
                .iter()
                .all(|a| a.action_type != ActionType::PayJail)
        );
    }

    #[test]
    fn jail_pay_frees_and_advances() {
        let mut state = running(2);
        roll(&mut state, 6);
        state
            .step(GameAction::new(0, ActionType::PayJail))
            .expect("can pay");
        assert!(!state.jail.is_jailed(0));
        assert_eq!(state.players[0].score, 900);
        assert_eq!(state.current_player, 1);
    }

    #[test]
    fn jail_card_is_consumed() {
        let mut state = running(2);
        roll(&mut state, 6);
        assert_eq!(
            state.step(GameAction::new(0, ActionType::UseJailCard)).expect_err("no card"),
            GameError::NoJailCard
        );
        state.players[0].has_jail_skip_card = true;
        state
            .step(GameAction::new(0, ActionType::UseJailCard))
            .expect("card held");
        assert!(!state.players[0].has_jail_skip_card);
        assert!(!state.jail.is_jailed(0));
        assert_eq!(state.players[0].score, 1000);
    }

    #[test]
    fn rolling_six_from_jail_moves_six() {
        let mut state = running(2);
        roll(&mut state, 6);
        state
            .step(GameAction::new(0, ActionType::RollForJail))
            .expect("roll chosen");
        assert_eq!(state.current_prompt(), ActionPrompt::Roll);
        roll(&mut state, 6);
        assert!(!state.jail.is_jailed(0));
        assert_eq!(state.players[0].position, 12);
        assert_eq!(state.current_prompt(), ActionPrompt::ChooseParking);
    }

    #[test]
    fn parking_teleports_exactly() {
        let mut state = running(2);
        state.players[0].position = 6;
        roll(&mut state, 6);
        let err = state
            .step(GameAction::new(0, ActionType::SelectParking).with_payload(ActionPayload::Tile(4)))
            .expect_err("not a destination");
        assert_eq!(err, GameError::InvalidDestination(4));
        state
            .step(GameAction::new(0, ActionType::SelectParking).with_payload(ActionPayload::Tile(21)))
            .expect("destination");
        assert_eq!(state.players[0].position, 21);
        assert_eq!(state.current_player, 1);
    }

    #[test]
    fn community_question_mode_pays_bonus() {
        let config = GameConfig {
            initial_players: 2,
            community_mode: CommunityMode::Questions,
            ..GameConfig::default()
        };
        let mut state = GameState::new(config).expect("valid");
        state.start_game().expect("start");
        state.players[0].position = 3;
        roll(&mut state, 6);
        let right = answer_index(&state);
        answer(&mut state, right);
        assert_eq!(state.players[0].score, 1110);
    }
}

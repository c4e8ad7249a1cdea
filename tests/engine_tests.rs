//! End-to-end checks of the engine through its public command surface.

use std::collections::HashSet;

use quizopoly::board::{BOARD_SIZE, Board};
use quizopoly::game::{
    ActionPayload, Deck, Game, GameAction, GameConfig, GameEvent, GamePhase, GameState,
    PendingInteraction, PlayerId, TURNS_LIMIT,
};
use quizopoly::players::{RandomPlayer, ScholarParams, ScholarPlayer};
use quizopoly::questions::QuestionBank;
use quizopoly::types::{ActionPrompt, ActionType, DeckKind};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn running(players: usize, seed: u64) -> GameState {
    let config = GameConfig {
        initial_players: players,
        seed,
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

fn answer(state: &mut GameState, correct: bool) {
    let Some(PendingInteraction::Question { question, .. }) = state.pending() else {
        panic!("expected a question, found {:?}", state.pending());
    };
    let choice = if correct {
        question.answer
    } else {
        (question.answer + 1) % question.choices.len()
    };
    let player = state.current_player;
    state
        .step(
            GameAction::new(player, ActionType::AnswerQuestion)
                .with_payload(ActionPayload::Choice(choice)),
        )
        .expect("answer accepted");
}

#[test]
fn elimination_scan_shifts_ownership_and_jail() {
    let mut state = running(4, 1);
    for (idx, score) in [-5, 10, -3, 20].into_iter().enumerate() {
        state.players[idx].score = score;
    }
    state.ownership.assign(1, 0);
    state.ownership.assign(2, 1);
    state.ownership.assign(4, 2);
    state.ownership.assign(5, 3);
    state.jail.force_imprison(3);

    let outcome = state.check_eliminations();

    let survivors: Vec<(PlayerId, i64)> = state.players.iter().map(|p| (p.id, p.score)).collect();
    assert_eq!(survivors, vec![(PlayerId(2), 10), (PlayerId(4), 20)]);
    assert_eq!(state.ownership.owner_of(1), None);
    assert_eq!(state.ownership.owner_of(2), Some(0));
    assert_eq!(state.ownership.owner_of(4), None);
    assert_eq!(state.ownership.owner_of(5), Some(1));
    assert!(!state.jail.is_jailed(0));
    assert!(state.jail.is_jailed(1));

    let eliminated: Vec<PlayerId> = outcome
        .events
        .iter()
        .filter_map(|event| match event {
            GameEvent::PlayerEliminated { player, .. } => Some(*player),
            _ => None,
        })
        .collect();
    assert_eq!(eliminated, vec![PlayerId(3), PlayerId(1)]);

    // The pointer keeps its value and now names Player 2; no turn is spent.
    assert!(state.is_running());
    assert_eq!(state.current_player, 0);
    assert_eq!(state.current_prompt(), ActionPrompt::Roll);
}

#[test]
fn wrapping_past_start_pays_exactly_once() {
    let mut state = running(2, 3);
    state.players[0].position = 22;
    let outcome = state.move_player(0, 4).expect("move");
    assert_eq!(state.players[0].position, 2);
    assert_eq!(state.players[0].score, 1050);
    let bonuses = outcome
        .events
        .iter()
        .filter(|e| matches!(e, GameEvent::PassedStart { .. }))
        .count();
    assert_eq!(bonuses, 1);

    let mut state = running(2, 3);
    state.players[0].position = 20;
    state.move_player(0, 3).expect("move");
    assert_eq!(state.players[0].position, 23);
    assert_eq!(state.players[0].score, 1000);
}

#[test]
fn correct_purchase_claims_the_city_for_free() {
    let mut state = running(2, 5);
    roll(&mut state, 1);
    assert_eq!(state.current_prompt(), ActionPrompt::AnswerQuestion);
    answer(&mut state, true);
    assert_eq!(state.ownership.owner_of(1), Some(0));
    assert_eq!(state.players[0].score, 1000);
    assert_eq!(state.current_player, 1);

    // Landing on someone else's city poses a fine question instead.
    roll(&mut state, 1);
    match state.pending() {
        Some(PendingInteraction::Question { context, .. }) => {
            assert_eq!(context.kind(), quizopoly::types::QuestionKind::Fine);
        }
        other => panic!("expected fine question, got {other:?}"),
    }
    answer(&mut state, false);
    assert_eq!(state.players[1].score, 900);
}

#[test]
fn last_player_standing_wins() {
    let mut state = running(2, 9);
    state.players[1].score = 0;
    let outcome = state.check_eliminations();
    assert!(outcome.done);
    assert_eq!(state.phase, GamePhase::Ended { winner: Some(PlayerId(1)) });
    assert!(state.legal_actions().is_empty());
    assert!(state.status().contains("WINS"));
}

#[test]
fn everyone_out_means_no_winner() {
    let mut state = running(3, 9);
    for player in state.players.iter_mut() {
        player.score = -1;
    }
    let outcome = state.check_eliminations();
    assert!(outcome.done);
    assert!(state.players.is_empty());
    assert_eq!(state.phase, GamePhase::Ended { winner: None });
    assert_eq!(state.winner(), None);
    assert!(outcome.events.contains(&GameEvent::GameEnded { winner: None }));
}

#[test]
fn parking_offers_every_third_tile() {
    let mut state = running(2, 11);
    state.players[0].position = 6;
    roll(&mut state, 6);
    let Some(PendingInteraction::Parking { destinations }) = state.pending() else {
        panic!("expected parking choice");
    };
    let offered: Vec<usize> = destinations.iter().copied().collect();
    assert_eq!(offered, vec![0, 3, 6, 9, 12, 15, 18, 21]);
    assert_eq!(offered, Board::standard().parking_destinations().to_vec());

    let bad = GameAction::new(0, ActionType::SelectParking).with_payload(ActionPayload::Tile(4));
    assert!(state.step(bad).is_err());
    assert_eq!(state.current_prompt(), ActionPrompt::ChooseParking);
}

#[test]
fn three_failed_jail_rolls_release_the_player() {
    let mut state = running(2, 13);
    roll(&mut state, 6);
    assert!(state.jail.is_jailed(0));
    assert_eq!(state.current_prompt(), ActionPrompt::JailChoice);

    for attempt in 1..=3u8 {
        state
            .step(GameAction::new(0, ActionType::RollForJail))
            .expect("choose to roll");
        roll(&mut state, 2);
        assert_eq!(state.players[0].position, 6, "a failed roll never moves");
        if attempt < 3 {
            assert!(state.jail.is_jailed(0));
            assert_eq!(state.jail.get(0).turns_in_jail, attempt);
        }

        // The other player takes a quiet turn on a fresh city.
        assert_eq!(state.current_player, 1);
        state.players[1].position = 0;
        roll(&mut state, [1, 2, 4][usize::from(attempt - 1)]);
        answer(&mut state, true);
        if attempt < 3 {
            assert_eq!(state.current_prompt(), ActionPrompt::JailChoice);
        }
    }

    assert!(!state.jail.is_jailed(0));
    assert_eq!(state.current_prompt(), ActionPrompt::Roll);
    assert!(state.jail.get(0).turns_in_jail <= state.config.max_jail_turns);
}

#[test]
fn decks_never_run_dry() {
    let mut rng = StdRng::seed_from_u64(17);
    for kind in DeckKind::ALL {
        let mut deck = Deck::standard(kind);
        let size = deck.len();
        let mut seen = HashSet::new();
        for _ in 0..1000 {
            seen.insert(deck.draw(&mut rng).id);
            assert_eq!(deck.len(), size);
        }
        assert_eq!(seen.len(), size);
    }
}

#[test]
fn question_pool_recycles_after_exhaustion() {
    let mut bank = QuestionBank::new();
    let mut rng = StdRng::seed_from_u64(23);
    let pool = bank.pool_size();
    let ids: HashSet<u32> = (0..pool)
        .map(|_| {
            let draw = bank.draw(&mut rng);
            assert!(!draw.recycled);
            draw.question.id
        })
        .collect();
    assert_eq!(ids.len(), pool);
    assert_eq!(bank.remaining(), 0);

    let draw = bank.draw(&mut rng);
    assert!(draw.recycled);
    assert_eq!(bank.used_count(), 0);
}

#[test]
fn lobby_changes_are_refused_mid_game() {
    let mut state = running(2, 29);
    assert!(state.add_player().is_err());
    assert!(state.remove_player(0).is_err());
    assert!(state.start_game().is_err());
    assert_eq!(state.players.len(), 2);
}

#[test]
fn seeded_games_terminate() {
    for seed in 0..20u64 {
        let config = GameConfig {
            initial_players: 4,
            seed,
            ..GameConfig::default()
        };
        let mut game = Game::new(config).expect("valid");
        let agents = vec![RandomPlayer; 4];
        let winner = game.play(&agents).expect("play");

        if game.hit_turn_limit() {
            assert_eq!(game.state.turn, TURNS_LIMIT);
        } else {
            assert!(!game.state.is_running());
            assert_eq!(winner.is_some(), game.state.players.len() == 1);
        }
        for player in game.state.players.iter() {
            assert!(player.position < BOARD_SIZE);
        }
        for (tile, owner) in game.state.ownership.iter() {
            assert!(owner < game.state.players.len(), "dangling owner on tile {tile}");
        }
    }
}

#[test]
fn scholars_play_to_completion() {
    let config = GameConfig {
        initial_players: 3,
        seed: 99,
        ..GameConfig::default()
    };
    let mut game = Game::new(config).expect("valid");
    let agents = vec![
        ScholarPlayer::new(None),
        ScholarPlayer::new(Some(ScholarParams {
            accuracy: 0.2,
            bail_reserve: 0,
        })),
        ScholarPlayer::new(Some(ScholarParams {
            accuracy: 1.0,
            ..ScholarParams::default()
        })),
    ];
    game.play(&agents).expect("play");
    assert!(!game.state.is_running() || game.hit_turn_limit());
    assert!(!game.state.action_log().is_empty());
}

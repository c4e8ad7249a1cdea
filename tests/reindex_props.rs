//! Property checks: eliminations keep ownership and jail pointing at the
//! same people, whatever the order and number of removals.

use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;
use quizopoly::board::Board;
use quizopoly::game::{GameConfig, GamePhase, GameState, JailTracker, OwnershipLedger, PlayerId};

fn city_tiles() -> Vec<usize> {
    Board::standard().city_tiles().map(|t| t.index).collect()
}

proptest! {
    #[test]
    fn ledger_and_jail_follow_survivors(
        players in prop::collection::vec((-200i64..300, any::<bool>()), 2..8),
        owners in prop::collection::vec(prop::option::of(0usize..8), 16),
        seed in any::<u64>(),
    ) {
        let config = GameConfig {
            initial_players: players.len(),
            seed,
            ..GameConfig::default()
        };
        let mut state = GameState::new(config).expect("valid config");
        state.start_game().expect("start");

        let mut owned_before: BTreeMap<PlayerId, BTreeSet<usize>> = BTreeMap::new();
        let mut jailed_before: BTreeSet<PlayerId> = BTreeSet::new();
        for (idx, (score, jailed)) in players.iter().enumerate() {
            state.players[idx].score = *score;
            if *jailed {
                state.jail.force_imprison(idx);
                jailed_before.insert(state.players[idx].id);
            }
        }
        for (tile, owner) in city_tiles().into_iter().zip(&owners) {
            if let Some(owner) = owner.filter(|o| *o < players.len()) {
                state.ownership.assign(tile, owner);
                owned_before.entry(state.players[owner].id).or_default().insert(tile);
            }
        }

        let outcome = state.check_eliminations();

        let survivors = players.iter().filter(|(score, _)| *score > 0).count();
        prop_assert_eq!(state.players.len(), survivors);
        prop_assert!(state.players.iter().all(|p| p.score > 0));

        for (idx, player) in state.players.iter().enumerate() {
            let now: BTreeSet<usize> = state.ownership.tiles_owned_by(idx).collect();
            let before = owned_before.get(&player.id).cloned().unwrap_or_default();
            prop_assert_eq!(now, before);
            prop_assert_eq!(state.jail.is_jailed(idx), jailed_before.contains(&player.id));
        }
        prop_assert!(state.ownership.iter().all(|(_, owner)| owner < state.players.len()));
        prop_assert!(state.jail.iter().all(|(idx, _)| idx < state.players.len()));

        match survivors {
            0 => prop_assert_eq!(state.phase, GamePhase::Ended { winner: None }),
            1 => {
                prop_assert!(outcome.done);
                prop_assert_eq!(state.winner(), Some(state.players[0].id));
            }
            _ => prop_assert!(state.current_player < state.players.len()),
        }
    }

    #[test]
    fn single_removals_shift_indices_down(
        owners in prop::collection::btree_map(0usize..24, 0usize..6, 0..16),
        jailed in prop::collection::btree_set(0usize..6, 0..6),
        removed in 0usize..6,
    ) {
        let mut ledger = OwnershipLedger::default();
        for (tile, owner) in &owners {
            ledger.assign(*tile, *owner);
        }
        let mut jail = JailTracker::default();
        jail.reinit(6);
        for idx in &jailed {
            jail.force_imprison(*idx);
        }

        ledger.reindex_on_removal(removed);
        jail.reindex_on_removal(removed);

        for (tile, owner) in &owners {
            let expected = match owner.cmp(&removed) {
                std::cmp::Ordering::Less => Some(*owner),
                std::cmp::Ordering::Equal => None,
                std::cmp::Ordering::Greater => Some(owner - 1),
            };
            prop_assert_eq!(ledger.owner_of(*tile), expected);
        }
        for idx in 0..5 {
            let original = if idx < removed { idx } else { idx + 1 };
            prop_assert_eq!(jail.is_jailed(idx), jailed.contains(&original));
        }
        prop_assert!(jail.iter().all(|(idx, _)| idx < 5));
    }
}

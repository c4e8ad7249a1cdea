use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JailState {
    pub in_jail: bool,
    pub turns_in_jail: u8,
}

impl JailState {
    pub const FREE: JailState = JailState {
        in_jail: false,
        turns_in_jail: 0,
    };

    pub const LOCKED: JailState = JailState {
        in_jail: true,
        turns_in_jail: 0,
    };
}

/// Outcome of a failed escape roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JailRollOutcome {
    StillJailed { turns_in_jail: u8 },
    ForcedRelease,
}

/// Jail state per registry index, renumbered alongside the ownership ledger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JailTracker {
    states: BTreeMap<usize, JailState>,
}

impl JailTracker {
    pub fn reinit(&mut self, players: usize) {
        self.states = (0..players).map(|idx| (idx, JailState::FREE)).collect();
    }

    pub fn get(&self, player: usize) -> JailState {
        self.states.get(&player).copied().unwrap_or_default()
    }

    pub fn is_jailed(&self, player: usize) -> bool {
        self.get(player).in_jail
    }

    /// Locks the player up unless already inside. Returns true on a fresh lock.
    pub fn imprison(&mut self, player: usize) -> bool {
        let state = self.states.entry(player).or_default();
        if state.in_jail {
            return false;
        }
        *state = JailState::LOCKED;
        true
    }

    /// Unconditionally resets to `{in_jail: true, turns: 0}`.
    pub fn force_imprison(&mut self, player: usize) {
        self.states.insert(player, JailState::LOCKED);
    }

    pub fn release(&mut self, player: usize) {
        self.states.insert(player, JailState::FREE);
    }

    /// Counts a failed escape roll, releasing once `max_turns` is reached.
    pub fn record_failed_roll(&mut self, player: usize, max_turns: u8) -> JailRollOutcome {
        let state = self.states.entry(player).or_default();
        state.turns_in_jail = state.turns_in_jail.saturating_add(1);
        if state.turns_in_jail >= max_turns {
            *state = JailState::FREE;
            JailRollOutcome::ForcedRelease
        } else {
            JailRollOutcome::StillJailed {
                turns_in_jail: state.turns_in_jail,
            }
        }
    }

    pub fn reindex_on_removal(&mut self, removed: usize) {
        let states = std::mem::take(&mut self.states);
        self.states = states
            .into_iter()
            .filter(|(idx, _)| *idx != removed)
            .map(|(idx, state)| if idx > removed { (idx - 1, state) } else { (idx, state) })
            .collect();
    }

    pub fn ensure_player(&mut self, player: usize) {
        self.states.entry(player).or_default();
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, JailState)> + '_ {
        self.states.iter().map(|(idx, state)| (*idx, *state))
    }

    pub fn clear(&mut self) {
        self.states.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_rolls_release_at_limit() {
        let mut jail = JailTracker::default();
        jail.reinit(2);
        assert!(jail.imprison(1));
        assert!(!jail.imprison(1));
        assert_eq!(
            jail.record_failed_roll(1, 3),
            JailRollOutcome::StillJailed { turns_in_jail: 1 }
        );
        assert_eq!(
            jail.record_failed_roll(1, 3),
            JailRollOutcome::StillJailed { turns_in_jail: 2 }
        );
        assert_eq!(jail.record_failed_roll(1, 3), JailRollOutcome::ForcedRelease);
        assert_eq!(jail.get(1), JailState::FREE);
    }

    #[test]
    fn reindex_shifts_entries_above_removed() {
        let mut jail = JailTracker::default();
        jail.reinit(4);
        jail.force_imprison(3);
        jail.force_imprison(1);
        jail.reindex_on_removal(1);
        assert!(!jail.is_jailed(0));
        assert!(!jail.is_jailed(1));
        assert!(jail.is_jailed(2));
        assert_eq!(jail.iter().count(), 3);
    }
}

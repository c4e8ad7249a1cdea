use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::board::TileIndex;

/// City tile to the owner's current registry index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnershipLedger {
    owners: BTreeMap<TileIndex, usize>,
}

impl OwnershipLedger {
    pub fn assign(&mut self, tile: TileIndex, player: usize) {
        self.owners.insert(tile, player);
    }

    pub fn owner_of(&self, tile: TileIndex) -> Option<usize> {
        self.owners.get(&tile).copied()
    }

    /// Drops tiles owned by `removed` and shifts owners above it down by one,
    /// matching the registry after `removed` is spliced out.
    pub fn reindex_on_removal(&mut self, removed: usize) {
        self.owners.retain(|_, owner| *owner != removed);
        for owner in self.owners.values_mut() {
            if *owner > removed {
                *owner -= 1;
            }
        }
    }

    pub fn clear(&mut self) {
        self.owners.clear();
    }

    pub fn tiles_owned_by(&self, player: usize) -> impl Iterator<Item = TileIndex> + '_ {
        self.owners
            .iter()
            .filter(move |(_, owner)| **owner == player)
            .map(|(tile, _)| *tile)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TileIndex, usize)> + '_ {
        self.owners.iter().map(|(tile, owner)| (*tile, *owner))
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removal_drops_and_shifts() {
        let mut ledger = OwnershipLedger::default();
        ledger.assign(1, 0);
        ledger.assign(2, 1);
        ledger.assign(4, 2);
        ledger.assign(5, 3);
        ledger.reindex_on_removal(1);
        assert_eq!(ledger.owner_of(1), Some(0));
        assert_eq!(ledger.owner_of(2), None);
        assert_eq!(ledger.owner_of(4), Some(1));
        assert_eq!(ledger.owner_of(5), Some(2));
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn tiles_owned_by_lists_in_board_order() {
        let mut ledger = OwnershipLedger::default();
        ledger.assign(13, 1);
        ledger.assign(2, 1);
        ledger.assign(7, 0);
        assert_eq!(ledger.tiles_owned_by(1).collect::<Vec<_>>(), vec![2, 13]);
        ledger.clear();
        assert!(ledger.is_empty());
    }
}

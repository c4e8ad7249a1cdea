use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::types::TileKind;

pub type TileIndex = usize;

pub const BOARD_SIZE: usize = 24;
pub const CITY_COUNT: usize = 16;
pub const JAIL_TILE: TileIndex = 6;
pub const PARKING_STRIDE: usize = 3;

pub const CITY_NAMES: [&str; CITY_COUNT] = [
    "Philipina",
    "Thailand",
    "Jepang",
    "Korea",
    "India",
    "China",
    "Inggris",
    "Prancis",
    "Indonesia",
    "Australia",
    "Malaysia",
    "Singapura",
    "Vietnam",
    "Myanmar",
    "Kamboja",
    "Laos",
];

/// Non-city tiles by position; every other position holds the next city.
const SPECIAL_TILES: [(TileIndex, TileKind, &str); 8] = [
    (0, TileKind::Start, "START"),
    (3, TileKind::Opportunity, "KESEMPATAN"),
    (6, TileKind::Jail, "PENJARA"),
    (9, TileKind::Community, "DANA UMUM"),
    (12, TileKind::FreeParking, "PARKIR KEMANA SAJA"),
    (15, TileKind::Opportunity, "KESEMPATAN"),
    (18, TileKind::Jail, "PENJARA"),
    (21, TileKind::Community, "DANA UMUM"),
];

static STANDARD_TILES: Lazy<Vec<Tile>> = Lazy::new(|| {
    let mut cities = CITY_NAMES.iter().enumerate();
    (0..BOARD_SIZE)
        .map(|index| {
            if let Some((_, kind, name)) = SPECIAL_TILES.iter().find(|(pos, _, _)| *pos == index) {
                return Tile {
                    index,
                    name: *name,
                    kind: *kind,
                    city_index: None,
                };
            }
            let (city_index, name) = cities
                .next()
                .unwrap_or_else(|| unreachable!("board layout holds exactly {CITY_COUNT} cities"));
            Tile {
                index,
                name: *name,
                kind: TileKind::City,
                city_index: Some(city_index),
            }
        })
        .collect()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tile {
    pub index: TileIndex,
    pub name: &'static str,
    pub kind: TileKind,
    /// Position of the city in `CITY_NAMES`, used for pricing.
    pub city_index: Option<usize>,
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.index)
    }
}

#[derive(Debug, Clone)]
pub struct Board {
    tiles: &'static [Tile],
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    pub fn standard() -> Self {
        Self {
            tiles: &STANDARD_TILES,
        }
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tile(&self, index: TileIndex) -> Option<&Tile> {
        self.tiles.get(index)
    }

    pub fn tiles(&self) -> &[Tile] {
        self.tiles
    }

    pub fn city_tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.tiles.iter().filter(|tile| tile.kind == TileKind::City)
    }

    pub fn jail_tile(&self) -> TileIndex {
        JAIL_TILE
    }

    /// Tiles a player may teleport to from free parking.
    pub fn parking_destinations(&self) -> SmallVec<[TileIndex; 8]> {
        (0..self.tiles.len()).step_by(PARKING_STRIDE).collect()
    }
}

/// City name to price, rebuilt whenever a game starts or resets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityPrices {
    prices: BTreeMap<String, i64>,
}

impl CityPrices {
    pub fn compute(base: i64, increment: i64) -> Self {
        let prices = CITY_NAMES
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.to_string(), base + idx as i64 * increment))
            .collect();
        Self { prices }
    }

    pub fn price_of(&self, city: &str) -> Option<i64> {
        self.prices.get(city).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.prices.iter().map(|(name, price)| (name.as_str(), *price))
    }
}

use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::board::TileIndex;
use crate::types::DeckKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CardEffect {
    Points(i64),
    /// Relative move; earns the start-pass bonus under the ordinary crossing rule.
    Move(i32),
    /// Teleport. With `on_wrap_only` the bonus is paid only when the old
    /// position is past the target.
    GoTo {
        target: TileIndex,
        bonus: i64,
        on_wrap_only: bool,
    },
    GrantImmunity,
    GrantJailSkip,
    SendToJail,
    CollectFromEach(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Card {
    pub id: u32,
    pub text: &'static str,
    pub effect: CardEffect,
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

const fn card(id: u32, text: &'static str, effect: CardEffect) -> Card {
    Card { id, text, effect }
}

const OPPORTUNITY_CARDS: [Card; 15] = [
    card(
        1,
        "Bebas dari penjara! Kartu ini dapat digunakan kapan saja untuk keluar penjara",
        CardEffect::GrantJailSkip,
    ),
    card(
        2,
        "Maju sampai START! +50 poin bonus",
        CardEffect::GoTo {
            target: 0,
            bonus: 50,
            on_wrap_only: false,
        },
    ),
    card(
        3,
        "Maju sampai China! Jika melewati start +20 poin",
        CardEffect::GoTo {
            target: 11,
            bonus: 20,
            on_wrap_only: true,
        },
    ),
    card(4, "Terima bunga dari bank +10 poin", CardEffect::Points(10)),
    card(5, "Maju 3 langkah!", CardEffect::Move(3)),
    card(6, "Maju 5 langkah!", CardEffect::Move(5)),
    card(7, "Terima bunga dari bank +5 poin", CardEffect::Points(5)),
    card(8, "Bayar pajak -10 poin", CardEffect::Points(-10)),
    card(
        9,
        "Dapat kartu pelindung! Tidak akan kena pajak/denda pada giliran berikutnya",
        CardEffect::GrantImmunity,
    ),
    card(
        10,
        "Mundur sampai START",
        CardEffect::GoTo {
            target: 0,
            bonus: 0,
            on_wrap_only: false,
        },
    ),
    card(11, "Dapat hadiah +20 poin", CardEffect::Points(20)),
    card(12, "Dapat bonus +15 poin", CardEffect::Points(15)),
    card(13, "Maju 4 langkah!", CardEffect::Move(4)),
    card(14, "Bayar denda -15 poin", CardEffect::Points(-15)),
    card(15, "Dapat hadiah spesial +25 poin", CardEffect::Points(25)),
];

const COMMUNITY_CARDS: [Card; 15] = [
    card(1, "Bayar BPJS -10 poin", CardEffect::Points(-10)),
    card(2, "Bayar pajak -5 poin", CardEffect::Points(-5)),
    card(3, "Bayar cicilan mobil -25 poin", CardEffect::Points(-25)),
    card(4, "Bayar rumah sakit -10 poin", CardEffect::Points(-10)),
    card(5, "Masuk penjara!", CardEffect::SendToJail),
    card(
        6,
        "Mundur sampai START",
        CardEffect::GoTo {
            target: 0,
            bonus: 0,
            on_wrap_only: false,
        },
    ),
    card(7, "Dapat bansos +15 poin", CardEffect::Points(15)),
    card(8, "Kena tilang -15 poin", CardEffect::Points(-15)),
    card(9, "Dapat hadiah kejutan +15 poin", CardEffect::Points(15)),
    card(
        10,
        "Terima +5 poin dari setiap pemain",
        CardEffect::CollectFromEach(5),
    ),
    card(11, "Dapat bonus +20 poin", CardEffect::Points(20)),
    card(12, "Bayar tagihan -12 poin", CardEffect::Points(-12)),
    card(13, "Dapat hadiah +18 poin", CardEffect::Points(18)),
    card(14, "Dapat dividen +12 poin", CardEffect::Points(12)),
    card(15, "Bayar asuransi -8 poin", CardEffect::Points(-8)),
];

/// A fixed multiset of cards. Draws reshuffle and pick, so the deck never
/// runs out and repeats are expected.
#[derive(Debug, Clone)]
pub struct Deck {
    kind: DeckKind,
    cards: Vec<Card>,
}

impl Deck {
    pub fn standard(kind: DeckKind) -> Self {
        let cards = match kind {
            DeckKind::Opportunity => OPPORTUNITY_CARDS.to_vec(),
            DeckKind::Community => COMMUNITY_CARDS.to_vec(),
        };
        Self { kind, cards }
    }

    pub fn kind(&self) -> DeckKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        self.cards.shuffle(rng);
    }

    pub fn draw(&mut self, rng: &mut impl Rng) -> Card {
        self.shuffle(rng);
        let idx = rng.gen_range(0..self.cards.len());
        self.cards[idx]
    }
}

/// Both decks of a game, addressed by kind.
#[derive(Debug, Clone)]
pub struct Decks {
    opportunity: Deck,
    community: Deck,
}

impl Default for Decks {
    fn default() -> Self {
        Self {
            opportunity: Deck::standard(DeckKind::Opportunity),
            community: Deck::standard(DeckKind::Community),
        }
    }
}

impl Decks {
    pub fn get(&self, kind: DeckKind) -> &Deck {
        match kind {
            DeckKind::Opportunity => &self.opportunity,
            DeckKind::Community => &self.community,
        }
    }

    pub fn get_mut(&mut self, kind: DeckKind) -> &mut Deck {
        match kind {
            DeckKind::Opportunity => &mut self.opportunity,
            DeckKind::Community => &mut self.community,
        }
    }

    pub fn shuffle_all(&mut self, rng: &mut impl Rng) {
        for kind in DeckKind::ALL {
            self.get_mut(kind).shuffle(rng);
        }
    }
}

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, EnumIter,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TileKind {
    Start,
    City,
    Opportunity,
    Community,
    Jail,
    FreeParking,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, EnumIter,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DeckKind {
    Opportunity,
    Community,
}

impl DeckKind {
    pub const ALL: [DeckKind; 2] = [DeckKind::Opportunity, DeckKind::Community];
}

/// What kind of trivia question is outstanding.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, EnumIter,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionKind {
    Buy,
    Fine,
    Trivia,
}

/// What a community tile hands out.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    EnumIter,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "snake_case")]
pub enum CommunityMode {
    #[default]
    Cards,
    Questions,
}

/// The input the engine is currently waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionPrompt {
    Lobby,
    Roll,
    AnswerQuestion,
    ConfirmCard,
    JailChoice,
    ChooseParking,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    RollDice,
    AnswerQuestion,
    ConfirmCard,
    PayJail,
    RollForJail,
    UseJailCard,
    SelectParking,
}

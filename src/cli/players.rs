use crate::game::action::GameAction;
use crate::game::game::Game;
use crate::players::{BasePlayer, RandomPlayer, ScholarParams, ScholarPlayer};

pub struct CliPlayer {
    pub code: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const CLI_PLAYERS: &[CliPlayer] = &[
    CliPlayer {
        code: "H",
        name: "HumanPlayer",
        description: "Seat played from the terminal UI (play only).",
    },
    CliPlayer {
        code: "R",
        name: "RandomPlayer",
        description: "Chooses actions at random, answers included.",
    },
    CliPlayer {
        code: "S",
        name: "ScholarPlayer",
        description: "Knows the answer with some probability and plays jail/parking greedily. First param is ACCURACY (0-1), second is BAIL_RESERVE.",
    },
];

#[derive(Debug, Clone)]
pub enum PlayerInstance {
    Random(RandomPlayer),
    Scholar(ScholarPlayer),
}

impl BasePlayer for PlayerInstance {
    fn decide(&self, game: &Game, actions: &[GameAction]) -> Option<GameAction> {
        match self {
            PlayerInstance::Random(p) => p.decide(game, actions),
            PlayerInstance::Scholar(p) => p.decide(game, actions),
        }
    }
}

/// Builds a bot from a code like `S:0.9:150`. Returns `None` for humans and
/// unknown codes.
pub fn create_player(code: &str, params: Vec<&str>) -> Option<PlayerInstance> {
    match code {
        "R" => Some(PlayerInstance::Random(RandomPlayer)),
        "S" => {
            let defaults = ScholarParams::default();
            let accuracy = params
                .first()
                .and_then(|s| s.parse::<f64>().ok())
                .unwrap_or(defaults.accuracy);
            let bail_reserve = params
                .get(1)
                .and_then(|s| s.parse::<i64>().ok())
                .unwrap_or(defaults.bail_reserve);
            Some(PlayerInstance::Scholar(ScholarPlayer::new(Some(
                ScholarParams {
                    accuracy,
                    bail_reserve,
                },
            ))))
        }
        _ => None,
    }
}

/// Splits `CODE:param:param` into the code and its params.
pub fn parse_player_spec(spec: &str) -> (&str, Vec<&str>) {
    let mut parts = spec.trim().split(':');
    let code = parts.next().unwrap_or_default();
    (code, parts.collect())
}

pub fn is_known_code(code: &str) -> bool {
    CLI_PLAYERS.iter().any(|p| p.code == code)
}

pub fn print_player_help() {
    println!("Player Legend:");
    println!("{:<5} {:<25} {}", "CODE", "PLAYER", "DESCRIPTION");
    println!("{}", "-".repeat(80));
    for player in CLI_PLAYERS {
        println!("{:<5} {:<25} {}", player.code, player.name, player.description);
    }
}

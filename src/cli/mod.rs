pub mod board_display;
pub mod players;
pub mod stats;
pub mod tui;

pub use board_display::{display_board, render_board_to_string};
pub use players::{
    CLI_PLAYERS, CliPlayer, PlayerInstance, create_player, parse_player_spec, print_player_help,
};
pub use stats::{GameStats, StatisticsAccumulator};
pub use tui::TuiApp;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use quizopoly::cli::{
    PlayerInstance, TuiApp, create_player, display_board, parse_player_spec, print_player_help,
};
use quizopoly::cli::players::is_known_code;
use quizopoly::game::{Game, GameConfig};

#[derive(Debug, Parser, Clone)]
#[command(name = "quizopoly-play")]
#[command(about = "Play the trivia board game hot-seat in the terminal")]
struct Args {
    /// Comma-separated seats in turn order (H=Human, R=Random, S=Scholar).
    /// Use ':' for bot params, e.g. H,H,S:0.9
    #[arg(long, default_value = "H,H,H,H")]
    seats: String,

    /// JSON file with game rules; missing fields keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for reproducibility (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Pause between bot moves in milliseconds
    #[arg(long, default_value_t = 600)]
    bot_delay_ms: u64,

    /// Show player codes and exit
    #[arg(long)]
    help_players: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if args.help_players {
        print_player_help();
        return;
    }

    let mut config = match &args.config {
        Some(path) => GameConfig::from_json_file(path).unwrap_or_else(|err| {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }),
        None => GameConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    let mut bots: Vec<Option<PlayerInstance>> = Vec::new();
    for spec in args.seats.split(',') {
        let (code, params) = parse_player_spec(spec);
        if !is_known_code(code) {
            eprintln!("Error: Unknown player code '{code}'");
            eprintln!("Use --help-players to see available codes");
            std::process::exit(1);
        }
        bots.push(create_player(code, params));
    }
    config.initial_players = bots.len();

    let game = Game::new(config).unwrap_or_else(|err| {
        eprintln!("Error: {err}");
        std::process::exit(1);
    });

    let mut app = TuiApp::new(game, bots, Duration::from_millis(args.bot_delay_ms));
    if let Err(err) = app.run() {
        eprintln!("Error: terminal failure: {err}");
        std::process::exit(1);
    }

    let game = app.game();
    println!("{}", "=".repeat(80));
    display_board(game);
    println!("{}", "=".repeat(80));
    for (idx, player) in game.state.players.iter().enumerate() {
        println!(
            "{:<12} {:>6} pts  cities {}",
            player.name,
            player.score,
            game.state.ownership.tiles_owned_by(idx).count()
        );
    }
    match game.winner() {
        Some(winner) => println!("Winner: {winner}"),
        None => println!("No winner."),
    }
    println!("Total Turns: {}", game.state.turn);
}

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use itertools::Itertools;
use log::{error, info};
use quizopoly::cli::players::PlayerInstance;
use quizopoly::cli::{
    StatisticsAccumulator, create_player, display_board, parse_player_spec, print_player_help,
};
use quizopoly::game::{Game, GameConfig};
use quizopoly::snapshot;

#[derive(Debug, Parser, Clone)]
#[command(name = "quizopoly-sim")]
#[command(about = "Trivia board simulator - play bot strategies against each other")]
struct Args {
    /// Number of games to play
    #[arg(short = 'n', long, default_value_t = 5)]
    num: u32,

    /// Comma-separated player codes in seat order (e.g., R,R,S,S)
    /// Use ':' to set player-specific params (e.g., S:0.9:150)
    /// Codes: R=Random, S=Scholar
    #[arg(long, default_value = "R,R,S,S")]
    players: String,

    /// JSON file with game rules; missing fields keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Base random seed; game i uses seed + i
    #[arg(long)]
    seed: Option<u64>,

    /// Show player codes and exit
    #[arg(long)]
    help_players: bool,

    /// Silence console output
    #[arg(long)]
    quiet: bool,

    /// Print the final board of every game
    #[arg(long)]
    show_board: bool,

    /// Print the final snapshot of the last game as JSON
    #[arg(long)]
    json: bool,

    /// Number of worker threads for parallel execution
    #[arg(long, default_value_t = 1)]
    workers: usize,
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

    let mut players: Vec<PlayerInstance> = Vec::new();
    for key in args.players.split(',') {
        let (code, params) = parse_player_spec(key);
        match create_player(code, params) {
            Some(player) => players.push(player),
            None => {
                eprintln!("Error: '{code}' is not a bot code");
                eprintln!("Use --help-players to see available codes");
                std::process::exit(1);
            }
        }
    }
    config.initial_players = players.len();
    if let Err(err) = config.validate() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }

    info!(
        "simulating {} games with [{}] on {} worker(s)",
        args.num,
        args.players,
        args.workers.max(1)
    );

    let mut stats = StatisticsAccumulator::new();
    if args.workers > 1 {
        run_parallel_simulations(&args, &config, &players, &mut stats);
    } else {
        run_sequential_simulations(&args, &config, &players, &mut stats);
    }

    if !args.quiet {
        print_summary(&stats, &players);
    }
}

fn game_config(base: &GameConfig, game_idx: u64) -> GameConfig {
    GameConfig {
        seed: base.seed.wrapping_add(game_idx),
        ..base.clone()
    }
}

/// Plays one game; `None` when the engine refused to start it.
fn play_one(config: GameConfig, players: &[PlayerInstance]) -> Option<(Game, std::time::Duration)> {
    let start = Instant::now();
    let mut game = match Game::new(config) {
        Ok(game) => game,
        Err(err) => {
            error!("invalid config: {err}");
            return None;
        }
    };
    if let Err(err) = game.play(players) {
        error!("game {} aborted: {err}", game.id);
        return None;
    }
    Some((game, start.elapsed()))
}

fn run_sequential_simulations(
    args: &Args,
    config: &GameConfig,
    players: &[PlayerInstance],
    stats: &mut StatisticsAccumulator,
) {
    let mut last_game = None;
    for game_idx in 0..args.num {
        let Some((game, duration)) = play_one(game_config(config, game_idx as u64), players)
        else {
            continue;
        };
        stats.after(&game, players.len(), duration);

        if !args.quiet {
            let last_n = 10;
            if game_idx < last_n || game_idx >= args.num.saturating_sub(last_n) {
                let winner_str = game
                    .winner()
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| "None".to_string());
                let scores = game
                    .state
                    .players
                    .iter()
                    .map(|p| format!("{}={}", p.id, p.score))
                    .join(",");
                println!(
                    "Game {:>4}: Standing=[{}], Winner={:>4}, Turns={:>4}, Duration={:?}",
                    game_idx + 1,
                    scores,
                    winner_str,
                    game.state.turn,
                    duration
                );
            } else if (game_idx + 1) % 100 == 0 {
                print!(".");
                use std::io::Write;
                let _ = std::io::stdout().flush();
            }
            if args.show_board {
                display_board(&game);
            }
        }
        last_game = Some(game);
    }

    if args.json {
        print_json(last_game.as_ref());
    }
}

fn run_parallel_simulations(
    args: &Args,
    config: &GameConfig,
    players: &[PlayerInstance],
    stats: &mut StatisticsAccumulator,
) {
    use std::sync::Arc;
    use std::thread;

    let players = Arc::new(players.to_vec());
    let config = Arc::new(config.clone());

    let mut handles = Vec::new();
    let games_per_worker = args.num as usize / args.workers;
    let remainder = args.num as usize % args.workers;

    for worker_id in 0..args.workers {
        let players_clone = Arc::clone(&players);
        let config_clone = Arc::clone(&config);

        let num_games = if worker_id < remainder {
            games_per_worker + 1
        } else {
            games_per_worker
        };

        let handle = thread::spawn(move || {
            let mut local_stats = StatisticsAccumulator::new();
            let mut last_game = None;
            let start_idx = worker_id * games_per_worker + worker_id.min(remainder);

            for local_idx in 0..num_games {
                let game_idx = (start_idx + local_idx) as u64;
                if let Some((game, duration)) =
                    play_one(game_config(&config_clone, game_idx), &players_clone)
                {
                    local_stats.after(&game, players_clone.len(), duration);
                    last_game = Some(game);
                }
            }

            (local_stats, last_game)
        });

        handles.push(handle);
    }

    let mut last_game = None;
    for handle in handles {
        match handle.join() {
            Ok((worker_stats, game)) => {
                stats.stats.merge(worker_stats.stats);
                if game.is_some() {
                    last_game = game;
                }
            }
            Err(_) => error!("a simulation worker panicked"),
        }
    }

    if args.json {
        print_json(last_game.as_ref());
    }
}

fn print_json(game: Option<&Game>) {
    let Some(game) = game else {
        return;
    };
    match snapshot(&game.state).to_json() {
        Ok(json) => println!("{json}"),
        Err(err) => error!("failed to serialize snapshot: {err}"),
    }
}

fn print_summary(stats: &StatisticsAccumulator, players: &[PlayerInstance]) {
    println!("\n{}", "=".repeat(80));
    println!("SIMULATION SUMMARY");
    println!("{}", "=".repeat(80));

    println!("\nPlayer Summary:");
    println!(
        "{:<22} {:<10} {:<12} {:<12}",
        "Player", "Wins", "Win Rate", "Avg Score"
    );
    println!("{}", "-".repeat(60));

    for (seat, player) in players.iter().enumerate() {
        let wins = stats.stats.wins.get(&seat).copied().unwrap_or(0);
        let win_rate = if stats.stats.games > 0 {
            (wins as f64 / stats.stats.games as f64) * 100.0
        } else {
            0.0
        };

        // Eliminated players have no final score and count as zero.
        let avg_score = if stats.stats.games > 0 {
            stats
                .stats
                .final_scores_by_seat
                .get(&seat)
                .map(|scores| scores.iter().sum::<i64>() as f64 / stats.stats.games as f64)
                .unwrap_or(0.0)
        } else {
            0.0
        };

        let player_name = match player {
            PlayerInstance::Random(_) => "Random",
            PlayerInstance::Scholar(_) => "Scholar",
        };

        println!(
            "{:<22} {:<10} {:<11.1}% {:<12.2}",
            format!("{} (P{})", player_name, seat + 1),
            wins,
            win_rate,
            avg_score
        );
    }

    println!("\nGame Summary:");
    println!("  Total Games: {}", stats.stats.games);
    println!("  Without Winner: {}", stats.stats.no_winner);
    println!("  Turn Limit Hits: {}", stats.stats.turn_limit_hits);
    println!("  Avg Turns: {:.2}", stats.stats.get_avg_turns());
    println!("  Avg Ticks: {:.2}", stats.stats.get_avg_ticks());
    println!("  Avg Eliminations: {:.2}", stats.stats.get_avg_eliminations());
    println!("  Avg Duration: {:.2?}", stats.stats.get_avg_duration());
}

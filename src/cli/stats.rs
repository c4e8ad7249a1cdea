use std::collections::HashMap;
use std::time::Duration;

use crate::game::game::Game;

#[derive(Debug, Default, Clone)]
pub struct GameStats {
    /// Wins keyed by zero-based seat.
    pub wins: HashMap<usize, u32>,
    pub final_scores_by_seat: HashMap<usize, Vec<i64>>,
    pub games: u32,
    pub no_winner: u32,
    pub turn_limit_hits: u32,
    pub total_ticks: u64,
    pub total_turns: u64,
    pub total_eliminations: u64,
    pub total_duration: Duration,
}

impl GameStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_game(&mut self, game: &Game, starting_players: usize, duration: Duration) {
        let eliminations = starting_players.saturating_sub(game.state.players.len());
        self.games += 1;
        self.total_duration += duration;
        self.total_turns += u64::from(game.state.turn);
        self.total_ticks += game.state.action_log().len() as u64;
        self.total_eliminations += eliminations as u64;

        match game.winner() {
            Some(winner) => *self.wins.entry(winner.seat()).or_insert(0) += 1,
            None if game.hit_turn_limit() => self.turn_limit_hits += 1,
            None => self.no_winner += 1,
        }

        for player in game.state.players.iter() {
            self.final_scores_by_seat
                .entry(player.id.seat())
                .or_default()
                .push(player.score);
        }
    }

    pub fn get_avg_ticks(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_ticks as f64 / self.games as f64
    }

    pub fn get_avg_turns(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_turns as f64 / self.games as f64
    }

    pub fn get_avg_eliminations(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_eliminations as f64 / self.games as f64
    }

    pub fn get_avg_duration(&self) -> Duration {
        if self.games == 0 {
            return Duration::ZERO;
        }
        self.total_duration / self.games
    }

    pub fn merge(&mut self, other: GameStats) {
        for (seat, wins) in other.wins {
            *self.wins.entry(seat).or_insert(0) += wins;
        }
        for (seat, scores) in other.final_scores_by_seat {
            self.final_scores_by_seat.entry(seat).or_default().extend(scores);
        }
        self.games += other.games;
        self.no_winner += other.no_winner;
        self.turn_limit_hits += other.turn_limit_hits;
        self.total_ticks += other.total_ticks;
        self.total_turns += other.total_turns;
        self.total_eliminations += other.total_eliminations;
        self.total_duration += other.total_duration;
    }
}

#[derive(Debug, Default)]
pub struct StatisticsAccumulator {
    pub stats: GameStats,
}

impl StatisticsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn after(&mut self, game: &Game, starting_players: usize, duration: Duration) {
        self.stats.record_game(game, starting_players, duration);
    }
}

use itertools::Itertools;

use crate::board::TileIndex;
use crate::game::game::Game;
use crate::game::state::GameState;
use crate::types::TileKind;

pub const CELL_WIDTH: usize = 12;
pub const CELL_LINES: usize = 3;
/// Tiles per side of the square ring, corners included.
pub const SIDE: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPos {
    pub row: usize,
    pub col: usize,
}

/// Places the ring clockwise from the top-left corner.
pub fn ring_position(index: TileIndex) -> GridPos {
    let edge = SIDE - 1;
    match index {
        i if i <= edge => GridPos { row: 0, col: i },
        i if i <= 2 * edge => GridPos {
            row: i - edge,
            col: edge,
        },
        i if i <= 3 * edge => GridPos {
            row: edge,
            col: 3 * edge - i,
        },
        i => GridPos {
            row: 4 * edge - i,
            col: 0,
        },
    }
}

/// Three padded lines: tile name, index with price or owner, pieces on it.
pub fn cell_text(state: &GameState, tile: TileIndex) -> [String; CELL_LINES] {
    let Some(info) = state.board.tile(tile) else {
        return Default::default();
    };
    let detail = match info.kind {
        TileKind::City => match state.ownership.owner_of(tile) {
            Some(owner) => state
                .players
                .get(owner)
                .map(|p| format!("own {}", p.id))
                .unwrap_or_default(),
            None => state
                .city_price(tile)
                .map(|price| format!("${price}"))
                .unwrap_or_default(),
        },
        TileKind::Start => format!("+{}", state.config.start_pass_bonus),
        TileKind::Jail => "jail".to_string(),
        TileKind::FreeParking => "park".to_string(),
        TileKind::Opportunity | TileKind::Community => "card".to_string(),
    };
    let pieces = state
        .players
        .iter()
        .enumerate()
        .filter(|(_, p)| p.position == tile)
        .map(|(idx, p)| {
            let jailed = if state.jail.is_jailed(idx) { "*" } else { "" };
            format!("{}{jailed}", p.id.0)
        })
        .join(" ");

    [
        fit(info.name),
        fit(&format!("#{tile:<2} {detail}")),
        fit(&pieces),
    ]
}

fn fit(text: &str) -> String {
    let clipped: String = text.chars().take(CELL_WIDTH - 1).collect();
    format!("{clipped:<width$}", width = CELL_WIDTH)
}

pub fn render_board_to_string(state: &GameState) -> String {
    let mut grid = vec![vec![" ".repeat(CELL_WIDTH); SIDE]; SIDE * CELL_LINES];
    for tile in 0..state.board.len() {
        let pos = ring_position(tile);
        for (line, text) in cell_text(state, tile).into_iter().enumerate() {
            grid[pos.row * CELL_LINES + line][pos.col] = text;
        }
    }
    grid.iter()
        .map(|row| row.concat().trim_end().to_string())
        .join("\n")
}

pub fn display_board(game: &Game) {
    println!("{}", render_board_to_string(&game.state));
}

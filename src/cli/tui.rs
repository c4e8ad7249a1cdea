use std::io::{self, Stdout, stdout};
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::Frame;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use crate::board::TileIndex;
use crate::cli::board_display::{CELL_LINES, CELL_WIDTH, SIDE, cell_text, ring_position};
use crate::cli::players::PlayerInstance;
use crate::env::{PendingView, snapshot};
use crate::game::action::{ActionPayload, GameAction};
use crate::game::game::Game;
use crate::game::players::PlayerId;
use crate::game::state::GamePhase;
use crate::players::BasePlayer;
use crate::types::{ActionType, TileKind};

pub type Terminal = ratatui::Terminal<CrosstermBackend<Stdout>>;

const PLAYER_COLORS: [Color; 8] = [
    Color::Red,
    Color::Blue,
    Color::Green,
    Color::Magenta,
    Color::Cyan,
    Color::Yellow,
    Color::LightRed,
    Color::LightBlue,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItem {
    Action(GameAction),
    StartGame,
    AddPlayer,
    RemovePlayer,
    ResetGame,
    ClearLog,
}

/// Hot-seat terminal front-end. Human seats pick from the menu; bot seats
/// move on their own after a short delay.
pub struct TuiApp {
    game: Game,
    /// Bot per zero-based seat; `None` is a human.
    bots: Vec<Option<PlayerInstance>>,
    menu: Vec<MenuItem>,
    selected: usize,
    show_help: bool,
    should_quit: bool,
    log_scroll: u16,
    log_max_scroll: u16,
    follow_log: bool,
    bot_delay: Duration,
    last_bot_move: Instant,
}

impl TuiApp {
    pub fn new(game: Game, bots: Vec<Option<PlayerInstance>>, bot_delay: Duration) -> Self {
        let mut app = Self {
            game,
            bots,
            menu: Vec::new(),
            selected: 0,
            show_help: false,
            should_quit: false,
            log_scroll: 0,
            log_max_scroll: 0,
            follow_log: true,
            bot_delay,
            last_bot_move: Instant::now(),
        };
        app.refresh_menu();
        app
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }

    pub fn run(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let result = loop {
            if self.should_quit {
                break Ok(());
            }
            self.tick_bots();

            if let Err(err) = terminal.draw(|f| self.render(f)) {
                break Err(err);
            }

            match crossterm::event::poll(Duration::from_millis(50)) {
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => self.handle_key(key),
                    Ok(_) => {}
                    Err(err) => break Err(err),
                },
                Ok(false) => {}
                Err(err) => break Err(err),
            }
        };

        // Always cleanup terminal state
        let _ = terminal.clear();
        let _ = disable_raw_mode();
        let _ = execute!(terminal.backend_mut(), DisableMouseCapture);
        let _ = terminal.show_cursor();

        result
    }

    fn current_bot(&self) -> Option<&PlayerInstance> {
        if !self.game.state.is_running() {
            return None;
        }
        let seat = self.game.state.current()?.id.seat();
        self.bots.get(seat)?.as_ref()
    }

    fn tick_bots(&mut self) {
        if self.last_bot_move.elapsed() < self.bot_delay {
            return;
        }
        let Some(bot) = self.current_bot() else {
            return;
        };
        let decision = bot.decide(&self.game, self.game.state.legal_actions());
        if let Some(action) = decision {
            self.game.execute(action);
        }
        self.last_bot_move = Instant::now();
        self.refresh_menu();
    }

    fn refresh_menu(&mut self) {
        let state = &self.game.state;
        self.menu = match state.phase {
            GamePhase::NotStarted => vec![
                MenuItem::StartGame,
                MenuItem::AddPlayer,
                MenuItem::RemovePlayer,
                MenuItem::ClearLog,
            ],
            GamePhase::Ended { .. } => vec![
                MenuItem::StartGame,
                MenuItem::ResetGame,
                MenuItem::ClearLog,
            ],
            GamePhase::Running if self.current_bot().is_some() => vec![MenuItem::ResetGame],
            GamePhase::Running => state
                .legal_actions()
                .iter()
                .cloned()
                .map(MenuItem::Action)
                .chain([MenuItem::ResetGame])
                .collect(),
        };
        if self.selected >= self.menu.len() {
            self.selected = 0;
        }
    }

    fn activate(&mut self, item: MenuItem) {
        // Rejections are reported through the status line.
        let state = &mut self.game.state;
        match item {
            MenuItem::Action(action) => {
                let _ = state.step(action);
            }
            MenuItem::StartGame => {
                let _ = state.start_game();
            }
            MenuItem::AddPlayer => {
                let _ = state.add_player();
            }
            MenuItem::RemovePlayer => {
                let _ = state.remove_last_player();
            }
            MenuItem::ResetGame => state.reset_game(),
            MenuItem::ClearLog => state.clear_log(),
        }
        self.selected = 0;
        self.follow_log = true;
        self.last_bot_move = Instant::now();
        self.refresh_menu();
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('h') => {
                self.show_help = !self.show_help;
            }
            KeyCode::Char('r') => self.activate(MenuItem::ResetGame),
            KeyCode::Char('c') => self.activate(MenuItem::ClearLog),
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.selected + 1 < self.menu.len() {
                    self.selected += 1;
                }
            }
            KeyCode::Char(ch @ '1'..='9') => {
                let idx = (ch as usize) - ('1' as usize);
                if let Some(item) = self.menu.get(idx).cloned() {
                    self.activate(item);
                }
            }
            KeyCode::Enter => {
                if let Some(item) = self.menu.get(self.selected).cloned() {
                    self.activate(item);
                }
            }
            KeyCode::PageUp => {
                self.follow_log = false;
                Self::adjust_scroll(&mut self.log_scroll, self.log_max_scroll, -5);
            }
            KeyCode::PageDown => {
                Self::adjust_scroll(&mut self.log_scroll, self.log_max_scroll, 5);
                self.follow_log = self.log_scroll >= self.log_max_scroll;
            }
            _ => {}
        }
    }

    fn render(&mut self, f: &mut Frame<'_>) {
        let area = f.size();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(20),   // Main content
                Constraint::Length(3), // Status bar
            ])
            .split(area);

        let board_width = (SIDE * CELL_WIDTH + 2) as u16;
        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(board_width), Constraint::Min(30)])
            .split(chunks[0]);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length((SIDE * CELL_LINES + 2) as u16),
                Constraint::Min(6),
            ])
            .split(main_chunks[0]);

        self.render_board(f, left[0]);
        self.render_pending(f, left[1]);
        self.render_right_panel(f, main_chunks[1]);
        self.render_status_bar(f, chunks[1]);
    }

    fn render_board(&self, f: &mut Frame<'_>, area: Rect) {
        let state = &self.game.state;
        let mut cells: Vec<Vec<Option<TileIndex>>> = vec![vec![None; SIDE]; SIDE];
        for tile in 0..state.board.len() {
            let pos = ring_position(tile);
            cells[pos.row][pos.col] = Some(tile);
        }

        let mut lines: Vec<Line<'_>> = Vec::with_capacity(SIDE * CELL_LINES);
        for row in &cells {
            let texts: Vec<Option<[String; CELL_LINES]>> = row
                .iter()
                .map(|tile| tile.map(|t| cell_text(state, t)))
                .collect();
            for line_idx in 0..CELL_LINES {
                let spans: Vec<Span<'_>> = row
                    .iter()
                    .zip(&texts)
                    .map(|(tile, text)| match (tile, text) {
                        (Some(tile), Some(text)) => {
                            Span::styled(text[line_idx].clone(), self.style_for_tile(*tile, line_idx))
                        }
                        _ => Span::raw(" ".repeat(CELL_WIDTH)),
                    })
                    .collect();
                lines.push(Line::from(spans));
            }
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title("Board")
            .title_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );
        f.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn style_for_tile(&self, tile: TileIndex, line_idx: usize) -> Style {
        let state = &self.game.state;
        let is_current = state
            .current()
            .is_some_and(|p| state.is_running() && p.position == tile);
        let mut style = match line_idx {
            0 => match state.board.tile(tile).map(|t| t.kind) {
                Some(TileKind::Start) => Style::default().fg(Color::Green),
                Some(TileKind::Jail) => Style::default().fg(Color::Red),
                Some(TileKind::FreeParking) => Style::default().fg(Color::Cyan),
                Some(TileKind::Opportunity) | Some(TileKind::Community) => {
                    Style::default().fg(Color::Yellow)
                }
                _ => Style::default().fg(Color::White),
            },
            1 => match state.ownership.owner_of(tile).and_then(|o| state.players.get(o)) {
                Some(owner) => Style::default().fg(color_for_player(owner.id)),
                None => Style::default().fg(Color::DarkGray),
            },
            _ => Style::default().add_modifier(Modifier::BOLD),
        };
        if is_current {
            style = style.add_modifier(Modifier::REVERSED);
        }
        style
    }

    fn render_pending(&self, f: &mut Frame<'_>, area: Rect) {
        let view = self
            .game
            .state
            .pending()
            .map(|pending| crate::env::pending_view(&self.game.state, pending));
        let (title, lines) = match view {
            Some(PendingView { title, prompt, .. }) => (
                title,
                vec![Line::from(Span::styled(
                    prompt,
                    Style::default().add_modifier(Modifier::BOLD),
                ))],
            ),
            None => (
                "Waiting".to_string(),
                vec![Line::from(self.idle_hint())],
            ),
        };
        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(title))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn idle_hint(&self) -> String {
        let state = &self.game.state;
        match state.phase {
            GamePhase::NotStarted => "Set up the table and start the game.".to_string(),
            GamePhase::Ended { .. } => "Game over. Start again or reset.".to_string(),
            GamePhase::Running => match (state.current(), self.current_bot()) {
                (Some(p), Some(_)) => format!("{} (bot) is thinking...", p.name),
                (Some(p), None) => format!("{}, roll the die.", p.name),
                _ => String::new(),
            },
        }
    }

    fn render_right_panel(&mut self, f: &mut Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(35), // Players
                Constraint::Percentage(25), // Actions
                Constraint::Percentage(40), // Log
            ])
            .split(area);

        self.render_players(f, chunks[0]);
        self.render_actions(f, chunks[1]);
        self.render_log(f, chunks[2]);
    }

    fn render_players(&self, f: &mut Frame<'_>, area: Rect) {
        let snap = snapshot(&self.game.state);
        let mut lines: Vec<Line<'_>> = vec![Line::from(vec![
            Span::raw("Turn "),
            Span::styled(
                snap.turn.to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   Last roll "),
            Span::styled(
                snap.last_roll.map(|r| r.to_string()).unwrap_or_else(|| "-".into()),
                Style::default().fg(Color::Yellow),
            ),
        ])];

        for player in &snap.players {
            let marker = if player.is_current { "> " } else { "  " };
            let label = match self.bots.get(player.id.seat()) {
                Some(Some(_)) => "BOT",
                _ => "HUM",
            };
            let mut flags = Vec::new();
            if player.in_jail {
                flags.push(format!("JAIL {}/{}", player.turns_in_jail, self.game.state.config.max_jail_turns));
            }
            if player.has_jail_skip_card {
                flags.push("free-card".to_string());
            }
            if player.has_immunity_card {
                flags.push("shield".to_string());
            }
            lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Yellow)),
                Span::styled(
                    format!("{} [{label}]", player.name),
                    Style::default()
                        .fg(color_for_player(player.id))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(
                    "  {} pts  @{} {}  cities {}",
                    player.score,
                    player.position,
                    player.tile_name,
                    player.owned_tiles.len()
                )),
                Span::styled(
                    if flags.is_empty() {
                        String::new()
                    } else {
                        format!("  ({})", flags.join(", "))
                    },
                    Style::default().fg(Color::Red),
                ),
            ]));
        }

        let title = match snap.winner {
            Some(winner) => format!("Players - winner {winner}"),
            None => format!("Players ({})", snap.prompt),
        };
        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(title))
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, area);
    }

    fn render_actions(&self, f: &mut Frame<'_>, area: Rect) {
        let view = self
            .game
            .state
            .pending()
            .map(|pending| crate::env::pending_view(&self.game.state, pending));
        let items: Vec<ListItem<'_>> = self
            .menu
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                let style = if idx == self.selected {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                let label = self.menu_label(item, view.as_ref());
                ListItem::new(format!("[{}] {}", idx + 1, label)).style(style)
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Available Actions"))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );
        let mut state = ListState::default();
        if !self.menu.is_empty() {
            state.select(Some(self.selected));
        }
        f.render_stateful_widget(list, area, &mut state);
    }

    fn menu_label(&self, item: &MenuItem, view: Option<&PendingView>) -> String {
        match item {
            MenuItem::StartGame => "Start game".to_string(),
            MenuItem::AddPlayer => "Add player".to_string(),
            MenuItem::RemovePlayer => "Remove last player".to_string(),
            MenuItem::ResetGame => "Reset game".to_string(),
            MenuItem::ClearLog => "Clear log".to_string(),
            MenuItem::Action(action) => action_label(action, view, &self.game),
        }
    }

    fn render_log(&mut self, f: &mut Frame<'_>, area: Rect) {
        let entries = self.game.state.log();
        let lines: Vec<Line<'_>> = if entries.is_empty() {
            vec![Line::from("Nothing has happened yet.")]
        } else {
            entries.iter().map(|entry| Line::from(entry.to_string())).collect()
        };

        let viewport_height = area.height.saturating_sub(2);
        let content_height = lines.len() as u16;
        self.log_max_scroll = content_height.saturating_sub(viewport_height);
        if self.follow_log || self.log_scroll > self.log_max_scroll {
            self.log_scroll = self.log_max_scroll;
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Game Log"))
            .scroll((self.log_scroll, 0));
        f.render_widget(paragraph, area);
    }

    fn render_status_bar(&self, f: &mut Frame<'_>, area: Rect) {
        let text = if self.show_help {
            "Up/Down: Navigate | Enter or 1-9: Select | PgUp/PgDn: Scroll log | r: Reset | c: Clear log | h: Toggle help | q/Esc: Quit".to_string()
        } else {
            format!("{}   (h for help)", self.game.state.status())
        };
        let paragraph = Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
    }

    fn adjust_scroll(current: &mut u16, max_scroll: u16, delta: i16) {
        let current_val = *current as i32 + delta as i32;
        let clamped = current_val.clamp(0, max_scroll as i32);
        *current = clamped as u16;
    }
}

fn color_for_player(id: PlayerId) -> Color {
    PLAYER_COLORS[id.seat() % PLAYER_COLORS.len()]
}

fn action_label(action: &GameAction, view: Option<&PendingView>, game: &Game) -> String {
    match (action.action_type, action.payload) {
        (ActionType::RollDice, _) => "Roll the die".to_string(),
        (ActionType::AnswerQuestion, ActionPayload::Choice(choice)) => {
            let letter = (b'A' + choice as u8) as char;
            let text = view
                .and_then(|v| v.options.get(choice))
                .cloned()
                .unwrap_or_default();
            format!("{letter}. {text}")
        }
        (ActionType::ConfirmCard, _) => "OK, apply the card".to_string(),
        (ActionType::PayJail, _) => format!("Pay {} points", game.state.config.jail_payment_cost),
        (ActionType::RollForJail, _) => "Roll for a 6".to_string(),
        (ActionType::UseJailCard, _) => "Use get-out-of-jail card".to_string(),
        (ActionType::SelectParking, ActionPayload::Tile(tile)) => {
            let name = game.state.board.tile(tile).map(|t| t.name).unwrap_or("?");
            format!("Park at {tile}: {name}")
        }
        _ => action.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;

    fn app(bots: Vec<Option<PlayerInstance>>) -> TuiApp {
        let config = GameConfig {
            initial_players: bots.len(),
            ..GameConfig::default()
        };
        let game = Game::new(config).expect("valid");
        TuiApp::new(game, bots, Duration::ZERO)
    }

    #[test]
    fn reset_is_offered_mid_game() {
        let mut app = app(vec![None, None]);
        app.activate(MenuItem::StartGame);
        assert!(app.game().state.is_running());
        assert_eq!(
            app.menu().first(),
            Some(&MenuItem::Action(GameAction::new(0, ActionType::RollDice)))
        );
        assert_eq!(app.menu().last(), Some(&MenuItem::ResetGame));

        app.activate(MenuItem::ResetGame);
        assert_eq!(app.game().state.phase, GamePhase::NotStarted);
        assert_eq!(app.menu().first(), Some(&MenuItem::StartGame));
    }

    #[test]
    fn bot_turns_still_allow_reset() {
        let mut app = app(vec![Some(PlayerInstance::Random(crate::players::RandomPlayer)), None]);
        app.activate(MenuItem::StartGame);
        assert_eq!(app.menu(), [MenuItem::ResetGame]);
    }
}

use std::io;
use std::time::{Duration, Instant};

use crate::ai::Difficulty;
use crate::config::AppConfig;
use crate::game::{GameState, Player};
use crate::scores::{ScoreBoard, ScoreStore};
use crate::session::{DropResult, Session};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};

use super::game_view::{self, GameView};

/// Board sizes cycled with `s`, as (rows, cols).
const BOARD_SIZES: [(usize, usize); 4] = [(6, 7), (7, 8), (8, 9), (5, 6)];

/// Turn limits cycled with `t`, in seconds.
const TURN_LIMITS: [u64; 3] = [10, 30, 60];

pub struct App {
    session: Session,
    scores: ScoreBoard,
    store: ScoreStore,
    difficulty: Difficulty,
    computer_side: Player,
    move_delay: Duration,
    computer_due: Option<Instant>,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(session: Session, config: &AppConfig, store: ScoreStore, scores: ScoreBoard) -> Self {
        let selected_column = session.board().center_column();
        App {
            session,
            scores,
            store,
            difficulty: config.computer.difficulty,
            computer_side: config.computer.player,
            move_delay: config.computer.move_delay(),
            computer_due: None,
            selected_column,
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            self.update(Instant::now());
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Advance the clock: turn timeouts and the delayed computer reply.
    fn update(&mut self, now: Instant) {
        if let Some(state) = self.session.tick(now) {
            self.finish_game(&state);
            return;
        }

        if !self.session.is_computer_turn() {
            self.computer_due = None;
            return;
        }
        match self.computer_due {
            None => self.computer_due = Some(now + self.move_delay),
            Some(due) if now >= due => {
                self.computer_due = None;
                if let Some(result) = self.session.play_computer_move(self.difficulty) {
                    self.after_drop(&result);
                }
            }
            Some(_) => {}
        }
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.session.board().cols() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.drop_piece(),
            KeyCode::Char('u') => self.undo(),
            KeyCode::Char('r') => {
                self.session.reset();
                self.computer_due = None;
                self.message = Some("New game started!".to_string());
            }
            KeyCode::Char('c') => self.toggle_computer(),
            KeyCode::Char('s') => self.next_board_size(),
            KeyCode::Char('t') => self.next_turn_limit(Instant::now()),
            KeyCode::Char('1') => self.set_difficulty(Difficulty::Easy),
            KeyCode::Char('2') => self.set_difficulty(Difficulty::Medium),
            KeyCode::Char('3') => self.set_difficulty(Difficulty::Hard),
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        if self.session.state().is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }
        if self.session.is_computer_turn() {
            self.message = Some("Computer is thinking...".to_string());
            return;
        }

        let result = self.session.drop_piece(self.selected_column);
        if result.applied {
            self.after_drop(&result);
        } else {
            self.message = Some("Column is full!".to_string());
        }
    }

    fn undo(&mut self) {
        if self.session.is_computer_turn() {
            self.message = Some("Wait for the computer to move.".to_string());
            return;
        }
        if !self.session.undo() {
            self.message = Some("Nothing to undo.".to_string());
        }
    }

    fn toggle_computer(&mut self) {
        let computer = match self.session.computer() {
            Some(_) => None,
            None => Some(self.computer_side),
        };
        self.session.set_computer(computer);
        self.computer_due = None;
        self.message = Some(match computer {
            Some(side) => format!("Playing against the computer ({})", side.name()),
            None => "Playing against a human".to_string(),
        });
    }

    fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.message = Some(format!("Difficulty: {}", difficulty.name()));
    }

    fn next_board_size(&mut self) {
        let board = self.session.board();
        let current = (board.rows(), board.cols());
        let next = BOARD_SIZES
            .iter()
            .position(|&size| size == current)
            .map_or(BOARD_SIZES[0], |idx| BOARD_SIZES[(idx + 1) % BOARD_SIZES.len()]);

        match self.session.resize(next.0, next.1) {
            Ok(()) => {
                self.selected_column = self.session.board().center_column();
                self.computer_due = None;
                self.message = Some(format!("Board size {}x{}", next.0, next.1));
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    fn next_turn_limit(&mut self, now: Instant) {
        let current = self.session.turn_limit().as_secs();
        let next = TURN_LIMITS
            .iter()
            .position(|&secs| secs == current)
            .map_or(TURN_LIMITS[0], |idx| TURN_LIMITS[(idx + 1) % TURN_LIMITS.len()]);

        self.session.set_turn_limit(Duration::from_secs(next), now);
        self.message = Some(format!("Turn limit: {next}s"));
    }

    fn after_drop(&mut self, result: &DropResult) {
        if result.state.is_terminal() {
            self.finish_game(&result.state);
        }
    }

    /// Announce the result and persist the win counters.
    fn finish_game(&mut self, state: &GameState) {
        self.message = Some(match state {
            GameState::Won { player, cells } if cells.is_empty() => {
                format!("{} ran out of time! {} wins!", player.other().name(), player.name())
            }
            GameState::Won { player, .. } => format!("{} wins!", player.name()),
            GameState::Draw => "It's a draw!".to_string(),
            GameState::InProgress => return,
        });

        if let Some(winner) = state.winner() {
            self.scores.record_win(winner);
            if let Err(e) = self.store.save(&self.scores) {
                tracing::error!("failed to save scores: {e}");
                self.message = Some(format!("Could not save scores: {e}"));
            }
        }
    }

    fn mode(&self) -> String {
        match self.session.computer() {
            Some(side) => format!("vs Computer ({}, {})", side.name(), self.difficulty.name()),
            None => "vs Human".to_string(),
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        let view = GameView {
            session: &self.session,
            selected_column: self.selected_column,
            message: self.message.as_deref(),
            mode: self.mode(),
            scores: self.scores,
            time_left: self.session.time_left(Instant::now()),
        };
        game_view::render(frame, &view);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn app_with(config: &AppConfig) -> (App, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = ScoreStore::new(dir.path().join("scores.json"));
        let session = config.new_session().unwrap();
        (App::new(session, config, store, ScoreBoard::default()), dir)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_win_records_and_saves_score() {
        let (mut app, _dir) = app_with(&AppConfig::default());
        for col in [0, 0, 1, 1, 2, 2, 3] {
            app.selected_column = col;
            press(&mut app, KeyCode::Enter);
        }
        assert_eq!(app.scores.red, 1);
        assert_eq!(app.store.load().unwrap().red, 1);
        assert_eq!(app.message.as_deref(), Some("Red wins!"));
    }

    #[test]
    fn test_computer_replies_after_delay() {
        let mut config = AppConfig::default();
        config.computer.enabled = true;
        config.computer.difficulty = Difficulty::Easy;
        config.computer.move_delay_ms = 500;
        let (mut app, _dir) = app_with(&config);

        press(&mut app, KeyCode::Enter);
        assert!(app.session.is_computer_turn());

        let now = Instant::now();
        app.update(now);
        assert!(app.session.is_computer_turn(), "reply must wait for the delay");
        app.update(now + Duration::from_millis(600));
        assert_eq!(app.session.history().len(), 2);
        assert_eq!(app.session.current_player(), Player::Red);
    }

    #[test]
    fn test_timeout_awards_opponent_point() {
        let (mut app, _dir) = app_with(&AppConfig::default());
        app.update(Instant::now() + Duration::from_secs(31));
        assert_eq!(app.scores.yellow, 1);
        assert_eq!(
            app.message.as_deref(),
            Some("Red ran out of time! Yellow wins!")
        );
    }

    #[test]
    fn test_selection_stays_on_board() {
        let (mut app, _dir) = app_with(&AppConfig::default());
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_column, 6);
        for _ in 0..10 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.selected_column, 0);
    }

    #[test]
    fn test_board_size_cycles() {
        let (mut app, _dir) = app_with(&AppConfig::default());
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.session.board().cols(), 8);
        assert_eq!(app.selected_column, 4);
    }

    #[test]
    fn test_toggle_computer_and_difficulty() {
        let (mut app, _dir) = app_with(&AppConfig::default());
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.session.computer(), Some(Player::Yellow));
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.difficulty, Difficulty::Hard);
        assert_eq!(app.mode(), "vs Computer (Yellow, Hard)");
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.session.computer(), None);
    }

    #[test]
    fn test_undo_ignored_while_computer_thinks() {
        let mut config = AppConfig::default();
        config.computer.enabled = true;
        config.computer.difficulty = Difficulty::Easy;
        let (mut app, _dir) = app_with(&config);

        press(&mut app, KeyCode::Enter);
        assert!(app.session.is_computer_turn());
        press(&mut app, KeyCode::Char('u'));
        assert_eq!(app.session.history().len(), 1);
        assert_eq!(
            app.message.as_deref(),
            Some("Wait for the computer to move.")
        );
    }

    #[test]
    fn test_undo_after_reply_takes_back_both_moves() {
        let mut config = AppConfig::default();
        config.computer.enabled = true;
        config.computer.difficulty = Difficulty::Easy;
        config.computer.move_delay_ms = 0;
        let (mut app, _dir) = app_with(&config);

        press(&mut app, KeyCode::Enter);
        let now = Instant::now();
        app.update(now);
        app.update(now + Duration::from_millis(1));
        assert_eq!(app.session.history().len(), 2);

        press(&mut app, KeyCode::Char('u'));
        assert!(app.session.history().is_empty());
        assert_eq!(app.session.current_player(), Player::Red);
        assert_eq!(app.message, None);

        press(&mut app, KeyCode::Char('u'));
        assert_eq!(app.message.as_deref(), Some("Nothing to undo."));
    }

    #[test]
    fn test_turn_limit_cycles_and_restarts_clock() {
        let (mut app, _dir) = app_with(&AppConfig::default());
        assert_eq!(app.session.turn_limit(), Duration::from_secs(30));

        let later = Instant::now() + Duration::from_secs(25);
        app.next_turn_limit(later);
        assert_eq!(app.session.turn_limit(), Duration::from_secs(60));
        assert_eq!(app.session.time_left(later), Duration::from_secs(60));
        assert_eq!(app.message.as_deref(), Some("Turn limit: 60s"));

        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.session.turn_limit(), Duration::from_secs(10));
    }

    #[test]
    fn test_quit() {
        let (mut app, _dir) = app_with(&AppConfig::default());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}

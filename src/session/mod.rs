//! Game session controller: turn order, move history and undo, terminal
//! transitions, the turn deadline, and the event log.

mod log;
mod timer;

use std::time::{Duration, Instant};

pub use log::{GameLog, DEFAULT_LOG_CAPACITY};
pub use timer::{TurnTimer, DEFAULT_TURN_LIMIT};

use crate::ai::{Agent, Difficulty};
use crate::error::GameError;
use crate::game::{check_draw, check_win, Board, GameState, Move, Player};

/// Outcome of a drop request. `applied` is false (and `row` is `None`) when
/// the game is over or the column has no room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropResult {
    pub applied: bool,
    pub row: Option<usize>,
    pub state: GameState,
}

/// One game table: board, players, history and clock.
///
/// Red always opens. When a computer opponent is set, the session does not
/// move for it on its own; the caller asks for [`Session::play_computer_move`]
/// whenever [`Session::is_computer_turn`] holds.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    current_player: Player,
    state: GameState,
    history: Vec<Move>,
    computer: Option<Player>,
    timer: TurnTimer,
    log: GameLog,
    game_number: u32,
}

impl Session {
    /// Start the first game on an empty `rows x cols` board
    pub fn new(rows: usize, cols: usize) -> Result<Self, GameError> {
        let board = Board::new(rows, cols)?;
        let mut session = Session {
            board,
            current_player: Player::Red,
            state: GameState::InProgress,
            history: Vec::new(),
            computer: None,
            timer: TurnTimer::default(),
            log: GameLog::new(),
            game_number: 1,
        };
        session.log_game_start();
        Ok(session)
    }

    pub fn with_turn_limit(mut self, limit: Duration) -> Self {
        self.timer.set_limit(limit, Instant::now());
        self
    }

    pub fn with_log_capacity(mut self, capacity: usize) -> Self {
        self.log.set_capacity(capacity);
        self
    }

    pub fn with_computer(mut self, computer: Option<Player>) -> Self {
        self.computer = computer;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn computer(&self) -> Option<Player> {
        self.computer
    }

    pub fn log(&self) -> &GameLog {
        &self.log
    }

    pub fn game_number(&self) -> u32 {
        self.game_number
    }

    pub fn turn_limit(&self) -> Duration {
        self.timer.limit()
    }

    /// Time left for the player on move
    pub fn time_left(&self, now: Instant) -> Duration {
        self.timer.remaining(now)
    }

    /// Whether the computer opponent is the one on move
    pub fn is_computer_turn(&self) -> bool {
        !self.state.is_terminal() && self.computer == Some(self.current_player)
    }

    /// Drop the current player's piece into `col`.
    pub fn drop_piece(&mut self, col: usize) -> DropResult {
        if self.state.is_terminal() {
            return self.rejected();
        }
        let player = self.current_player;
        let Ok(row) = self.board.drop_piece(col, player) else {
            return self.rejected();
        };

        self.history.push(Move { row, col, player });
        self.log
            .push(format!("Player {} placed in column {}", player.label(), col + 1));

        if let Some(cells) = check_win(&self.board, row, col) {
            self.state = GameState::Won { player, cells };
            self.log
                .push(format!("Game {}: {} wins!", self.game_number, player.label()));
        } else if check_draw(&self.board) {
            self.state = GameState::Draw;
            self.log.push(format!("Game {}: Draw!", self.game_number));
        } else {
            self.current_player = player.other();
            self.timer.restart(Instant::now());
        }

        DropResult {
            applied: true,
            row: Some(row),
            state: self.state.clone(),
        }
    }

    /// Take back the last move. With a computer opponent, a second move is
    /// taken back when the first one leaves the computer on move, so the
    /// human is always the one to play afterwards. Returns false when there
    /// is nothing to undo.
    pub fn undo(&mut self) -> bool {
        if !self.pop_move() {
            return false;
        }
        if self.computer == Some(self.current_player) {
            self.pop_move();
        }
        true
    }

    /// Column the computer would play for the side on move, or `None` when
    /// the game is over.
    pub fn request_computer_move(&self, difficulty: Difficulty) -> Option<usize> {
        let mut agent = difficulty.agent();
        self.request_move_with(agent.as_mut())
    }

    /// Ask an arbitrary agent for a column for the side on move.
    pub fn request_move_with(&self, agent: &mut dyn Agent) -> Option<usize> {
        if self.state.is_terminal() {
            return None;
        }
        let col = agent.select_column(&self.board, self.current_player);
        tracing::debug!(
            agent = agent.name(),
            player = self.current_player.name(),
            column = ?col,
            "computer move selected"
        );
        col
    }

    /// Compute the computer's column and play it.
    pub fn play_computer_move(&mut self, difficulty: Difficulty) -> Option<DropResult> {
        let col = self.request_computer_move(difficulty)?;
        Some(self.drop_piece(col))
    }

    /// The player on move ran out of time: the opponent wins. Has no effect
    /// on a finished game. Returns the resulting state.
    pub fn on_turn_timeout(&mut self) -> GameState {
        if !self.state.is_terminal() {
            let winner = self.current_player.other();
            self.state = GameState::Won {
                player: winner,
                cells: Vec::new(),
            };
            self.log.push(format!(
                "Game {}: {} wins due to timeout!",
                self.game_number,
                winner.label()
            ));
        }
        self.state.clone()
    }

    /// Check the turn deadline against `now`. Returns the new state if the
    /// turn timed out.
    pub fn tick(&mut self, now: Instant) -> Option<GameState> {
        if self.state.is_terminal() || !self.timer.is_expired(now) {
            return None;
        }
        Some(self.on_turn_timeout())
    }

    /// Start the next game on a cleared board with Red to move.
    pub fn reset(&mut self) {
        self.board.clear();
        self.history.clear();
        self.current_player = Player::Red;
        self.state = GameState::InProgress;
        self.timer.restart(Instant::now());
        self.game_number += 1;
        self.log_game_start();
    }

    /// Replace the board with a `rows x cols` one and start a new game. On
    /// error the session is left untouched.
    pub fn resize(&mut self, rows: usize, cols: usize) -> Result<(), GameError> {
        self.board = Board::new(rows, cols)?;
        self.reset();
        Ok(())
    }

    /// Enable or disable the computer opponent; starts a new game.
    pub fn set_computer(&mut self, computer: Option<Player>) {
        self.computer = computer;
        self.reset();
    }

    /// Change the turn limit; the player on move gets a fresh countdown.
    pub fn set_turn_limit(&mut self, limit: Duration, now: Instant) {
        self.timer.set_limit(limit, now);
        self.log
            .push(format!("Turn limit set to {} seconds", limit.as_secs()));
    }

    fn pop_move(&mut self) -> bool {
        let Some(last) = self.history.pop() else {
            return false;
        };
        self.board.remove(last.row, last.col);
        self.current_player = last.player;
        self.state = GameState::InProgress;
        self.timer.restart(Instant::now());
        self.log.push(format!(
            "Undo: Player {} removed move from column {}",
            last.player.label(),
            last.col + 1
        ));
        true
    }

    fn rejected(&self) -> DropResult {
        DropResult {
            applied: false,
            row: None,
            state: self.state.clone(),
        }
    }

    fn log_game_start(&mut self) {
        self.log
            .push(format!("--- Game {} Started ---", self.game_number));
    }
}

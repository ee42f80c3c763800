//! Core Connect Four game logic: board representation, player types, win and
//! draw detection, and the game status.

mod board;
mod player;
pub mod rules;
mod state;

pub use board::{Board, Cell, MoveError, Position, DEFAULT_COLS, DEFAULT_ROWS, MIN_DIMENSION};
pub use player::Player;
pub use rules::{check_draw, check_win, has_any_win};
pub use state::{GameState, Move};

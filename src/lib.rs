//! # Connect Four
//!
//! Connect Four on a board of any size (at least 4x4), against another human
//! or a minimax computer opponent, with undo, a per-turn countdown, persisted
//! scores and a game log. Ships with a terminal UI built on Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Board, players, win/draw detection, game status
//! - [`ai`] — Agent trait, positional heuristic, minimax with alpha-beta, difficulty levels
//! - [`session`] — Session controller: turns, history/undo, turn timer, event log
//! - [`scores`] — Win counters persisted as JSON
//! - [`ui`] — Terminal UI
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod scores;
pub mod session;
pub mod ui;

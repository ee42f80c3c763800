//! Terminal UI: game screen with the board, scores, countdown and game log.

mod app;
pub mod board_widget;
mod game_view;

pub use app::App;

use crate::game::{Board, Player};

/// Universal interface for computer opponents.
pub trait Agent {
    /// Select a column for `player` on `board`. Returns `None` only when no
    /// column has room.
    fn select_column(&mut self, board: &Board, player: Player) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

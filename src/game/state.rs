use super::{Player, Position};

/// Status of a game, recomputed after every move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    /// `cells` holds the winning run; it is empty when the win came from the
    /// opponent running out of time.
    Won { player: Player, cells: Vec<Position> },
    Draw,
}

impl GameState {
    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameState::InProgress)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameState::Won { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Cells to highlight, empty unless the game was won on the board
    pub fn winning_cells(&self) -> &[Position] {
        match self {
            GameState::Won { cells, .. } => cells,
            _ => &[],
        }
    }
}

/// A successful drop, kept in the session history for undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub player: Player,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_progress_is_not_terminal() {
        let state = GameState::InProgress;
        assert!(!state.is_terminal());
        assert_eq!(state.winner(), None);
        assert!(state.winning_cells().is_empty());
    }

    #[test]
    fn test_won_exposes_winner_and_cells() {
        let cells = vec![Position::new(5, 0), Position::new(5, 1)];
        let state = GameState::Won {
            player: Player::Yellow,
            cells: cells.clone(),
        };
        assert!(state.is_terminal());
        assert_eq!(state.winner(), Some(Player::Yellow));
        assert_eq!(state.winning_cells(), cells.as_slice());
    }

    #[test]
    fn test_draw_is_terminal() {
        assert!(GameState::Draw.is_terminal());
        assert_eq!(GameState::Draw.winner(), None);
    }
}

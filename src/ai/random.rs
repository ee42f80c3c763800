use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::game::{Board, Player};

use super::agent::Agent;

/// An agent that picks uniformly among the columns with room.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible agent for tests and replays
    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_column(&mut self, board: &Board, _player: Player) -> Option<usize> {
        board.valid_columns().choose(&mut self.rng).copied()
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::check_win;

    #[test]
    fn test_random_agent_selects_legal_column() {
        let mut agent = RandomAgent::new();
        let mut board = Board::default();
        for _ in 0..6 {
            board.drop_piece(2, Player::Red).unwrap();
        }

        for _ in 0..100 {
            let col = agent.select_column(&board, Player::Yellow).unwrap();
            assert!(board.has_room(col), "Column {col} is full");
        }
    }

    #[test]
    fn test_random_agent_plays_full_game() {
        let mut agent1 = RandomAgent::with_seed(1);
        let mut agent2 = RandomAgent::with_seed(2);
        let mut board = Board::default();
        let mut player = Player::Red;

        let mut finished = false;
        loop {
            let agent = if player == Player::Red {
                &mut agent1
            } else {
                &mut agent2
            };
            let Some(col) = agent.select_column(&board, player) else {
                break;
            };
            let row = board.drop_piece(col, player).unwrap();
            if check_win(&board, row, col).is_some() {
                finished = true;
                break;
            }
            player = player.other();
        }

        assert!(finished || board.is_full());
    }

    #[test]
    fn test_seeded_agents_agree() {
        let board = Board::default();
        let mut a = RandomAgent::with_seed(42);
        let mut b = RandomAgent::with_seed(42);
        for _ in 0..20 {
            assert_eq!(
                a.select_column(&board, Player::Red),
                b.select_column(&board, Player::Red)
            );
        }
    }

    #[test]
    fn test_full_board_has_no_choice() {
        let mut board = Board::new(4, 4).unwrap();
        for col in 0..4 {
            for _ in 0..4 {
                board.drop_piece(col, Player::Red).unwrap();
            }
        }
        assert_eq!(RandomAgent::new().select_column(&board, Player::Yellow), None);
    }

    #[test]
    fn test_random_agent_name() {
        assert_eq!(RandomAgent::new().name(), "Random");
    }
}

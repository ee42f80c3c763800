use crate::game::rules::DIRECTIONS;
use crate::game::{Board, Cell, Player};

/// Bonus per piece in the centre column.
const CENTER_WEIGHT: i32 = 3;

/// Half-width of the window sampled around each occupied cell.
const WINDOW_REACH: isize = 3;

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, player: Player) -> i32;
}

/// Default heuristic: centre-column control plus a 7-cell window sampled along
/// every axis through every occupied cell.
///
/// Windows overlap, so the same line is credited once per piece it contains.
/// That over-count is part of the scoring and is kept as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowHeuristic;

impl WindowHeuristic {
    fn score_window(count: usize, empty: usize, blocked: usize) -> i32 {
        if count >= 4 {
            10_000
        } else if count == 3 && empty >= 1 && blocked == 0 {
            1_000
        } else if count == 2 && empty >= 2 && blocked == 0 {
            100
        } else if count == 1 && empty >= 3 && blocked == 0 {
            10
        } else {
            0
        }
    }

    /// Sum of the window scores through `(row, col)` for the cell's owner.
    fn score_cell(board: &Board, row: usize, col: usize, owner: Cell) -> i32 {
        let mut score = 0;
        for (dr, dc) in DIRECTIONS {
            let mut count = 0;
            let mut empty = 0;
            let mut blocked = 0;
            for i in -WINDOW_REACH..=WINDOW_REACH {
                let r = row as isize + dr * i;
                let c = col as isize + dc * i;
                if !board.in_bounds(r, c) {
                    continue;
                }
                match board.get(r as usize, c as usize) {
                    cell if cell == owner => count += 1,
                    Cell::Empty => empty += 1,
                    _ => blocked += 1,
                }
            }
            score += Self::score_window(count, empty, blocked);
        }
        score
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i32 {
        let mut score = 0;

        // Center column bonus
        let center = board.center_column();
        for row in 0..board.rows() {
            match board.get(row, center).player() {
                Some(p) if p == player => score += CENTER_WEIGHT,
                Some(_) => score -= CENTER_WEIGHT,
                None => {}
            }
        }

        for (pos, owner) in board.occupied() {
            let cell_score = Self::score_cell(board, pos.row, pos.col, owner.to_cell());
            if owner == player {
                score += cell_score;
            } else {
                score -= cell_score;
            }
        }

        score
    }
}

/// Score `board` for `player` with the default heuristic.
pub fn evaluate_board(board: &Board, player: Player) -> i32 {
    WindowHeuristic.evaluate(board, player)
}

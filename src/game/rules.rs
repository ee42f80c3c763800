//! Terminal-state detection: four-in-a-row scans and the draw check.

use super::board::{Board, Position};

/// Axes scanned for a line: horizontal, vertical, diagonal `\`, diagonal `/`.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Pieces needed in a line to win.
pub const CONNECT: usize = 4;

/// Check whether the piece at `(row, col)` completes a line for its owner.
///
/// Walks at most three steps each way along every axis, stopping at the first
/// cell not owned by the same player. Returns the matched run of the first
/// axis holding at least four pieces (origin first, then the forward run, then
/// the backward run), or `None`.
pub fn check_win(board: &Board, row: usize, col: usize) -> Option<Vec<Position>> {
    let cell = board.get(row, col);
    if cell.is_empty() {
        return None;
    }

    for (dr, dc) in DIRECTIONS {
        let mut cells = vec![Position::new(row, col)];
        for sign in [1, -1] {
            for step in 1..CONNECT as isize {
                let r = row as isize + dr * step * sign;
                let c = col as isize + dc * step * sign;
                if !board.in_bounds(r, c) || board.get(r as usize, c as usize) != cell {
                    break;
                }
                cells.push(Position::new(r as usize, c as usize));
            }
        }
        if cells.len() >= CONNECT {
            return Some(cells);
        }
    }

    None
}

/// Whether any occupied cell on the board is part of a winning line.
pub fn has_any_win(board: &Board) -> bool {
    board
        .occupied()
        .any(|(pos, _)| check_win(board, pos.row, pos.col).is_some())
}

/// A full board is a draw. Only meaningful once the move that filled it has
/// been checked with [`check_win`].
pub fn check_draw(board: &Board) -> bool {
    board.is_full()
}

//! Fixed-depth minimax with alpha-beta pruning.
//!
//! The search explores by placing a piece, recursing, and removing the piece
//! again, so it needs exclusive use of the board for the whole call. Callers
//! holding a live game board go through [`best_move`], which searches a clone.

use crate::game::{has_any_win, Board, Player};

use super::agent::Agent;
use super::heuristic::{Heuristic, WindowHeuristic};

/// Outcome of one search call. `column` is `None` at terminal nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    pub column: Option<usize>,
}

/// Minimax searcher scoring leaves from `ai`'s point of view.
pub struct Searcher<'a> {
    ai: Player,
    heuristic: &'a dyn Heuristic,
    nodes: u64,
}

impl<'a> Searcher<'a> {
    pub fn new(ai: Player, heuristic: &'a dyn Heuristic) -> Self {
        Searcher {
            ai,
            heuristic,
            nodes: 0,
        }
    }

    /// Nodes visited since construction
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Search `depth` plies. The maximizing side plays `ai`, the minimizing
    /// side its opponent. Columns are tried left to right and only a strictly
    /// better score replaces the current best, so ties go to the leftmost
    /// column.
    pub fn search(
        &mut self,
        board: &mut Board,
        depth: usize,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> SearchResult {
        self.nodes += 1;

        let columns = board.valid_columns();
        if depth == 0 || columns.is_empty() || has_any_win(board) {
            return SearchResult {
                score: self.heuristic.evaluate(board, self.ai),
                column: None,
            };
        }

        let mover = if maximizing { self.ai } else { self.ai.other() };
        let mut best = SearchResult {
            score: if maximizing { i32::MIN } else { i32::MAX },
            column: None,
        };

        for col in columns {
            let Some(row) = board.lowest_empty_row(col) else {
                continue;
            };
            board.place(row, col, mover);
            let score = self.search(board, depth - 1, !maximizing, alpha, beta).score;
            board.remove(row, col);

            if maximizing {
                if score > best.score {
                    best = SearchResult {
                        score,
                        column: Some(col),
                    };
                }
                alpha = alpha.max(best.score);
            } else {
                if score < best.score {
                    best = SearchResult {
                        score,
                        column: Some(col),
                    };
                }
                beta = beta.min(best.score);
            }
            if beta <= alpha {
                break;
            }
        }

        best
    }
}

/// Best column for `player` searching `depth` plies on a private copy of
/// `board`.
pub fn best_move(
    board: &Board,
    depth: usize,
    player: Player,
    heuristic: &dyn Heuristic,
) -> SearchResult {
    let mut scratch = board.clone();
    let mut searcher = Searcher::new(player, heuristic);
    let result = searcher.search(&mut scratch, depth, true, i32::MIN, i32::MAX);
    tracing::debug!(
        player = player.name(),
        depth,
        column = ?result.column,
        score = result.score,
        nodes = searcher.nodes(),
        "minimax search finished"
    );
    result
}

/// Minimax agent with alpha-beta pruning.
pub struct MinimaxAgent {
    depth: usize,
    heuristic: Box<dyn Heuristic>,
}

impl MinimaxAgent {
    pub fn new(depth: usize) -> Self {
        MinimaxAgent {
            depth,
            heuristic: Box::new(WindowHeuristic),
        }
    }

    pub fn with_heuristic(depth: usize, heuristic: Box<dyn Heuristic>) -> Self {
        MinimaxAgent { depth, heuristic }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Agent for MinimaxAgent {
    fn select_column(&mut self, board: &Board, player: Player) -> Option<usize> {
        best_move(board, self.depth, player, self.heuristic.as_ref()).column
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}

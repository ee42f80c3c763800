mod agent;
mod difficulty;
pub mod heuristic;
pub mod minimax;
mod random;

pub use agent::Agent;
pub use difficulty::Difficulty;
pub use heuristic::{evaluate_board, Heuristic, WindowHeuristic};
pub use minimax::{best_move, MinimaxAgent, SearchResult, Searcher};
pub use random::RandomAgent;

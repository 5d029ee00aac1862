mod game_tree;
mod heuristic;
mod human_agent;
mod minimax_ab_agent;
mod minimax_agent;
mod random_agent;
mod util;

pub use game_tree::GameTree;
pub use heuristic::{Heuristic, WeightTable, TERMINAL_SCORE};
pub use human_agent::HumanAgent;
pub use minimax_ab_agent::MinimaxABAgent;
pub use minimax_agent::MinimaxAgent;
pub use random_agent::RandomAgent;

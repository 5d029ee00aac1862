use crate::game_tree::GameTree;
use crate::heuristic::{Heuristic, WeightTable};
use crate::util::MoveShuffler;
use lib_boardgame::{GameAgent, GameState, PlayerColor};
use lib_reversi::{BoardPosition, ReversiError, ReversiState};

/// Minimax with alpha-beta pruning: same leaf and terminal rules as the
/// full-depth search, but carries (alpha, beta) bounds and stops iterating
/// a node's moves once the window closes. The resulting tree holds only the
/// children actually explored before the cutoff.
///
/// For a fixed move order this picks the same top-level move, with the same
/// root evaluation, as the unpruned search. With shuffling enabled the two
/// are independently randomized and only guaranteed equally optimal.
pub struct MinimaxABAgent {
    depth: u32,
    table: WeightTable,
    shuffler: MoveShuffler,
}

impl MinimaxABAgent {
    pub fn new(depth: u32, board_size: usize) -> Self {
        MinimaxABAgent {
            depth,
            table: WeightTable::for_size(board_size),
            shuffler: MoveShuffler::Thread,
        }
    }

    /// Shuffles with a seeded generator, so ties resolve reproducibly.
    pub fn seeded(depth: u32, board_size: usize, seed: u64) -> Self {
        MinimaxABAgent {
            depth,
            table: WeightTable::for_size(board_size),
            shuffler: MoveShuffler::seeded(seed),
        }
    }

    /// No shuffling: moves are explored in the engine's enumeration order.
    pub fn deterministic(depth: u32, board_size: usize) -> Self {
        MinimaxABAgent {
            depth,
            table: WeightTable::for_size(board_size),
            shuffler: MoveShuffler::Disabled,
        }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Re-parameterize the heuristic after a board size change.
    pub fn set_heuristic(&mut self, board_size: usize) {
        self.table = WeightTable::for_size(board_size);
    }

    /// Builds the evaluated (and possibly pruned) search tree rooted at the
    /// move that produced `state`.
    pub fn search_tree(
        &self,
        state: &ReversiState,
        previous_move: Option<BoardPosition>,
    ) -> Result<GameTree<BoardPosition>, ReversiError> {
        self.minimax(previous_move, state, 0, i32::MIN, i32::MAX)
    }

    fn minimax(
        &self,
        action: Option<BoardPosition>,
        state: &ReversiState,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
    ) -> Result<GameTree<BoardPosition>, ReversiError> {
        let white_move = state.current_player_turn() == PlayerColor::White;
        let mut node = GameTree::new(action, white_move);

        // Depth cutoff. The root is exempt so a depth-0 search still
        // expands one ply.
        if depth >= self.depth && depth > 0 {
            node.set_evaluation(self.table.evaluate(state));
            return Ok(node);
        }

        let mut moves = state.legal_moves().to_vec();

        if moves.is_empty() {
            node.set_evaluation(self.table.evaluate(state));
            return Ok(node);
        }

        self.shuffler.shuffle(&mut moves);

        let mut best_value = if white_move { i32::MIN } else { i32::MAX };

        for m in moves {
            let next_state = state.advanced(m)?;
            let subtree = self.minimax(Some(m), &next_state, depth + 1, alpha, beta)?;
            let subtree_value = subtree.evaluation();

            node.add_child(subtree);

            if white_move && best_value < subtree_value {
                // The maximizer raises alpha.
                best_value = subtree_value;
                alpha = alpha.max(best_value);
                if beta <= alpha {
                    break;
                }
            } else if !white_move && best_value > subtree_value {
                // The minimizer lowers beta.
                best_value = subtree_value;
                beta = beta.min(best_value);
                if beta <= alpha {
                    break;
                }
            }
        }

        // Final value over the children actually explored.
        node.set_evaluation(best_value);
        Ok(node)
    }
}

impl GameAgent<ReversiState> for MinimaxABAgent {
    fn pick_move(
        &self,
        state: &ReversiState,
        previous_move: Option<BoardPosition>,
    ) -> Result<BoardPosition, ReversiError> {
        let tree = self.search_tree(state, previous_move)?;

        tree.best_child()
            .and_then(|child| child.action())
            .ok_or(ReversiError::NoLegalMoves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minimax_agent::MinimaxAgent;

    #[test]
    fn picked_move_is_legal() {
        let state = ReversiState::new();
        let agent = MinimaxABAgent::new(2, 8);

        let picked = agent.pick_move(&state, None).unwrap();

        assert!(state.legal_moves().contains(&picked));
    }

    #[test]
    fn pruned_tree_is_never_larger_than_the_full_tree() {
        fn node_count(tree: &GameTree<BoardPosition>) -> usize {
            1 + tree.children().iter().map(node_count).sum::<usize>()
        }

        let mut state = ReversiState::new();
        state.apply_move(BoardPosition::new(2, 4)).unwrap();

        let full = MinimaxAgent::deterministic(3, 8)
            .search_tree(&state, None)
            .unwrap();
        let pruned = MinimaxABAgent::deterministic(3, 8)
            .search_tree(&state, None)
            .unwrap();

        assert!(node_count(&pruned) <= node_count(&full));
    }

    #[test]
    fn agrees_with_full_minimax_from_the_start() {
        let state = ReversiState::new();

        let full = MinimaxAgent::deterministic(2, 8);
        let pruned = MinimaxABAgent::deterministic(2, 8);

        let full_tree = full.search_tree(&state, None).unwrap();
        let pruned_tree = pruned.search_tree(&state, None).unwrap();

        assert_eq!(full_tree.evaluation(), pruned_tree.evaluation());
        assert_eq!(
            full.pick_move(&state, None).unwrap(),
            pruned.pick_move(&state, None).unwrap()
        );
    }

    #[test]
    fn terminal_root_reports_no_legal_moves() {
        let mut state = ReversiState::new();
        let raw = vec![vec![1i8; 8]; 8];
        state.install_grid(raw, PlayerColor::Black).unwrap();

        let agent = MinimaxABAgent::deterministic(2, 8);

        assert_eq!(
            Err(ReversiError::NoLegalMoves),
            agent.pick_move(&state, None)
        );
    }
}

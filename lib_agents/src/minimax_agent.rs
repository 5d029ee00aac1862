use crate::game_tree::GameTree;
use crate::heuristic::{Heuristic, WeightTable};
use crate::util::MoveShuffler;
use lib_boardgame::{GameAgent, GameState, PlayerColor};
use lib_reversi::{BoardPosition, ReversiError, ReversiState};

/// Full-depth minimax: explores every legal continuation to the configured
/// depth, scoring leaves with the positional heuristic, and picks the move
/// whose subtree is extremal for the side to move. White maximizes the
/// (White-favoring) evaluation; Black minimizes it.
///
/// Depth 0 degenerates to a one-ply comparison: the root still expands its
/// immediate children, which score directly by the heuristic.
pub struct MinimaxAgent {
    depth: u32,
    table: WeightTable,
    shuffler: MoveShuffler,
}

impl MinimaxAgent {
    pub fn new(depth: u32, board_size: usize) -> Self {
        MinimaxAgent {
            depth,
            table: WeightTable::for_size(board_size),
            shuffler: MoveShuffler::Thread,
        }
    }

    /// Shuffles with a seeded generator, so ties resolve reproducibly.
    pub fn seeded(depth: u32, board_size: usize, seed: u64) -> Self {
        MinimaxAgent {
            depth,
            table: WeightTable::for_size(board_size),
            shuffler: MoveShuffler::seeded(seed),
        }
    }

    /// No shuffling: moves are explored in the engine's enumeration order.
    /// This makes two searches over the same state directly comparable.
    pub fn deterministic(depth: u32, board_size: usize) -> Self {
        MinimaxAgent {
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

    /// Builds the evaluated search tree rooted at the move that produced
    /// `state` (None at the start of a game). The root's side flag is the
    /// side to move in `state`; picking a move is then just `best_child`.
    pub fn search_tree(
        &self,
        state: &ReversiState,
        previous_move: Option<BoardPosition>,
    ) -> Result<GameTree<BoardPosition>, ReversiError> {
        self.minimax(previous_move, state, 0)
    }

    fn minimax(
        &self,
        action: Option<BoardPosition>,
        state: &ReversiState,
        depth: u32,
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
            // No moves means the game is over here; the heuristic's
            // terminal branch scores the winner.
            node.set_evaluation(self.table.evaluate(state));
            return Ok(node);
        }

        self.shuffler.shuffle(&mut moves);

        let mut best_value = if white_move { i32::MIN } else { i32::MAX };

        for m in moves {
            let next_state = state.advanced(m)?;
            let subtree = self.minimax(Some(m), &next_state, depth + 1)?;

            best_value = if white_move {
                best_value.max(subtree.evaluation())
            } else {
                best_value.min(subtree.evaluation())
            };

            node.add_child(subtree);
        }

        // The node's value is final only now that every child exists.
        node.set_evaluation(best_value);
        Ok(node)
    }
}

impl GameAgent<ReversiState> for MinimaxAgent {
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

use lib_boardgame::GameResult;
use lib_reversi::{Board, BoardPosition, Cell, ReversiState};

/// The score for a decided game. Positive means a White win, negated means
/// a Black win, zero a draw. Deliberately far outside any achievable
/// positional sum, so a decided game always dominates positional scores
/// in comparisons. This is the single sentinel used everywhere a terminal
/// state is scored.
pub const TERMINAL_SCORE: i32 = 100_000;

/// Weighted board evaluation for an 8x8 board: corners are gold, edges are
/// good, and the squares adjacent to corners are liabilities because they
/// hand the corner to the opponent. This table generally outperforms an
/// absolute piece-difference count.
const POSITIONAL_WEIGHTS_8X8: [[i32; 8]; 8] = [
    [100, -20, 10, 5, 5, 10, -20, 100],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [10, -2, -1, -1, -1, -1, -2, 10],
    [5, -2, -1, -1, -1, -1, -2, 5],
    [5, -2, -1, -1, -1, -1, -2, 5],
    [10, -2, -1, -1, -1, -1, -2, 10],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [100, -20, 10, 5, 5, 10, -20, 100],
];

/// Maps a position to a White-favoring score: positive numbers favor
/// White, the maximizing side.
pub trait Heuristic {
    fn evaluate(&self, state: &ReversiState) -> i32;
}

/// An N x N table of per-square weights. Selection is a pure function of
/// board size: the curated positional table for size 8, a uniform all-ones
/// table (plain piece difference) for any other size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeightTable {
    weights: Vec<Vec<i32>>,
}

impl WeightTable {
    pub fn for_size(size: usize) -> Self {
        if size == 8 {
            Self::positional()
        } else {
            Self::flat(size)
        }
    }

    /// Each occupied square worth 1: evaluation reduces to piece count
    /// difference.
    pub fn flat(size: usize) -> Self {
        WeightTable {
            weights: vec![vec![1; size]; size],
        }
    }

    pub fn positional() -> Self {
        WeightTable {
            weights: POSITIONAL_WEIGHTS_8X8
                .iter()
                .map(|row| row.to_vec())
                .collect(),
        }
    }

    pub fn size(&self) -> usize {
        self.weights.len()
    }

    pub fn weight(&self, position: BoardPosition) -> i32 {
        self.weights[position.row()][position.col()]
    }

    fn positional_sum(&self, board: &Board) -> i32 {
        let mut score = 0;

        for (position, cell) in board.cells() {
            match cell {
                Cell::White => score += self.weight(position),
                Cell::Black => score -= self.weight(position),
                Cell::Empty => {}
            }
        }

        score
    }
}

impl Heuristic for WeightTable {
    /// Non-terminal states score as the weighted White sum minus the
    /// weighted Black sum. Terminal states score as the terminal sentinel
    /// by winner, or 0 for a draw.
    fn evaluate(&self, state: &ReversiState) -> i32 {
        match state.winner() {
            None => self.positional_sum(state.board()),
            Some(GameResult::WhiteWins) => TERMINAL_SCORE,
            Some(GameResult::BlackWins) => -TERMINAL_SCORE,
            Some(GameResult::Tie) => 0,
        }
    }
}

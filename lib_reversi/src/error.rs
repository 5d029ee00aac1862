use crate::BoardPosition;
use std::fmt;

/// Everything that can go wrong inside the Reversi engine.
/// Rule violations are caller errors and propagate immediately; the engine
/// never partially applies a move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReversiError {
    /// A row or column index at or beyond the board edge.
    OutOfBounds { position: BoardPosition, size: usize },

    /// A raw piece encoding outside {-1, 0, 1}.
    InvalidCellValue(i8),

    /// The destination is not in the current legal-move set.
    IllegalMove(BoardPosition),

    /// The side to move has no legal move. Terminal positions report this
    /// when a caller asks for a move anyway; it is not an engine failure.
    NoLegalMoves,

    /// A bad game or board parameter, such as an odd board size or a
    /// saved grid whose dimensions don't match the board.
    Configuration(String),
}

impl fmt::Display for ReversiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReversiError::OutOfBounds { position, size } => write!(
                f,
                "position {} is out of bounds for a board of size {}",
                position, size
            ),
            ReversiError::InvalidCellValue(value) => {
                write!(f, "invalid cell value {} (expected -1, 0, or 1)", value)
            }
            ReversiError::IllegalMove(position) => {
                write!(f, "move {} is not a legal move", position)
            }
            ReversiError::NoLegalMoves => {
                write!(f, "the side to move has no legal moves")
            }
            ReversiError::Configuration(msg) => write!(f, "configuration error: {}", msg),
        }
    }
}

impl std::error::Error for ReversiError {}

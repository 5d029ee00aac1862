pub mod board;
pub mod reversi_gamestate;

mod error;
mod util;

pub use board::{Board, Cell};
pub use error::ReversiError;
pub use reversi_gamestate::ReversiState;

use lib_boardgame::{GameMove, PlayerColor};
use std::fmt;
use std::str::FromStr;

/// The default size of the board.
/// E.x., since this is 8, a freshly configured Reversi board is 8x8 squares.
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// A square on the board, identified by zero-indexed (row, column),
/// with row 0 at the top.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoardPosition {
    row: usize,
    col: usize,
}

impl BoardPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }
}

impl GameMove for BoardPosition {}

impl fmt::Debug for BoardPosition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl fmt::Display for BoardPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Parses "row,col". Bounds are not checked here; a parsed position is
/// only accepted once it shows up in the current legal-move set.
impl FromStr for BoardPosition {
    type Err = ReversiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let nums: Vec<_> = s.split(',').map(|x| x.trim()).collect();

        if nums.len() != 2 {
            return Err(ReversiError::Configuration(format!(
                "expected format: row,col -- got: {}",
                s
            )));
        }

        match (nums[0].parse::<usize>(), nums[1].parse::<usize>()) {
            (Ok(row), Ok(col)) => Ok(BoardPosition::new(row, col)),
            _ => Err(ReversiError::Configuration(format!(
                "didn't recognize input as a board position: {}",
                s
            ))),
        }
    }
}

/// When traversing squares on the board,
/// a positive direction indicates increasing values for row or col,
/// a negative direction indicates decreasing values for row or col,
/// and zero indicates no movement for row or col.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Direction {
    pub row_dir: i32,
    pub col_dir: i32,
}

/// The 8 compass directions a capture line can run in.
pub const ALL_DIRECTIONS: [Direction; 8] = [
    Direction { row_dir: -1, col_dir: -1 },
    Direction { row_dir: -1, col_dir: 0 },
    Direction { row_dir: -1, col_dir: 1 },
    Direction { row_dir: 0, col_dir: -1 },
    Direction { row_dir: 0, col_dir: 1 },
    Direction { row_dir: 1, col_dir: -1 },
    Direction { row_dir: 1, col_dir: 0 },
    Direction { row_dir: 1, col_dir: 1 },
];

/// One capture line that would flip if its destination move were played:
/// the walk from `anchor` (exclusive) along `direction` up to the
/// destination square (exclusive). Several paths from different anchors or
/// directions can converge on the same destination.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CapturePath {
    pub anchor: BoardPosition,
    pub direction: Direction,
}

/// Configuration for one game: the board size and which color (if any)
/// is driven by external input instead of an agent.
/// Plain data, handed to the state constructor; there are no process-wide
/// mutable settings.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: usize,
    pub human_player: Option<PlayerColor>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            human_player: None,
        }
    }
}

impl GameConfig {
    pub fn with_board_size(board_size: usize) -> Self {
        Self {
            board_size,
            ..Self::default()
        }
    }

    /// The board must be square with an even edge length of at least 2,
    /// or the four-piece starting cross has no center to sit on.
    pub fn validate(&self) -> Result<(), ReversiError> {
        if self.board_size < 2 || self.board_size % 2 != 0 {
            Err(ReversiError::Configuration(format!(
                "board size must be even and at least 2, got {}",
                self.board_size
            )))
        } else {
            Ok(())
        }
    }
}

use crate::{BoardPosition, ReversiError, DEFAULT_BOARD_SIZE};
use lib_boardgame::PlayerColor;
use std::collections::HashSet;
use std::convert::TryFrom;

/// The contents of one square on the board.
/// Black and White are strict opposites: flipping one yields the other.
/// The raw integer encoding {1, 0, -1} for {Black, Empty, White} is only
/// used at the edges, when installing or exporting a saved grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Cell {
    /// The opposite color; Empty flips to itself.
    pub fn flipped(self) -> Self {
        match self {
            Cell::Black => Cell::White,
            Cell::White => Cell::Black,
            Cell::Empty => Cell::Empty,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn as_i8(self) -> i8 {
        match self {
            Cell::Empty => 0,
            Cell::Black => 1,
            Cell::White => -1,
        }
    }
}

impl From<PlayerColor> for Cell {
    fn from(color: PlayerColor) -> Cell {
        match color {
            PlayerColor::Black => Cell::Black,
            PlayerColor::White => Cell::White,
        }
    }
}

impl TryFrom<i8> for Cell {
    type Error = ReversiError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Cell::Empty),
            1 => Ok(Cell::Black),
            -1 => Ok(Cell::White),
            other => Err(ReversiError::InvalidCellValue(other)),
        }
    }
}

/// The playing surface: a square grid of cells plus the cached set of legal
/// destination squares for the side about to move.
///
/// The legal-move set is derived state. The Board itself knows no game
/// rules; the engine recomputes and re-installs the set after every grid
/// mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,

    /// What size to use the next time the board is reset. A size change
    /// requested mid-game is deferred until then, so an in-progress grid
    /// never changes shape under the engine.
    next_size: usize,

    /// Row-major grid of cells, indexed grid[row][col].
    grid: Vec<Vec<Cell>>,

    /// Cached legal destinations for whichever side is about to move.
    legal_moves: HashSet<BoardPosition>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

impl Board {
    pub fn new(size: usize) -> Self {
        Board {
            size,
            next_size: size,
            grid: vec![vec![Cell::Empty; size]; size],
            legal_moves: HashSet::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Request a size change. Takes effect on the next `reset()`,
    /// never retroactively.
    pub fn set_size(&mut self, size: usize) {
        self.next_size = size;
    }

    /// Reinitialize to an empty grid at the pending size and clear the
    /// cached legal moves.
    pub fn reset(&mut self) {
        self.size = self.next_size;
        self.grid = vec![vec![Cell::Empty; self.size]; self.size];
        self.legal_moves.clear();
    }

    fn check_bounds(&self, position: BoardPosition) -> Result<(), ReversiError> {
        if position.row() >= self.size || position.col() >= self.size {
            Err(ReversiError::OutOfBounds {
                position,
                size: self.size,
            })
        } else {
            Ok(())
        }
    }

    pub fn get(&self, position: BoardPosition) -> Result<Cell, ReversiError> {
        self.check_bounds(position)?;

        Ok(self.grid[position.row()][position.col()])
    }

    pub fn set(&mut self, position: BoardPosition, cell: Cell) -> Result<(), ReversiError> {
        self.check_bounds(position)?;

        self.grid[position.row()][position.col()] = cell;
        Ok(())
    }

    /// Unchecked accessor for engine-internal walks whose positions are
    /// in bounds by construction.
    pub(crate) fn cell(&self, position: BoardPosition) -> Cell {
        self.grid[position.row()][position.col()]
    }

    /// Every (position, cell) pair on the grid, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (BoardPosition, Cell)> + '_ {
        self.grid.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, &cell)| (BoardPosition::new(row, col), cell))
        })
    }

    /// How many squares are occupied by the given cell value.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells().filter(|&(_, c)| c == cell).count()
    }

    pub fn is_legal_move(&self, position: BoardPosition) -> bool {
        self.legal_moves.contains(&position)
    }

    pub fn legal_moves(&self) -> &HashSet<BoardPosition> {
        &self.legal_moves
    }

    /// Replace the cached legal-move set wholesale. Only the engine calls
    /// this, right after recomputing moves for the side about to move.
    pub fn set_legal_moves(&mut self, moves: impl IntoIterator<Item = BoardPosition>) {
        self.legal_moves = moves.into_iter().collect();
    }

    pub fn clear_legal_moves(&mut self) {
        self.legal_moves.clear();
    }

    /// Bulk-replace the grid contents, e.g. when materializing a computed
    /// next state. The caller is responsible for recomputing legal moves
    /// afterward; no rule computation happens here.
    pub fn replace_grid(&mut self, grid: Vec<Vec<Cell>>) -> Result<(), ReversiError> {
        if grid.len() != self.size || grid.iter().any(|row| row.len() != self.size) {
            return Err(ReversiError::Configuration(format!(
                "grid dimensions don't match board size {}",
                self.size
            )));
        }

        self.grid = grid;
        Ok(())
    }

    /// A deep copy of the raw grid, used by the engine to compute a
    /// successor grid without touching this one.
    pub(crate) fn grid_copy(&self) -> Vec<Vec<Cell>> {
        self.grid.clone()
    }

    /// Install a grid in the raw {-1, 0, 1} encoding, failing on any value
    /// outside that set or on mismatched dimensions.
    pub fn replace_grid_raw(&mut self, raw: Vec<Vec<i8>>) -> Result<(), ReversiError> {
        let mut grid = Vec::with_capacity(raw.len());

        for raw_row in raw {
            let row: Result<Vec<Cell>, ReversiError> =
                raw_row.into_iter().map(Cell::try_from).collect();
            grid.push(row?);
        }

        self.replace_grid(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, col: usize) -> BoardPosition {
        BoardPosition::new(row, col)
    }

    #[test]
    fn board_can_set_and_get_cell() {
        let mut board = Board::new(8);

        let cell_before = board.get(pos(2, 3)).unwrap();

        board.set(pos(2, 3), Cell::White).unwrap();

        let cell_after = board.get(pos(2, 3)).unwrap();

        assert_eq!(Cell::Empty, cell_before);
        assert_eq!(Cell::White, cell_after);
    }

    #[test]
    fn get_and_set_reject_out_of_bounds() {
        let mut board = Board::new(4);

        assert_eq!(
            Err(ReversiError::OutOfBounds {
                position: pos(4, 0),
                size: 4
            }),
            board.get(pos(4, 0))
        );
        assert!(board.set(pos(0, 4), Cell::Black).is_err());
    }

    #[test]
    fn cell_conversion_rejects_bad_values() {
        assert_eq!(Ok(Cell::Black), Cell::try_from(1));
        assert_eq!(Ok(Cell::White), Cell::try_from(-1));
        assert_eq!(Ok(Cell::Empty), Cell::try_from(0));
        assert_eq!(Err(ReversiError::InvalidCellValue(2)), Cell::try_from(2));
    }

    #[test]
    fn size_change_is_deferred_until_reset() {
        let mut board = Board::new(8);
        board.set(pos(7, 7), Cell::Black).unwrap();

        board.set_size(4);

        // The in-progress grid is untouched.
        assert_eq!(8, board.size());
        assert_eq!(Cell::Black, board.get(pos(7, 7)).unwrap());

        board.reset();

        assert_eq!(4, board.size());
        assert!(board.get(pos(7, 7)).is_err());
        assert_eq!(0, board.count(Cell::Black));
    }

    #[test]
    fn replace_grid_rejects_mismatched_dimensions() {
        let mut board = Board::new(8);

        let too_small = vec![vec![Cell::Empty; 4]; 4];
        assert!(matches!(
            board.replace_grid(too_small),
            Err(ReversiError::Configuration(_))
        ));
    }

    #[test]
    fn replace_grid_raw_validates_cell_values() {
        let mut board = Board::new(2);

        let mut raw = vec![vec![0i8; 2]; 2];
        raw[0][0] = 3;

        assert_eq!(
            Err(ReversiError::InvalidCellValue(3)),
            board.replace_grid_raw(raw)
        );

        let good = vec![vec![1i8, -1], vec![0, 0]];
        board.replace_grid_raw(good).unwrap();
        assert_eq!(Cell::Black, board.get(pos(0, 0)).unwrap());
        assert_eq!(Cell::White, board.get(pos(0, 1)).unwrap());
    }

    #[test]
    fn legal_move_cache_is_pure_storage() {
        let mut board = Board::new(8);

        board.set_legal_moves(vec![pos(2, 4), pos(3, 5)]);

        assert!(board.is_legal_move(pos(2, 4)));
        assert!(!board.is_legal_move(pos(0, 0)));
        assert_eq!(2, board.legal_moves().len());

        board.clear_legal_moves();
        assert!(board.legal_moves().is_empty());
    }

    #[test]
    fn flipped_is_involutive_for_colors() {
        assert_eq!(Cell::White, Cell::Black.flipped());
        assert_eq!(Cell::Black, Cell::Black.flipped().flipped());
        assert_eq!(Cell::Empty, Cell::Empty.flipped());
    }
}

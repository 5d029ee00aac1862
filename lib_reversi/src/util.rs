use crate::{BoardPosition, Direction};

/// Walks outward from an origin square along one compass direction,
/// yielding every in-bounds square after the origin (the origin itself is
/// not yielded). Stops at the board edge.
pub(crate) struct BoardDirectionIter {
    direction: Direction,
    board_size: usize,

    /// for iteration -- what position are we currently at?
    cursor: BoardPosition,
}

impl BoardDirectionIter {
    pub fn new(origin: BoardPosition, direction: Direction, board_size: usize) -> Self {
        debug_assert!(
            direction.row_dir != 0 || direction.col_dir != 0,
            "a direction with no movement would iterate forever"
        );

        BoardDirectionIter {
            direction,
            board_size,
            cursor: origin,
        }
    }
}

impl Iterator for BoardDirectionIter {
    type Item = BoardPosition;

    fn next(&mut self) -> Option<Self::Item> {
        let next_row = self.cursor.row() as i32 + self.direction.row_dir;
        let next_col = self.cursor.col() as i32 + self.direction.col_dir;

        if next_row < 0 || next_col < 0 {
            return None;
        }

        if next_row >= self.board_size as i32 || next_col >= self.board_size as i32 {
            return None;
        }

        let next_pos = BoardPosition::new(next_row as usize, next_col as usize);
        self.cursor = next_pos;

        Some(next_pos)
    }
}

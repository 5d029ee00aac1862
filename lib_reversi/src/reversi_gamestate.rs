use crate::board::{Board, Cell};
use crate::util::BoardDirectionIter;
use crate::{BoardPosition, CapturePath, Direction, GameConfig, ReversiError, ALL_DIRECTIONS};
use lib_boardgame::{GameResult, GameState, PlayerColor};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// A complete Reversi position: the board, the side to move, and the move
/// count, plus the cached legal moves and their capture paths.
///
/// From a caller's perspective each turn is a pure transformation: either
/// mutate the live state with `apply_move`, or derive a fresh state with
/// `advanced` (which search uses exclusively, so a parent position is never
/// aliased by its search-generated descendants).
#[derive(Clone)]
pub struct ReversiState {
    board: Board,

    /// The player whose turn it currently is.
    current_player: PlayerColor,

    /// How many moves have been applied since the start of the game.
    /// Bookkeeping only; never consulted by the rules.
    move_count: u32,

    /// Which color is driven by external input rather than an agent,
    /// if any. Queried by the UI layer, ignored by the engine.
    human_player: Option<PlayerColor>,

    /// For every legal destination, all capture paths converging on it.
    /// Keyed in (row, col) order so enumeration is deterministic.
    capture_paths: BTreeMap<BoardPosition, Vec<CapturePath>>,

    /// The destinations above, flattened in sorted order.
    legal_moves: Vec<BoardPosition>,
}

impl ReversiState {
    /// The canonical starting position at the default board size.
    pub fn new() -> Self {
        Self::build(GameConfig::default())
    }

    /// The canonical starting position for the given configuration.
    pub fn with_config(config: GameConfig) -> Result<Self, ReversiError> {
        config.validate()?;

        Ok(Self::build(config))
    }

    fn build(config: GameConfig) -> Self {
        let mut state = ReversiState {
            board: Board::new(config.board_size),
            current_player: PlayerColor::Black,
            move_count: 0,
            human_player: config.human_player,
            capture_paths: BTreeMap::new(),
            legal_moves: Vec::new(),
        };

        state.place_starting_pieces();
        state.recalculate_legal_moves();

        state
    }

    /// Restart on an empty board, applying any deferred size change.
    /// The four center squares get the standard Black/White cross.
    pub fn start_game(&mut self) {
        self.board.reset();
        self.current_player = PlayerColor::Black;
        self.move_count = 0;

        self.place_starting_pieces();
        self.recalculate_legal_moves();
    }

    fn place_starting_pieces(&mut self) {
        let half = self.board.size() / 2;

        // The center positions always exist for a valid (even, >= 2) size,
        // so these writes cannot fail.
        let mut place = |row, col, cell| {
            let _ = self.board.set(BoardPosition::new(row, col), cell);
        };

        place(half - 1, half - 1, Cell::Black);
        place(half - 1, half, Cell::White);
        place(half, half - 1, Cell::White);
        place(half, half, Cell::Black);
    }

    /// Install a saved grid in the raw {-1, 0, 1} encoding and hand the turn
    /// to the given player. Fails on bad cell values or mismatched
    /// dimensions, leaving the state untouched.
    pub fn install_grid(
        &mut self,
        raw: Vec<Vec<i8>>,
        current_player: PlayerColor,
    ) -> Result<(), ReversiError> {
        self.board.replace_grid_raw(raw)?;
        self.current_player = current_player;
        self.move_count = 0;
        self.recalculate_legal_moves();

        Ok(())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    /// Request a board size change, deferred until the next `start_game`.
    pub fn set_board_size(&mut self, size: usize) -> Result<(), ReversiError> {
        GameConfig::with_board_size(size).validate()?;
        self.board.set_size(size);

        Ok(())
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn human_player(&self) -> Option<PlayerColor> {
        self.human_player
    }

    /// The union of squares that would flip if the given legal destination
    /// were played, or None if the destination is not currently legal.
    pub fn captures_for(&self, position: BoardPosition) -> Option<Vec<BoardPosition>> {
        let paths = self.capture_paths.get(&position)?;

        let mut captured = BTreeSet::new();
        for path in paths {
            let walk =
                BoardDirectionIter::new(path.anchor, path.direction, self.board.size());
            captured.extend(walk.take_while(|&p| p != position));
        }

        Some(captured.into_iter().collect())
    }

    /// The "try" form of move application: false instead of an error when
    /// the destination is illegal, with no mutation in that case.
    pub fn try_apply_move(&mut self, position: BoardPosition) -> bool {
        self.apply_move(position).is_ok()
    }

    /// The winner once the side to move has no legal moves, or None while
    /// the game is still in progress. Equal piece counts are a draw.
    pub fn winner(&self) -> Option<GameResult> {
        self.game_result()
    }

    /// Walks outward from an own-colored anchor square in one direction.
    /// If the walk first crosses one-or-more opposite-colored cells and then
    /// lands in-bounds on an empty cell, that cell is a legal destination.
    /// A walk that immediately hits an empty or own-colored cell, or that
    /// runs off the board, finds nothing.
    fn find_move_in_direction(
        &self,
        anchor: BoardPosition,
        anchor_color: Cell,
        direction: Direction,
    ) -> Option<BoardPosition> {
        let walk = BoardDirectionIter::new(anchor, direction, self.board.size());

        for (index, position) in walk.enumerate() {
            let cell = self.board.cell(position);

            if cell == anchor_color {
                // Our own piece blocks the line before any empty square.
                return None;
            }

            if cell.is_empty() {
                // Empty right next to the anchor traps nothing; empty after
                // at least one enemy cell is a capture destination.
                return if index == 0 { None } else { Some(position) };
            }

            // Opposite color: keep walking.
        }

        None
    }

    /// Every legal destination for the given player on the current grid,
    /// with all capture paths converging on each.
    fn calc_moves_and_paths(
        &self,
        player: PlayerColor,
    ) -> BTreeMap<BoardPosition, Vec<CapturePath>> {
        let own_color = Cell::from(player);
        let mut moves: BTreeMap<BoardPosition, Vec<CapturePath>> = BTreeMap::new();

        let anchors: Vec<BoardPosition> = self
            .board
            .cells()
            .filter(|&(_, cell)| cell == own_color)
            .map(|(position, _)| position)
            .collect();

        for anchor in anchors {
            for &direction in ALL_DIRECTIONS.iter() {
                if let Some(destination) =
                    self.find_move_in_direction(anchor, own_color, direction)
                {
                    moves
                        .entry(destination)
                        .or_insert_with(Vec::new)
                        .push(CapturePath { anchor, direction });
                }
            }
        }

        moves
    }

    /// A copy of the grid with the given destination played by the current
    /// player: the destination itself plus every cell on every capture path
    /// into it become the current player's color.
    fn grid_after_move(&self, destination: BoardPosition) -> Vec<Vec<Cell>> {
        let own_color = Cell::from(self.current_player);
        let mut grid = self.board.grid_copy();

        grid[destination.row()][destination.col()] = own_color;

        if let Some(paths) = self.capture_paths.get(&destination) {
            for path in paths {
                let walk =
                    BoardDirectionIter::new(path.anchor, path.direction, self.board.size());

                for position in walk.take_while(|&p| p != destination) {
                    grid[position.row()][position.col()] = own_color;
                }
            }
        }

        grid
    }

    fn recalculate_legal_moves(&mut self) {
        let moves_and_paths = self.calc_moves_and_paths(self.current_player);

        self.legal_moves = moves_and_paths.keys().copied().collect();
        self.board.set_legal_moves(moves_and_paths.keys().copied());
        self.capture_paths = moves_and_paths;
    }

    const BLACK_PIECE: char = 'X';
    const WHITE_PIECE: char = 'O';
    const EMPTY_SPACE: char = '-';
    const LEGAL_MOVE: char = '*';
}

impl GameState for ReversiState {
    type Move = BoardPosition;
    type Error = ReversiError;

    /// Returns a human-friendly string for representing the state.
    /// Legal destinations for the side to move are marked with '*'.
    fn human_friendly(&self) -> String {
        let size = self.board.size();
        let mut result = String::new();

        result.push('\n');
        result.push_str("   ");
        for col in 0..size {
            result.push_str(&format!("{} ", col % 10));
        }
        result.push('\n');

        for row in 0..size {
            result.push_str(&format!("{:>2}|", row));

            for col in 0..size {
                let position = BoardPosition::new(row, col);
                let cell = self.board.cell(position);

                let square_char = match cell {
                    Cell::Black => Self::BLACK_PIECE,
                    Cell::White => Self::WHITE_PIECE,
                    Cell::Empty if self.board.is_legal_move(position) => Self::LEGAL_MOVE,
                    Cell::Empty => Self::EMPTY_SPACE,
                };

                result.push(square_char);
                result.push(' ');
            }

            result.push('\n');
        }

        result.push_str(&format!(
            "{:?} to move, {} played",
            self.current_player, self.move_count
        ));

        result
    }

    fn legal_moves(&self) -> &[BoardPosition] {
        self.legal_moves.as_slice()
    }

    /// Apply the given move, mutating this state into the resulting
    /// position: the destination and every captured cell take the current
    /// player's color, the turn flips, the move count increments, and the
    /// legal moves are recomputed for the new side on the new grid.
    ///
    /// A destination outside the current legal-move set is rejected before
    /// any mutation occurs; application is all-or-nothing.
    fn apply_move(&mut self, action: BoardPosition) -> Result<(), ReversiError> {
        if !self.board.is_legal_move(action) {
            return Err(ReversiError::IllegalMove(action));
        }

        let next_grid = self.grid_after_move(action);
        self.board.replace_grid(next_grid)?;

        self.current_player = self.current_player.opponent();
        self.move_count += 1;
        self.recalculate_legal_moves();

        Ok(())
    }

    fn current_player_turn(&self) -> PlayerColor {
        self.current_player
    }

    fn player_score(&self, player: PlayerColor) -> usize {
        self.board.count(Cell::from(player))
    }

    /// The game is over exactly when the side to move has no legal move.
    /// There is no pass: a side without moves ends the game immediately,
    /// even if the opponent could still play.
    fn is_game_over(&self) -> bool {
        self.legal_moves.is_empty()
    }
}

impl fmt::Display for ReversiState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.human_friendly())
    }
}

impl Default for ReversiState {
    fn default() -> Self {
        Self::new()
    }
}

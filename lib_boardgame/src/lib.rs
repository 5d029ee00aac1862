use std::fmt;

mod game_runner;

pub use game_runner::{BatchGameRunner, GameRunner, GeneralGameRunner};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PlayerColor {
    Black,
    White,
}

impl PlayerColor {
    pub fn opponent(self) -> Self {
        match self {
            PlayerColor::Black => PlayerColor::White,
            PlayerColor::White => PlayerColor::Black,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    Tie,
    WhiteWins,
    BlackWins,
}

impl GameResult {
    pub fn is_win_for_player(self, player_color: PlayerColor) -> bool {
        match self {
            GameResult::BlackWins => player_color == PlayerColor::Black,
            GameResult::WhiteWins => player_color == PlayerColor::White,
            _ => false,
        }
    }
}

/// Describes a move a player can make in a game.
/// I.e., in Reversi, a move could be at position (3,7).
pub trait GameMove: Copy + fmt::Debug + PartialEq + Send {}

/// Describes a complete state of some Game,
/// such as the board position, the current player's turn,
/// or any other relevant info.
pub trait GameState: Clone + Send {
    type Move: GameMove;
    type Error: std::error::Error + 'static;

    /// Returns a human-friendly string for representing the state.
    fn human_friendly(&self) -> String;

    /// The legal moves available to the player whose turn it currently is.
    /// Implementations keep this cached and consistent with the grid,
    /// so reading it is free.
    fn legal_moves(&self) -> &[Self::Move];

    /// Apply the given move (or 'action') to this state, mutating this state
    /// and advancing it to the resulting state.
    /// A move that is not currently legal is rejected without mutating anything.
    fn apply_move(&mut self, action: Self::Move) -> Result<(), Self::Error>;

    /// Returns the current player whose turn it currently is.
    fn current_player_turn(&self) -> PlayerColor;

    /// Returns the score of the given player in this state.
    fn player_score(&self, player: PlayerColor) -> usize;

    /// Given a legal move (or 'action'), return the resulting state of applying
    /// the action to this state, leaving this state untouched.
    /// The copy owns its own storage, so search can recurse on the result
    /// without aliasing the state it was derived from.
    fn advanced(&self, action: Self::Move) -> Result<Self, Self::Error> {
        let mut cloned = self.clone();
        cloned.apply_move(action)?;

        Ok(cloned)
    }

    /// True if the game is over, i.e. the player whose turn it is
    /// has no legal move available.
    fn is_game_over(&self) -> bool;

    /// The GameResult, or None if the game is not yet over.
    fn game_result(&self) -> Option<GameResult> {
        let white_score = self.player_score(PlayerColor::White);
        let black_score = self.player_score(PlayerColor::Black);

        if !self.is_game_over() {
            None
        } else if white_score > black_score {
            Some(GameResult::WhiteWins)
        } else if black_score > white_score {
            Some(GameResult::BlackWins)
        } else {
            Some(GameResult::Tie)
        }
    }
}

/// A trait representing the functionality of a GameAgent.
/// Given a GameState and the move that produced it, a GameAgent decides
/// the next move for the player whose turn it is.
/// Callers only invoke this while the game is not over; an agent faced with
/// an empty legal-move set reports an error rather than inventing a move.
pub trait GameAgent<TState: GameState> {
    fn pick_move(
        &self,
        state: &TState,
        previous_move: Option<TState::Move>,
    ) -> Result<TState::Move, TState::Error>;
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    fn is_win_for_player_expects_valid_result() {
        let tie = GameResult::Tie;
        assert!(!tie.is_win_for_player(PlayerColor::White));
        assert!(!tie.is_win_for_player(PlayerColor::Black));

        let black_wins = GameResult::BlackWins;
        assert!(!black_wins.is_win_for_player(PlayerColor::White));
        assert!(black_wins.is_win_for_player(PlayerColor::Black));

        let white_wins = GameResult::WhiteWins;
        assert!(white_wins.is_win_for_player(PlayerColor::White));
        assert!(!white_wins.is_win_for_player(PlayerColor::Black));
    }

    #[test]
    fn opponent_is_involutive() {
        assert_eq!(
            PlayerColor::Black,
            PlayerColor::Black.opponent().opponent()
        );
        assert_eq!(PlayerColor::White, PlayerColor::Black.opponent());
    }
}

use crate::util::MoveShuffler;
use lib_boardgame::{GameAgent, GameState};
use lib_reversi::{BoardPosition, ReversiError, ReversiState};

/// Plays a uniformly random legal move. Useful as a baseline opponent and
/// for driving end-to-end simulations.
pub struct RandomAgent {
    chooser: MoveShuffler,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            chooser: MoveShuffler::Thread,
        }
    }

    /// A reproducible variant: the same seed replays the same choices.
    pub fn seeded(seed: u64) -> Self {
        RandomAgent {
            chooser: MoveShuffler::seeded(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl GameAgent<ReversiState> for RandomAgent {
    fn pick_move(
        &self,
        state: &ReversiState,
        _previous_move: Option<BoardPosition>,
    ) -> Result<BoardPosition, ReversiError> {
        self.chooser
            .choose(state.legal_moves())
            .ok_or(ReversiError::NoLegalMoves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_boardgame::PlayerColor;

    #[test]
    fn picks_a_legal_move() {
        let state = ReversiState::new();
        let agent = RandomAgent::new();

        let picked = agent.pick_move(&state, None).unwrap();

        assert!(state.legal_moves().contains(&picked));
    }

    #[test]
    fn fails_on_a_terminal_position() {
        let mut state = ReversiState::new();
        let raw = vec![vec![1i8; 8]; 8];
        state.install_grid(raw, PlayerColor::Black).unwrap();

        let agent = RandomAgent::new();

        assert_eq!(
            Err(ReversiError::NoLegalMoves),
            agent.pick_move(&state, None)
        );
    }

    #[test]
    fn seeded_agent_replays_its_choices() {
        let state = ReversiState::new();

        let first = RandomAgent::seeded(7).pick_move(&state, None).unwrap();
        let second = RandomAgent::seeded(7).pick_move(&state, None).unwrap();

        assert_eq!(first, second);
    }
}

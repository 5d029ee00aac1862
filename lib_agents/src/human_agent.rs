use lib_boardgame::{GameAgent, GameState};
use lib_reversi::{BoardPosition, ReversiError, ReversiState};
use std::str::FromStr;

/// Prompts a person at the terminal for "row,col" input and keeps asking
/// until the answer parses and is in the current legal-move set. Intended
/// for the interactive runner; batch runs never use it.
pub struct HumanAgent;

impl HumanAgent {
    fn prompt_input(&self) -> BoardPosition {
        use std::io::stdin;

        println!("Enter move row,col: ");

        let mut input = String::new();

        stdin()
            .read_line(&mut input)
            .expect("Couldn't capture user input.");

        match BoardPosition::from_str(input.trim()) {
            Ok(position) => position,
            Err(_) => {
                println!("Invalid input. Try again.");
                self.prompt_input()
            }
        }
    }
}

impl GameAgent<ReversiState> for HumanAgent {
    fn pick_move(
        &self,
        state: &ReversiState,
        _previous_move: Option<BoardPosition>,
    ) -> Result<BoardPosition, ReversiError> {
        if state.legal_moves().is_empty() {
            return Err(ReversiError::NoLegalMoves);
        }

        loop {
            let user_input = self.prompt_input();

            if state.legal_moves().iter().any(|&m| m == user_input) {
                return Ok(user_input);
            }

            println!("The provided move was not valid. Try again.");
        }
    }
}

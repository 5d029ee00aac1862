use crate::{GameAgent, GameResult, GameState, PlayerColor};
use lib_printer::{out, out_impl};

/// A trait that describes a game runner: something that can drive
/// two agents through a complete game.
pub trait GameRunner<T: GameState> {
    fn play_to_end(
        black_agent: &dyn GameAgent<T>,
        white_agent: &dyn GameAgent<T>,
        initial_state: T,
    ) -> Result<GameResult, T::Error>;
}

/// A trivial, general-purpose implementation of a GameRunner.
/// Probably all you need to run most games.
pub struct GeneralGameRunner;

fn player_take_turn<S>(
    game_state: &S,
    agent: &dyn GameAgent<S>,
    previous_move: Option<S::Move>,
) -> Result<S::Move, S::Error>
where
    S: GameState,
{
    let selected_action = agent.pick_move(game_state, previous_move)?;

    if game_state
        .legal_moves()
        .iter()
        .find(|&&m| m == selected_action)
        .is_none()
    {
        panic!("Agent provided a move that is illegal.");
    }

    Ok(selected_action)
}

impl<T> GameRunner<T> for GeneralGameRunner
where
    T: GameState,
{
    fn play_to_end(
        black_agent: &dyn GameAgent<T>,
        white_agent: &dyn GameAgent<T>,
        initial_state: T,
    ) -> Result<GameResult, T::Error> {
        let mut game_state = initial_state;
        let mut previous_move = None;

        while !game_state.is_game_over() {
            out!("{}", game_state.human_friendly());
            let cur_player_color = game_state.current_player_turn();

            let agent_to_play = match cur_player_color {
                PlayerColor::Black => black_agent,
                PlayerColor::White => white_agent,
            };

            let selected_action = player_take_turn(&game_state, agent_to_play, previous_move)?;

            out!(
                "Player {:?} picked move {:?}",
                cur_player_color,
                selected_action
            );

            game_state.apply_move(selected_action)?;
            previous_move = Some(selected_action);
        }

        out!("{}", game_state.human_friendly());

        Ok(game_state
            .game_result()
            .expect("The game is over, so there must be a game result."))
    }
}

/// Runs a fixed number of complete games between the same pair of agents
/// and collects each game's outcome, in order.
/// Fresh starting states come from the provided factory, so one batch can
/// cover any board size or configuration. The first game that fails aborts
/// the whole batch.
pub struct BatchGameRunner;

impl BatchGameRunner {
    pub fn play_batch<T, F>(
        black_agent: &dyn GameAgent<T>,
        white_agent: &dyn GameAgent<T>,
        games: usize,
        mut new_state: F,
    ) -> Result<Vec<GameResult>, T::Error>
    where
        T: GameState,
        F: FnMut() -> Result<T, T::Error>,
    {
        let mut results = Vec::with_capacity(games);

        for _ in 0..games {
            let initial_state = new_state()?;
            let result =
                GeneralGameRunner::play_to_end(black_agent, white_agent, initial_state)?;
            results.push(result);
        }

        Ok(results)
    }
}

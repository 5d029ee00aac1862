//! The headline search properties: the pruned player is indistinguishable
//! from full minimax under a fixed move order, depth 0 degenerates to a
//! one-ply comparison, and random-vs-random games always finish.

use lib_agents::{Heuristic, MinimaxABAgent, MinimaxAgent, RandomAgent, WeightTable};
use lib_boardgame::{BatchGameRunner, GameAgent, GameState, PlayerColor};
use lib_reversi::{BoardPosition, GameConfig, ReversiState};

/// A midgame position reached by playing `plies` seeded-random moves from
/// the start. Stops early if the game ends first.
fn state_after_random_plies(plies: usize, seed: u64) -> ReversiState {
    let agent = RandomAgent::seeded(seed);
    let mut state = ReversiState::new();

    for _ in 0..plies {
        if state.is_game_over() {
            break;
        }

        let m = agent.pick_move(&state, None).unwrap();
        state.apply_move(m).unwrap();
    }

    state
}

#[test]
fn minimax_and_alpha_beta_agree_without_shuffling() {
    for seed in 0..6u64 {
        for &plies in &[0usize, 3, 8, 15] {
            let state = state_after_random_plies(plies, seed);
            if state.is_game_over() {
                continue;
            }

            for depth in 0..=3u32 {
                let full = MinimaxAgent::deterministic(depth, 8);
                let pruned = MinimaxABAgent::deterministic(depth, 8);

                let full_tree = full.search_tree(&state, None).unwrap();
                let pruned_tree = pruned.search_tree(&state, None).unwrap();

                assert_eq!(
                    full_tree.evaluation(),
                    pruned_tree.evaluation(),
                    "root evaluations diverged at seed {}, plies {}, depth {}",
                    seed,
                    plies,
                    depth
                );

                assert_eq!(
                    full.pick_move(&state, None).unwrap(),
                    pruned.pick_move(&state, None).unwrap(),
                    "picked moves diverged at seed {}, plies {}, depth {}",
                    seed,
                    plies,
                    depth
                );
            }
        }
    }
}

#[test]
fn depth_zero_picks_the_one_ply_heuristic_best() {
    let table = WeightTable::for_size(8);

    for seed in 0..4u64 {
        let state = state_after_random_plies(6, seed);
        if state.is_game_over() {
            continue;
        }

        let white_move = state.current_player_turn() == PlayerColor::White;

        // First-occurrence extremum over the immediate resulting states.
        let mut expected: Option<(BoardPosition, i32)> = None;
        for &m in state.legal_moves() {
            let value = table.evaluate(&state.advanced(m).unwrap());
            let improves = match expected {
                None => true,
                Some((_, best)) => {
                    if white_move {
                        value > best
                    } else {
                        value < best
                    }
                }
            };

            if improves {
                expected = Some((m, value));
            }
        }

        let agent = MinimaxAgent::deterministic(0, 8);
        assert_eq!(
            expected.unwrap().0,
            agent.pick_move(&state, None).unwrap()
        );
    }
}

#[test]
fn copy_isolation_holds_across_reachable_states() {
    // Walk a handful of games; at every position, advancing by each legal
    // move must leave the source position unchanged.
    for seed in 10..13u64 {
        let agent = RandomAgent::seeded(seed);
        let mut state = ReversiState::new();

        while !state.is_game_over() {
            let snapshot = state.clone();

            for &m in state.legal_moves() {
                let _ = state.advanced(m).unwrap();

                assert_eq!(snapshot.legal_moves(), state.legal_moves());
                assert_eq!(snapshot.current_player_turn(), state.current_player_turn());
                assert_eq!(snapshot.move_count(), state.move_count());
                assert!(snapshot
                    .board()
                    .cells()
                    .zip(state.board().cells())
                    .all(|(a, b)| a == b));
            }

            let m = agent.pick_move(&state, None).unwrap();
            state.apply_move(m).unwrap();
        }
    }
}

#[test]
fn random_vs_random_always_terminates_with_a_result() {
    lib_printer::set_verbose(false);

    let black = RandomAgent::seeded(1);
    let white = RandomAgent::seeded(2);

    let results = BatchGameRunner::play_batch(&black, &white, 25, || {
        ReversiState::with_config(GameConfig::default())
    })
    .unwrap();

    // Every game ran to completion and produced exactly one outcome.
    assert_eq!(25, results.len());
}

#[test]
fn search_agents_finish_games_on_small_boards() {
    lib_printer::set_verbose(false);

    let black = MinimaxABAgent::seeded(2, 4, 99);
    let white = RandomAgent::seeded(3);

    let results = BatchGameRunner::play_batch(&black, &white, 5, || {
        ReversiState::with_config(GameConfig::with_board_size(4))
    })
    .unwrap();

    assert_eq!(5, results.len());
}

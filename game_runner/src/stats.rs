use lib_boardgame::{GameResult, PlayerColor};

/// Scores a sequence of game results from the focused player's point of
/// view: 1 for a win, 0.5 for a draw, 0 for a loss.
pub fn outcome_scores(results: &[GameResult], focused: PlayerColor) -> Vec<f64> {
    results
        .iter()
        .map(|&result| {
            if result.is_win_for_player(focused) {
                1.0
            } else if result == GameResult::Tie {
                0.5
            } else {
                0.0
            }
        })
        .collect()
}

/// The focused player's win rate over all games so far, one entry per game.
pub fn cumulative_win_rate(outcomes: &[f64]) -> Vec<f64> {
    let mut running = 0.0;

    outcomes
        .iter()
        .enumerate()
        .map(|(i, &outcome)| {
            running += outcome;
            running / (i + 1) as f64
        })
        .collect()
}

/// The focused player's win rate over the most recent `window` games,
/// one entry per game.
pub fn rolling_win_rate(outcomes: &[f64], window: usize) -> Vec<f64> {
    (1..=outcomes.len())
        .map(|i| {
            let lo = i.saturating_sub(window);
            let recent = &outcomes[lo..i];

            recent.iter().sum::<f64>() / recent.len() as f64
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_boardgame::GameResult::{BlackWins, Tie, WhiteWins};

    #[test]
    fn outcomes_score_wins_draws_and_losses() {
        let results = vec![BlackWins, Tie, WhiteWins, BlackWins];

        assert_eq!(
            vec![1.0, 0.5, 0.0, 1.0],
            outcome_scores(&results, PlayerColor::Black)
        );
        assert_eq!(
            vec![0.0, 0.5, 1.0, 0.0],
            outcome_scores(&results, PlayerColor::White)
        );
    }

    #[test]
    fn cumulative_rate_averages_everything_so_far() {
        let rates = cumulative_win_rate(&[1.0, 0.0, 0.5, 1.0]);

        assert_eq!(vec![1.0, 0.5, 0.5, 0.625], rates);
    }

    #[test]
    fn rolling_rate_only_sees_the_window() {
        let rates = rolling_win_rate(&[1.0, 1.0, 0.0, 0.0], 2);

        assert_eq!(vec![1.0, 1.0, 0.5, 0.0], rates);
    }
}

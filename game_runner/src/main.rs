mod stats;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use lib_agents::{HumanAgent, MinimaxABAgent, MinimaxAgent, RandomAgent};
use lib_boardgame::{BatchGameRunner, GameAgent, GameResult, PlayerColor};
use lib_reversi::{GameConfig, ReversiState};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum AgentKind {
    Random,
    Minimax,
    Alphabeta,
    Human,
}

/// Play or batch-simulate Reversi games between configurable players.
#[derive(Parser, Debug)]
struct Args {
    /// Strategy for the black player
    #[arg(long, value_enum, default_value = "alphabeta")]
    black: AgentKind,

    /// Strategy for the white player
    #[arg(long, value_enum, default_value = "random")]
    white: AgentKind,

    /// Search depth for the minimax players
    #[arg(long, default_value_t = 2)]
    depth: u32,

    /// Board edge length (even, at least 2)
    #[arg(long, default_value_t = 8)]
    board_size: usize,

    /// Number of games to play
    #[arg(long, default_value_t = 1)]
    games: usize,

    /// Seed for reproducible randomness; white derives seed + 1
    #[arg(long)]
    seed: Option<u64>,

    /// Suppress per-move board output
    #[arg(long)]
    quiet: bool,
}

fn build_agent(
    kind: AgentKind,
    depth: u32,
    board_size: usize,
    seed: Option<u64>,
) -> Box<dyn GameAgent<ReversiState>> {
    match (kind, seed) {
        (AgentKind::Random, None) => Box::new(RandomAgent::new()),
        (AgentKind::Random, Some(s)) => Box::new(RandomAgent::seeded(s)),
        (AgentKind::Minimax, None) => Box::new(MinimaxAgent::new(depth, board_size)),
        (AgentKind::Minimax, Some(s)) => Box::new(MinimaxAgent::seeded(depth, board_size, s)),
        (AgentKind::Alphabeta, None) => Box::new(MinimaxABAgent::new(depth, board_size)),
        (AgentKind::Alphabeta, Some(s)) => {
            Box::new(MinimaxABAgent::seeded(depth, board_size, s))
        }
        (AgentKind::Human, _) => Box::new(HumanAgent),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.games == 0 {
        bail!("at least one game is required");
    }

    let humans_involved =
        args.black == AgentKind::Human || args.white == AgentKind::Human;
    if humans_involved && args.games > 1 {
        bail!("human players can only play single games, not batches");
    }

    let config = GameConfig::with_board_size(args.board_size);
    config.validate().context("invalid board size")?;

    if args.quiet || args.games > 1 {
        lib_printer::set_verbose(false);
    }

    let black = build_agent(args.black, args.depth, args.board_size, args.seed);
    let white = build_agent(
        args.white,
        args.depth,
        args.board_size,
        args.seed.map(|s| s + 1),
    );

    let results =
        BatchGameRunner::play_batch(black.as_ref(), white.as_ref(), args.games, || {
            ReversiState::with_config(config)
        })
        .context("game aborted")?;

    print_summary(&results, args.black, args.white);
    Ok(())
}

fn print_summary(results: &[GameResult], black: AgentKind, white: AgentKind) {
    let black_wins = results
        .iter()
        .filter(|&&r| r == GameResult::BlackWins)
        .count();
    let white_wins = results
        .iter()
        .filter(|&&r| r == GameResult::WhiteWins)
        .count();
    let draws = results.iter().filter(|&&r| r == GameResult::Tie).count();

    println!("Games played: {}", results.len());
    println!("Black ({:?}) wins: {}", black, black_wins);
    println!("White ({:?}) wins: {}", white, white_wins);
    println!("Draws: {}", draws);

    let outcomes = stats::outcome_scores(results, PlayerColor::Black);
    let cumulative = stats::cumulative_win_rate(&outcomes);
    let rolling = stats::rolling_win_rate(&outcomes, 50);

    if let (Some(cumulative_last), Some(rolling_last)) = (cumulative.last(), rolling.last()) {
        println!(
            "Black win rate: {:.1}% overall, {:.1}% over the last 50 games",
            cumulative_last * 100.0,
            rolling_last * 100.0
        );
    }
}

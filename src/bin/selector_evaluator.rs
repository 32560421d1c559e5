use clap::Parser;
use mnk_game::engine::{Board, BoardConfig, Letter, Move, PlayerAssignment, Role};
use mnk_game::error::GameError;
use mnk_game::game::{Game, GameOutcome, MoveInput};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Pit the computer's move selector against a random player", long_about = None)]
struct Args {
    /// Number of games to play
    #[clap(short, long, default_value_t = 1000)]
    games: u64,

    /// Seed of the first game; game i uses seed + i
    #[clap(short, long, default_value_t = 0)]
    seed: u64,

    /// Number of rows, m
    #[clap(short = 'm', long, default_value_t = 3)]
    rows: usize,

    /// Number of columns, n
    #[clap(short = 'n', long, default_value_t = 3)]
    cols: usize,

    /// Run length needed to win, k
    #[clap(short = 'k', long, default_value_t = 3)]
    win_length: usize,
}

/// Stands in for the human: picks uniformly among the empty squares.
struct RandomPlayer {
    rng: SmallRng,
}

impl MoveInput for RandomPlayer {
    fn next_move(&mut self, board: &Board) -> Result<Move, GameError> {
        board
            .empty_cells()
            .choose(&mut self.rng)
            .copied()
            .ok_or(GameError::InputClosed)
    }
}

#[derive(Debug, Default)]
struct Tally {
    selector_wins: u64,
    random_wins: u64,
    draws: u64,
    total_moves: u64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = match BoardConfig::new(args.rows, args.cols, args.win_length) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    println!(
        "Evaluating the move selector over {} games on {}x{} (k = {})...",
        args.games,
        config.rows(),
        config.cols(),
        config.win_length()
    );

    let mut tally = Tally::default();
    for game_idx in 0..args.games {
        let seed = args.seed.wrapping_add(game_idx);
        // Alternate letters so neither side always plays X.
        let letter = if game_idx % 2 == 0 { Letter::X } else { Letter::O };
        let mut game = Game::new(
            config,
            PlayerAssignment::for_human(letter),
            SmallRng::seed_from_u64(seed),
        );
        let mut opponent = RandomPlayer {
            rng: SmallRng::seed_from_u64(seed ^ 0x9e37_79b9_7f4a_7c15),
        };

        let outcome = match game.play(&mut opponent, |_| {}) {
            Ok(outcome) => outcome,
            Err(e) => {
                eprintln!("Error: game {} (seed {}) failed: {}", game_idx, seed, e);
                std::process::exit(1);
            }
        };
        debug!(game = game_idx, seed, ?outcome, moves = game.moves_made(), "game finished");

        tally.total_moves += game.moves_made() as u64;
        match outcome {
            GameOutcome::Win(Role::Computer) => tally.selector_wins += 1,
            GameOutcome::Win(Role::Human) => tally.random_wins += 1,
            GameOutcome::Draw => tally.draws += 1,
            GameOutcome::InProgress => unreachable!("play returns only after the game ends"),
        }
    }

    let pct = |n: u64| {
        if args.games == 0 {
            0.0
        } else {
            n as f64 * 100.0 / args.games as f64
        }
    };
    println!("\n--- Evaluation Complete ---");
    println!("Selector wins : {:<6} ({:.1}%)", tally.selector_wins, pct(tally.selector_wins));
    println!("Random wins   : {:<6} ({:.1}%)", tally.random_wins, pct(tally.random_wins));
    println!("Draws         : {:<6} ({:.1}%)", tally.draws, pct(tally.draws));
    if args.games > 0 {
        println!(
            "Average length: {:.2} moves",
            tally.total_moves as f64 / args.games as f64
        );
    }
}

use clap::Parser;
use mnk_game::engine::{
    Board, BoardConfig, Letter, Move, PlayerAssignment, Role, MIN_WIN_LENGTH,
};
use mnk_game::error::GameError;
use mnk_game::game::{Game, GameOutcome, MoveInput};
use mnk_game::utils::{parse_move, parse_yes};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Play the m-n-k game against the computer", long_about = None)]
struct Args {
    /// Number of rows, m (prompted for if omitted)
    #[clap(short = 'm', long)]
    rows: Option<usize>,

    /// Number of columns, n (prompted for if omitted)
    #[clap(short = 'n', long)]
    cols: Option<usize>,

    /// Run length needed to win, k (prompted for if omitted)
    #[clap(short = 'k', long)]
    win_length: Option<usize>,

    /// Your letter, X or O (prompted for if omitted)
    #[clap(short, long)]
    letter: Option<Letter>,

    /// Seed for the coin flip and the computer's random moves. Game i of the
    /// session uses seed + i.
    #[clap(short, long)]
    seed: Option<u64>,
}

/// Line-oriented stdin collaborator: setup questions, human moves and replay.
struct Prompter<R> {
    input: R,
}

impl<R: BufRead> Prompter<R> {
    fn read_line(&mut self) -> Result<String, GameError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GameError::InputClosed);
        }
        Ok(line)
    }

    fn ask<T, E, F>(&mut self, prompt: &str, mut parse: F) -> Result<T, GameError>
    where
        F: FnMut(&str) -> Result<T, E>,
        E: std::fmt::Display,
    {
        loop {
            print!("{}", prompt);
            io::stdout().flush()?;
            let line = self.read_line()?;
            match parse(line.trim()) {
                Ok(value) => return Ok(value),
                Err(e) => println!("{}", e),
            }
        }
    }

    fn ask_number(&mut self, prompt: &str) -> Result<usize, GameError> {
        self.ask(prompt, |s| s.parse::<usize>().map_err(|_| format!("'{}' is not a number", s)))
    }
}

impl<R: BufRead> MoveInput for Prompter<R> {
    fn next_move(&mut self, board: &Board) -> Result<Move, GameError> {
        println!("{}", board);
        let prompt = format!(
            "What is your next move? (0-{}, 0-{})\n",
            board.rows() - 1,
            board.cols() - 1
        );
        self.ask(&prompt, |s| parse_move(s, board))
    }
}

/// Gathers m, n and k from the command line, prompting for anything missing.
///
/// A board too small for any legal k is rejected before k is asked for: if the
/// offending size came from the command line the error is returned, otherwise
/// the sizes are asked for again.
fn collect_config<R: BufRead>(
    args: &Args,
    prompter: &mut Prompter<R>,
) -> Result<BoardConfig, GameError> {
    let (rows, cols) = loop {
        let rows = match args.rows {
            Some(m) => m,
            None => prompter.ask_number("\nEnter number of rows, m: ")?,
        };
        let cols = match args.cols {
            Some(n) => n,
            None => prompter.ask_number("\nEnter number of columns, n: ")?,
        };
        let from_args = args.rows.map_or(false, |m| m < MIN_WIN_LENGTH)
            || args.cols.map_or(false, |n| n < MIN_WIN_LENGTH);
        match BoardConfig::check_dimensions(rows, cols) {
            Ok(()) => break (rows, cols),
            Err(e) if from_args => return Err(e.into()),
            Err(e) => println!("{}", e),
        }
    };

    if let Some(k) = args.win_length {
        match BoardConfig::new(rows, cols, k) {
            Ok(config) => return Ok(config),
            Err(e) => println!("{}", e),
        }
    }
    println!("\nWhere k should be greater than 2 and should not be greater than m or n,");
    prompter.ask("enter run length to win, k: ", |s| {
        let k = s
            .parse::<usize>()
            .map_err(|_| format!("'{}' is not a number", s))?;
        BoardConfig::new(rows, cols, k).map_err(|e| e.to_string())
    })
}

fn play_one<R: BufRead>(
    args: &Args,
    game_index: u64,
    prompter: &mut Prompter<R>,
) -> Result<(), GameError> {
    let config = collect_config(args, prompter)?;
    let letter = match args.letter {
        Some(letter) => letter,
        None => prompter.ask("\nDo you want to be X or O? ", Letter::from_str)?,
    };
    let assignment = PlayerAssignment::for_human(letter);

    let rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(game_index)),
        None => SmallRng::from_entropy(),
    };
    let mut game = Game::new(config, assignment, rng);
    let first = game.state().to_move().unwrap_or(Role::Human);
    println!("\nThe {} will go first.\n", first);

    let outcome = game.play(prompter, |_| {})?;
    println!("{}", game.board());
    match outcome {
        GameOutcome::Win(Role::Human) => println!("Hooray! You have won the game!\n"),
        GameOutcome::Win(Role::Computer) => println!("The computer has beaten you! You lose."),
        GameOutcome::Draw => println!("The game is a tie!\n"),
        GameOutcome::InProgress => unreachable!("play returns only after the game ends"),
    }
    Ok(())
}

fn run(args: Args) -> Result<(), GameError> {
    let stdin = io::stdin();
    let mut prompter = Prompter {
        input: stdin.lock(),
    };
    println!("Welcome to m-n-k game!");

    let mut game_index = 0;
    loop {
        play_one(&args, game_index, &mut prompter)?;
        game_index += 1;

        println!("Do you want to play again? (y or n)");
        match prompter.read_line() {
            Ok(answer) if parse_yes(&answer) => continue,
            Ok(_) | Err(GameError::InputClosed) => break,
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) | Err(GameError::InputClosed) => println!("Thanks for playing!"),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mnk_game::error::ConfigError;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>> {
        Prompter {
            input: Cursor::new(input.as_bytes().to_vec()),
        }
    }

    fn args(rows: Option<usize>, cols: Option<usize>, win_length: Option<usize>) -> Args {
        Args {
            rows,
            cols,
            win_length,
            letter: None,
            seed: None,
        }
    }

    #[test]
    fn test_next_move_reprompts_until_valid() {
        let board = Board::new_empty(BoardConfig::default());
        // Not numbers, then off the board, then a good move.
        let mut p = prompter("a b\n5 5\n1 1\n");
        assert_eq!(p.next_move(&board).unwrap(), Move::new(1, 1));
    }

    #[test]
    fn test_next_move_rejects_taken_cell() {
        let mut board = Board::new_empty(BoardConfig::default());
        board.make_move(Move::new(0, 0), Letter::X);
        let mut p = prompter("0 0\n0 1\n");
        assert_eq!(p.next_move(&board).unwrap(), Move::new(0, 1));
    }

    #[test]
    fn test_collect_config_reprompts_for_k() {
        let mut p = prompter("2\n9\n3\n");
        let config = collect_config(&args(Some(3), Some(3), None), &mut p).unwrap();
        assert_eq!(config, BoardConfig::default());
    }

    #[test]
    fn test_collect_config_bad_k_from_args_falls_back_to_prompt() {
        let mut p = prompter("4\n");
        let config = collect_config(&args(Some(4), Some(5), Some(7)), &mut p).unwrap();
        assert_eq!(config, BoardConfig::new(4, 5, 4).unwrap());
    }

    #[test]
    fn test_collect_config_small_board_typed_asks_again() {
        // 2x5 is refused, then 3x3 with k = 3.
        let mut p = prompter("2\n5\n3\n3\n3\n");
        let config = collect_config(&args(None, None, None), &mut p).unwrap();
        assert_eq!(config, BoardConfig::default());
    }

    #[test]
    fn test_collect_config_small_board_from_args_is_an_error() {
        let mut p = prompter("5\n3\n");
        let err = collect_config(&args(Some(2), None, None), &mut p).unwrap_err();
        assert!(matches!(
            err,
            GameError::Config(ConfigError::BoardTooSmall {
                rows: 2,
                cols: 5,
                ..
            })
        ));
    }

    #[test]
    fn test_eof_is_input_closed() {
        let mut p = prompter("");
        assert!(matches!(p.read_line(), Err(GameError::InputClosed)));

        let board = Board::new_empty(BoardConfig::default());
        let mut p = prompter("not a move\n");
        assert!(matches!(p.next_move(&board), Err(GameError::InputClosed)));

        // Input runs out while asking for n.
        let mut p = prompter("3\n");
        assert!(matches!(
            collect_config(&args(None, None, None), &mut p),
            Err(GameError::InputClosed)
        ));
    }
}

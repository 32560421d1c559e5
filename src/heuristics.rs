use crate::engine::{Board, Letter, Move};
use crate::win::is_winner;
use rand::seq::SliceRandom;
use rand::Rng;

/// Why the selector picked a particular square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveReason {
    /// Placing here completes a run for the computer.
    Win,
    /// Placing here denies the opponent an immediate run.
    Block,
    /// Nothing was urgent; the square was drawn uniformly from the empty ones.
    Random,
}

/// Returns the first empty square, in row-major order, where placing `letter`
/// would complete a winning run.
///
/// Each hypothesis is tried on a private scratch copy of the board; `board`
/// itself is never modified.
///
/// # Arguments
/// * `board`: Current position.
/// * `letter`: Marker to try in each empty square.
///
/// # Returns
/// The winning square, or `None` if no single placement wins.
pub fn find_winning_move(board: &Board, letter: Letter) -> Option<Move> {
    let mut scratch = board.clone();
    for mv in board.empty_cells() {
        scratch.make_move(mv, letter);
        let wins = is_winner(&scratch, letter);
        scratch.clear_cell(mv.row, mv.col);
        if wins {
            return Some(mv);
        }
    }
    None
}

/// Chooses the computer's move using a one-ply lookahead and reports why.
///
/// Priority order over the empty squares:
/// 1. the first square that wins immediately for `computer`;
/// 2. otherwise the first square where `opponent` would win next turn;
/// 3. otherwise a square chosen uniformly at random from all empty squares.
///
/// # Arguments
/// * `board`: Current position; must have at least one empty square.
/// * `computer`: The computer's letter.
/// * `opponent`: The human's letter.
/// * `rng`: Source for the random fallback. It is only drawn from when
///   neither a win nor a block exists.
///
/// # Returns
/// The chosen square and the [`MoveReason`] that selected it.
///
/// # Panics
/// Panics if the board has no empty square. The game engine checks for a full
/// board before asking for a move, so this indicates a sequencing bug.
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    computer: Letter,
    opponent: Letter,
    rng: &mut R,
) -> (Move, MoveReason) {
    if let Some(mv) = find_winning_move(board, computer) {
        return (mv, MoveReason::Win);
    }
    if let Some(mv) = find_winning_move(board, opponent) {
        return (mv, MoveReason::Block);
    }
    let empty = board.empty_cells();
    match empty.choose(rng) {
        Some(&mv) => (mv, MoveReason::Random),
        None => panic!("move requested on a full board:\n{}", board),
    }
}

/// Chooses the computer's move. See [`choose_move`] for the policy.
///
/// # Examples
/// ```
/// use mnk_game::engine::{BoardConfig, Letter, Move};
/// use mnk_game::heuristics::select_computer_move;
/// use mnk_game::utils::board_from_str_array;
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
///
/// let board = board_from_str_array(BoardConfig::default(), &["XX ", "OO ", "   "]).unwrap();
/// let mut rng = SmallRng::seed_from_u64(0);
/// assert_eq!(select_computer_move(&board, Letter::O, Letter::X, &mut rng), Move::new(1, 2));
/// ```
pub fn select_computer_move<R: Rng + ?Sized>(
    board: &Board,
    computer: Letter,
    opponent: Letter,
    rng: &mut R,
) -> Move {
    choose_move(board, computer, opponent, rng).0
}

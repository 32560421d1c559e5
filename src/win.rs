//! Detection of k-in-a-row runs.
//!
//! Every run is found from its first cell in row-major order, so only four of
//! the eight compass directions need probing: across, down, and the two
//! downward diagonals.
use crate::engine::{Board, Cell, Letter, Move};

/// A scan direction, expressed as a `(Δrow, Δcol)` step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right along a row.
    Across,
    /// Top to bottom along a column.
    Down,
    /// Down and to the right.
    DiagonalRight,
    /// Down and to the left.
    DiagonalLeft,
}

impl Direction {
    /// All scan directions, in the order they are checked.
    pub const ALL: [Direction; 4] = [
        Direction::Across,
        Direction::Down,
        Direction::DiagonalRight,
        Direction::DiagonalLeft,
    ];

    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Across => (0, 1),
            Direction::Down => (1, 0),
            Direction::DiagonalRight => (1, 1),
            Direction::DiagonalLeft => (1, -1),
        }
    }
}

/// A winning run: where it starts and which way it goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Line {
    pub start: Move,
    pub direction: Direction,
}

/// Checks whether `length` consecutive cells starting at `start` and stepping in
/// `direction` all hold `letter`.
///
/// # Arguments
/// * `board`: Board to inspect.
/// * `letter`: Marker the run must consist of.
/// * `start`: First cell of the run.
/// * `direction`: Step applied between consecutive cells.
/// * `length`: Number of cells in the run, including `start`.
///
/// # Returns
/// True if every cell of the run is on the board and holds `letter`. A run
/// that would step off the board is false; it never wraps to another row or
/// column.
pub fn run_from(
    board: &Board,
    letter: Letter,
    start: Move,
    direction: Direction,
    length: usize,
) -> bool {
    let (dr, dc) = direction.delta();
    let (r0, c0) = (start.row as isize, start.col as isize);
    (0..length as isize)
        .all(|step| board.cell_at(r0 + dr * step, c0 + dc * step) == Some(Cell::Taken(letter)))
}

/// Finds the first winning run for `letter`, scanning start cells in row-major
/// order and directions in [`Direction::ALL`] order.
///
/// # Returns
/// The start cell and direction of the first run of `board.win_length()`
/// markers, or `None` if `letter` has not won.
pub fn winning_line(board: &Board, letter: Letter) -> Option<Line> {
    let k = board.win_length();
    for r in 0..board.rows() {
        for c in 0..board.cols() {
            if board.get_cell(r, c) != Cell::Taken(letter) {
                continue;
            }
            let start = Move::new(r, c);
            if let Some(direction) = Direction::ALL
                .into_iter()
                .find(|&d| run_from(board, letter, start, d, k))
            {
                return Some(Line { start, direction });
            }
        }
    }
    None
}

/// Returns true if `letter` has at least `k` in a row anywhere on the board,
/// where `k` is the board's configured win length.
///
/// # Examples
/// ```
/// use mnk_game::engine::{BoardConfig, Letter};
/// use mnk_game::utils::board_from_str_array;
/// use mnk_game::win::is_winner;
///
/// let board = board_from_str_array(BoardConfig::default(), &["  X", " X ", "X  "]).unwrap();
/// assert!(is_winner(&board, Letter::X));
/// assert!(!is_winner(&board, Letter::O));
/// ```
pub fn is_winner(board: &Board, letter: Letter) -> bool {
    winning_line(board, letter).is_some()
}

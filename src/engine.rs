//! Core board model for the m-n-k game.
//!
//! This module defines the game's fundamental components:
//! - `Letter` and `Cell`: the two player markers and the state of a single square.
//! - `BoardConfig`: validated board dimensions and the run length needed to win.
//! - `Board`: the m×n grid, with move application, fill checks and text rendering.
//! - `Move`, `Role` and `PlayerAssignment`: the values the game engine passes around.
use crate::error::{ConfigError, ParseError};
use std::fmt;
use std::str::FromStr;

/// One of the two markers a player places on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Letter {
    X,
    O,
}

impl Letter {
    /// Returns the opposing marker.
    pub fn other(self) -> Letter {
        match self {
            Letter::X => Letter::O,
            Letter::O => Letter::X,
        }
    }

    /// Converts the letter to its character representation.
    ///
    /// # Examples
    ///
    /// ```
    /// use mnk_game::engine::Letter;
    /// assert_eq!(Letter::X.to_char(), 'X');
    /// assert_eq!(Letter::O.to_char(), 'O');
    /// ```
    pub fn to_char(self) -> char {
        match self {
            Letter::X => 'X',
            Letter::O => 'O',
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl FromStr for Letter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "X" => Ok(Letter::X),
            "O" => Ok(Letter::O),
            _ => Err(ParseError::UnrecognizedLetter(s.trim().to_string())),
        }
    }
}

/// State of a single square on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Taken(Letter),
}

impl Cell {
    /// Character used when drawing the board. Empty squares render as a space.
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Taken(letter) => letter.to_char(),
        }
    }
}

impl From<Letter> for Cell {
    fn from(letter: Letter) -> Self {
        Cell::Taken(letter)
    }
}

/// Shortest run length a game may be played with.
pub const MIN_WIN_LENGTH: usize = 3;

/// Board dimensions plus the number of markers in a row needed to win.
///
/// Only constructible through [`BoardConfig::new`], so every live board satisfies
/// `2 < win_length <= min(rows, cols)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoardConfig {
    rows: usize,
    cols: usize,
    win_length: usize,
}

impl BoardConfig {
    /// Validates the dimensions of an m×n board with a run length of k.
    ///
    /// # Examples
    /// ```
    /// use mnk_game::engine::BoardConfig;
    /// assert!(BoardConfig::new(3, 3, 3).is_ok());
    /// assert!(BoardConfig::new(3, 3, 2).is_err());
    /// assert!(BoardConfig::new(4, 3, 4).is_err());
    /// ```
    pub fn new(rows: usize, cols: usize, win_length: usize) -> Result<Self, ConfigError> {
        if win_length < MIN_WIN_LENGTH {
            return Err(ConfigError::WinLengthTooShort { k: win_length });
        }
        if win_length > rows || win_length > cols {
            return Err(ConfigError::WinLengthTooLong {
                k: win_length,
                rows,
                cols,
            });
        }
        Ok(BoardConfig {
            rows,
            cols,
            win_length,
        })
    }

    /// Checks that an m×n board can host any game at all, i.e. that some run
    /// length is both long enough and fits on the board.
    ///
    /// # Arguments
    /// * `rows`: Number of rows, m.
    /// * `cols`: Number of columns, n.
    ///
    /// # Returns
    /// `Ok(())` if `min(rows, cols) >= MIN_WIN_LENGTH`, otherwise
    /// `ConfigError::BoardTooSmall`.
    ///
    /// # Examples
    /// ```
    /// use mnk_game::engine::BoardConfig;
    /// assert!(BoardConfig::check_dimensions(3, 7).is_ok());
    /// assert!(BoardConfig::check_dimensions(2, 5).is_err());
    /// ```
    pub fn check_dimensions(rows: usize, cols: usize) -> Result<(), ConfigError> {
        if rows < MIN_WIN_LENGTH || cols < MIN_WIN_LENGTH {
            return Err(ConfigError::BoardTooSmall {
                rows,
                cols,
                min: MIN_WIN_LENGTH,
            });
        }
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }
}

impl Default for BoardConfig {
    /// Classic tic-tac-toe: 3×3, three in a row.
    fn default() -> Self {
        BoardConfig {
            rows: 3,
            cols: 3,
            win_length: 3,
        }
    }
}

/// A (row, column) coordinate on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Move { row, col }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Which side of the table a player sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Human,
    Computer,
}

impl Role {
    pub fn other(self) -> Role {
        match self {
            Role::Human => Role::Computer,
            Role::Computer => Role::Human,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Human => write!(f, "human player"),
            Role::Computer => write!(f, "computer"),
        }
    }
}

/// Binding of the two letters to the human and the computer for one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerAssignment {
    human: Letter,
    computer: Letter,
}

impl PlayerAssignment {
    /// The human picks a letter; the computer gets the other one.
    pub fn for_human(human: Letter) -> Self {
        PlayerAssignment {
            human,
            computer: human.other(),
        }
    }

    pub fn human(&self) -> Letter {
        self.human
    }

    pub fn computer(&self) -> Letter {
        self.computer
    }

    pub fn letter_for(&self, role: Role) -> Letter {
        match role {
            Role::Human => self.human,
            Role::Computer => self.computer,
        }
    }
}

/// The game board: an m×n grid of cells stored in row-major order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    config: BoardConfig,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board with the given dimensions.
    ///
    /// # Examples
    /// ```
    /// use mnk_game::engine::{Board, BoardConfig, Cell};
    /// let board = Board::new_empty(BoardConfig::new(4, 5, 3).unwrap());
    /// assert_eq!(board.get_cell(3, 4), Cell::Empty);
    /// assert!(!board.is_full());
    /// ```
    pub fn new_empty(config: BoardConfig) -> Self {
        Board {
            config,
            cells: vec![Cell::Empty; config.rows * config.cols],
        }
    }

    /// Builds a board from rows of cells. Missing rows and short rows are padded
    /// with `Cell::Empty`; the caller guarantees nothing exceeds the dimensions.
    pub(crate) fn from_rows(config: BoardConfig, rows: &[Vec<Cell>]) -> Self {
        let mut board = Board::new_empty(config);
        for (r, row) in rows.iter().enumerate() {
            for (c, &cell) in row.iter().enumerate() {
                board.set_cell(r, c, cell);
            }
        }
        board
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn rows(&self) -> usize {
        self.config.rows
    }

    pub fn cols(&self) -> usize {
        self.config.cols
    }

    pub fn win_length(&self) -> usize {
        self.config.win_length
    }

    fn index(&self, r: usize, c: usize) -> usize {
        assert!(
            r < self.config.rows && c < self.config.cols,
            "({}, {}) is outside a {}x{} board",
            r,
            c,
            self.config.rows,
            self.config.cols
        );
        r * self.config.cols + c
    }

    /// Returns the cell at row `r`, column `c`.
    ///
    /// # Panics
    /// Panics if `r` or `c` are outside the board dimensions.
    pub fn get_cell(&self, r: usize, c: usize) -> Cell {
        self.cells[self.index(r, c)]
    }

    /// Bounds-checked lookup taking signed coordinates, so that callers stepping
    /// off any edge of the board get `None` instead of a panic.
    pub fn cell_at(&self, r: isize, c: isize) -> Option<Cell> {
        if r < 0 || c < 0 {
            return None;
        }
        let (r, c) = (r as usize, c as usize);
        if r >= self.config.rows || c >= self.config.cols {
            return None;
        }
        Some(self.cells[r * self.config.cols + c])
    }

    fn set_cell(&mut self, r: usize, c: usize, cell: Cell) {
        let idx = self.index(r, c);
        self.cells[idx] = cell;
    }

    /// True if `(r, c)` is on the board and empty.
    pub fn is_space_free(&self, r: usize, c: usize) -> bool {
        r < self.config.rows
            && c < self.config.cols
            && self.cells[r * self.config.cols + c] == Cell::Empty
    }

    /// Places `letter` at the move's coordinates, overwriting whatever is there.
    ///
    /// # Panics
    /// Panics if the move is outside the board.
    pub fn make_move(&mut self, mv: Move, letter: Letter) {
        self.set_cell(mv.row, mv.col, Cell::Taken(letter));
    }

    /// Resets a square to empty. Used to undo hypothetical placements.
    pub fn clear_cell(&mut self, r: usize, c: usize) {
        self.set_cell(r, c, Cell::Empty);
    }

    /// All empty squares, in row-major order.
    pub fn empty_cells(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(idx, _)| Move::new(idx / self.config.cols, idx % self.config.cols))
            .collect()
    }

    /// True once no empty square remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }
}

impl fmt::Display for Board {
    /// Draws the board with column indices across the top and row indices down
    /// the left, e.g. for a 2×3 board:
    ///
    /// ```text
    ///   0 1 2
    /// 0|X| |O|
    /// 1| | | |
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for c in 0..self.config.cols {
            write!(f, " {}", c)?;
        }
        for r in 0..self.config.rows {
            write!(f, "\n{}", r)?;
            for c in 0..self.config.cols {
                write!(f, "|{}", self.get_cell(r, c).to_char())?;
            }
            write!(f, "|")?;
        }
        Ok(())
    }
}

use crate::engine::{Move, Role};
use crate::game::GameState;

/// Errors raised while validating board dimensions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("win length {k} must be greater than 2")]
    WinLengthTooShort { k: usize },

    #[error("win length {k} must not exceed rows ({rows}) or columns ({cols})")]
    WinLengthTooLong { k: usize, rows: usize, cols: usize },

    #[error("a {rows}x{cols} board is too small: rows and columns must both be at least {min}")]
    BoardTooSmall { rows: usize, cols: usize, min: usize },
}

/// Errors raised while parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid number of rows: expected at most {expected}, found {found}")]
    TooManyRows { expected: usize, found: usize },

    #[error("row {row} is too long: expected at most {expected} characters, found {found}")]
    RowTooLong {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unrecognized character '{ch}' in row {row} col {col}")]
    UnrecognizedChar { ch: char, row: usize, col: usize },

    #[error("unrecognized letter '{0}' (expected X or O)")]
    UnrecognizedLetter(String),
}

/// Reasons a typed move is rejected. The caller re-prompts on any of these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveInputError {
    #[error("expected two numbers separated by a space, e.g. '1 2'")]
    WrongArity,

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("({row}, {col}) is off the board (0-{max_row}, 0-{max_col})")]
    OutOfRange {
        row: usize,
        col: usize,
        max_row: usize,
        max_col: usize,
    },

    #[error("{0} is already taken")]
    Occupied(Move),
}

/// Contract violations and collaborator failures surfaced by the game engine.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("it is not the {expected}'s turn (state: {state:?})")]
    WrongTurn { expected: Role, state: GameState },

    #[error("move {0} does not reference an empty cell on the board")]
    IllegalMove(Move),

    #[error("game is already over")]
    GameOver,

    #[error("invalid board: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input closed before the game finished")]
    InputClosed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::WinLengthTooLong {
            k: 5,
            rows: 4,
            cols: 6,
        };
        assert_eq!(
            err.to_string(),
            "win length 5 must not exceed rows (4) or columns (6)"
        );
    }

    #[test]
    fn test_board_too_small_display() {
        let err = GameError::from(ConfigError::BoardTooSmall {
            rows: 2,
            cols: 5,
            min: 3,
        });
        assert_eq!(
            err.to_string(),
            "invalid board: a 2x5 board is too small: rows and columns must both be at least 3"
        );
    }

    #[test]
    fn test_move_input_error_display() {
        let err = MoveInputError::Occupied(Move::new(1, 2));
        assert_eq!(err.to_string(), "(1, 2) is already taken");

        let err = MoveInputError::OutOfRange {
            row: 3,
            col: 0,
            max_row: 2,
            max_col: 2,
        };
        assert_eq!(err.to_string(), "(3, 0) is off the board (0-2, 0-2)");
    }

    #[test]
    fn test_game_error_display() {
        let err = GameError::WrongTurn {
            expected: Role::Human,
            state: GameState::AwaitingComputerMove,
        };
        assert_eq!(
            err.to_string(),
            "it is not the human player's turn (state: AwaitingComputerMove)"
        );
    }
}

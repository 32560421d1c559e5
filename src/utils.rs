use crate::engine::{Board, BoardConfig, Cell, Letter, Move};
use crate::error::{MoveInputError, ParseError};

/// Parses an array of string slices into a `Board` with the given dimensions.
///
/// Each string slice represents a row, starting from row 0. Missing rows and
/// short rows are filled with `Cell::Empty`.
///
/// Valid characters are:
/// - 'X' or 'x': `Letter::X`
/// - 'O' or 'o': `Letter::O`
/// - ' ' or '.': `Cell::Empty`
///
/// # Errors
/// Returns a `ParseError` if there are more rows than `config.rows()`, a row is
/// longer than `config.cols()`, or an unrecognized character appears.
///
/// # Examples
/// ```
/// use mnk_game::engine::{BoardConfig, Cell, Letter};
/// use mnk_game::utils::board_from_str_array;
///
/// let board = board_from_str_array(BoardConfig::default(), &["X.O", " X"]).unwrap();
/// assert_eq!(board.get_cell(0, 0), Cell::Taken(Letter::X));
/// assert_eq!(board.get_cell(0, 1), Cell::Empty);
/// assert_eq!(board.get_cell(1, 1), Cell::Taken(Letter::X));
/// assert_eq!(board.get_cell(2, 2), Cell::Empty);
///
/// assert!(board_from_str_array(BoardConfig::default(), &["XXXX"]).is_err());
/// ```
pub fn board_from_str_array(config: BoardConfig, s: &[&str]) -> Result<Board, ParseError> {
    if s.len() > config.rows() {
        return Err(ParseError::TooManyRows {
            expected: config.rows(),
            found: s.len(),
        });
    }

    let mut rows = Vec::with_capacity(s.len());
    for (r, row_str) in s.iter().enumerate() {
        let len = row_str.chars().count();
        if len > config.cols() {
            return Err(ParseError::RowTooLong {
                row: r,
                expected: config.cols(),
                found: len,
            });
        }

        let row = row_str
            .chars()
            .enumerate()
            .map(|(c, ch)| match ch {
                'X' | 'x' => Ok(Cell::Taken(Letter::X)),
                'O' | 'o' => Ok(Cell::Taken(Letter::O)),
                ' ' | '.' => Ok(Cell::Empty),
                _ => Err(ParseError::UnrecognizedChar { ch, row: r, col: c }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(row);
    }

    Ok(Board::from_rows(config, &rows))
}

/// Parses a typed move of the form `"row col"` and checks it against the board.
///
/// # Errors
/// Returns a `MoveInputError` if the input doesn't hold exactly two
/// non-negative integers, names a square off the board, or names a square
/// that is already taken.
///
/// # Examples
/// ```
/// use mnk_game::engine::{Board, BoardConfig, Move};
/// use mnk_game::utils::parse_move;
///
/// let board = Board::new_empty(BoardConfig::default());
/// assert_eq!(parse_move(" 2 1\n", &board), Ok(Move::new(2, 1)));
/// assert!(parse_move("3 0", &board).is_err());
/// assert!(parse_move("a b", &board).is_err());
/// ```
pub fn parse_move(input: &str, board: &Board) -> Result<Move, MoveInputError> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    if parts.len() != 2 {
        return Err(MoveInputError::WrongArity);
    }

    let parse = |part: &str| {
        part.parse::<usize>()
            .map_err(|_| MoveInputError::NotANumber(part.to_string()))
    };
    let row = parse(parts[0])?;
    let col = parse(parts[1])?;

    if row >= board.rows() || col >= board.cols() {
        return Err(MoveInputError::OutOfRange {
            row,
            col,
            max_row: board.rows() - 1,
            max_col: board.cols() - 1,
        });
    }

    let mv = Move::new(row, col);
    if !board.is_space_free(row, col) {
        return Err(MoveInputError::Occupied(mv));
    }
    Ok(mv)
}

/// True if the answer to a yes/no question starts with `y` or `Y`.
pub fn parse_yes(input: &str) -> bool {
    input.trim_start().to_lowercase().starts_with('y')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic_board(rows: &[&str]) -> Board {
        board_from_str_array(BoardConfig::default(), rows).unwrap()
    }

    #[test]
    fn test_board_from_str_array_valid() {
        let config = BoardConfig::new(3, 4, 3).unwrap();
        let board = board_from_str_array(config, &["XO.x", "o   ", "...."]).unwrap();
        assert_eq!(board.get_cell(0, 0), Cell::Taken(Letter::X));
        assert_eq!(board.get_cell(0, 1), Cell::Taken(Letter::O));
        assert_eq!(board.get_cell(0, 2), Cell::Empty);
        assert_eq!(board.get_cell(0, 3), Cell::Taken(Letter::X));
        assert_eq!(board.get_cell(1, 0), Cell::Taken(Letter::O));
        assert_eq!(board.empty_cells().len(), 7);
    }

    #[test]
    fn test_board_from_str_array_invalid_char() {
        let result = board_from_str_array(BoardConfig::default(), &["XQ "]);
        assert_eq!(
            result,
            Err(ParseError::UnrecognizedChar {
                ch: 'Q',
                row: 0,
                col: 1
            })
        );
    }

    #[test]
    fn test_board_from_str_array_row_too_long() {
        let result = board_from_str_array(BoardConfig::default(), &["", "XOXO"]);
        assert_eq!(
            result,
            Err(ParseError::RowTooLong {
                row: 1,
                expected: 3,
                found: 4
            })
        );
    }

    #[test]
    fn test_board_from_str_array_too_many_rows() {
        let result = board_from_str_array(BoardConfig::default(), &["", "", "", ""]);
        assert!(result.unwrap_err().to_string().contains("invalid number of rows"));
    }

    #[test]
    fn test_board_from_str_array_empty_input() {
        let board = board_from_str_array(BoardConfig::default(), &[]).unwrap();
        assert_eq!(board, Board::new_empty(BoardConfig::default()));
    }

    #[test]
    fn test_parse_move_valid() {
        let board = classic_board(&["X  ", "", ""]);
        assert_eq!(parse_move("0 1", &board), Ok(Move::new(0, 1)));
        assert_eq!(parse_move("  2\t2  ", &board), Ok(Move::new(2, 2)));
    }

    #[test]
    fn test_parse_move_wrong_arity() {
        let board = classic_board(&[]);
        assert_eq!(parse_move("", &board), Err(MoveInputError::WrongArity));
        assert_eq!(parse_move("1", &board), Err(MoveInputError::WrongArity));
        assert_eq!(parse_move("1 2 3", &board), Err(MoveInputError::WrongArity));
    }

    #[test]
    fn test_parse_move_not_a_number() {
        let board = classic_board(&[]);
        assert_eq!(
            parse_move("1 b", &board),
            Err(MoveInputError::NotANumber("b".to_string()))
        );
        assert_eq!(
            parse_move("-1 0", &board),
            Err(MoveInputError::NotANumber("-1".to_string()))
        );
    }

    #[test]
    fn test_parse_move_out_of_range() {
        let board = classic_board(&[]);
        assert_eq!(
            parse_move("0 3", &board),
            Err(MoveInputError::OutOfRange {
                row: 0,
                col: 3,
                max_row: 2,
                max_col: 2
            })
        );
    }

    #[test]
    fn test_parse_move_occupied() {
        let board = classic_board(&["", " O", ""]);
        assert_eq!(
            parse_move("1 1", &board),
            Err(MoveInputError::Occupied(Move::new(1, 1)))
        );
    }

    #[test]
    fn test_parse_yes() {
        assert!(parse_yes("y"));
        assert!(parse_yes("Yes please\n"));
        assert!(!parse_yes("n"));
        assert!(!parse_yes(""));
    }
}

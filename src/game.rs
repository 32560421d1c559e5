//! Turn sequencing for a single game between a human and the computer.
//!
//! A [`Game`] owns the live board and the randomness source for exactly one
//! game. Human moves arrive from outside through [`MoveInput`]; computer moves
//! come from [`crate::heuristics::choose_move`]. After every move the mover's
//! letter is checked for a win, then the board for a draw.
use crate::engine::{Board, BoardConfig, Letter, Move, PlayerAssignment, Role};
use crate::error::GameError;
use crate::heuristics::choose_move;
use crate::win::{is_winner, winning_line};
use rand::Rng;
use tracing::{debug, info};

/// Where the game's state machine currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameState {
    AwaitingHumanMove,
    AwaitingComputerMove,
    Won(Role),
    Draw,
}

impl GameState {
    fn awaiting(role: Role) -> Self {
        match role {
            Role::Human => GameState::AwaitingHumanMove,
            Role::Computer => GameState::AwaitingComputerMove,
        }
    }

    /// The role expected to move next, or `None` once the game has ended.
    pub fn to_move(self) -> Option<Role> {
        match self {
            GameState::AwaitingHumanMove => Some(Role::Human),
            GameState::AwaitingComputerMove => Some(Role::Computer),
            GameState::Won(_) | GameState::Draw => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self.to_move().is_none()
    }
}

/// Result of a game, derived from the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Win(Role),
    Draw,
}

/// Source of human moves.
///
/// Implementations must only return moves that reference an empty square on
/// `board`; re-prompting on bad input is their job, not the engine's.
pub trait MoveInput {
    fn next_move(&mut self, board: &Board) -> Result<Move, GameError>;
}

/// Feeds a fixed list of moves, in order. Handy for scripted play and tests.
impl MoveInput for std::vec::IntoIter<Move> {
    fn next_move(&mut self, _board: &Board) -> Result<Move, GameError> {
        self.next().ok_or(GameError::InputClosed)
    }
}

/// One game of m-n-k between a human and the computer.
///
/// # Examples
/// ```
/// use mnk_game::engine::{BoardConfig, Letter, Move, PlayerAssignment, Role};
/// use mnk_game::game::{Game, GameState};
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
///
/// let assignment = PlayerAssignment::for_human(Letter::X);
/// let rng = SmallRng::seed_from_u64(7);
/// let mut game = Game::with_first_turn(BoardConfig::default(), assignment, Role::Human, rng);
///
/// let state = game.apply_human_move(Move::new(1, 1)).unwrap();
/// assert_eq!(state, GameState::AwaitingComputerMove);
/// let reply = game.play_computer_turn().unwrap();
/// assert_ne!(reply, Move::new(1, 1));
/// assert_eq!(game.state(), GameState::AwaitingHumanMove);
/// ```
#[derive(Clone, Debug)]
pub struct Game<R> {
    board: Board,
    assignment: PlayerAssignment,
    state: GameState,
    moves_made: usize,
    rng: R,
}

impl<R: Rng> Game<R> {
    /// Starts a game on an empty board, flipping a fair coin with `rng` to decide
    /// who moves first. The same `rng` later drives the computer's random moves.
    pub fn new(config: BoardConfig, assignment: PlayerAssignment, mut rng: R) -> Self {
        let first = if rng.gen_bool(0.5) {
            Role::Computer
        } else {
            Role::Human
        };
        Self::with_first_turn(config, assignment, first, rng)
    }

    /// Starts a game on an empty board with a chosen first mover.
    pub fn with_first_turn(
        config: BoardConfig,
        assignment: PlayerAssignment,
        first: Role,
        rng: R,
    ) -> Self {
        info!(
            rows = config.rows(),
            cols = config.cols(),
            k = config.win_length(),
            human = %assignment.human(),
            first = %first,
            "starting game"
        );
        Game {
            board: Board::new_empty(config),
            assignment,
            state: GameState::awaiting(first),
            moves_made: 0,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn assignment(&self) -> PlayerAssignment {
        self.assignment
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Number of moves applied so far, by either side.
    pub fn moves_made(&self) -> usize {
        self.moves_made
    }

    /// Recomputes the result from the board alone.
    pub fn outcome(&self) -> GameOutcome {
        for role in [Role::Human, Role::Computer] {
            if is_winner(&self.board, self.assignment.letter_for(role)) {
                return GameOutcome::Win(role);
            }
        }
        if self.board.is_full() {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        }
    }

    fn expect_turn(&self, role: Role) -> Result<(), GameError> {
        match self.state.to_move() {
            None => Err(GameError::GameOver),
            Some(r) if r == role => Ok(()),
            Some(_) => Err(GameError::WrongTurn {
                expected: role,
                state: self.state,
            }),
        }
    }

    /// Places the human's letter at `mv` and advances the state machine.
    ///
    /// # Errors
    /// Fails with `GameOver` or `WrongTurn` if it isn't the human's move, and
    /// with `IllegalMove` if `mv` isn't an empty square on the board. The board
    /// is left untouched in every error case.
    pub fn apply_human_move(&mut self, mv: Move) -> Result<GameState, GameError> {
        self.expect_turn(Role::Human)?;
        if !self.board.is_space_free(mv.row, mv.col) {
            return Err(GameError::IllegalMove(mv));
        }
        Ok(self.advance(Role::Human, mv))
    }

    /// Lets the computer choose and place its move, returning the square it took.
    ///
    /// # Errors
    /// `GameOver` or `WrongTurn` if it isn't the computer's move.
    pub fn play_computer_turn(&mut self) -> Result<Move, GameError> {
        self.expect_turn(Role::Computer)?;
        let letter = self.assignment.computer();
        let (mv, reason) = choose_move(
            &self.board,
            letter,
            self.assignment.human(),
            &mut self.rng,
        );
        debug!(%mv, ?reason, "computer chose move");
        self.advance(Role::Computer, mv);
        Ok(mv)
    }

    /// Applies a validated move for `role` and computes the next state: a win
    /// for the mover, else a draw on a full board, else the other side's turn.
    fn advance(&mut self, role: Role, mv: Move) -> GameState {
        let letter: Letter = self.assignment.letter_for(role);
        self.board.make_move(mv, letter);
        self.moves_made += 1;
        debug!(role = %role, %letter, %mv, moves = self.moves_made, "move applied");

        self.state = if let Some(line) = winning_line(&self.board, letter) {
            info!(winner = %role, start = %line.start, direction = ?line.direction, "game won");
            GameState::Won(role)
        } else if self.board.is_full() {
            info!(moves = self.moves_made, "game drawn");
            GameState::Draw
        } else {
            GameState::awaiting(role.other())
        };
        self.state
    }

    /// Runs the game to completion.
    ///
    /// Human turns pull a move from `input`. `observer` is called with the
    /// board after every move, which is where rendering hooks in.
    ///
    /// # Arguments
    /// * `input`: Supplies the human's moves. Moves that don't land on an
    ///   empty square are rejected with `IllegalMove`.
    /// * `observer`: Called with the board after each applied move.
    ///
    /// # Returns
    /// `GameOutcome::Win` or `GameOutcome::Draw`; never `InProgress`.
    ///
    /// # Errors
    /// Any error from `input` (e.g. `InputClosed`) is passed through, leaving
    /// the game at the turn it was interrupted on. On a finished game `play`
    /// returns the existing outcome without asking for input.
    pub fn play<I, F>(&mut self, input: &mut I, mut observer: F) -> Result<GameOutcome, GameError>
    where
        I: MoveInput + ?Sized,
        F: FnMut(&Board),
    {
        while let Some(role) = self.state.to_move() {
            match role {
                Role::Human => {
                    let mv = input.next_move(&self.board)?;
                    self.apply_human_move(mv)?;
                }
                Role::Computer => {
                    self.play_computer_turn()?;
                }
            }
            observer(&self.board);
        }
        Ok(self.outcome())
    }
}

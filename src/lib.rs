//! # m-n-k Game Library
//!
//! This library provides the core logic for the m-n-k game: tic-tac-toe
//! generalized to an m×n board where k markers in a row win, played by a human
//! against a one-ply-lookahead computer opponent.
//!
//! It is used by two binaries:
//! - `human_player`: Interactive play against the computer on the command line.
//! - `selector_evaluator`: Plays seeded batches of games between the computer's
//!   move selector and a random opponent and reports the results.
//!
//! ## Modules
//! - `engine`: The board (`Board`), markers (`Letter`, `Cell`), validated
//!   dimensions (`BoardConfig`), and the `Move`, `Role` and `PlayerAssignment` values.
//! - `win`: Detection of k-in-a-row runs in the four line directions.
//! - `heuristics`: The computer's move selection (win, else block, else random).
//! - `game`: The turn-based state machine (`Game`) that sequences one game.
//! - `utils`: Parsing boards and typed moves from text.
//! - `error`: Error types shared by the modules above.

pub mod engine;
pub mod error;
pub mod game;
pub mod heuristics;
pub mod utils;
pub mod win;

//! Tic-tac-toe core: game state machine and move-policy engine.
//!
//! This library owns the 3x3 board state, terminal detection, the
//! heuristic computer-move policies, and session/score bookkeeping.
//! It renders nothing: a UI collaborator feeds it move requests and
//! configuration and reacts to the returned [`MoveOutcome`]s.
//!
//! # Architecture
//!
//! - **Board**: 9 squares, whose-turn tracking, win/draw detection
//! - **Policy**: easy/medium/hard computer-move selection
//! - **Session**: lifecycle (restart, score reset, close) and the
//!   single place that mutates the [`ScoreBoard`]
//! - **Scheduler**: the delayed, generation-guarded computer move
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Difficulty, GameSession, Mode, MoveOutcome};
//!
//! # fn example() -> Result<(), tictactoe_core::GameError> {
//! let mut session = GameSession::new(Mode::HumanVsComputer, Some(Difficulty::Hard))?;
//! match session.apply_human_move(4) {
//!     MoveOutcome::Applied { .. } => { /* schedule the computer move */ }
//!     MoveOutcome::IllegalMove(_) => { /* re-prompt */ }
//!     MoveOutcome::Win { .. } => { /* show outcome */ }
//!     MoveOutcome::Draw => { /* show outcome */ }
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod error;
mod policy;
mod position;
mod rules;
mod scheduler;
mod score;
mod session;

// Crate-level exports - board types
pub use board::{Board, Player, Square};

// Crate-level exports - positions and winning lines
pub use position::Position;
pub use rules::{LINES, WinningLine, check_winner, is_draw};

// Crate-level exports - errors
pub use error::{GameError, IllegalMoveReason};

// Crate-level exports - move policies
pub use policy::{best_move, choose_move, random_move};

// Crate-level exports - session lifecycle
pub use session::{Difficulty, GameSession, Mode, MoveOutcome};

// Crate-level exports - scoring
pub use score::ScoreBoard;

// Crate-level exports - delayed computer move
pub use scheduler::{DEFAULT_THINK_DELAY, MoveScheduler, SharedSession, shared};

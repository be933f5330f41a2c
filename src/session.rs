//! Game session lifecycle: configuration, move application, scoring.

use crate::board::{Board, Player, Square};
use crate::error::{GameError, IllegalMoveReason};
use crate::policy;
use crate::position::Position;
use crate::rules::{WinningLine, check_winner};
use crate::score::ScoreBoard;
use rand::Rng;
use std::str::FromStr;
use tracing::{info, instrument, warn};

/// Game mode.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Mode {
    /// Two humans sharing the board.
    #[serde(rename = "pvp")]
    #[strum(to_string = "pvp", serialize = "human-vs-human")]
    HumanVsHuman,
    /// Human as X against the computer as O.
    #[serde(rename = "pvc")]
    #[strum(to_string = "pvc", serialize = "human-vs-computer")]
    HumanVsComputer,
}

/// Computer difficulty, meaningful only in [`Mode::HumanVsComputer`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random moves.
    Easy,
    /// Coin flip between Hard and Easy on every computer turn.
    Medium,
    /// Layered win/block/center/corner heuristic.
    Hard,
}

/// Result of a move request, consumed by the UI collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MoveOutcome {
    /// Move applied; play continues with `next_turn`.
    Applied {
        /// Side to move next.
        next_turn: Player,
    },
    /// Move rejected; board unchanged.
    IllegalMove(IllegalMoveReason),
    /// Move completed a line; the session is now inactive.
    Win {
        /// The winning side.
        player: Player,
        /// The completed line.
        line: WinningLine,
    },
    /// Move filled the board with no line; the session is now inactive.
    Draw,
}

/// One playthrough's mutable state plus the session-lifetime scores.
///
/// The board accepts moves only while `active`; a terminal condition
/// freezes it until [`GameSession::restart`]. Restarting bumps the
/// generation counter so a computer move scheduled against the old
/// board is discarded rather than applied (see the scheduler).
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    mode: Mode,
    difficulty: Option<Difficulty>,
    current_turn: Player,
    active: bool,
    scores: ScoreBoard,
    generation: u64,
    history: Vec<Position>,
}

impl GameSession {
    /// Creates a new session for the given mode.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if the mode is [`Mode::HumanVsComputer`]
    /// and no difficulty was supplied.
    #[instrument]
    pub fn new(mode: Mode, difficulty: Option<Difficulty>) -> Result<Self, GameError> {
        if mode == Mode::HumanVsComputer && difficulty.is_none() {
            warn!("Rejected vs-computer session without difficulty");
            return Err(GameError::InvalidConfiguration(
                "human-vs-computer mode requires a difficulty".to_string(),
            ));
        }

        info!(%mode, ?difficulty, "Creating game session");
        Ok(Self {
            board: Board::new(),
            mode,
            difficulty,
            current_turn: Player::X,
            active: true,
            scores: ScoreBoard::new(),
            generation: 0,
            history: Vec::new(),
        })
    }

    /// Creates a session from the UI's untyped mode/difficulty labels.
    ///
    /// Accepts `"pvp"`/`"human-vs-human"` and `"pvc"`/`"human-vs-computer"`
    /// for the mode and `"easy"`/`"medium"`/`"hard"` for the difficulty.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` on any unrecognized label; the caller
    /// should re-prompt.
    #[instrument]
    pub fn from_labels(mode: &str, difficulty: Option<&str>) -> Result<Self, GameError> {
        let mode = Mode::from_str(mode).map_err(|_| {
            warn!(mode, "Unrecognized mode label");
            GameError::InvalidConfiguration(format!("unknown mode: {mode}"))
        })?;

        let difficulty = match difficulty {
            Some(label) => Some(Difficulty::from_str(label).map_err(|_| {
                warn!(difficulty = label, "Unrecognized difficulty label");
                GameError::InvalidConfiguration(format!("unknown difficulty: {label}"))
            })?),
            None => None,
        };

        Self::new(mode, difficulty)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the session mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the configured difficulty, if any.
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    /// Returns the side to move.
    pub fn current_turn(&self) -> Player {
        self.current_turn
    }

    /// Whether the session is accepting moves.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the cumulative scores.
    pub fn scores(&self) -> ScoreBoard {
        self.scores
    }

    /// Returns the current generation counter.
    ///
    /// Bumped on every restart and close; scheduled computer moves
    /// carry the generation they were created under and are discarded
    /// on mismatch.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Positions played this game, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// True when the session is waiting on a computer move.
    pub fn is_computer_turn(&self) -> bool {
        self.mode == Mode::HumanVsComputer && self.current_turn == Player::O
    }

    /// Applies a move for the given side.
    ///
    /// On success the cell is marked, the turn flips, and terminal
    /// detection runs; a win or draw freezes the session and updates
    /// the scores exactly once.
    ///
    /// # Errors
    ///
    /// `IllegalMove` if the index is out of range, the cell is
    /// occupied, the session is inactive, or it is not `player`'s
    /// turn. The board is unchanged on error.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: usize, player: Player) -> Result<MoveOutcome, GameError> {
        self.try_apply(index, player).map_err(|reason| {
            warn!(index, %player, %reason, "Rejected move");
            GameError::IllegalMove(reason)
        })
    }

    /// Applies a human move, folding rejections into the outcome enum.
    ///
    /// In [`Mode::HumanVsHuman`] the move is credited to the side to
    /// move; in [`Mode::HumanVsComputer`] the human always plays X, so
    /// input during the computer's turn (including the think-delay
    /// window) comes back as `IllegalMove(NotYourTurn)`.
    #[instrument(skip(self))]
    pub fn apply_human_move(&mut self, index: usize) -> MoveOutcome {
        let player = match self.mode {
            Mode::HumanVsHuman => self.current_turn,
            Mode::HumanVsComputer => Player::X,
        };

        match self.try_apply(index, player) {
            Ok(outcome) => outcome,
            Err(reason) => {
                warn!(index, %player, %reason, "Rejected human move");
                MoveOutcome::IllegalMove(reason)
            }
        }
    }

    /// Selects and applies the computer's move at the configured
    /// difficulty.
    ///
    /// Returns `IllegalMove` if the session is inactive or it is not
    /// the computer's turn (a scheduled move that outlived its game
    /// should have been discarded by generation before reaching this).
    ///
    /// # Panics
    ///
    /// If no empty square remains, which terminal detection makes
    /// unreachable: a full board is a draw and draws deactivate the
    /// session.
    #[instrument(skip(self, rng))]
    pub fn apply_computer_move(&mut self, rng: &mut impl Rng) -> MoveOutcome {
        if !self.active {
            return MoveOutcome::IllegalMove(IllegalMoveReason::SessionInactive);
        }
        if !self.is_computer_turn() {
            warn!(turn = %self.current_turn, "Computer move requested out of turn");
            return MoveOutcome::IllegalMove(IllegalMoveReason::NotYourTurn);
        }

        let difficulty = self
            .difficulty
            .expect("vs-computer session carries a difficulty");
        let pos = policy::choose_move(&self.board, difficulty, Player::O, rng)
            .expect("computer move requested with no empty squares");

        info!(%pos, %difficulty, "Computer move selected");
        match self.try_apply(pos.to_index(), Player::O) {
            Ok(outcome) => outcome,
            Err(reason) => MoveOutcome::IllegalMove(reason),
        }
    }

    fn try_apply(
        &mut self,
        index: usize,
        player: Player,
    ) -> Result<MoveOutcome, IllegalMoveReason> {
        if !self.active {
            return Err(IllegalMoveReason::SessionInactive);
        }
        let pos = Position::from_index(index).ok_or(IllegalMoveReason::OutOfRange)?;
        if !self.board.is_empty(pos) {
            return Err(IllegalMoveReason::CellOccupied);
        }
        if player != self.current_turn {
            return Err(IllegalMoveReason::NotYourTurn);
        }

        self.board.set(pos, Square::Occupied(player));
        self.history.push(pos);
        self.current_turn = player.opponent();

        if let Some((winner, line)) = check_winner(&self.board) {
            self.active = false;
            self.scores.record_win(winner);
            info!(%winner, ?line, "Game won");
            return Ok(MoveOutcome::Win {
                player: winner,
                line,
            });
        }

        if self.board.is_full() {
            self.active = false;
            self.scores.record_draw();
            info!("Game drawn");
            return Ok(MoveOutcome::Draw);
        }

        Ok(MoveOutcome::Applied {
            next_turn: self.current_turn,
        })
    }

    /// Clears the board for a fresh game, preserving the scores.
    ///
    /// X moves first again and any computer move still pending from
    /// the previous game is invalidated by the generation bump.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.board = Board::new();
        self.current_turn = Player::X;
        self.active = true;
        self.history.clear();
        self.generation += 1;
        info!(generation = self.generation, "Session restarted");
    }

    /// Zeroes the scores and returns the zeroed board of counters.
    /// The game in progress, if any, is unaffected.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) -> ScoreBoard {
        self.scores.reset();
        self.scores
    }

    /// Stops the session ahead of returning to the menu.
    ///
    /// No further moves are accepted and pending computer moves are
    /// invalidated; the caller drops the session afterwards since
    /// mode and difficulty must be re-chosen.
    #[instrument(skip(self))]
    pub fn close(&mut self) {
        self.active = false;
        self.generation += 1;
        info!("Session closed");
    }
}

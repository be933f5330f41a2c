//! Win detection logic for tic-tac-toe.

use crate::board::{Board, Player, Square};
use crate::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winning lines in scan order: 3 rows, 3 columns, 2 diagonals.
///
/// Scan order is the tie-break when more than one line is complete
/// (reachable only on hand-built boards; a legal move completing a
/// row and a diagonal together reports the row).
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed three-in-a-row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningLine {
    positions: [Position; 3],
}

impl WinningLine {
    /// The three positions forming the line.
    pub fn positions(&self) -> [Position; 3] {
        self.positions
    }

    /// The three positions as board indices (0-8).
    pub fn indices(&self) -> [usize; 3] {
        self.positions.map(Position::to_index)
    }
}

/// Checks if there is a winner on the board.
///
/// Scans [`LINES`] in order and returns the first line whose three
/// squares hold the same mark, together with that player.
#[instrument]
pub fn check_winner(board: &Board) -> Option<(Player, WinningLine)> {
    for line in LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            if let Square::Occupied(player) = sq {
                return Some((player, WinningLine { positions: line }));
            }
        }
    }

    None
}

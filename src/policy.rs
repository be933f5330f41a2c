//! Move-selection policies for the computer player.
//!
//! The hard policy is a deliberately greedy 1-ply heuristic: it
//! completes or blocks a line one move ahead and otherwise prefers
//! center, then a random corner, then any open square. It does not
//! look ahead far enough to see forks; that limitation is part of
//! the difficulty contract, not a bug to fix.

use crate::board::{Board, Player, Square};
use crate::position::Position;
use crate::rules::check_winner;
use crate::session::Difficulty;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

const CORNERS: [Position; 4] = [
    Position::TopLeft,
    Position::TopRight,
    Position::BottomLeft,
    Position::BottomRight,
];

/// Picks a uniformly random empty position, if any remain.
#[instrument(skip(rng))]
pub fn random_move(board: &Board, rng: &mut impl Rng) -> Option<Position> {
    Position::valid_moves(board).choose(rng).copied()
}

/// Would placing `player` at `pos` complete a line?
///
/// Evaluated on a copy of the board so the live board never holds a
/// hypothetical mark.
fn wins_if_played(board: &Board, pos: Position, player: Player) -> bool {
    let mut probe = board.clone();
    probe.set(pos, Square::Occupied(player));
    check_winner(&probe).is_some_and(|(winner, _)| winner == player)
}

/// Picks the best move for `player` under the layered heuristic.
///
/// Layers, each tried only if the previous produced nothing:
/// 1. complete an own line (first hit in index order 0-8)
/// 2. block the opponent's completing move (index order)
/// 3. take the center
/// 4. take a random open corner
/// 5. take a random open square
///
/// Returns `None` only on a full board.
#[instrument(skip(rng))]
pub fn best_move(
    board: &Board,
    player: Player,
    rng: &mut impl Rng,
) -> Option<Position> {
    // 1. Immediate win
    for pos in Position::ALL {
        if board.is_empty(pos) && wins_if_played(board, pos, player) {
            debug!(%pos, "Taking winning square");
            return Some(pos);
        }
    }

    // 2. Block opponent
    let opponent = player.opponent();
    for pos in Position::ALL {
        if board.is_empty(pos) && wins_if_played(board, pos, opponent) {
            debug!(%pos, "Blocking opponent");
            return Some(pos);
        }
    }

    // 3. Center
    if board.is_empty(Position::Center) {
        return Some(Position::Center);
    }

    // 4. Random open corner
    let open_corners: Vec<Position> = CORNERS
        .iter()
        .copied()
        .filter(|&pos| board.is_empty(pos))
        .collect();
    if let Some(&pos) = open_corners.choose(rng) {
        return Some(pos);
    }

    // 5. Anything left
    random_move(board, rng)
}

/// Picks a move for `player` at the given difficulty.
///
/// Medium flips a fresh coin on every call, so a single game may
/// alternate between the hard and easy policies turn to turn.
///
/// Returns `None` only on a full board.
#[instrument(skip(rng))]
pub fn choose_move(
    board: &Board,
    difficulty: Difficulty,
    player: Player,
    rng: &mut impl Rng,
) -> Option<Position> {
    match difficulty {
        Difficulty::Easy => random_move(board, rng),
        Difficulty::Medium => {
            if rng.gen_bool(0.5) {
                best_move(board, player, rng)
            } else {
                random_move(board, rng)
            }
        }
        Difficulty::Hard => best_move(board, player, rng),
    }
}

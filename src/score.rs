//! Cumulative score tracking across games.

use crate::board::Player;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Cumulative counters for a session's lifetime.
///
/// Survives restarts; zeroed only by explicit reset. Mutated exactly
/// once per finished game, by terminal detection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    /// Games won by X.
    wins_x: u32,
    /// Games won by O.
    wins_o: u32,
    /// Drawn games.
    draws: u32,
    /// Total finished games.
    games_played: u32,
}

impl ScoreBoard {
    /// Creates a zeroed score board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Games won by X.
    pub fn wins_x(&self) -> u32 {
        self.wins_x
    }

    /// Games won by O.
    pub fn wins_o(&self) -> u32 {
        self.wins_o
    }

    /// Drawn games.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Total finished games.
    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Fraction of finished games won by the given player.
    ///
    /// Reports 0.0 before any game has finished.
    pub fn win_rate(&self, player: Player) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        let wins = match player {
            Player::X => self.wins_x,
            Player::O => self.wins_o,
        };
        f64::from(wins) / f64::from(self.games_played)
    }

    /// Records a won game.
    pub(crate) fn record_win(&mut self, player: Player) {
        match player {
            Player::X => self.wins_x += 1,
            Player::O => self.wins_o += 1,
        }
        self.games_played += 1;
        info!(%player, games_played = self.games_played, "Recorded win");
    }

    /// Records a drawn game.
    pub(crate) fn record_draw(&mut self) {
        self.draws += 1;
        self.games_played += 1;
        info!(games_played = self.games_played, "Recorded draw");
    }

    /// Zeroes all counters.
    pub fn reset(&mut self) {
        *self = Self::default();
        info!("Score board reset");
    }
}

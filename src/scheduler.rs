//! Delayed computer-move scheduling.
//!
//! The computer "thinks" for a short, fixed delay before its move
//! lands, purely for pacing. A scheduled move is never cancelled;
//! instead it carries the generation it was created under and is
//! discarded if the session restarted or closed in the meantime, so
//! a stale move can never hit a fresh board.

use crate::session::{GameSession, MoveOutcome};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

/// Default think delay before the computer's move applies.
pub const DEFAULT_THINK_DELAY: Duration = Duration::from_millis(500);

/// A session shared between the caller and scheduled move tasks.
pub type SharedSession = Arc<Mutex<GameSession>>;

/// Wraps a session for sharing with the scheduler.
pub fn shared(session: GameSession) -> SharedSession {
    Arc::new(Mutex::new(session))
}

/// Schedules computer moves against a shared session.
#[derive(Debug, Clone)]
pub struct MoveScheduler {
    delay: Duration,
}

impl MoveScheduler {
    /// Creates a scheduler with the default think delay.
    pub fn new() -> Self {
        Self {
            delay: DEFAULT_THINK_DELAY,
        }
    }

    /// Creates a scheduler with a custom think delay.
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    /// Schedules exactly one computer move after the think delay.
    ///
    /// Call after a human move when the session is still active and
    /// it is the computer's turn. The task re-checks the session
    /// under the lock when it fires and resolves to:
    ///
    /// - `Some(outcome)` if the move applied (or was rejected by the
    ///   session itself);
    /// - `None` if the move went stale: the generation changed, the
    ///   game finished, or it is no longer the computer's turn.
    #[instrument(skip(self, session))]
    pub fn schedule(&self, session: &SharedSession) -> JoinHandle<Option<MoveOutcome>> {
        let generation = session
            .lock()
            .expect("session lock poisoned")
            .generation();
        let session = Arc::clone(session);
        let delay = self.delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let mut guard = session.lock().expect("session lock poisoned");
            if guard.generation() != generation {
                debug!(
                    scheduled = generation,
                    current = guard.generation(),
                    "Discarding stale computer move"
                );
                return None;
            }
            if !guard.is_active() || !guard.is_computer_turn() {
                debug!("Computer move no longer applicable");
                return None;
            }

            let mut rng = rand::thread_rng();
            Some(guard.apply_computer_move(&mut rng))
        })
    }
}

impl Default for MoveScheduler {
    fn default() -> Self {
        Self::new()
    }
}

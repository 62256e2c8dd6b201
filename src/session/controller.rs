//! Threaded session controller.
//!
//! Owns the window between staging a move and committing it: a staged move
//! is committed by a timer thread after a fixed presentational delay, and
//! the state machine ignores clicks until the commit lands. All access to
//! the shared session goes through a single mutex, so the board has one
//! writer and renderers read consistent snapshots.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use parking_lot::Mutex;

use super::{ClickOutcome, GameSession, Selection};
use crate::board::{Board, Square};

/// Delay before a staged move is committed to the board.
pub const DEFAULT_ANIMATION_DELAY: Duration = Duration::from_millis(300);

/// Drives a shared [`GameSession`], deferring move commits by the
/// animation delay.
pub struct SessionController {
    session: Arc<Mutex<GameSession>>,
    delay: Duration,
    commit_job: Option<JoinHandle<()>>,
}

impl SessionController {
    /// Create a controller over the standard starting position with the
    /// default animation delay.
    #[must_use]
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_ANIMATION_DELAY)
    }

    /// Create a controller with a custom commit delay.
    #[must_use]
    pub fn with_delay(delay: Duration) -> Self {
        SessionController {
            session: Arc::new(Mutex::new(GameSession::new())),
            delay,
            commit_job: None,
        }
    }

    /// Forward a click to the session.
    ///
    /// When the click stages a move, a commit thread is spawned that sleeps
    /// the animation delay and then applies the move. Clicks arriving
    /// before the commit report [`ClickOutcome::Ignored`].
    pub fn click(&mut self, square: Square) -> ClickOutcome {
        self.reap_finished_job();

        let outcome = self.session.lock().handle_click(square);
        if let ClickOutcome::MoveStaged { .. } = outcome {
            let session = Arc::clone(&self.session);
            let delay = self.delay;
            self.commit_job = Some(thread::spawn(move || {
                thread::sleep(delay);
                session.lock().commit_pending();
            }));
        }
        outcome
    }

    /// Consistent copy of the board for rendering.
    #[must_use]
    pub fn board_snapshot(&self) -> Board {
        self.session.lock().board().clone()
    }

    /// Squares the display should mark; empty when nothing is selected.
    #[must_use]
    pub fn highlights(&self) -> Vec<Square> {
        self.session.lock().highlights().to_vec()
    }

    /// Copy of the current selection, if a piece awaits a destination.
    #[must_use]
    pub fn selection_snapshot(&self) -> Option<Selection> {
        self.session.lock().selection().cloned()
    }

    /// Restart from the standard starting position.
    ///
    /// Waits out any staged move first so the reset cannot race a commit.
    pub fn reset(&mut self) {
        self.wait_idle();
        self.session.lock().reset();
    }

    /// Block until any staged move has been committed.
    pub fn wait_idle(&mut self) {
        if let Some(job) = self.commit_job.take() {
            let _ = job.join();
        }
    }

    fn reap_finished_job(&mut self) {
        if self
            .commit_job
            .as_ref()
            .map_or(false, |job| job.is_finished())
        {
            self.wait_idle();
        }
    }
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Color, Piece};

    #[test]
    fn test_staged_move_commits_after_delay() {
        let mut controller = SessionController::with_delay(Duration::from_millis(1));
        assert!(matches!(
            controller.click(Square(6, 4)),
            ClickOutcome::Selected { .. }
        ));
        assert!(matches!(
            controller.click(Square(4, 4)),
            ClickOutcome::MoveStaged { .. }
        ));
        controller.wait_idle();
        let board = controller.board_snapshot();
        assert_eq!(board.piece_at(Square(4, 4)), Some((Color::Light, Piece::Pawn)));
        assert!(board.is_empty(Square(6, 4)));
    }

    #[test]
    fn test_input_locked_out_during_commit_window() {
        let mut controller = SessionController::with_delay(Duration::from_millis(100));
        controller.click(Square(6, 4));
        controller.click(Square(4, 4));
        // The commit thread is still sleeping; this click lands inside the
        // window and must not start a new selection
        assert_eq!(controller.click(Square(6, 0)), ClickOutcome::Ignored);
        controller.wait_idle();
        assert!(matches!(
            controller.click(Square(6, 0)),
            ClickOutcome::Selected { .. }
        ));
    }

    #[test]
    fn test_reset_waits_for_pending_commit() {
        let mut controller = SessionController::with_delay(Duration::from_millis(10));
        controller.click(Square(6, 4));
        controller.click(Square(5, 4));
        controller.reset();
        assert_eq!(controller.board_snapshot(), Board::new());
        assert!(controller.highlights().is_empty());
    }
}

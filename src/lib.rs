//! Simplified chess piece-movement demo.
//!
//! An 8x8 board, a click-driven selection state machine, and a legality
//! engine that checks move shapes only: no turn enforcement beyond the
//! same-color capture rule, no check detection, and no path blocking for
//! sliding pieces.

pub mod board;
pub mod session;
pub mod ui;

pub use board::{Board, BoardBuilder, Color, Piece, Square, SquareError};
pub use session::{ClickOutcome, GameSession, SessionController};

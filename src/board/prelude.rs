//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_demo::board::prelude::*;
//! ```

pub use super::{Board, BoardBuilder, Color, Piece, Square, SquareError};

//! Selection state machine for the click-driven demo.
//!
//! A session is either idle or holding a selection. The first click on an
//! occupied square selects it and computes its destinations for
//! highlighting; the next click either stages a move or discards the
//! selection. A staged move must be committed (or cancelled) before the
//! session accepts further clicks, which closes the window where a second
//! selection could race a commit.

use crate::board::{Board, Color, Piece, Square};

/// The piece and square chosen as move origin, pending a destination click.
#[derive(Clone, Debug)]
pub struct Selection {
    /// Square the selected piece stands on
    pub square: Square,
    /// Color of the selected piece
    pub color: Color,
    /// Kind of the selected piece
    pub piece: Piece,
    /// Legal destinations, precomputed for highlighting
    pub destinations: Vec<Square>,
}

/// A move that was accepted but not yet committed to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingMove {
    pub from: Square,
    pub to: Square,
}

/// What a click did to the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing happened: an empty square was clicked while idle, or input
    /// arrived while a staged move was outstanding.
    Ignored,
    /// A piece was selected; its destinations should be highlighted.
    Selected { destinations: Vec<Square> },
    /// The move was accepted and staged for commit.
    MoveStaged { from: Square, to: Square },
    /// The destination was illegal; the selection was discarded and the
    /// board left unchanged.
    Rejected { from: Square, to: Square },
}

/// One interactive game: a board plus the transient selection state.
///
/// The machine is deterministic and clock-free; the presentational delay
/// between staging and committing a move belongs to the caller (see
/// [`super::SessionController`]).
#[derive(Clone, Debug, Default)]
pub struct GameSession {
    board: Board,
    selection: Option<Selection>,
    pending: Option<PendingMove>,
}

impl GameSession {
    /// Create a session over the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Self::with_board(Board::new())
    }

    /// Create a session over an arbitrary position.
    #[must_use]
    pub fn with_board(board: Board) -> Self {
        GameSession {
            board,
            selection: None,
            pending: None,
        }
    }

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The current selection, if a piece is awaiting a destination.
    #[must_use]
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// The staged move, if one is awaiting commit.
    #[must_use]
    pub fn pending(&self) -> Option<PendingMove> {
        self.pending
    }

    /// Squares to mark in the display; empty when idle.
    #[must_use]
    pub fn highlights(&self) -> &[Square] {
        self.selection
            .as_ref()
            .map_or(&[], |sel| sel.destinations.as_slice())
    }

    /// Restart from the standard starting position, dropping any selection
    /// and any staged move.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.selection = None;
        self.pending = None;
    }

    /// Process a square click.
    ///
    /// While a staged move is outstanding the click is ignored. Otherwise
    /// an idle session selects the clicked piece (or ignores an empty
    /// square), and a selected session treats the click as the destination:
    /// a legal one stages the move, an illegal one discards the selection.
    /// Either way the selection is cleared.
    pub fn handle_click(&mut self, square: Square) -> ClickOutcome {
        if self.pending.is_some() {
            return ClickOutcome::Ignored;
        }

        match self.selection.take() {
            None => {
                if !square.in_bounds() {
                    return ClickOutcome::Ignored;
                }
                match self.board.piece_at(square) {
                    Some((color, piece)) => {
                        let destinations = self.board.legal_destinations(square);
                        #[cfg(feature = "logging")]
                        log::debug!(
                            "selected {color} {piece} on {square} ({} destinations)",
                            destinations.len()
                        );
                        self.selection = Some(Selection {
                            square,
                            color,
                            piece,
                            destinations: destinations.clone(),
                        });
                        ClickOutcome::Selected { destinations }
                    }
                    None => ClickOutcome::Ignored,
                }
            }
            Some(selection) => {
                let from = selection.square;
                if self.board.is_legal(from, square) {
                    self.pending = Some(PendingMove { from, to: square });
                    #[cfg(feature = "logging")]
                    log::debug!("staged move {from} -> {square}");
                    ClickOutcome::MoveStaged { from, to: square }
                } else {
                    #[cfg(feature = "logging")]
                    log::debug!("rejected move {from} -> {square}");
                    ClickOutcome::Rejected { from, to: square }
                }
            }
        }
    }

    /// Apply the staged move to the board, if any, and return it.
    pub fn commit_pending(&mut self) -> Option<PendingMove> {
        let mv = self.pending.take()?;
        self.board.apply_move(mv.from, mv.to);
        #[cfg(feature = "logging")]
        log::debug!("committed move {} -> {}", mv.from, mv.to);
        Some(mv)
    }

    /// Discard the staged move without touching the board.
    pub fn cancel_pending(&mut self) -> Option<PendingMove> {
        self.pending.take()
    }
}

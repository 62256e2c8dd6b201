//! Interactive session layer.
//!
//! [`GameSession`] is the deterministic selection state machine;
//! [`SessionController`] wraps it with the timed commit window used by
//! interactive frontends.

mod controller;
mod machine;

pub use controller::{SessionController, DEFAULT_ANIMATION_DELAY};
pub use machine::{ClickOutcome, GameSession, PendingMove, Selection};

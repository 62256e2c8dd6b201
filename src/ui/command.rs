//! Parsing of interactive input lines.

use crate::board::Square;

/// A line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickCommand {
    /// A square click in algebraic notation, e.g. "e2".
    Click(Square),
    /// Redraw the board.
    Board,
    /// Restart from the initial position.
    Reset,
    /// Show the help text.
    Help,
    /// Leave the demo.
    Quit,
    /// Anything unrecognized, kept verbatim for the error message.
    Unknown(String),
}

/// Parse one input line. Returns `None` for blank lines.
#[must_use]
pub fn parse_command(line: &str) -> Option<ClickCommand> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let cmd = match trimmed {
        "board" => ClickCommand::Board,
        "reset" => ClickCommand::Reset,
        "help" => ClickCommand::Help,
        "quit" | "exit" => ClickCommand::Quit,
        other => match other.parse::<Square>() {
            Ok(square) => ClickCommand::Click(square),
            Err(_) => ClickCommand::Unknown(other.to_string()),
        },
    };

    Some(cmd)
}

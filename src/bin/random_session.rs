//! Drives a session with random legal moves and prints the result.

use std::env;

use rand::prelude::*;

use chess_demo::board::Square;
use chess_demo::session::{ClickOutcome, GameSession};
use chess_demo::ui::render_board;

fn main() {
    let args: Vec<String> = env::args().collect();
    let target: usize = args.get(1).and_then(|v| v.parse().ok()).unwrap_or(12);

    let mut session = GameSession::new();
    let mut rng = thread_rng();
    let mut played = 0usize;

    for _ in 0..10_000 {
        if played == target {
            break;
        }
        let from = Square(rng.gen_range(0..8), rng.gen_range(0..8));
        let destinations = match session.handle_click(from) {
            ClickOutcome::Selected { destinations } => destinations,
            _ => continue,
        };
        if destinations.is_empty() {
            // Clicking the origin again discards the selection
            session.handle_click(from);
            continue;
        }

        let to = destinations[rng.gen_range(0..destinations.len())];
        if let ClickOutcome::MoveStaged { from, to } = session.handle_click(to) {
            session.commit_pending();
            played += 1;
            println!("{played:2}. {from} -> {to}");
        }
    }

    println!();
    println!("{}", render_board(session.board(), &[]));
    println!(
        "{} pieces remain after {} moves",
        session.board().piece_count(),
        played
    );
}

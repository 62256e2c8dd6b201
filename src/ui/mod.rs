//! Terminal presentation layer.
//!
//! Renders the board as a glyph grid and treats each entered square as a
//! click: the first click selects a piece and highlights its destinations,
//! the second either moves it or discards the selection. Legality failures
//! never abort the loop; the board simply stays put.

pub mod command;
pub mod print;

use std::io::{self, BufRead};

use crate::board::Square;
use crate::session::{ClickOutcome, SessionController};

pub use command::{parse_command, ClickCommand};
pub use print::{piece_glyph, render_board};

const HELP_TEXT: &str = "\
enter a square (e.g. e2) to click it: the first click selects a piece,
the second moves it when the destination is legal
  board  redraw the board
  reset  restart from the initial position
  help   show this message
  quit   leave the demo";

/// Run the interactive demo loop on stdin, printing to stdout.
///
/// Returns when a quit command arrives or stdin is closed.
pub fn run_demo_loop() {
    let mut controller = SessionController::new();

    println!("{HELP_TEXT}");
    println!();
    println!("{}", render_board(&controller.board_snapshot(), &[]));

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        let cmd = match parse_command(&line) {
            Some(cmd) => cmd,
            None => continue,
        };

        match cmd {
            ClickCommand::Click(square) => handle_click(&mut controller, square),
            ClickCommand::Board => {
                println!(
                    "{}",
                    render_board(&controller.board_snapshot(), &controller.highlights())
                );
            }
            ClickCommand::Reset => {
                controller.reset();
                println!("board reset");
                println!("{}", render_board(&controller.board_snapshot(), &[]));
            }
            ClickCommand::Help => println!("{HELP_TEXT}"),
            ClickCommand::Quit => break,
            ClickCommand::Unknown(input) => {
                println!("unrecognized input '{input}' (try 'help')");
            }
        }
    }
}

fn handle_click(controller: &mut SessionController, square: Square) {
    match controller.click(square) {
        ClickOutcome::Selected { .. } => {
            if let Some(selection) = controller.selection_snapshot() {
                println!(
                    "selected {} {} on {} ({} destinations)",
                    selection.color,
                    selection.piece,
                    selection.square,
                    selection.destinations.len()
                );
            }
            println!(
                "{}",
                render_board(&controller.board_snapshot(), &controller.highlights())
            );
        }
        ClickOutcome::MoveStaged { from, to } => {
            println!("moving {from} -> {to}");
            // The commit lands after the animation delay; wait it out so
            // the next prompt renders the settled board
            controller.wait_idle();
            println!("{}", render_board(&controller.board_snapshot(), &[]));
        }
        ClickOutcome::Rejected { from, to } => {
            println!("illegal move {from} -> {to}, selection cleared");
        }
        ClickOutcome::Ignored => {
            println!("empty square {square}");
        }
    }
}

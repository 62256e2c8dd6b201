//! Scripts the interactive binary over stdin and checks its output.

use std::io::{Read, Write};
use std::process::{Command, Stdio};

fn run_script(script: &str) -> String {
    let exe = env!("CARGO_BIN_EXE_chess_demo");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn demo binary");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(script.as_bytes())
        .unwrap();

    let mut output = String::new();
    child
        .stdout
        .take()
        .unwrap()
        .read_to_string(&mut output)
        .expect("read failed");
    let _ = child.wait();
    output
}

#[test]
fn pawn_move_round_trip() {
    let output = run_script("e2\ne3\nboard\nquit\n");

    assert!(output.contains("a b c d e f g h"));
    assert!(output.contains("selected light pawn on e2 (2 destinations)"));
    assert!(output.contains("moving e2 -> e3"));
    // The pawn rank renders with one pawn advanced
    assert!(output.contains('♙'));
}

#[test]
fn illegal_move_and_bad_input_are_reported() {
    let output = run_script("e2\ne5\nx9\nd4\nquit\n");

    assert!(output.contains("illegal move e2 -> e5, selection cleared"));
    assert!(output.contains("unrecognized input 'x9' (try 'help')"));
    assert!(output.contains("empty square d4"));
}

#[test]
fn reset_restores_the_starting_position() {
    let output = run_script("e2\ne4\nreset\nquit\n");

    assert!(output.contains("moving e2 -> e4"));
    assert!(output.contains("board reset"));
    // The final render shows all eight light pawns on their home rank
    let last_board = output.rfind("2 ♙").expect("reset board printed");
    assert!(output[last_board..].matches('♙').count() >= 8);
}

//! Player input: coordinate moves, castling and a few commands.

use chess_core::{MoveDescriptor, ParseSquareError, PieceKind, Side, Square, Wing};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(MoveDescriptor),
    Resign,
    Board,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("empty input")]
    Empty,
    #[error("expected a move like e2e4, e7e8q or O-O, got {0:?}")]
    Unrecognized(String),
    #[error(transparent)]
    Square(#[from] ParseSquareError),
    #[error("{0:?} is not a promotion piece (use q, r, b or n)")]
    Promotion(char),
}

pub const HELP: &str = "\
moves:    e2e4, e2-e4, e7e8q (promote to q/r/b/n), O-O, O-O-O
commands: board, resign, help, quit";

/// Parses one line typed by the human, who plays `side`.
pub fn parse_command(line: &str, side: Side) -> Result<Command, InputError> {
    let text = line.trim();
    match text.to_ascii_lowercase().as_str() {
        "" => return Err(InputError::Empty),
        "resign" => return Ok(Command::Resign),
        "board" | "b" => return Ok(Command::Board),
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" | "q" => return Ok(Command::Quit),
        "o-o" | "0-0" => return Ok(Command::Move(MoveDescriptor::castle(side, Wing::Kingside))),
        "o-o-o" | "0-0-0" => {
            return Ok(Command::Move(MoveDescriptor::castle(side, Wing::Queenside)))
        }
        _ => {}
    }
    parse_coordinate_move(text).map(Command::Move)
}

/// `e2e4`, `e2-e4`, `e2xd3`, `e7e8q` or `e7e8=Q`.
pub fn parse_coordinate_move(text: &str) -> Result<MoveDescriptor, InputError> {
    let compact: String = text
        .to_ascii_lowercase()
        .chars()
        .filter(|c| !matches!(c, '-' | 'x' | '='))
        .collect();
    if !compact.is_ascii() || !(4..=5).contains(&compact.len()) {
        return Err(InputError::Unrecognized(text.to_string()));
    }

    let from: Square = compact[0..2].parse()?;
    let to: Square = compact[2..4].parse()?;
    let mut desc = MoveDescriptor::from_to(from, to);

    if let Some(letter) = compact[4..].chars().next() {
        match PieceKind::from_letter(letter) {
            Some(kind) if kind.is_promotion_choice() => desc = desc.with_promotion(kind),
            _ => return Err(InputError::Promotion(letter)),
        }
    }
    Ok(desc)
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod input_tests;

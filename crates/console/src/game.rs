//! The human-vs-computer game loop.

use std::io::{BufRead, Write};

use anyhow::Result;
use chess_core::{GameResult, GameState, Outcome, PlayedMove, Side, commit, outcome, play};
use minimax_engine::{MinimaxEngine, Response};
use tracing::{debug, info};

use crate::input::{Command, HELP, parse_command};

/// PGN-style result string.
pub fn result_text(result: GameResult) -> &'static str {
    match result {
        GameResult::Ongoing => "*",
        GameResult::Checkmate {
            winner: Side::Player,
        }
        | GameResult::Resigned {
            loser: Side::Computer,
        } => "1-0",
        GameResult::Checkmate {
            winner: Side::Computer,
        }
        | GameResult::Resigned {
            loser: Side::Player,
        } => "0-1",
        GameResult::Stalemate => "1/2-1/2",
    }
}

fn describe(result: GameResult) -> &'static str {
    match result {
        GameResult::Ongoing => "game abandoned",
        GameResult::Checkmate { .. } => "checkmate",
        GameResult::Stalemate => "stalemate",
        GameResult::Resigned {
            loser: Side::Player,
        } => "you resigned",
        GameResult::Resigned {
            loser: Side::Computer,
        } => "the computer resigns",
    }
}

/// `e2e4`, plus `+` for check or `#` for mate.
fn move_text(played: &PlayedMove) -> String {
    let suffix = match played.outcome {
        Some(Outcome::Checkmate { .. }) => "#",
        _ if played.gives_check => "+",
        _ => "",
    };
    format!("{}{suffix}", played.mv)
}

/// Plays one game on `state` until it ends or the human quits, reading the
/// human's moves from `input` and writing everything else to `out`.
pub fn run<R: BufRead, W: Write>(
    state: &mut GameState,
    engine: &mut MinimaxEngine,
    mut input: R,
    out: &mut W,
) -> Result<GameResult> {
    if let Some(o) = outcome(state) {
        state.result = o.into();
    }
    writeln!(out, "{}", state.board)?;

    let mut line = String::new();
    while !state.result.is_over() {
        match state.side_to_move {
            Side::Player => {
                write!(out, "{} > ", state.fullmove_number)?;
                out.flush()?;
                line.clear();
                if input.read_line(&mut line)? == 0 {
                    break;
                }
                match parse_command(&line, Side::Player) {
                    Ok(Command::Move(desc)) => match play(state, &desc) {
                        Ok(played) => writeln!(out, "You: {}", move_text(&played))?,
                        Err(e) => writeln!(out, "Illegal move: {e}")?,
                    },
                    Ok(Command::Resign) => state.resign(Side::Player),
                    Ok(Command::Board) => writeln!(out, "{}", state.board)?,
                    Ok(Command::Help) => writeln!(out, "{HELP}")?,
                    Ok(Command::Quit) => break,
                    Err(e) => writeln!(out, "{e}\n{HELP}")?,
                }
            }
            Side::Computer => match engine.respond(state) {
                Response::Play { mv, score } => {
                    let played = commit(state, mv);
                    debug!(score, nodes = engine.nodes(), "computer moved");
                    writeln!(out, "Computer: {}", move_text(&played))?;
                    writeln!(out, "{}", state.board)?;
                }
                Response::Resign { .. } => state.resign(Side::Computer),
                Response::NoMoves => {
                    // Only reachable if the position was terminal already.
                    if let Some(o) = outcome(state) {
                        state.result = o.into();
                    }
                    break;
                }
            },
        }
    }

    let result = state.result;
    info!(result = result_text(result), "game finished");
    writeln!(out, "{} ({})", result_text(result), describe(result))?;
    Ok(result)
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;

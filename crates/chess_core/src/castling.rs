//! Castling validation.
//!
//! The generator proposes castling whenever the rights flag is still set; this
//! is where the six preconditions are actually checked.

use crate::attacks::is_square_attacked;
use crate::error::{CastlingError, invariant_violation};
use crate::executor::rook_squares;
use crate::movegen::castle_move;
use crate::state::GameState;
use crate::types::*;

/// Checks, in order and stopping at the first failure:
/// 1. `side` has not castled and has not moved this wing's king or rook,
/// 2. king and rook stand on their starting squares,
/// 3. every square between them is empty,
/// 4. the king is not in check,
/// 5. the square the king crosses is not attacked,
/// 6. the king's destination is not attacked.
///
/// Squares 5 and 6 are tested with the king tentatively standing on them;
/// the board is back as it was when this returns.
pub fn can_castle(state: &mut GameState, side: Side, wing: Wing) -> Result<(), CastlingError> {
    let rights = state.castling.get(side);
    if rights.castled {
        return Err(CastlingError::AlreadyCastled);
    }
    if !rights.wing(wing) {
        return Err(CastlingError::KingOrRookMoved);
    }

    let king_move = castle_move(side, wing);
    let (rook_from, _) = rook_squares(side, wing);
    let board = &state.board;

    let king = Piece::new(side, PieceKind::King);
    if board.piece_at(king_move.from) != Some(king) {
        return Err(CastlingError::MissingKing);
    }
    if board.piece_at(rook_from) != Some(Piece::new(side, PieceKind::Rook)) {
        return Err(CastlingError::MissingRook);
    }

    let rank = side.back_rank();
    let (lo, hi) = if rook_from.file() < king_move.from.file() {
        (rook_from.file() + 1, king_move.from.file())
    } else {
        (king_move.from.file() + 1, rook_from.file())
    };
    for file in lo..hi {
        let sq = Square::new(file, rank)
            .unwrap_or_else(|| invariant_violation(format_args!("castling path off board at file {file}")));
        if !board.is_empty(sq) {
            return Err(CastlingError::PathBlocked);
        }
    }

    let enemy = side.other();
    if is_square_attacked(board, enemy, king_move.from) {
        return Err(CastlingError::InCheck);
    }

    let transit = Square::new(wing.transit_file(), rank)
        .unwrap_or_else(|| invariant_violation(format_args!("castling transit off board for {side}")));
    if king_attacked_on(state, king_move.from, transit) {
        return Err(CastlingError::ThroughCheck);
    }
    if king_attacked_on(state, king_move.from, king_move.to) {
        return Err(CastlingError::IntoCheck);
    }
    Ok(())
}

/// Moves the king from `home` to the empty square `probe`, asks whether it is
/// attacked there, and puts it back.
fn king_attacked_on(state: &mut GameState, home: Square, probe: Square) -> bool {
    let board = &mut state.board;
    let king = board.take(home);
    let Some(pc) = king else {
        invariant_violation(format_args!("king vanished from {home} during castling check"));
    };
    board.set(probe, king);
    let attacked = is_square_attacked(board, pc.owner.other(), probe);
    board.set(probe, None);
    board.set(home, king);
    attacked
}

#[cfg(test)]
#[path = "castling_tests.rs"]
mod castling_tests;

use crate::attacks::in_check;
use crate::error::EnPassantError;
use crate::state::GameState;
use crate::types::*;

/// Checks that `attacker`'s pawn on `from` may capture en passant by moving
/// to `to`. Returns the square of the pawn that would be removed.
///
/// This does not look at king safety; [`validate_en_passant`] does.
pub fn can_en_passant(
    state: &GameState,
    attacker: Side,
    from: Square,
    to: Square,
) -> Result<Square, EnPassantError> {
    let board = &state.board;
    if !board.is_empty(to) {
        return Err(EnPassantError::DestinationOccupied(to));
    }

    let victim_sq = state
        .en_passant
        .get(attacker.other())
        .filter(|pawn| {
            pawn.file() == to.file() && pawn.rank() == to.rank() - attacker.pawn_dir()
        })
        .ok_or(EnPassantError::NoDoubleAdvance)?;

    if board.piece_at(from) != Some(Piece::new(attacker, PieceKind::Pawn)) {
        return Err(EnPassantError::NotAttackerPawn(from));
    }
    if from.rank() + attacker.pawn_dir() != to.rank() || (from.file() - to.file()).abs() != 1 {
        return Err(EnPassantError::NotDiagonalStep { from, to });
    }

    if board.piece_at(victim_sq) != Some(Piece::new(attacker.other(), PieceKind::Pawn)) {
        return Err(EnPassantError::CapturedNotPawn(victim_sq));
    }
    Ok(victim_sq)
}

/// Full en-passant check: the preliminary tests above, then the capture is
/// played and taken back to make sure it does not uncover a check on the
/// attacker's king. The state is unchanged either way.
pub fn validate_en_passant(
    state: &mut GameState,
    attacker: Side,
    from: Square,
    to: Square,
) -> Result<Move, EnPassantError> {
    let victim_sq = can_en_passant(state, attacker, from, to)?;

    let mut mv = Move::new(from, to, PieceKind::Pawn);
    mv.kind = MoveKind::EnPassantCapture;
    mv.capture = state.board.piece_at(victim_sq);

    let after = state.scoped(mv);
    if in_check(&after.board, attacker) {
        return Err(EnPassantError::DiscoveredCheck);
    }
    Ok(mv)
}

#[cfg(test)]
#[path = "en_passant_tests.rs"]
mod en_passant_tests;

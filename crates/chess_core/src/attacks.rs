//! Attack and check detection.
//!
//! Works backwards from the target square: look outward along knight jumps,
//! king steps, pawn capture diagonals and sliding rays for an attacker of the
//! right kind. Castling and en passant never capture on an arbitrary square,
//! so they play no part here.

use crate::board::Board;
use crate::error::invariant_violation;
use crate::types::*;

pub(crate) const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

pub(crate) const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub(crate) const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// True if a piece of `by` could capture on `target` with its next move.
pub fn is_square_attacked(board: &Board, by: Side, target: Square) -> bool {
    let has = |sq: Option<Square>, kind: PieceKind| {
        sq.and_then(|s| board.piece_at(s))
            .is_some_and(|pc| pc.owner == by && pc.kind == kind)
    };

    // A pawn of `by` attacks from one rank behind the target, from its point of view.
    let back = -by.pawn_dir();
    if has(target.offset(-1, back), PieceKind::Pawn) || has(target.offset(1, back), PieceKind::Pawn)
    {
        return true;
    }

    if KNIGHT_DELTAS
        .iter()
        .any(|&(df, dr)| has(target.offset(df, dr), PieceKind::Knight))
    {
        return true;
    }

    if KING_DELTAS
        .iter()
        .any(|&(df, dr)| has(target.offset(df, dr), PieceKind::King))
    {
        return true;
    }

    slider_attacks(board, by, target, &DIAGONALS, PieceKind::Bishop)
        || slider_attacks(board, by, target, &ORTHOGONALS, PieceKind::Rook)
}

fn slider_attacks(
    board: &Board,
    by: Side,
    target: Square,
    dirs: &[(i8, i8)],
    kind: PieceKind,
) -> bool {
    for &(df, dr) in dirs {
        let mut cur = target.offset(df, dr);
        while let Some(sq) = cur {
            if let Some(pc) = board.piece_at(sq) {
                if pc.owner == by && (pc.kind == kind || pc.kind == PieceKind::Queen) {
                    return true;
                }
                break;
            }
            cur = sq.offset(df, dr);
        }
    }
    false
}

/// True if `side`'s king is attacked.
pub fn in_check(board: &Board, side: Side) -> bool {
    match board.king_square(side) {
        Some(ksq) => is_square_attacked(board, side.other(), ksq),
        None => invariant_violation(format_args!("{side} has no king on the board")),
    }
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;

use crate::attacks::{DIAGONALS, KING_DELTAS, KNIGHT_DELTAS, ORTHOGONALS, in_check};
use crate::castling::can_castle;
use crate::state::GameState;
use crate::types::*;

/// Pseudo-legal moves of `side`: on the board and occupancy-correct, but they
/// may leave `side`'s own king in check.
pub fn pseudo_legal_moves(state: &GameState, side: Side) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    pseudo_legal_moves_into(state, side, &mut out);
    out
}

pub fn pseudo_legal_moves_into(state: &GameState, side: Side, out: &mut Vec<Move>) {
    out.clear();
    for (from, pc) in state.board.pieces() {
        if pc.owner != side {
            continue;
        }
        match pc.kind {
            PieceKind::Pawn => gen_pawn(state, from, side, out),
            PieceKind::Knight => gen_steps(state, from, pc, &KNIGHT_DELTAS, out),
            PieceKind::Bishop => gen_slider(state, from, pc, &DIAGONALS, out),
            PieceKind::Rook => gen_slider(state, from, pc, &ORTHOGONALS, out),
            PieceKind::Queen => {
                gen_slider(state, from, pc, &DIAGONALS, out);
                gen_slider(state, from, pc, &ORTHOGONALS, out);
            }
            PieceKind::King => {
                gen_steps(state, from, pc, &KING_DELTAS, out);
                gen_castle(state, from, side, out);
            }
        }
    }
}

/// Generate all legal moves, returning a freshly allocated vector.
/// Internally delegates to `legal_moves_into`, cloning the state only once.
pub fn legal_moves(state: &GameState, side: Side) -> Vec<Move> {
    let mut tmp = state.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, side, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
/// `state` is mutated while moves are tried and restored before returning.
pub fn legal_moves_into(state: &mut GameState, side: Side, out: &mut Vec<Move>) {
    pseudo_legal_moves_into(state, side, out);
    out.retain(|&mv| keeps_king_safe(state, side, mv));
}

/// Stops at the first legal move instead of collecting them all.
pub fn has_legal_move(state: &mut GameState, side: Side) -> bool {
    pseudo_legal_moves(state, side)
        .into_iter()
        .any(|mv| keeps_king_safe(state, side, mv))
}

/// True if `mv` (pseudo-legal for `side`) does not leave `side`'s king in
/// check. Castling candidates must also pass the castling validator.
pub fn keeps_king_safe(state: &mut GameState, side: Side, mv: Move) -> bool {
    if let Some(wing) = mv.castle_wing()
        && can_castle(state, side, wing).is_err()
    {
        return false;
    }
    let after = state.scoped(mv);
    !in_check(&after.board, side)
}

fn push_promotable(mut mv: Move, side: Side, out: &mut Vec<Move>) {
    if mv.to.rank() == side.promotion_rank() {
        mv.kind = MoveKind::Promotion(PieceKind::Queen);
    }
    out.push(mv);
}

fn gen_pawn(state: &GameState, from: Square, side: Side, out: &mut Vec<Move>) {
    let dir = side.pawn_dir();
    let board = &state.board;

    // forward 1
    if let Some(to) = from.offset(0, dir)
        && board.is_empty(to)
    {
        push_promotable(Move::new(from, to, PieceKind::Pawn), side, out);

        // forward 2 from start
        if from.rank() == side.pawn_start_rank()
            && let Some(to2) = from.offset(0, 2 * dir)
            && board.is_empty(to2)
        {
            let mut mv = Move::new(from, to2, PieceKind::Pawn);
            mv.kind = MoveKind::PawnDoubleAdvance;
            out.push(mv);
        }
    }

    // captures + en passant
    let ep_pawn = state.en_passant.get(side.other());
    for df in [-1, 1] {
        let Some(to) = from.offset(df, dir) else {
            continue;
        };
        match board.piece_at(to) {
            Some(target) if target.owner != side => {
                let mut mv = Move::new(from, to, PieceKind::Pawn);
                mv.capture = Some(target);
                push_promotable(mv, side, out);
            }
            Some(_) => {}
            None => {
                let victim = Piece::new(side.other(), PieceKind::Pawn);
                if let Some(victim_sq) = from.offset(df, 0)
                    && ep_pawn == Some(victim_sq)
                    && board.piece_at(victim_sq) == Some(victim)
                {
                    let mut mv = Move::new(from, to, PieceKind::Pawn);
                    mv.capture = Some(victim);
                    mv.kind = MoveKind::EnPassantCapture;
                    out.push(mv);
                }
            }
        }
    }
}

fn gen_steps(state: &GameState, from: Square, pc: Piece, deltas: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(df, dr) in deltas {
        let Some(to) = from.offset(df, dr) else {
            continue;
        };
        match state.board.piece_at(to) {
            None => out.push(Move::new(from, to, pc.kind)),
            Some(target) if target.owner != pc.owner => {
                let mut mv = Move::new(from, to, pc.kind);
                mv.capture = Some(target);
                out.push(mv);
            }
            _ => {}
        }
    }
}

fn gen_slider(state: &GameState, from: Square, pc: Piece, dirs: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(df, dr) in dirs {
        let mut cur = from.offset(df, dr);
        while let Some(to) = cur {
            match state.board.piece_at(to) {
                None => out.push(Move::new(from, to, pc.kind)),
                Some(target) if target.owner != pc.owner => {
                    let mut mv = Move::new(from, to, pc.kind);
                    mv.capture = Some(target);
                    out.push(mv);
                    break;
                }
                _ => break,
            }
            cur = to.offset(df, dr);
        }
    }
}

/// Castling candidates only; whether they are playable is decided by
/// [`can_castle`].
fn gen_castle(state: &GameState, from: Square, side: Side, out: &mut Vec<Move>) {
    for wing in Wing::BOTH {
        if !state.castling.can(side, wing) {
            continue;
        }
        let mv = castle_move(side, wing);
        if mv.from == from {
            out.push(mv);
        }
    }
}

/// The king move that castles `side` on `wing`.
pub fn castle_move(side: Side, wing: Wing) -> Move {
    let rank = side.back_rank();
    let (Some(from), Some(to)) = (
        Square::new(4, rank),
        Square::new(wing.king_target_file(), rank),
    ) else {
        crate::error::invariant_violation(format_args!("castling squares off board for {side}"));
    };
    let mut mv = Move::new(from, to, PieceKind::King);
    mv.kind = match wing {
        Wing::Kingside => MoveKind::CastleKingside,
        Wing::Queenside => MoveKind::CastleQueenside,
    };
    mv
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;

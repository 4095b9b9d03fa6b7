//! Reversible move application.
//!
//! [`apply`] never checks legality; it trusts that the move came from the
//! generator or the validators. Every square and field it touches is saved in
//! the returned [`UndoRecord`], and [`undo`] writes those values back.

use std::ops::{Deref, DerefMut};

use crate::error::invariant_violation;
use crate::state::{CastlingRights, EnPassantState, GameState};
use crate::types::*;

/// At most four squares change in one move: from, to, and either the
/// en-passant victim or the castling rook's two squares.
const MAX_TOUCHED: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UndoRecord {
    pub mv: Move,
    touched: [Option<(Square, Option<Piece>)>; MAX_TOUCHED],
    castling: CastlingRights,
    en_passant: EnPassantState,
    side_to_move: Side,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl UndoRecord {
    fn save(&mut self, state: &GameState, sq: Square) {
        let slot = self
            .touched
            .iter_mut()
            .find(|slot| slot.is_none())
            .unwrap_or_else(|| invariant_violation("move touched too many squares"));
        *slot = Some((sq, state.board.piece_at(sq)));
    }
}

/// Squares the rook travels between when `side` castles on `wing`.
pub(crate) fn rook_squares(side: Side, wing: Wing) -> (Square, Square) {
    let rank = side.back_rank();
    match (
        Square::new(wing.rook_file(), rank),
        Square::new(wing.transit_file(), rank),
    ) {
        (Some(from), Some(to)) => (from, to),
        _ => invariant_violation(format_args!("castling rook squares off board for {side}")),
    }
}

/// Plays `mv` on `state` and returns what is needed to take it back.
pub fn apply(state: &mut GameState, mv: Move) -> UndoRecord {
    let moved = state
        .board
        .piece_at(mv.from)
        .unwrap_or_else(|| invariant_violation(format_args!("no piece on {} for {mv}", mv.from)));
    let mover = moved.owner;

    let mut record = UndoRecord {
        mv,
        touched: [None; MAX_TOUCHED],
        castling: state.castling,
        en_passant: state.en_passant,
        side_to_move: state.side_to_move,
        halfmove_clock: state.halfmove_clock,
        fullmove_number: state.fullmove_number,
    };
    record.save(state, mv.from);
    record.save(state, mv.to);

    let mut captured = state.board.piece_at(mv.to);

    if mv.kind == MoveKind::EnPassantCapture {
        let victim_sq = Square::new(mv.to.file(), mv.from.rank())
            .unwrap_or_else(|| invariant_violation(format_args!("en passant victim off board for {mv}")));
        match state.board.piece_at(victim_sq) {
            Some(pc) if pc.owner != mover && pc.kind == PieceKind::Pawn => {
                record.save(state, victim_sq);
                state.board.set(victim_sq, None);
                captured = Some(pc);
            }
            other => invariant_violation(format_args!(
                "en passant target {victim_sq} holds {other:?}, not an opposing pawn"
            )),
        }
    }

    let placed = match mv.kind {
        MoveKind::Promotion(kind) => Piece::new(mover, kind),
        _ => moved,
    };
    state.board.set(mv.from, None);
    state.board.set(mv.to, Some(placed));

    if let Some(wing) = mv.castle_wing() {
        let (rook_from, rook_to) = rook_squares(mover, wing);
        record.save(state, rook_from);
        record.save(state, rook_to);
        match state.board.take(rook_from) {
            Some(rook) if rook.owner == mover && rook.kind == PieceKind::Rook => {
                state.board.set(rook_to, Some(rook));
            }
            other => invariant_violation(format_args!(
                "castling {wing:?} for {mover} found {other:?} on {rook_from}"
            )),
        }
        state.castling.mark_castled(mover);
    }

    // Rights go away once the king or a corner rook leaves home, or the rook
    // is captured there.
    if moved.kind == PieceKind::King {
        state.castling.clear_side(mover);
    }
    for wing in Wing::BOTH {
        let (corner, _) = rook_squares(mover, wing);
        if moved.kind == PieceKind::Rook && mv.from == corner {
            state.castling.clear(mover, wing);
        }
        let (their_corner, _) = rook_squares(mover.other(), wing);
        if mv.to == their_corner && captured.is_some_and(|pc| pc.kind == PieceKind::Rook) {
            state.castling.clear(mover.other(), wing);
        }
    }

    state.en_passant.clear();
    if mv.kind == MoveKind::PawnDoubleAdvance {
        state.en_passant.set(mover, mv.to);
    }

    state.halfmove_clock = if moved.kind == PieceKind::Pawn || captured.is_some() {
        0
    } else {
        state.halfmove_clock + 1
    };
    if mover == Side::Computer {
        state.fullmove_number += 1;
    }
    state.side_to_move = mover.other();

    record
}

/// Takes back the move `record` was produced for. Records must be undone in
/// the reverse order they were applied.
pub fn undo(state: &mut GameState, record: UndoRecord) {
    for (sq, prior) in record.touched.iter().rev().flatten() {
        state.board.set(*sq, *prior);
    }
    state.castling = record.castling;
    state.en_passant = record.en_passant;
    state.side_to_move = record.side_to_move;
    state.halfmove_clock = record.halfmove_clock;
    state.fullmove_number = record.fullmove_number;
}

/// A move applied for the lifetime of the guard; dropping it undoes the move.
///
/// The guard derefs to the state, so nested lookahead borrows the guard and
/// the borrow checker enforces last-applied, first-undone.
pub struct Scoped<'a> {
    state: &'a mut GameState,
    record: Option<UndoRecord>,
}

impl GameState {
    pub fn scoped(&mut self, mv: Move) -> Scoped<'_> {
        let record = apply(self, mv);
        Scoped {
            state: self,
            record: Some(record),
        }
    }
}

impl Scoped<'_> {
    pub fn mv(&self) -> Option<Move> {
        self.record.as_ref().map(|r| r.mv)
    }

    /// Keeps the move on the board and hands back its undo record.
    pub fn commit(mut self) -> UndoRecord {
        self.record
            .take()
            .unwrap_or_else(|| invariant_violation("scoped move committed twice"))
    }
}

impl Deref for Scoped<'_> {
    type Target = GameState;

    fn deref(&self) -> &GameState {
        self.state
    }
}

impl DerefMut for Scoped<'_> {
    fn deref_mut(&mut self) -> &mut GameState {
        self.state
    }
}

impl Drop for Scoped<'_> {
    fn drop(&mut self) {
        if let Some(record) = self.record.take() {
            undo(self.state, record);
        }
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod executor_tests;

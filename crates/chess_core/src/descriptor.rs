//! Turning a partially specified move into a concrete, legal [`Move`].
//!
//! A [`MoveDescriptor`] is what a notation front end produces: an optional
//! piece letter, optional source file/rank, the destination and an optional
//! promotion piece. Resolution matches it against the generator's candidates
//! and runs the special-move validators, so a refusal names its reason.

use tracing::{debug, info, warn};

use crate::attacks::in_check;
use crate::castling::can_castle;
use crate::en_passant::{can_en_passant, validate_en_passant};
use crate::error::MoveError;
use crate::executor::apply;
use crate::movegen::{castle_move, keeps_king_safe, pseudo_legal_moves};
use crate::outcome::{Outcome, outcome};
use crate::state::GameState;
use crate::types::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveDescriptor {
    /// `None` matches any piece.
    pub piece: Option<PieceKind>,
    pub from_file: Option<i8>,
    pub from_rank: Option<i8>,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl MoveDescriptor {
    pub fn to(to: Square) -> Self {
        Self {
            piece: None,
            from_file: None,
            from_rank: None,
            to,
            promotion: None,
        }
    }

    pub fn from_to(from: Square, to: Square) -> Self {
        Self {
            from_file: Some(from.file()),
            from_rank: Some(from.rank()),
            ..Self::to(to)
        }
    }

    /// King move that castles `side` on `wing`.
    pub fn castle(side: Side, wing: Wing) -> Self {
        let mv = castle_move(side, wing);
        Self::from_to(mv.from, mv.to).with_piece(PieceKind::King)
    }

    pub fn with_piece(mut self, kind: PieceKind) -> Self {
        self.piece = Some(kind);
        self
    }

    pub fn with_promotion(mut self, kind: PieceKind) -> Self {
        self.promotion = Some(kind);
        self
    }

    fn from_square(&self) -> Option<Square> {
        Square::new(self.from_file?, self.from_rank?)
    }

    fn matches(&self, mv: &Move) -> bool {
        mv.to == self.to
            && self.piece.is_none_or(|k| k == mv.piece)
            && self.from_file.is_none_or(|f| f == mv.from.file())
            && self.from_rank.is_none_or(|r| r == mv.from.rank())
            && (self.promotion.is_none() || mv.promotion().is_some())
    }
}

/// What the caller needs to report a move that was just played.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayedMove {
    pub mv: Move,
    pub gives_check: bool,
    pub outcome: Option<Outcome>,
}

/// Finds the unique legal move of the side to move that `desc` describes.
/// The state is left as it was, whatever the answer.
pub fn resolve(state: &mut GameState, desc: &MoveDescriptor) -> Result<Move, MoveError> {
    if state.result.is_over() {
        return Err(MoveError::GameOver);
    }
    if let Some(kind) = desc.promotion
        && !kind.is_promotion_choice()
    {
        return Err(MoveError::InvalidPromotion(kind));
    }

    let side = state.side_to_move;
    let candidates: Vec<Move> = pseudo_legal_moves(state, side)
        .into_iter()
        .filter(|mv| desc.matches(mv))
        .map(|mut mv| {
            if let (Some(kind), MoveKind::Promotion(_)) = (desc.promotion, mv.kind) {
                mv.kind = MoveKind::Promotion(kind);
            }
            mv
        })
        .collect();

    if candidates.is_empty() {
        return Err(explain_missing(state, side, desc));
    }

    let mut legal = Vec::with_capacity(candidates.len());
    let mut first_err = None;
    for mv in candidates {
        match check_candidate(state, side, mv) {
            Ok(mv) => legal.push(mv),
            Err(e) => {
                first_err.get_or_insert(e);
            }
        }
    }

    match legal.as_slice() {
        [mv] => Ok(*mv),
        [] => Err(first_err.unwrap_or(MoveError::NoSuchMove(desc.to))),
        many => Err(MoveError::Ambiguous {
            to: desc.to,
            count: many.len(),
        }),
    }
}

fn check_candidate(state: &mut GameState, side: Side, mv: Move) -> Result<Move, MoveError> {
    if let Some(wing) = mv.castle_wing() {
        can_castle(state, side, wing)?;
    }
    if mv.kind == MoveKind::EnPassantCapture {
        return Ok(validate_en_passant(state, side, mv.from, mv.to)?);
    }
    if keeps_king_safe(state, side, mv) {
        Ok(mv)
    } else {
        Err(MoveError::LeavesKingInCheck)
    }
}

/// The generator offered nothing. If the request looks like castling or an
/// en-passant capture, let the matching validator say why it was refused.
fn explain_missing(state: &GameState, side: Side, desc: &MoveDescriptor) -> MoveError {
    if let Some(from) = desc.from_square()
        && let Some(pc) = state.board.piece_at(from)
        && pc.owner == side
    {
        if pc.kind == PieceKind::King {
            for wing in Wing::BOTH {
                let castle = castle_move(side, wing);
                if castle.from == from && castle.to == desc.to {
                    let mut probe = state.clone();
                    if let Err(e) = can_castle(&mut probe, side, wing) {
                        return e.into();
                    }
                }
            }
        }
        if pc.kind == PieceKind::Pawn
            && from.file() != desc.to.file()
            && state.board.is_empty(desc.to)
            && let Err(e) = can_en_passant(state, side, from, desc.to)
        {
            return e.into();
        }
    }
    MoveError::NoSuchMove(desc.to)
}

/// Resolves `desc` and plays it for the side to move.
pub fn play(state: &mut GameState, desc: &MoveDescriptor) -> Result<PlayedMove, MoveError> {
    match resolve(state, desc) {
        Ok(mv) => Ok(commit(state, mv)),
        Err(e) => {
            warn!(to = %desc.to, error = %e, "move rejected");
            Err(e)
        }
    }
}

/// Plays a move already known to be legal (from `legal_moves` or the search)
/// and updates the game result.
pub fn commit(state: &mut GameState, mv: Move) -> PlayedMove {
    let mover = state.side_to_move;
    // Played for real: the undo record is not kept.
    drop(apply(state, mv));
    let gives_check = in_check(&state.board, mover.other());
    let outcome = outcome(state);
    debug!(%mover, mv = %mv, gives_check, "move played");
    if let Some(o) = outcome {
        state.result = o.into();
        info!(result = ?state.result, "game over");
    }
    PlayedMove {
        mv,
        gives_check,
        outcome,
    }
}

#[cfg(test)]
#[path = "descriptor_tests.rs"]
mod descriptor_tests;

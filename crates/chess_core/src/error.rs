//! Error kinds reported by the rules engine.
//!
//! Everything here is recoverable: a rejected move leaves the game state
//! exactly as it was. Broken bookkeeping is not an error value; it goes
//! through [`invariant_violation`] and halts.

use std::fmt;

use crate::types::{PieceKind, Square};

/// Why a castling request was refused, in the order the checks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CastlingError {
    #[error("already castled")]
    AlreadyCastled,
    #[error("king or rook has already moved")]
    KingOrRookMoved,
    #[error("king is not on its starting square")]
    MissingKing,
    #[error("rook is not on its starting square")]
    MissingRook,
    #[error("squares between king and rook are occupied")]
    PathBlocked,
    #[error("cannot castle out of check")]
    InCheck,
    #[error("king would pass through an attacked square")]
    ThroughCheck,
    #[error("king would land on an attacked square")]
    IntoCheck,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EnPassantError {
    #[error("destination {0} is occupied")]
    DestinationOccupied(Square),
    #[error("no opposing pawn just advanced two squares next to the destination")]
    NoDoubleAdvance,
    #[error("no own pawn on {0}")]
    NotAttackerPawn(Square),
    #[error("{from} to {to} is not a diagonal pawn step")]
    NotDiagonalStep { from: Square, to: Square },
    #[error("no opposing pawn to capture on {0}")]
    CapturedNotPawn(Square),
    #[error("capture would expose the king to check")]
    DiscoveredCheck,
}

/// An input move that cannot be played.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("no piece can move to {0}")]
    NoSuchMove(Square),
    #[error("move to {to} is ambiguous between {count} pieces")]
    Ambiguous { to: Square, count: usize },
    #[error("{0:?} is not a promotion choice")]
    InvalidPromotion(PieceKind),
    #[error("move would leave the king in check")]
    LeavesKingInCheck,
    #[error("the game is already over")]
    GameOver,
    #[error("illegal castling: {0}")]
    Castling(#[from] CastlingError),
    #[error("illegal en passant: {0}")]
    EnPassant(#[from] EnPassantError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    #[error("expected at least 4 fields, got {0}")]
    MissingFields(usize),
    #[error("expected 8 ranks, got {0}")]
    RankCount(usize),
    #[error("rank {rank} does not describe exactly 8 files")]
    RankWidth { rank: usize },
    #[error("invalid piece character {0:?}")]
    PieceChar(char),
    #[error("invalid side to move {0:?}")]
    SideToMove(String),
    #[error("invalid castling character {0:?}")]
    CastlingChar(char),
    #[error("invalid en passant field {0:?}")]
    EnPassant(String),
    #[error("invalid move counter {0:?}")]
    Counter(String),
    #[error("expected exactly one king per side")]
    KingCount,
    #[error("the side not to move is in check")]
    OpponentInCheck,
}

/// Reports corrupted engine bookkeeping and halts.
///
/// Reached only when a caller hands the executor a move that could never have
/// come out of the generator, or when board state and its records disagree.
#[cold]
#[track_caller]
pub fn invariant_violation(what: impl fmt::Display) -> ! {
    tracing::error!(%what, "internal invariant violated");
    panic!("internal invariant violated: {what}");
}

//! Forsyth-Edwards Notation setup, used by tests and the console's `--fen`.
//!
//! White maps to the Player and Black to the Computer. The FEN en-passant
//! field names the square *behind* the pawn; it is stored as the pawn's own
//! square in [`EnPassantState`].

use crate::attacks::in_check;
use crate::board::Board;
use crate::error::FenError;
use crate::state::{CastlingRights, EnPassantState, GameResult, GameState};
use crate::types::*;

impl GameState {
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::MissingFields(parts.len()));
        }

        let board = parse_board(parts[0])?;

        let side_to_move = match parts[1] {
            "w" => Side::Player,
            "b" => Side::Computer,
            other => return Err(FenError::SideToMove(other.to_string())),
        };
        if in_check(&board, side_to_move.other()) {
            return Err(FenError::OpponentInCheck);
        }

        let mut castling = CastlingRights::none();
        if parts[2] != "-" {
            for c in parts[2].chars() {
                match c {
                    'K' => castling.grant(Side::Player, Wing::Kingside),
                    'Q' => castling.grant(Side::Player, Wing::Queenside),
                    'k' => castling.grant(Side::Computer, Wing::Kingside),
                    'q' => castling.grant(Side::Computer, Wing::Queenside),
                    _ => return Err(FenError::CastlingChar(c)),
                }
            }
        }

        let mut en_passant = EnPassantState::default();
        if parts[3] != "-" {
            let pawn = parse_en_passant(&board, side_to_move, parts[3])?;
            en_passant.set(side_to_move.other(), pawn);
        }

        let halfmove_clock = parse_counter(parts.get(4).copied().unwrap_or("0"))?;
        let fullmove_number = parse_counter(parts.get(5).copied().unwrap_or("1"))?;

        Ok(GameState {
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
            result: GameResult::Ongoing,
        })
    }
}

fn parse_board(field: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::RankCount(ranks.len()));
    }

    let mut board = Board::empty();
    for (rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - rank_idx as i8; // FEN lists rank 8 .. 1
        let mut file: i8 = 0;
        for ch in rank_str.chars() {
            if let Some(d) = ch.to_digit(10) {
                file += d as i8;
            } else {
                let owner = if ch.is_ascii_uppercase() {
                    Side::Player
                } else {
                    Side::Computer
                };
                let kind = PieceKind::from_letter(ch).ok_or(FenError::PieceChar(ch))?;
                let sq = Square::new(file, rank).ok_or(FenError::RankWidth { rank: rank_idx })?;
                board.set(sq, Some(Piece::new(owner, kind)));
                file += 1;
            }
            if file > 8 {
                return Err(FenError::RankWidth { rank: rank_idx });
            }
        }
        if file != 8 {
            return Err(FenError::RankWidth { rank: rank_idx });
        }
    }

    for side in [Side::Player, Side::Computer] {
        let kings = board
            .pieces()
            .filter(|(_, pc)| pc.owner == side && pc.kind == PieceKind::King)
            .count();
        if kings != 1 {
            return Err(FenError::KingCount);
        }
    }
    Ok(board)
}

/// Resolves the FEN target square to the square of the pawn that just
/// double-advanced, rejecting targets no double advance could have left.
fn parse_en_passant(board: &Board, side_to_move: Side, field: &str) -> Result<Square, FenError> {
    let bad = || FenError::EnPassant(field.to_string());
    let target: Square = field.parse().map_err(|_| bad())?;
    // The pawn belongs to whoever just moved.
    let owner = side_to_move.other();
    let target_rank = match side_to_move {
        Side::Player => 5,
        Side::Computer => 2,
    };
    if target.rank() != target_rank || board.piece_at(target).is_some() {
        return Err(bad());
    }
    let pawn = target.offset(0, owner.pawn_dir()).ok_or_else(bad)?;
    if board.piece_at(pawn) != Some(Piece::new(owner, PieceKind::Pawn)) {
        return Err(bad());
    }
    Ok(pawn)
}

fn parse_counter(s: &str) -> Result<u32, FenError> {
    s.parse().map_err(|_| FenError::Counter(s.to_string()))
}

#[cfg(test)]
#[path = "fen_tests.rs"]
mod fen_tests;

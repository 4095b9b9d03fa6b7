use crate::attacks;
use crate::board::Board;
use crate::types::*;

/// Castling eligibility of one side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SideCastling {
    pub kingside: bool,
    pub queenside: bool,
    pub castled: bool,
}

impl SideCastling {
    pub fn wing(&self, wing: Wing) -> bool {
        match wing {
            Wing::Kingside => self.kingside,
            Wing::Queenside => self.queenside,
        }
    }
}

/// Per side, per wing "still eligible" flags. Flags are only ever cleared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastlingRights {
    sides: [SideCastling; 2],
}

impl CastlingRights {
    pub fn all() -> Self {
        let full = SideCastling {
            kingside: true,
            queenside: true,
            castled: false,
        };
        Self { sides: [full; 2] }
    }

    pub fn none() -> Self {
        let empty = SideCastling {
            kingside: false,
            queenside: false,
            castled: false,
        };
        Self { sides: [empty; 2] }
    }

    pub fn get(&self, side: Side) -> SideCastling {
        self.sides[side.idx()]
    }

    pub fn can(&self, side: Side, wing: Wing) -> bool {
        self.sides[side.idx()].wing(wing)
    }

    pub fn grant(&mut self, side: Side, wing: Wing) {
        let s = &mut self.sides[side.idx()];
        match wing {
            Wing::Kingside => s.kingside = true,
            Wing::Queenside => s.queenside = true,
        }
    }

    pub fn clear(&mut self, side: Side, wing: Wing) {
        let s = &mut self.sides[side.idx()];
        match wing {
            Wing::Kingside => s.kingside = false,
            Wing::Queenside => s.queenside = false,
        }
    }

    pub fn clear_side(&mut self, side: Side) {
        self.clear(side, Wing::Kingside);
        self.clear(side, Wing::Queenside);
    }

    pub fn mark_castled(&mut self, side: Side) {
        self.clear_side(side);
        self.sides[side.idx()].castled = true;
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::all()
    }
}

/// Per owner, the square of a pawn that advanced two squares on the previous
/// move. Lives for exactly one opposing move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EnPassantState {
    pawns: [Option<Square>; 2],
}

impl EnPassantState {
    pub fn get(&self, owner: Side) -> Option<Square> {
        self.pawns[owner.idx()]
    }
    pub fn set(&mut self, owner: Side, pawn: Square) {
        self.pawns[owner.idx()] = Some(pawn);
    }
    pub fn clear(&mut self) {
        self.pawns = [None; 2];
    }
    pub fn is_clear(&self) -> bool {
        self.pawns.iter().all(Option::is_none)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    Ongoing,
    Checkmate { winner: Side },
    Stalemate,
    Resigned { loser: Side },
}

impl GameResult {
    pub fn is_over(self) -> bool {
        self != GameResult::Ongoing
    }
}

/// Everything that defines a game in progress. Mutated in place by the move
/// executor, both for moves actually played and during search lookahead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Side,
    pub castling: CastlingRights,
    pub en_passant: EnPassantState,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
    pub result: GameResult,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Standard initial position, Player to move.
    pub fn new() -> Self {
        Self {
            board: Board::standard(),
            side_to_move: Side::Player,
            castling: CastlingRights::all(),
            en_passant: EnPassantState::default(),
            halfmove_clock: 0,
            fullmove_number: 1,
            result: GameResult::Ongoing,
        }
    }

    pub fn in_check(&self, side: Side) -> bool {
        attacks::in_check(&self.board, side)
    }

    pub fn resign(&mut self, loser: Side) {
        tracing::info!(%loser, "resigned");
        self.result = GameResult::Resigned { loser };
    }
}

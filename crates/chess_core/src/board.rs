use std::fmt;

use crate::types::*;

/// Owner and kind per square, indexed `[rank][file]` with rank 0 = rank 1.
pub type BoardSnapshot = [[Option<Piece>; 8]; 8];

/// Square-indexed piece placement. A plain container: nothing here checks
/// whether a placement makes sense.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            squares: [None; 64],
        }
    }

    /// Standard initial position.
    pub fn standard() -> Self {
        let mut b = Board::empty();
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for side in [Side::Player, Side::Computer] {
            let pawn_rank = side.pawn_start_rank();
            let back_rank = side.back_rank();
            for (f, &kind) in back.iter().enumerate() {
                let file = f as i8;
                b.place(file, pawn_rank, Piece::new(side, PieceKind::Pawn));
                b.place(file, back_rank, Piece::new(side, kind));
            }
        }
        b
    }

    fn place(&mut self, file: i8, rank: i8, pc: Piece) {
        if let Some(sq) = Square::new(file, rank) {
            self.set(sq, Some(pc));
        }
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    pub fn set(&mut self, sq: Square, pc: Option<Piece>) {
        self.squares[sq.index()] = pc;
    }

    /// Empties `sq`, returning what stood there.
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].take()
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }

    pub fn king_square(&self, side: Side) -> Option<Square> {
        self.pieces()
            .find(|(_, pc)| pc.owner == side && pc.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Occupied squares in index order (a1, b1, .. h8).
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|pc| (sq, pc)))
    }

    /// Signed sum of every piece's value.
    pub fn material(&self, values: &PieceValues) -> i32 {
        self.pieces().map(|(_, pc)| pc.value(values)).sum()
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut grid = [[None; 8]; 8];
        for (sq, pc) in self.pieces() {
            grid[sq.rank() as usize][sq.file() as usize] = Some(pc);
        }
        grid
    }
}

/// Diagram with rank 8 on top, Player pieces in uppercase and `.` for empty
/// squares.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grid = self.snapshot();
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for (file, cell) in grid[rank].iter().enumerate() {
                let ch = cell.map_or('.', Piece::fen_char);
                if file < 7 {
                    write!(f, "{ch} ")?;
                } else {
                    writeln!(f, "{ch}")?;
                }
            }
        }
        write!(f, "  a b c d e f g h")
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The two owners of pieces. The Player moves up the board (White), the
/// Computer moves down (Black).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Computer => 1,
        }
    }
    /// Sign carried by this side's piece values.
    pub fn sign(self) -> i32 {
        match self {
            Side::Player => 1,
            Side::Computer => -1,
        }
    }
    pub fn pawn_dir(self) -> i8 {
        match self {
            Side::Player => 1,
            Side::Computer => -1,
        }
    }
    pub fn pawn_start_rank(self) -> i8 {
        match self {
            Side::Player => 1,
            Side::Computer => 6,
        }
    }
    pub fn promotion_rank(self) -> i8 {
        match self {
            Side::Player => 7,
            Side::Computer => 0,
        }
    }
    pub fn back_rank(self) -> i8 {
        match self {
            Side::Player => 0,
            Side::Computer => 7,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => f.write_str("player"),
            Side::Computer => f.write_str("computer"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Kinds a pawn may turn into, in preference order.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_letter(c: char) -> Option<PieceKind> {
        match c.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }

    pub fn is_promotion_choice(self) -> bool {
        Self::PROMOTIONS.contains(&self)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub owner: Side,
}

impl Piece {
    pub fn new(owner: Side, kind: PieceKind) -> Self {
        Self { kind, owner }
    }

    /// Signed value of this piece under `values`.
    pub fn value(self, values: &PieceValues) -> i32 {
        values.signed(self)
    }

    /// FEN-style letter: uppercase for the Player, lowercase for the Computer.
    pub fn fen_char(self) -> char {
        match self.owner {
            Side::Player => self.kind.letter(),
            Side::Computer => self.kind.letter().to_ascii_lowercase(),
        }
    }
}

/// Base values per piece kind plus the two king sentinels.
///
/// The king sentinels are deliberately asymmetric: losing the Player's king
/// costs 5000, losing the Computer's costs 7500. They already carry their
/// owner's sign.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieceValues {
    pub pawn: i32,
    pub knight: i32,
    pub bishop: i32,
    pub rook: i32,
    pub queen: i32,
    pub player_king: i32,
    pub computer_king: i32,
}

impl Default for PieceValues {
    fn default() -> Self {
        Self {
            pawn: 100,
            knight: 320,
            bishop: 330,
            rook: 500,
            queen: 900,
            player_king: 5000,
            computer_king: -7500,
        }
    }
}

impl PieceValues {
    /// Signed king sentinel of `side`.
    pub fn king(&self, side: Side) -> i32 {
        match side {
            Side::Player => self.player_king,
            Side::Computer => self.computer_king,
        }
    }

    pub fn signed(&self, piece: Piece) -> i32 {
        let base = match piece.kind {
            PieceKind::Pawn => self.pawn,
            PieceKind::Knight => self.knight,
            PieceKind::Bishop => self.bishop,
            PieceKind::Rook => self.rook,
            PieceKind::Queen => self.queen,
            PieceKind::King => return self.king(piece.owner),
        };
        base * piece.owner.sign()
    }

    /// Material sum of a board holding nothing but the two kings.
    pub fn baseline(&self) -> i32 {
        self.player_king + self.computer_king
    }
}

/// One of the 64 board squares, indexed a1 = 0 .. h8 = 63.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Square at `file` (0 = a) and `rank` (0 = rank 1), if on the board.
    pub fn new(file: i8, rank: i8) -> Option<Square> {
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square((rank as u8) * 8 + (file as u8)))
        } else {
            None
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
    pub fn file(self) -> i8 {
        (self.0 % 8) as i8
    }
    pub fn rank(self) -> i8 {
        (self.0 / 8) as i8
    }

    pub fn offset(self, df: i8, dr: i8) -> Option<Square> {
        Square::new(self.file() + df, self.rank() + dr)
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.file() as u8) as char;
        let rank = (b'1' + self.rank() as u8) as char;
        write!(f, "{file}{rank}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid square: {0:?}")]
pub struct ParseSquareError(pub String);

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let b = s.as_bytes();
        if b.len() != 2 || !(b'a'..=b'h').contains(&b[0]) || !(b'1'..=b'8').contains(&b[1]) {
            return Err(ParseSquareError(s.to_string()));
        }
        Ok(Square((b[1] - b'1') * 8 + (b[0] - b'a')))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Wing {
    Kingside,
    Queenside,
}

impl Wing {
    pub const BOTH: [Wing; 2] = [Wing::Kingside, Wing::Queenside];

    pub fn rook_file(self) -> i8 {
        match self {
            Wing::Kingside => 7,
            Wing::Queenside => 0,
        }
    }
    pub fn king_target_file(self) -> i8 {
        match self {
            Wing::Kingside => 6,
            Wing::Queenside => 2,
        }
    }
    /// File the king crosses on its way, which is also where the rook lands.
    pub fn transit_file(self) -> i8 {
        match self {
            Wing::Kingside => 5,
            Wing::Queenside => 3,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Normal,
    PawnDoubleAdvance,
    EnPassantCapture,
    CastleKingside,
    CastleQueenside,
    Promotion(PieceKind),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: PieceKind,
    pub capture: Option<Piece>,
    pub kind: MoveKind,
}

impl Move {
    pub fn new(from: Square, to: Square, piece: PieceKind) -> Self {
        Self {
            from,
            to,
            piece,
            capture: None,
            kind: MoveKind::Normal,
        }
    }

    pub fn is_capture(&self) -> bool {
        self.capture.is_some()
    }

    pub fn promotion(&self) -> Option<PieceKind> {
        match self.kind {
            MoveKind::Promotion(kind) => Some(kind),
            _ => None,
        }
    }

    pub fn castle_wing(&self) -> Option<Wing> {
        match self.kind {
            MoveKind::CastleKingside => Some(Wing::Kingside),
            MoveKind::CastleQueenside => Some(Wing::Queenside),
            _ => None,
        }
    }
}

/// Long algebraic form: `e2e4`, `e7e8q`, with `O-O` / `O-O-O` for castling.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MoveKind::CastleKingside => f.write_str("O-O"),
            MoveKind::CastleQueenside => f.write_str("O-O-O"),
            MoveKind::Promotion(kind) => {
                write!(f, "{}{}{}", self.from, self.to, kind.letter().to_ascii_lowercase())
            }
            _ => write!(f, "{}{}", self.from, self.to),
        }
    }
}

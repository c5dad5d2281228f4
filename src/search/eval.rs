//! Static evaluation: material plus piece-square bonus, from White's perspective.

use cozy_chess::{Color, File, Rank, Square};

use crate::board::Position;
use crate::error::SearchError;

const PAWN: i32 = 10;
const KNIGHT: i32 = 30;
const BISHOP: i32 = 30;
const ROOK: i32 = 50;
const QUEEN: i32 = 100;
const KING: i32 = 1000;

type Table = [[i32; 8]; 8];

// Tables read like a diagram from White's side: row 0 is rank 8, column 0 is the a-file.

const PAWN_WHITE: Table = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [5, 5, 5, 5, 5, 5, 5, 5],
    [1, 1, 2, 3, 3, 2, 1, 1],
    [1, 1, 1, 3, 3, 1, 1, 1],
    [0, 0, 0, 2, 2, 0, 0, 0],
    [1, -1, -1, 0, 0, -1, -1, 1],
    [1, 1, 1, -2, -2, 1, 1, 1],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

const KNIGHT_TABLE: Table = [
    [-5, -4, -3, -3, -3, -3, -4, -5],
    [-4, -2, 0, 0, 0, 0, -2, -4],
    [-3, 0, 1, 2, 2, 1, 0, -3],
    [-3, 1, 2, 2, 2, 2, 1, -3],
    [-3, 1, 2, 2, 2, 2, 1, -3],
    [-3, 0, 1, 2, 2, 1, 0, -3],
    [-4, -2, 0, 0, 0, 0, -2, -4],
    [-5, -4, -3, -3, -3, -3, -4, -5],
];

const BISHOP_WHITE: Table = [
    [-2, -1, -1, -1, -1, -1, -1, -2],
    [-1, 0, 0, 0, 0, 0, 0, -1],
    [-1, 0, 1, 1, 1, 1, 0, -1],
    [-1, 1, 1, 1, 1, 1, 1, -1],
    [-1, 0, 1, 1, 1, 1, 0, -1],
    [-1, 1, 1, 1, 1, 1, 1, -1],
    [-1, 1, 0, 0, 0, 0, 1, -1],
    [-2, -1, -1, -1, -1, -1, -1, -2],
];

const ROOK_WHITE: Table = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [1, 1, 1, 1, 1, 1, 1, 1],
    [-1, 0, 0, 0, 0, 0, 0, -1],
    [-1, 0, 0, 0, 0, 0, 0, -1],
    [-1, 0, 0, 0, 0, 0, 0, -1],
    [-1, 0, 0, 0, 0, 0, 0, -1],
    [-1, 0, 0, 0, 0, 0, 0, -1],
    [0, 0, 0, 1, 1, 0, 0, 0],
];

const QUEEN_TABLE: Table = [
    [-2, -1, -1, -1, -1, -1, -1, -2],
    [-1, 0, 0, 0, 0, 0, 0, -1],
    [-1, 0, 1, 1, 1, 1, 0, -1],
    [-1, 0, 1, 1, 1, 1, 0, -1],
    [-1, 0, 1, 1, 1, 1, 0, -1],
    [-1, 0, 1, 1, 1, 1, 0, -1],
    [-1, 0, 0, 0, 0, 0, 0, -1],
    [-2, -1, -1, -1, -1, -1, -1, -2],
];

const KING_WHITE: Table = [
    [-3, -4, -4, -5, -5, -4, -4, -3],
    [-3, -4, -4, -5, -5, -4, -4, -3],
    [-3, -4, -4, -5, -5, -4, -4, -3],
    [-3, -4, -4, -5, -5, -4, -4, -3],
    [-2, -3, -3, -4, -4, -3, -3, -2],
    [-1, -2, -2, -2, -2, -2, -2, -1],
    [2, 2, 0, 0, 0, 0, 2, 2],
    [2, 3, 1, 0, 0, 1, 3, 2],
];

const fn flip_ranks(t: Table) -> Table {
    let mut out = [[0; 8]; 8];
    let mut i = 0;
    while i < 8 {
        out[i] = t[7 - i];
        i += 1;
    }
    out
}

const PAWN_BLACK: Table = flip_ranks(PAWN_WHITE);
const BISHOP_BLACK: Table = flip_ranks(BISHOP_WHITE);
const ROOK_BLACK: Table = flip_ranks(ROOK_WHITE);
const KING_BLACK: Table = flip_ranks(KING_WHITE);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'p' => Some(Self::Pawn),
            'n' => Some(Self::Knight),
            'b' => Some(Self::Bishop),
            'r' => Some(Self::Rook),
            'q' => Some(Self::Queen),
            'k' => Some(Self::King),
            _ => None,
        }
    }

    pub fn base_value(self) -> i32 {
        match self {
            Self::Pawn => PAWN,
            Self::Knight => KNIGHT,
            Self::Bishop => BISHOP,
            Self::Rook => ROOK,
            Self::Queen => QUEEN,
            Self::King => KING,
        }
    }

    fn table(self, color: Color) -> &'static Table {
        let white = color == Color::White;
        match self {
            Self::Pawn => if white { &PAWN_WHITE } else { &PAWN_BLACK },
            Self::Knight => &KNIGHT_TABLE,
            Self::Bishop => if white { &BISHOP_WHITE } else { &BISHOP_BLACK },
            Self::Rook => if white { &ROOK_WHITE } else { &ROOK_BLACK },
            Self::Queen => &QUEEN_TABLE,
            Self::King => if white { &KING_WHITE } else { &KING_BLACK },
        }
    }
}

/// Positional bonus for a piece of `kind` and `color` standing on `square`.
pub fn square_bonus(kind: PieceKind, color: Color, square: Square) -> i32 {
    let row = 7 - square.rank() as usize;
    kind.table(color)[row][square.file() as usize]
}

/// Unsigned worth of a piece on a square: base value plus table bonus.
pub fn piece_value(kind: PieceKind, color: Color, square: Square) -> i32 {
    kind.base_value() + square_bonus(kind, color, square)
}

/// Scores every square of the board; positive favours White.
pub fn evaluate<P: Position>(pos: &P) -> Result<i32, SearchError> {
    let mut total = 0;
    for file in File::ALL {
        for rank in Rank::ALL {
            let square = Square::new(file, rank);
            let Some(occ) = pos.occupant(square) else { continue };
            let kind = PieceKind::from_symbol(occ.symbol)
                .ok_or(SearchError::UnknownPiece { symbol: occ.symbol, square })?;
            let v = piece_value(kind, occ.color, square);
            total += if occ.color == Color::White { v } else { -v };
        }
    }
    Ok(total)
}

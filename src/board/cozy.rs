use cozy_chess::{Board as CozyBoard, Color, File, Move, Piece, Rank, Square};
use std::fmt;

use crate::board::{Occupant, Position};
use crate::error::BoardError;

/// `cozy_chess::Board` plus a stack of previous boards so moves can be undone in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameBoard {
    board: CozyBoard,
    history: Vec<CozyBoard>,
}

impl Default for GameBoard {
    fn default() -> Self { Self::startpos() }
}

impl GameBoard {
    pub fn startpos() -> Self {
        Self { board: CozyBoard::default(), history: Vec::with_capacity(64) }
    }

    pub fn from_fen(fen: &str) -> Result<Self, BoardError> {
        CozyBoard::from_fen(fen, false)
            .map(Self::from_board)
            .map_err(|e| BoardError::InvalidFen(format!("{e:?}")))
    }

    pub fn from_board(board: CozyBoard) -> Self {
        Self { board, history: Vec::with_capacity(64) }
    }

    /// Number of moves that can currently be undone.
    pub fn ply_count(&self) -> usize { self.history.len() }

    /// Standard UCI text for `mv`. cozy-chess encodes castling as king-takes-rook
    /// (`e1h1`); this renders it as the king's destination (`e1g1`).
    pub fn uci(&self, mv: Move) -> String {
        let stm = self.board.side_to_move();
        if self.board.piece_on(mv.from) == Some(Piece::King) && self.board.color_on(mv.to) == Some(stm) {
            let file = if (mv.to.file() as u8) > (mv.from.file() as u8) { File::G } else { File::C };
            return format!("{}{}", mv.from, Square::new(file, mv.from.rank()));
        }
        format!("{}", mv)
    }

    /// Locate a legal move from UCI text, accepting both castling notations.
    pub fn find_move(&self, mv_uci: &str) -> Result<Move, BoardError> {
        let mut found = None;
        self.board.generate_moves(|moves| {
            for m in moves {
                if format!("{}", m) == mv_uci || self.uci(m) == mv_uci { found = Some(m); break; }
            }
            found.is_some()
        });
        found.ok_or_else(|| BoardError::IllegalMove(mv_uci.to_string()))
    }

    pub fn make_move_uci(&mut self, mv_uci: &str) -> Result<(), BoardError> {
        let mv = self.find_move(mv_uci)?;
        self.make_move(mv);
        Ok(())
    }

    pub fn set_from_start_and_moves(moves: &[String]) -> Result<Self, BoardError> {
        let mut pos = Self::startpos();
        for m in moves { pos.make_move_uci(m)?; }
        Ok(pos)
    }

    fn has_legal_move(&self) -> bool {
        let mut any = false;
        self.board.generate_moves(|moves| { if moves.len() > 0 { any = true; } any });
        any
    }

    fn in_check(&self) -> bool { !self.board.checkers().is_empty() }
}

fn piece_symbol(piece: Piece) -> char {
    match piece {
        Piece::Pawn => 'p',
        Piece::Knight => 'n',
        Piece::Bishop => 'b',
        Piece::Rook => 'r',
        Piece::Queen => 'q',
        Piece::King => 'k',
    }
}

impl Position for GameBoard {
    type Move = Move;

    fn legal_moves(&self) -> Vec<Move> {
        let mut moves: Vec<Move> = Vec::with_capacity(64);
        self.board.generate_moves(|ml| { for m in ml { moves.push(m); } false });
        moves
    }

    fn side_to_move(&self) -> Color { self.board.side_to_move() }

    fn occupant(&self, square: Square) -> Option<Occupant> {
        let piece = self.board.piece_on(square)?;
        let color = self.board.color_on(square)?;
        Some(Occupant { symbol: piece_symbol(piece), color })
    }

    fn make_move(&mut self, mv: Move) {
        self.history.push(self.board.clone());
        self.board.play(mv);
    }

    fn undo_move(&mut self) {
        debug_assert!(!self.history.is_empty(), "undo_move without a matching make_move");
        if let Some(prev) = self.history.pop() { self.board = prev; }
    }

    /// Child position without the parent's undo stack.
    fn play(&self, mv: Move) -> Self {
        let mut board = self.board.clone();
        board.play(mv);
        Self { board, history: Vec::new() }
    }

    fn is_checkmate(&self) -> bool { !self.has_legal_move() && self.in_check() }

    fn is_stalemate(&self) -> bool { !self.has_legal_move() && !self.in_check() }

    fn is_insufficient_material(&self) -> bool {
        let b = &self.board;
        let heavy = b.pieces(Piece::Pawn) | b.pieces(Piece::Rook) | b.pieces(Piece::Queen);
        if !heavy.is_empty() { return false; }
        let knights = b.pieces(Piece::Knight);
        let bishops = b.pieces(Piece::Bishop);
        if knights.len() + bishops.len() <= 1 { return true; }
        if !knights.is_empty() { return false; }
        // Bishops only: no mate possible when they all share a square colour.
        let (mut light, mut dark) = (0u32, 0u32);
        for sq in bishops {
            if (sq.file() as usize + sq.rank() as usize) % 2 == 0 { dark += 1; } else { light += 1; }
        }
        light == 0 || dark == 0
    }

    fn is_fifty_move_draw(&self) -> bool { self.board.halfmove_clock() >= 100 }
}

impl fmt::Display for GameBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::ALL.iter().rev() {
            write!(f, "{} ", *rank as usize + 1)?;
            for file in File::ALL {
                let sq = Square::new(file, *rank);
                let c = match self.occupant(sq) {
                    Some(o) if o.color == Color::White => o.symbol.to_ascii_uppercase(),
                    Some(o) => o.symbol,
                    None => '.',
                };
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

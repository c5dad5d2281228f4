//! Board collaborator contract.
//!
//! The search never builds or validates positions itself. Everything it needs
//! from the rules side (legal moves, make/undo, square occupancy and the
//! terminal predicates) goes through [`Position`].

use cozy_chess::{Color, Square};
use std::fmt;
use std::ops::{Deref, DerefMut};

pub mod cozy;

pub use cozy::GameBoard;

/// A piece as reported by the collaborator: its lowercase FEN letter and colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Occupant {
    pub symbol: char,
    pub color: Color,
}

pub trait Position: Clone {
    type Move: Copy + Eq + fmt::Debug + fmt::Display;

    /// Legal moves for the side to move, in the collaborator's enumeration order.
    fn legal_moves(&self) -> Vec<Self::Move>;
    fn side_to_move(&self) -> Color;
    fn occupant(&self, square: Square) -> Option<Occupant>;

    /// Apply `mv` in place. Must be paired with exactly one [`Position::undo_move`].
    fn make_move(&mut self, mv: Self::Move);
    /// Revert the most recent [`Position::make_move`].
    fn undo_move(&mut self);

    fn is_checkmate(&self) -> bool;
    fn is_stalemate(&self) -> bool;
    fn is_insufficient_material(&self) -> bool;
    fn is_fifty_move_draw(&self) -> bool;

    /// Clone-and-apply: the child position, leaving `self` untouched.
    fn play(&self, mv: Self::Move) -> Self {
        let mut child = self.clone();
        child.make_move(mv);
        child
    }

    fn is_game_over(&self) -> bool {
        self.is_checkmate() || self.is_stalemate() || self.is_insufficient_material() || self.is_fifty_move_draw()
    }
}

/// Scoped make/undo: the move is applied on construction and undone on drop,
/// including when the holder bails out early with `?` or `break`.
pub struct MoveGuard<'a, P: Position> {
    pos: &'a mut P,
}

impl<'a, P: Position> MoveGuard<'a, P> {
    pub fn new(pos: &'a mut P, mv: P::Move) -> Self {
        pos.make_move(mv);
        Self { pos }
    }
}

impl<P: Position> Deref for MoveGuard<'_, P> {
    type Target = P;
    fn deref(&self) -> &P { self.pos }
}

impl<P: Position> DerefMut for MoveGuard<'_, P> {
    fn deref_mut(&mut self) -> &mut P { self.pos }
}

impl<P: Position> Drop for MoveGuard<'_, P> {
    fn drop(&mut self) { self.pos.undo_move(); }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_undoes_on_drop() {
        let mut pos = GameBoard::startpos();
        let before = pos.clone();
        let mv = pos.legal_moves()[0];
        {
            let guard = MoveGuard::new(&mut pos, mv);
            assert_eq!(guard.side_to_move(), Color::Black);
        }
        assert_eq!(pos, before);
    }

    #[test]
    fn guard_undoes_on_early_return() {
        fn bail(pos: &mut GameBoard) -> Result<(), ()> {
            let mv = pos.legal_moves()[0];
            let _guard = MoveGuard::new(pos, mv);
            Err(())
        }
        let mut pos = GameBoard::startpos();
        let before = pos.clone();
        assert!(bail(&mut pos).is_err());
        assert_eq!(pos, before);
    }

    #[test]
    fn play_leaves_parent_untouched() {
        let pos = GameBoard::startpos();
        let mv = pos.legal_moves()[0];
        let child = pos.play(mv);
        assert_eq!(pos.side_to_move(), Color::White);
        assert_eq!(child.side_to_move(), Color::Black);
    }
}

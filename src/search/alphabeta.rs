use cozy_chess::Color;
use log::{debug, trace};

use crate::board::{MoveGuard, Position};
use crate::error::SearchError;
use crate::search::eval::evaluate;
use crate::search::{SearchResult, Searcher, SCORE_INFINITY};

impl Searcher {
    /// Minimax with alpha-beta pruning. Moves are made and undone on `pos` itself;
    /// it is back in its original state when this returns, error or not.
    pub fn alpha_beta<P: Position>(
        &mut self,
        pos: &mut P,
        depth: u32,
        alpha: i32,
        beta: i32,
        side: Color,
    ) -> Result<SearchResult<P::Move>, SearchError> {
        self.nodes = 0;
        self.alpha_beta_node(pos, depth, alpha, beta, side, 0)
    }

    fn alpha_beta_node<P: Position>(
        &mut self,
        pos: &mut P,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        side: Color,
        ply: u32,
    ) -> Result<SearchResult<P::Move>, SearchError> {
        self.nodes += 1;
        if depth == 0 { return Ok(SearchResult::leaf(evaluate(pos)?)); }

        let moves = pos.legal_moves();
        if moves.is_empty() { return Ok(SearchResult::leaf(evaluate(pos)?)); }

        let maximizing = side == Color::White;
        let mut best = SearchResult { value: if maximizing { -SCORE_INFINITY } else { SCORE_INFINITY }, mv: None };
        let total = moves.len();
        for (i, mv) in moves.into_iter().enumerate() {
            let r = {
                let mut child = MoveGuard::new(pos, mv);
                self.alpha_beta_node(&mut *child, depth - 1, alpha, beta, !side, ply + 1)?
            };
            let improves = if maximizing { r.value > best.value } else { r.value < best.value };
            if improves {
                if ply == 0 { debug!("new best root move {} value {} (was {})", mv, r.value, best.value); }
                best = SearchResult { value: r.value, mv: Some(mv) };
            }
            if maximizing { alpha = alpha.max(best.value); } else { beta = beta.min(best.value); }
            if alpha > beta {
                if ply == 0 { debug!("cutoff at root after {} of {} moves", i + 1, total); }
                break;
            }
            if ply == 0 { trace!("search progress: {}%", (i + 1) * 100 / total); }
        }
        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::GameBoard;

    #[test]
    fn restores_position_after_search() {
        let mut pos = GameBoard::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1").unwrap();
        let before = pos.clone();
        let mut s = Searcher::new();
        s.alpha_beta(&mut pos, 2, -SCORE_INFINITY, SCORE_INFINITY, Color::White).unwrap();
        assert_eq!(pos, before);
    }

    #[test]
    fn no_legal_moves_returns_static_score() {
        let mut pos = GameBoard::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        let mut s = Searcher::new();
        let r = s.alpha_beta(&mut pos, 3, -SCORE_INFINITY, SCORE_INFINITY, Color::Black).unwrap();
        assert_eq!(r.mv, None);
        assert_eq!(r.value, evaluate(&pos).unwrap());
    }
}

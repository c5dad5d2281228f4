use cozy_chess::Color;
use log::{debug, trace};

use crate::board::Position;
use crate::error::SearchError;
use crate::search::eval::evaluate;
use crate::search::{SearchResult, Searcher, SCORE_INFINITY};

impl Searcher {
    /// Plain minimax to a fixed depth. Every branch works on its own clone of the
    /// position, so `pos` is only ever read.
    pub fn minimax<P: Position>(&mut self, pos: &P, depth: u32, side: Color) -> Result<SearchResult<P::Move>, SearchError> {
        self.nodes = 0;
        self.minimax_node(pos, depth, side, 0)
    }

    fn minimax_node<P: Position>(&mut self, pos: &P, depth: u32, side: Color, ply: u32) -> Result<SearchResult<P::Move>, SearchError> {
        self.nodes += 1;
        if depth == 0 { return Ok(SearchResult::leaf(evaluate(pos)?)); }

        let moves = pos.legal_moves();
        // Checkmate and stalemate score like any other position.
        if moves.is_empty() { return Ok(SearchResult::leaf(evaluate(pos)?)); }

        let maximizing = side == Color::White;
        let mut best = SearchResult { value: if maximizing { -SCORE_INFINITY } else { SCORE_INFINITY }, mv: None };
        let total = moves.len();
        for (i, mv) in moves.into_iter().enumerate() {
            let child = pos.play(mv);
            let r = self.minimax_node(&child, depth - 1, !side, ply + 1)?;
            let improves = if maximizing { r.value > best.value } else { r.value < best.value };
            if improves {
                if ply == 0 { debug!("new best root move {} value {} (was {})", mv, r.value, best.value); }
                best = SearchResult { value: r.value, mv: Some(mv) };
            }
            if ply == 0 { trace!("search progress: {}%", (i + 1) * 100 / total); }
        }
        Ok(best)
    }
}

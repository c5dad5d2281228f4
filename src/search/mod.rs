pub mod alphabeta;
pub mod eval;
pub mod minimax;
pub mod selector;

use cozy_chess::Color;
use log::info;
use std::time::Instant;

use crate::board::Position;
use crate::error::SearchError;

/// Window bound standing in for infinity; no reachable evaluation gets near it.
pub const SCORE_INFINITY: i32 = i32::MAX;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult<M> {
    pub value: i32,
    pub mv: Option<M>,
}

impl<M> SearchResult<M> {
    pub(crate) fn leaf(value: i32) -> Self { Self { value, mv: None } }
}

/// Parameters of one search call. `side` is the colour to move at the root;
/// White maximizes, Black minimizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u32,
    pub side: Color,
    pub pruning: bool,
}

#[derive(Default, Debug)]
pub struct Searcher {
    pub(crate) nodes: u64,
}

impl Searcher {
    pub fn new() -> Self { Self::default() }

    /// Nodes visited by the last top-level search.
    pub fn nodes(&self) -> u64 { self.nodes }

    /// Run one full-window search as configured. The position is handed back unchanged.
    pub fn search<P: Position>(&mut self, pos: &mut P, config: &SearchConfig) -> Result<SearchResult<P::Move>, SearchError> {
        let t0 = Instant::now();
        let res = if config.pruning {
            self.alpha_beta(pos, config.depth, -SCORE_INFINITY, SCORE_INFINITY, config.side)?
        } else {
            self.minimax(pos, config.depth, config.side)?
        };
        match res.mv {
            Some(mv) => info!(
                "search done: move={} value={} depth={} nodes={} elapsed={:.3}s",
                mv, res.value, config.depth, self.nodes, t0.elapsed().as_secs_f64()
            ),
            None => info!("search done: no move, value={} nodes={}", res.value, self.nodes),
        }
        Ok(res)
    }
}

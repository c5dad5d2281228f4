//! Per-turn move selection: choose a strategy and a depth, run one search.

use cozy_chess::Color;
use log::info;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::board::Position;
use crate::config::EngineConfig;
use crate::error::SearchError;
use crate::search::{SearchConfig, Searcher};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Uniformly random legal move.
    Random,
    /// Minimax without pruning.
    Minimax,
    /// Minimax with alpha-beta pruning.
    #[default]
    AlphaBeta,
}

/// Maps the number of legal moves at the root to a search depth.
pub trait DepthPolicy {
    fn depth_for(&self, root_moves: usize) -> u32;
}

impl<F: Fn(usize) -> u32> DepthPolicy for F {
    fn depth_for(&self, root_moves: usize) -> u32 { self(root_moves) }
}

/// Search deeper as the tree narrows: `base_depth` by default, `narrow_depth`
/// below `narrow_below` root moves, `forced_depth` below `forced_below`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BranchingDepth {
    pub base_depth: u32,
    pub narrow_below: usize,
    pub narrow_depth: u32,
    pub forced_below: usize,
    pub forced_depth: u32,
}

impl Default for BranchingDepth {
    fn default() -> Self {
        Self { base_depth: 2, narrow_below: 30, narrow_depth: 3, forced_below: 3, forced_depth: 4 }
    }
}

impl DepthPolicy for BranchingDepth {
    fn depth_for(&self, root_moves: usize) -> u32 {
        let mut depth = self.base_depth;
        if root_moves < self.narrow_below { depth = self.narrow_depth; }
        if root_moves < self.forced_below { depth = self.forced_depth; }
        depth.max(1)
    }
}

pub struct MoveSelector<D: DepthPolicy = BranchingDepth> {
    strategy: Strategy,
    policy: D,
    searcher: Searcher,
    rng: SmallRng,
    last_value: Option<i32>,
}

impl MoveSelector<BranchingDepth> {
    pub fn from_config(cfg: &EngineConfig) -> Self {
        Self::new(cfg.strategy, cfg.depth, cfg.seed)
    }
}

impl Default for MoveSelector<BranchingDepth> {
    fn default() -> Self { Self::from_config(&EngineConfig::default()) }
}

impl<D: DepthPolicy> MoveSelector<D> {
    pub fn new(strategy: Strategy, policy: D, seed: u64) -> Self {
        Self { strategy, policy, searcher: Searcher::new(), rng: SmallRng::seed_from_u64(seed), last_value: None }
    }

    pub fn strategy(&self) -> Strategy { self.strategy }

    /// The search this selector would run for `side` at `pos`.
    pub fn configure<P: Position>(&self, pos: &P, side: Color) -> SearchConfig {
        self.config_for(pos.legal_moves().len(), side)
    }

    fn config_for(&self, root_moves: usize, side: Color) -> SearchConfig {
        SearchConfig { depth: self.policy.depth_for(root_moves), side, pruning: self.strategy != Strategy::Minimax }
    }

    /// Pick a move for `side`. `None` means the root has no legal move; deciding
    /// what that means for the game is up to the caller.
    pub fn select_move<P: Position>(&mut self, pos: &mut P, side: Color) -> Result<Option<P::Move>, SearchError> {
        if self.strategy == Strategy::Random {
            let moves = pos.legal_moves();
            if moves.is_empty() { return Ok(None); }
            let idx = self.rng.gen_range(0..moves.len());
            self.last_value = None;
            return Ok(Some(moves[idx]));
        }
        let root_moves = pos.legal_moves().len();
        let config = self.config_for(root_moves, side);
        info!("{} possible initial moves; starting {:?} search for {:?} at depth {}", root_moves, self.strategy, side, config.depth);
        let res = self.searcher.search(pos, &config)?;
        self.last_value = Some(res.value);
        Ok(res.mv)
    }

    /// Backed-up value of the last search, if the last selection searched.
    pub fn last_value(&self) -> Option<i32> { self.last_value }

    /// Nodes visited by the last search.
    pub fn nodes(&self) -> u64 { self.searcher.nodes() }
}

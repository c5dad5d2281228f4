//! PruneBot: a chess bot that picks moves by minimax / alpha-beta search over a
//! material plus piece-square evaluation.
pub mod board;
pub mod config;
pub mod error;
pub mod perft;
pub mod search;
pub mod selfplay;

pub use board::{GameBoard, MoveGuard, Occupant, Position};
pub use config::EngineConfig;
pub use error::{BoardError, ConfigError, SearchError};
pub use search::selector::{BranchingDepth, DepthPolicy, MoveSelector, Strategy};
pub use search::{SearchConfig, SearchResult, Searcher, SCORE_INFINITY};

use cozy_chess::Square;
use std::path::PathBuf;

/// Failures that abort a search. The board collaborator handed the evaluator
/// something it cannot score, so no value is returned at all.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("piece type '{symbol}' on {square} not recognized")]
    UnknownPiece { symbol: char, square: Square },
}

#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("FEN error: {0}")]
    InvalidFen(String),
    #[error("Illegal move: {0}")]
    IllegalMove(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io { path: PathBuf, source: std::io::Error },
    #[error("failed to parse config {}: {source}", path.display())]
    Parse { path: PathBuf, source: serde_json::Error },
}

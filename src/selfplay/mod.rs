//! Bot-vs-bot games and game-end classification.

use cozy_chess::Color;
use log::info;
use std::fmt;

use crate::board::{GameBoard, Position};
use crate::config::EngineConfig;
use crate::error::SearchError;
use crate::search::selector::MoveSelector;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Checkmate { winner: Color },
    Stalemate,
    FiftyMoveRule,
    InsufficientMaterial,
}

impl GameOutcome {
    /// Classify a finished game; `None` while the game is still running.
    pub fn of<P: Position>(pos: &P) -> Option<Self> {
        if pos.is_checkmate() { return Some(Self::Checkmate { winner: !pos.side_to_move() }); }
        if pos.is_stalemate() { return Some(Self::Stalemate); }
        if pos.is_fifty_move_draw() { return Some(Self::FiftyMoveRule); }
        if pos.is_insufficient_material() { return Some(Self::InsufficientMaterial); }
        None
    }

    /// 1 white win, 0 draw, -1 black win.
    pub fn result(self) -> i8 {
        match self {
            Self::Checkmate { winner: Color::White } => 1,
            Self::Checkmate { winner: Color::Black } => -1,
            _ => 0,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Checkmate { winner } => write!(f, "Checkmate! {:?} wins!", winner),
            Self::Stalemate => write!(f, "Stalemate! It's a draw!"),
            Self::FiftyMoveRule => write!(f, "Draw by the fifty-move rule."),
            Self::InsufficientMaterial => write!(f, "Draw: not enough pieces left to mate."),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SelfPlayParams {
    pub games: usize,
    pub max_plies: usize,
    pub white: EngineConfig,
    pub black: EngineConfig,
    /// Starting FEN; the standard start position when `None`.
    pub fen: Option<String>,
}

impl Default for SelfPlayParams {
    fn default() -> Self {
        Self { games: 1, max_plies: 200, white: EngineConfig::default(), black: EngineConfig::default(), fen: None }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameRecord {
    pub moves: Vec<String>,
    /// `None` when the ply limit ran out first.
    pub outcome: Option<GameOutcome>,
}

/// Alternate `white` and `black` on `board` until the game ends or `max_plies`
/// moves have been played. Each chosen move is applied to `board`.
pub fn play_game(
    board: &mut GameBoard,
    white: &mut MoveSelector,
    black: &mut MoveSelector,
    max_plies: usize,
) -> Result<GameRecord, SearchError> {
    let mut record = GameRecord { moves: Vec::new(), outcome: None };
    while record.moves.len() < max_plies {
        if let Some(outcome) = GameOutcome::of(&*board) {
            record.outcome = Some(outcome);
            break;
        }
        let side = board.side_to_move();
        let selector = if side == Color::White { &mut *white } else { &mut *black };
        let Some(mv) = selector.select_move(board, side)? else { break };
        record.moves.push(board.uci(mv));
        board.make_move(mv);
    }
    if record.outcome.is_none() { record.outcome = GameOutcome::of(&*board); }
    match record.outcome {
        Some(o) => info!("game over after {} plies: {}", record.moves.len(), o),
        None => info!("ply limit reached after {} plies", record.moves.len()),
    }
    Ok(record)
}

pub fn generate_games(params: &SelfPlayParams) -> anyhow::Result<Vec<GameRecord>> {
    let mut games = Vec::with_capacity(params.games);
    for gi in 0..params.games {
        let mut board = match params.fen.as_deref() {
            Some(fen) => GameBoard::from_fen(fen)?,
            None => GameBoard::startpos(),
        };
        // Vary the random strategy's seed per game so games differ.
        let mut white = MoveSelector::from_config(&EngineConfig { seed: params.white.seed.wrapping_add(gi as u64), ..params.white.clone() });
        let mut black = MoveSelector::from_config(&EngineConfig { seed: params.black.seed.wrapping_add(gi as u64), ..params.black.clone() });
        games.push(play_game(&mut board, &mut white, &mut black, params.max_plies)?);
    }
    Ok(games)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_of_fools_mate() {
        let pos = GameBoard::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3").unwrap();
        let o = GameOutcome::of(&pos);
        assert_eq!(o, Some(GameOutcome::Checkmate { winner: Color::Black }));
        assert_eq!(o.map(GameOutcome::result), Some(-1));
    }

    #[test]
    fn finished_game_plays_no_moves() {
        let mut board = GameBoard::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let mut w: MoveSelector = MoveSelector::default();
        let mut b: MoveSelector = MoveSelector::default();
        let rec = play_game(&mut board, &mut w, &mut b, 10).unwrap();
        assert!(rec.moves.is_empty());
        assert_eq!(rec.outcome, Some(GameOutcome::InsufficientMaterial));
    }
}

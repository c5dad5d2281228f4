use prunebot::selfplay::{generate_games, GameOutcome, SelfPlayParams};
use prunebot::{EngineConfig, GameBoard, Position, Strategy};

fn random_cfg(seed: u64) -> EngineConfig {
    EngineConfig { strategy: Strategy::Random, seed, ..Default::default() }
}

#[test]
fn selfplay_generates_games_deterministically() {
    let params = SelfPlayParams { games: 2, max_plies: 16, white: random_cfg(42), black: random_cfg(7), fen: None };
    let g1 = generate_games(&params).unwrap();
    let g2 = generate_games(&params).unwrap();
    assert_eq!(g1.len(), 2);
    assert_eq!(g2.len(), 2);
    // Deterministic by seed
    assert_eq!(g1, g2);
}

#[test]
fn selfplay_moves_replay_legally() {
    let params = SelfPlayParams {
        games: 1,
        max_plies: 6,
        white: EngineConfig::default(),
        black: random_cfg(3),
        fen: None,
    };
    let games = generate_games(&params).unwrap();
    let rec = &games[0];
    assert_eq!(rec.moves.len(), 6);
    let replay = GameBoard::set_from_start_and_moves(&rec.moves).expect("recorded moves are legal");
    assert_eq!(replay.ply_count(), 6);
}

#[test]
fn recorded_outcome_matches_final_position() {
    let params = SelfPlayParams { games: 1, max_plies: 400, white: random_cfg(11), black: random_cfg(12), fen: None };
    let games = generate_games(&params).unwrap();
    let rec = &games[0];
    let replay = GameBoard::set_from_start_and_moves(&rec.moves).unwrap();
    assert_eq!(GameOutcome::of(&replay), rec.outcome);
    assert_eq!(rec.outcome.is_some(), replay.is_game_over());
}

#[test]
fn starting_from_finished_position() {
    let params = SelfPlayParams {
        fen: Some("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3".to_string()),
        ..Default::default()
    };
    let games = generate_games(&params).unwrap();
    assert!(games[0].moves.is_empty());
    assert_eq!(games[0].outcome.map(GameOutcome::result), Some(-1));
}

use cozy_chess::Color;
use prunebot::{GameBoard, Position, Searcher, SCORE_INFINITY};

const POSITIONS: &[(&str, u32)] = &[
    ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", 3),
    ("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3", 3),
    ("r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4", 3),
    ("8/2k5/3p4/p2P1p2/P2P1P2/8/8/4K3 b - - 0 1", 3),
    ("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1", 2),
];

#[test]
fn alpha_beta_matches_minimax_value() {
    for &(fen, max_depth) in POSITIONS {
        let mut pos = GameBoard::from_fen(fen).unwrap();
        let side = pos.side_to_move();
        for depth in 0..=max_depth {
            let mut s = Searcher::new();
            let mm = s.minimax(&pos, depth, side).unwrap();
            let mm_nodes = s.nodes();
            let ab = s.alpha_beta(&mut pos, depth, -SCORE_INFINITY, SCORE_INFINITY, side).unwrap();
            assert_eq!(ab.value, mm.value, "{fen} depth {depth}");
            assert!(s.nodes() <= mm_nodes, "{fen} depth {depth}: {} > {}", s.nodes(), mm_nodes);
            if depth > 0 { assert!(ab.mv.is_some() && mm.mv.is_some()); }
        }
    }
}

#[test]
fn pruning_visits_fewer_nodes() {
    let mut pos = GameBoard::startpos();
    let mut s = Searcher::new();
    s.minimax(&pos, 3, Color::White).unwrap();
    let full = s.nodes();
    s.alpha_beta(&mut pos, 3, -SCORE_INFINITY, SCORE_INFINITY, Color::White).unwrap();
    assert!(s.nodes() < full, "{} vs {}", s.nodes(), full);
}

#[test]
fn searches_are_deterministic() {
    let fen = POSITIONS[2].0;
    let mut pos = GameBoard::from_fen(fen).unwrap();
    let mut s = Searcher::new();
    let a1 = s.alpha_beta(&mut pos, 3, -SCORE_INFINITY, SCORE_INFINITY, Color::White).unwrap();
    let a2 = s.alpha_beta(&mut pos, 3, -SCORE_INFINITY, SCORE_INFINITY, Color::White).unwrap();
    assert_eq!(a1, a2);
    let m1 = s.minimax(&pos, 2, Color::White).unwrap();
    let m2 = s.minimax(&pos, 2, Color::White).unwrap();
    assert_eq!(m1, m2);
}

#[test]
fn alpha_beta_restores_full_state() {
    for &(fen, _) in POSITIONS {
        let mut pos = GameBoard::from_fen(fen).unwrap();
        let before = pos.clone();
        let side = pos.side_to_move();
        Searcher::new().alpha_beta(&mut pos, 2, -SCORE_INFINITY, SCORE_INFINITY, side).unwrap();
        assert_eq!(pos, before, "{fen}");
        assert_eq!(pos.ply_count(), 0);
    }
}

use crate::board::{MoveGuard, Position};

/// Leaf count of the legal move tree, walked with in-place make/undo.
pub fn perft<P: Position>(pos: &mut P, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    let mut nodes = 0u64;
    for mv in pos.legal_moves() {
        let mut child = MoveGuard::new(pos, mv);
        nodes += perft(&mut *child, depth - 1);
    }
    nodes
}

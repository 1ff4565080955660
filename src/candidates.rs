//! Candidate edge selection shared by the strategy tiers.
//!
//! Randomness is always drawn from a caller-supplied [`fastrand::Rng`], so
//! a seeded generator reproduces a full decision sequence exactly.

use fastrand::Rng;

use crate::board::{Board, Cell, Direction, Edge};
use crate::query::neighbor_sides;

/// A uniformly random undrawn side of `cell`, skipping `exclude`.
///
/// `None` when every side is drawn, or the only open side is excluded.
pub fn random_open_side(
    board: &Board,
    cell: Cell,
    exclude: Option<Edge>,
    rng: &mut Rng,
) -> Option<Edge> {
    let mut open = Vec::with_capacity(4);
    for dir in Direction::ALL {
        if board.side_drawn(cell, dir) {
            continue;
        }
        let edge = board.edge(cell, dir);
        if exclude == Some(edge) {
            continue;
        }
        open.push(edge);
    }
    rng.choice(&open).copied()
}

/// Every not-yet-closed box, grouped by filled-side count (0 through 3).
pub fn classify_by_sides(board: &Board) -> [Vec<Cell>; 4] {
    let mut groups: [Vec<Cell>; 4] = std::array::from_fn(|_| Vec::new());
    for cell in board.cells() {
        let sides = board.sides(cell);
        if sides < 4 {
            groups[sides as usize].push(cell);
        }
    }
    groups
}

/// Whether the box across `dir` is absent or has fewer than `limit` sides.
///
/// With a limit of 2, drawing a side for which this holds cannot hand the
/// far box a third side.
pub fn side_below(board: &Board, cell: Cell, dir: Direction, limit: u8) -> bool {
    neighbor_sides(board, cell, dir).map_or(true, |sides| sides < limit)
}

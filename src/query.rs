//! Read-only board queries shared by every strategy tier.
//!
//! All functions here are pure: they take the board by shared reference,
//! never mutate it, and are total over in-bounds coordinates. Bounds are
//! a caller precondition rather than a checked error.

use crate::board::{Board, Cell, Direction, Edge};

/// The boxes an edge borders.
///
/// Interior edges touch two boxes, boundary edges exactly one. For a
/// horizontal edge those are the boxes above and below it, for a
/// vertical edge the boxes to its left and right.
pub fn boxes_touching(board: &Board, edge: Edge) -> Vec<Cell> {
    board.adjoining(edge).into_iter().flatten().collect()
}

/// The neighboring box across `dir`, or `None` past the border.
#[inline]
pub fn neighbor(board: &Board, (r, c): Cell, dir: Direction) -> Option<Cell> {
    match dir {
        Direction::Top => (r > 0).then(|| (r - 1, c)),
        Direction::Bottom => (r + 1 < board.rows).then(|| (r + 1, c)),
        Direction::Left => (c > 0).then(|| (r, c - 1)),
        Direction::Right => (c + 1 < board.cols).then(|| (r, c + 1)),
    }
}

/// All four neighbors of `cell`, in `Direction::ALL` order.
pub fn adjacent_cells(board: &Board, cell: Cell) -> [Option<Cell>; 4] {
    Direction::ALL.map(|dir| neighbor(board, cell, dir))
}

/// The filled-side count of the neighbor across `dir`, or `None` at the border.
pub fn neighbor_sides(board: &Board, cell: Cell, dir: Direction) -> Option<u8> {
    neighbor(board, cell, dir).map(|n| board.sides(n))
}

/// Whether `cell` lies on the board rim with that rim side still undrawn.
pub fn faces_open_border(board: &Board, cell: Cell) -> bool {
    let (r, c) = cell;
    (r == 0 && !board.side_drawn(cell, Direction::Top))
        || (r == board.rows - 1 && !board.side_drawn(cell, Direction::Bottom))
        || (c == 0 && !board.side_drawn(cell, Direction::Left))
        || (c == board.cols - 1 && !board.side_drawn(cell, Direction::Right))
}

/// The edge shared by two orthogonally adjacent boxes.
pub fn edge_between(board: &Board, a: Cell, b: Cell) -> Option<Edge> {
    Direction::ALL
        .into_iter()
        .find(|&dir| neighbor(board, a, dir) == Some(b))
        .map(|dir| board.edge(a, dir))
}

//! Chain analysis over the undrawn-edge adjacency graph.
//!
//! A box with two or more drawn sides is one stroke away from handing its
//! neighborhood over; a run of such boxes connected through undrawn shared
//! edges forms a chain, which the opponent can eat end to end once it is
//! opened. Owner-less boxes with fewer than two sides stand apart as
//! crosses. The partition is linear in the number of boxes and recomputed
//! from scratch for every decision; nothing is cached across moves.

use std::collections::VecDeque;

use fastrand::Rng;

use crate::board::{Board, Cell, Direction, Edge};
use crate::candidates::random_open_side;
use crate::constants::CHAIN_MIN_SIDES;
use crate::query::neighbor;

/// The chain/cross split of every owner-less, not-yet-closed box.
pub struct ChainPartition {
    /// Connected groups of capture-prone boxes, in discovery order.
    pub chains: Vec<Vec<Cell>>,
    /// Boxes with fewer than two drawn sides, belonging to no chain.
    pub crosses: Vec<Cell>,
}

impl ChainPartition {
    /// The chain with the fewest members, the earliest discovered on ties.
    pub fn shortest(&self) -> Option<&[Cell]> {
        self.chains
            .iter()
            .min_by_key(|chain| chain.len())
            .map(|chain| chain.as_slice())
    }

    /// The chain containing `cell`, if any.
    pub fn chain_of(&self, cell: Cell) -> Option<&[Cell]> {
        self.chains
            .iter()
            .find(|chain| chain.contains(&cell))
            .map(|chain| chain.as_slice())
    }
}

/// Group the board's open boxes into chains and crosses.
///
/// Every owner-less box lands in exactly one of the two lists: boxes with
/// at least [`CHAIN_MIN_SIDES`] drawn sides seed a breadth-first walk that
/// crosses undrawn edges only, everything below the threshold is a cross.
/// Closed boxes belong to neither.
pub fn partition_chains(board: &Board) -> ChainPartition {
    let idx = |(r, c): Cell| r * board.cols + c;
    let mut visited = vec![false; board.rows * board.cols];
    let mut chains = Vec::new();
    let mut crosses = Vec::new();

    for cell in board.cells() {
        if visited[idx(cell)] || board.owner(cell).is_some() {
            continue;
        }
        if board.sides(cell) < CHAIN_MIN_SIDES {
            crosses.push(cell);
            continue;
        }
        visited[idx(cell)] = true;
        let mut chain = vec![cell];
        let mut frontier = VecDeque::from([cell]);
        while let Some(cur) = frontier.pop_front() {
            for dir in Direction::ALL {
                if board.side_drawn(cur, dir) {
                    continue; // chains link only through undrawn edges
                }
                let Some(next) = neighbor(board, cur, dir) else {
                    continue;
                };
                if visited[idx(next)]
                    || board.owner(next).is_some()
                    || board.sides(next) < CHAIN_MIN_SIDES
                {
                    continue;
                }
                visited[idx(next)] = true;
                chain.push(next);
                frontier.push_back(next);
            }
        }
        chains.push(chain);
    }

    ChainPartition { chains, crosses }
}

/// The opening move once captures and safe edges are exhausted: a random
/// open side of a random member of the shortest chain, or of a random
/// cross when no chain exists.
///
/// Ceding the shortest chain gives the opponent the fewest boxes.
pub fn sacrifice_move(board: &Board, partition: &ChainPartition, rng: &mut Rng) -> Option<Edge> {
    if let Some(chain) = partition.shortest() {
        let cell = rng.choice(chain).copied()?;
        return random_open_side(board, cell, None, rng);
    }
    let cell = rng.choice(&partition.crosses).copied()?;
    random_open_side(board, cell, None, rng)
}

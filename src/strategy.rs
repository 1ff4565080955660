//! Difficulty-tiered move selection.
//!
//! Every tier shares the same reactive opening: if the opponent's last
//! stroke left a box one side short, take it. From there the tiers differ
//! in how much structure they read out of the board:
//!
//! - [`easy_move`] fills the emptiest boxes first and nothing more.
//! - [`medium_move`] prefers strokes that cannot hand over a third side.
//! - [`hard_move`] adds chain analysis: once no stroke is safe, it opens
//!   the shortest chain to cede as little as possible.
//! - [`extreme_move`] refines Hard with the double cross: it declines the
//!   last two boxes of a chain to keep the opponent on the hook, and
//!   opens two-box chains through the middle so the same trick cannot be
//!   played back.
//!
//! Strategies never mutate the board and draw all randomness from the
//! caller's [`fastrand::Rng`]; a fixed seed replays the same decisions.

use std::fmt;
use std::str::FromStr;

use fastrand::Rng;

use crate::board::{Board, Cell, Direction, Edge};
use crate::candidates::{classify_by_sides, random_open_side, side_below};
use crate::chains::{partition_chains, sacrifice_move};
use crate::constants::{DOUBLE_CROSS_TAIL, SAFE_SIDE_LIMIT};
use crate::query::{boxes_touching, edge_between};

/// Playing strength of the move picker.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Extreme,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Extreme,
    ];
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "extreme" => Ok(Difficulty::Extreme),
            other => Err(format!(
                "unknown difficulty '{other}' (easy, medium, hard, extreme)"
            )),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Extreme => "extreme",
        };
        f.pad(name)
    }
}

/// Choose the next edge to draw.
///
/// `previous` is the last stroke of the game, if any; the engine reacts
/// to it before scanning the whole board. Returns `None` exactly when no
/// undrawn edge remains.
pub fn select_move(
    board: &Board,
    previous: Option<Edge>,
    difficulty: Difficulty,
    rng: &mut Rng,
) -> Option<Edge> {
    match difficulty {
        Difficulty::Easy => easy_move(board, previous, rng),
        Difficulty::Medium => medium_move(board, previous, rng),
        Difficulty::Hard => hard_move(board, previous, rng),
        Difficulty::Extreme => extreme_move(board, previous, rng),
    }
}

/// The box `previous` left one side short, if any.
fn reactive_target(board: &Board, previous: Option<Edge>) -> Option<Cell> {
    previous.and_then(|edge| {
        boxes_touching(board, edge)
            .into_iter()
            .find(|&cell| board.sides(cell) == 3)
    })
}

/// A capturable box: `previous`'s neighborhood first, then a random
/// three-sided box anywhere.
fn capture_target(
    board: &Board,
    previous: Option<Edge>,
    groups: &[Vec<Cell>; 4],
    rng: &mut Rng,
) -> Option<Cell> {
    reactive_target(board, previous).or_else(|| rng.choice(&groups[3]).copied())
}

/// Take a capturable box through its one remaining side.
fn capture_move(
    board: &Board,
    previous: Option<Edge>,
    groups: &[Vec<Cell>; 4],
    rng: &mut Rng,
) -> Option<Edge> {
    let cell = capture_target(board, previous, groups, rng)?;
    random_open_side(board, cell, None, rng)
}

/// The lowest-pressure fill: a random open side of a random box from the
/// emptiest non-empty side-count group.
fn ascending_group_move(board: &Board, groups: &[Vec<Cell>; 4], rng: &mut Rng) -> Option<Edge> {
    for group in &groups[..3] {
        if let Some(&cell) = rng.choice(group) {
            return random_open_side(board, cell, None, rng);
        }
    }
    None
}

/// Open sides that cannot yield a third side on either flank: the box
/// holds fewer than two sides and the box across the stroke is absent or
/// below two as well.
fn safe_edges(board: &Board, groups: &[Vec<Cell>; 4]) -> Vec<Edge> {
    let mut edges = Vec::new();
    for &cell in groups[0].iter().chain(&groups[1]) {
        for dir in Direction::ALL {
            if board.side_drawn(cell, dir) || !side_below(board, cell, dir, SAFE_SIDE_LIMIT) {
                continue;
            }
            let edge = board.edge(cell, dir);
            if !edges.contains(&edge) {
                edges.push(edge);
            }
        }
    }
    edges
}

/// Fill empty space, take what is offered, never look further ahead.
pub fn easy_move(board: &Board, previous: Option<Edge>, rng: &mut Rng) -> Option<Edge> {
    let groups = classify_by_sides(board);
    if let Some(edge) = capture_move(board, previous, &groups, rng) {
        return Some(edge);
    }
    ascending_group_move(board, &groups, rng)
}

/// Easy plus restraint: prefer strokes that set nothing up for the
/// opponent.
pub fn medium_move(board: &Board, previous: Option<Edge>, rng: &mut Rng) -> Option<Edge> {
    let groups = classify_by_sides(board);
    if let Some(edge) = capture_move(board, previous, &groups, rng) {
        return Some(edge);
    }
    let safe = safe_edges(board, &groups);
    if let Some(&edge) = rng.choice(&safe) {
        return Some(edge);
    }
    ascending_group_move(board, &groups, rng)
}

/// Medium plus chain awareness: when every stroke is a gift, give away
/// the shortest chain.
pub fn hard_move(board: &Board, previous: Option<Edge>, rng: &mut Rng) -> Option<Edge> {
    let groups = classify_by_sides(board);
    if let Some(edge) = capture_move(board, previous, &groups, rng) {
        return Some(edge);
    }
    let safe = safe_edges(board, &groups);
    if let Some(&edge) = rng.choice(&safe) {
        return Some(edge);
    }
    let partition = partition_chains(board);
    sacrifice_move(board, &partition, rng)
}

/// Hard plus the double cross.
///
/// Finishing a chain outright is a trap: whoever takes its last box must
/// open the next chain. When a chain being eaten is down to two boxes,
/// another chain is still standing and no safe stroke exists, the capture
/// is declined by drawing the partner box's far side, handing the
/// opponent two boxes and the obligation to move. Conversely, a two-box
/// chain is opened through its middle so the pair cannot be declined the
/// same way. Everything else behaves like [`hard_move`].
pub fn extreme_move(board: &Board, previous: Option<Edge>, rng: &mut Rng) -> Option<Edge> {
    let groups = classify_by_sides(board);
    let safe = safe_edges(board, &groups);

    if let Some(cell) = capture_target(board, previous, &groups, rng) {
        if safe.is_empty() {
            let partition = partition_chains(board);
            if let Some(chain) = partition.chain_of(cell) {
                if chain.len() == DOUBLE_CROSS_TAIL && partition.chains.len() > 1 {
                    if let Some(edge) = decline_capture(board, chain, cell, rng) {
                        return Some(edge);
                    }
                }
            }
        }
        return random_open_side(board, cell, None, rng);
    }

    if let Some(&edge) = rng.choice(&safe) {
        return Some(edge);
    }

    let partition = partition_chains(board);
    if let Some(chain) = partition.shortest() {
        if chain.len() == DOUBLE_CROSS_TAIL {
            // The middle stroke offers both boxes at once; taking them is
            // the opponent's only non-losing reply.
            if let Some(edge) = edge_between(board, chain[0], chain[1]) {
                return Some(edge);
            }
        }
    }
    sacrifice_move(board, &partition, rng)
}

/// Leave the last two boxes of `chain` joined: draw the partner's side
/// away from the shared edge. `None` when the partner has no other open
/// side (the pair is already a domino and taking it is all that is left).
fn decline_capture(board: &Board, chain: &[Cell], capturable: Cell, rng: &mut Rng) -> Option<Edge> {
    let partner = chain.iter().copied().find(|&c| c != capturable)?;
    let shared = edge_between(board, capturable, partner)?;
    random_open_side(board, partner, Some(shared), rng)
}

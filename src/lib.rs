//! Dotbox: a difficulty-tiered move engine for Dots and Boxes.
//!
//! Given a board and the last stroke played, the engine picks the next
//! edge to draw at one of four strength levels, up to chain counting and
//! double-cross play. Turn order, rendering and input stay with the
//! caller; the engine only answers "which edge now?".
//!
//! ## Modules
//!
//! - [`board`] - Board state: dots, edges, boxes, owners
//! - [`query`] - Read-only board lookups
//! - [`candidates`] - Open-side and side-count candidate helpers
//! - [`chains`] - Chain/cross partition of the open boxes
//! - [`strategy`] - The four difficulty tiers behind `select_move`
//! - [`constants`] - Strategy thresholds
//!
//! ## Example
//!
//! ```
//! use dotbox::board::{Board, Player};
//! use dotbox::strategy::{select_move, Difficulty};
//!
//! let mut board = Board::new(3, 3);
//! let mut rng = fastrand::Rng::with_seed(7);
//!
//! // Ask the engine for an opening stroke and apply it.
//! let edge = select_move(&board, None, Difficulty::Hard, &mut rng).unwrap();
//! let result = board.draw(edge, Player::One);
//! assert!(result.legal);
//! ```

pub mod board;
pub mod candidates;
pub mod chains;
pub mod constants;
pub mod query;
pub mod strategy;

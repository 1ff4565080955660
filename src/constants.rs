//! Strategy tuning constants.
//!
//! Thresholds shared by the chain analyzer and the difficulty tiers, kept
//! in one place instead of as magic numbers at the use sites.

// =============================================================================
// Chain and Safety Thresholds
// =============================================================================

/// Minimum filled sides for a box to count as capture-prone (a chain member).
pub const CHAIN_MIN_SIDES: u8 = 2;

/// A side is safe while the box across it stays below this many filled sides.
pub const SAFE_SIDE_LIMIT: u8 = 2;

/// Boxes ceded when a chain capture is declined to keep the move burden on
/// the opponent.
pub const DOUBLE_CROSS_TAIL: usize = 2;

/// Gameplay configuration constants.
///
/// This module defines the default gameplay parameters: grid dimensions,
/// the score needed to win a match, and the default round countdown.
/// Number of cells along one side of the (square) grid.
pub const GRID_SIZE: usize = 10;

/// Score at which a match ends in favor of whoever reached it.
pub const WINNING_SCORE: u32 = 10;

/// Default length of the round countdown, in milliseconds.
pub const DEFAULT_ROUND_DURATION_MS: u64 = 1000;

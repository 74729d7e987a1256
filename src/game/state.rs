use serde::{Serialize, Deserialize};

use crate::game::grid::{choose_empty_cell, generate_grid};
use crate::game::types::{CellState, RoundEnd};

/// Result message once the player reaches the winning score.
pub const PLAYER_WINS_MESSAGE: &str = "You win!";

/// Result message once the computer reaches the winning score.
pub const COMPUTER_WINS_MESSAGE: &str = "Computer wins!";

/// Result message when no empty cell is left to play.
pub const EXHAUSTED_MESSAGE: &str = "Game Over";

/// All mutable state of one match: the grid, both scores, the currently
/// highlighted cell, and the end-of-match flag/message.
///
/// `MatchState` holds the rules only. It knows nothing about timers or
/// subscribers; the engine drives it through [`MatchState::open_round`] and
/// [`MatchState::score_round`] and decides when the countdown runs.
///
/// Before the first reset the state reports `is_over = true` with an empty
/// message, so the same guard covers both "no match started yet" and
/// "match finished".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchState {
    grid: Vec<CellState>,
    grid_size: usize,
    winning_score: u32,
    player_score: u32,
    computer_score: u32,
    active_cell: Option<usize>,
    is_over: bool,
    message: String,
}

impl MatchState {
    /// Create the state for a `grid_size x grid_size` match, first to
    /// `winning_score`. No round is open until [`MatchState::reset`] runs.
    pub fn new(grid_size: usize, winning_score: u32) -> Self {
        Self {
            grid: generate_grid(grid_size),
            grid_size,
            winning_score,
            player_score: 0,
            computer_score: 0,
            active_cell: None,
            is_over: true,
            message: String::new(),
        }
    }

    pub fn grid(&self) -> &[CellState] {
        &self.grid
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn player_score(&self) -> u32 {
        self.player_score
    }

    pub fn computer_score(&self) -> u32 {
        self.computer_score
    }

    pub fn active_cell(&self) -> Option<usize> {
        self.active_cell
    }

    pub fn is_over(&self) -> bool {
        self.is_over
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// True when a click on `index` should score the player: the match is
    /// running and `index` is exactly the highlighted cell. Anything else is
    /// a stale or misplaced click and must be ignored by the caller.
    pub fn is_active_cell(&self, index: usize) -> bool {
        !self.is_over && self.active_cell == Some(index)
    }

    /// Discard the previous match wholesale and begin a fresh one: all cells
    /// empty, both scores zero, no result message, no highlighted cell.
    pub fn reset(&mut self) {
        self.grid = generate_grid(self.grid_size);
        self.player_score = 0;
        self.computer_score = 0;
        self.active_cell = None;
        self.is_over = false;
        self.message.clear();
    }

    /// Open the next round: highlight a random still-empty cell and report
    /// its index so the caller can start the countdown.
    ///
    /// Returns `None` without touching the grid when the match is already
    /// over, and ends the match with [`EXHAUSTED_MESSAGE`] when every cell
    /// has been played.
    pub fn open_round(&mut self) -> Option<usize> {
        if self.is_over {
            return None;
        }
        debug_assert!(self.active_cell.is_none());

        match choose_empty_cell(&self.grid) {
            Some(index) => {
                self.grid[index] = CellState::Active;
                self.active_cell = Some(index);
                Some(index)
            }
            None => {
                self.end_match(EXHAUSTED_MESSAGE);
                None
            }
        }
    }

    /// Resolve the active round: settle the highlighted cell, credit exactly
    /// one point to exactly one side, and end the match if that point reaches
    /// the winning score. The player's score is checked first.
    ///
    /// Does nothing when no round is open.
    pub fn score_round(&mut self, end: RoundEnd) {
        let Some(index) = self.active_cell.take() else {
            return;
        };

        match end {
            RoundEnd::Hit => {
                self.grid[index] = CellState::Hit;
                self.player_score += 1;
            }
            RoundEnd::Missed => {
                self.grid[index] = CellState::Missed;
                self.computer_score += 1;
            }
        }

        if self.player_score >= self.winning_score {
            self.end_match(PLAYER_WINS_MESSAGE);
        } else if self.computer_score >= self.winning_score {
            self.end_match(COMPUTER_WINS_MESSAGE);
        }
    }

    /// Immutable copy of the state as published to subscribers.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            grid: self.grid.clone(),
            grid_size: self.grid_size,
            player_score: self.player_score,
            computer_score: self.computer_score,
            is_over: self.is_over,
            message: self.message.clone(),
        }
    }

    fn end_match(&mut self, message: &str) {
        self.is_over = true;
        self.message = message.to_string();
    }
}

/// Immutable view of the match published after every applied transition.
///
/// `message` stays empty while the match is in progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub grid: Vec<CellState>,
    pub grid_size: usize,
    pub player_score: u32,
    pub computer_score: u32,
    pub is_over: bool,
    pub message: String,
}

impl GameSnapshot {
    /// Index of the highlighted cell, if a round is in progress.
    pub fn active_index(&self) -> Option<usize> {
        self.grid.iter().position(|cell| *cell == CellState::Active)
    }
}

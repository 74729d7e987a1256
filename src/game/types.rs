use serde::{Serialize, Deserialize};

/// State of a single grid cell over the course of a match.
///
/// A cell leaves `Empty` when it is selected for a round, and settles into
/// `Hit` or `Missed` when that round resolves. Resolved cells are terminal:
/// they are never selected again within the same match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// Not yet played this match, eligible for selection.
    Empty,
    /// Currently highlighted, awaiting a click before the deadline.
    Active,
    /// Clicked in time by the player.
    Hit,
    /// Deadline expired before a click.
    Missed,
}

impl CellState {
    /// True while the cell can still be selected for a round.
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// True once the cell has been scored, for either side.
    pub const fn is_resolved(self) -> bool {
        matches!(self, Self::Hit | Self::Missed)
    }
}

/// How the active round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEnd {
    /// The player clicked the active cell before the deadline.
    Hit,
    /// The countdown expired first.
    Missed,
}

use rand::seq::IteratorRandom;

use crate::game::types::CellState;

/// Build a fresh all-empty grid of `grid_size * grid_size` cells.
///
/// The grid is a flat vector; a cell's index is its identity.
pub fn generate_grid(grid_size: usize) -> Vec<CellState> {
    vec![CellState::Empty; grid_size * grid_size]
}

/// Pick a cell for the next round, uniformly at random among the cells that
/// are still empty. Returns `None` once every cell has been played.
///
/// Selection is always derived from the grid as it currently stands, so a
/// resolved cell can never be picked twice.
pub fn choose_empty_cell(grid: &[CellState]) -> Option<usize> {
    let mut rng = rand::rng();

    grid.iter()
        .enumerate()
        .filter_map(|(index, cell)| if cell.is_empty() { Some(index) } else { None })
        .choose(&mut rng)
}

/// Number of cells that have been scored so far, for either side.
pub fn count_resolved(grid: &[CellState]) -> usize {
    grid.iter().filter(|cell| cell.is_resolved()).count()
}

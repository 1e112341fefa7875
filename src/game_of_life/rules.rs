//! Game of Life rules implementation (B3/S23)

use super::Grid;
use itertools::iproduct;

/// Game of Life rules engine
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Compute the next generation of `current` into a fresh grid.
    ///
    /// Every cell is evaluated against the untouched `current` grid, so
    /// cells updated earlier in the pass never feed into later ones.
    pub fn next_generation(current: &Grid) -> Grid {
        let cells = iproduct!(0..current.rows(), 0..current.cols())
            .map(|(row, col)| {
                Self::should_be_alive(
                    current.get(row, col),
                    current.count_live_neighbors(row, col),
                )
            })
            .collect();

        current.with_cells(cells)
    }

    /// Evolve the grid for multiple generations
    pub fn evolve_generations(mut grid: Grid, generations: usize) -> Grid {
        for _ in 0..generations {
            grid = Self::next_generation(&grid);
        }
        grid
    }

    /// Check if a cell should be alive in the next generation given its current state and neighbor count
    pub fn should_be_alive(current_state: bool, neighbor_count: u8) -> bool {
        matches!((current_state, neighbor_count), (true, 2) | (true, 3) | (false, 3))
    }
}

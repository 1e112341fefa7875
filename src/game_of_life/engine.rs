//! Simulation engine: generation state, stepping and termination checks

use super::io::{grid_to_string, load_grid_from_file, parse_grid_from_string, save_grid_to_file};
use super::{GameOfLifeRules, Grid};
use crate::error::Result;
use rand::Rng;
use std::path::Path;
use tracing::debug;

/// Owns the current and previous generation of a bounded Game of Life grid.
///
/// The engine is advanced only through [`SimulationEngine::step`]; callers
/// poll [`is_max_generations_exceeded`](SimulationEngine::is_max_generations_exceeded)
/// and [`is_changing`](SimulationEngine::is_changing) between steps to decide
/// when to stop.
#[derive(Debug, Clone)]
pub struct SimulationEngine {
    current_generation: Grid,
    previous_generation: Grid,
    generation_count: u64,
    max_generations: Option<u64>,
}

impl SimulationEngine {
    /// Create an engine, randomizing the initial grid from the thread-local generator
    pub fn new(
        rows: usize,
        cols: usize,
        randomize: bool,
        max_generations: Option<u64>,
    ) -> Result<Self> {
        Self::with_rng(rows, cols, randomize, max_generations, &mut rand::rng())
    }

    /// Create an engine drawing random cells from `rng`
    pub fn with_rng<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        randomize: bool,
        max_generations: Option<u64>,
        rng: &mut R,
    ) -> Result<Self> {
        let grid = if randomize {
            Grid::random(rows, cols, rng)?
        } else {
            Grid::new(rows, cols)?
        };
        Ok(Self::from_grid(grid, max_generations))
    }

    /// Wrap an existing grid as generation 1
    pub fn from_grid(grid: Grid, max_generations: Option<u64>) -> Self {
        let previous_generation = grid.with_cells(vec![false; grid.cells().len()]);
        Self {
            current_generation: grid,
            previous_generation,
            generation_count: 1,
            max_generations,
        }
    }

    /// Build an unbounded engine from a snapshot file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::from_grid(load_grid_from_file(path)?, None))
    }

    /// Build an unbounded engine from snapshot text
    pub fn load_str(content: &str) -> Result<Self> {
        Ok(Self::from_grid(parse_grid_from_string(content)?, None))
    }

    /// Replace the grid state from a snapshot file, keeping the generation bound.
    ///
    /// On error the engine is left as it was.
    pub fn reload<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let grid = load_grid_from_file(path)?;
        *self = Self::from_grid(grid, self.max_generations);
        Ok(())
    }

    /// Write the current generation as a snapshot file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        save_grid_to_file(&self.current_generation, path)
    }

    /// Snapshot text of the current generation
    pub fn to_snapshot(&self) -> String {
        grid_to_string(&self.current_generation)
    }

    pub fn rows(&self) -> usize {
        self.current_generation.rows()
    }

    pub fn cols(&self) -> usize {
        self.current_generation.cols()
    }

    pub fn current_generation(&self) -> &Grid {
        &self.current_generation
    }

    pub fn previous_generation(&self) -> &Grid {
        &self.previous_generation
    }

    /// Number of the current generation; the initial grid is generation 1
    pub fn generation_count(&self) -> u64 {
        self.generation_count
    }

    pub fn max_generations(&self) -> Option<u64> {
        self.max_generations
    }

    /// Live neighbors of a cell in the current generation, in `0..=8`
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        self.current_generation.count_live_neighbors(row, col)
    }

    /// The generation that the next `step` would produce
    pub fn compute_next_generation(&self) -> Grid {
        GameOfLifeRules::next_generation(&self.current_generation)
    }

    /// Advance one generation.
    ///
    /// Stepping past a termination condition is allowed; the engine never
    /// stops on its own.
    pub fn step(&mut self) {
        let next = self.compute_next_generation();
        self.previous_generation = std::mem::replace(&mut self.current_generation, next);
        self.generation_count += 1;
        debug!(
            generation = self.generation_count,
            living = self.current_generation.living_count(),
            "stepped"
        );
    }

    /// Whether the generation counter has reached the configured bound
    pub fn is_max_generations_exceeded(&self) -> bool {
        self.max_generations
            .is_some_and(|max| self.generation_count >= max)
    }

    /// Whether the current generation differs from the one before it.
    ///
    /// Only a single generation is kept, so a period-2 oscillator always
    /// reports as changing.
    pub fn is_changing(&self) -> bool {
        self.current_generation != self.previous_generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LifeError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::tempdir;

    fn engine_from(snapshot: &str) -> SimulationEngine {
        SimulationEngine::load_str(snapshot).unwrap()
    }

    #[test]
    fn test_new_engine_baseline() {
        let engine = SimulationEngine::new(4, 6, false, None).unwrap();
        assert_eq!(engine.rows(), 4);
        assert_eq!(engine.cols(), 6);
        assert_eq!(engine.generation_count(), 1);
        assert!(engine.current_generation().is_empty());
        assert!(engine.previous_generation().is_empty());
        assert_eq!(engine.max_generations(), None);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(matches!(
            SimulationEngine::new(0, 3, true, None),
            Err(LifeError::InvalidDimensions { rows: 0, cols: 3 })
        ));
        assert!(matches!(
            SimulationEngine::new(3, 0, false, Some(5)),
            Err(LifeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_seeded_randomization_is_deterministic() {
        let a = SimulationEngine::with_rng(12, 12, true, None, &mut StdRng::seed_from_u64(42))
            .unwrap();
        let b = SimulationEngine::with_rng(12, 12, true, None, &mut StdRng::seed_from_u64(42))
            .unwrap();
        assert_eq!(a.current_generation(), b.current_generation());
        assert!(a.previous_generation().is_empty());
    }

    #[test]
    fn test_neighbor_counts_on_full_grid() {
        let engine = engine_from("11111\n11111\n11111\n11111\n");
        for row in 0..engine.rows() {
            for col in 0..engine.cols() {
                let n = engine.count_live_neighbors(row, col);
                let on_row_edge = row == 0 || row == engine.rows() - 1;
                let on_col_edge = col == 0 || col == engine.cols() - 1;
                let expected = match (on_row_edge, on_col_edge) {
                    (true, true) => 3,
                    (true, false) | (false, true) => 5,
                    (false, false) => 8,
                };
                assert_eq!(n, expected, "cell ({}, {})", row, col);
            }
        }
    }

    #[test]
    fn test_neighbor_counts_in_range_for_random_grids() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..10 {
            let engine = SimulationEngine::with_rng(7, 9, true, None, &mut rng).unwrap();
            for row in 0..7 {
                for col in 0..9 {
                    assert!(engine.count_live_neighbors(row, col) <= 8);
                }
            }
        }
    }

    #[test]
    fn test_corner_cells_are_not_adjacent() {
        let engine = engine_from("1000\n0000\n0000\n");
        assert_eq!(engine.count_live_neighbors(2, 3), 0);

        let engine = engine_from("0000\n0000\n0001\n");
        assert_eq!(engine.count_live_neighbors(0, 0), 0);
    }

    #[test]
    fn test_isolated_cell_dies() {
        let mut engine = engine_from("000\n010\n000\n");
        engine.step();
        assert!(engine.current_generation().is_empty());
        assert_eq!(engine.previous_generation().living_count(), 1);
    }

    #[test]
    fn test_compute_next_generation_does_not_mutate() {
        let engine = engine_from("000\n111\n000\n");
        let next = engine.compute_next_generation();
        assert_eq!(engine.to_snapshot(), "000\n111\n000\n");
        assert_eq!(super::grid_to_string(&next), "010\n010\n010\n");
        assert_eq!(engine.generation_count(), 1);
    }

    #[test]
    fn test_glider_translates_after_four_steps() {
        let mut engine = engine_from(
            "010000\n\
             001000\n\
             111000\n\
             000000\n\
             000000\n\
             000000\n",
        );
        for _ in 0..4 {
            engine.step();
        }
        assert_eq!(
            engine.to_snapshot(),
            "000000\n\
             001000\n\
             000100\n\
             011100\n\
             000000\n\
             000000\n"
        );
        assert_eq!(engine.generation_count(), 5);
    }

    #[test]
    fn test_empty_grid_is_fixed_point() {
        let mut engine = SimulationEngine::new(3, 3, false, None).unwrap();
        assert!(!engine.is_changing());
        for _ in 0..10 {
            engine.step();
            assert!(!engine.is_changing());
        }
    }

    #[test]
    fn test_still_life_stops_changing() {
        let mut engine = engine_from("0000\n0110\n0110\n0000\n");
        // first comparison is against the all-dead baseline
        assert!(engine.is_changing());
        engine.step();
        assert!(!engine.is_changing());
    }

    #[test]
    fn test_blinker_always_reports_changing() {
        let mut engine = engine_from("00000\n00000\n01110\n00000\n00000\n");
        for _ in 0..6 {
            engine.step();
            assert!(engine.is_changing());
        }
    }

    #[test]
    fn test_generation_counting() {
        let mut engine = SimulationEngine::new(5, 5, true, None).unwrap();
        for n in 1..=25 {
            engine.step();
            assert_eq!(engine.generation_count(), 1 + n);
        }
    }

    #[test]
    fn test_max_generations() {
        // the initial grid is generation 1, so the bound of 5 is reached on the 4th step
        let mut engine = SimulationEngine::new(4, 4, true, Some(5)).unwrap();
        for _ in 0..3 {
            engine.step();
        }
        assert_eq!(engine.generation_count(), 4);
        assert!(!engine.is_max_generations_exceeded());
        engine.step();
        assert_eq!(engine.generation_count(), 5);
        assert!(engine.is_max_generations_exceeded());

        // stepping on regardless is allowed
        engine.step();
        assert!(engine.is_max_generations_exceeded());
        assert_eq!(engine.generation_count(), 6);
    }

    #[test]
    fn test_unbounded_never_exceeded() {
        let mut engine = SimulationEngine::new(2, 2, false, None).unwrap();
        for _ in 0..100 {
            engine.step();
        }
        assert!(!engine.is_max_generations_exceeded());
    }

    #[test]
    fn test_max_generations_of_one_is_immediately_exceeded() {
        let engine = SimulationEngine::new(2, 2, false, Some(1)).unwrap();
        assert!(engine.is_max_generations_exceeded());
    }

    #[test]
    fn test_previous_generation_is_independent_copy() {
        let mut engine = engine_from("000\n111\n000\n");
        engine.step();
        let before = engine.previous_generation().clone();
        engine.step();
        // previous now holds the vertical phase, the horizontal copy is unaffected
        assert_eq!(super::grid_to_string(&before), "000\n111\n000\n");
        assert_eq!(
            super::grid_to_string(engine.previous_generation()),
            "010\n010\n010\n"
        );
    }

    #[test]
    fn test_save_load_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("state.txt");
        let mut rng = StdRng::seed_from_u64(1234);

        for (rows, cols) in [(1, 1), (3, 17), (24, 32)] {
            let original = SimulationEngine::with_rng(rows, cols, true, None, &mut rng).unwrap();
            original.save(&path).unwrap();

            let loaded = SimulationEngine::load(&path).unwrap();
            assert_eq!(loaded.rows(), rows);
            assert_eq!(loaded.cols(), cols);
            assert_eq!(loaded.current_generation(), original.current_generation());
            assert_eq!(loaded.generation_count(), 1);
            assert!(loaded.previous_generation().is_empty());
        }
    }

    #[test]
    fn test_load_rejects_malformed_snapshot() {
        assert!(matches!(
            SimulationEngine::load_str("012\n"),
            Err(LifeError::MalformedInput(_))
        ));
        assert!(matches!(
            SimulationEngine::load_str("01\n011\n"),
            Err(LifeError::MalformedInput(_))
        ));
        assert!(matches!(
            SimulationEngine::load_str("\n\n"),
            Err(LifeError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_reload_failure_leaves_engine_untouched() {
        let temp_dir = tempdir().unwrap();
        let bad = temp_dir.path().join("bad.txt");
        std::fs::write(&bad, "01\n0a\n").unwrap();

        let mut engine = SimulationEngine::new(3, 3, false, Some(9)).unwrap();
        engine.step();
        assert!(engine.reload(&bad).is_err());
        assert!(engine.reload(temp_dir.path().join("missing.txt")).is_err());
        assert_eq!(engine.rows(), 3);
        assert_eq!(engine.generation_count(), 2);

        let good = temp_dir.path().join("good.txt");
        std::fs::write(&good, "11\n11\n").unwrap();
        engine.reload(&good).unwrap();
        assert_eq!(engine.rows(), 2);
        assert_eq!(engine.generation_count(), 1);
        assert_eq!(engine.max_generations(), Some(9));
        assert_eq!(engine.current_generation().living_count(), 4);
    }
}

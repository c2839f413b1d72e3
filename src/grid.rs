use crate::Config;
use anyhow::{ensure, Context, Result};
use rand::{Rng, SeedableRng};

pub const DEAD_CHAR: char = '.';
pub const ALIVE_CHAR: char = '*';

/// Fixed-size field of cells stored row by row.
///
/// The field is a cylinder: columns wrap around (`x` is taken modulo `WIDTH`),
/// rows do not, so positions above the first row or below the last one
/// are never alive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<const WIDTH: usize, const HEIGHT: usize> {
    cells: Vec<bool>,
}

impl<const WIDTH: usize, const HEIGHT: usize> Grid<WIDTH, HEIGHT> {
    pub const SIZE: usize = WIDTH * HEIGHT;

    /// Allocates a field where every cell is dead.
    pub fn blank() -> Result<Self> {
        ensure!(WIDTH >= 1 && HEIGHT >= 1, "grid must be at least 1x1");
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(Self::SIZE)
            .with_context(|| format!("allocating {}x{} grid", WIDTH, HEIGHT))?;
        cells.resize(Self::SIZE, false);
        Ok(Self { cells })
    }

    /// Allocates a field filled by [`Grid::randomize`] from a `ChaCha8Rng` seeded with `seed`.
    pub fn random(seed: u64, density_threshold: u32) -> Result<Self> {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(seed);
        let mut result = Self::blank()?;
        result.randomize(&mut rng, density_threshold);
        Ok(result)
    }

    /// Parses rows of `.` (dead) and `*` (alive), one row per line.
    ///
    /// The text must hold exactly `HEIGHT` rows of exactly `WIDTH` cells.
    pub fn from_text(text: &str) -> Result<Self> {
        let mut result = Self::blank()?;
        let mut rows = 0;
        for (y, line) in text.lines().enumerate() {
            ensure!(y < HEIGHT, "expected {} rows, got more", HEIGHT);
            let line = line.trim_end_matches('\r');
            ensure!(
                line.chars().count() == WIDTH,
                "row {} has {} cells, expected {}",
                y,
                line.chars().count(),
                WIDTH
            );
            for (x, c) in line.chars().enumerate() {
                let state = match c {
                    DEAD_CHAR => false,
                    ALIVE_CHAR => true,
                    other => anyhow::bail!("unexpected character {:?} at ({}, {})", other, x, y),
                };
                result.set(x, y, state);
            }
            rows += 1;
        }
        ensure!(rows == HEIGHT, "expected {} rows, got {}", HEIGHT, rows);
        Ok(result)
    }

    #[inline]
    fn idx(x: usize, y: usize) -> usize {
        debug_assert!(y < HEIGHT);
        x % WIDTH + y * WIDTH
    }

    /// State of the cell at column `x` (wrapped) in row `y`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[Self::idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, state: bool) {
        self.cells[Self::idx(x, y)] = state;
    }

    /// Number of live cells among the 8 surrounding positions, always in `0..=8`.
    ///
    /// Columns wrap; rows outside the grid contribute nothing.
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> usize {
        let x = x % WIDTH;
        let x1 = if x == 0 { WIDTH - 1 } else { x - 1 };
        let x2 = if x == WIDTH - 1 { 0 } else { x + 1 };
        let row = |y: usize| {
            self.get(x1, y) as usize + self.get(x, y) as usize + self.get(x2, y) as usize
        };

        let mut neibs = self.get(x1, y) as usize + self.get(x2, y) as usize;
        if y > 0 {
            neibs += row(y - 1);
        }
        if y + 1 < HEIGHT {
            neibs += row(y + 1);
        }
        neibs
    }

    /// Draws one value from `0..Config::DENSITY_RANGE` per cell, row by row, and marks
    /// the cell alive when the draw is at least `density_threshold`.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R, density_threshold: u32) {
        for cell in self.cells.iter_mut() {
            *cell = rng.gen_range(0..Config::DENSITY_RANGE) >= density_threshold;
        }
    }

    /// Total number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks_exact(WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: u64 = 42;

    #[test]
    fn test_blank_is_dead() {
        let grid = Grid::<80, 25>::blank().unwrap();
        assert_eq!(grid.cells().len(), 80 * 25);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_get_wraps_columns() {
        let mut grid = Grid::<5, 3>::blank().unwrap();
        grid.set(1, 2, true);
        assert!(grid.get(6, 2));
        assert!(grid.get(11, 2));
        assert!(!grid.get(6, 1));
    }

    #[test]
    fn test_neighbors_in_range() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(SEED);
        for threshold in [0, 3, 5, 8, 10] {
            let mut grid = Grid::<16, 7>::blank().unwrap();
            grid.randomize(&mut rng, threshold);
            for y in 0..7 {
                for x in 0..16 {
                    assert!(grid.count_live_neighbors(x, y) <= 8);
                }
            }
        }

        let full = Grid::<6, 6>::from_text(&"******\n".repeat(6)).unwrap();
        assert_eq!(full.count_live_neighbors(2, 2), 8);
        assert_eq!(full.count_live_neighbors(0, 3), 8);
        assert_eq!(full.count_live_neighbors(0, 0), 5);
        assert_eq!(full.count_live_neighbors(5, 5), 5);
    }

    #[test]
    fn test_horizontal_wrap() {
        for y in 0..5 {
            let mut grid = Grid::<8, 5>::blank().unwrap();
            grid.set(0, y, true);
            assert_eq!(grid.count_live_neighbors(7, y), 1, "y={}", y);
            assert_eq!(grid.count_live_neighbors(6, y), 0, "y={}", y);

            let mut grid = Grid::<8, 5>::blank().unwrap();
            grid.set(7, y, true);
            assert_eq!(grid.count_live_neighbors(0, y), 1, "y={}", y);
        }
    }

    #[test]
    fn test_no_vertical_wrap() {
        let mut grid = Grid::<8, 5>::blank().unwrap();
        grid.set(3, 0, true);
        assert_eq!(grid.count_live_neighbors(3, 4), 0);
        assert_eq!(grid.count_live_neighbors(3, 1), 1);

        let mut grid = Grid::<8, 5>::blank().unwrap();
        grid.set(3, 4, true);
        assert_eq!(grid.count_live_neighbors(3, 0), 0);
        assert_eq!(grid.count_live_neighbors(4, 3), 1);
    }

    #[test]
    fn test_corner_wraps_diagonally() {
        let mut grid = Grid::<8, 5>::blank().unwrap();
        grid.set(7, 1, true);
        assert_eq!(grid.count_live_neighbors(0, 0), 1);
        assert_eq!(grid.count_live_neighbors(0, 2), 1);
    }

    #[test]
    fn test_randomize_density() {
        let grid = Grid::<80, 25>::random(SEED, 8).unwrap();
        let population = grid.population();
        // ~20% of 2000 cells
        assert!((300..500).contains(&population), "population={}", population);

        assert_eq!(Grid::<80, 25>::random(SEED, 0).unwrap().population(), 2000);
        assert_eq!(Grid::<80, 25>::random(SEED, Config::DENSITY_RANGE).unwrap().population(), 0);
    }

    #[test]
    fn test_randomize_is_seeded() {
        let a = Grid::<80, 25>::random(SEED, 8).unwrap();
        let b = Grid::<80, 25>::random(SEED, 8).unwrap();
        let c = Grid::<80, 25>::random(SEED + 1, 8).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_from_text() {
        let grid = Grid::<3, 2>::from_text(".*.\n**.\n").unwrap();
        assert_eq!(grid.cells(), &[false, true, false, true, true, false]);

        assert!(Grid::<3, 2>::from_text(".*.\n").is_err());
        assert!(Grid::<3, 2>::from_text(".*.\n**\n").is_err());
        assert!(Grid::<3, 2>::from_text(".*.\n*#.\n").is_err());
        assert!(Grid::<3, 2>::from_text("...\n...\n...\n").is_err());
    }
}

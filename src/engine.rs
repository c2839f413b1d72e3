use crate::Grid;
use anyhow::Result;

/// Conway's rule: a live cell survives with 2 or 3 neighbours, a dead one is born with exactly 3.
#[inline]
pub fn next_state(alive: bool, neighbors: usize) -> bool {
    matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3))
}

impl<const WIDTH: usize, const HEIGHT: usize> Grid<WIDTH, HEIGHT> {
    /// Writes the generation following `self` into `dst`, overwriting every cell of it.
    pub fn evolve_into(&self, dst: &mut Self) {
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                let neibs = self.count_live_neighbors(x, y);
                dst.set(x, y, next_state(self.get(x, y), neibs));
            }
        }
    }
}

/// The displayed generation together with the scratch buffer the next one is computed into.
///
/// Both buffers are allocated once; each step fills the scratch buffer and the two trade places.
pub struct Simulation<const WIDTH: usize, const HEIGHT: usize> {
    current: Grid<WIDTH, HEIGHT>,
    next: Grid<WIDTH, HEIGHT>,
    generation: u64,
}

impl<const WIDTH: usize, const HEIGHT: usize> Simulation<WIDTH, HEIGHT> {
    pub fn new(initial: Grid<WIDTH, HEIGHT>) -> Result<Self> {
        Ok(Self {
            current: initial,
            next: Grid::blank()?,
            generation: 0,
        })
    }

    pub fn current(&self) -> &Grid<WIDTH, HEIGHT> {
        &self.current
    }

    /// Number of steps taken since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn step(&mut self) {
        self.current.evolve_into(&mut self.next);
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
    }

    pub fn update(&mut self, n: u64) {
        for _ in 0..n {
            self.step();
        }
    }
}

use crate::grid::{ALIVE_CHAR, DEAD_CHAR};
use crate::Grid;
use anyhow::{Context, Result};

/// Text of one generation: `WIDTH` cell characters and a `'\n'` per row.
///
/// The buffer is sized once and rewritten in full on every [`FrameBuffer::fill`].
pub struct FrameBuffer<const WIDTH: usize, const HEIGHT: usize> {
    text: String,
}

impl<const WIDTH: usize, const HEIGHT: usize> FrameBuffer<WIDTH, HEIGHT> {
    pub const LEN: usize = (WIDTH + 1) * HEIGHT;

    pub fn new() -> Result<Self> {
        let mut text = String::new();
        text.try_reserve_exact(Self::LEN)
            .context("allocating frame buffer")?;
        Ok(Self { text })
    }

    pub fn fill(&mut self, grid: &Grid<WIDTH, HEIGHT>) {
        self.text.clear();
        for row in grid.rows() {
            self.text
                .extend(row.iter().map(|&c| if c { ALIVE_CHAR } else { DEAD_CHAR }));
            self.text.push('\n');
        }
        debug_assert_eq!(self.text.len(), Self::LEN);
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn capacity(&self) -> usize {
        self.text.capacity()
    }
}

use std::time::Duration;
use tracing::Level;

/// Compile-time settings of the terminal simulator.
pub struct Config;

impl Config {
    pub const WIDTH: usize = 80;
    pub const HEIGHT: usize = 25;

    /// Target time between two rendered generations.
    pub const FRAME_TIME: Duration = Duration::from_millis(100);

    /// Number of distinct values a single randomization draw can take.
    pub const DENSITY_RANGE: u32 = 10;

    /// A cell starts alive when its draw from `0..DENSITY_RANGE` is at least this,
    /// so roughly 20% of the cells start alive.
    pub const DENSITY_THRESHOLD: u32 = 8;

    /// Most verbose level written to stderr. Anything chattier would land
    /// between frames on the same terminal.
    pub const LOG_LEVEL: Level = Level::WARN;

    /// Room for one frame plus the cursor-home sequence in the output buffer.
    pub const OUTPUT_BUFFER: usize = (Self::WIDTH + 1) * Self::HEIGHT + 16;
}

#![warn(clippy::all)]

mod app;
mod engine;
mod frame;
mod grid;
mod render;
mod utils;

pub use app::{App, RunSummary};
pub use engine::{next_state, Simulation};
pub use frame::FrameBuffer;
pub use grid::{Grid, ALIVE_CHAR, DEAD_CHAR};
pub use render::{Renderer, TerminalRenderer};
pub use utils::{init_logging, log_subscriber, Config, FpsLimiter, Pause, StopFlag};

/// The 80x25 field shown on the terminal.
pub type Board = Grid<{ Config::WIDTH }, { Config::HEIGHT }>;

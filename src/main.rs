#![warn(clippy::all)]

use anyhow::{Context, Result};
use conway_tty::{init_logging, App, Board, Config, FpsLimiter, StopFlag, TerminalRenderer};
use std::{
    io::{self, BufWriter},
    time::{SystemTime, UNIX_EPOCH},
};
use tracing::info;

fn main() -> Result<()> {
    init_logging()?;

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    let board = Board::random(seed, Config::DENSITY_THRESHOLD)
        .context("initializing the first generation")?;
    info!(seed, population = board.population(), "initial generation ready");

    let stop = StopFlag::on_ctrl_c()?;
    let out = BufWriter::with_capacity(Config::OUTPUT_BUFFER, io::stdout().lock());
    let mut app = App::new(board, TerminalRenderer::new(out), FpsLimiter::default())?;
    let summary = app.run(&stop)?;

    info!(
        generations = summary.generations,
        population = summary.population,
        fps = app.pause().fps(),
        "simulation stopped"
    );
    Ok(())
}

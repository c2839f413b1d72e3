use crate::{Config, FrameBuffer, Grid, Pause, Renderer, Simulation, StopFlag};
use anyhow::Result;
use std::time::Duration;
use tracing::{debug, warn};

/// Outcome of a finished run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub generations: u64,
    pub population: usize,
}

/// Drives the simulation: step, render the new generation, pause, repeat.
pub struct App<R, P, const WIDTH: usize, const HEIGHT: usize> {
    life: Simulation<WIDTH, HEIGHT>,
    frame: FrameBuffer<WIDTH, HEIGHT>,
    renderer: R,
    pause: P,
    frame_time: Duration,
}

impl<R: Renderer, P: Pause, const WIDTH: usize, const HEIGHT: usize> App<R, P, WIDTH, HEIGHT> {
    pub fn new(initial: Grid<WIDTH, HEIGHT>, renderer: R, pause: P) -> Result<Self> {
        Ok(Self {
            life: Simulation::new(initial)?,
            frame: FrameBuffer::new()?,
            renderer,
            pause,
            frame_time: Config::FRAME_TIME,
        })
    }

    /// Overrides [`Config::FRAME_TIME`]. A zero frame time runs generations
    /// back to back, which is what headless runs and tests want.
    pub fn with_frame_time(mut self, frame_time: Duration) -> Self {
        self.frame_time = frame_time;
        self
    }

    pub fn simulation(&self) -> &Simulation<WIDTH, HEIGHT> {
        &self.life
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn pause(&self) -> &P {
        &self.pause
    }

    /// Advances one generation and shows it.
    pub fn tick(&mut self) -> Result<()> {
        self.life.step();
        self.frame.fill(self.life.current());
        if let Err(err) = self.renderer.present(self.frame.as_str()) {
            warn!(generation = self.life.generation(), "failed to present frame: {:#}", err);
            return Err(err);
        }
        debug!(generation = self.life.generation(), "frame presented");
        self.pause.pause(self.frame_time);
        Ok(())
    }

    /// Runs until `stop` is raised; the flag is checked before every generation.
    pub fn run(&mut self, stop: &StopFlag) -> Result<RunSummary> {
        self.renderer.begin()?;
        while !stop.is_stopped() {
            self.tick()?;
        }
        Ok(self.summary())
    }

    /// Runs exactly `ticks` generations.
    pub fn run_for(&mut self, ticks: u64) -> Result<RunSummary> {
        self.renderer.begin()?;
        for _ in 0..ticks {
            self.tick()?;
        }
        Ok(self.summary())
    }

    fn summary(&self) -> RunSummary {
        RunSummary {
            generations: self.life.generation(),
            population: self.life.current().population(),
        }
    }
}

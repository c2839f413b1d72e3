use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Capability to wait between two frames.
pub trait Pause {
    fn pause(&mut self, frame_time: Duration);
}

/// Sleeps for whatever is left of the frame time since the previous pause ended.
pub struct FpsLimiter {
    frame_timer: Instant,
    frametime_smoothed: f64,
}

impl Default for FpsLimiter {
    fn default() -> Self {
        Self {
            frame_timer: Instant::now(),
            frametime_smoothed: 0.,
        }
    }
}

impl FpsLimiter {
    pub fn fps(&self) -> f64 {
        1. / self.frametime_smoothed
    }
}

impl Pause for FpsLimiter {
    fn pause(&mut self, frame_time: Duration) {
        let before_wait = self.frame_timer.elapsed();

        if frame_time > before_wait {
            sleep(frame_time - before_wait);
        }

        let after_wait = self.frame_timer.elapsed();
        let frametime = after_wait.as_secs_f64();
        if self.frametime_smoothed == 0. {
            self.frametime_smoothed = frametime;
        } else {
            self.frametime_smoothed += (frametime - self.frametime_smoothed) * 0.1;
        }

        self.frame_timer = Instant::now();
    }
}

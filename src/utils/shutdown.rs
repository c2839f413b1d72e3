use anyhow::{Context, Result};
use std::{
    future::Future,
    io,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};
use tracing::{info, warn};

/// Exit status after a second interrupt, as a shell reports death by SIGINT.
const FORCED_EXIT_CODE: i32 = 130;

/// Cooperative cancellation token, checked by the main loop once per generation.
#[derive(Clone, Default)]
pub struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Returns a flag raised by the first Ctrl-C (SIGINT) delivered to the process.
    ///
    /// A second Ctrl-C exits right away, so a loop stuck on a blocked terminal can
    /// still be killed. Signals are awaited on a background thread driving a
    /// single-threaded runtime.
    pub fn on_ctrl_c() -> Result<Self> {
        let flag = Self::new();
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_io()
            .build()
            .context("building signal runtime")?;

        let handle = flag.clone();
        std::thread::Builder::new()
            .name("ctrl-c".into())
            .spawn(move || {
                match runtime.block_on(watch_interrupts(&handle, tokio::signal::ctrl_c)) {
                    Ok(()) => {
                        warn!("second interrupt, exiting immediately");
                        std::process::exit(FORCED_EXIT_CODE);
                    }
                    Err(err) => warn!(%err, "cannot listen for interrupt"),
                }
            })
            .context("spawning signal thread")?;
        Ok(flag)
    }
}

/// Raises `flag` on the first interrupt and returns once a second one arrives.
async fn watch_interrupts<F, Fut>(flag: &StopFlag, mut interrupt: F) -> io::Result<()>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = io::Result<()>>,
{
    interrupt().await?;
    info!("interrupt received, stopping");
    flag.stop();
    interrupt().await
}

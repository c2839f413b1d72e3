mod config;
mod fps_limit;
mod logging;
mod shutdown;

pub use config::Config;
pub use fps_limit::{FpsLimiter, Pause};
pub use logging::{init_logging, log_subscriber};
pub use shutdown::StopFlag;

//! Platform-agnostic core of the chronoface watchface: the pure time
//! formatter, time sources, refresh timing, config and logging.

pub mod clock;
pub mod config;
pub mod log;
pub mod schedule;
pub mod source;

pub use clock::{FormattedClock, format_clock};
pub use config::Config;
pub use schedule::Granularity;
pub use source::{FixedClock, SystemClock, TimeSource, snapshot};

pub mod clock;
pub mod error;
pub mod time;

pub use clock::{FixedClock, HostClock, LocalClock, UtcClock};
pub use error::*;
pub use time::ClockTime;

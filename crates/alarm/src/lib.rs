//! Wall-clock alarm: sample the time of day on a fixed period and report
//! every configured target that matches to the second.

pub mod alarm;

pub use alarm::Alarm;
pub use clockwatch_core::{
    ClockError, ClockTime, FixedClock, HostClock, LocalClock, TimeField, UtcClock,
};
pub use tokio::sync::mpsc::error::TryRecvError;

//! Host clock seam.
//!
//! The alarm samples "now" through [`HostClock`] once per tick. Production
//! code uses [`LocalClock`]; [`FixedClock`] pins the reading for
//! deterministic callers.

use chrono::{Local, NaiveTime, Utc};

use crate::time::ClockTime;

/// Source of the current wall-clock time of day.
pub trait HostClock: Send + Sync + 'static {
    fn now(&self) -> NaiveTime;
}

/// Host local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl HostClock for LocalClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UtcClock;

impl HostClock for UtcClock {
    fn now(&self) -> NaiveTime {
        Utc::now().time()
    }
}

/// Always reports the same time of day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(NaiveTime);

impl FixedClock {
    pub fn new(time: NaiveTime) -> Self {
        Self(time)
    }

    pub fn at(time: ClockTime) -> Self {
        Self(time.into())
    }
}

impl HostClock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.0
    }
}

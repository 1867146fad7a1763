use chrono::{DateTime, Datelike, Local};
use std::fmt::Debug;

/// Wall-clock source, injectable so date-dependent output can be pinned in tests.
pub trait Clock: Debug + Send + Sync {
    fn now(&self) -> DateTime<Local>;

    /// Current calendar year on the local clock.
    fn year(&self) -> i32 {
        self.now().year()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

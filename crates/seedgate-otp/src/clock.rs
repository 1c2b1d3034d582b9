//! Time source for code generation

use std::time::{SystemTime, UNIX_EPOCH};

/// Seconds since the Unix epoch
pub trait Clock {
    fn unix_time(&self) -> u64;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_time(&self) -> u64 {
        // A clock set before 1970 reads as the epoch
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}

/// A clock stuck at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn unix_time(&self) -> u64 {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn unix_time(&self) -> u64 {
        (**self).unix_time()
    }
}

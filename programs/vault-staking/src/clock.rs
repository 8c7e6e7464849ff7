use anchor_lang::prelude::*;

/// Source of the current unix timestamp.
///
/// Transitions take the clock as a parameter and read it once per call, so tests
/// can step time forward without waiting on a real validator.
pub trait TimeSource {
    fn unix_timestamp(&self) -> Result<i64>;
}

/// Reads the `Clock` sysvar of the executing transaction.
pub struct SysvarClock;

impl TimeSource for SysvarClock {
    fn unix_timestamp(&self) -> Result<i64> {
        Ok(Clock::get()?.unix_timestamp)
    }
}

/// Clock frozen at a given timestamp.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl FixedClock {
    pub fn advance(&mut self, seconds: i64) {
        self.0 = self.0.saturating_add(seconds);
    }
}

impl TimeSource for FixedClock {
    fn unix_timestamp(&self) -> Result<i64> {
        Ok(self.0)
    }
}

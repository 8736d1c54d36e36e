use std::time::Duration;

use chrono::{DateTime, Utc};

/// Source of wall-clock instants.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Blocking pause between sends.
pub trait Sleeper {
    fn sleep(&self, duration: Duration);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_moves_forward() {
        let clock = SystemClock;
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }

    #[test]
    fn zero_sleep_returns_immediately() {
        let started = std::time::Instant::now();
        ThreadSleeper.sleep(Duration::ZERO);
        assert!(started.elapsed() < Duration::from_millis(50));
    }
}

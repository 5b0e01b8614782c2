//! Simulated-time scheduling.
//!
//! The game never reads a wall clock while simulating: every timer is polled
//! with the session's own `now`, so a test can drive minutes of play in a
//! loop and get the same result every time.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::constants::{COLLISION_TICK, SCORE_TICK};

/// A repeating timer.
#[derive(Debug, Clone)]
pub struct Interval {
    period: Duration,
    next_due: Duration,
}

impl Interval {
    /// First fire is one period after `start`.
    pub fn new(period: Duration, start: Duration) -> Self {
        Self {
            period,
            next_due: start + period,
        }
    }

    /// Number of periods that came due up to `now`.
    pub fn poll(&mut self, now: Duration) -> u32 {
        let mut due = 0;
        while self.next_due <= now {
            self.next_due += self.period;
            due += 1;
        }
        due
    }
}

/// A one-shot deferred flag. Re-arming resets the deadline.
#[derive(Debug, Clone, Default)]
pub struct Timeout {
    deadline: Option<Duration>,
}

impl Timeout {
    pub fn arm(&mut self, now: Duration, after: Duration) {
        self.deadline = Some(now + after);
    }

    /// Returns `true` exactly once, on the first poll at or after the deadline.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left before the deadline, if armed.
    pub fn remaining(&self, now: Duration) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_sub(now))
    }
}

/// Cancellation flag shared by every timer of a session.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    /// Returns `true` if this call did the cancelling.
    pub fn cancel(&self) -> bool {
        !self.0.replace(true)
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Which periodic handler came due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Score,
    Collision,
}

/// Ticks that came due in one poll. Yields collision ticks before score ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Due {
    pub collision: u32,
    pub score: u32,
}

impl Iterator for Due {
    type Item = Tick;

    fn next(&mut self) -> Option<Tick> {
        if self.collision > 0 {
            self.collision -= 1;
            Some(Tick::Collision)
        } else if self.score > 0 {
            self.score -= 1;
            Some(Tick::Score)
        } else {
            None
        }
    }
}

/// The two periodic timers that drive a session.
#[derive(Debug, Clone)]
pub struct Timers {
    score: Interval,
    collision: Interval,
    token: CancelToken,
}

impl Timers {
    pub fn start(now: Duration) -> Self {
        Self {
            score: Interval::new(SCORE_TICK, now),
            collision: Interval::new(COLLISION_TICK, now),
            token: CancelToken::default(),
        }
    }

    /// Ticks due up to `now`. Nothing once cancelled.
    pub fn due(&mut self, now: Duration) -> Due {
        if self.token.is_cancelled() {
            return Due::default();
        }
        Due {
            collision: self.collision.poll(now),
            score: self.score.poll(now),
        }
    }

    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    pub fn cancel(&self) -> bool {
        self.token.cancel()
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_catches_up_on_long_polls() {
        let mut i = Interval::new(Duration::from_millis(100), Duration::ZERO);
        assert_eq!(i.poll(Duration::from_millis(99)), 0);
        assert_eq!(i.poll(Duration::from_millis(350)), 3);
        assert_eq!(i.poll(Duration::from_millis(399)), 0);
        assert_eq!(i.poll(Duration::from_millis(400)), 1);
    }

    #[test]
    fn cancelled_token_is_shared_between_clones() {
        let token = CancelToken::default();
        let other = token.clone();
        assert!(other.cancel());
        assert!(token.is_cancelled());
        assert!(!token.cancel());
    }
}

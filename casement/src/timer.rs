use std::time::{Duration, Instant};

/// A single pending deadline. Arming replaces the previous deadline, so
/// at most one is ever outstanding; it fires exactly once.
#[derive(Debug, Default)]
pub struct OneShot {
    deadline: Option<Instant>,
}

impl OneShot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule the timer `delay` from `now`, replacing any pending
    /// deadline.
    pub fn arm(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// True exactly once, the first time it is polled past the deadline.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Pending deadline, for host sleep scheduling.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}

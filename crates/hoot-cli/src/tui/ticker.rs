//! Game tick timer
//!
//! The recurring tick is a scoped resource: armed when the game enters
//! Running, disarmed on every exit from Running and on teardown. While
//! disarmed nothing fires, so a leaked periodic callback cannot mutate
//! state after the run ends.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct TickTimer {
    interval: Duration,
    deadline: Option<Instant>,
}

impl TickTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    /// Arm the timer; the first tick fires one interval from now.
    pub fn arm(&mut self) {
        self.deadline = Some(Instant::now() + self.interval);
    }

    /// Disarm; any pending tick is forgotten.
    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left until the next tick, None while disarmed.
    pub fn poll_timeout(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    /// True once per elapsed deadline. The next deadline is a whole
    /// interval after the previous one, not after "now", keeping the
    /// cadence fixed even when the loop runs late.
    pub fn consume_due(&mut self) -> bool {
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => {
                self.deadline = Some(deadline + self.interval);
                true
            }
            _ => false,
        }
    }
}

use web_time::{Duration, Instant};

/// Source of monotonic instants for the game timer.
pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Copy, Clone, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Elapsed-time accounting for one game.
///
/// Time only accrues between [`Stopwatch::resume`] and [`Stopwatch::pause`];
/// once frozen it never runs again.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Stopwatch {
    accumulated: Duration,
    running_since: Option<Instant>,
    frozen: bool,
}

impl Stopwatch {
    pub const fn new() -> Self {
        Self {
            accumulated: Duration::ZERO,
            running_since: None,
            frozen: false,
        }
    }

    pub const fn is_running(&self) -> bool {
        self.running_since.is_some()
    }

    pub const fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn resume(&mut self, now: Instant) {
        if !self.frozen && self.running_since.is_none() {
            self.running_since = Some(now);
        }
    }

    pub fn pause(&mut self, now: Instant) {
        if let Some(since) = self.running_since.take() {
            self.accumulated += now.saturating_duration_since(since);
        }
    }

    pub fn freeze(&mut self, now: Instant) {
        self.pause(now);
        self.frozen = true;
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        match self.running_since {
            Some(since) => self.accumulated + now.saturating_duration_since(since),
            None => self.accumulated,
        }
    }
}

use std::time::{Duration, Instant};

/// Number that animates toward its target over a fixed duration.
///
/// Shows `round(target × (0.2 + 0.8 p))` where `p` is elapsed progress in
/// `[0, 1]`. Reads 0 until the first tick starts the clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountUp {
    target: u64,
    duration: Duration,
    started: Option<Instant>,
    display: u64,
}

impl CountUp {
    pub fn new(target: u64, duration: Duration) -> Self {
        Self {
            target,
            duration,
            started: None,
            display: 0,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn display(&self) -> u64 {
        self.display
    }

    pub fn is_done(&self) -> bool {
        self.display == self.target && self.started.is_some()
    }

    pub fn tick(&mut self, now: Instant) {
        let started = *self.started.get_or_insert(now);
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            (now.saturating_duration_since(started).as_secs_f64() / self.duration.as_secs_f64())
                .min(1.0)
        };
        self.display = (self.target as f64 * (0.2 + 0.8 * progress)).round() as u64;
    }
}

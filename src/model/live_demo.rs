use std::time::{Duration, Instant};

use crate::domain::content::DEMO_LINES;

/// Step from which the detection banner is shown
pub const BANNER_STEP: usize = 3;

/// Canned detection log that lights one more line per interval and wraps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveDemo {
    step: usize,
    interval: Duration,
    last_step: Option<Instant>,
}

impl LiveDemo {
    pub fn new(interval: Duration) -> Self {
        Self {
            step: 0,
            interval,
            last_step: None,
        }
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn lines(&self) -> &'static [&'static str] {
        &DEMO_LINES
    }

    /// Lines up to and including the current step are lit
    pub fn is_lit(&self, index: usize) -> bool {
        index <= self.step
    }

    pub fn is_current(&self, index: usize) -> bool {
        index == self.step
    }

    pub fn shows_banner(&self) -> bool {
        self.step >= BANNER_STEP
    }

    pub fn tick(&mut self, now: Instant) {
        let Some(last) = self.last_step else {
            self.last_step = Some(now);
            return;
        };
        if self.interval.is_zero() {
            return;
        }
        let mut last = last;
        while now.saturating_duration_since(last) >= self.interval {
            self.step = (self.step + 1) % DEMO_LINES.len();
            last += self.interval;
        }
        self.last_step = Some(last);
    }
}

impl Default for LiveDemo {
    fn default() -> Self {
        Self::new(Duration::from_millis(2000))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ticked(demo: &mut LiveDemo, start: Instant, ms: u64) {
        demo.tick(start + Duration::from_millis(ms));
    }

    #[test]
    fn test_starts_on_first_line_without_banner() {
        let demo = LiveDemo::default();
        assert_eq!(demo.step(), 0);
        assert!(demo.is_lit(0));
        assert!(!demo.is_lit(1));
        assert!(!demo.shows_banner());
    }

    #[test]
    fn test_steps_every_interval_and_wraps() {
        let start = Instant::now();
        let mut demo = LiveDemo::default();
        demo.tick(start);
        ticked(&mut demo, start, 1_999);
        assert_eq!(demo.step(), 0);
        ticked(&mut demo, start, 2_000);
        assert_eq!(demo.step(), 1);
        ticked(&mut demo, start, 6_000);
        assert_eq!(demo.step(), 3);
        assert!(demo.shows_banner());
        ticked(&mut demo, start, 10_000);
        assert_eq!(demo.step(), 0);
        assert!(!demo.shows_banner());
    }

    #[test]
    fn test_late_tick_catches_up() {
        let start = Instant::now();
        let mut demo = LiveDemo::new(Duration::from_millis(100));
        demo.tick(start);
        ticked(&mut demo, start, 450);
        assert_eq!(demo.step(), 4);
        assert!(demo.is_current(4));
    }
}

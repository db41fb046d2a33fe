use std::time::{Duration, Instant};

use crate::model::count_up::CountUp;

pub const TOTAL_SAMPLES: u64 = 50_000;
pub const ATTACK_TYPES: u64 = 6;
pub const FEATURES: u64 = 255;
/// Share of normal traffic in the capture, in percent
pub const NORMAL_PERCENT: u16 = 85;

/// Packet capture leaf: three counters animating in together
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PacketCapture {
    samples: CountUp,
    attack_types: CountUp,
    features: CountUp,
}

impl PacketCapture {
    pub fn new(duration: Duration) -> Self {
        Self {
            samples: CountUp::new(TOTAL_SAMPLES, duration),
            attack_types: CountUp::new(ATTACK_TYPES, duration),
            features: CountUp::new(FEATURES, duration),
        }
    }

    pub fn samples(&self) -> &CountUp {
        &self.samples
    }

    pub fn attack_types(&self) -> &CountUp {
        &self.attack_types
    }

    pub fn features(&self) -> &CountUp {
        &self.features
    }

    pub fn normal_percent(&self) -> u16 {
        NORMAL_PERCENT
    }

    pub fn attack_percent(&self) -> u16 {
        100 - NORMAL_PERCENT
    }

    pub fn tick(&mut self, now: Instant) {
        self.samples.tick(now);
        self.attack_types.tick(now);
        self.features.tick(now);
    }
}

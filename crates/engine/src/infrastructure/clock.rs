//! Clock and random implementations.

use crate::infrastructure::ports::{ClockPort, RandomPort};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// System clock - uses real time.
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// System random - uses real randomness.
pub struct SystemRandom;

impl SystemRandom {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPort for SystemRandom {
    fn gen_range(&self, min: i32, max: i32) -> i32 {
        use rand::Rng;
        rand::thread_rng().gen_range(min..=max)
    }

    fn gen_jitter(&self, min: f64, max: f64) -> f64 {
        use rand::Rng;
        rand::thread_rng().gen_range(min..max)
    }

    fn gen_uuid(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Fixed clock for testing.
#[cfg(test)]
pub struct FixedClock(pub DateTime<Utc>);

#[cfg(test)]
impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Fixed random for testing: always the same integer and jitter.
#[cfg(test)]
pub struct FixedRandom {
    pub value: i32,
    pub jitter: f64,
}

#[cfg(test)]
impl RandomPort for FixedRandom {
    fn gen_range(&self, _min: i32, _max: i32) -> i32 {
        self.value
    }

    fn gen_jitter(&self, _min: f64, _max: f64) -> f64 {
        self.jitter
    }

    fn gen_uuid(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Scripted random for testing: pops integers front-to-back, then falls
/// back to the range minimum.
#[cfg(test)]
pub struct SequenceRandom {
    values: std::sync::Mutex<std::collections::VecDeque<i32>>,
    pub jitter: f64,
}

#[cfg(test)]
impl SequenceRandom {
    pub fn new(values: impl IntoIterator<Item = i32>, jitter: f64) -> Self {
        Self {
            values: std::sync::Mutex::new(values.into_iter().collect()),
            jitter,
        }
    }
}

#[cfg(test)]
impl RandomPort for SequenceRandom {
    fn gen_range(&self, min: i32, _max: i32) -> i32 {
        match self.values.lock() {
            Ok(mut values) => values.pop_front().unwrap_or(min),
            Err(_) => min,
        }
    }

    fn gen_jitter(&self, _min: f64, _max: f64) -> f64 {
        self.jitter
    }

    fn gen_uuid(&self) -> Uuid {
        Uuid::new_v4()
    }
}

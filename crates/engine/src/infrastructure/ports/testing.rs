//! Testability ports for injecting time and randomness.

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Randomness behind a port so tests can script exact sequences.
pub trait RandomPort: Send + Sync {
    /// Uniform integer in `[min, max]`, both inclusive.
    fn gen_range(&self, min: i32, max: i32) -> i32;
    /// Uniform float in `[min, max)`; used for reward jitter.
    fn gen_jitter(&self, min: f64, max: f64) -> f64;
    fn gen_uuid(&self) -> Uuid;
}

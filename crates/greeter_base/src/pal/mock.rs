use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

use super::traits::Pal;

/* 📖 # Why does MockPal sleep by advancing its clock?

Tests of the delayed greeting should be instant and deterministic.
Advancing the mock clock keeps `now()` consistent with the requested sleeps,
and recording them lets tests assert on the exact delay.
*/

/// In-memory PAL implementation for testing.
///
/// # Examples
///
/// ```
/// use greeter_base::{MockPal, Pal};
///
/// let mock = MockPal::new();
/// assert_eq!(mock.now().to_string(), "2000-01-01 00:00:00");
/// ```
#[derive(Debug, Clone)]
pub struct MockPal {
    now: Arc<Mutex<NaiveDateTime>>,
    sleeps: Arc<Mutex<Vec<Duration>>>,
}

impl MockPal {
    /// Create a MockPal whose clock reads 2000-01-01 00:00:00.
    pub fn new() -> Self {
        let epoch = NaiveDate::from_ymd_opt(2000, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .unwrap_or_default();
        Self::at(epoch)
    }

    /// Create a MockPal whose clock reads the given time.
    pub fn at(now: NaiveDateTime) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
            sleeps: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set the time returned by `now()`.
    pub fn set_now(&self, now: NaiveDateTime) {
        *self.now.lock().unwrap() = now;
    }

    /// Move the mock clock forward.
    pub fn advance(&self, duration: Duration) {
        let delta = TimeDelta::from_std(duration).unwrap_or(TimeDelta::MAX);
        let mut now = self.now.lock().unwrap();
        *now = now.checked_add_signed(delta).unwrap_or(NaiveDateTime::MAX);
    }

    /// All durations passed to `sleep`, in call order.
    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }
}

impl Default for MockPal {
    fn default() -> Self {
        Self::new()
    }
}

impl Pal for MockPal {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock().unwrap()
    }

    fn sleep(&self, duration: Duration) {
        self.sleeps.lock().unwrap().push(duration);
        self.advance(duration);
    }
}

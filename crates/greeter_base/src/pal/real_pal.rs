use std::time::Duration;

use chrono::{Local, NaiveDateTime};
use tracing::{instrument, trace};

use super::traits::Pal;

/// Concrete PAL implementation backed by the host clock.
#[derive(Debug, Default)]
pub struct RealPal {}

impl RealPal {
    pub fn new() -> Self {
        Self {}
    }
}

impl Pal for RealPal {
    fn now(&self) -> NaiveDateTime {
        let now = Local::now().naive_local();
        trace!(%now, "read local clock");
        now
    }

    #[instrument(skip(self))]
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

//! Wall clock for the firmware host
//!
//! The board has no backup-powered RTC: the clock is seeded with the build
//! timestamp (stamped by build.rs) and advances with embassy's monotonic
//! timer. Good enough for bring-up; a product would sync over BLE or NTP.

use cadran_core::traits::Clock;
use chrono::{DateTime, NaiveDateTime, TimeDelta};
use embassy_time::Instant;

// UTC_TIME: build-time epoch seconds
include!(concat!(env!("OUT_DIR"), "/utc.rs"));

pub struct SystemClock {
    epoch: NaiveDateTime,
    base: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        let epoch = DateTime::from_timestamp(UTC_TIME, 0)
            .map(|t| t.naive_utc())
            .unwrap_or(NaiveDateTime::UNIX_EPOCH);
        Self {
            epoch,
            base: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now_utc(&self) -> NaiveDateTime {
        self.epoch + TimeDelta::milliseconds(self.base.elapsed().as_millis() as i64)
    }
}

//! Wall clock trait

use chrono::NaiveDateTime;

/// Trait for the host wall clock
///
/// The engine samples this on every draw, on visibility changes, and on
/// timezone broadcasts; it never caches time across draw cycles.
pub trait Clock {
    /// Current wall-clock time in UTC
    fn now_utc(&self) -> NaiveDateTime;
}

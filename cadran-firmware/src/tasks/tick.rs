//! Tick task for time-based redraws
//!
//! Delivers the host's time tick: at least once per minute in every mode,
//! once per second while the face is visible and interactive.

use core::sync::atomic::{AtomicBool, Ordering};

use defmt::info;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Ticker};

use cadran_core::engine::{AMBIENT_UPDATE_SECS, INTERACTIVE_UPDATE_SECS};

/// Whether the interactive (per-second) cadence is in effect
///
/// Written by the controller after every engine state change.
pub static FAST_TICK: AtomicBool = AtomicBool::new(false);

/// Signal to notify the controller of a tick
pub static TICK_SIGNAL: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Tick task - sends periodic tick signals at the current cadence
#[embassy_executor::task]
pub async fn tick_task() {
    info!("Tick task started");

    // One-second base ticker so cadence changes take effect within a second
    let mut ticker = Ticker::every(Duration::from_secs(INTERACTIVE_UPDATE_SECS));
    let mut elapsed = 0u64;

    loop {
        ticker.next().await;
        elapsed += 1;

        let period = if FAST_TICK.load(Ordering::Relaxed) {
            INTERACTIVE_UPDATE_SECS
        } else {
            AMBIENT_UPDATE_SECS
        };

        if elapsed >= period {
            elapsed = 0;
            TICK_SIGNAL.signal(());
        }
    }
}

//! Host-side implementation of the engine's callback trait
//!
//! Redraw requests are forwarded to the controller loop through a signal;
//! style configuration only gets logged (there is no system chrome to
//! suppress on bare hardware). The timezone subscription toggles whether
//! the controller forwards timezone updates to the engine.

use cadran_core::traits::{FaceStyle, WatchHost};
use defmt::{debug, info};

use crate::channels::REDRAW;

#[derive(Default)]
pub struct FirmwareHost {
    timezone_feed: bool,
}

impl FirmwareHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the engine currently wants timezone broadcasts
    pub fn timezone_feed_enabled(&self) -> bool {
        self.timezone_feed
    }
}

impl WatchHost for FirmwareHost {
    fn configure_style(&mut self, style: FaceStyle) {
        info!("face style requested: {}", style);
    }

    fn request_redraw(&mut self) {
        REDRAW.signal(());
    }

    fn subscribe_timezone(&mut self) {
        debug!("timezone feed subscribed");
        self.timezone_feed = true;
    }

    fn unsubscribe_timezone(&mut self) {
        debug!("timezone feed unsubscribed");
        self.timezone_feed = false;
    }
}

//! Static communication channels between tasks

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

/// Button presses translated by the input task
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum InputAction {
    /// Key A: enter/leave ambient mode
    ToggleAmbient,
    /// Key B: show/hide the face
    ToggleVisibility,
    /// Key X: advance the timezone offset by one hour
    BumpTimezone,
}

/// Input events for the controller
pub static INPUT_CHANNEL: Channel<CriticalSectionRawMutex, InputAction, 4> = Channel::new();

/// Repaint requests issued by the engine via its host callback
pub static REDRAW: Signal<CriticalSectionRawMutex, ()> = Signal::new();

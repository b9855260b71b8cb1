//! Lifecycle state machine definition
//!
//! Visibility and ambient-mode callbacks are the only drivers of state
//! transitions; everything else the engine does reads the current state.

use super::events::LifecycleEvent;

/// Watch face lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaceState {
    /// Engine constructed, no visibility callback received yet
    Created,
    /// Watch face hidden (another face or app is in front)
    Invisible,
    /// Shown at full refresh rate and color depth
    VisibleInteractive,
    /// Shown in low-power ambient rendering
    VisibleAmbient,
}

impl FaceState {
    /// Check if the watch face is currently shown
    pub fn is_visible(&self) -> bool {
        matches!(self, FaceState::VisibleInteractive | FaceState::VisibleAmbient)
    }

    /// Check if the display is in ambient mode
    pub fn is_ambient(&self) -> bool {
        matches!(self, FaceState::VisibleAmbient)
    }

    /// Check if the host should run the fast (sub-minute) redraw timer
    ///
    /// Only while visible and interactive; ambient and hidden faces get
    /// by on the once-per-minute tick.
    pub fn timer_should_run(&self) -> bool {
        matches!(self, FaceState::VisibleInteractive)
    }

    /// Process a lifecycle event and return the next state
    ///
    /// This is the core state transition logic.
    pub fn transition(self, event: LifecycleEvent) -> Self {
        use FaceState::*;
        use LifecycleEvent::*;

        match (self, event) {
            // First visibility callback leaves the Created pseudo-state
            (Created, Shown) => VisibleInteractive,
            (Created, Hidden) => Invisible,

            // Invisible transitions
            (Invisible, Shown) => VisibleInteractive,

            // Visible transitions
            (VisibleInteractive, EnterAmbient) => VisibleAmbient,
            (VisibleInteractive, Hidden) => Invisible,
            (VisibleAmbient, ExitAmbient) => VisibleInteractive,
            (VisibleAmbient, Hidden) => Invisible,

            // Default: stay in current state
            _ => self,
        }
    }
}

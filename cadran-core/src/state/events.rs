//! Events that trigger lifecycle state transitions

/// Events that can trigger lifecycle state transitions
///
/// These mirror the two state-changing host callbacks: visibility changes
/// produce `Shown`/`Hidden`, ambient mode changes produce
/// `EnterAmbient`/`ExitAmbient`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LifecycleEvent {
    /// Watch face became visible
    Shown,
    /// Watch face was hidden
    Hidden,
    /// Display dropped into low-power ambient rendering
    EnterAmbient,
    /// Display returned to interactive rendering
    ExitAmbient,
}

impl LifecycleEvent {
    /// Check if this event comes from a visibility callback
    pub fn is_visibility_event(&self) -> bool {
        matches!(self, LifecycleEvent::Shown | LifecycleEvent::Hidden)
    }

    /// Check if this event comes from an ambient mode callback
    pub fn is_ambient_event(&self) -> bool {
        matches!(
            self,
            LifecycleEvent::EnterAmbient | LifecycleEvent::ExitAmbient
        )
    }

    /// Build the event for a visibility callback
    pub fn from_visibility(visible: bool) -> Self {
        if visible {
            LifecycleEvent::Shown
        } else {
            LifecycleEvent::Hidden
        }
    }

    /// Build the event for an ambient mode callback
    pub fn from_ambient(ambient: bool) -> Self {
        if ambient {
            LifecycleEvent::EnterAmbient
        } else {
            LifecycleEvent::ExitAmbient
        }
    }
}

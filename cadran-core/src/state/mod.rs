//! Lifecycle state machine
//!
//! The watch face is a function of the current lifecycle state and the
//! callbacks the host delivers.

pub mod events;
pub mod machine;

pub use events::LifecycleEvent;
pub use machine::FaceState;

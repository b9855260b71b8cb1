//! Host capability traits
//!
//! These traits define the interface between the engine and the hosting
//! firmware: the callbacks the engine makes into the host, the wall clock,
//! and the draw surface.

pub mod canvas;
pub mod clock;
pub mod host;

pub use canvas::{Canvas, DrawError};
pub use clock::Clock;
pub use host::{BackgroundVisibility, FaceStyle, PeekMode, WatchHost};

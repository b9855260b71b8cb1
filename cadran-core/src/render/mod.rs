//! Rendering types
//!
//! Background bitmap handling, the scaled-background cache, and the text
//! paint configuration used for the time readout.

pub mod bitmap;
pub mod paint;

pub use bitmap::{AssetError, Bitmap, ScaledBackground};
pub use paint::{TextAlign, TextPaint};

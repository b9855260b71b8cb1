//! Board-agnostic watch face engine for the Cadran firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Host capability traits (host callbacks, clock, draw surface)
//! - Lifecycle state machine (visibility and ambient mode)
//! - Background bitmap handling and the scaled-background cache
//! - The engine itself: lifecycle handlers and the draw routine
//!
//! The hosting firmware owns one [`engine::Engine`] per active watch face
//! session and drives it through lifecycle callbacks; the engine never
//! schedules anything itself.

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod engine;
pub mod render;
pub mod state;
pub mod traits;

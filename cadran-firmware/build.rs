//! Build script for cadran-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Stamps the build-time UTC epoch that seeds the wall clock
//! - Validates the background asset dimensions

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

/// Background asset dimensions; keep in sync with tasks/controller.rs
const BACKGROUND_WIDTH: usize = 64;
const BACKGROUND_HEIGHT: usize = 64;

fn main() {
    setup_linker();
    stamp_build_time();
    validate_background();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Write the current UTC epoch into utc.rs
///
/// The board has no backup-powered RTC; the firmware clock starts at the
/// build timestamp and advances with the monotonic timer.
fn stamp_build_time() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    File::create(out_dir.join("utc.rs"))
        .unwrap()
        .write_fmt(format_args!(
            "const UTC_TIME: i64 = {};\n",
            chrono::Utc::now().timestamp()
        ))
        .unwrap();
}

/// Check that the background asset matches its declared dimensions
fn validate_background() {
    println!("cargo:rerun-if-changed=assets/background.raw");

    let len = fs::metadata("assets/background.raw")
        .expect("assets/background.raw missing")
        .len() as usize;
    let expected = BACKGROUND_WIDTH * BACKGROUND_HEIGHT * 2;
    if len != expected {
        panic!(
            "assets/background.raw: expected {} bytes ({}x{} RGB565), found {}",
            expected, BACKGROUND_WIDTH, BACKGROUND_HEIGHT, len
        );
    }
}

//! Cadran - Digital watch face firmware
//!
//! Reference host for the cadran-core engine, targeting an RP2040 with a
//! 240x240 ST7789 panel (Waveshare Pico-LCD-1.3 pinout). The host owns the
//! engine and drives it through lifecycle callbacks; three user buttons
//! stand in for the platform signals a watch would deliver (ambient mode,
//! visibility, timezone broadcast).

#![no_std]
#![no_main]

extern crate alloc;

use defmt::{info, unwrap};
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Pull};
use embedded_alloc::LlffHeap as Heap;
use {defmt_rtt as _, panic_probe as _};

mod channels;
mod clock;
mod display;
mod host;
mod tasks;

// Heap allocator for the scaled background bitmap
#[global_allocator]
static HEAP: Heap = Heap::empty();

// Heap size: the source asset plus one full-screen scaled copy, with headroom
const HEAP_SIZE: usize = 160 * 1024;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Cadran firmware starting...");

    init_heap();

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Waveshare Pico-LCD-1.3: ST7789 on SPI1, three of the four user keys
    let lcd = display::setup_display(
        p.SPI1, p.PIN_10, p.PIN_11, p.PIN_9, p.PIN_8, p.PIN_12, p.PIN_13,
    );

    let ambient_btn = Input::new(p.PIN_15, Pull::Up);
    let visibility_btn = Input::new(p.PIN_17, Pull::Up);
    let timezone_btn = Input::new(p.PIN_19, Pull::Up);

    unwrap!(spawner.spawn(tasks::controller::controller_task(lcd)));
    unwrap!(spawner.spawn(tasks::input::input_task(
        ambient_btn,
        visibility_btn,
        timezone_btn
    )));
    unwrap!(spawner.spawn(tasks::tick::tick_task()));
}

/// Initialize the heap allocator
fn init_heap() {
    use core::mem::MaybeUninit;
    static mut HEAP_MEM: [MaybeUninit<u8>; HEAP_SIZE] = [MaybeUninit::uninit(); HEAP_SIZE];
    #[allow(static_mut_refs)]
    unsafe {
        HEAP.init(HEAP_MEM.as_ptr() as usize, HEAP_SIZE)
    }
}

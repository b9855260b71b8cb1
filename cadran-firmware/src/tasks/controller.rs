//! Main controller task
//!
//! Owns the watch face engine and plays host: delivers lifecycle callbacks
//! in the required order (creation, property discovery, visibility, ticks),
//! forwards button actions, and repaints on engine request.

use core::sync::atomic::Ordering;

use defmt::{debug, info, warn};
use embassy_futures::select::{select3, Either3};
use embedded_graphics::geometry::Size;

use cadran_core::engine::{DeviceProperties, Engine};

use crate::channels::{InputAction, INPUT_CHANNEL, REDRAW};
use crate::clock::SystemClock;
use crate::display::{DisplayCanvas, FaceDisplay, DISPLAY_HEIGHT, DISPLAY_WIDTH};
use crate::host::FirmwareHost;
use crate::tasks::tick::{FAST_TICK, TICK_SIGNAL};

/// Background asset, big-endian RGB565; dimensions checked by build.rs
static BACKGROUND: &[u8] = include_bytes!("../../assets/background.raw");
const BACKGROUND_WIDTH: u32 = 64;
const BACKGROUND_HEIGHT: u32 = 64;

/// Timezone offset until the first broadcast arrives (CET)
const DEFAULT_TZ_OFFSET_SECS: i32 = 3_600;

/// The ST7789 keeps only one bit per color channel in idle mode, so the
/// face drops anti-aliasing while ambient.
const LOW_BIT_AMBIENT: bool = true;

/// Controller task - main coordination loop
#[embassy_executor::task]
pub async fn controller_task(mut lcd: FaceDisplay) {
    info!("Controller task started");

    let mut host = FirmwareHost::new();
    let mut engine = match Engine::new(
        &mut host,
        SystemClock::new(),
        BACKGROUND,
        Size::new(BACKGROUND_WIDTH, BACKGROUND_HEIGHT),
        DEFAULT_TZ_OFFSET_SECS,
    ) {
        Ok(engine) => engine,
        Err(err) => {
            // Fatal to the session: there is nothing sensible to render
            defmt::panic!("background asset rejected: {}", err);
        }
    };

    engine.on_properties_discovered(DeviceProperties {
        low_bit_ambient: LOW_BIT_AMBIENT,
    });
    info!("low-bit ambient = {}", LOW_BIT_AMBIENT);

    // The face starts shown; this also establishes the timezone feed
    engine.on_visibility_changed(&mut host, true);
    FAST_TICK.store(engine.timer_should_run(), Ordering::Relaxed);
    host.request_redraw();

    let mut tz_offset = DEFAULT_TZ_OFFSET_SECS;

    loop {
        match select3(
            INPUT_CHANNEL.receive(),
            TICK_SIGNAL.wait(),
            REDRAW.wait(),
        )
        .await
        {
            Either3::First(action) => {
                debug!("input: {}", action);
                match action {
                    InputAction::ToggleAmbient => {
                        let ambient = !engine.is_ambient();
                        info!("ambient = {}", ambient);
                        engine.on_ambient_mode_changed(&mut host, ambient);
                    }
                    InputAction::ToggleVisibility => {
                        let visible = !engine.state().is_visible();
                        info!("visible = {}", visible);
                        engine.on_visibility_changed(&mut host, visible);
                        if visible {
                            host.request_redraw();
                        }
                    }
                    InputAction::BumpTimezone => {
                        tz_offset = (tz_offset + 3_600) % (24 * 3_600);
                        if host.timezone_feed_enabled() {
                            info!("timezone broadcast: offset = {}s", tz_offset);
                            engine.on_timezone_changed(tz_offset);
                            host.request_redraw();
                        }
                    }
                }
                FAST_TICK.store(engine.timer_should_run(), Ordering::Relaxed);
            }

            Either3::Second(()) => {
                debug!("tick, ambient = {}", engine.is_ambient());
                engine.on_time_tick(&mut host);
            }

            Either3::Third(()) => {
                if engine.state().is_visible() {
                    let mut canvas = DisplayCanvas::new(&mut lcd);
                    if let Err(err) =
                        engine.on_draw(&mut canvas, Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT))
                    {
                        warn!("draw failed: {}", err);
                    }
                }
            }
        }
    }
}

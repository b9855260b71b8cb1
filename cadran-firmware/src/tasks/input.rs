//! Input task
//!
//! Translates the three user keys into controller actions. On a watch
//! these arrive as platform callbacks; on the dev board the keys stand in
//! for them.

use defmt::info;
use embassy_futures::select::{select3, Either3};
use embassy_rp::gpio::Input;
use embassy_time::Timer;

use crate::channels::{InputAction, INPUT_CHANNEL};

/// Hold-off after any press; the keys are not debounced in hardware
const DEBOUNCE_MS: u64 = 200;

#[embassy_executor::task]
pub async fn input_task(
    mut ambient_btn: Input<'static>,
    mut visibility_btn: Input<'static>,
    mut timezone_btn: Input<'static>,
) {
    info!("Input task started");

    loop {
        let action = match select3(
            ambient_btn.wait_for_falling_edge(),
            visibility_btn.wait_for_falling_edge(),
            timezone_btn.wait_for_falling_edge(),
        )
        .await
        {
            Either3::First(()) => InputAction::ToggleAmbient,
            Either3::Second(()) => InputAction::ToggleVisibility,
            Either3::Third(()) => InputAction::BumpTimezone,
        };

        INPUT_CHANNEL.send(action).await;
        Timer::after_millis(DEBOUNCE_MS).await;
    }
}

//! Watch face engine
//!
//! One engine instance exists per active watch face session, owned and
//! driven by the host. The host must call [`Engine::new`] once before any
//! draw, deliver `on_properties_discovered` early, and may deliver the
//! remaining callbacks any number of times afterwards. Everything runs on
//! the host's single event thread; the engine does no locking and no
//! scheduling of its own.

use chrono::{NaiveDateTime, TimeDelta, Timelike};
use core::fmt::Write;
use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use heapless::String;

use crate::render::bitmap::{AssetError, Bitmap, ScaledBackground};
use crate::render::paint::TextPaint;
use crate::state::{FaceState, LifecycleEvent};
use crate::traits::canvas::{Canvas, DrawError};
use crate::traits::clock::Clock;
use crate::traits::host::{FaceStyle, WatchHost};

/// Pixels the time readout sits above the face center
pub const TIME_TEXT_RAISE: i32 = 50;

/// Redraw cadence while visible and interactive
pub const INTERACTIVE_UPDATE_SECS: u64 = 1;

/// Minimum redraw cadence the host must provide in every mode
pub const AMBIENT_UPDATE_SECS: u64 = 60;

/// Display capabilities reported by the host after property discovery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceProperties {
    /// Display drops color depth in ambient mode; anti-aliased text would
    /// show blending artifacts there
    pub low_bit_ambient: bool,
}

/// Format a wall-clock time as the zero-padded 24-hour readout
///
/// Always exactly `"HH : MM"`; no seconds, no AM/PM marker.
pub fn format_time(time: NaiveDateTime) -> String<8> {
    let mut out = String::new();
    // Infallible: the readout is 7 bytes
    let _ = write!(out, "{:02} : {:02}", time.hour(), time.minute());
    out
}

/// Stateful watch face renderer
pub struct Engine<C: Clock> {
    clock: C,
    state: FaceState,
    /// Last ambient mode the host reported; kept separately from the
    /// lifecycle state so a report delivered before the first visibility
    /// callback is not lost
    ambient: bool,
    low_bit_ambient: bool,
    paint: TextPaint,
    background: Bitmap,
    scaled: ScaledBackground,
    current_time: NaiveDateTime,
    tz_offset_secs: i32,
    timezone_subscribed: bool,
}

impl<C: Clock> Engine<C> {
    /// Create the engine for a new session
    ///
    /// Decodes the background asset, configures the time paint, and asks
    /// the host to suppress its own chrome (short peek cards, no system
    /// time overlay). A bad asset is fatal to the session and propagates
    /// to the host.
    pub fn new<H: WatchHost>(
        host: &mut H,
        clock: C,
        asset: &[u8],
        asset_size: Size,
        tz_offset_secs: i32,
    ) -> Result<Self, AssetError> {
        let background = Bitmap::from_raw_rgb565(asset, asset_size.width, asset_size.height)?;

        host.configure_style(FaceStyle::default());

        let current_time = clock.now_utc() + TimeDelta::seconds(tz_offset_secs as i64);
        Ok(Self {
            clock,
            state: FaceState::Created,
            ambient: false,
            low_bit_ambient: false,
            paint: TextPaint::default(),
            background,
            scaled: ScaledBackground::new(),
            current_time,
            tz_offset_secs,
            timezone_subscribed: false,
        })
    }

    /// Host callback: device properties discovered
    ///
    /// Called once, early in the session. No draw side effect.
    pub fn on_properties_discovered(&mut self, props: DeviceProperties) {
        self.low_bit_ambient = props.low_bit_ambient;
    }

    /// Host callback: periodic time tick
    ///
    /// Delivered at least once per minute. Only requests a repaint; the
    /// draw routine resamples the clock itself.
    pub fn on_time_tick<H: WatchHost>(&mut self, host: &mut H) {
        host.request_redraw();
    }

    /// Host callback: display entered or left ambient mode
    pub fn on_ambient_mode_changed<H: WatchHost>(&mut self, host: &mut H, ambient: bool) {
        self.ambient = ambient;
        self.state = self.state.transition(LifecycleEvent::from_ambient(ambient));

        if self.low_bit_ambient {
            self.paint.anti_alias = !ambient;
        }

        host.request_redraw();
    }

    /// Host callback: watch face shown or hidden
    ///
    /// This is the sole gate on the timezone subscription. On show, the
    /// subscription is (idempotently) established and the displayed time
    /// reset to now in the device's current zone; on hide it is
    /// (idempotently) dropped.
    pub fn on_visibility_changed<H: WatchHost>(&mut self, host: &mut H, visible: bool) {
        self.state = self
            .state
            .transition(LifecycleEvent::from_visibility(visible));

        if visible {
            if self.ambient {
                self.state = self.state.transition(LifecycleEvent::EnterAmbient);
            }
            if !self.timezone_subscribed {
                host.subscribe_timezone();
                self.timezone_subscribed = true;
            }
            self.current_time = self.now_local();
        } else if self.timezone_subscribed {
            host.unsubscribe_timezone();
            self.timezone_subscribed = false;
        }
    }

    /// Host callback: timezone broadcast
    ///
    /// Ignored while the face is hidden (the subscription is dropped then;
    /// a host delivering anyway gets a no-op).
    pub fn on_timezone_changed(&mut self, offset_secs: i32) {
        if !self.timezone_subscribed {
            return;
        }
        self.tz_offset_secs = offset_secs;
        self.current_time = self.now_local();
    }

    /// Host callback: repaint the face
    ///
    /// Samples the clock (the only place display time comes from), formats
    /// the readout, refreshes the scaled background if the canvas
    /// dimensions changed, and paints background plus centered time text.
    pub fn on_draw<V: Canvas>(&mut self, canvas: &mut V, bounds: Size) -> Result<(), DrawError> {
        self.current_time = self.now_local();
        let text = format_time(self.current_time);

        let background = self.scaled.get(&self.background, bounds);

        canvas.fill(Rgb565::BLACK)?;
        canvas.blit(background, Point::zero())?;

        let center_x = (bounds.width / 2) as i32;
        let center_y = (bounds.height / 2) as i32;
        canvas.draw_text(
            &text,
            Point::new(center_x, center_y - TIME_TEXT_RAISE),
            &self.paint,
        )?;

        Ok(())
    }

    /// Current lifecycle state
    pub fn state(&self) -> FaceState {
        self.state
    }

    /// Whether the host should run the fast interactive redraw timer
    pub fn timer_should_run(&self) -> bool {
        self.state.timer_should_run()
    }

    /// Last ambient mode the host reported, visible or not
    pub fn is_ambient(&self) -> bool {
        self.ambient
    }

    /// Time paint currently in effect
    pub fn paint(&self) -> &TextPaint {
        &self.paint
    }

    /// Last time shown on the face
    pub fn current_time(&self) -> NaiveDateTime {
        self.current_time
    }

    /// Whether the timezone subscription is currently established
    pub fn timezone_subscribed(&self) -> bool {
        self.timezone_subscribed
    }

    /// Number of background resize passes so far (diagnostic)
    pub fn background_rebuilds(&self) -> u32 {
        self.scaled.rebuilds()
    }

    fn now_local(&self) -> NaiveDateTime {
        self.clock.now_utc() + TimeDelta::seconds(self.tz_offset_secs as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::string::{String as StdString, ToString};
    use alloc::vec::Vec;
    use chrono::NaiveDate;
    use core::cell::Cell;
    use proptest::prelude::*;

    use crate::traits::host::{BackgroundVisibility, PeekMode};

    #[derive(Default)]
    struct MockHost {
        styles: Vec<FaceStyle>,
        redraws: u32,
        subscribes: u32,
        unsubscribes: u32,
    }

    impl WatchHost for MockHost {
        fn configure_style(&mut self, style: FaceStyle) {
            self.styles.push(style);
        }

        fn request_redraw(&mut self) {
            self.redraws += 1;
        }

        fn subscribe_timezone(&mut self) {
            self.subscribes += 1;
        }

        fn unsubscribe_timezone(&mut self) {
            self.unsubscribes += 1;
        }
    }

    #[derive(Clone)]
    struct TestClock(Rc<Cell<NaiveDateTime>>);

    impl TestClock {
        fn at(h: u32, m: u32, s: u32) -> Self {
            Self(Rc::new(Cell::new(utc(h, m, s))))
        }

        fn set(&self, time: NaiveDateTime) {
            self.0.set(time);
        }
    }

    impl Clock for TestClock {
        fn now_utc(&self) -> NaiveDateTime {
            self.0.get()
        }
    }

    fn utc(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 3)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Op {
        Fill(Rgb565),
        Blit { size: Size, origin: Point },
        Text { text: StdString, anchor: Point },
    }

    #[derive(Default)]
    struct RecordingCanvas {
        ops: Vec<Op>,
    }

    impl Canvas for RecordingCanvas {
        fn fill(&mut self, color: Rgb565) -> Result<(), DrawError> {
            self.ops.push(Op::Fill(color));
            Ok(())
        }

        fn blit(&mut self, bitmap: &Bitmap, origin: Point) -> Result<(), DrawError> {
            self.ops.push(Op::Blit {
                size: bitmap.size(),
                origin,
            });
            Ok(())
        }

        fn draw_text(
            &mut self,
            text: &str,
            anchor: Point,
            _paint: &TextPaint,
        ) -> Result<(), DrawError> {
            self.ops.push(Op::Text {
                text: text.to_string(),
                anchor,
            });
            Ok(())
        }
    }

    /// 8x8 black asset, big-endian RGB565
    const ASSET: [u8; 8 * 8 * 2] = [0u8; 8 * 8 * 2];

    fn engine_at(host: &mut MockHost, clock: TestClock) -> Engine<TestClock> {
        Engine::new(host, clock, &ASSET, Size::new(8, 8), 0).unwrap()
    }

    #[test]
    fn test_new_configures_chrome_suppression() {
        let mut host = MockHost::default();
        let _engine = engine_at(&mut host, TestClock::at(10, 0, 0));

        assert_eq!(
            host.styles,
            [FaceStyle {
                peek_mode: PeekMode::Short,
                background_visibility: BackgroundVisibility::Interruptive,
                show_system_time: false,
            }]
        );
    }

    #[test]
    fn test_new_propagates_bad_asset() {
        let mut host = MockHost::default();
        let result = Engine::new(
            &mut host,
            TestClock::at(10, 0, 0),
            &ASSET,
            Size::new(16, 16),
            0,
        );
        assert_eq!(result.err(), Some(AssetError::SizeMismatch));
    }

    #[test]
    fn test_time_tick_only_requests_redraw() {
        let mut host = MockHost::default();
        let mut engine = engine_at(&mut host, TestClock::at(10, 0, 0));

        engine.on_time_tick(&mut host);
        engine.on_time_tick(&mut host);

        assert_eq!(host.redraws, 2);
        assert_eq!(host.subscribes, 0);
    }

    #[test]
    fn test_ambient_toggles_anti_alias_on_low_bit_displays() {
        let mut host = MockHost::default();
        let mut engine = engine_at(&mut host, TestClock::at(10, 0, 0));
        engine.on_properties_discovered(DeviceProperties {
            low_bit_ambient: true,
        });

        assert!(engine.paint().anti_alias);

        engine.on_ambient_mode_changed(&mut host, true);
        assert!(!engine.paint().anti_alias);

        engine.on_ambient_mode_changed(&mut host, false);
        assert!(engine.paint().anti_alias);

        // Each mode change requests a repaint
        assert_eq!(host.redraws, 2);
    }

    #[test]
    fn test_ambient_leaves_anti_alias_alone_on_full_color_displays() {
        let mut host = MockHost::default();
        let mut engine = engine_at(&mut host, TestClock::at(10, 0, 0));
        engine.on_properties_discovered(DeviceProperties {
            low_bit_ambient: false,
        });

        engine.on_ambient_mode_changed(&mut host, true);
        assert!(engine.paint().anti_alias);
        engine.on_ambient_mode_changed(&mut host, false);
        assert!(engine.paint().anti_alias);
    }

    #[test]
    fn test_subscription_follows_visibility_idempotently() {
        let mut host = MockHost::default();
        let mut engine = engine_at(&mut host, TestClock::at(10, 0, 0));

        // Hide before ever showing: no unsubscribe
        engine.on_visibility_changed(&mut host, false);
        assert_eq!(host.unsubscribes, 0);

        // Double show: one subscribe
        engine.on_visibility_changed(&mut host, true);
        engine.on_visibility_changed(&mut host, true);
        assert_eq!(host.subscribes, 1);
        assert!(engine.timezone_subscribed());

        // Double hide: one unsubscribe
        engine.on_visibility_changed(&mut host, false);
        engine.on_visibility_changed(&mut host, false);
        assert_eq!(host.unsubscribes, 1);
        assert!(!engine.timezone_subscribed());
    }

    #[test]
    fn test_lifecycle_state_tracking() {
        let mut host = MockHost::default();
        let mut engine = engine_at(&mut host, TestClock::at(10, 0, 0));

        assert_eq!(engine.state(), FaceState::Created);

        engine.on_visibility_changed(&mut host, true);
        assert_eq!(engine.state(), FaceState::VisibleInteractive);
        assert!(engine.timer_should_run());

        engine.on_ambient_mode_changed(&mut host, true);
        assert_eq!(engine.state(), FaceState::VisibleAmbient);
        assert!(!engine.timer_should_run());

        engine.on_visibility_changed(&mut host, false);
        assert_eq!(engine.state(), FaceState::Invisible);
    }

    #[test]
    fn test_ambient_report_before_first_show_is_kept() {
        let mut host = MockHost::default();
        let mut engine = engine_at(&mut host, TestClock::at(10, 0, 0));

        engine.on_ambient_mode_changed(&mut host, true);
        engine.on_visibility_changed(&mut host, true);
        assert_eq!(engine.state(), FaceState::VisibleAmbient);
    }

    #[test]
    fn test_draw_paints_background_and_centered_time() {
        let mut host = MockHost::default();
        let clock = TestClock::at(12, 34, 56);
        let mut engine = engine_at(&mut host, clock);
        engine.on_visibility_changed(&mut host, true);

        let mut canvas = RecordingCanvas::default();
        engine.on_draw(&mut canvas, Size::new(400, 400)).unwrap();

        assert_eq!(
            canvas.ops,
            [
                Op::Fill(Rgb565::BLACK),
                Op::Blit {
                    size: Size::new(400, 400),
                    origin: Point::zero(),
                },
                Op::Text {
                    text: "12 : 34".to_string(),
                    anchor: Point::new(200, 150),
                },
            ]
        );
    }

    #[test]
    fn test_draw_resamples_clock_every_cycle() {
        let mut host = MockHost::default();
        let clock = TestClock::at(8, 15, 0);
        let mut engine = engine_at(&mut host, clock.clone());

        let mut canvas = RecordingCanvas::default();
        engine.on_draw(&mut canvas, Size::new(240, 240)).unwrap();
        assert_eq!(engine.current_time(), utc(8, 15, 0));

        clock.set(utc(8, 16, 30));
        engine.on_draw(&mut canvas, Size::new(240, 240)).unwrap();
        assert_eq!(engine.current_time(), utc(8, 16, 30));
    }

    #[test]
    fn test_draw_rescales_background_only_on_size_change() {
        let mut host = MockHost::default();
        let mut engine = engine_at(&mut host, TestClock::at(10, 0, 0));
        let mut canvas = RecordingCanvas::default();

        for _ in 0..5 {
            engine.on_draw(&mut canvas, Size::new(240, 240)).unwrap();
        }
        assert_eq!(engine.background_rebuilds(), 1);

        engine.on_draw(&mut canvas, Size::new(400, 400)).unwrap();
        assert_eq!(engine.background_rebuilds(), 2);

        engine.on_draw(&mut canvas, Size::new(400, 400)).unwrap();
        assert_eq!(engine.background_rebuilds(), 2);
    }

    #[test]
    fn test_timezone_broadcast_inert_while_hidden() {
        let mut host = MockHost::default();
        let clock = TestClock::at(10, 0, 0);
        let mut engine = engine_at(&mut host, clock);

        engine.on_visibility_changed(&mut host, true);
        engine.on_visibility_changed(&mut host, false);
        let before = engine.current_time();

        engine.on_timezone_changed(3600);
        assert_eq!(engine.current_time(), before);

        // Shown again: broadcasts take effect once more
        engine.on_visibility_changed(&mut host, true);
        engine.on_timezone_changed(3600);
        assert_eq!(engine.current_time(), utc(11, 0, 0));
    }

    #[test]
    fn test_timezone_change_shifts_displayed_time() {
        let mut host = MockHost::default();
        let mut engine = engine_at(&mut host, TestClock::at(23, 45, 0));
        engine.on_visibility_changed(&mut host, true);

        engine.on_timezone_changed(1800);

        let mut canvas = RecordingCanvas::default();
        engine.on_draw(&mut canvas, Size::new(240, 240)).unwrap();
        assert!(canvas.ops.contains(&Op::Text {
            text: "00 : 15".to_string(),
            anchor: Point::new(120, 70),
        }));
    }

    proptest! {
        #[test]
        fn formats_zero_padded_24h(h in 0u32..24, m in 0u32..60, s in 0u32..60) {
            let text = format_time(utc(h, m, s));
            prop_assert_eq!(text.len(), 7);
            let bytes = text.as_bytes();
            prop_assert_eq!(&bytes[2..5], b" : ");
            prop_assert!(bytes[0].is_ascii_digit() && bytes[1].is_ascii_digit());
            prop_assert!(bytes[5].is_ascii_digit() && bytes[6].is_ascii_digit());
            let hour = (bytes[0] - b'0') * 10 + (bytes[1] - b'0');
            let minute = (bytes[5] - b'0') * 10 + (bytes[6] - b'0');
            prop_assert_eq!(hour as u32, h);
            prop_assert_eq!(minute as u32, m);
        }
    }
}
